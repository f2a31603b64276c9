//! Built-in sample graphs.

use postman_core::Graph;

/// A named edge list shipped with the CLI.
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    edges: &'static [(&'static str, &'static str, f64)],
}

impl Sample {
    /// Builds the sample as a graph with string node ids.
    pub fn graph(&self) -> postman_core::Result<Graph<String>> {
        Graph::from_edges(
            self.edges
                .iter()
                .map(|&(head, tail, weight)| (head.to_string(), tail.to_string(), weight)),
        )
    }
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "square",
        description: "Eulerian, simple square",
        edges: &[("1", "2", 1.0), ("2", "3", 1.0), ("3", "4", 1.0), ("4", "1", 1.0)],
    },
    Sample {
        name: "ice_cream",
        description: "Semi-Eulerian, two triangles",
        edges: &[
            ("1", "2", 4.0),
            ("1", "3", 3.0),
            ("1", "4", 5.0),
            ("2", "3", 3.0),
            ("3", "4", 5.0),
        ],
    },
    Sample {
        name: "sailboat",
        description: "Non-Eulerian, three triangles",
        edges: &[
            ("1", "2", 4.0),
            ("1", "3", 3.0),
            ("1", "5", 10.0),
            ("2", "3", 2.0),
            ("2", "4", 3.0),
            ("3", "4", 3.0),
            ("4", "5", 9.0),
        ],
    },
    Sample {
        name: "kite",
        description: "Semi-Eulerian, two triangles with a tail",
        edges: &[
            ("1", "2", 4.0),
            ("2", "3", 3.0),
            ("3", "4", 2.0),
            ("2", "4", 3.0),
            ("5", "4", 2.0),
            ("4", "1", 3.0),
        ],
    },
    Sample {
        name: "clover",
        description: "Eulerian, square with parallel edges",
        edges: &[
            ("1", "2", 1.0),
            ("1", "2", 2.0),
            ("2", "3", 1.0),
            ("2", "3", 2.0),
            ("3", "4", 1.0),
            ("3", "4", 2.0),
            ("4", "1", 1.0),
            ("4", "1", 2.0),
        ],
    },
    Sample {
        name: "north",
        description: "North of Chancellor Blvd. to the beaches",
        edges: &[
            ("A", "B", 10.0),
            ("B", "C", 1.0),
            ("B", "D", 10.0),
            ("D", "F", 1.0),
            ("D", "P", 10.0),
            ("F", "E", 1.0),
            ("F", "G", 1.0),
            ("G", "H", 5.0),
            ("G", "P", 10.0),
            ("H", "I", 2.0),
            ("H", "J", 3.0),
            ("J", "K", 2.0),
            ("I", "J", 2.0),
            ("I", "N", 10.0),
            ("J", "L", 10.0),
            ("L", "M", 1.0),
            ("L", "N", 4.0),
            ("N", "O", 1.0),
            ("N", "P", 2.0),
            ("P", "Q", 1.0),
        ],
    },
    Sample {
        name: "golf",
        description: "University Blvd. to Chancellor Blvd. (golf course)",
        edges: &[
            ("A", "B", 4.0),
            ("B", "C", 3.0),
            ("B", "G", 1.0),
            ("C", "D", 1.0),
            ("C", "E", 6.0),
            ("C", "F", 2.0),
            ("E", "F", 7.0),
            ("F", "G", 2.0),
            ("F", "I", 2.0),
            ("G", "H", 9.0),
            ("G", "I", 2.0),
            ("I", "J", 8.0),
            ("J", "K", 1.0),
            ("J", "N", 6.0),
            ("K", "L", 2.0),
            ("K", "M", 7.0),
        ],
    },
    Sample {
        name: "big_six",
        description: "Non-Eulerian with six odd nodes",
        edges: &[
            ("A", "B", 8.0),
            ("A", "E", 4.0),
            ("A", "H", 3.0),
            ("B", "C", 9.0),
            ("B", "G", 6.0),
            ("C", "D", 5.0),
            ("C", "F", 3.0),
            ("D", "E", 5.0),
            ("D", "F", 1.0),
            ("E", "F", 2.0),
            ("E", "G", 3.0),
            ("G", "H", 1.0),
        ],
    },
    Sample {
        name: "university",
        description: "North of University Ave. to the beaches",
        edges: &[
            ("A", "B", 4.0),
            ("B", "C", 3.0),
            ("C", "D", 1.0),
            ("B", "F", 1.0),
            ("C", "E", 2.0),
            ("C", "Z", 6.0),
            ("E", "G", 2.0),
            ("E", "F", 2.0),
            ("E", "Z", 7.0),
            ("F", "G", 2.0),
            ("F", "H", 9.0),
            ("G", "I", 8.0),
            ("I", "J", 1.0),
            ("I", "M", 7.0),
            ("J", "K", 2.0),
            ("J", "L", 8.0),
            ("L", "M", 4.0),
            ("L", "Q", 10.0),
            ("M", "N", 2.0),
            ("M", "P", 10.0),
            ("N", "O", 1.0),
            ("N", "T", 10.0),
            ("N", "W", 10.0),
            ("P", "Q", 2.0),
            ("P", "S", 2.0),
            ("Q", "R", 2.0),
            ("Q", "S", 3.0),
            ("S", "T", 5.0),
            ("T", "U", 1.0),
            ("U", "V", 1.0),
            ("U", "W", 1.0),
            ("W", "X", 10.0),
            ("X", "Y", 1.0),
            ("X", "Z", 10.0),
        ],
    },
];

/// Looks a sample up by name.
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.name == name)
}
