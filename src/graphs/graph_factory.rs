use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::{FromStr, SplitWhitespace},
};

use indicatif::ProgressIterator;
use tracing::{info, instrument};

use super::{adjacency_vec_graph::AdjacencyVecGraph, Graph, Vertex, Weight, WeightedEdge};
use crate::{error::ReadError, utility::get_progressspinner};

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Reads a graph, choosing the format by file extension: `.fmi`, `.gr`
    /// (DIMACS) or `.bincode`.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn from_file(path: &Path) -> Result<AdjacencyVecGraph, ReadError> {
        let extension = path.extension().and_then(|extension| extension.to_str());
        let graph = match extension {
            Some("fmi") => Self::from_fmi_reader(open(path)?)?,
            Some("gr") => Self::from_gr_reader(open(path)?)?,
            Some("bincode") => {
                let spinner = get_progressspinner("Reading graph");
                let graph = bincode::deserialize_from(open(path)?);
                spinner.finish_and_clear();
                graph?
            }
            _ => return Err(ReadError::UnsupportedExtension(path.to_path_buf())),
        };

        info!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            "graph loaded"
        );
        Ok(graph)
    }

    pub fn to_bincode_file(graph: &AdjacencyVecGraph, path: &Path) -> Result<(), ReadError> {
        let file = File::create(path).map_err(|source| ReadError::open(path, source))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, graph)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads the fmi format: optional `#` comment lines, the number of
    /// vertices, the number of edges, one line per vertex (ignored) and one
    /// line per edge starting with `tail head weight`.
    pub fn from_fmi_reader<R: BufRead>(reader: R) -> Result<AdjacencyVecGraph, ReadError> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line));

        let mut counts = Vec::with_capacity(2);
        let mut last_line = 0;
        while counts.len() < 2 {
            let Some((number, line)) = lines.next() else {
                return Err(ReadError::parse(last_line, "missing vertex or edge count"));
            };
            last_line = number;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let count: u32 = line
                .parse()
                .map_err(|_| ReadError::parse(number, "unable to parse count"))?;
            counts.push(count);
        }
        let (number_of_vertices, number_of_edges) = (counts[0], counts[1]);

        let mut graph = AdjacencyVecGraph::with_vertices(number_of_vertices);

        for _ in 0..number_of_vertices {
            let Some((number, line)) = lines.next() else {
                return Err(ReadError::parse(last_line, "missing vertex line"));
            };
            last_line = number;
            line?;
        }

        let mut edges_read = 0;
        for (number, line) in lines
            .by_ref()
            .take(number_of_edges as usize)
            .progress_count(number_of_edges as u64)
        {
            // srcIDX trgIDX cost type maxspeed
            let line = line?;
            let mut values = line.split_whitespace();
            let tail: Vertex = parse_value(&mut values, number, "tail")?;
            let head: Vertex = parse_value(&mut values, number, "head")?;
            let weight: Weight = parse_value(&mut values, number, "weight")?;
            if tail.max(head) >= number_of_vertices {
                return Err(ReadError::parse(number, "vertex id out of range"));
            }
            graph.set_edge(&WeightedEdge::new(tail, head, weight)?);
            edges_read += 1;
            last_line = number;
        }

        if edges_read < number_of_edges {
            return Err(ReadError::parse(
                last_line,
                format!("expected {} edges, found {}", number_of_edges, edges_read),
            ));
        }

        Ok(graph)
    }

    /// Reads the DIMACS shortest path format. Only `p` and `a` lines are
    /// considered; DIMACS vertex ids start at 1 and are shifted to 0. Arcs
    /// must come after the `p` line and stay within its vertex count.
    pub fn from_gr_reader<R: BufRead>(reader: R) -> Result<AdjacencyVecGraph, ReadError> {
        let mut graph = AdjacencyVecGraph::new();
        let mut number_of_vertices = None;

        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line?;
            let mut values = line.split_whitespace();
            match values.next() {
                Some("p") => {
                    values.next();
                    let count: u32 = parse_value(&mut values, number, "number of vertices")?;
                    graph = AdjacencyVecGraph::with_vertices(count);
                    number_of_vertices = Some(count);
                }
                Some("a") => {
                    let Some(number_of_vertices) = number_of_vertices else {
                        return Err(ReadError::parse(number, "arc before problem line"));
                    };
                    let tail: Vertex = parse_value(&mut values, number, "tail")?;
                    let head: Vertex = parse_value(&mut values, number, "head")?;
                    let weight: Weight = parse_value(&mut values, number, "weight")?;
                    if tail == 0 || head == 0 {
                        return Err(ReadError::parse(number, "DIMACS vertex ids start at 1"));
                    }
                    if tail.max(head) > number_of_vertices {
                        return Err(ReadError::parse(number, "vertex id out of range"));
                    }
                    graph.set_edge(&WeightedEdge::new(tail - 1, head - 1, weight)?);
                }
                _ => {}
            }
        }

        Ok(graph)
    }
}

fn open(path: &Path) -> Result<BufReader<File>, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::open(path, source))?;
    Ok(BufReader::new(file))
}

fn parse_value<T: FromStr>(
    values: &mut SplitWhitespace,
    line: usize,
    name: &str,
) -> Result<T, ReadError> {
    values
        .next()
        .ok_or_else(|| ReadError::parse(line, format!("no {} found", name)))?
        .parse()
        .map_err(|_| ReadError::parse(line, format!("unable to parse {}", name)))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{error::GraphError, graphs::Edge};

    const SMALL_FMI: &str = "# a comment
# another comment

3
3
0 0 48.1 9.2 100
1 1 48.2 9.3 110
2 2 48.3 9.4 120
0 1 7 2 50
1 2 3 2 50
0 2 12 2 50
";

    #[test]
    fn reads_fmi() {
        let graph = GraphFactory::from_fmi_reader(Cursor::new(SMALL_FMI)).unwrap();

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.get_edge_weight(&Edge { tail: 1, head: 2 }), Some(3));
    }

    #[test]
    fn truncated_fmi_is_an_error() {
        let truncated = SMALL_FMI.lines().take(9).collect::<Vec<_>>().join("\n");
        let result = GraphFactory::from_fmi_reader(Cursor::new(truncated));

        assert!(matches!(result, Err(ReadError::Parse { .. })));
    }

    #[test]
    fn negative_fmi_weight_is_an_error() {
        let input = "2\n1\n0\n1\n0 1 -4\n";
        let result = GraphFactory::from_fmi_reader(Cursor::new(input));

        assert!(matches!(
            result,
            Err(ReadError::Graph(GraphError::InvalidWeight { weight: -4, .. }))
        ));
    }

    #[test]
    fn reads_dimacs() {
        let input = "c comment\np sp 4 2\na 1 2 5\na 2 3 1\n";
        let graph = GraphFactory::from_gr_reader(Cursor::new(input)).unwrap();

        assert_eq!(graph.number_of_vertices(), 4);
        assert_eq!(graph.get_edge_weight(&Edge { tail: 0, head: 1 }), Some(5));
        assert_eq!(graph.get_edge_weight(&Edge { tail: 1, head: 2 }), Some(1));
    }

    #[test]
    fn malformed_dimacs_line_names_the_line() {
        let input = "p sp 2 1\na 1 x 5\n";
        let result = GraphFactory::from_gr_reader(Cursor::new(input));

        assert!(matches!(result, Err(ReadError::Parse { line: 2, .. })));
    }

    #[test]
    fn dimacs_arc_outside_the_header_is_an_error() {
        let input = "p sp 3 1\na 1 4000000000 1\n";
        let result = GraphFactory::from_gr_reader(Cursor::new(input));
        assert!(matches!(result, Err(ReadError::Parse { line: 2, .. })));

        let input = "p sp 3 1\na 1 4 1\n";
        let result = GraphFactory::from_gr_reader(Cursor::new(input));
        assert!(matches!(result, Err(ReadError::Parse { line: 2, .. })));

        let input = "p sp 3 1\na 1 3 1\n";
        let graph = GraphFactory::from_gr_reader(Cursor::new(input)).unwrap();
        assert_eq!(graph.get_edge_weight(&Edge { tail: 0, head: 2 }), Some(1));
    }

    #[test]
    fn dimacs_arc_before_problem_line_is_an_error() {
        let input = "c comment\na 1 2 1\np sp 2 1\n";
        let result = GraphFactory::from_gr_reader(Cursor::new(input));

        assert!(matches!(result, Err(ReadError::Parse { line: 2, .. })));
    }

    #[test]
    fn bincode_round_trip_through_a_file() {
        let directory = tempfile::tempdir().unwrap();
        let fmi_path = directory.path().join("small.fmi");
        File::create(&fmi_path)
            .unwrap()
            .write_all(SMALL_FMI.as_bytes())
            .unwrap();

        let graph = GraphFactory::from_file(&fmi_path).unwrap();
        let bincode_path = directory.path().join("small.bincode");
        GraphFactory::to_bincode_file(&graph, &bincode_path).unwrap();
        let reloaded = GraphFactory::from_file(&bincode_path).unwrap();

        assert_eq!(reloaded.number_of_edges(), graph.number_of_edges());
        assert_eq!(
            reloaded.get_edge_weight(&Edge { tail: 0, head: 2 }),
            Some(12)
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let result = GraphFactory::from_file(Path::new("graph.txt"));
        assert!(matches!(result, Err(ReadError::UnsupportedExtension(_))));
    }
}
