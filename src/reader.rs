//! Readers for the graph description format and puzzle inputs
//!
//! The graph description format is line based: `;`-prefixed section
//! headers, `#` comments, blank lines ignored. Puzzle readers adapt three
//! fixed competitive-programming inputs to the same data model.

use std::collections::HashMap;
use std::io::BufRead;

use trellis_core::error::{Result, TrellisError};
use trellis_core::graph::{Graph, VertexId};

/// Line iterator that strips comments and blanks and tracks line numbers
/// for error reporting.
struct LineSource {
    lines: std::vec::IntoIter<(usize, String)>,
    last_line: usize,
}

impl LineSource {
    fn new<R: BufRead>(input: R) -> Result<Self> {
        let mut lines = Vec::new();
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let content = match line.find('#') {
                Some(position) => &line[..position],
                None => line.as_str(),
            };
            let content = content.trim();
            if content.is_empty() {
                continue;
            }
            lines.push((index + 1, content.to_string()));
        }
        Ok(LineSource {
            lines: lines.into_iter(),
            last_line: 0,
        })
    }

    fn next(&mut self) -> Option<(usize, String)> {
        let item = self.lines.next();
        if let Some((number, _)) = &item {
            self.last_line = *number;
        }
        item
    }

    fn expect(&mut self, what: &str) -> Result<(usize, String)> {
        self.next().ok_or_else(|| {
            TrellisError::invalid_description(
                self.last_line + 1,
                format!("unexpected end of input, expected {}", what),
            )
        })
    }
}

fn parse_usize(token: &str, line: usize) -> Result<usize> {
    token.trim().parse().map_err(|_| {
        TrellisError::invalid_description(
            line,
            format!("expected a non-negative integer, got {:?}", token.trim()),
        )
    })
}

fn parse_i64(token: &str, line: usize) -> Result<i64> {
    token.trim().parse().map_err(|_| {
        TrellisError::invalid_description(
            line,
            format!("expected an integer, got {:?}", token.trim()),
        )
    })
}

fn check_vertex(vertex: VertexId, vertex_count: usize, line: usize) -> Result<VertexId> {
    if vertex >= vertex_count {
        return Err(TrellisError::invalid_description(
            line,
            format!("vertex {} out of range (graph has {})", vertex, vertex_count),
        ));
    }
    Ok(vertex)
}

/// Parse a graph description.
pub fn read_graph<R: BufRead>(input: R) -> Result<Graph> {
    let mut lines = LineSource::new(input)?;
    let mut description = String::new();
    let mut is_directed = true;
    let mut vertex_count = 0usize;
    let mut vertex_weights: Option<HashMap<VertexId, i64>> = None;
    let mut adjacency: Option<Vec<Vec<VertexId>>> = None;
    let mut matrix: Option<Vec<Vec<u32>>> = None;
    let mut edge_weights: Option<HashMap<(VertexId, VertexId), i64>> = None;

    while let Some((number, line)) = lines.next() {
        match line.as_str() {
            "; desc" => {
                description = lines.expect("a description")?.1;
            }
            "; isDirected" => {
                let value = lines.expect("a direction")?.1.to_lowercase();
                is_directed = value == "directed" || value == "true" || value == "1";
            }
            "; vertices" => {
                let (number, value) = lines.expect("a vertex count")?;
                vertex_count = parse_usize(&value, number)?;
            }
            "; vertex weights" => {
                let (number, value) = lines.expect("vertex weights")?;
                let weights = value
                    .split(',')
                    .map(|token| parse_i64(token, number))
                    .collect::<Result<Vec<i64>>>()?;
                if weights.len() != vertex_count {
                    return Err(TrellisError::length_mismatch(
                        "vertex weights",
                        vertex_count,
                        weights.len(),
                    ));
                }
                vertex_weights = Some(weights.into_iter().enumerate().collect());
            }
            "; adjacency list" => {
                matrix = None;
                adjacency = Some(read_list_section(&mut lines, vertex_count)?);
            }
            "; adjacency matrix" => {
                adjacency = None;
                matrix = Some(read_matrix_section(&mut lines, vertex_count)?);
            }
            "; edge weights" => {
                matrix = None;
                let (list, weights) =
                    read_edge_weight_section(&mut lines, vertex_count, is_directed)?;
                adjacency = Some(list);
                edge_weights = Some(weights);
            }
            "; end" => break,
            _ => {
                return Err(TrellisError::invalid_description(
                    number,
                    format!("unknown section {:?}", line),
                ));
            }
        }
    }

    let mut graph = if let Some(adjacency) = adjacency {
        Graph::from_list(vertex_count, is_directed, adjacency)?
    } else if let Some(matrix) = matrix {
        Graph::from_matrix(vertex_count, is_directed, matrix)?
    } else {
        Graph::from_list(vertex_count, is_directed, vec![Vec::new(); vertex_count])?
    };
    graph = graph.with_description(description);
    if let Some(weights) = vertex_weights {
        graph = graph.with_vertex_weights(weights)?;
    }
    if let Some(weights) = edge_weights {
        graph = graph.with_edge_weights(weights)?;
    }
    Ok(graph)
}

fn read_list_section(lines: &mut LineSource, vertex_count: usize) -> Result<Vec<Vec<VertexId>>> {
    let mut list = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        let (number, value) = lines.expect("an adjacency row")?;
        if value.eq_ignore_ascii_case("none") {
            list.push(Vec::new());
            continue;
        }
        let row = value
            .split(',')
            .map(|token| {
                parse_usize(token, number)
                    .and_then(|vertex| check_vertex(vertex, vertex_count, number))
            })
            .collect::<Result<Vec<VertexId>>>()?;
        list.push(row);
    }
    Ok(list)
}

fn read_matrix_section(lines: &mut LineSource, vertex_count: usize) -> Result<Vec<Vec<u32>>> {
    let mut rows = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        let (number, value) = lines.expect("a matrix row")?;
        let row = value
            .split(',')
            .map(|token| parse_usize(token, number).map(|multiplicity| multiplicity as u32))
            .collect::<Result<Vec<u32>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

type EdgeSection = (Vec<Vec<VertexId>>, HashMap<(VertexId, VertexId), i64>);

fn read_edge_weight_section(
    lines: &mut LineSource,
    vertex_count: usize,
    is_directed: bool,
) -> Result<EdgeSection> {
    let (count_line, value) = lines.expect("an edge count")?;
    let edge_count = parse_usize(&value, count_line)?;
    let mut list: Vec<Vec<VertexId>> = vec![Vec::new(); vertex_count];
    let mut weights = HashMap::new();
    for _ in 0..edge_count {
        let (number, value) = lines.expect("an edge")?;
        let fields: Vec<&str> = value.split(',').map(str::trim).collect();
        if fields.len() < 3 {
            continue;
        }
        let from = check_vertex(parse_usize(fields[0], number)?, vertex_count, number)?;
        let to = check_vertex(parse_usize(fields[1], number)?, vertex_count, number)?;
        let weight = parse_i64(fields[2], number)?;
        list[from].push(to);
        weights.insert((from, to), weight);
        if !is_directed {
            list[to].push(from);
            weights.insert((to, from), weight);
        }
    }
    Ok((list, weights))
}

/// Bender episode 2: `N`, then `N` lines `room money exit1 exit2` where an
/// exit of `E` means the escape pod. The pod becomes the extra vertex `N`
/// with weight 0.
pub fn read_bender2<R: BufRead>(input: R) -> Result<Graph> {
    let mut lines = LineSource::new(input)?;
    let (number, value) = lines.expect("a room count")?;
    let room_count = parse_usize(&value, number)?;
    let vertex_count = room_count + 1;

    let mut list: Vec<Vec<VertexId>> = vec![Vec::new(); vertex_count];
    let mut weights: HashMap<VertexId, i64> = HashMap::new();
    for _ in 0..room_count {
        let (number, value) = lines.expect("a room line")?;
        let fields: Vec<&str> = value.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(TrellisError::invalid_description(
                number,
                "expected: room money exit1 exit2",
            ));
        }
        let room = check_vertex(parse_usize(fields[0], number)?, vertex_count, number)?;
        let money = parse_i64(fields[1], number)?;
        let first = exit_vertex(fields[2], room_count, vertex_count, number)?;
        let second = exit_vertex(fields[3], room_count, vertex_count, number)?;
        list[room].push(first);
        if second != first {
            list[room].push(second);
        }
        weights.insert(room, money);
    }
    weights.insert(room_count, 0);

    Graph::from_list(vertex_count, true, list)?
        .with_description("Bender episode 2 rooms")
        .with_vertex_weights(weights)
}

fn exit_vertex(
    token: &str,
    escape_pod: VertexId,
    vertex_count: usize,
    line: usize,
) -> Result<VertexId> {
    if token.eq_ignore_ascii_case("e") {
        Ok(escape_pod)
    } else {
        check_vertex(parse_usize(token, line)?, vertex_count, line)
    }
}

/// Plague Jr: `n`, then `n` undirected edges `x y`. The vertex count is
/// derived from the highest index seen.
pub fn read_plague_jr<R: BufRead>(input: R) -> Result<Graph> {
    let mut lines = LineSource::new(input)?;
    let (number, value) = lines.expect("an edge count")?;
    let edge_count = parse_usize(&value, number)?;

    let mut pairs = Vec::with_capacity(edge_count);
    let mut max_vertex = None;
    for _ in 0..edge_count {
        let (number, value) = lines.expect("an edge")?;
        let fields: Vec<&str> = value.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(TrellisError::invalid_description(number, "expected: x y"));
        }
        let x = parse_usize(fields[0], number)?;
        let y = parse_usize(fields[1], number)?;
        max_vertex = max_vertex.max(Some(x.max(y)));
        pairs.push((x, y));
    }

    let vertex_count = max_vertex.map_or(0, |max| max + 1);
    let mut list: Vec<Vec<VertexId>> = vec![Vec::new(); vertex_count];
    for (x, y) in pairs {
        list[x].push(y);
        list[y].push(x);
    }
    Ok(Graph::from_list(vertex_count, false, list)?
        .with_description("Plague Jr infection tree"))
}

/// A* exercise: `N E S G`, a line of `N` heuristic scores, then `E`
/// undirected weighted edges `x y cost`.
pub fn read_a_star_exercise<R: BufRead>(input: R) -> Result<Graph> {
    let mut lines = LineSource::new(input)?;
    let (number, value) = lines.expect("a header line")?;
    let fields: Vec<&str> = value.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(TrellisError::invalid_description(
            number,
            "expected: vertices edges start goal",
        ));
    }
    let vertex_count = parse_usize(fields[0], number)?;
    let edge_count = parse_usize(fields[1], number)?;
    let start = parse_usize(fields[2], number)?;
    let goal = parse_usize(fields[3], number)?;

    let (number, value) = lines.expect("heuristic scores")?;
    let heuristic = value
        .split_whitespace()
        .map(|token| parse_i64(token, number))
        .collect::<Result<Vec<i64>>>()?;

    let mut list: Vec<Vec<VertexId>> = vec![Vec::new(); vertex_count];
    let mut weights: HashMap<(VertexId, VertexId), i64> = HashMap::new();
    for _ in 0..edge_count {
        let (number, value) = lines.expect("an edge")?;
        let fields: Vec<&str> = value.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(TrellisError::invalid_description(number, "expected: x y cost"));
        }
        let x = check_vertex(parse_usize(fields[0], number)?, vertex_count, number)?;
        let y = check_vertex(parse_usize(fields[1], number)?, vertex_count, number)?;
        let cost = parse_i64(fields[2], number)?;
        list[x].push(y);
        list[y].push(x);
        weights.insert((x, y), cost);
        weights.insert((y, x), cost);
    }

    let mut graph = Graph::from_list(vertex_count, false, list)?
        .with_description("A* exercise")
        .with_edge_weights(weights)?
        .with_heuristic(heuristic)?;
    graph.set_endpoints(start, goal);
    Ok(graph)
}
