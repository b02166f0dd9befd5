use std::fmt::Debug;
use std::hash::Hash;
use std::io::{BufRead, Write};
use std::str::FromStr;

use rustc_hash::FxHashMap;
use strum::{Display, EnumString};
use tracing::{debug, warn};

use crate::{Distance, GraphError, LabeledGraph, ScriptError, shortest_connection, shortest_path};

/// Commands understood by the [`ScriptRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
pub enum Command {
    /// `CreateGraph <graph>`
    CreateGraph,
    /// `AddNode <graph> <node>`
    AddNode,
    /// `AddEdge <graph> <parent> <child> <label>`
    AddEdge,
    /// `ListNodes <graph>`
    ListNodes,
    /// `ListChildren <graph> <parent>`
    ListChildren,
    /// `FindPath <graph> <start> <end>`, underscores in node names stand for spaces.
    FindPath,
}

/// Edge label a [`ScriptRunner`] reads from scripts and searches routes with.
pub trait ScriptLabel: Debug + Clone + Ord + Hash {
    /// How nodes are called in the `FindPath` report, e.g. `unknown node A`.
    const NODE: &'static str;

    fn parse(value: &str) -> Result<Self, ScriptError>;

    fn describe(&self) -> String;

    /// Lines describing the route found from start to end, `None` if there is no route.
    fn route_report(
        graph: &LabeledGraph<String, Self>,
        start: &str,
        end: &str,
    ) -> Result<Option<Vec<String>>, ScriptError>;
}

/// Weighted graphs: routes have minimum total distance.
impl ScriptLabel for Distance {
    const NODE: &'static str = "node";

    fn parse(value: &str) -> Result<Self, ScriptError> {
        parse_distance(value)
    }

    fn describe(&self) -> String {
        format!("{self:.3}")
    }

    fn route_report(
        graph: &LabeledGraph<String, Self>,
        start: &str,
        end: &str,
    ) -> Result<Option<Vec<String>>, ScriptError> {
        let Some(route) = shortest_path(graph, &start.to_string(), &end.to_string())? else {
            return Ok(None);
        };

        let mut lines: Vec<_> = route
            .legs()
            .map(|(from, to, distance)| format!("{from} to {to} with weight {distance:.3}"))
            .collect();
        lines.push(format!("total cost: {:.3}", route.cost()));
        Ok(Some(lines))
    }
}

/// Textual labels, e.g. the comic books two characters appear in: routes have the fewest edges.
impl ScriptLabel for String {
    const NODE: &'static str = "character";

    fn parse(value: &str) -> Result<Self, ScriptError> {
        Ok(value.to_string())
    }

    fn describe(&self) -> String {
        self.clone()
    }

    fn route_report(
        graph: &LabeledGraph<String, Self>,
        start: &str,
        end: &str,
    ) -> Result<Option<Vec<String>>, ScriptError> {
        let connection = shortest_connection(graph, &start.to_string(), &end.to_string())?;

        Ok(connection.map(|links| {
            links
                .into_iter()
                .map(|link| format!("{} to {} via {}", link.from, link.to, link.label))
                .collect()
        }))
    }
}

/// Line oriented interpreter that builds named graphs command by command and reports the outcome
/// of each command to its output.
///
/// [`ScriptRunner::new`] runs scripts over graphs weighted by [`Distance`], and
/// [`ScriptRunner::connections`] over graphs with textual labels.
///
/// Blank lines and lines starting with `#` are echoed. A failing command reports
/// `Exception: <error>` and the script continues with the next line.
#[derive(Debug)]
pub struct ScriptRunner<W, L = Distance> {
    graphs: FxHashMap<String, LabeledGraph<String, L>>,
    output: W,
}

impl<W: Write> ScriptRunner<W> {
    pub fn new(output: W) -> Self {
        Self::with_output(output)
    }
}

impl<W: Write> ScriptRunner<W, String> {
    pub fn connections(output: W) -> Self {
        Self::with_output(output)
    }
}

impl<W: Write, L: ScriptLabel> ScriptRunner<W, L>
where
    ScriptError: From<GraphError<String, L>>,
{
    fn with_output(output: W) -> Self {
        Self {
            graphs: FxHashMap::default(),
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs every line of the script, only fails on I/O errors.
    pub fn run(&mut self, input: impl BufRead) -> Result<(), ScriptError> {
        for line in input.lines() {
            self.run_line(&line?)?;
            self.output.flush()?;
        }
        Ok(())
    }

    pub fn run_line(&mut self, line: &str) -> Result<(), ScriptError> {
        if line.trim().is_empty() || line.starts_with('#') {
            writeln!(self.output, "{line}")?;
            return Ok(());
        }

        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(());
        };
        let arguments: Vec<&str> = tokens.collect();

        let Ok(command) = Command::from_str(name) else {
            writeln!(self.output, "Unrecognized command: {name}")?;
            return Ok(());
        };

        debug!("Running {command} {arguments:?}");

        match self.execute(command, &arguments) {
            Ok(report) => writeln!(self.output, "{report}")?,
            Err(ScriptError::IO(kind)) => return Err(ScriptError::IO(kind)),
            Err(error) => {
                warn!("{command} failed: {error}");
                writeln!(self.output, "Exception: {error}")?;
            }
        }

        Ok(())
    }

    /// Executes the command and returns its report.
    fn execute(&mut self, command: Command, arguments: &[&str]) -> Result<String, ScriptError> {
        match (command, arguments) {
            (Command::CreateGraph, [graph]) => {
                self.graphs.insert(graph.to_string(), LabeledGraph::new());
                Ok(format!("created graph {graph}"))
            }
            (Command::AddNode, [graph, node]) => {
                self.graph_mut(graph)?.add_node(node.to_string());
                Ok(format!("added node {node} to {graph}"))
            }
            (Command::AddEdge, [graph, parent, child, label]) => {
                let label = L::parse(label)?;
                let description = label.describe();
                self.graph_mut(graph)?
                    .add_edge(&parent.to_string(), child.to_string(), label)?;
                Ok(format!(
                    "added edge {description} from {parent} to {child} in {graph}"
                ))
            }
            (Command::ListNodes, [graph]) => self.list_nodes(graph),
            (Command::ListChildren, [graph, parent]) => self.list_children(graph, parent),
            (Command::FindPath, [graph, start, end]) => self.find_path(graph, start, end),
            _ => Err(ScriptError::BadArguments {
                command,
                arguments: arguments.iter().map(ToString::to_string).collect(),
            }),
        }
    }

    fn list_nodes(&self, name: &str) -> Result<String, ScriptError> {
        let mut nodes: Vec<_> = self.graph(name)?.nodes().collect();
        nodes.sort_unstable();

        let nodes: String = nodes.iter().map(|node| format!(" {node}")).collect();
        Ok(format!("{name} contains:{nodes}"))
    }

    fn list_children(&self, name: &str, parent: &str) -> Result<String, ScriptError> {
        let mut edges: Vec<_> = self
            .graph(name)?
            .outgoing_edges(&parent.to_string())?
            .collect();
        edges.sort_unstable();

        let children: String = edges
            .iter()
            .map(|edge| format!(" {}({})", edge.destination(), edge.label().describe()))
            .collect();
        Ok(format!("the children of {parent} in {name} are:{children}"))
    }

    fn find_path(&self, name: &str, start: &str, end: &str) -> Result<String, ScriptError> {
        let graph = self.graph(name)?;
        let start = start.replace('_', " ");
        let end = end.replace('_', " ");

        let unknown: Vec<_> = [&start, &end]
            .into_iter()
            .filter(|node| !graph.has_node(node))
            .map(|node| format!("unknown {} {node}", L::NODE))
            .collect();
        if !unknown.is_empty() {
            return Ok(unknown.join("\n"));
        }

        let mut lines = vec![format!("path from {start} to {end}:")];
        match L::route_report(graph, &start, &end)? {
            Some(steps) => lines.extend(steps),
            None => lines.push("no path found".to_string()),
        }
        Ok(lines.join("\n"))
    }

    fn graph(&self, name: &str) -> Result<&LabeledGraph<String, L>, ScriptError> {
        self.graphs
            .get(name)
            .ok_or_else(|| ScriptError::UnknownGraph(name.to_string()))
    }

    fn graph_mut(&mut self, name: &str) -> Result<&mut LabeledGraph<String, L>, ScriptError> {
        self.graphs
            .get_mut(name)
            .ok_or_else(|| ScriptError::UnknownGraph(name.to_string()))
    }
}

fn parse_distance(value: &str) -> Result<Distance, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Distance::new)
        .filter(|distance| !distance.is_negative())
        .ok_or_else(|| ScriptError::InvalidWeight(value.to_string()))
}
