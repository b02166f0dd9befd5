use std::io::ErrorKind;

use thiserror::Error;

use crate::{Distance, Point};
use crate::script::Command;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum GraphError<N, L> {
    #[error("Node {0:?} does not belong to the graph")]
    UnknownNode(N),
    #[error("Edge {parent:?} -> {child:?} labeled {label:?} does not belong to the graph")]
    UnknownEdge { parent: N, child: N, label: L },
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum CampusError {
    #[error("Building {0} does not exist")]
    UnknownBuilding(String),
    #[error(transparent)]
    Graph(#[from] GraphError<Point, Distance>),
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScriptError {
    #[error("Graph {0} has not been created")]
    UnknownGraph(String),
    #[error("Bad arguments to {command}: {arguments:?}")]
    BadArguments {
        command: Command,
        arguments: Vec<String>,
    },
    #[error("Edge weight is not valid: {0}")]
    InvalidWeight(String),
    #[error(transparent)]
    Graph(#[from] GraphError<String, Distance>),
    #[error(transparent)]
    Connection(#[from] GraphError<String, String>),
    #[error("Script I/O error: {0:?}")]
    IO(ErrorKind),
}

impl From<std::io::Error> for ScriptError {
    fn from(error: std::io::Error) -> Self {
        Self::IO(error.kind())
    }
}
