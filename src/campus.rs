use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::{
    CampusError, Distance, LabeledGraph, Point, Route, Segment, campus_graph, shortest_path,
};

/// Campus building listed in the directory, located at the map point of its entrance.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub short_name: String,
    pub long_name: String,
    pub location: Point,
}

/// Campus map: the walkway graph together with the directory of buildings, addressed by their
/// short names.
#[derive(Debug, Clone)]
pub struct Campus {
    graph: LabeledGraph<Point, Distance>,
    // short name -> (long name, location)
    directory: BTreeMap<String, (String, Point)>,
}

impl Campus {
    /// Builds the campus from its building records and walkway segments.
    ///
    /// When several buildings share a short name the first one is kept. The entrance of every
    /// building is a node of the graph even if no walkway reaches it.
    pub fn new(
        buildings: impl IntoIterator<Item = Building>,
        segments: impl IntoIterator<Item = Segment>,
    ) -> Result<Self, CampusError> {
        let mut graph = campus_graph(segments)?;
        let mut directory = BTreeMap::new();

        for Building {
            short_name,
            long_name,
            location,
        } in buildings
        {
            if directory.contains_key(&short_name) {
                warn!("Ignoring duplicate building {short_name}: {long_name}");
                continue;
            }

            graph.add_node(location);
            directory.insert(short_name, (long_name, location));
        }

        debug!("Built campus with {} buildings", directory.len());

        Ok(Self { graph, directory })
    }

    pub fn graph(&self) -> &LabeledGraph<Point, Distance> {
        &self.graph
    }

    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.directory.contains_key(short_name)
    }

    pub fn long_name_for_short(&self, short_name: &str) -> Result<&str, CampusError> {
        self.entry(short_name).map(|(long_name, _)| long_name.as_str())
    }

    /// Gets the location of the building entrance.
    pub fn coordinate(&self, short_name: &str) -> Result<Point, CampusError> {
        self.entry(short_name).map(|&(_, location)| location)
    }

    /// Gets the (short name, long name) of every building, ordered by short name.
    pub fn building_names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.directory
            .iter()
            .map(|(short_name, (long_name, _))| (short_name.as_str(), long_name.as_str()))
    }

    /// Computes the shortest walking route between the entrances of two buildings.
    /// Returns `Ok(None)` if the walkways don't lead from one to the other.
    pub fn shortest_route(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Option<Route<Point>>, CampusError> {
        let start = self.coordinate(start)?;
        let end = self.coordinate(end)?;
        Ok(shortest_path(&self.graph, &start, &end)?)
    }

    fn entry(&self, short_name: &str) -> Result<&(String, Point), CampusError> {
        self.directory
            .get(short_name)
            .ok_or_else(|| CampusError::UnknownBuilding(short_name.to_string()))
    }
}
