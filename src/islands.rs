//! Building island networks from plain text inputs.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use indicatif::ProgressIterator;
use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{Error, Result},
    graphs::{weighted_graph::WeightedGraph, Population, VertexId, Weight},
    utility::get_progressbar,
};

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const MIN_POPULATION: Population = 50;
pub const MAX_POPULATION: Population = 500;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Island {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Reads one entry per line, skipping blank lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }

    Ok(lines)
}

pub fn parse_coordinates(lines: &[String]) -> Result<Vec<f64>> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            line.parse().map_err(|_| Error::Parse {
                line: index + 1,
                message: format!("unable to parse coordinate {:?}", line),
            })
        })
        .collect()
}

/// Reads island names and their latitudes and longitudes from three files
/// with one entry per line. Line `i` of each file describes island `i`.
pub fn read_islands(names: &Path, latitudes: &Path, longitudes: &Path) -> Result<Vec<Island>> {
    let names = read_lines(names)?;
    let latitudes = parse_coordinates(&read_lines(latitudes)?)?;
    let longitudes = parse_coordinates(&read_lines(longitudes)?)?;

    zip_islands(names, &latitudes, &longitudes)
}

pub fn zip_islands(
    names: Vec<String>,
    latitudes: &[f64],
    longitudes: &[f64],
) -> Result<Vec<Island>> {
    if names.len() != latitudes.len() || names.len() != longitudes.len() {
        return Err(Error::MismatchedInput(format!(
            "{} names, {} latitudes and {} longitudes",
            names.len(),
            latitudes.len(),
            longitudes.len()
        )));
    }

    Ok(names
        .into_iter()
        .zip(latitudes.iter().zip(longitudes))
        .map(|(name, (&latitude, &longitude))| Island {
            name,
            latitude,
            longitude,
        })
        .collect())
}

/// Great circle distance in kilometers between two points given in degrees.
pub fn haversine(latitude1: f64, longitude1: f64, latitude2: f64, longitude2: f64) -> f64 {
    let delta_latitude = (latitude2 - latitude1).to_radians();
    let delta_longitude = (longitude2 - longitude1).to_radians();

    let a = (delta_latitude / 2.0).sin().powi(2)
        + latitude1.to_radians().cos()
            * latitude2.to_radians().cos()
            * (delta_longitude / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Uniformly distributed populations in `MIN_POPULATION..=MAX_POPULATION`.
pub fn random_populations<R: Rng>(number_of_islands: usize, rng: &mut R) -> Vec<Population> {
    (0..number_of_islands)
        .map(|_| rng.gen_range(MIN_POPULATION..=MAX_POPULATION))
        .collect()
}

/// Registers every island and connects each pair among the first `region`
/// islands in both directions by an edge weighted with their distance,
/// rounded to whole kilometers.
pub fn build_network(
    islands: &[Island],
    populations: &[Population],
    region: usize,
) -> Result<WeightedGraph> {
    if islands.len() != populations.len() {
        return Err(Error::MismatchedInput(format!(
            "{} islands but {} populations",
            islands.len(),
            populations.len()
        )));
    }

    let mut graph = WeightedGraph::new(islands.len())?;
    let progressbar = get_progressbar("Registering islands", islands.len() as u64);
    for (vertex, (island, &population)) in islands
        .iter()
        .zip(populations)
        .enumerate()
        .progress_with(progressbar)
    {
        graph.register_vertex(vertex as VertexId, &island.name, population)?;
    }

    let region = &islands[..region.min(islands.len())];
    for (from, to) in region.iter().tuple_combinations() {
        let distance: Weight =
            haversine(from.latitude, from.longitude, to.latitude, to.longitude).round();
        graph.add_edge_bidirectional(&from.name, &to.name, distance)?;
    }

    info!(
        islands = islands.len(),
        region = region.len(),
        "island network built"
    );

    Ok(graph)
}
