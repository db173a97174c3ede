//! This module defines a json format of recorded selection history which is used to replay
//! selections generation by generation and compare them with recorded expectations.
//!
//! Field names follow the layout of recorded fixtures: `X` stands for decision vectors, `F` for
//! objective vectors, `before` for parents, `off` for offspring and `cand` for candidates.

#[cfg(test)]
#[path = "../../tests/unit/format/history_test.rs"]
mod history_test;

use crate::models::Population;
use crate::utils::{Float, SelectionResult};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A recorded run of reference line selection.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SelectionHistory {
    /// Reference directions used by all generations.
    #[serde(rename = "ref_dir")]
    pub reference_directions: Vec<Vec<Float>>,
    /// Recorded generations in order.
    #[serde(rename = "hist")]
    pub generations: Vec<GenerationRecord>,
}

/// A recorded selection of one generation.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GenerationRecord {
    /// Decision vectors of parents.
    #[serde(rename = "before_X")]
    pub parent_decisions: Vec<Vec<Float>>,
    /// Objective vectors of parents.
    #[serde(rename = "before_F")]
    pub parent_objectives: Vec<Vec<Float>>,
    /// Decision vectors of offspring.
    #[serde(rename = "off_X")]
    pub offspring_decisions: Vec<Vec<Float>>,
    /// Objective vectors of offspring.
    #[serde(rename = "off_F")]
    pub offspring_objectives: Vec<Vec<Float>>,
    /// Decision vectors of candidates.
    #[serde(rename = "cand_X")]
    pub candidate_decisions: Vec<Vec<Float>>,
    /// Objective vectors of candidates.
    #[serde(rename = "cand_F")]
    pub candidate_objectives: Vec<Vec<Float>>,
    /// One-based front rank of each candidate.
    #[serde(rename = "cand_rank")]
    pub candidate_ranks: Vec<usize>,
    /// Random draws consumed by niching, in order of consumption.
    #[serde(rename = "rnd_niching")]
    pub niching_draws: Vec<i32>,
    /// Expected extreme points, one per objective axis.
    #[serde(rename = "extreme")]
    pub extreme_points: Vec<Vec<Float>>,
    /// Expected ideal point.
    #[serde(rename = "ideal")]
    pub ideal_point: Vec<Float>,
    /// Expected intercepts.
    pub intercepts: Vec<Float>,
    /// Expected reference direction associated with each candidate.
    #[serde(rename = "ref_dir")]
    pub niche_directions: Vec<Vec<Float>>,
    /// Expected perpendicular distance of each candidate to its reference line.
    #[serde(rename = "perp_dist")]
    pub niche_distances: Vec<Float>,
    /// Decision vectors of expected survivors.
    #[serde(rename = "X")]
    pub survivor_decisions: Vec<Vec<Float>>,
    /// Objective vectors of expected survivors.
    #[serde(rename = "F")]
    pub survivor_objectives: Vec<Vec<Float>>,
}

impl GenerationRecord {
    /// Returns parents population.
    pub fn parents(&self) -> SelectionResult<Population> {
        Population::from_parts(self.parent_decisions.clone(), self.parent_objectives.clone())
    }

    /// Returns offspring population.
    pub fn offspring(&self) -> SelectionResult<Population> {
        Population::from_parts(self.offspring_decisions.clone(), self.offspring_objectives.clone())
    }

    /// Returns parents merged with offspring.
    pub fn merged(&self) -> SelectionResult<Population> {
        let mut population = self.parents()?;
        population.merge(self.offspring()?);

        Ok(population)
    }

    /// Returns candidates population.
    pub fn candidates(&self) -> SelectionResult<Population> {
        Population::from_parts(self.candidate_decisions.clone(), self.candidate_objectives.clone())
    }

    /// Returns expected survivors population.
    pub fn survivors(&self) -> SelectionResult<Population> {
        Population::from_parts(self.survivor_decisions.clone(), self.survivor_objectives.clone())
    }
}

/// Reads selection history from json.
pub fn read_history<R: Read>(reader: BufReader<R>) -> SelectionResult<SelectionHistory> {
    Ok(serde_json::from_reader(reader)?)
}

/// Writes selection history as json.
pub fn write_history<W: Write>(mut writer: BufWriter<W>, history: &SelectionHistory) -> SelectionResult<()> {
    serde_json::to_writer(&mut writer, history)?;
    writer.flush()?;

    Ok(())
}
