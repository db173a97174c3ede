#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga3/niching_test.rs"]
mod niching_test;

use crate::utils::{Float, Random, SelectionError, SelectionResult, compare_floats};

/// Counts how many solutions are associated with each of `size` niches.
pub fn niche_counts(size: usize, niches: impl Iterator<Item = usize>) -> Vec<usize> {
    niches.fold(vec![0; size], |mut counts, niche| {
        counts[niche] += 1;
        counts
    })
}

/// Picks `remaining` solutions of the last front preferring niches with the lowest count.
///
/// `niches` and `distances` describe solutions of the last front, `niche_counts` contains counts of
/// already accepted solutions and is updated as solutions are picked. Returns positions of picked
/// solutions in the order of picking.
///
/// Each iteration consumes one draw to choose among least crowded niches and, when the chosen niche
/// already has members, one more draw to choose among its candidates. An empty niche takes its
/// closest candidate. No draws are consumed when all solutions fit.
pub fn fill_niches(
    remaining: usize,
    niche_counts: &mut [usize],
    niches: &[usize],
    distances: &[Float],
    random: &dyn Random,
) -> SelectionResult<Vec<usize>> {
    debug_assert_eq!(niches.len(), distances.len());

    if remaining >= niches.len() {
        return Ok((0..niches.len()).collect());
    }

    let mut is_available = vec![true; niches.len()];
    let mut picked = Vec::with_capacity(remaining);

    while picked.len() < remaining {
        // niches which still have candidates, in ascending order
        let mut candidate_niches = niches
            .iter()
            .zip(is_available.iter())
            .filter(|(_, available)| **available)
            .map(|(niche, _)| *niche)
            .collect::<Vec<_>>();
        candidate_niches.sort_unstable();
        candidate_niches.dedup();

        let min_count = candidate_niches.iter().map(|&niche| niche_counts[niche]).min().unwrap_or_default();
        let least_crowded =
            candidate_niches.into_iter().filter(|&niche| niche_counts[niche] == min_count).collect::<Vec<_>>();

        let niche = least_crowded[draw_index(random, least_crowded.len())?];

        let members = (0..niches.len()).filter(|&idx| is_available[idx] && niches[idx] == niche).collect::<Vec<_>>();

        let position = if niche_counts[niche] == 0 {
            members
                .iter()
                .copied()
                .reduce(|best, idx| if compare_floats(distances[idx], distances[best]).is_lt() { idx } else { best })
                .unwrap_or(members[0])
        } else {
            members[draw_index(random, members.len())?]
        };

        log::trace!("niche {niche} (count {}) takes candidate at position {position}", niche_counts[niche]);

        is_available[position] = false;
        niche_counts[niche] += 1;
        picked.push(position);
    }

    Ok(picked)
}

/// Draws an index from `[0, choices - 1]`.
fn draw_index(random: &dyn Random, choices: usize) -> SelectionResult<usize> {
    let max = i32::try_from(choices.saturating_sub(1))
        .map_err(|_| SelectionError::InvalidConfiguration(format!("too many choices to draw from: {choices}")))?;

    match random.try_uniform_int(0, max) {
        Some(value) if (0..=max).contains(&value) => Ok(value as usize),
        Some(value) => Err(SelectionError::RandomOutOfRange { value, max }),
        None => Err(SelectionError::RandomSourceExhausted { choices }),
    }
}
