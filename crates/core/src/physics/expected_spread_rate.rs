//! Expected spread rate through a random mix of fuels
//!
//! A small block of square cells (`samples` columns by `depth` rows) is
//! filled with every possible arrangement of the fuels. For each arrangement
//! fire is ignited along the lee edge of every column and elliptical paths
//! are propagated through the block, either heading straight through a cell
//! or flanking into neighbouring columns. The fastest exit gives the
//! arrangement's spread rate; weighting by the arrangement's probability
//! gives the expected rate.
//!
//! # References
//! - Finney, M.A. (2003). "Calculation of fire spread rates across random landscapes."
//!   International Journal of Wildland Fire 12(2), 167-174.

use tracing::warn;

/// Cell edge length (ft). The result is independent of it.
const CELL_SIZE: f64 = 10.0;
const NO_ARRIVAL: f64 = 9.0e12;
const MAX_SAMPLES: usize = 50;

/// Unit ellipse for a head fire rate of 1
#[derive(Debug, Clone, Copy)]
struct UnitEllipse {
    a: f64,
    b: f64,
    c: f64,
}

impl UnitEllipse {
    fn from_length_to_width_ratio(length_to_width_ratio: f64) -> Self {
        let ratio = length_to_width_ratio.max(1.0);
        let root = (ratio * ratio - 1.0).sqrt();
        let head_to_back = (ratio + root) / (ratio - root);
        let b = (1.0 + 1.0 / head_to_back) / 2.0;
        Self {
            a: 0.5 * (1.0 + 1.0 / head_to_back) / ratio,
            b,
            c: b - 1.0 / head_to_back,
        }
    }

    /// Time to cross `lateral_distances` while spreading at the fixed angle
    /// atan(overlap / separation) from the heading
    fn flanking_time(
        &self,
        separation: f64,
        overlap: f64,
        lateral_distances: &[f64],
        rates: &[f64],
    ) -> f64 {
        let beta = overlap.atan2(separation);
        let cos_b2 = beta.cos().powi(2);
        let sin_b2 = beta.sin().powi(2);
        let (a, b, c) = (self.a, self.b, self.c);

        let cos_theta = (a * beta.cos() * (a * a * cos_b2 + (b * b - c * c) * sin_b2).sqrt()
            - b * c * sin_b2)
            / (a * a * cos_b2 + b * b * sin_b2);
        let lateral_rate = a * cos_theta.acos().sin();

        lateral_distances
            .iter()
            .zip(rates)
            .map(|(distance, rate)| distance / (lateral_rate * rate))
            .sum()
    }
}

/// Where the path's ignition sits relative to its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ignition {
    Centered,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
struct SpreadPath {
    time: f64,
    column: i64,
    ignition: Ignition,
    /// Distance already travelled straight ahead in this column
    straight_distance: f64,
}

/// Relative spread rates of one arrangement, row-major
struct Block<'a> {
    rates: &'a [f64],
    samples: usize,
    depth: usize,
}

impl Block<'_> {
    fn rate(&self, row: usize, column: i64) -> f64 {
        self.rate_at_index(row as i64 * self.samples as i64 + column)
    }

    fn rate_at_index(&self, index: i64) -> f64 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.rates.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    fn push_path(&self, paths: &mut Vec<SpreadPath>, path: SpreadPath) {
        if path.column >= 0 && path.column < self.samples as i64 {
            paths.push(path);
        }
    }

    /// Fastest relative spread rate out of the far edge of the block
    fn max_relative_spread_rate(&self, ellipse: &UnitEllipse) -> f64 {
        let layers = self.samples.max(self.depth) + 1;
        let mut fastest: f64 = 0.0;

        for start_column in 0..self.samples {
            let mut current = vec![SpreadPath {
                time: 0.0,
                column: start_column as i64,
                ignition: Ignition::Centered,
                straight_distance: 0.0,
            }];

            for row in 0..self.depth {
                let mut next = Vec::new();
                for path in &current {
                    self.advance(ellipse, row, path, layers, &mut next);
                }
                current = next;
                if current.is_empty() {
                    break;
                }
            }

            let exit_time = current
                .iter()
                .map(|path| path.time)
                .filter(|&time| time > 0.0)
                .fold(NO_ARRIVAL, f64::min);
            if exit_time > 0.0 && exit_time < NO_ARRIVAL {
                fastest = fastest.max(self.depth as f64 * CELL_SIZE / exit_time);
            }
        }
        fastest
    }

    /// Extend one path through `row`, pushing every path that reaches the next row
    fn advance(
        &self,
        ellipse: &UnitEllipse,
        row: usize,
        path: &SpreadPath,
        layers: usize,
        next: &mut Vec<SpreadPath>,
    ) {
        let parent_rate = self.rate(row, path.column);
        if parent_rate <= 0.0 {
            return;
        }

        let mut lateral_distances = vec![0.0; layers];
        let mut rates = vec![0.0; layers];

        let mut separation = CELL_SIZE + path.straight_distance;
        let mut overlap = CELL_SIZE;
        if path.ignition == Ignition::Centered {
            overlap /= 2.0;
        }
        for p in 0..=row {
            lateral_distances[p] = if separation > CELL_SIZE {
                overlap / (row + 1) as f64
            } else {
                overlap
            };
            rates[p] = self.rate(p, path.column);
        }
        let crossed = ((separation / CELL_SIZE) as usize).min(layers);
        let mut delay = ellipse.flanking_time(
            separation,
            overlap,
            &lateral_distances[..crossed],
            &rates[..crossed],
        );

        // Straight ahead
        self.push_path(
            next,
            SpreadPath {
                time: path.time + CELL_SIZE / parent_rate,
                column: path.column,
                ignition: path.ignition,
                straight_distance: separation,
            },
        );

        if row + 1 >= self.depth {
            return;
        }

        let straight_cells = ((path.straight_distance / CELL_SIZE) as usize).min(row);
        let straight_time: f64 = (0..straight_cells)
            .map(|p| CELL_SIZE / self.rate(row - p - 1, path.column))
            .sum();
        delay += path.time - straight_time;
        separation = CELL_SIZE;

        let flank = |column: i64, ignition: Ignition, time: f64| SpreadPath {
            time,
            column,
            ignition,
            straight_distance: 0.0,
        };
        if path.ignition != Ignition::Right {
            self.push_path(next, flank(path.column - 1, Ignition::Left, delay));
        }
        if path.ignition != Ignition::Left {
            self.push_path(next, flank(path.column + 1, Ignition::Right, delay));
        }

        // Flanking across several columns to either side
        let row_start = row as i64 * self.samples as i64 + path.column;
        let last_index = self.rates.len() as i64 - 1;
        let fresh_ignition = path.straight_distance == 0.0;
        for (direction, blocked_by) in [(-1_i64, Ignition::Right), (1_i64, Ignition::Left)] {
            let mut side_overlap = overlap;
            lateral_distances[0] = overlap;
            for p in 1..self.samples {
                let index = row_start + direction * p as i64;
                if index < 0 || index > last_index {
                    break;
                }
                rates[p] = self.rate_at_index(index);
            }
            for p in 1..self.samples.saturating_sub(1) {
                let index = row_start + direction * p as i64;
                if (path.ignition == blocked_by && fresh_ignition)
                    || index < 0
                    || index > last_index
                {
                    break;
                }
                lateral_distances[p] = CELL_SIZE;
                side_overlap += CELL_SIZE;
                let time = ellipse.flanking_time(
                    separation,
                    side_overlap,
                    &lateral_distances[..=p],
                    &rates[..=p],
                );
                let ignition = if direction < 0 {
                    Ignition::Left
                } else {
                    Ignition::Right
                };
                self.push_path(
                    next,
                    flank(
                        path.column + direction * (p as i64 + 1),
                        ignition,
                        time + path.time,
                    ),
                );
            }
        }
    }
}

/// Expected spread rate of a landscape randomly tiled with several fuels
///
/// Every fuel-to-cell assignment of a `samples` × `depth` block is evaluated.
/// Each assignment's probability is the product of its cells' coverages.
///
/// # Arguments
/// * `spread_rates` - Spread rate of each fuel (any rate unit)
/// * `coverages` - Coverage of each fuel; normalized to sum to 1
/// * `length_to_width_ratio` - Fire shape used for flanking
/// * `samples` - Block columns (1..=50)
/// * `depth` - Block rows
///
/// # Returns
/// Expected spread rate in the unit of `spread_rates`. Zero when there is no
/// coverage, no positive rate or the block cannot be enumerated.
pub fn expected_spread_rate(
    spread_rates: &[f64],
    coverages: &[f64],
    length_to_width_ratio: f64,
    samples: usize,
    depth: usize,
) -> f64 {
    if spread_rates.len() != coverages.len() {
        warn!(
            rates = spread_rates.len(),
            coverages = coverages.len(),
            "spread rate and coverage counts differ"
        );
        return 0.0;
    }
    if samples == 0 || samples > MAX_SAMPLES || depth == 0 || spread_rates.is_empty() {
        return 0.0;
    }

    let total_coverage: f64 = coverages.iter().sum();
    if total_coverage <= 0.0 {
        return 0.0;
    }
    let max_rate = spread_rates.iter().copied().fold(0.0, f64::max);
    if max_rate <= 0.0 {
        return 0.0;
    }

    let fuels = spread_rates.len();
    let cells = samples * depth;
    let Some(arrangements) = u32::try_from(cells)
        .ok()
        .and_then(|cells| fuels.checked_pow(cells))
    else {
        warn!(fuels, cells, "too many fuel arrangements to enumerate");
        return 0.0;
    };

    let ellipse = UnitEllipse::from_length_to_width_ratio(length_to_width_ratio);
    let mut cell_rates = vec![0.0; cells];
    let mut expected = 0.0;

    for arrangement in 0..arrangements {
        let mut probability = 1.0;
        let mut code = arrangement;
        for rate in &mut cell_rates {
            let fuel = code % fuels;
            code /= fuels;
            probability *= coverages[fuel] / total_coverage;
            *rate = spread_rates[fuel] / max_rate;
        }
        if probability == 0.0 {
            continue;
        }
        let block = Block {
            rates: &cell_rates,
            samples,
            depth,
        };
        expected += probability * block.max_relative_spread_rate(&ellipse);
    }

    expected * max_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_fuel_is_its_own_rate() {
        let rate = expected_spread_rate(&[12.0], &[1.0], 2.0, 2, 2);
        assert_relative_eq!(rate, 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_full_coverage_of_one_fuel() {
        let rate = expected_spread_rate(&[3.0, 9.0], &[0.0, 1.0], 1.5, 2, 2);
        assert_relative_eq!(rate, 9.0, epsilon = 1e-9);
        let rate = expected_spread_rate(&[3.0, 9.0], &[1.0, 0.0], 1.5, 2, 2);
        assert_relative_eq!(rate, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mixed_rate_between_extremes() {
        let rate = expected_spread_rate(&[3.0, 9.0], &[0.5, 0.5], 1.5, 2, 2);
        assert!(rate > 3.0 && rate < 9.0);
        // Coverages are normalized
        let scaled = expected_spread_rate(&[3.0, 9.0], &[2.0, 2.0], 1.5, 2, 2);
        assert_relative_eq!(rate, scaled, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(expected_spread_rate(&[3.0, 9.0], &[0.0, 0.0], 1.5, 2, 2), 0.0);
        assert_eq!(expected_spread_rate(&[0.0, 0.0], &[0.5, 0.5], 1.5, 2, 2), 0.0);
        assert_eq!(expected_spread_rate(&[3.0], &[0.5, 0.5], 1.5, 2, 2), 0.0);
        assert_eq!(expected_spread_rate(&[3.0, 9.0], &[0.5, 0.5], 1.5, 0, 2), 0.0);
    }

    #[test]
    fn test_wider_block_stays_bounded() {
        let rate = expected_spread_rate(&[3.0, 9.0], &[0.3, 0.7], 2.0, 3, 2);
        assert!(rate > 3.0 && rate <= 9.0 + 1e-9);
    }
}
