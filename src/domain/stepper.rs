use rayon::prelude::*;

use super::{BoundingBox, Cell, ConwayRule, LiveSet, Rule, rules::will_be_alive_under};

/// Candidate cells for the next generation: the live bounding box plus a one-cell border.
/// No cell further out can reach 3 live neighbors (or any positive birth count) in one step.
fn search_area(set: &LiveSet) -> BoundingBox {
    BoundingBox::of(set).padded(1)
}

/// Next generation under Conway's rule
pub fn calculate_next(set: &LiveSet) -> LiveSet {
    calculate_next_with(set, &ConwayRule)
}

/// Pure functional step - returns a new set (serial).
/// Every candidate is judged against the unmodified `set`.
pub fn calculate_next_with(set: &LiveSet, rule: &dyn Rule) -> LiveSet {
    let area = search_area(set);
    let (from, to) = (area.bottom_left, area.top_right);

    (from.x..=to.x)
        .flat_map(|x| (from.y..=to.y).map(move |y| Cell::new(x, y)))
        .filter(|&cell| will_be_alive_under(rule, cell, set))
        .collect()
}

/// Parallel step using rayon, one column of the search area per task.
/// Produces the same set as `calculate_next_with`.
pub fn calculate_next_parallel(set: &LiveSet, rule: &dyn Rule) -> LiveSet {
    let area = search_area(set);
    let (from, to) = (area.bottom_left, area.top_right);

    let born: Vec<Cell> = (from.x..=to.x)
        .into_par_iter()
        .flat_map_iter(|x| (from.y..=to.y).map(move |y| Cell::new(x, y)))
        .filter(|&cell| will_be_alive_under(rule, cell, set))
        .collect();

    born.into_iter().collect()
}
