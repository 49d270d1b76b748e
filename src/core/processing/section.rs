use ndarray::ArrayView1;

use crate::core::geometry::Section;
use crate::types::SelectMode;

/// Maximal contiguous runs of `true`, left to right.
pub fn find_sections(mask: ArrayView1<'_, bool>) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut start: Option<usize> = None;
    for (i, &is_content) in mask.iter().enumerate() {
        match (is_content, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                sections.push(Section::new(s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        sections.push(Section::new(s, mask.len()));
    }
    sections
}

/// Span from the first `true` (forward scan) to one past the last `true`
/// (backward scan), or `None` when the mask has no `true` value.
pub fn outer_bounds(mask: ArrayView1<'_, bool>) -> Option<Section> {
    let first = mask.iter().position(|&v| v)?;
    let from_end = mask.iter().rev().position(|&v| v)?;
    Some(Section::new(first, mask.len() - from_end))
}

/// Picks the content section of a 1-D mask according to `select`.
///
/// A mask without any `true` value yields the whole axis. Ties under
/// `CenterSection` and `LargestSection` go to the earliest run.
pub fn find_inner_section(mask: ArrayView1<'_, bool>, select: SelectMode) -> Section {
    let size = mask.len();
    let sections = find_sections(mask);
    let (first, last) = match (sections.first(), sections.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Section::new(0, size),
    };

    match select {
        SelectMode::AllSections => first.union(last),
        SelectMode::CenterSection => {
            let center = size / 2;
            let mut best = first;
            for section in &sections[1..] {
                if section.distance_to(center) < best.distance_to(center) {
                    best = *section;
                }
            }
            best
        }
        SelectMode::LargestSection => {
            let mut best = first;
            for section in &sections[1..] {
                if section.length() > best.length() {
                    best = *section;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn mask(len: usize, runs: &[(usize, usize)]) -> Array1<bool> {
        Array1::from_shape_fn(len, |i| runs.iter().any(|&(s, e)| i >= s && i < e))
    }

    #[test]
    fn empty_mask_selects_whole_axis() {
        let m = Array1::from_elem(7, false);
        for select in [
            SelectMode::AllSections,
            SelectMode::CenterSection,
            SelectMode::LargestSection,
        ] {
            assert_eq!(find_inner_section(m.view(), select), Section::new(0, 7));
        }
    }

    #[test]
    fn runs_touching_both_ends_are_closed() {
        let m = mask(6, &[(0, 2), (4, 6)]);
        assert_eq!(
            find_sections(m.view()),
            vec![Section::new(0, 2), Section::new(4, 6)]
        );
    }

    #[test]
    fn all_sections_spans_gaps() {
        let m = mask(16, &[(2, 5), (10, 13)]);
        assert_eq!(
            find_inner_section(m.view(), SelectMode::AllSections),
            Section::new(2, 13)
        );
    }

    #[test]
    fn center_section_prefers_closest_run() {
        let m = mask(20, &[(0, 2), (8, 9), (15, 20)]);
        assert_eq!(
            find_inner_section(m.view(), SelectMode::CenterSection),
            Section::new(8, 9)
        );
    }

    #[test]
    fn center_section_tie_goes_to_lower_start() {
        // center = 10; [5,8) is 10-8 = 2 away, [12,15) is 12-10 = 2 away
        let m = mask(20, &[(5, 8), (12, 15)]);
        assert_eq!(
            find_inner_section(m.view(), SelectMode::CenterSection),
            Section::new(5, 8)
        );
    }

    #[test]
    fn outer_bounds_scans_from_both_ends() {
        let m = mask(10, &[(2, 4), (7, 8)]);
        assert_eq!(outer_bounds(m.view()), Some(Section::new(2, 8)));
        assert_eq!(outer_bounds(Array1::from_elem(4, false).view()), None);
    }

    #[test]
    fn largest_section_tie_goes_to_first() {
        let m = mask(12, &[(1, 4), (6, 9)]);
        assert_eq!(
            find_inner_section(m.view(), SelectMode::LargestSection),
            Section::new(1, 4)
        );

        let m = mask(12, &[(1, 3), (6, 10)]);
        assert_eq!(
            find_inner_section(m.view(), SelectMode::LargestSection),
            Section::new(6, 10)
        );
    }
}
