use std::rc::Rc;

use yew::Reducible;

use crate::section::Section;

/// Distance from the viewport top at which a section counts as "in view".
pub const PROBE_LINE: f64 = 100.0;
/// Scroll offset past which the header switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 10.0;
/// Hero background moves at this fraction of the page scroll.
pub const PARALLAX_RATE: f64 = 0.4;

/// On-screen vertical extent of a section, relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn straddles_probe(&self) -> bool {
        self.top <= PROBE_LINE && self.bottom >= PROBE_LINE
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("transform: translateY({}px);", parallax_offset(scroll_y))
}

/// First section, in nav order, whose rect straddles the probe line.
/// `rect_of` returns `None` for sections that are not in the document.
pub fn detect_visible_section<F>(rect_of: F) -> Option<Section>
where
    F: Fn(Section) -> Option<SectionRect>,
{
    Section::ALL
        .into_iter()
        .find(|section| rect_of(*section).map_or(false, |rect| rect.straddles_probe()))
}

/// One reading of the viewport: the offset and the section under the probe line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub in_view: Option<Section>,
}

impl ScrollSample {
    pub fn take<F>(scroll_y: f64, rect_of: F) -> Self
    where
        F: Fn(Section) -> Option<SectionRect>,
    {
        Self {
            scroll_y,
            in_view: detect_visible_section(rect_of),
        }
    }
}

/// Everything the page derives from the latest scroll sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub scrolled: bool,
    pub visible: Section,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scrolled: false,
            visible: Section::Home,
        }
    }
}

impl ScrollState {
    /// The visible section sticks to its last value when no section
    /// straddles the probe line.
    pub fn apply(&self, sample: ScrollSample) -> ScrollState {
        ScrollState {
            scrolled: is_scrolled(sample.scroll_y),
            visible: sample.in_view.unwrap_or(self.visible),
        }
    }
}

impl Reducible for ScrollState {
    type Action = ScrollSample;

    fn reduce(self: Rc<Self>, sample: ScrollSample) -> Rc<Self> {
        let next = self.apply(sample);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Stacks the sections vertically with the given heights, as if the page
    // were scrolled down by `scroll_y`.
    fn layout(heights: &[(Section, f64)], scroll_y: f64) -> impl Fn(Section) -> Option<SectionRect> + '_ {
        move |section| {
            let mut top = -scroll_y;
            for (s, h) in heights {
                if *s == section {
                    return Some(SectionRect { top, bottom: top + h });
                }
                top += h;
            }
            None
        }
    }

    fn full_page() -> Vec<(Section, f64)> {
        Section::ALL.iter().map(|s| (*s, 800.0)).collect()
    }

    #[test]
    fn scrolled_flag_threshold() {
        for y in [0.0, 5.0, 10.0] {
            assert!(!is_scrolled(y), "offset {y}");
        }
        for y in [10.5, 11.0, 600.0] {
            assert!(is_scrolled(y), "offset {y}");
        }
    }

    #[test]
    fn parallax_is_forty_percent() {
        assert_eq!(parallax_offset(100.0), 40.0);
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_transform(100.0), "transform: translateY(40px);");
    }

    #[test]
    fn top_of_page_is_home() {
        let page = full_page();
        assert_eq!(detect_visible_section(layout(&page, 0.0)), Some(Section::Home));
    }

    #[test]
    fn detects_section_under_probe_line() {
        let page = full_page();
        // services spans 800..1600 in page coordinates
        assert_eq!(detect_visible_section(layout(&page, 750.0)), Some(Section::Services));
        assert_eq!(detect_visible_section(layout(&page, 4000.0)), Some(Section::Contact));
    }

    #[test]
    fn boundary_prefers_earlier_section() {
        let page = full_page();
        // home bottom and services top both sit exactly on the probe line
        assert_eq!(detect_visible_section(layout(&page, 700.0)), Some(Section::Home));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let page: Vec<_> = full_page()
            .into_iter()
            .filter(|(s, _)| *s != Section::Testimonials)
            .collect();
        // testimonials absent, so contact follows team directly at 3200
        assert_eq!(detect_visible_section(layout(&page, 3200.0)), Some(Section::Contact));
    }

    #[test]
    fn visible_section_sticks_when_nothing_matches() {
        let state = ScrollState {
            scrolled: true,
            visible: Section::Team,
        };
        let next = state.apply(ScrollSample::take(9000.0, |_| None));
        assert_eq!(next.visible, Section::Team);
        assert!(next.scrolled);
    }

    #[test]
    fn apply_recomputes_both_fields() {
        let page = full_page();
        let state = ScrollState::default();
        let next = state.apply(ScrollSample::take(1700.0, layout(&page, 1700.0)));
        assert_eq!(
            next,
            ScrollState {
                scrolled: true,
                visible: Section::About
            }
        );
        let back = next.apply(ScrollSample::take(0.0, layout(&page, 0.0)));
        assert_eq!(back, ScrollState::default());
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let state = Rc::new(ScrollState::default());
        let same = state.clone().reduce(ScrollSample {
            scroll_y: 3.0,
            in_view: Some(Section::Home),
        });
        assert!(Rc::ptr_eq(&state, &same));
    }
}
