use tour_core::{PanNudge, Part};

/// Which sub-view of the building tour currently owns the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TourView {
    Exterior,
    FloorPlan,
    Panorama,
    Busy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TourKey {
    PreviousPart,
    NextPart,
    EnterBuilding,
    ExitBuilding,
    Nudge(PanNudge),
    ResetPanorama,
    CloseRoom,
    ExitViewer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramesKey {
    PreviousPart,
    NextPart,
    TogglePlay,
    JumpToPart(Part),
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSetKey {
    Previous,
    Next,
    Reset,
    Close,
}

#[inline]
pub fn part_for_digit(key: &str) -> Option<Part> {
    match key {
        "1" | "2" | "3" | "4" => key.parse::<u8>().ok().and_then(|d| Part::new(d).ok()),
        _ => None,
    }
}

/// While busy, navigation keys still map; the orchestrator drops them.
pub fn tour_key(key: &str, view: TourView) -> Option<TourKey> {
    match view {
        TourView::Panorama => match key {
            "ArrowLeft" => Some(TourKey::Nudge(PanNudge::Left)),
            "ArrowRight" => Some(TourKey::Nudge(PanNudge::Right)),
            "ArrowUp" => Some(TourKey::Nudge(PanNudge::Up)),
            "ArrowDown" => Some(TourKey::Nudge(PanNudge::Down)),
            "r" | "R" => Some(TourKey::ResetPanorama),
            "Escape" => Some(TourKey::CloseRoom),
            _ => None,
        },
        TourView::Exterior | TourView::Busy => match key {
            "ArrowLeft" => Some(TourKey::PreviousPart),
            "ArrowRight" => Some(TourKey::NextPart),
            "ArrowUp" => Some(TourKey::EnterBuilding),
            "ArrowDown" => Some(TourKey::ExitBuilding),
            "Escape" => Some(TourKey::ExitViewer),
            _ => None,
        },
        TourView::FloorPlan => match key {
            "ArrowDown" => Some(TourKey::ExitBuilding),
            "Escape" => Some(TourKey::ExitViewer),
            _ => None,
        },
    }
}

pub fn frames_key(key: &str) -> Option<FramesKey> {
    if let Some(part) = part_for_digit(key) {
        return Some(FramesKey::JumpToPart(part));
    }
    match key {
        "ArrowLeft" => Some(FramesKey::PreviousPart),
        "ArrowRight" => Some(FramesKey::NextPart),
        " " => Some(FramesKey::TogglePlay),
        "Escape" => Some(FramesKey::Close),
        _ => None,
    }
}

pub fn imageset_key(key: &str) -> Option<ImageSetKey> {
    match key {
        "ArrowLeft" => Some(ImageSetKey::Previous),
        "ArrowRight" => Some(ImageSetKey::Next),
        "r" | "R" => Some(ImageSetKey::Reset),
        "Escape" => Some(ImageSetKey::Close),
        _ => None,
    }
}
