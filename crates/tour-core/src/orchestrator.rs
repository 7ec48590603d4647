//! Top-level state machine of the building tour.
//!
//! Every mode-changing request goes through the transition lock: while a
//! transition is in flight, further requests are dropped, never queued. The lock
//! is released only when the transition commits its target state.

use std::time::Duration;

use crate::assets::AssetId;
use crate::choreography::{Choreography, Cue};
use crate::config::TourConfig;
use crate::error::TourError;
use crate::floor::{Floor, FloorGraph, FloorId, Room, RoomId};
use crate::media::{MediaElement, MediaEvent};
use crate::panorama::PanoramaDragController;
use crate::part::{Direction, Part};
use crate::player::{ClipStep, EntryClipPlayer, PlayerStep, SegmentPlayer};
use crate::segment::Segment;

#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Exterior { part: Part },
    TransitioningVideo { segment: Segment },
    TransitioningEntry { from: Part },
    /// `room` is the open panorama, if any.
    Interior { floor: FloorId, room: Option<RoomId> },
    TransitioningExit { from: FloorId },
}

/// Read-only snapshot of the transient per-mount state.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerSession {
    pub current_part: Part,
    pub current_floor: Option<FloorId>,
    pub is_transitioning: bool,
    pub active_segment: Option<Segment>,
}

#[derive(Debug)]
enum Transition {
    Rotate {
        player: SegmentPlayer,
        quiet: Duration,
    },
    Enter {
        clip: EntryClipPlayer,
        quiet: Duration,
        tail_armed: bool,
    },
    Exit,
    FloorChange {
        to: FloorId,
    },
}

/// What a media event or tick resolved to, applied once the borrow ends.
enum Outcome {
    None,
    Commit(Mode),
    ArmEntryTail,
}

pub struct TransitionOrchestrator<M: MediaElement> {
    config: TourConfig,
    floors: FloorGraph,
    media: M,
    mode: Mode,
    current_part: Part,
    transition: Option<Transition>,
    choreography: Choreography,
    panorama: PanoramaDragController,
    closed: bool,
}

impl<M: MediaElement> TransitionOrchestrator<M> {
    pub fn new(config: TourConfig, media: M) -> Result<Self, TourError> {
        let floors = FloorGraph::new(config.floors.clone())?;
        floors.get_floor(&config.default_floor)?;
        let choreography = Choreography::new(config.timings.overlay_fade);
        Ok(Self {
            config,
            floors,
            media,
            mode: Mode::Exterior { part: Part::FIRST },
            current_part: Part::FIRST,
            transition: None,
            choreography,
            panorama: PanoramaDragController::new(),
            closed: false,
        })
    }

    // ---------------- queries ----------------

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn current_part(&self) -> Part {
        self.current_part
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub fn current_floor_id(&self) -> Option<&FloorId> {
        match &self.mode {
            Mode::Interior { floor, .. } => Some(floor),
            _ => None,
        }
    }

    pub fn current_floor(&self) -> Option<&Floor> {
        self.current_floor_id()
            .and_then(|id| self.floors.get_floor(id).ok())
    }

    /// Floor whose plan should stay visible, including while leaving it.
    pub fn displayed_floor(&self) -> Option<&Floor> {
        match &self.mode {
            Mode::Interior { floor, .. } | Mode::TransitioningExit { from: floor } => {
                self.floors.get_floor(floor).ok()
            }
            _ => None,
        }
    }

    pub fn open_room(&self) -> Option<&Room> {
        match &self.mode {
            Mode::Interior {
                room: Some(room), ..
            } => self.floors.find_room(room).ok(),
            _ => None,
        }
    }

    pub fn session(&self) -> ViewerSession {
        ViewerSession {
            current_part: self.current_part,
            current_floor: self.current_floor_id().cloned(),
            is_transitioning: self.is_transitioning(),
            active_segment: self.active_player().map(|p| *p.segment()),
        }
    }

    pub fn active_player(&self) -> Option<&SegmentPlayer> {
        match &self.transition {
            Some(Transition::Rotate { player, .. }) => Some(player),
            _ => None,
        }
    }

    pub fn entry_clip(&self) -> Option<&AssetId> {
        match &self.transition {
            Some(Transition::Enter { clip, .. }) => Some(clip.clip()),
            _ => None,
        }
    }

    pub fn stop_frame(&self, part: Part) -> &AssetId {
        self.config.assets.stop_frame(part)
    }

    /// Stop frame the running transition lands on, for the host to preload.
    pub fn upcoming_stop_frame(&self) -> Option<&AssetId> {
        match &self.transition {
            Some(Transition::Rotate { player, .. }) => Some(self.stop_frame(player.segment().to)),
            Some(Transition::Exit) => Some(self.stop_frame(self.current_part)),
            _ => None,
        }
    }

    pub fn floors(&self) -> &FloorGraph {
        &self.floors
    }

    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    pub fn overlay_opacity(&self) -> f32 {
        self.choreography.overlay_opacity()
    }

    pub fn panorama(&self) -> &PanoramaDragController {
        &self.panorama
    }

    /// The panorama controller, available only while a room is open.
    pub fn panorama_mut(&mut self) -> Option<&mut PanoramaDragController> {
        match &self.mode {
            Mode::Interior { room: Some(_), .. } => Some(&mut self.panorama),
            _ => None,
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    // ---------------- requests ----------------

    pub fn request_next_part(&mut self) -> bool {
        self.request_rotation(Direction::Forward)
    }

    pub fn request_previous_part(&mut self) -> bool {
        self.request_rotation(Direction::Backward)
    }

    fn request_rotation(&mut self, direction: Direction) -> bool {
        if !self.unlocked("rotate") {
            return false;
        }
        let Mode::Exterior { part } = self.mode else {
            log::debug!("[tour] rotate ignored outside exterior");
            return false;
        };
        let segment = Segment::step(part, direction);
        let idle_frame = self.config.assets.stop_frame(part).clone();
        match SegmentPlayer::play(
            segment,
            idle_frame,
            &self.config.time_table,
            &self.config.assets,
            &mut self.media,
        ) {
            Ok(player) => {
                self.transition = Some(Transition::Rotate {
                    player,
                    quiet: Duration::ZERO,
                });
                self.mode = Mode::TransitioningVideo { segment };
            }
            Err(e) => {
                log::error!("[tour] cannot play segment, showing part {}: {}", segment.to, e);
                self.commit(Mode::Exterior { part: segment.to });
            }
        }
        true
    }

    pub fn request_enter_building(&mut self) -> bool {
        if !self.unlocked("enter building") {
            return false;
        }
        let Mode::Exterior { part } = self.mode else {
            log::debug!("[tour] enter ignored outside exterior");
            return false;
        };
        let clip = EntryClipPlayer::play(self.config.assets.entry_clip.clone(), &mut self.media);
        self.transition = Some(Transition::Enter {
            clip,
            quiet: Duration::ZERO,
            tail_armed: false,
        });
        self.mode = Mode::TransitioningEntry { from: part };
        true
    }

    pub fn request_exit_building(&mut self) -> bool {
        if !self.unlocked("exit building") {
            return false;
        }
        let Mode::Interior { floor, room } = &self.mode else {
            log::debug!("[tour] exit ignored outside interior");
            return false;
        };
        if room.is_some() {
            self.panorama.reset();
        }
        let from = floor.clone();
        self.transition = Some(Transition::Exit);
        self.choreography.begin(self.config.timings.exit);
        self.mode = Mode::TransitioningExit { from };
        true
    }

    pub fn request_floor_change(&mut self, floor_id: &FloorId) -> bool {
        if !self.unlocked("floor change") {
            return false;
        }
        let Mode::Interior { floor, room: None } = &self.mode else {
            log::debug!("[floor] change ignored outside the floor plan");
            return false;
        };
        if floor == floor_id {
            return false;
        }
        if let Err(e) = self.floors.get_floor(floor_id) {
            log::warn!("[floor] {}", e);
            return false;
        }
        log::info!("[floor] {} -> {}", floor, floor_id);
        self.transition = Some(Transition::FloorChange {
            to: floor_id.clone(),
        });
        self.choreography.begin(self.config.timings.floor_change);
        true
    }

    pub fn request_room_enter(&mut self, room_id: &RoomId) -> bool {
        if !self.unlocked("room enter") {
            return false;
        }
        let Mode::Interior { floor, room: None } = &self.mode else {
            log::debug!("[floor] room enter ignored outside the floor plan");
            return false;
        };
        match self.floors.floor_of_room(room_id) {
            Ok(owner) if owner == floor => {}
            Ok(owner) => {
                log::warn!("[floor] room {} belongs to {}, not {}", room_id, owner, floor);
                return false;
            }
            Err(e) => {
                log::warn!("[floor] {}", e);
                return false;
            }
        }
        let floor = floor.clone();
        self.panorama.reset();
        self.commit(Mode::Interior {
            floor,
            room: Some(room_id.clone()),
        });
        true
    }

    pub fn request_room_exit(&mut self) -> bool {
        if !self.unlocked("room exit") {
            return false;
        }
        let Mode::Interior {
            floor,
            room: Some(_),
        } = &self.mode
        else {
            return false;
        };
        let floor = floor.clone();
        self.panorama.on_drag_end();
        self.commit(Mode::Interior { floor, room: None });
        true
    }

    // ---------------- completion sources ----------------

    pub fn handle_media_event(&mut self, event: MediaEvent) {
        let outcome = match &mut self.transition {
            Some(Transition::Rotate { player, quiet }) => {
                *quiet = Duration::ZERO;
                match player.handle(&event, &mut self.media) {
                    PlayerStep::Running => Outcome::None,
                    PlayerStep::Finished(part) => Outcome::Commit(Mode::Exterior { part }),
                }
            }
            Some(Transition::Enter {
                clip,
                quiet,
                tail_armed,
            }) => {
                *quiet = Duration::ZERO;
                match clip.handle(&event, &mut self.media) {
                    ClipStep::Running => Outcome::None,
                    ClipStep::NearEnd => {
                        self.choreography.begin_open();
                        Outcome::None
                    }
                    ClipStep::Ended if !*tail_armed => {
                        *tail_armed = true;
                        Outcome::ArmEntryTail
                    }
                    ClipStep::Ended => Outcome::None,
                }
            }
            _ => {
                log::debug!("[media] {:?} with no clip playing", event);
                Outcome::None
            }
        };
        self.apply(outcome);
    }

    /// Advance timers by `dt`: overlay choreography and the media stall guard.
    pub fn tick(&mut self, dt: Duration) {
        let stall = self.config.timings.media_stall_timeout;
        let outcome = match &mut self.transition {
            Some(Transition::Rotate { player, quiet }) => {
                *quiet += dt;
                if *quiet >= stall {
                    log::warn!("[segment] media silent for {:?}, completing", stall);
                    match player.abort(&mut self.media) {
                        PlayerStep::Finished(part) => Outcome::Commit(Mode::Exterior { part }),
                        PlayerStep::Running => Outcome::None,
                    }
                } else {
                    Outcome::None
                }
            }
            Some(Transition::Enter {
                clip,
                quiet,
                tail_armed,
            }) if !*tail_armed => {
                *quiet += dt;
                if *quiet >= stall {
                    log::warn!("[entry] media silent for {:?}, completing", stall);
                    clip.abort(&mut self.media);
                    *tail_armed = true;
                    Outcome::ArmEntryTail
                } else {
                    Outcome::None
                }
            }
            _ => Outcome::None,
        };
        self.apply(outcome);

        if let Some(Cue::Swap) = self.choreography.tick(dt) {
            let outcome = match &self.transition {
                Some(Transition::Enter { .. }) => Outcome::Commit(Mode::Interior {
                    floor: self.config.default_floor.clone(),
                    room: None,
                }),
                Some(Transition::Exit) => Outcome::Commit(Mode::Exterior {
                    part: self.current_part,
                }),
                Some(Transition::FloorChange { to }) => Outcome::Commit(Mode::Interior {
                    floor: to.clone(),
                    room: None,
                }),
                _ => Outcome::None,
            };
            self.apply(outcome);
        }
    }

    /// Viewer teardown: stop timers, release the media element, refuse further requests.
    pub fn shutdown(&mut self) {
        self.choreography.cancel();
        match self.transition.take() {
            Some(Transition::Rotate { mut player, .. }) => {
                player.abort(&mut self.media);
            }
            Some(Transition::Enter { mut clip, .. }) => {
                clip.abort(&mut self.media);
            }
            _ => {}
        }
        self.media.pause();
        self.media.detach();
        self.closed = true;
        log::info!("[tour] shut down");
    }

    // ---------------- internals ----------------

    fn unlocked(&self, what: &str) -> bool {
        if self.closed {
            return false;
        }
        if self.transition.is_some() {
            log::debug!("[tour] {} dropped: transition in flight", what);
            return false;
        }
        true
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::None => {}
            Outcome::Commit(mode) => self.commit(mode),
            Outcome::ArmEntryTail => self.choreography.arm(self.config.timings.entry_tail),
        }
    }

    /// The single completion point: commit the target state and release the lock.
    fn commit(&mut self, mode: Mode) {
        self.transition = None;
        if let Mode::Exterior { part } = mode {
            self.current_part = part;
        }
        log::info!("[tour] now {:?}", mode);
        self.mode = mode;
    }
}
