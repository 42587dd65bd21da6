use std::collections::VecDeque;
use std::path::Path;

use anyhow::Context;

use crate::assets::decode::{PreparedImage, decode_image};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FilmstripError, FilmstripResult};
use crate::sequence::manifest::{LoadPolicy, PlayerConfig};

#[derive(Clone, Debug)]
/// State of one frame slot in the store.
pub enum FrameSlot {
    /// Request not yet settled.
    Pending,
    /// Decoded and renderable.
    Ready(PreparedImage),
    /// Settled with an error; never retried, never rendered.
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Milestone produced by a settling load.
pub enum LoadNotice {
    /// The first frame of the sequence has settled. Fires exactly once.
    FirstFrameReady,
    /// Every request in the sequence has settled. Fires exactly once.
    AllSettled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One outbound frame fetch request.
pub struct FrameRequest {
    /// Frame the response settles.
    pub frame: FrameIndex,
    /// Resolved asset path.
    pub path: String,
}

#[derive(Clone, Debug)]
/// Ordered store of (possibly still-pending) decoded frames.
///
/// Slots are fixed at creation and fill in as loads settle, in any order. A
/// failed load counts as settled so global progress can still reach 100%.
pub struct SequenceStore {
    slots: Vec<FrameSlot>,
    settled: usize,
}

impl SequenceStore {
    /// Create a store with `frame_count` pending slots.
    pub fn new(frame_count: u32) -> Self {
        Self {
            slots: vec![FrameSlot::Pending; frame_count as usize],
            settled: 0,
        }
    }

    /// Number of slots.
    pub fn frame_count(&self) -> u32 {
        self.slots.len() as u32
    }

    /// How many requests have completed, successfully or not.
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    /// Whether every slot has settled.
    pub fn is_complete(&self) -> bool {
        self.settled == self.slots.len()
    }

    /// The frame's image if loaded and decoded, else `None`.
    pub fn get(&self, frame: FrameIndex) -> Option<&PreparedImage> {
        match self.slots.get(frame.0 as usize) {
            Some(FrameSlot::Ready(img)) => Some(img),
            _ => None,
        }
    }

    /// Settle a slot with a decoded image or a swallowed failure.
    ///
    /// Out-of-range indices and repeated settles are ignored. Returns the
    /// milestones this settle produced, in firing order.
    pub fn complete(
        &mut self,
        frame: FrameIndex,
        image: Option<PreparedImage>,
    ) -> Vec<LoadNotice> {
        let Some(slot) = self.slots.get_mut(frame.0 as usize) else {
            tracing::warn!(frame = frame.0, "settle for out-of-range frame ignored");
            return Vec::new();
        };
        if !matches!(slot, FrameSlot::Pending) {
            tracing::debug!(frame = frame.0, "duplicate settle ignored");
            return Vec::new();
        }

        *slot = match image {
            Some(img) => FrameSlot::Ready(img),
            None => {
                tracing::debug!(frame = frame.0, "frame load failed; slot marked settled");
                FrameSlot::Failed
            }
        };
        self.settled += 1;

        let mut notices = Vec::new();
        if frame.0 == 0 {
            notices.push(LoadNotice::FirstFrameReady);
        }
        if self.is_complete() {
            notices.push(LoadNotice::AllSettled);
        }
        notices
    }
}

/// Frame store plus request scheduling for one sequence.
///
/// The loader front-loads no IO itself: [`SequenceLoader::begin`] and
/// [`SequenceLoader::complete`] hand out [`FrameRequest`]s for the platform to
/// fetch, and completions are fed back through the same path regardless of the
/// fetch mechanism.
#[derive(Clone, Debug)]
pub struct SequenceLoader {
    store: SequenceStore,
    config: PlayerConfig,
    next_frame: u32,
    outstanding: usize,
}

impl SequenceLoader {
    /// Create a loader for a validated configuration.
    pub fn new(config: PlayerConfig) -> FilmstripResult<Self> {
        config.validate()?;
        Ok(Self {
            store: SequenceStore::new(config.frame_count),
            config,
            next_frame: 0,
            outstanding: 0,
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &SequenceStore {
        &self.store
    }

    /// Consume the loader, keeping the store.
    pub fn into_store(self) -> SequenceStore {
        self.store
    }

    /// Begin fetching: returns the first wave of requests to dispatch.
    pub fn begin(&mut self) -> Vec<FrameRequest> {
        let size = match self.config.load {
            LoadPolicy::Eager => self.config.frame_count,
            LoadPolicy::Batched { size } => size,
        };
        self.next_requests(size)
    }

    /// Settle one request and return (follow-up requests, milestones).
    ///
    /// Under [`LoadPolicy::Batched`] the next batch is dispatched only once
    /// every request in the current batch has settled.
    pub fn complete(
        &mut self,
        frame: FrameIndex,
        image: Option<PreparedImage>,
    ) -> (Vec<FrameRequest>, Vec<LoadNotice>) {
        let notices = self.store.complete(frame, image);
        if self.outstanding > 0 {
            self.outstanding -= 1;
        }

        let follow_up = match self.config.load {
            LoadPolicy::Eager => Vec::new(),
            LoadPolicy::Batched { size } => {
                if self.outstanding == 0 {
                    self.next_requests(size)
                } else {
                    Vec::new()
                }
            }
        };
        (follow_up, notices)
    }

    fn next_requests(&mut self, count: u32) -> Vec<FrameRequest> {
        let end = self.next_frame.saturating_add(count).min(self.config.frame_count);
        let requests: Vec<FrameRequest> = (self.next_frame..end)
            .map(|i| {
                let frame = FrameIndex(i);
                FrameRequest {
                    frame,
                    path: self.config.frames.frame_path(frame),
                }
            })
            .collect();
        self.next_frame = end;
        self.outstanding += requests.len();
        requests
    }
}

/// Load and decode a whole sequence from a directory root.
///
/// Drives a [`SequenceLoader`] with synchronous filesystem reads, settling each
/// request in dispatch order. Read and decode failures are swallowed into
/// [`FrameSlot::Failed`] per the load error policy. Returns the filled store and
/// the milestones in firing order, for replay into a [`crate::Player`].
pub fn load_from_dir(
    config: &PlayerConfig,
    root: &Path,
) -> FilmstripResult<(SequenceStore, Vec<LoadNotice>)> {
    let mut loader = SequenceLoader::new(config.clone())?;
    let mut notices = Vec::new();

    let mut queue: VecDeque<FrameRequest> = loader.begin().into();
    while let Some(request) = queue.pop_front() {
        let image = fetch_and_decode(root, &request.path);
        let (follow_up, produced) = loader.complete(request.frame, image);
        queue.extend(follow_up);
        notices.extend(produced);
    }

    Ok((loader.into_store(), notices))
}

fn fetch_and_decode(root: &Path, rel_path: &str) -> Option<PreparedImage> {
    let path = root.join(Path::new(rel_path));
    let bytes = std::fs::read(&path)
        .with_context(|| format!("read frame bytes from '{}'", path.display()))
        .map_err(FilmstripError::from);
    let bytes = match bytes {
        Ok(b) => b,
        Err(err) => {
            tracing::warn!(%err, "frame fetch failed");
            return None;
        }
    };
    match decode_image(&bytes) {
        Ok(img) => Some(img),
        Err(err) => {
            tracing::warn!(%err, "frame decode failed");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/store.rs"]
mod tests;
