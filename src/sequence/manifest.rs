use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FilmstripError, FilmstripResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Complete player configuration.
///
/// The configuration is a pure data model, serialized via Serde (JSON). All
/// values are fixed for the lifetime of a [`crate::Player`]; there is no runtime
/// reconfiguration.
pub struct PlayerConfig {
    /// Number of frames in the sequence.
    pub frame_count: u32,
    /// Asset path template for individual frames.
    pub frames: FramePathSpec,
    /// Scroll track length in viewport heights (sizes the scroll spacer).
    pub track_vh: f64,
    /// Autoplay/intro duration in milliseconds.
    pub play_duration_ms: u64,
    /// Which gating variant drives the phase machine.
    pub gate: GateMode,
    /// Frame request dispatch policy.
    #[serde(default)]
    pub load: LoadPolicy,
    /// Optional background audio started on the interaction edge.
    #[serde(default)]
    pub audio: Option<AudioConfig>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Path template mapping a frame index to one image asset.
///
/// A frame resolves to `{base}/{prefix}{padded index}.{extension}` where the
/// padded index is `frame + index_base`, zero-padded to `pad` digits.
pub struct FramePathSpec {
    /// Base directory, relative, `/`-separated.
    pub base: String,
    /// File name prefix before the index.
    #[serde(default)]
    pub prefix: String,
    /// Zero-padding width for the index.
    #[serde(default = "default_pad")]
    pub pad: u8,
    /// File extension without the dot.
    pub extension: String,
    /// Index of the first frame on disk (0 or 1).
    #[serde(default)]
    pub index_base: u32,
}

fn default_pad() -> u8 {
    3
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Gating variant selecting the phase path out of loading.
pub enum GateMode {
    /// Wait for a first interaction, auto-play once, then hand off to scroll.
    Interaction,
    /// Auto-play an intro on load, replay on first interaction, then hand off.
    IntroReplay,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Frame request dispatch policy.
pub enum LoadPolicy {
    /// Fire all requests at once.
    #[default]
    Eager,
    /// Dispatch fixed-size batches; a batch must fully settle before the next.
    Batched {
        /// Requests per batch.
        size: u32,
    },
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Background audio started best-effort on the interaction edge.
pub struct AudioConfig {
    /// Audio source path, relative.
    pub source: String,
    /// Playback volume in `[0, 1]`.
    pub volume: f64,
}

impl PlayerConfig {
    /// Validate the whole configuration.
    pub fn validate(&self) -> FilmstripResult<()> {
        if self.frame_count == 0 {
            return Err(FilmstripError::validation("frame_count must be > 0"));
        }
        if !self.track_vh.is_finite() || self.track_vh <= 0.0 {
            return Err(FilmstripError::validation(
                "track_vh must be finite and > 0",
            ));
        }
        if self.play_duration_ms == 0 {
            return Err(FilmstripError::validation("play_duration_ms must be > 0"));
        }
        if let LoadPolicy::Batched { size } = self.load
            && size == 0
        {
            return Err(FilmstripError::validation("batch size must be > 0"));
        }
        self.frames.validate()?;
        if let Some(audio) = &self.audio {
            audio.validate()?;
        }
        Ok(())
    }
}

impl FramePathSpec {
    /// Validate the path template.
    pub fn validate(&self) -> FilmstripResult<()> {
        normalize_rel_path(&self.base)?;
        if self.pad == 0 {
            return Err(FilmstripError::validation("frame pad must be > 0"));
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(FilmstripError::validation(
                "frame extension must be non-empty and without a leading dot",
            ));
        }
        if self.index_base > 1 {
            return Err(FilmstripError::validation("index_base must be 0 or 1"));
        }
        Ok(())
    }

    /// Resolve the asset path for `frame`.
    pub fn frame_path(&self, frame: FrameIndex) -> String {
        let index = frame.0 + self.index_base;
        format!(
            "{}/{}{:0pad$}.{}",
            self.base,
            self.prefix,
            index,
            self.extension,
            pad = usize::from(self.pad)
        )
    }
}

impl AudioConfig {
    /// Validate audio source and volume.
    pub fn validate(&self) -> FilmstripResult<()> {
        normalize_rel_path(&self.source)?;
        if !self.volume.is_finite() || !(0.0..=1.0).contains(&self.volume) {
            return Err(FilmstripError::validation("audio volume must be in [0, 1]"));
        }
        Ok(())
    }
}

/// Normalize and validate configuration-relative asset paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects
/// absolute paths or parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> FilmstripResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(FilmstripError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(FilmstripError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(FilmstripError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(FilmstripError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}
