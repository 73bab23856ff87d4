use std::fmt;
use std::str::FromStr;

/// Maximum number of files previewed from one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewLimit {
    Capped(usize),
    Unlimited,
}

impl Default for PreviewLimit {
    fn default() -> Self {
        Self::Capped(5)
    }
}

impl PreviewLimit {
    pub fn max(&self) -> Option<usize> {
        match self {
            Self::Capped(n) => Some(*n),
            Self::Unlimited => None,
        }
    }
}

impl FromStr for PreviewLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unlimited") || s.eq_ignore_ascii_case("none") {
            return Ok(Self::Unlimited);
        }
        s.parse::<usize>()
            .map(Self::Capped)
            .map_err(|e| format!("Invalid preview limit '{}': {}", s, e))
    }
}

impl fmt::Display for PreviewLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capped(n) => write!(f, "{}", n),
            Self::Unlimited => f.write_str("unlimited"),
        }
    }
}

/// Keeps the files that get a preview, in selection order.
pub fn select_previews<T>(files: impl IntoIterator<Item = T>, limit: PreviewLimit) -> Vec<T> {
    match limit.max() {
        Some(n) => files.into_iter().take(n).collect(),
        None => files.into_iter().collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// `image/*` previews as an image, everything else as a video.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image") {
            Self::Image
        } else {
            Self::Video
        }
    }
}

/// File types offered by the picker
pub const ACCEPTED_MEDIA: &str = "image/*,video/*";

/// A decoded preview ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPreview {
    pub name: String,
    pub kind: MediaKind,
    pub data_url: String,
}

/// Previews of the latest selection. Decodes finish in any order, so each
/// result carries the generation it was started under and stale ones are
/// dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewSet {
    generation: u64,
    items: Vec<MediaPreview>,
}

impl PreviewSet {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn items(&self) -> &[MediaPreview] {
        &self.items
    }

    /// Empties the set for `generation`. Older generations are ignored.
    pub fn begin(&mut self, generation: u64) {
        if generation >= self.generation {
            self.generation = generation;
            self.items.clear();
        }
    }

    /// Adds a decoded preview; returns false when it belongs to an older
    /// selection.
    pub fn accept(&mut self, generation: u64, preview: MediaPreview) -> bool {
        if generation != self.generation {
            return false;
        }
        self.items.push(preview);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cap_is_five() {
        let files: Vec<u32> = (0..8).collect();
        assert_eq!(select_previews(files.clone(), PreviewLimit::default()), vec![0, 1, 2, 3, 4]);
        assert_eq!(select_previews(files.clone(), PreviewLimit::Unlimited).len(), 8);
        assert!(select_previews(files, PreviewLimit::Capped(0)).is_empty());
    }

    #[test]
    fn test_limit_parse() {
        assert_eq!("3".parse::<PreviewLimit>(), Ok(PreviewLimit::Capped(3)));
        assert_eq!("Unlimited".parse::<PreviewLimit>(), Ok(PreviewLimit::Unlimited));
        assert!("many".parse::<PreviewLimit>().is_err());
        assert_eq!(PreviewLimit::Capped(5).to_string(), "5");
    }

    fn preview(name: &str) -> MediaPreview {
        MediaPreview {
            name: name.to_string(),
            kind: MediaKind::Image,
            data_url: format!("data:image/png;base64,{}", name),
        }
    }

    #[test]
    fn test_preview_set_drops_stale_results() {
        let mut set = PreviewSet::default();
        set.begin(1);
        assert!(set.accept(1, preview("a.png")));

        set.begin(2);
        assert!(set.items().is_empty());
        assert!(!set.accept(1, preview("late.png")));
        assert!(set.accept(2, preview("b.png")));
        assert!(set.accept(2, preview("c.png")));

        let names: Vec<_> = set.items().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b.png", "c.png"]);

        // an older clear cannot wipe a newer selection
        set.begin(1);
        assert_eq!(set.generation(), 2);
        assert_eq!(set.items().len(), 2);
    }

    #[test]
    fn test_media_kind_from_mime() {
        assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime(""), MediaKind::Video);
    }
}
