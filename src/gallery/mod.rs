pub mod view;

use std::time::Duration;

use iced::Color;

/// How long each featured work stays up before the rotation advances.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(5);

/// One panel of the featured-work rotation.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub title: &'static str,
    pub medium: &'static str,
    pub tone: Color,
}

const FEATURED: [Slide; 4] = [
    Slide {
        title: "Umber Passage",
        medium: "Oil on linen, 2024",
        tone: Color {
            r: 0x4a as f32 / 255.0,
            g: 0x35 as f32 / 255.0,
            b: 0x28 as f32 / 255.0,
            a: 1.0,
        },
    },
    Slide {
        title: "Tidewater IV",
        medium: "Acrylic on panel, 2023",
        tone: Color {
            r: 0x1f as f32 / 255.0,
            g: 0x43 as f32 / 255.0,
            b: 0x48 as f32 / 255.0,
            a: 1.0,
        },
    },
    Slide {
        title: "Night Interior",
        medium: "Oil on canvas, 2025",
        tone: Color {
            r: 0x2a as f32 / 255.0,
            g: 0x2d as f32 / 255.0,
            b: 0x4a as f32 / 255.0,
            a: 1.0,
        },
    },
    Slide {
        title: "Red Scaffold",
        medium: "Mixed media, 2024",
        tone: Color {
            r: 0x6e as f32 / 255.0,
            g: 0x2a as f32 / 255.0,
            b: 0x23 as f32 / 255.0,
            a: 1.0,
        },
    },
];

#[derive(Debug, Clone, Copy)]
pub enum GalleryMessage {
    DotPressed(usize),
    Tick,
    Entered,
    Exited,
}

/// The featured-work carousel. Exactly one slide is current at a time; its
/// indicator dot is derived from the same index, so the pair can never
/// disagree.
#[derive(Debug)]
pub struct Gallery {
    slides: Vec<Slide>,
    current: usize,
    hovered: bool,
}

impl Gallery {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            current: 0,
            hovered: false,
        }
    }

    pub fn featured() -> Self {
        Self::new(FEATURED.to_vec())
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether the auto-rotation timer should be running. Hovering the
    /// gallery stops it outright; leaving starts a fresh interval.
    pub fn is_rotating(&self) -> bool {
        !self.hovered && !self.slides.is_empty()
    }

    pub fn update(&mut self, message: GalleryMessage) {
        match message {
            GalleryMessage::DotPressed(index) => self.navigate_to(index),
            GalleryMessage::Tick => self.advance(),
            GalleryMessage::Entered => self.hovered = true,
            GalleryMessage::Exited => self.hovered = false,
        }
    }

    /// Jumps straight to `index`. Out-of-range indices are ignored.
    fn navigate_to(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current = index;
        }
    }

    /// Advances to the next slide, wrapping around indefinitely.
    fn advance(&mut self) {
        if !self.slides.is_empty() {
            self.current = (self.current + 1) % self.slides.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> Gallery {
        Gallery::new(FEATURED.iter().cycle().take(n).copied().collect())
    }

    #[test]
    fn dot_press_moves_current_index() {
        let mut gallery = gallery(4);

        for index in [2, 0, 3, 3, 1] {
            gallery.update(GalleryMessage::DotPressed(index));
            assert_eq!(gallery.current(), index);
        }
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut gallery = gallery(4);
        gallery.update(GalleryMessage::DotPressed(2));

        gallery.update(GalleryMessage::DotPressed(4));
        gallery.update(GalleryMessage::DotPressed(usize::MAX));

        assert_eq!(gallery.current(), 2);
    }

    #[test]
    fn rotation_wraps_modulo_slide_count() {
        for n in 1..=4 {
            let mut gallery = gallery(n);

            for k in 1..=10 {
                gallery.update(GalleryMessage::Tick);
                assert_eq!(gallery.current(), k % n);
            }
        }
    }

    #[test]
    fn hover_stops_rotation_and_leave_restarts_it() {
        let mut gallery = gallery(3);
        assert!(gallery.is_rotating());

        gallery.update(GalleryMessage::Entered);
        assert!(!gallery.is_rotating());

        gallery.update(GalleryMessage::Exited);
        assert!(gallery.is_rotating());
    }

    #[test]
    fn tick_and_dot_press_interleave_to_a_single_index() {
        let mut gallery = gallery(4);

        gallery.update(GalleryMessage::Tick);
        gallery.update(GalleryMessage::DotPressed(3));
        gallery.update(GalleryMessage::Tick);

        // Last write wins; the index stays in range either way.
        assert_eq!(gallery.current(), 0);
    }
}
