/// Window size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent2D {
    pub width: u32,
    pub height: u32,
}

const DIMS: Extent2D = Extent2D {
    width: 800,
    height: 600,
};

const MIN_DIMS: Extent2D = Extent2D {
    width: 64,
    height: 64,
};

const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Nothing but the cleared framebuffer.
    Clear,
    /// The background plus a filled 5-point star.
    Star,
}

/// Everything that differs between the two programs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub title: &'static str,
    pub dims: Extent2D,
    pub min_dims: Extent2D,
    pub clear_color: [f32; 4],
    pub scene: Scene,
    /// Print a confirmation line once the window exists.
    pub announce_creation: bool,
}

impl Variant {
    pub const STAR: Variant = Variant {
        title: "0432320005101056",
        dims: DIMS,
        min_dims: MIN_DIMS,
        clear_color: YELLOW,
        scene: Scene::Star,
        announce_creation: true,
    };

    pub const BACKDROP: Variant = Variant {
        title: "Rashik",
        dims: DIMS,
        min_dims: MIN_DIMS,
        clear_color: CYAN,
        scene: Scene::Clear,
        announce_creation: false,
    };

    pub fn creation_message(&self) -> Option<String> {
        if self.announce_creation {
            Some(format!("Window {} created successfully!", self.title))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_variant_announces_its_title() {
        assert_eq!(
            Variant::STAR.creation_message().as_deref(),
            Some("Window 0432320005101056 created successfully!")
        );
    }

    #[test]
    fn backdrop_variant_stays_quiet() {
        assert_eq!(Variant::BACKDROP.creation_message(), None);
    }

    #[test]
    fn variants_differ_in_title_and_background() {
        assert_ne!(Variant::STAR.title, Variant::BACKDROP.title);
        assert_eq!(Variant::STAR.clear_color, YELLOW);
        assert_eq!(Variant::BACKDROP.clear_color, CYAN);
        assert_eq!(Variant::STAR.scene, Scene::Star);
        assert_eq!(Variant::BACKDROP.scene, Scene::Clear);
    }

    #[test]
    fn both_variants_open_the_same_size_window() {
        assert_eq!(Variant::STAR.dims, Variant::BACKDROP.dims);
        assert_eq!(Variant::STAR.dims.width, 800);
        assert_eq!(Variant::STAR.dims.height, 600);
    }
}
