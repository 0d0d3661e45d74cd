use folio_traits::DrawingSurface;
use std::ops::{Deref, DerefMut};

/// Translates a surface's origin and moves it back when dropped, so the
/// surface leaves a paint call with the origin it entered with, even when
/// painting unwinds.
pub struct OriginGuard<'s, S: DrawingSurface + ?Sized> {
    surface: &'s mut S,
    dx: f32,
    dy: f32,
}

impl<'s, S: DrawingSurface + ?Sized> OriginGuard<'s, S> {
    pub fn translate(surface: &'s mut S, dx: f32, dy: f32) -> Self {
        surface.translate(dx, dy);
        Self { surface, dx, dy }
    }
}

impl<S: DrawingSurface + ?Sized> Deref for OriginGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for OriginGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for OriginGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.translate(-self.dx, -self.dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_traits::RecordingSurface;
    use folio_types::{Point, Rect};
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use url::Url;

    struct FailingSurface {
        origin: Point,
    }

    impl DrawingSurface for FailingSurface {
        fn translate(&mut self, dx: f32, dy: f32) {
            self.origin = self.origin.offset(dx, dy);
        }

        fn origin(&self) -> Point {
            self.origin
        }

        fn draw_text(&mut self, _rect: Rect, _text: &str) {
            panic!("draw_text failed");
        }

        fn add_anchor(&mut self, _rect: Rect, _name: &str) {}

        fn add_link(&mut self, _rect: Rect, _target: &str) {}

        fn add_hyperlink(&mut self, _rect: Rect, _url: &Url) {}
    }

    #[test]
    fn test_restores_origin_on_drop() {
        let mut surface = RecordingSurface::new();
        surface.translate(5.0, 7.0);
        {
            let mut guard = OriginGuard::translate(&mut surface, 0.0, -60.0);
            assert_eq!(guard.origin(), Point::new(5.0, -53.0));
            guard.draw_text(Rect::default(), "x");
        }
        assert_eq!(surface.origin(), Point::new(5.0, 7.0));
        assert_eq!(surface.translation_count(), 3);
    }

    #[test]
    fn test_restores_origin_on_unwind() {
        let mut surface = FailingSurface {
            origin: Point::default(),
        };
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut guard = OriginGuard::translate(&mut surface, 0.0, 120.0);
            guard.draw_text(Rect::default(), "boom");
        }));

        assert!(result.is_err());
        assert_eq!(surface.origin, Point::default());
    }
}
