use super::{
    presenter::DisplayState,
    surface::{
        remove_box_js,
        ReviewSurface,
    },
};

/// Runs before every new card is shown. Removal is unconditional so a
/// sentence fetched for the previous card can never linger onto the next
/// one; with no box present the script is a no-op. This is deletion only —
/// the guard never creates a box.
pub fn clear_stale_display(display: &mut DisplayState, surface: &mut dyn ReviewSurface) {
    surface.eval_js(&remove_box_js());
    *display = DisplayState::Absent;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::testing::RecordingSurface;

    #[test]
    fn card_change_clears_a_shown_box() {
        let mut display = DisplayState::Shown { card_id: 9 };
        let mut surface = RecordingSurface::default();
        surface.box_text = Some("old sentence".to_string());

        clear_stale_display(&mut display, &mut surface);

        assert_eq!(display, DisplayState::Absent);
        assert_eq!(surface.box_text, None);
    }

    #[test]
    fn card_change_is_idempotent_when_absent() {
        let mut display = DisplayState::Absent;
        let mut surface = RecordingSurface::default();

        clear_stale_display(&mut display, &mut surface);
        clear_stale_display(&mut display, &mut surface);

        assert_eq!(display, DisplayState::Absent);
        assert_eq!(surface.box_text, None);
    }
}
