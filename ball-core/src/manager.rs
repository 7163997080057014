//! The decoration manager: owns every placed decoration and the view state.

use crate::{
    ConfirmPrompt, DecorError, DecorResult, Decoration, DecorationId, DecorationKind,
    DecorationZone, DecoratorConfig, EventOutcome, ExportLayout, InputEvent, Position,
    ViewSettings, DELETE_KEY,
};

/// Question asked before removing every decoration.
pub const CLEAR_ALL_PROMPT: &str = "Clear all?";

/// Pointer drag state. Only one decoration is dragged at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A decoration follows the pointer.
    Dragging {
        /// The dragged decoration.
        id: DecorationId,
        /// Pointer position relative to the decoration's top-left at drag start.
        grab_offset: Position,
    },
}

/// Owns the decorations of one mounted decorator view.
///
/// Decorations are kept in insertion order, which is also z-order: the last
/// one is drawn on top and wins hit tests.
pub struct DecorationManager {
    config: DecoratorConfig,
    zone: DecorationZone,
    decorations: Vec<Decoration>,
    selected: Option<DecorationId>,
    drag: DragState,
    settings: ViewSettings,
    confirm: Box<dyn ConfirmPrompt>,
}

impl std::fmt::Debug for DecorationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecorationManager")
            .field("zone", &self.zone)
            .field("decorations", &self.decorations)
            .field("selected", &self.selected)
            .field("drag", &self.drag)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl DecorationManager {
    /// Create a manager from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn new(
        config: DecoratorConfig,
        confirm: impl ConfirmPrompt + 'static,
    ) -> DecorResult<Self> {
        config.validate()?;
        Ok(Self::assemble(config, Box::new(confirm)))
    }

    /// Create a manager with the default configuration.
    #[must_use]
    pub fn with_defaults(confirm: impl ConfirmPrompt + 'static) -> Self {
        Self::assemble(DecoratorConfig::default(), Box::new(confirm))
    }

    /// Shared constructor body. `config` must already validate.
    fn assemble(config: DecoratorConfig, confirm: Box<dyn ConfirmPrompt>) -> Self {
        let zone = DecorationZone::from_validated(&config);
        let settings = ViewSettings::from_config(&config);
        Self {
            config,
            zone,
            decorations: Vec::new(),
            selected: None,
            drag: DragState::Idle,
            settings,
            confirm,
        }
    }

    /// The configuration this manager was built from.
    #[must_use]
    pub fn config(&self) -> &DecoratorConfig {
        &self.config
    }

    /// Current zone geometry.
    #[must_use]
    pub fn zone(&self) -> &DecorationZone {
        &self.zone
    }

    /// Current view settings.
    #[must_use]
    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    /// All decorations in z-order.
    #[must_use]
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Get a decoration by ID.
    #[must_use]
    pub fn get(&self, id: DecorationId) -> Option<&Decoration> {
        self.decorations.iter().find(|d| d.id == id)
    }

    /// Number of placed decorations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    /// Check if nothing has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    /// The selected decoration, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Decoration> {
        self.selected.and_then(|id| self.get(id))
    }

    /// ID of the selected decoration, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<DecorationId> {
        self.selected
    }

    /// Current drag state.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    fn index_of(&self, id: DecorationId) -> Option<usize> {
        self.decorations.iter().position(|d| d.id == id)
    }

    fn not_found(id: DecorationId) -> DecorError {
        DecorError::DecorationNotFound(id.to_string())
    }

    // ------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------

    /// Place a decoration with its top-left corner at `(x, y)`, clamped to the zone.
    pub fn place(&mut self, kind: DecorationKind, x: f32, y: f32) -> DecorationId {
        let position = self.zone.clamp(Position::new(x, y));
        let decoration = Decoration::new(kind, position);
        let id = decoration.id;
        tracing::debug!("Placed {kind} {id} at ({}, {})", position.x, position.y);
        self.decorations.push(decoration);
        id
    }

    /// Place a decoration by palette name; unknown names use the default kind.
    pub fn place_named(&mut self, name: &str, x: f32, y: f32) -> DecorationId {
        self.place(DecorationKind::from_name_or_default(name), x, y)
    }

    /// Place a decoration at the zone centre (click-to-place).
    pub fn place_at_center(&mut self, kind: DecorationKind) -> DecorationId {
        let center = self.zone.center();
        self.place(kind, center.x, center.y)
    }

    /// Topmost decoration whose footprint contains the zone point.
    #[must_use]
    pub fn decoration_at(&self, x: f32, y: f32) -> Option<DecorationId> {
        self.decorations
            .iter()
            .rev()
            .find(|d| d.contains_point(x, y, self.zone.item_size))
            .map(|d| d.id)
    }

    // ------------------------------------------------------------------
    // Dragging
    // ------------------------------------------------------------------

    /// Start dragging a decoration from the given pointer position.
    ///
    /// Any drag already in progress ends first.
    ///
    /// # Errors
    ///
    /// Returns an error if the decoration is not found.
    pub fn begin_drag(
        &mut self,
        id: DecorationId,
        pointer_x: f32,
        pointer_y: f32,
    ) -> DecorResult<()> {
        self.end_drag();
        let idx = self.index_of(id).ok_or_else(|| Self::not_found(id))?;
        let decoration = &mut self.decorations[idx];
        decoration.dragging = true;
        let grab_offset = Position::new(
            pointer_x - decoration.position.x,
            pointer_y - decoration.position.y,
        );
        self.drag = DragState::Dragging { id, grab_offset };
        tracing::debug!("Drag started on {id}");
        Ok(())
    }

    /// Move the dragged decoration to follow the pointer.
    ///
    /// Returns the new clamped position, or `None` when no drag is active.
    pub fn update_drag(&mut self, pointer_x: f32, pointer_y: f32) -> Option<Position> {
        let DragState::Dragging { id, grab_offset } = self.drag else {
            return None;
        };
        let Some(idx) = self.index_of(id) else {
            self.drag = DragState::Idle;
            return None;
        };
        let position = self.zone.clamp(Position::new(
            pointer_x - grab_offset.x,
            pointer_y - grab_offset.y,
        ));
        self.decorations[idx].position = position;
        Some(position)
    }

    /// Finish the active drag, wherever the pointer is.
    ///
    /// Returns the decoration that was being dragged.
    pub fn end_drag(&mut self) -> Option<DecorationId> {
        let DragState::Dragging { id, .. } = std::mem::take(&mut self.drag) else {
            return None;
        };
        if let Some(idx) = self.index_of(id) {
            self.decorations[idx].dragging = false;
        }
        tracing::debug!("Drag ended on {id}");
        Some(id)
    }

    // ------------------------------------------------------------------
    // Selection & removal
    // ------------------------------------------------------------------

    /// Select a decoration, unselecting any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the decoration is not found.
    pub fn select(&mut self, id: DecorationId) -> DecorResult<()> {
        let idx = self.index_of(id).ok_or_else(|| Self::not_found(id))?;
        self.clear_selection();
        self.decorations[idx].selected = true;
        self.selected = Some(id);
        tracing::debug!("Selected {id}");
        Ok(())
    }

    /// Clear the selection. Returns `true` if something was selected.
    pub fn clear_selection(&mut self) -> bool {
        let Some(id) = self.selected.take() else {
            return false;
        };
        if let Some(idx) = self.index_of(id) {
            self.decorations[idx].selected = false;
        }
        true
    }

    /// Remove a decoration.
    ///
    /// # Errors
    ///
    /// Returns an error if the decoration is not found.
    pub fn remove(&mut self, id: DecorationId) -> DecorResult<Decoration> {
        let idx = self.index_of(id).ok_or_else(|| Self::not_found(id))?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        if matches!(self.drag, DragState::Dragging { id: dragged, .. } if dragged == id) {
            self.drag = DragState::Idle;
        }
        let removed = self.decorations.remove(idx);
        tracing::debug!("Removed {} {id}", removed.kind);
        Ok(removed)
    }

    /// Remove the selected decoration, if any.
    pub fn delete_selected(&mut self) -> Option<Decoration> {
        let id = self.selected?;
        self.remove(id).ok()
    }

    /// Remove every decoration after the user confirms.
    ///
    /// Returns `false` without touching anything when the user declines.
    pub fn clear_all(&mut self) -> bool {
        if !self.confirm.confirm(CLEAR_ALL_PROMPT) {
            tracing::debug!("Clear all declined");
            return false;
        }
        let count = self.decorations.len();
        self.decorations.clear();
        self.selected = None;
        self.drag = DragState::Idle;
        tracing::info!("Cleared {count} decorations");
        true
    }

    // ------------------------------------------------------------------
    // View settings
    // ------------------------------------------------------------------

    /// Set the on-screen ball scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is out of range; the old scale is kept.
    pub fn set_scale(&mut self, factor: f32) -> DecorResult<()> {
        self.settings.set_scale(factor).inspect_err(|_| {
            tracing::warn!("Rejected scale factor {factor}");
        })
    }

    /// Scale as a percentage label.
    #[must_use]
    pub fn scale_label(&self) -> String {
        self.settings.scale_label()
    }

    /// Turn the sparkle effect on or off.
    pub fn set_sparkle(&mut self, enabled: bool) {
        self.settings.set_sparkle(enabled);
    }

    /// Flip the sparkle effect, returning the new state.
    pub fn toggle_sparkle(&mut self) -> bool {
        self.settings.toggle_sparkle()
    }

    /// Replace the year label on the ball.
    pub fn set_year_label(&mut self, label: impl Into<String>) {
        self.settings.set_year_label(label);
    }

    /// Resize the zone and re-clamp every decoration into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the new size is degenerate.
    pub fn resize_zone(&mut self, width: f32, height: f32) -> DecorResult<()> {
        self.zone = DecorationZone::new(width, height, self.zone.item_size)?;
        for decoration in &mut self.decorations {
            decoration.position = self.zone.clamp(decoration.position);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Layout of the fixed-size raster export.
    #[must_use]
    pub fn export_layout(&self) -> ExportLayout {
        ExportLayout::compute(&self.config, &self.zone, &self.decorations)
    }

    // ------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------

    /// Apply one host event.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventOutcome {
        match event {
            InputEvent::PaletteClick { kind } => {
                let kind = DecorationKind::from_name_or_default(kind);
                EventOutcome::Placed(self.place_at_center(kind), kind)
            }
            InputEvent::PaletteDrop { kind, x, y } => {
                let kind = DecorationKind::from_name_or_default(kind);
                EventOutcome::Placed(self.place(kind, *x, *y), kind)
            }
            InputEvent::PointerDown { x, y } => match self.decoration_at(*x, *y) {
                Some(id) if self.begin_drag(id, *x, *y).is_ok() => EventOutcome::DragStarted(id),
                _ => EventOutcome::Ignored,
            },
            InputEvent::PointerMove { x, y } => match (self.update_drag(*x, *y), self.drag) {
                (Some(_), DragState::Dragging { id, .. }) => EventOutcome::Moved(id),
                _ => EventOutcome::Ignored,
            },
            InputEvent::PointerUp => self
                .end_drag()
                .map_or(EventOutcome::Ignored, EventOutcome::DragEnded),
            InputEvent::Click { x, y } => match self.decoration_at(*x, *y) {
                Some(id) if self.select(id).is_ok() => EventOutcome::Selected(id),
                Some(_) => EventOutcome::Ignored,
                None if self.clear_selection() => EventOutcome::SelectionCleared,
                None => EventOutcome::Ignored,
            },
            InputEvent::DoubleClick { x, y } => match self.decoration_at(*x, *y) {
                Some(id) if self.remove(id).is_ok() => EventOutcome::Removed(id),
                _ => EventOutcome::Ignored,
            },
            InputEvent::Key { key } if key == DELETE_KEY => self
                .delete_selected()
                .map_or(EventOutcome::Ignored, |d| EventOutcome::Removed(d.id)),
            InputEvent::Key { .. } => EventOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedAnswer;

    fn manager() -> DecorationManager {
        DecorationManager::with_defaults(FixedAnswer::YES)
    }

    #[test]
    fn place_star_at_point() {
        let mut m = manager();
        let id = m.place(DecorationKind::Star, 100.0, 100.0);

        assert_eq!(m.len(), 1);
        let last = m.decorations().last().expect("one decoration");
        assert_eq!(last.id, id);
        assert_eq!(last.kind, DecorationKind::Star);
        assert_eq!(last.position, Position::new(100.0, 100.0));
    }

    #[test]
    fn place_clamps_to_zone() {
        let mut m = manager();
        let id = m.place(DecorationKind::Cake, 1000.0, -50.0);
        let pos = m.get(id).expect("placed").position;
        assert_eq!(pos, Position::new(360.0, 0.0));
    }

    #[test]
    fn place_named_unknown_uses_default() {
        let mut m = manager();
        let id = m.place_named("unknown-xyz", 10.0, 10.0);
        assert_eq!(m.get(id).expect("placed").glyph(), "🎉");
    }

    #[test]
    fn place_at_center_targets_zone_middle() {
        let mut m = manager();
        let id = m.place_at_center(DecorationKind::Gift);
        assert_eq!(m.get(id).expect("placed").position, Position::new(200.0, 200.0));
    }

    #[test]
    fn drag_keeps_grab_offset_and_clamps() {
        let mut m = manager();
        let id = m.place(DecorationKind::Star, 100.0, 100.0);

        m.begin_drag(id, 110.0, 120.0).expect("begin drag");
        assert!(m.get(id).expect("present").dragging);

        let pos = m.update_drag(160.0, 170.0).expect("dragging");
        assert_eq!(pos, Position::new(150.0, 150.0));

        let pos = m.update_drag(1000.0, -1000.0).expect("dragging");
        assert_eq!(pos, Position::new(360.0, 0.0));

        assert_eq!(m.end_drag(), Some(id));
        assert!(!m.get(id).expect("present").dragging);
        assert_eq!(m.drag_state(), DragState::Idle);
        assert_eq!(m.update_drag(0.0, 0.0), None);
    }

    #[test]
    fn begin_drag_unknown_fails() {
        let mut m = manager();
        let result = m.begin_drag(DecorationId::new(), 0.0, 0.0);
        assert!(matches!(result, Err(DecorError::DecorationNotFound(_))));
        assert_eq!(m.drag_state(), DragState::Idle);
    }

    #[test]
    fn new_drag_ends_previous() {
        let mut m = manager();
        let a = m.place(DecorationKind::Star, 0.0, 0.0);
        let b = m.place(DecorationKind::Cake, 200.0, 200.0);
        m.begin_drag(a, 5.0, 5.0).expect("drag a");
        m.begin_drag(b, 205.0, 205.0).expect("drag b");
        assert!(!m.get(a).expect("a").dragging);
        assert!(m.get(b).expect("b").dragging);
    }

    #[test]
    fn selecting_b_unselects_a() {
        let mut m = manager();
        let a = m.place(DecorationKind::Star, 0.0, 0.0);
        let b = m.place(DecorationKind::Cake, 100.0, 100.0);

        m.select(a).expect("select a");
        m.select(b).expect("select b");

        assert_eq!(m.selected_id(), Some(b));
        assert!(!m.get(a).expect("a").selected);
        assert!(m.get(b).expect("b").selected);
        assert_eq!(m.decorations().iter().filter(|d| d.selected).count(), 1);
    }

    #[test]
    fn deleting_selected_clears_selection() {
        let mut m = manager();
        let a = m.place(DecorationKind::Star, 0.0, 0.0);
        m.select(a).expect("select");

        let removed = m.delete_selected().expect("removed");
        assert_eq!(removed.id, a);
        assert!(m.selected().is_none());
        assert!(m.is_empty());
        assert!(m.delete_selected().is_none());
    }

    #[test]
    fn remove_selected_clears_selection() {
        let mut m = manager();
        let a = m.place(DecorationKind::Star, 0.0, 0.0);
        let b = m.place(DecorationKind::Star, 50.0, 0.0);
        m.select(a).expect("select");
        m.remove(a).expect("remove");
        assert_eq!(m.selected_id(), None);
        assert_eq!(m.len(), 1);
        assert!(m.get(b).is_some());
    }

    #[test]
    fn remove_unknown_fails() {
        let mut m = manager();
        assert!(m.remove(DecorationId::new()).is_err());
    }

    #[test]
    fn clear_all_confirmed_empties() {
        let mut m = manager();
        for i in 0..5u8 {
            m.place(DecorationKind::Balloon, f32::from(i) * 10.0, 0.0);
        }
        let first = m.decorations()[0].id;
        m.select(first).expect("select");

        assert!(m.clear_all());
        assert_eq!(m.len(), 0);
        assert!(m.selected().is_none());
    }

    #[test]
    fn clear_all_declined_is_noop() {
        let mut m = DecorationManager::with_defaults(FixedAnswer::NO);
        m.place(DecorationKind::Balloon, 0.0, 0.0);
        assert!(!m.clear_all());
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn clear_all_asks_the_prompt() {
        let mut m = DecorationManager::with_defaults(|message: &str| message == CLEAR_ALL_PROMPT);
        m.place(DecorationKind::Balloon, 0.0, 0.0);
        assert!(m.clear_all());
        assert!(m.is_empty());
    }

    #[test]
    fn decoration_at_prefers_topmost() {
        let mut m = manager();
        let _below = m.place(DecorationKind::Star, 100.0, 100.0);
        let above = m.place(DecorationKind::Cake, 110.0, 110.0);
        assert_eq!(m.decoration_at(120.0, 120.0), Some(above));
        assert_eq!(m.decoration_at(5.0, 5.0), None);
    }

    #[test]
    fn resize_zone_reclamps() {
        let mut m = manager();
        let id = m.place(DecorationKind::Star, 300.0, 300.0);
        m.resize_zone(200.0, 250.0).expect("resize");
        assert_eq!(m.get(id).expect("present").position, Position::new(160.0, 210.0));
        assert!(m.resize_zone(0.0, 10.0).is_err());
    }

    #[test]
    fn scale_does_not_change_export_size() {
        let mut m = manager();
        m.place(DecorationKind::Star, 100.0, 100.0);
        m.set_scale(1.5).expect("scale");
        assert_eq!(m.scale_label(), "150%");
        let layout = m.export_layout();
        assert_eq!(layout.size, 800);
        assert_eq!(layout.glyph_count(), 1);
    }

    #[test]
    fn bad_scale_keeps_previous() {
        let mut m = manager();
        m.set_scale(0.5).expect("scale");
        assert!(m.set_scale(-1.0).is_err());
        assert_eq!(m.scale_label(), "50%");
    }

    #[test]
    fn with_defaults_matches_validated_default() {
        let checked =
            DecorationManager::new(DecoratorConfig::default(), FixedAnswer::YES).expect("manager");
        let unchecked = manager();
        assert_eq!(unchecked.config(), checked.config());
        assert_eq!(unchecked.zone(), checked.zone());
        assert_eq!(unchecked.settings(), checked.settings());
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = DecoratorConfig {
            zone_width: -1.0,
            ..DecoratorConfig::default()
        };
        assert!(DecorationManager::new(config, FixedAnswer::YES).is_err());
    }
}
