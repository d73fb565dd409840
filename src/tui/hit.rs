use ratatui::layout::{Position, Rect};

use crate::model::TaskId;

use super::app::FormField;

/// Something clickable on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    AddTask,
    /// Anywhere on a card outside its controls: opens the view modal
    Card(TaskId),
    Toggle(TaskId),
    Edit(TaskId),
    Delete(TaskId),
    ModalClose,
    ModalSave,
    Field(FormField),
    ConfirmYes,
    ConfirmNo,
    NoticeOk,
}

/// Clickable regions recorded during the last draw.
///
/// Regions are pushed in paint order. A click resolves to the last region
/// containing it, so a control drawn on top of a card shadows the card and
/// exactly one target fires per click.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, rect: Rect, target: HitTarget) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push((rect, target));
        }
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, target)| *target)
    }

    /// Area registered for `target` (the topmost one if several)
    pub fn rect_of(&self, target: HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, t)| *t == target)
            .map(|(rect, _)| *rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_innermost_wins() {
        let mut map = HitMap::default();
        map.push(Rect::new(0, 0, 30, 2), HitTarget::Card(1));
        map.push(Rect::new(0, 0, 2, 1), HitTarget::Toggle(1));
        map.push(Rect::new(27, 0, 1, 1), HitTarget::Edit(1));

        assert_eq!(map.target_at(0, 0), Some(HitTarget::Toggle(1)));
        assert_eq!(map.target_at(27, 0), Some(HitTarget::Edit(1)));
        assert_eq!(map.target_at(10, 1), Some(HitTarget::Card(1)));
        assert_eq!(map.target_at(40, 0), None);
    }

    #[test]
    fn test_empty_rects_ignored() {
        let mut map = HitMap::default();
        map.push(Rect::new(5, 5, 0, 3), HitTarget::AddTask);
        assert_eq!(map.rect_of(HitTarget::AddTask), None);
        map.push(Rect::new(5, 5, 4, 1), HitTarget::AddTask);
        assert_eq!(map.rect_of(HitTarget::AddTask), Some(Rect::new(5, 5, 4, 1)));
        map.clear();
        assert_eq!(map.target_at(5, 5), None);
    }
}
