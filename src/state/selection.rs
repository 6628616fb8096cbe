use super::data::ProductId;

/// Which product is being inspected and whether the add form is open
///
/// Pure state: the detail query reads `selected_product` as its
/// enablement gate, nothing here triggers I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected_product: Option<ProductId>,
    add_form_visible: bool,
}

impl Selection {
    pub fn select_product(&mut self, id: ProductId) {
        self.selected_product = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected_product = None;
    }

    pub fn open_add_form(&mut self) {
        self.add_form_visible = true;
    }

    pub fn close_add_form(&mut self) {
        self.add_form_visible = false;
    }

    pub fn selected_product(&self) -> Option<ProductId> {
        self.selected_product
    }

    pub fn is_add_form_visible(&self) -> bool {
        self.add_form_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let selection = Selection::default();
        assert_eq!(selection.selected_product(), None);
        assert!(!selection.is_add_form_visible());
    }

    #[test]
    fn test_select_and_clear() {
        let mut selection = Selection::default();
        selection.select_product(1);
        selection.select_product(2);
        assert_eq!(selection.selected_product(), Some(2));

        selection.clear_selection();
        assert_eq!(selection.selected_product(), None);
    }

    #[test]
    fn test_overlays_are_independent() {
        let mut selection = Selection::default();
        selection.open_add_form();
        selection.select_product(4);
        assert!(selection.is_add_form_visible());

        selection.close_add_form();
        assert_eq!(selection.selected_product(), Some(4));
        assert!(!selection.is_add_form_visible());
    }
}
