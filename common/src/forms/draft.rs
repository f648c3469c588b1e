//! State of the add/edit car dialog, minus the DOM.
//!
//! Generic over the picked file type so the browser keeps its `web_sys::File`
//! while the accept/submit rules stay testable on the host.

use super::car::{CarField, CarFieldError, CarFields, CarForm};
use super::image::{check_image, ImageRejection};

#[derive(Debug, Clone)]
pub struct CarDraft<F> {
    pub form: CarForm,
    submitted: bool,
    image: Option<F>,
    preview_url: Option<String>,
    /// Bumped on every pick or clear; a preview read for an older pick is
    /// ignored.
    selection: u64,
}

impl<F: Clone> CarDraft<F> {
    pub fn new(initial: &CarForm) -> Self {
        Self {
            form: initial.clone(),
            submitted: false,
            image: None,
            preview_url: None,
            selection: 0,
        }
    }

    pub fn reset(&mut self, initial: &CarForm) {
        self.form = initial.clone();
        self.submitted = false;
        self.clear_image();
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn image(&self) -> Option<&F> {
        self.image.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    /// Makes `file` the pending upload when it passes [`check_image`] and
    /// returns the selection number its preview must carry. A rejected file
    /// leaves the previous pick, if any, in place.
    pub fn pick_image(&mut self, file: F, mime: &str, size: u64) -> Result<u64, ImageRejection> {
        check_image(mime, size)?;
        self.selection += 1;
        self.image = Some(file);
        self.preview_url = None;
        Ok(self.selection)
    }

    /// Stores a finished preview read; `false` when it belongs to a pick that
    /// has since been replaced or cleared.
    pub fn preview_ready(&mut self, selection: u64, data_url: String) -> bool {
        if selection != self.selection || self.image.is_none() {
            return false;
        }
        self.preview_url = Some(data_url);
        true
    }

    pub fn clear_image(&mut self) {
        self.selection += 1;
        self.image = None;
        self.preview_url = None;
    }

    pub fn errors(&self) -> Vec<CarFieldError> {
        self.form.validate().err().unwrap_or_default()
    }

    /// Invalid markers only show once a submit has been attempted.
    pub fn is_invalid(&self, field: CarField) -> bool {
        self.submitted && self.errors().iter().any(|e| e.field() == field)
    }

    /// Marks the draft as submitted and hands out the validated payload with
    /// the pending upload. `None` while any field is invalid.
    pub fn submit(&mut self) -> Option<(CarFields, Option<F>)> {
        self.submitted = true;
        let fields = self.form.validate().ok()?;
        Some((fields, self.image.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::image::MAX_IMAGE_BYTES;

    fn filled() -> CarForm {
        CarForm {
            company: "Toyota".into(),
            model: "Sedan".into(),
            price: "45250".into(),
            description: String::new(),
        }
    }

    #[test]
    fn invalid_price_never_submits() {
        for price in ["0", "-5", "abc", ""] {
            let mut draft: CarDraft<&str> = CarDraft::new(&CarForm {
                price: price.into(),
                ..filled()
            });
            assert!(draft.submit().is_none(), "{price}");
            assert!(draft.submitted());
            assert!(draft.is_invalid(CarField::Price));
            assert!(!draft.is_invalid(CarField::Company));
        }
    }

    #[test]
    fn markers_wait_for_the_first_submit() {
        let mut draft: CarDraft<&str> = CarDraft::new(&CarForm::default());
        assert!(!draft.is_invalid(CarField::Company));
        assert!(draft.submit().is_none());
        assert!(draft.is_invalid(CarField::Company));
        assert!(draft.is_invalid(CarField::Model));
    }

    #[test]
    fn valid_draft_submits_with_its_image() {
        let mut draft = CarDraft::new(&filled());
        draft.pick_image("car.png", "image/png", 1_024).unwrap();
        let (fields, image) = draft.submit().unwrap();
        assert_eq!(fields.company, "Toyota");
        assert_eq!(fields.price, 45250.0);
        assert_eq!(image, Some("car.png"));
    }

    #[test]
    fn rejected_file_never_becomes_the_upload() {
        let mut draft = CarDraft::new(&filled());
        assert_eq!(
            draft.pick_image("notes.pdf", "application/pdf", 10),
            Err(ImageRejection::NotAnImage)
        );
        assert_eq!(draft.image(), None);

        let ticket = draft.pick_image("car.png", "image/png", 10).unwrap();
        assert!(draft.preview_ready(ticket, "data:image/png;base64,AA".into()));

        assert!(draft.pick_image("huge.jpg", "image/jpeg", MAX_IMAGE_BYTES + 1).is_err());
        assert_eq!(draft.image(), Some(&"car.png"));
        assert_eq!(draft.preview_url(), Some("data:image/png;base64,AA"));
        assert_eq!(draft.submit().unwrap().1, Some("car.png"));
    }

    #[test]
    fn late_preview_of_a_replaced_pick_is_ignored() {
        let mut draft = CarDraft::new(&filled());
        let first = draft.pick_image("a.png", "image/png", 10).unwrap();
        let second = draft.pick_image("b.png", "image/png", 10).unwrap();
        assert!(!draft.preview_ready(first, "data:a".into()));
        assert_eq!(draft.preview_url(), None);
        assert!(draft.preview_ready(second, "data:b".into()));

        draft.clear_image();
        assert!(!draft.preview_ready(second, "data:b".into()));
        assert_eq!(draft.image(), None);
        assert_eq!(draft.preview_url(), None);
    }

    #[test]
    fn reset_forgets_the_previous_car() {
        let mut draft = CarDraft::new(&filled());
        draft.pick_image("a.png", "image/png", 10).unwrap();
        assert!(draft.submit().is_some());

        draft.reset(&CarForm::default());
        assert_eq!(draft.form, CarForm::default());
        assert!(!draft.submitted());
        assert_eq!(draft.image(), None);
    }
}
