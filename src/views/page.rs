//! Page container composing the list and the creation form.

use crate::client::AsyncCardsClient;
use crate::views::form::{Acknowledgment, ContactFormView, FormSignal, SubmitOutcome};
use crate::views::list::ContactListView;
use tracing::debug;

/// Top-level page state.
///
/// The form is mounted exactly while the visibility flag is set; the list is
/// always mounted. The two views never talk to each other directly.
#[derive(Debug, Clone, Default)]
pub struct ContactsPage {
    list: ContactListView,
    form: Option<ContactFormView>,
    refresh_after_create: bool,
    notice: Option<Acknowledgment>,
}

impl ContactsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-activate the list after every successful create.
    pub fn with_refresh_after_create(mut self, refresh: bool) -> Self {
        self.refresh_after_create = refresh;
        self
    }

    /// Activate the list view.
    pub async fn mount(&mut self, client: &dyn AsyncCardsClient) {
        self.list.activate(client).await;
    }

    pub fn list(&self) -> &ContactListView {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ContactListView {
        &mut self.list
    }

    pub fn form_visible(&self) -> bool {
        self.form.is_some()
    }

    pub fn form(&self) -> Option<&ContactFormView> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ContactFormView> {
        self.form.as_mut()
    }

    /// Last acknowledgment raised by a form that has since closed.
    pub fn notice(&self) -> Option<Acknowledgment> {
        self.notice
    }

    /// "Add Contact": show a fresh form. No-op when already open.
    pub fn open_form(&mut self) {
        if self.form.is_none() {
            debug!("Opening contact form");
            self.form = Some(ContactFormView::new());
            self.notice = None;
        }
    }

    /// React to a signal from the form.
    pub fn handle_signal(&mut self, signal: FormSignal) {
        match signal {
            FormSignal::Close => {
                debug!("Closing contact form");
                if let Some(form) = self.form.take() {
                    self.notice = form.acknowledgment();
                }
            }
        }
    }

    /// Cancel the open form, if any.
    pub fn cancel_form(&mut self) {
        if let Some(form) = self.form.as_mut() {
            let signal = form.cancel();
            self.handle_signal(signal);
        }
    }

    /// Submit the open form and apply its outcome to the page.
    ///
    /// Returns `None` when no form is open.
    pub async fn submit_form(&mut self, client: &dyn AsyncCardsClient) -> Option<SubmitOutcome> {
        let form = self.form.as_mut()?;
        let outcome = form.submit(client).await;

        if let SubmitOutcome::Created(signal) = &outcome {
            self.handle_signal(*signal);
            if self.refresh_after_create {
                self.list.activate(client).await;
            }
        }

        Some(outcome)
    }

    /// Render the whole page as text.
    pub fn render(&self) -> String {
        let mut out = String::from("Contacts  [Add Contact]\n\n");
        out.push_str(&self.list.render());

        if let Some(notice) = self.notice {
            out.push_str("\n\n");
            out.push_str(notice.message());
        }

        if let Some(form) = &self.form {
            out.push_str("\n\n");
            out.push_str(&form.render());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FormField;

    #[test]
    fn test_form_hidden_initially() {
        let page = ContactsPage::new();
        assert!(!page.form_visible());
        assert!(page.list().is_loading());
    }

    #[test]
    fn test_open_then_cancel() {
        let mut page = ContactsPage::new();
        page.open_form();
        assert!(page.form_visible());

        page.form_mut().unwrap().change(FormField::Name, "Angela");
        page.cancel_form();
        assert!(!page.form_visible());
        assert_eq!(page.notice(), None);

        page.open_form();
        assert_eq!(page.form().unwrap().value(FormField::Name), "");
    }

    #[test]
    fn test_open_form_twice_keeps_draft() {
        let mut page = ContactsPage::new();
        page.open_form();
        page.form_mut().unwrap().change(FormField::Title, "CTO");
        page.open_form();
        assert_eq!(page.form().unwrap().value(FormField::Title), "CTO");
    }

    #[test]
    fn test_render_includes_form_only_when_visible() {
        let mut page = ContactsPage::new();
        assert!(!page.render().contains("Add New Contact"));
        page.open_form();
        assert!(page.render().contains("Add New Contact"));
    }
}
