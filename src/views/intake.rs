//! Intake form rendering.
//!
//! Four required free-text fields. The form's draft lives in the browser
//! only; the page script blocks submission while any field is empty, clears
//! the fields when the create call returns success, and leaves them alone
//! on failure so the user can resubmit.

pub fn render_intake_form() -> String {
    r#"<form id="intake-form" autocomplete="off">
<h2>Book a vehicle in</h2>
<input type="text" name="customerName" placeholder="Customer name">
<input type="text" name="make" placeholder="Make">
<input type="text" name="model" placeholder="Model">
<input type="text" name="registration" placeholder="Registration">
<button type="submit">Book in</button>
</form>"#
        .to_string()
}
