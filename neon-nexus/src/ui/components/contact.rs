use crate::form::{FieldKind, FormState};
use maud::{html, Markup};

pub fn render_contact_form(form: &FormState) -> Markup {
    let report = form.report();
    html! {
        @for field in form.fields() {
            @let error = report.and_then(|r| r.error_for(field.name));
            @let id = format!("contact-{}", field.name);
            div class=(if error.is_some() { "form__field has-error" } else { "form__field" }) {
                label for=(id) {
                    (field.label)
                    @if field.required { " *" }
                }
                @match field.kind {
                    FieldKind::Textarea => {
                        textarea id=(id) name=(field.name) rows="4" required[field.required]
                            aria-invalid=(error.is_some().to_string()) {
                            (form.value(field.name))
                        }
                    }
                    FieldKind::Email => {
                        input id=(id) name=(field.name) type="email" value=(form.value(field.name))
                            required[field.required] aria-invalid=(error.is_some().to_string());
                    }
                    FieldKind::Text => {
                        input id=(id) name=(field.name) type="text" value=(form.value(field.name))
                            required[field.required] aria-invalid=(error.is_some().to_string());
                    }
                }
                span class="form__error" role="alert" {
                    @if let Some(message) = error { (message) }
                }
            }
        }
        button class="btn btn--primary" type="submit" { "Send Transmission" }
        @if let Some(report) = report {
            p class=(if report.is_valid() { "form__feedback is-success" } else { "form__feedback is-error" })
                aria-live="polite" {
                (report.message)
            }
        } @else {
            p class="form__feedback" aria-live="polite" {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{EMAIL_MESSAGE, FAILURE_MESSAGE, REQUIRED_MESSAGE, SUCCESS_MESSAGE};

    #[test]
    fn errors_render_inline_per_field() {
        let mut form = FormState::contact();
        form.set("email", "nope");
        form.submit();
        let html = render_contact_form(&form).into_string();

        assert_eq!(html.matches(REQUIRED_MESSAGE).count(), 2);
        assert_eq!(html.matches(EMAIL_MESSAGE).count(), 1);
        assert_eq!(html.matches("has-error").count(), 3);
        assert!(html.contains(FAILURE_MESSAGE));
        assert!(html.contains(r#"value="nope""#));
    }

    #[test]
    fn success_renders_message_and_empty_fields() {
        let mut form = FormState::contact();
        form.set("name", "Rae");
        form.set("email", "rae@orbital.studio");
        form.set("message", "Hi");
        form.submit();
        let html = render_contact_form(&form).into_string();

        assert!(html.contains(SUCCESS_MESSAGE));
        assert!(!html.contains("has-error"));
        assert!(!html.contains("rae@orbital.studio"));
    }
}
