/// Contact form: local validation, URL-encoded submission to the form
/// backend, and the three-state outcome (idle / success / error).
///
/// Validation runs before any network traffic; invalid input never
/// produces a request. The transport sits behind a trait so the submit
/// path is testable without a network, and the real POST runs on a
/// worker thread so the app loop never blocks on it.

use std::fmt;
use std::time::Duration;

use isahc::prelude::*;
use isahc::Request;

// ── Form data and validation ──

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormStatus {
    Idle,
    Success,
    Error,
}

pub fn validate(data: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if data.name.trim().is_empty() {
        errors.name = Some("Name is required");
    }

    if data.email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !email_shape_ok(data.email.trim()) {
        errors.email = Some("Invalid email format");
    }

    if data.message.trim().is_empty() {
        errors.message = Some("Message is required");
    } else if data.message.chars().count() < 10 {
        errors.message = Some("Message must be at least 10 characters");
    }

    errors
}

/// `local@domain.tld` shape: one `@`, no whitespace, dotted domain.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let local = match parts.next() {
        Some(p) => p,
        None => return false,
    };
    let domain = match parts.next() {
        Some(p) => p,
        None => return false,
    };
    if parts.next().is_some() || local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// ── Body encoding ──

/// URL-encoded body with the static form identifier first.
pub fn encode_body(data: &FormData) -> String {
    let mut body = String::with_capacity(64 + data.name.len() + data.email.len() + data.message.len());
    push_pair(&mut body, "form-name", "contact");
    push_pair(&mut body, "name", &data.name);
    push_pair(&mut body, "email", &data.email);
    push_pair(&mut body, "message", &data.message);
    body
}

fn push_pair(body: &mut String, key: &str, value: &str) {
    if !body.is_empty() {
        body.push('&');
    }
    urlencode(key, body);
    body.push('=');
    urlencode(value, body);
}

/// Percent-encoding in the form-urlencoded flavor: space becomes `+`.
fn urlencode(s: &str, out: &mut String) {
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => {
                const HEX: &[u8; 16] = b"0123456789ABCDEF";
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0xf) as usize] as char);
            }
        }
    }
}

// ── Transport ──

#[derive(Debug)]
pub enum SubmitError {
    /// Connection, DNS, TLS or request-construction failure.
    Transport(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport error: {}", msg),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Seam between the form and the network. The real implementation posts
/// over HTTP; tests substitute a mock.
pub trait FormTransport: Send + Sync {
    /// POST a form-urlencoded body and return the response status code.
    fn post_form(&self, endpoint: &str, body: &str) -> Result<u16, SubmitError>;
}

pub struct HttpTransport;

impl FormTransport for HttpTransport {
    fn post_form(&self, endpoint: &str, body: &str) -> Result<u16, SubmitError> {
        let request = Request::post(endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .timeout(Duration::from_secs(10))
            .body(body.to_string())
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let response = request
            .send()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(response.status().as_u16())
    }
}

/// One submission attempt. No automatic retry: a failed attempt is
/// reported and left to the user.
pub fn submit(data: &FormData, endpoint: &str, transport: &dyn FormTransport) -> FormStatus {
    let body = encode_body(data);
    match transport.post_form(endpoint, &body) {
        Ok(code) if (200..300).contains(&code) => FormStatus::Success,
        Ok(code) => {
            log::warn!("form endpoint returned status {code}");
            FormStatus::Error
        }
        Err(e) => {
            log::warn!("form submission failed: {e}");
            FormStatus::Error
        }
    }
}

// ── Form state machine ──

/// Editable form state. Owned by the app world; mutated only from the
/// input handler and the submit-outcome channel.
#[derive(Default)]
pub struct ContactForm {
    pub data: FormData,
    pub errors: FieldErrors,
    pub status: FormStatus,
    pub submitting: bool,
}

impl Default for FormStatus {
    fn default() -> Self {
        FormStatus::Idle
    }
}

impl ContactForm {
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.data.name,
            Field::Email => &mut self.data.email,
            Field::Message => &mut self.data.message,
        }
    }

    /// Append a typed character; editing a field clears its error.
    pub fn push_char(&mut self, field: Field, ch: char) {
        self.field_mut(field).push(ch);
        self.errors.clear(field);
    }

    pub fn backspace(&mut self, field: Field) {
        self.field_mut(field).pop();
        self.errors.clear(field);
    }

    /// Validate and, if clean, hand back a snapshot for the worker to
    /// post. Invalid input sets per-field errors and returns `None` —
    /// no network call happens.
    pub fn begin_submit(&mut self) -> Option<FormData> {
        if self.submitting {
            return None;
        }
        self.errors = validate(&self.data);
        if !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        self.status = FormStatus::Idle;
        Some(self.data.clone())
    }

    /// Fold the worker's outcome back in. Success resets the fields;
    /// failure keeps what the user typed.
    pub fn apply_outcome(&mut self, status: FormStatus) {
        self.submitting = false;
        self.status = status;
        if status == FormStatus::Success {
            self.data = FormData::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock transport: scripted response, call counting, body capture.
    struct MockTransport {
        response: Mutex<Option<Result<u16, SubmitError>>>,
        calls: AtomicUsize,
        last_body: Mutex<String>,
    }

    impl MockTransport {
        fn returning(response: Result<u16, SubmitError>) -> Self {
            MockTransport {
                response: Mutex::new(Some(response)),
                calls: AtomicUsize::new(0),
                last_body: Mutex::new(String::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl FormTransport for MockTransport {
        fn post_form(&self, _endpoint: &str, body: &str) -> Result<u16, SubmitError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_body.lock().unwrap() = body.to_string();
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(200))
        }
    }

    fn valid_data() -> FormData {
        FormData {
            name: "Hero".into(),
            email: "hero@guild.com".into(),
            message: "This is a sufficiently long quest description.".into(),
        }
    }

    #[test]
    fn empty_name_and_short_message_fail_without_network() {
        let mut form = ContactForm::default();
        form.data = FormData {
            name: "".into(),
            email: "a@b.com".into(),
            message: "short".into(),
        };
        let transport = MockTransport::returning(Ok(200));

        assert!(form.begin_submit().is_none());
        assert_eq!(form.errors.name, Some("Name is required"));
        assert_eq!(form.errors.email, None);
        assert_eq!(
            form.errors.message,
            Some("Message must be at least 10 characters")
        );
        assert_eq!(transport.call_count(), 0);
        assert!(!form.submitting);
    }

    #[test]
    fn successful_submission_resets_fields() {
        let mut form = ContactForm::default();
        form.data = valid_data();
        let transport = MockTransport::returning(Ok(200));

        let snapshot = form.begin_submit().expect("valid input should submit");
        let outcome = submit(&snapshot, "https://example.test/", &transport);
        form.apply_outcome(outcome);

        assert_eq!(transport.call_count(), 1);
        assert_eq!(form.status, FormStatus::Success);
        assert_eq!(form.data, FormData::default());
        assert!(!form.submitting);
    }

    #[test]
    fn rejected_submission_keeps_fields() {
        let mut form = ContactForm::default();
        form.data = valid_data();
        let transport =
            MockTransport::returning(Err(SubmitError::Transport("connection refused".into())));

        let snapshot = form.begin_submit().unwrap();
        let outcome = submit(&snapshot, "https://example.test/", &transport);
        form.apply_outcome(outcome);

        assert_eq!(form.status, FormStatus::Error);
        assert_eq!(form.data, valid_data());
    }

    #[test]
    fn non_success_status_maps_to_error() {
        let transport = MockTransport::returning(Ok(500));
        let outcome = submit(&valid_data(), "https://example.test/", &transport);
        assert_eq!(outcome, FormStatus::Error);
    }

    #[test]
    fn email_shape_checks() {
        for good in ["a@b.com", "hero@guild.co.uk", "x.y@z.io"] {
            let data = FormData {
                name: "n".into(),
                email: good.into(),
                message: "long enough message".into(),
            };
            assert!(validate(&data).email.is_none(), "{good}");
        }
        for bad in ["plainaddress", "a@b", "a b@c.com", "@b.com", "a@.com", "a@b@c.com"] {
            let data = FormData {
                name: "n".into(),
                email: bad.into(),
                message: "long enough message".into(),
            };
            assert_eq!(validate(&data).email, Some("Invalid email format"), "{bad}");
        }
    }

    #[test]
    fn body_is_form_urlencoded() {
        let data = FormData {
            name: "Hero Name".into(),
            email: "hero@guild.com".into(),
            message: "a & b = c".into(),
        };
        assert_eq!(
            encode_body(&data),
            "form-name=contact&name=Hero+Name&email=hero%40guild.com&message=a+%26+b+%3D+c"
        );
    }

    #[test]
    fn multibyte_input_is_percent_encoded_per_byte() {
        let mut out = String::new();
        urlencode("é", &mut out);
        assert_eq!(out, "%C3%A9");
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = ContactForm::default();
        form.data.email = "a@b.com".into();
        form.data.message = "short".into();
        assert!(form.begin_submit().is_none());
        assert!(form.errors.name.is_some());

        form.push_char(Field::Name, 'H');
        assert!(form.errors.name.is_none());
        assert!(form.errors.message.is_some());
    }

    #[test]
    fn double_submit_is_blocked_while_in_flight() {
        let mut form = ContactForm::default();
        form.data = valid_data();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }
}
