use std::cell::Cell;
use std::fmt;
use std::pin::pin;
use std::rc::Rc;

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use web_sys::AbortController;

/// Per-attempt cap on the fetch; the free-tier backend can take a while to
/// cold start, so this is deliberately generous.
pub const ATTEMPT_TIMEOUT_MS: u32 = 60_000;
/// Pause between the first failed attempt and the retry.
pub const RETRY_BACKOFF_MS: u32 = 2_000;
/// Two attempts total: the original call plus one retry.
pub const MAX_ATTEMPTS: u32 = 2;
/// How long the footer shows the success banner before going back to idle.
pub const SUCCESS_RESET_MS: u32 = 3_000;

pub const GENERIC_FAILURE_MSG: &str = "提交失败，请稍后重试";
pub const COLD_START_MSG: &str = "服务器启动中，请稍后重试（首次访问需要 1-2 分钟）";

#[derive(Serialize, Clone, Default, PartialEq, Debug)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub grade: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    EmptyPhone,
    InvalidPhoneFormat,
    EmptyGrade,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::EmptyName => "请填写您的姓名",
            ValidationError::EmptyPhone => "请填写联系电话",
            ValidationError::InvalidPhoneFormat => "请填写正确的手机号码",
            ValidationError::EmptyGrade => "请填写孩子年级",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Mainland-China mobile number: `1`, then `3`-`9`, then nine digits.
fn is_valid_phone(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    bytes.len() == 11
        && bytes[0] == b'1'
        && (b'3'..=b'9').contains(&bytes[1])
        && bytes[2..].iter().all(|b| b.is_ascii_digit())
}

/// Checks run in field order and stop at the first failure, so the user
/// sees one correction at a time.
pub fn validate(form: &LeadForm) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let phone = form.phone.trim();
    if phone.is_empty() {
        return Err(ValidationError::EmptyPhone);
    }
    if !is_valid_phone(phone) {
        return Err(ValidationError::InvalidPhoneFormat);
    }
    if form.grade.trim().is_empty() {
        return Err(ValidationError::EmptyGrade);
    }
    Ok(())
}

/// What one completed HTTP exchange boils down to: status class plus the
/// server's optional explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerReply {
    pub ok: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    TimedOut,
    Failed(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::TimedOut => write!(f, "request timed out"),
            TransportError::Failed(reason) => write!(f, "request failed: {}", reason),
        }
    }
}

/// One raw attempt against the contact endpoint. The controller owns
/// timeout and retry; implementations only perform the exchange.
pub trait LeadTransport {
    async fn post_lead(&self, lead: &LeadForm) -> Result<ServerReply, TransportError>;
}

/// Injectable delay so the timeout and backoff can be driven by tests.
pub trait Sleep {
    async fn sleep(&self, ms: u32);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Success,
    Error(String),
}

/// What the form shows, one value per phase of the submission lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Shared in-flight flag for one form instance. While a submission is
/// running, further triggers are no-ops.
#[derive(Clone, Default)]
pub struct SubmissionGate {
    busy: Rc<Cell<bool>>,
}

impl SubmissionGate {
    fn try_begin(&self) -> bool {
        if self.busy.get() {
            false
        } else {
            self.busy.set(true);
            true
        }
    }

    fn finish(&self) {
        self.busy.set(false);
    }
}

/// Full submission lifecycle for one form instance: gate re-entry, run the
/// submission, publish each state change, and revert to idle a fixed delay
/// after success. Returns without publishing anything when a submission is
/// already in flight.
pub async fn drive_submission<T, S, F>(
    gate: &SubmissionGate,
    transport: &T,
    timer: &S,
    lead: &LeadForm,
    mut publish: F,
) where
    T: LeadTransport,
    S: Sleep,
    F: FnMut(FormStatus),
{
    if !gate.try_begin() {
        return;
    }
    publish(FormStatus::Submitting);
    let outcome = submit_lead(transport, timer, lead).await;
    gate.finish();
    match outcome {
        SubmitOutcome::Success => {
            publish(FormStatus::Success);
            timer.sleep(SUCCESS_RESET_MS).await;
            publish(FormStatus::Idle);
        }
        SubmitOutcome::Error(message) => publish(FormStatus::Error(message)),
    }
}

/// Validate, then post with bounded retry. Every failure mode lands in
/// `SubmitOutcome::Error` with a message the footer can show as-is.
pub async fn submit_lead<T, S>(transport: &T, timer: &S, lead: &LeadForm) -> SubmitOutcome
where
    T: LeadTransport,
    S: Sleep,
{
    if let Err(err) = validate(lead) {
        return SubmitOutcome::Error(err.message().to_string());
    }

    match post_with_retry(transport, timer, lead).await {
        Ok(reply) if reply.ok => SubmitOutcome::Success,
        Ok(reply) => {
            SubmitOutcome::Error(reply.message.unwrap_or_else(|| GENERIC_FAILURE_MSG.to_string()))
        }
        Err(_) => SubmitOutcome::Error(COLD_START_MSG.to_string()),
    }
}

/// Sequential attempts with a fixed backoff in between. A reply from the
/// server, even a rejection, ends the loop; only transport failures retry.
async fn post_with_retry<T, S>(
    transport: &T,
    timer: &S,
    lead: &LeadForm,
) -> Result<ServerReply, TransportError>
where
    T: LeadTransport,
    S: Sleep,
{
    let mut attempt = 1;
    loop {
        match post_with_timeout(transport, timer, lead).await {
            Ok(reply) => return Ok(reply),
            Err(err) => {
                if attempt == MAX_ATTEMPTS {
                    log::error!("contact submit failed after {} attempts: {}", MAX_ATTEMPTS, err);
                    return Err(err);
                }
                log::warn!("contact submit attempt {}/{} failed: {}", attempt, MAX_ATTEMPTS, err);
                timer.sleep(RETRY_BACKOFF_MS).await;
                attempt += 1;
            }
        }
    }
}

/// Race one attempt against the attempt deadline. Losing the race drops the
/// attempt future, which aborts the in-flight fetch in `HttpTransport`.
async fn post_with_timeout<T, S>(
    transport: &T,
    timer: &S,
    lead: &LeadForm,
) -> Result<ServerReply, TransportError>
where
    T: LeadTransport,
    S: Sleep,
{
    let attempt = pin!(transport.post_lead(lead));
    let deadline = pin!(timer.sleep(ATTEMPT_TIMEOUT_MS));
    match future::select(attempt, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(TransportError::TimedOut),
    }
}

#[derive(Deserialize)]
struct ReplyBody {
    message: Option<String>,
}

/// Aborts the fetch when the attempt future is dropped mid-flight.
/// Aborting after the response has arrived is a no-op.
struct AbortOnDrop(AbortController);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

pub struct HttpTransport {
    base_url: &'static str,
}

impl HttpTransport {
    pub fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }
}

impl LeadTransport for HttpTransport {
    async fn post_lead(&self, lead: &LeadForm) -> Result<ServerReply, TransportError> {
        let controller = AbortController::new()
            .map_err(|e| TransportError::Failed(format!("{:?}", e)))?;
        let _abort = AbortOnDrop(controller.clone());

        let response = Request::post(&format!("{}/api/contact", self.base_url))
            .abort_signal(Some(&controller.signal()))
            .json(lead)
            .map_err(|e| TransportError::Failed(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Failed(e.to_string()))?;

        // The body is best-effort: a missing or malformed payload still
        // leaves the status class to decide the outcome.
        let message = response
            .json::<ReplyBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        Ok(ServerReply {
            ok: response.ok(),
            message,
        })
    }
}

pub struct BrowserSleep;

impl Sleep for BrowserSleep {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Pend once like `futures::pending!`, but wake the task first so
    /// `block_on` re-polls instead of parking forever.
    async fn yield_once() {
        let mut yielded = false;
        futures::future::poll_fn(move |cx| {
            if yielded {
                std::task::Poll::Ready(())
            } else {
                yielded = true;
                cx.waker().wake_by_ref();
                std::task::Poll::Pending
            }
        })
        .await
    }

    fn lead(name: &str, phone: &str, grade: &str) -> LeadForm {
        LeadForm {
            name: name.to_string(),
            phone: phone.to_string(),
            grade: grade.to_string(),
        }
    }

    fn valid_lead() -> LeadForm {
        lead("张三", "13912345678", "六年级")
    }

    enum Script {
        Reply(ServerReply),
        // pending for one poll, then replies
        SlowReply(ServerReply),
        Fail(&'static str),
        Hang,
    }

    struct FakeTransport {
        script: RefCell<VecDeque<Script>>,
        calls: Cell<u32>,
    }

    impl FakeTransport {
        fn new(script: Vec<Script>) -> Self {
            Self {
                script: RefCell::new(script.into()),
                calls: Cell::new(0),
            }
        }
    }

    impl LeadTransport for FakeTransport {
        async fn post_lead(&self, _lead: &LeadForm) -> Result<ServerReply, TransportError> {
            self.calls.set(self.calls.get() + 1);
            let step = self.script.borrow_mut().pop_front().expect("script exhausted");
            match step {
                Script::Reply(reply) => Ok(reply),
                Script::SlowReply(reply) => {
                    yield_once().await;
                    Ok(reply)
                }
                Script::Fail(reason) => Err(TransportError::Failed(reason.to_string())),
                Script::Hang => future::pending().await,
            }
        }
    }

    #[derive(Default)]
    struct FakeSleep {
        slept: RefCell<Vec<u32>>,
    }

    impl Sleep for FakeSleep {
        async fn sleep(&self, ms: u32) {
            self.slept.borrow_mut().push(ms);
            // yield one poll so another task can run while this one waits
            yield_once().await;
        }
    }

    fn accepted() -> ServerReply {
        ServerReply {
            ok: true,
            message: Some("提交成功".to_string()),
        }
    }

    #[test]
    fn validate_checks_fields_in_order() {
        assert_eq!(
            validate(&lead("  ", "", "")),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate(&lead("张三", "  ", "")),
            Err(ValidationError::EmptyPhone)
        );
        assert_eq!(
            validate(&lead("张三", "12345", "")),
            Err(ValidationError::InvalidPhoneFormat)
        );
        assert_eq!(
            validate(&lead("张三", "13912345678", " ")),
            Err(ValidationError::EmptyGrade)
        );
        assert_eq!(validate(&valid_lead()), Ok(()));
    }

    #[test]
    fn phone_pattern() {
        for bad in [
            "12912345678", // second digit out of range
            "23912345678", // does not start with 1
            "1391234567",  // ten digits
            "139123456789", // twelve digits
            "1391234567a", // non-digit
            " 13912345678", // untrimmed input is trimmed before the check
        ] {
            let form = lead("张三", bad, "六年级");
            if bad.trim() == bad {
                assert_eq!(
                    validate(&form),
                    Err(ValidationError::InvalidPhoneFormat),
                    "{bad:?} should be rejected"
                );
            } else {
                assert_eq!(validate(&form), Ok(()), "{bad:?} should be trimmed and pass");
            }
        }
        for good in ["13000000000", "15912345678", "19999999999"] {
            assert_eq!(validate(&lead("张三", good, "六年级")), Ok(()), "{good:?}");
        }
    }

    #[test]
    fn invalid_input_makes_no_network_call() {
        let transport = FakeTransport::new(vec![]);
        let timer = FakeSleep::default();
        let outcome = block_on(submit_lead(&transport, &timer, &lead("", "", "")));
        assert_eq!(
            outcome,
            SubmitOutcome::Error("请填写您的姓名".to_string())
        );
        assert_eq!(transport.calls.get(), 0);
        assert!(timer.slept.borrow().is_empty());
    }

    #[test]
    fn first_attempt_success() {
        let transport = FakeTransport::new(vec![Script::Reply(accepted())]);
        let timer = FakeSleep::default();
        let outcome = block_on(submit_lead(&transport, &timer, &valid_lead()));
        assert_eq!(outcome, SubmitOutcome::Success);
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn network_error_then_success_retries_once() {
        let transport = FakeTransport::new(vec![
            Script::Fail("connection refused"),
            Script::Reply(accepted()),
        ]);
        let timer = FakeSleep::default();
        let outcome = block_on(submit_lead(&transport, &timer, &valid_lead()));
        assert_eq!(outcome, SubmitOutcome::Success);
        assert_eq!(transport.calls.get(), 2);
        // both attempts resolved before their deadline was ever polled,
        // so the only recorded delay is the inter-attempt backoff
        assert_eq!(*timer.slept.borrow(), vec![RETRY_BACKOFF_MS]);
    }

    #[test]
    fn both_attempts_time_out() {
        let transport = FakeTransport::new(vec![Script::Hang, Script::Hang]);
        let timer = FakeSleep::default();
        let outcome = block_on(submit_lead(&transport, &timer, &valid_lead()));
        assert_eq!(outcome, SubmitOutcome::Error(COLD_START_MSG.to_string()));
        assert_eq!(transport.calls.get(), 2);
        assert_eq!(
            *timer.slept.borrow(),
            vec![ATTEMPT_TIMEOUT_MS, RETRY_BACKOFF_MS, ATTEMPT_TIMEOUT_MS]
        );
    }

    #[test]
    fn server_rejection_is_not_retried() {
        let transport = FakeTransport::new(vec![Script::Reply(ServerReply {
            ok: false,
            message: Some("手机号已提交过".to_string()),
        })]);
        let timer = FakeSleep::default();
        let outcome = block_on(submit_lead(&transport, &timer, &valid_lead()));
        assert_eq!(
            outcome,
            SubmitOutcome::Error("手机号已提交过".to_string())
        );
        assert_eq!(transport.calls.get(), 1);
        // a server reply ends the loop immediately, no backoff
        assert!(timer.slept.borrow().is_empty());
    }

    #[test]
    fn second_submit_while_first_in_flight_is_ignored() {
        let transport = FakeTransport::new(vec![Script::SlowReply(accepted())]);
        let timer = FakeSleep::default();
        let gate = SubmissionGate::default();
        let mut first = vec![];
        let mut second = vec![];
        block_on(future::join(
            drive_submission(&gate, &transport, &timer, &valid_lead(), |s| first.push(s)),
            drive_submission(&gate, &transport, &timer, &valid_lead(), |s| second.push(s)),
        ));
        // the second trigger ran while the first attempt was suspended and
        // was dropped without touching the network
        assert_eq!(transport.calls.get(), 1);
        assert!(second.is_empty());
        assert_eq!(
            first,
            vec![FormStatus::Submitting, FormStatus::Success, FormStatus::Idle]
        );
    }

    #[test]
    fn success_reverts_to_idle_after_reset_delay() {
        let transport = FakeTransport::new(vec![Script::Reply(accepted())]);
        let timer = FakeSleep::default();
        let gate = SubmissionGate::default();
        let mut events = vec![];
        block_on(drive_submission(&gate, &transport, &timer, &valid_lead(), |s| {
            events.push(s)
        }));
        assert_eq!(
            events,
            vec![FormStatus::Submitting, FormStatus::Success, FormStatus::Idle]
        );
        assert_eq!(*timer.slept.borrow(), vec![SUCCESS_RESET_MS]);
    }

    #[test]
    fn failed_submission_leaves_form_resubmittable() {
        let transport = FakeTransport::new(vec![
            Script::Fail("connection refused"),
            Script::Fail("connection refused"),
            Script::Reply(accepted()),
        ]);
        let timer = FakeSleep::default();
        let gate = SubmissionGate::default();
        let mut events = vec![];
        block_on(drive_submission(&gate, &transport, &timer, &valid_lead(), |s| {
            events.push(s)
        }));
        assert_eq!(
            events,
            vec![
                FormStatus::Submitting,
                FormStatus::Error(COLD_START_MSG.to_string())
            ]
        );

        // an error leaves the gate open; the corrected resubmission goes out
        events.clear();
        block_on(drive_submission(&gate, &transport, &timer, &valid_lead(), |s| {
            events.push(s)
        }));
        assert_eq!(
            events,
            vec![FormStatus::Submitting, FormStatus::Success, FormStatus::Idle]
        );
        assert_eq!(transport.calls.get(), 3);
    }

    #[test]
    fn server_rejection_without_message_uses_generic_text() {
        let transport = FakeTransport::new(vec![Script::Reply(ServerReply {
            ok: false,
            message: None,
        })]);
        let timer = FakeSleep::default();
        let outcome = block_on(submit_lead(&transport, &timer, &valid_lead()));
        assert_eq!(outcome, SubmitOutcome::Error(GENERIC_FAILURE_MSG.to_string()));
        assert_eq!(transport.calls.get(), 1);
    }
}
