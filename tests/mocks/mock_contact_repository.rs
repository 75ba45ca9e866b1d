use async_trait::async_trait;
use contactbook_client::domain::{ContactId, SearchField};
use contactbook_client::error::{ContactApiError, ContactApiResult};
use contactbook_client::models::{Contact, ContactDraft};
use contactbook_client::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A repository call, recorded in the order it was made.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(ContactId),
    Search(SearchField, String),
    Create(ContactDraft),
    Update(ContactId, ContactDraft),
    Delete(ContactId),
}

/// Repository operation, used to configure failures and delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Search,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone)]
enum Failure {
    Status(u16, String),
    Transport,
}

impl Failure {
    fn to_error(&self) -> ContactApiError {
        match self {
            Failure::Status(status, body) => ContactApiError::from_status(*status, body.clone()),
            Failure::Transport => ContactApiError::HttpError("Connection failed".to_string()),
        }
    }
}

#[derive(Default)]
struct MockState {
    contacts: Vec<Contact>,
    next_id: u64,
    calls: Vec<Call>,
    failures: HashMap<Op, Failure>,
    delays: HashMap<Op, Duration>,
}

/// Mock contact repository for testing.
///
/// In-memory store that mimics the contact book's search rules, records
/// every call in order, and can be told to fail or stall per operation.
#[derive(Clone, Default)]
pub struct MockContactRepository {
    state: Arc<Mutex<MockState>>,
}

impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with contacts, keeping their ids.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.lock().unwrap();
            state.next_id = contacts.iter().map(|c| c.id.value()).max().unwrap_or(0);
            state.contacts = contacts;
        }
        repo
    }

    /// Make `op` fail with an HTTP status and body.
    pub fn fail_with_status(&self, op: Op, status: u16, body: &str) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(op, Failure::Status(status, body.to_string()));
    }

    /// Make `op` fail as if the server were unreachable.
    pub fn fail_unreachable(&self, op: Op) {
        self.state.lock().unwrap().failures.insert(op, Failure::Transport);
    }

    pub fn clear_failure(&self, op: Op) {
        self.state.lock().unwrap().failures.remove(&op);
    }

    /// Delay every response of `op` by `delay` (tokio time).
    pub fn delay(&self, op: Op, delay: Duration) {
        self.state.lock().unwrap().delays.insert(op, delay);
    }

    pub fn clear_delay(&self, op: Op) {
        self.state.lock().unwrap().delays.remove(&op);
    }

    /// All calls so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self, op: Op) -> usize {
        self.calls()
            .iter()
            .filter(|call| Self::op_of(call) == op)
            .count()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.state.lock().unwrap().contacts.clone()
    }

    fn op_of(call: &Call) -> Op {
        match call {
            Call::List => Op::List,
            Call::Get(_) => Op::Get,
            Call::Search(..) => Op::Search,
            Call::Create(_) => Op::Create,
            Call::Update(..) => Op::Update,
            Call::Delete(_) => Op::Delete,
        }
    }

    /// Record the call, wait out any configured delay, then return the configured failure.
    async fn enter(&self, call: Call) -> ContactApiResult<()> {
        let op = Self::op_of(&call);
        let (delay, failure) = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(call);
            (state.delays.get(&op).copied(), state.failures.get(&op).cloned())
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }

    fn not_found() -> ContactApiError {
        ContactApiError::from_status(404, r#"{"detail":"Contact not found"}"#.to_string())
    }
}

fn digits_of(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list(&self) -> ContactApiResult<Vec<Contact>> {
        self.enter(Call::List).await?;
        Ok(self.contacts())
    }

    async fn get(&self, id: ContactId) -> ContactApiResult<Contact> {
        self.enter(Call::Get(id)).await?;
        self.contacts()
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(Self::not_found)
    }

    async fn search(&self, field: SearchField, query: &str) -> ContactApiResult<Vec<Contact>> {
        self.enter(Call::Search(field, query.to_string())).await?;

        let matches = match field {
            SearchField::Phone => {
                let digits = digits_of(query);
                self.contacts()
                    .into_iter()
                    .filter(|c| digits_of(&c.phone).contains(&digits))
                    .collect()
            }
            SearchField::Name => {
                let needle = query.to_lowercase();
                self.contacts()
                    .into_iter()
                    .filter(|c| c.name.to_lowercase().contains(&needle))
                    .collect()
            }
        };
        Ok(matches)
    }

    async fn create(&self, draft: &ContactDraft) -> ContactApiResult<Option<Contact>> {
        self.enter(Call::Create(draft.clone())).await?;

        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let contact = Contact::new(state.next_id, draft.name.clone(), draft.phone.clone())
            .with_email(draft.email.clone());
        state.contacts.push(contact.clone());
        Ok(Some(contact))
    }

    async fn update(&self, id: ContactId, draft: &ContactDraft) -> ContactApiResult<Option<Contact>> {
        self.enter(Call::Update(id, draft.clone())).await?;

        let mut state = self.state.lock().unwrap();
        let contact = state
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(Self::not_found)?;
        *contact = Contact::new(id, draft.name.clone(), draft.phone.clone())
            .with_email(draft.email.clone());
        Ok(Some(contact.clone()))
    }

    async fn delete(&self, id: ContactId) -> ContactApiResult<()> {
        self.enter(Call::Delete(id)).await?;

        let mut state = self.state.lock().unwrap();
        let before = state.contacts.len();
        state.contacts.retain(|c| c.id != id);
        if state.contacts.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}
