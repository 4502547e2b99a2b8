use std::ops::Deref;
use std::sync::Arc;

use vodca::References;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::dispatch::DependOnBookEventDispatcher;
use kernel::interface::identifier::DependOnBookIdGenerator;
use kernel::interface::query::DependOnBookRecordQuery;
use kernel::interface::update::DependOnBookRecordModifier;
use kernel::KernelError;

use crate::clock::SystemClock;
use crate::config::LibraryConfig;
use crate::database::InMemoryBookStore;
use crate::dispatch::BroadcastEventDispatcher;
use crate::identifier::UuidBookIdGenerator;

/// Shared handle to the wired collaborators. Every clone talks to the same store and dispatcher.
pub struct LibraryModule<C = SystemClock>(Arc<Handler<C>>);

impl LibraryModule {
    pub fn new(config: &LibraryConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let config = LibraryConfig::from_env()?;
        Ok(Self::new(&config))
    }
}

impl<C: Clock> LibraryModule<C> {
    pub fn with_clock(config: &LibraryConfig, clock: C) -> Self {
        Self(Arc::new(Handler::init(config, clock)))
    }
}

impl<C> Clone for LibraryModule<C> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<C> Deref for LibraryModule<C> {
    type Target = Handler<C>;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler<C> {
    store: InMemoryBookStore,
    id_generator: UuidBookIdGenerator<InMemoryBookStore>,
    dispatcher: BroadcastEventDispatcher,
    clock: C,
}

impl<C: Clock> Handler<C> {
    fn init(config: &LibraryConfig, clock: C) -> Self {
        let store = InMemoryBookStore::new();
        let id_generator = UuidBookIdGenerator::new(store.clone(), config);
        let dispatcher = BroadcastEventDispatcher::new(*config.event_capacity());
        tracing::debug!(?config, "library module initialized");
        Self {
            store,
            id_generator,
            dispatcher,
            clock,
        }
    }
}

impl<C: Clock> DependOnBookRecordQuery for LibraryModule<C> {
    type BookRecordQuery = InMemoryBookStore;
    fn book_record_query(&self) -> &Self::BookRecordQuery {
        self.store()
    }
}

impl<C: Clock> DependOnBookRecordModifier for LibraryModule<C> {
    type BookRecordModifier = InMemoryBookStore;
    fn book_record_modifier(&self) -> &Self::BookRecordModifier {
        self.store()
    }
}

impl<C: Clock> DependOnBookIdGenerator for LibraryModule<C> {
    type BookIdGenerator = UuidBookIdGenerator<InMemoryBookStore>;
    fn book_id_generator(&self) -> &Self::BookIdGenerator {
        self.id_generator()
    }
}

impl<C: Clock> DependOnBookEventDispatcher for LibraryModule<C> {
    type BookEventDispatcher = BroadcastEventDispatcher;
    fn book_event_dispatcher(&self) -> &Self::BookEventDispatcher {
        self.dispatcher()
    }
}

impl<C: Clock> DependOnClock for LibraryModule<C> {
    type Clock = C;
    fn clock(&self) -> &Self::Clock {
        &self.0.clock
    }
}
