//! Store aggregator — every slice in one constructed container.
//!
//! Slice namespaces are fixed at compile time by [`define_store!`]; there is
//! no dynamic registration. Mutation happens only through
//! [`Store::dispatch`], which routes an [`Action`] to its single slice.
//! Views read the state when they render.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tutorhub_domain::availability::Availability;
use tutorhub_domain::city::City;
use tutorhub_domain::contract::Contract;
use tutorhub_domain::notification::Notification;
use tutorhub_domain::reference::{GradeLevel, Subject};
use tutorhub_domain::service::ServiceRecord;
use tutorhub_domain::student::Student;
use tutorhub_domain::teacher::Teacher;

use crate::slice::{SliceAction, SliceState};

/// Ties an entity kind to its slot in [`RootState`] and its [`Action`] variant.
pub trait StoreSlot: Sized {
    fn slice(state: &RootState) -> &SliceState<Self>;
    fn wrap(action: SliceAction<Self>) -> Action;
}

macro_rules! define_store {
    ($($field:ident: $entity:ty => $variant:ident),+ $(,)?) => {
        /// Union of every slice state.
        #[derive(Debug, Clone, Default)]
        pub struct RootState {
            $(pub $field: SliceState<$entity>,)+
        }

        /// A transition addressed to exactly one slice.
        #[derive(Debug, Clone)]
        pub enum Action {
            $($variant(SliceAction<$entity>),)+
        }

        impl Action {
            /// Name of the slice this action is routed to.
            #[must_use]
            pub fn namespace(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($field),)+
                }
            }
        }

        impl RootState {
            fn reduce(&mut self, action: Action) {
                match action {
                    $(Action::$variant(action) => self.$field.reduce(action),)+
                }
            }
        }

        $(
            impl StoreSlot for $entity {
                fn slice(state: &RootState) -> &SliceState<Self> {
                    &state.$field
                }

                fn wrap(action: SliceAction<Self>) -> Action {
                    Action::$variant(action)
                }
            }
        )+
    };
}

define_store! {
    teachers: Teacher => Teachers,
    students: Student => Students,
    services: ServiceRecord => Services,
    availability: Availability => Availability,
    cities: City => Cities,
    contracts: Contract => Contracts,
    notifications: Notification => Notifications,
    subjects: Subject => Subjects,
    grade_levels: GradeLevel => GradeLevels,
}

/// Owns the root state.
#[derive(Debug, Default)]
pub struct Store {
    state: RootState,
}

impl Store {
    #[must_use]
    pub fn state(&self) -> &RootState {
        &self.state
    }

    /// Route `action` to its slice.
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(namespace = action.namespace(), "dispatch");
        self.state.reduce(action);
    }
}

/// Cloneable handle to a [`Store`] shared by services and views.
///
/// The lock is only taken inside synchronous calls, never across an await.
#[derive(Clone, Default)]
pub struct SharedStore(Arc<Mutex<Store>>);

impl SharedStore {
    pub fn dispatch(&self, action: Action) {
        lock(&self.0).dispatch(action);
    }

    /// Read a value out of the current state.
    pub fn select<R>(&self, f: impl FnOnce(&RootState) -> R) -> R {
        f(lock(&self.0).state())
    }

    /// Copy of the whole state.
    #[must_use]
    pub fn snapshot(&self) -> RootState {
        self.select(RootState::clone)
    }
}

/// Lock a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
