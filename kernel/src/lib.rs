pub use crate::error::*;

mod clock;
mod dispatch;
mod entity;
mod error;
mod event;
mod identifier;
mod modify;
mod query;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod clock {
        pub use crate::clock::*;
    }
    pub mod dispatch {
        pub use crate::dispatch::*;
    }
    pub mod event {
        pub use crate::event::*;
    }
    pub mod identifier {
        pub use crate::identifier::*;
    }
    pub mod query {
        pub use crate::query::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
}
