//! Repository search screen module.

mod event;
mod failure;
mod interactor;
mod module;
mod presenter;
mod router;

pub use event::{NavigationIntent, SearchEvent};
pub use failure::SearchFailure;
pub use interactor::{SearchInteractor, SearchUseCase};
pub use module::SearchModule;
pub use presenter::{Reaction, SearchPresenter};
pub use router::{Destination, SearchRouter};
