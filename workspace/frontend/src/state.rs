use std::rc::Rc;

use common::{StockAction, ViewState};
use yew::Reducible;

/// Reducer wrapper over the pure view-state core, so components drive it
/// through `use_reducer` while the transitions stay testable in `common`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub view: ViewState,
}

impl Reducible for AppState {
    type Action = StockAction;

    fn reduce(self: Rc<Self>, action: StockAction) -> Rc<Self> {
        Rc::new(AppState {
            view: self.view.apply(action),
        })
    }
}
