use crate::ui::carousel::intent::CarouselIntent;
use crate::ui::carousel::state::CarouselState;
use crate::ui::mvi::Reducer;

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        state.navigator_mut().go(intent.step());
        state
    }
}
