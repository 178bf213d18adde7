mod direction;
mod equation;
mod run_parameters;
mod section;

pub use direction::Direction;
pub use equation::{EquationKind, FlowEquation};
pub use run_parameters::RunParameters;
pub use section::{ChannelSection, ChannelShape};

pub(super) use section::SectionKind;
