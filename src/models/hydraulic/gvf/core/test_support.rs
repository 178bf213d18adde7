use uom::si::{
    f64::{Length, Ratio, VolumeRate},
    length::{meter, millimeter},
    ratio::ratio,
    volume_rate::cubic_meter_per_second,
};

use crate::support::constraint::StrictlyPositive;

use super::{ChannelSection, Direction, FlowEquation, RunParameters};

/// A 600 mm concrete pipe at 0.1% slope, marched 50 m downstream from a
/// half-full control section.
pub(super) fn circular_pipe_run(discharge: f64) -> RunParameters {
    RunParameters {
        section: ChannelSection::circular(Length::new::<millimeter>(600.0)).unwrap(),
        equation: FlowEquation::manning(0.013).unwrap(),
        discharge: StrictlyPositive::new(VolumeRate::new::<cubic_meter_per_second>(discharge))
            .unwrap(),
        bed_slope: StrictlyPositive::new(Ratio::new::<ratio>(0.001)).unwrap(),
        control_depth: StrictlyPositive::new(Length::new::<meter>(0.3)).unwrap(),
        direction: Direction::Downstream,
        step_length: StrictlyPositive::new(Length::new::<meter>(10.0)).unwrap(),
        steps: StrictlyPositive::new(5).unwrap(),
    }
}

/// A 2 m wide concrete flume carrying 1 m³/s at 0.1% slope, with a 1 m
/// control depth and four 20 m steps.
pub(super) fn rectangular_run(direction: Direction) -> RunParameters {
    RunParameters {
        section: ChannelSection::rectangular(Length::new::<meter>(2.0)).unwrap(),
        equation: FlowEquation::manning(0.013).unwrap(),
        discharge: StrictlyPositive::new(VolumeRate::new::<cubic_meter_per_second>(1.0)).unwrap(),
        bed_slope: StrictlyPositive::new(Ratio::new::<ratio>(0.001)).unwrap(),
        control_depth: StrictlyPositive::new(Length::new::<meter>(1.0)).unwrap(),
        direction,
        step_length: StrictlyPositive::new(Length::new::<meter>(20.0)).unwrap(),
        steps: StrictlyPositive::new(4).unwrap(),
    }
}

/// The flume of [`rectangular_run`] with a control depth just above critical,
/// marched 300 m downstream so the drawdown reaches critical depth.
pub(super) fn critical_drawdown_run(equation: FlowEquation) -> RunParameters {
    RunParameters {
        equation,
        control_depth: StrictlyPositive::new(Length::new::<meter>(0.311)).unwrap(),
        direction: Direction::Downstream,
        step_length: StrictlyPositive::new(Length::new::<meter>(10.0)).unwrap(),
        steps: StrictlyPositive::new(30).unwrap(),
        ..rectangular_run(Direction::Downstream)
    }
}
