mod common;

use bma4_watch::{AccelSample, Direction, Error, Variant};
use common::*;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;

fn bus_error() -> ErrorKind {
    ErrorKind::Other
}

#[test]
fn revision_one_keeps_raw_signs() {
    let (mut bma, mut mock) = init_sensor(Variant::Bma423, 1, vec![accel_read(100, -200, -900)]);
    assert_eq!(bma.accel(), Ok(AccelSample::new(100, -200, -900)));
    mock.done();
}

#[test]
fn other_revisions_negate_x_and_y() {
    for rev in [2, 3, 4] {
        let (mut bma, mut mock) = init_sensor(Variant::Bma423, rev, vec![accel_read(100, -200, -900)]);
        assert_eq!(bma.accel(), Ok(AccelSample::new(-100, 200, -900)));
        mock.done();
    }
}

#[test]
fn direction_classifies_corrected_sample() {
    // raw (0, 0, 900): display pointing down
    let (mut bma, mut mock) = init_sensor(Variant::Bma423, 1, vec![accel_read(0, 0, 900)]);
    assert_eq!(bma.direction(), Direction::DispDown);
    mock.done();

    // revision 2 sign correction turns raw x=900 into body x=-900
    let (mut bma, mut mock) = init_sensor(Variant::Bma423, 2, vec![accel_read(900, 0, 0)]);
    assert_eq!(bma.direction(), Direction::TopEdge);
    mock.done();
}

#[test]
fn direction_defaults_to_top_edge_on_read_failure() {
    let trans = vec![
        I2cTransaction::write_read(ADDR, vec![0x12], vec![0; 6]).with_error(bus_error())
    ];
    let (mut bma, mut mock) = init_sensor(Variant::Bma423, 2, trans);
    assert_eq!(bma.direction(), Direction::TopEdge);
    mock.done();
}

#[test]
fn face_up_inside_and_outside_box() {
    let trans = vec![
        accel_read(-350, 0, -900),
        accel_read(-350, 0, -749),
    ];
    let (mut bma, mut mock) = init_sensor(Variant::Bma423, 1, trans);
    assert!(bma.is_face_up());
    assert!(!bma.is_face_up());
    mock.done();
}

#[test]
fn fault_latch_stops_all_further_bus_access() {
    // one failing raw read, then nothing else is allowed on the bus
    let trans = vec![
        I2cTransaction::write_read(ADDR, vec![0x12], vec![0; 6]).with_error(bus_error())
    ];
    let (mut bma, mut mock) = init_sensor(Variant::Bma423, 2, trans);

    assert!(bma.accel().is_err());

    assert_eq!(bma.accel(), Err(Error::Faulted));
    assert!(!bma.is_face_up());
    assert_eq!(bma.direction(), Direction::TopEdge);
    assert_eq!(bma.accel(), Err(Error::Faulted));

    // done() panics if any expectation is left, and every call above
    // would have panicked on an unexpected transaction
    mock.done();
}

#[test]
fn face_up_read_failure_latches_and_returns_false() {
    let trans = vec![
        I2cTransaction::write_read(ADDR, vec![0x12], vec![0; 6]).with_error(bus_error())
    ];
    let (mut bma, mut mock) = init_sensor(Variant::Bma423, 2, trans);
    assert!(!bma.is_face_up());
    assert_eq!(bma.accel(), Err(Error::Faulted));
    mock.done();
}
