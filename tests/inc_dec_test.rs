//! Tests for INC, DEC, INX, INY, DEX and DEY.

use cpu6502::{Cpu, FlatMemory, MemoryBus, Status, Vector};

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_vector(Vector::Reset, 0x8000);
    Cpu::new(memory)
}

fn run(cpu: &mut Cpu<FlatMemory>, program: &[u8]) -> u8 {
    cpu.memory_mut().load(0x8000, program).unwrap();
    cpu.step()
}

#[test]
fn test_inc_zero_page_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0010, 0xFF);
    cpu.set_flag(Status::CARRY, true);

    assert_eq!(run(&mut cpu, &[0xE6, 0x10]), 5);

    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag(Status::ZERO));
    // Carry untouched
    assert!(cpu.flag(Status::CARRY));
}

#[test]
fn test_inc_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x2100, 0x7F);

    assert_eq!(run(&mut cpu, &[0xFE, 0xFF, 0x20]), 7);

    assert_eq!(cpu.memory().read(0x2100), 0x80);
    assert!(cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_dec_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x1234, 0x01);

    assert_eq!(run(&mut cpu, &[0xCE, 0x34, 0x12]), 6);

    assert_eq!(cpu.memory().read(0x1234), 0x00);
    assert!(cpu.flag(Status::ZERO));
}

#[test]
fn test_dec_zero_page_x_wraps_value() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);

    assert_eq!(run(&mut cpu, &[0xD6, 0x0F]), 6);

    assert_eq!(cpu.memory().read(0x0010), 0xFF);
    assert!(cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_inx_wraps() {
    let mut cpu = setup_cpu();
    cpu.set_x(0xFF);

    assert_eq!(run(&mut cpu, &[0xE8]), 2);

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag(Status::ZERO));
}

#[test]
fn test_iny() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x7F);

    run(&mut cpu, &[0xC8]);

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_dex_wraps() {
    let mut cpu = setup_cpu();

    run(&mut cpu, &[0xCA]);

    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_dey_to_zero() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x01);

    run(&mut cpu, &[0x88]);

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag(Status::ZERO));
    assert!(!cpu.flag(Status::NEGATIVE));
}
