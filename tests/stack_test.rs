//! Tests for PHA, PLA, PHP and PLP.

use cpu6502::{Cpu, FlatMemory, MemoryBus, Status, Vector};

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_vector(Vector::Reset, 0x8000);
    Cpu::new(memory)
}

fn run(cpu: &mut Cpu<FlatMemory>, program: &[u8]) {
    cpu.memory_mut().load(0x8000, program).unwrap();
    for _ in 0..program.len() {
        cpu.step();
    }
}

// ========== PHA / PLA ==========

#[test]
fn test_pha_writes_then_decrements() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    cpu.memory_mut().write(0x8000, 0x48);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.memory().read(0x01FD), 0x42);
    assert_eq!(cpu.sp(), 0xFC);
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);

    // PHA / LDA #$00 / PLA  (LDA takes two bytes, so three steps)
    cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]).unwrap();
    cpu.step();
    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Status::ZERO));

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag(Status::NEGATIVE));
    assert!(!cpu.flag(Status::ZERO));
}

#[test]
fn test_stack_wraps_within_page_one() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0x00);
    cpu.set_a(0x99);

    run(&mut cpu, &[0x48]);
    assert_eq!(cpu.memory().read(0x0100), 0x99);
    assert_eq!(cpu.sp(), 0xFF);
}

// ========== PHP / PLP ==========

#[test]
fn test_php_pushes_break_and_unused() {
    let mut cpu = setup_cpu();
    cpu.set_status(Status::CARRY);
    cpu.memory_mut().write(0x8000, 0x08);

    assert_eq!(cpu.step(), 3);

    assert_eq!(cpu.memory().read(0x01FD), 0x31);
    assert!(!cpu.flag(Status::BREAK));
    assert_eq!(cpu.sp(), 0xFC);
}

#[test]
fn test_plp_forces_unused_and_drops_break() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x01FD, 0xDF); // every bit except Unused
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x8000, 0x28);

    assert_eq!(cpu.step(), 4);

    assert!(cpu.flag(Status::UNUSED));
    assert!(!cpu.flag(Status::BREAK));
    assert!(cpu.flag(Status::NEGATIVE | Status::OVERFLOW | Status::CARRY));
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_php_plp_round_trip() {
    let mut cpu = setup_cpu();
    let flags = Status::UNUSED | Status::NEGATIVE | Status::DECIMAL | Status::ZERO;
    cpu.set_status(flags);

    // PHP / CLD / PLP
    run(&mut cpu, &[0x08, 0xD8, 0x28]);

    assert_eq!(cpu.status(), flags);
}
