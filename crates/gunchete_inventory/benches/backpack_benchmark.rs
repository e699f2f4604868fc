//! Benchmark for backpack and loadout hot paths.
//!
//! Run with: cargo bench --package gunchete_inventory --bench backpack_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gunchete_content::{ArmorDef, ArmorSlot, ItemDef, ItemKind, Registry};
use gunchete_inventory::{Backpack, Equipment, LoadoutSet, SlottedItem};

fn create_test_registry() -> Registry {
    let mut reg = Registry::new();

    // 50 stackable and 50 single-slot item types
    for i in 0..50u32 {
        reg.register_item(ItemDef::new(format!("ammo_{i}"), format!("Ammo {i}"), ItemKind::Consumable, 0.01).stackable(100))
            .unwrap();
        reg.register_item(ItemDef::new(format!("junk_{i}"), format!("Junk {i}"), ItemKind::Junk, 0.5))
            .unwrap();
    }
    for slot in ArmorSlot::ALL {
        let id = format!("{}_plate", slot.id());
        reg.register_armor(ArmorDef::new(id.clone(), id, slot, 2).with_dex_cap(3).with_penalties(-1, 5))
            .unwrap();
    }

    reg
}

fn benchmark_stack_merge(c: &mut Criterion) {
    let reg = create_test_registry();

    c.bench_function("backpack_add_merge", |b| {
        b.iter(|| {
            let mut pack = Backpack::new(20, 1_000.0);
            for _ in 0..10 {
                black_box(pack.add("ammo_0", 7, &reg).unwrap());
            }
        });
    });
}

fn benchmark_add_remove_cycle(c: &mut Criterion) {
    let reg = create_test_registry();
    let mut pack = Backpack::new(40, 1_000.0);
    for i in 0..30 {
        pack.add(&format!("junk_{i}"), 1, &reg).unwrap();
    }

    c.bench_function("backpack_add_remove_near_full", |b| {
        b.iter(|| {
            let inst = pack.add("ammo_1", 50, &reg).unwrap();
            pack.remove(black_box(&inst.instance_id), 50).unwrap();
        });
    });
}

fn benchmark_rejected_add(c: &mut Criterion) {
    let reg = create_test_registry();
    let mut pack = Backpack::new(20, 1_000.0);
    for i in 0..20 {
        pack.add(&format!("junk_{i}"), 1, &reg).unwrap();
    }

    c.bench_function("backpack_add_rejected_full", |b| {
        b.iter(|| black_box(pack.can_add("junk_0", 1, &reg)));
    });
}

fn benchmark_computed_defenses(c: &mut Criterion) {
    let reg = create_test_registry();
    let mut equipment = Equipment::new();
    for slot in ArmorSlot::ALL {
        let id = format!("{}_plate", slot.id());
        equipment.set_armor(slot, SlottedItem::new(id.clone(), id));
    }

    c.bench_function("computed_defenses_full_armor", |b| {
        b.iter(|| black_box(equipment.computed_defenses(&reg, black_box(4))));
    });
}

fn benchmark_loadout_swap(c: &mut Criterion) {
    let mut loadout = LoadoutSet::with_presets(4);

    c.bench_function("loadout_swap_reset", |b| {
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 1) % 4;
            let _ = black_box(loadout.swap(i));
            loadout.reset_round();
        });
    });
}

criterion_group!(
    benches,
    benchmark_stack_merge,
    benchmark_add_remove_cycle,
    benchmark_rejected_add,
    benchmark_computed_defenses,
    benchmark_loadout_swap
);
criterion_main!(benches);
