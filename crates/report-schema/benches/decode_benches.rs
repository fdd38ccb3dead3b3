use criterion::{Criterion, criterion_group, criterion_main};
use openpad_report_schema::{
    AxisTransform, ControlDescriptor, ControlLayout, DiscreteRange, RawReport, ReportLayout,
    ValueKind,
};

fn pad_layout() -> Option<ReportLayout> {
    let mut controls = vec![
        ControlDescriptor::new("hat", ControlLayout::Dpad, 1, 0, 4, ValueKind::Integer)
            .with_default_state(8),
        ControlDescriptor::discrete("hat/up", 1, 0, 4, DiscreteRange::wrapping(7, 1, 8, 7)),
        ControlDescriptor::discrete("hat/right", 1, 0, 4, DiscreteRange::new(1, 3)),
        ControlDescriptor::discrete("hat/down", 1, 0, 4, DiscreteRange::new(3, 5)),
        ControlDescriptor::discrete("hat/left", 1, 0, 4, DiscreteRange::new(5, 7)),
        ControlDescriptor::axis("stick/x", 2, AxisTransform::UNIT),
        ControlDescriptor::axis("stick/y", 3, AxisTransform::UNIT.inverted()),
        ControlDescriptor::axis("stick/right", 2, AxisTransform::UNIT.upper_half()),
        ControlDescriptor::axis("stick/left", 2, AxisTransform::UNIT.inverted().upper_half()),
    ];
    for bit in 0..8 {
        controls.push(ControlDescriptor::button(format!("button{bit}"), 8, bit));
    }
    ReportLayout::new("bench", controls).ok()
}

fn benchmark_decode(c: &mut Criterion) {
    let Some(layout) = pad_layout() else {
        return;
    };
    let mut report = layout.neutral_report();
    report.set_byte(1, 0x03).set_byte(2, 0xC0).set_byte(8, 0x5A);

    c.bench_function("decode full table", |b| {
        b.iter(|| std::hint::black_box(layout.decode(&report)));
    });

    c.bench_function("decode and lookup", |b| {
        b.iter(|| std::hint::black_box(layout.decode(&report).get("stick/right")));
    });

    c.bench_function("neutral_report", |b| {
        b.iter(|| std::hint::black_box(layout.neutral_report()));
    });
}

fn benchmark_transforms(c: &mut Criterion) {
    let axis = AxisTransform::UNIT.inverted().upper_half();
    let range = DiscreteRange::wrapping(7, 1, 8, 7);

    c.bench_function("axis apply", |b| {
        b.iter(|| {
            for raw in (0..=255u16).step_by(17) {
                std::hint::black_box(axis.apply(raw, 255));
            }
        });
    });

    c.bench_function("discrete contains", |b| {
        b.iter(|| {
            for raw in 0..16 {
                std::hint::black_box(range.contains(raw));
            }
        });
    });

    c.bench_function("RawReport zeroed", |b| {
        b.iter(|| std::hint::black_box(RawReport::zeroed()));
    });
}

criterion_group!(benches, benchmark_decode, benchmark_transforms);
criterion_main!(benches);
