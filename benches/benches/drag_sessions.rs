// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_gesture::drag::Drag;
use understory_gesture::handler::DragHandler;
use understory_gesture::host::{EventTarget, GestureEvent};
use understory_gesture::multi::MultiDrag;
use understory_gesture::state::{DragState, MultiDragState};
use understory_gesture::throttle::Throttle;
use understory_gesture::types::{EventKinds, ListenerMode};

#[derive(Clone)]
struct Ev {
    kind: EventKinds,
    touches: Vec<Point>,
}

impl Ev {
    fn pointer(kind: EventKinds, x: f64, y: f64) -> Self {
        Self {
            kind,
            touches: vec![Point::new(x, y)],
        }
    }
}

impl GestureEvent for Ev {
    fn kind(&self) -> EventKinds {
        self.kind
    }
    fn client_position(&self) -> Option<Point> {
        self.touches.first().copied()
    }
    fn touch_count(&self) -> Option<usize> {
        Some(self.touches.len())
    }
    fn touch_position(&self, index: usize) -> Option<Point> {
        self.touches.get(index).copied()
    }
    fn prevent_default(&mut self) {}
    fn stop_propagation(&mut self) {}
}

struct Null;

impl EventTarget for Null {
    fn add_listeners(&mut self, _: EventKinds, _: ListenerMode) {}
    fn remove_listeners(&mut self, _: EventKinds, _: ListenerMode) {}
}

#[derive(Default)]
struct Count(usize);

impl DragHandler<Ev, DragState> for Count {
    fn continuing(&mut self, _: &DragState, _: &Ev) {
        self.0 += 1;
    }
}

impl DragHandler<Ev, MultiDragState> for Count {
    fn continuing(&mut self, _: &MultiDragState, _: &Ev) {
        self.0 += 1;
    }
}

/// Pointer path: `n` moves along a diagonal, one millisecond apart.
fn gen_path(n: usize) -> Vec<Ev> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Ev::pointer(EventKinds::POINTER_MOVE, t * 0.5, t * 0.25)
        })
        .collect()
}

/// Touch path with `contacts` fingers spreading apart.
fn gen_touch_path(n: usize, contacts: usize) -> Vec<Ev> {
    (0..n)
        .map(|i| Ev {
            kind: EventKinds::TOUCH_MOVE,
            touches: (0..contacts)
                .map(|c| Point::new(c as f64 * 40.0 + i as f64, i as f64 * 0.5))
                .collect(),
        })
        .collect()
}

fn bench_throttle(c: &mut Criterion) {
    let mut group = c.benchmark_group("throttle");
    for &n in &[100_usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("call_burst_n{}", n), |b| {
            b.iter(|| {
                let mut t = Throttle::new(Duration::from_millis(40));
                let mut runs = 0_usize;
                for i in 0..n {
                    let now = Duration::from_millis(i as u64);
                    if t.call(now, i).is_some() {
                        runs += 1;
                    }
                    if t.poll(now).is_some() {
                        runs += 1;
                    }
                }
                black_box(runs)
            });
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    for &n in &[100_usize, 1_000] {
        let path = gen_path(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("session_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut d: Drag<Ev, Count, Null, Null> = Drag::new(Null, Count::default());
                    let _ = d.bind(Null);
                    (d, path.clone())
                },
                |(mut d, mut path)| {
                    let mut down = Ev::pointer(EventKinds::POINTER_DOWN, 0.0, 0.0);
                    let _ = d.dispatch(&mut down, Duration::ZERO);
                    for (i, ev) in path.iter_mut().enumerate() {
                        let now = Duration::from_millis(i as u64);
                        let _ = d.dispatch(ev, now);
                        if d.next_deadline().is_some_and(|t| t <= now) {
                            d.handle_timer(now);
                        }
                    }
                    let mut up = Ev::pointer(EventKinds::POINTER_UP, n as f64, n as f64);
                    let _ = d.dispatch(&mut up, Duration::from_millis(n as u64));
                    black_box(d.handler().0)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_multi_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_drag");
    for &contacts in &[1_usize, 2, 5] {
        let path = gen_touch_path(500, contacts);
        group.throughput(Throughput::Elements(500));
        group.bench_function(format!("session_contacts{}", contacts), |b| {
            b.iter_batched(
                || {
                    let mut m: MultiDrag<Ev, Count, Null, Null> =
                        MultiDrag::new(Null, Count::default());
                    let _ = m.bind(Null);
                    (m, path.clone())
                },
                |(mut m, mut path)| {
                    let mut start = Ev {
                        kind: EventKinds::TOUCH_START,
                        touches: (0..contacts)
                            .map(|c| Point::new(c as f64 * 40.0, 0.0))
                            .collect(),
                    };
                    let _ = m.dispatch(&mut start, Duration::ZERO);
                    for (i, ev) in path.iter_mut().enumerate() {
                        let _ = m.dispatch(ev, Duration::from_millis(i as u64));
                    }
                    let mut end = Ev {
                        kind: EventKinds::TOUCH_END,
                        touches: Vec::new(),
                    };
                    let _ = m.dispatch(&mut end, Duration::from_millis(500));
                    black_box(m.handler().0)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_throttle, bench_drag, bench_multi_drag);
criterion_main!(benches);
