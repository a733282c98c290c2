use criterion::{Criterion, black_box, criterion_group, criterion_main};
use domain::{PurchaseSummary, TicketTypeRequest, validate_purchase};

fn family_requests() -> Vec<TicketTypeRequest> {
    vec![
        TicketTypeRequest::adult(2),
        TicketTypeRequest::child(3),
        TicketTypeRequest::infant(1),
    ]
}

fn bench_validate(c: &mut Criterion) {
    let requests = family_requests();

    c.bench_function("domain/validate_purchase", |b| {
        b.iter(|| validate_purchase(black_box(1), black_box(&requests)).unwrap());
    });
}

fn bench_validate_rejection(c: &mut Criterion) {
    let requests = vec![TicketTypeRequest::adult(1); 21];

    c.bench_function("domain/validate_purchase_rejected", |b| {
        b.iter(|| validate_purchase(black_box(1), black_box(&requests)).unwrap_err());
    });
}

fn bench_summary(c: &mut Criterion) {
    let requests = family_requests();

    c.bench_function("domain/purchase_summary", |b| {
        b.iter(|| PurchaseSummary::from_requests(black_box(&requests)));
    });
}

criterion_group!(
    benches,
    bench_validate,
    bench_validate_rejection,
    bench_summary
);
criterion_main!(benches);
