use cart_request::{CartItemRequest, ContextData, Pipeline, PipelineControl, PipelineError};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Debug, Default)]
struct BenchContext {
  request: CartItemRequest,
  handed_off: Option<i64>,
}

fn bench_request_validation(c: &mut Criterion) {
  let mut group = c.benchmark_group("CartItemRequestValidate");

  for (label, body) in [
    ("present", r#"{"productId": 42}"#),
    ("missing", "{}"),
    ("null", r#"{"productId": null}"#),
  ] {
    group.bench_with_input(BenchmarkId::new("deserialize_and_validate", label), body, |b, body| {
      b.iter(|| {
        let request: CartItemRequest = serde_json::from_str(black_box(body)).unwrap();
        black_box(request.validate().is_ok())
      })
    });
  }

  let request = CartItemRequest::new(42);
  group.bench_function("validate_only", |b| b.iter(|| black_box(&request).validate()));
  group.finish();
}

fn bench_validation_pipeline(c: &mut Criterion) {
  let mut group = c.benchmark_group("ValidationPipeline");
  let rt = Runtime::new().unwrap();

  let mut pipeline = Pipeline::<BenchContext, PipelineError>::new(&[("validate", false), ("hand_off", false)]);
  pipeline
    .on_validate("validate", |ctx: &BenchContext| &ctx.request)
    .unwrap();
  pipeline
    .on("hand_off", |ctx: ContextData<BenchContext>| {
      let mut guard = ctx.write();
      guard.handed_off = guard.request.product_id();
      std::future::ready(Ok::<_, PipelineError>(PipelineControl::Continue))
    })
    .unwrap();
  let pipeline = Arc::new(pipeline);

  for (label, request) in [("valid", CartItemRequest::new(42)), ("invalid", CartItemRequest::empty())] {
    group.bench_function(label, |b| {
      b.to_async(&rt).iter_batched(
        || {
          ContextData::new(BenchContext {
            request: request.clone(),
            handed_off: None,
          })
        },
        |ctx| {
          let p_clone = pipeline.clone();
          async move { p_clone.run(ctx).await.is_ok() }
        },
        criterion::BatchSize::SmallInput,
      );
    });
  }
  group.finish();
}

criterion_group!(benches, bench_request_validation, bench_validation_pipeline);
criterion_main!(benches);
