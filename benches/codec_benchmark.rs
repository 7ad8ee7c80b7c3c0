use bedrock_protocol::protocol::types::{VarU32, VarU64};
use bedrock_protocol::{AnimateEntityPacket, BedrockEncodable, DataPacket, GamePacket};
use bytes::BytesMut;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn varint_codec(c: &mut Criterion) {
    c.bench_function("var_u32_encode", |b| {
        let mut buf = BytesMut::with_capacity(64);
        b.iter(|| {
            buf.clear();
            VarU32(black_box(0xdead_beef)).encode_bedrock(&mut buf);
        });
    });

    let mut encoded = BytesMut::new();
    VarU64(u64::MAX).encode_bedrock(&mut encoded);
    let encoded = encoded.freeze();
    c.bench_function("var_u64_decode", |b| {
        b.iter(|| {
            let mut slice = &encoded[..];
            VarU64::decode_bedrock(black_box(&mut slice)).unwrap()
        });
    });
}

fn packet_codec(c: &mut Criterion) {
    let pkt = DataPacket::new(AnimateEntityPacket::new(
        "animation.humanoid.celebrating".to_owned(),
        "default".to_owned(),
        "query.any_animation_finished".to_owned(),
        2,
        "__runtime_controller".to_owned(),
        0.3,
        (0..32).collect(),
    ));

    c.bench_function("animate_entity_encode", |b| {
        let mut buf = BytesMut::with_capacity(256);
        b.iter(|| {
            buf.clear();
            pkt.encode(&mut buf);
        });
    });

    let mut buf = BytesMut::new();
    pkt.encode(&mut buf);
    let frame = buf.freeze();
    c.bench_function("animate_entity_decode", |b| {
        b.iter(|| {
            let mut slice = frame.clone();
            GamePacket::decode(black_box(&mut slice)).unwrap()
        });
    });
}

criterion_group!(benches, varint_codec, packet_codec);
criterion_main!(benches);
