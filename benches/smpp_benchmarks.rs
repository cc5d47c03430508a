// ABOUTME: Benchmark suite for the SMPP codec: header decode, PDU dispatch, and serialization
// ABOUTME: across a light PDU (enquire_link), a medium one (bind_transmitter), and submit_sm

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use smpp::codec::{Encodable, PduHeader};
use smpp::datatypes::*;
use smpp::pdu::{BindTransmitter, EnquireLink, Pdu, SubmitSm};
use smpp::tlv::TlvMap;
use std::io::Cursor;
use std::time::Duration;

fn sample_submit_sm() -> SubmitSm {
    SubmitSm {
        sequence_number: 1,
        service_type: "".parse().unwrap(),
        source_addr_ton: TypeOfNumber::International,
        source_addr_npi: NumericPlanIndicator::Isdn,
        source_addr: "12025550123".parse().unwrap(),
        dest_addr_ton: TypeOfNumber::International,
        dest_addr_npi: NumericPlanIndicator::Isdn,
        destination_addr: "12025550199".parse().unwrap(),
        esm_class: EsmClass::default(),
        protocol_id: 0,
        priority_flag: PriorityFlag::Level0,
        schedule_delivery_time: "".parse().unwrap(),
        validity_period: "".parse().unwrap(),
        registered_delivery: RegisteredDelivery::default(),
        replace_if_present_flag: ReplaceIfPresentFlag::No,
        data_coding: DataCoding::Defaults,
        sm_default_msg_id: 0,
        short_message: "Hello World".parse().unwrap(),
        tlv: TlvMap::new(),
    }
}

fn sample_bind_transmitter() -> BindTransmitter {
    BindTransmitter {
        sequence_number: 1,
        system_id: "test_system".parse().unwrap(),
        password: "password".parse().unwrap(),
        system_type: "".parse().unwrap(),
        interface_version: InterfaceVersion::SmppV34,
        addr_ton: TypeOfNumber::Unknown,
        addr_npi: NumericPlanIndicator::Unknown,
        address_range: "".parse().unwrap(),
    }
}

fn sample_enquire_link() -> EnquireLink {
    EnquireLink::new(1)
}

fn bench_header_decode(c: &mut Criterion) {
    let bytes = sample_enquire_link().to_bytes().unwrap();

    c.bench_function("header_decode", |b| {
        b.iter(|| PduHeader::decode(&mut Cursor::new(black_box(&bytes[..]))).unwrap())
    });
}

fn bench_pdu_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdu_decode");
    group.measurement_time(Duration::from_secs(10));

    for (name, bytes) in [
        ("enquire_link", sample_enquire_link().to_bytes().unwrap()),
        (
            "bind_transmitter",
            sample_bind_transmitter().to_bytes().unwrap(),
        ),
        ("submit_sm", sample_submit_sm().to_bytes().unwrap()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let bytes = black_box(&bytes);
                let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
                Pdu::decode(&header, &bytes[PduHeader::SIZE..])
            })
        });
    }

    group.finish();
}

fn bench_pdu_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdu_encode");
    group.measurement_time(Duration::from_secs(10));

    let submit_sm = sample_submit_sm();
    group.bench_function("submit_sm", |b| b.iter(|| black_box(&submit_sm).to_bytes()));

    let bind_tx = sample_bind_transmitter();
    group.bench_function("bind_transmitter", |b| {
        b.iter(|| black_box(&bind_tx).to_bytes())
    });

    let enquire_link = sample_enquire_link();
    group.bench_function("enquire_link", |b| {
        b.iter(|| black_box(&enquire_link).to_bytes())
    });

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("submit_sm", |b| {
        b.iter(|| {
            let bytes = black_box(sample_submit_sm()).to_bytes().unwrap();
            let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
            Pdu::decode(&header, &bytes[PduHeader::SIZE..])
        })
    });

    group.bench_function("enquire_link", |b| {
        b.iter(|| {
            let bytes = black_box(sample_enquire_link()).to_bytes().unwrap();
            let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
            Pdu::decode(&header, &bytes[PduHeader::SIZE..])
        })
    });

    group.finish();
}

fn bench_message_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_sizes");
    group.measurement_time(Duration::from_secs(10));

    for &size in &[10usize, 50, 100, 160, 254] {
        let mut submit_sm = sample_submit_sm();
        submit_sm.short_message = "A".repeat(size).parse().unwrap();
        let bytes = submit_sm.to_bytes().unwrap();

        group.bench_with_input(
            criterion::BenchmarkId::new("submit_sm_decode", size),
            &bytes,
            |b, bytes| {
                b.iter(|| {
                    let header = PduHeader::decode(&mut Cursor::new(black_box(&bytes[..]))).unwrap();
                    Pdu::decode(&header, &bytes[PduHeader::SIZE..])
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_header_decode,
    bench_pdu_decode,
    bench_pdu_encode,
    bench_roundtrip,
    bench_message_sizes,
);
criterion_main!(benches);
