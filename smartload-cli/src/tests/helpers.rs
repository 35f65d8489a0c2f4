//! Test helpers for writing request files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

use crate::wire::{OrderRecord, RequestRecord, TruckRecord};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn temp_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// A wire order on the Los Angeles to Dallas lane picked up on 5 December
/// and delivered on 9 December.
pub(super) fn order_record(
    id: &str,
    payout_cents: u64,
    weight_lbs: u64,
    volume_cuft: u64,
) -> OrderRecord {
    OrderRecord {
        id: id.to_owned(),
        payout_cents,
        weight_lbs,
        volume_cuft,
        origin: "Los Angeles, CA".to_owned(),
        destination: "Dallas, TX".to_owned(),
        pickup_date: date("2025-12-05"),
        delivery_date: date("2025-12-09"),
        is_hazmat: false,
    }
}

pub(super) fn date(iso: &str) -> chrono::NaiveDate {
    iso.parse().expect("iso date")
}

/// The standard 44 000 lb / 3 000 cuft truck with `orders`.
pub(super) fn request_record(orders: Vec<OrderRecord>) -> RequestRecord {
    RequestRecord {
        truck: TruckRecord {
            id: "truck-123".to_owned(),
            max_weight_lbs: 44_000,
            max_volume_cuft: 3_000,
        },
        orders,
    }
}

pub(super) fn scenario_a_record() -> RequestRecord {
    request_record(vec![
        order_record("ord-001", 250_000, 18_000, 1_200),
        order_record("ord-002", 180_000, 12_000, 900),
    ])
}

pub(super) fn write_request(path: &Utf8Path, record: &RequestRecord) {
    let payload = serde_json::to_string_pretty(record).expect("serialize request");
    write_utf8(path, payload.as_bytes());
}

