use super::{coverage, unsigned, Entry, Span};
use crate::layout::PageKind;

pub const KIND: PageKind = PageKind::Workload;

const BY_LBA: &[Span] = &[Span::Fields { offset: 13, len: 8 }];
const BY_XFER: &[Span] = &[Span::Fields { offset: 21, len: 8 }];
const QUEUE_BINS: &[Span] = &[Span::Fields { offset: 29, len: 8 }];
const XFER_BINS: &[Span] = &[Span::Fields { offset: 37, len: 8 }];

pub const ITEMS: &[Entry] = &[
    unsigned("Rated Workload (%)", 2),
    unsigned("Total # of Read Commands", 3),
    unsigned("Total # of Write Commands", 4),
    unsigned("Total # of Random Read Commands", 5),
    unsigned("Total # of Random Write Commands", 6),
    unsigned("Total # of Other Commands", 7),
    unsigned("LBAs Written", 8),
    unsigned("LBAs Read", 9),
    unsigned("# of Dither events in power cycle", 10),
    unsigned("# of Dither events in power cycle, Actuator 1", 45),
    unsigned("# dither pause - random workloads in power cycle", 11),
    unsigned(
        "# dither pause - random workloads in power cycle, Actuator 1",
        46,
    ),
    unsigned("# dither pause - sequential workloads in power cycle", 12),
    unsigned(
        "# dither pause - sequential workloads in power cycle, Actuator 1",
        47,
    ),
    unsigned("# of read commands between 0-3.125% LBA space", 13),
    unsigned("# of read commands between 3.125-25% LBA space", 14),
    unsigned("# of read commands between 25-50% LBA space", 15),
    unsigned("# of read commands between 50-100% LBA space", 16),
    unsigned("# of write commands between 0-3.125% LBA space", 17),
    unsigned("# of write commands between 3.125-25% LBA space", 18),
    unsigned("# of write commands between 25-50% LBA space", 19),
    unsigned("# of write commands between 50-100% LBA space", 20),
    coverage("Time that Commands Cover (by LBA Space) (Hours)", BY_LBA),
    unsigned("# of read commands with xfer <= 16KiB", 21),
    unsigned("# of read commands with xfer 16Kib - 512KiB", 22),
    unsigned("# of read commands with xfer 512KiB - 2MiB", 23),
    unsigned("# of read commands with xfer > 2MiB", 24),
    unsigned("# of write commands with xfer <= 16KiB", 25),
    unsigned("# of write commands with xfer 16Kib - 512KiB", 26),
    unsigned("# of write commands with xfer 512KiB - 2MiB", 27),
    unsigned("# of write commands with xfer > 2MiB", 28),
    coverage("Time that Commands Cover (by xfer) (Hours)", BY_XFER),
    unsigned("Queue Depth = 1 in 30s intervals", 29),
    unsigned("Queue Depth = 2 in 30s intervals", 30),
    unsigned("Queue Depth 3-4 in 30s intervals", 31),
    unsigned("Queue Depth 5-8 in 30s intervals", 32),
    unsigned("Queue Depth 9-16 in 30s intervals", 33),
    unsigned("Queue Depth 17-32 in 30s intervals", 34),
    unsigned("Queue Depth 33-64 in 30s intervals", 35),
    unsigned("Queue Depth > 64 in 30s intervals", 36),
    coverage("Time that Queue Bins Cover (Hours)", QUEUE_BINS),
    unsigned("# of reads of xfer bin 4, last 3 SSF", 37),
    unsigned("# of reads of xfer bin 5, last 3 SSF", 38),
    unsigned("# of reads of xfer bin 6, last 3 SSF", 39),
    unsigned("# of reads of xfer bin 7, last 3 SSF", 40),
    unsigned("# of writes of xfer bin 4, last 3 SSF", 41),
    unsigned("# of writes of xfer bin 5, last 3 SSF", 42),
    unsigned("# of writes of xfer bin 6, last 3 SSF", 43),
    unsigned("# of writes of xfer bin 7, last 3 SSF", 44),
    coverage("Time that XFer Bins Cover (Hours)", XFER_BINS),
];
