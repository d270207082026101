//! Initiator classification against the SVIP's local block.

use super::blocks::block_range_for;
use super::resolver::resolve_significant_octet;
use crate::error::SubnetError;
use crate::models::{
    parse_ipv4, BlockRange, Classification, InitiatorAddress, InvalidAddressPolicy, Netmask,
    SubnetReport, Verdict, OCTETS,
};

/// Classify each address against the reference block, keeping input order.
///
/// # Returns
/// * `Ok((results, rejected))` - `rejected` is only non-empty under [`InvalidAddressPolicy::Skip`]
/// * `Err(SubnetError::InvalidAddress)` - first malformed address under [`InvalidAddressPolicy::Abort`]
/// * `Err(SubnetError::InvalidOctetPosition)` - `position` is not 0-3
pub fn classify_addresses<S: AsRef<str>>(
    reference: BlockRange,
    position: usize,
    addresses: &[S],
    policy: InvalidAddressPolicy,
) -> Result<(Vec<Classification>, Vec<SubnetError>), SubnetError> {
    if position >= OCTETS {
        return Err(SubnetError::InvalidOctetPosition { position });
    }

    let mut results = Vec::with_capacity(addresses.len());
    let mut rejected = Vec::new();

    for raw in addresses {
        let address = match raw.as_ref().parse::<InitiatorAddress>() {
            Ok(address) => address,
            Err(e) => match policy {
                InvalidAddressPolicy::Abort => return Err(e),
                InvalidAddressPolicy::Skip => {
                    log::warn!("skipping initiator: {e}");
                    rejected.push(e);
                    continue;
                }
            },
        };
        let octet_value = address
            .octet(position)
            .ok_or(SubnetError::InvalidOctetPosition { position })?;
        let verdict = if reference.contains(octet_value) {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        log::debug!(
            "{address}: octet[{position}]={octet_value} block {reference} => {verdict}"
        );
        results.push(Classification {
            address,
            octet_value,
            verdict,
        });
    }

    Ok((results, rejected))
}

/// Run the whole check: resolve the netmask, find the SVIP's block, classify the initiators.
///
/// # Examples
/// ```
/// use iscsi_subnet_check::models::{InvalidAddressPolicy, Verdict};
/// use iscsi_subnet_check::processing::check_subnet;
/// let report = check_subnet(
///     "255.255.254.0",
///     "10.10.22.5",
///     &["10.10.22.99:3260", "10.10.20.7"],
///     InvalidAddressPolicy::Abort,
/// )
/// .unwrap();
/// assert_eq!(report.results[0].verdict, Verdict::Pass);
/// assert_eq!(report.results[1].verdict, Verdict::Fail);
/// ```
pub fn check_subnet<S: AsRef<str>>(
    netmask: &str,
    svip: &str,
    addresses: &[S],
    policy: InvalidAddressPolicy,
) -> Result<SubnetReport, SubnetError> {
    let mask: Netmask = netmask.parse()?;
    let svip_addr = parse_ipv4(svip)?;

    let significant_octet = resolve_significant_octet(&mask);
    let svip_value = svip_addr.octets()[significant_octet.position];
    let reference = block_range_for(significant_octet.block_size, svip_value);
    log::info!(
        "netmask {mask} svip {svip_addr}: octet[{position}] block size {size}, local block {reference}",
        position = significant_octet.position,
        size = significant_octet.block_size,
    );

    let (results, rejected) =
        classify_addresses(reference, significant_octet.position, addresses, policy)?;

    Ok(SubnetReport {
        netmask: netmask.trim().to_string(),
        svip: svip.trim().to_string(),
        significant_octet,
        reference,
        results,
        rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdicts(report: &SubnetReport) -> Vec<(&str, Verdict)> {
        report
            .results
            .iter()
            .map(|c| (c.address.raw.as_str(), c.verdict))
            .collect()
    }

    #[test]
    fn test_check_subnet_254_mask() {
        let report = check_subnet(
            "255.255.254.0",
            "10.10.22.5",
            &["10.10.22.99:3260", "10.10.20.7", "10.10.23.1:3260"],
            InvalidAddressPolicy::Abort,
        )
        .unwrap();

        assert_eq!(report.significant_octet.position, 2);
        assert_eq!(report.significant_octet.block_size, 2);
        assert_eq!(report.reference, BlockRange::new(22, 23));
        assert_eq!(
            verdicts(&report),
            vec![
                ("10.10.22.99:3260", Verdict::Pass),
                ("10.10.20.7", Verdict::Fail),
                ("10.10.23.1:3260", Verdict::Pass),
            ]
        );
        assert_eq!(report.results[1].octet_value, 20);
        assert_eq!(report.local_count(), 2);
        assert_eq!(report.routed_count(), 1);
    }

    #[test]
    fn test_check_subnet_255_mask() {
        let report = check_subnet(
            "255.255.255.0",
            "192.168.5.10",
            &["192.168.5.10:3260", "192.168.5.11:3260", "192.168.5.9"],
            InvalidAddressPolicy::Abort,
        )
        .unwrap();

        assert_eq!(report.significant_octet.position, 3);
        assert_eq!(report.significant_octet.block_size, 1);
        assert_eq!(report.reference, BlockRange::new(10, 10));
        assert_eq!(
            verdicts(&report),
            vec![
                ("192.168.5.10:3260", Verdict::Pass),
                ("192.168.5.11:3260", Verdict::Fail),
                ("192.168.5.9", Verdict::Fail),
            ]
        );
    }

    #[test]
    fn test_check_subnet_any_other_fourth_octet_fails() {
        let addresses: Vec<String> = (0..=255u8)
            .filter(|v| *v != 10)
            .map(|v| format!("192.168.5.{v}:3260"))
            .collect();
        let report = check_subnet(
            "255.255.255.0",
            "192.168.5.10",
            &addresses,
            InvalidAddressPolicy::Abort,
        )
        .unwrap();
        assert_eq!(report.results.len(), 255);
        assert!(report.results.iter().all(|c| c.verdict == Verdict::Fail));
    }

    #[test]
    fn test_svip_always_passes() {
        let masks = [
            "255.0.0.0",
            "255.192.0.0",
            "255.255.0.0",
            "255.255.248.0",
            "255.255.254.0",
            "255.255.255.0",
            "255.255.255.128",
            "255.255.255.252",
            "255.255.255.255",
        ];
        let svips = ["10.10.22.5", "172.16.200.131", "192.168.255.255", "0.0.0.0"];
        for mask in masks {
            for svip in svips {
                let with_port = format!("{svip}:3260");
                let report =
                    check_subnet(mask, svip, &[svip, with_port.as_str()], InvalidAddressPolicy::Abort)
                        .unwrap();
                assert!(
                    report.results.iter().all(|c| c.verdict == Verdict::Pass),
                    "svip {svip} mask {mask}"
                );
            }
        }
    }

    #[test]
    fn test_malformed_address_aborts() {
        let err = check_subnet(
            "255.255.254.0",
            "10.10.22.5",
            &["10.10.22.99:3260", "10.10.x.5", "10.10.20.7"],
            InvalidAddressPolicy::Abort,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SubnetError::InvalidAddress {
                input: "10.10.x.5".to_string(),
                reason: "octet 2 'x' is not a number".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_address_skipped() {
        let report = check_subnet(
            "255.255.254.0",
            "10.10.22.5",
            &["10.10.x.5", "10.10.22.99:3260", "10.10.22", "10.10.20.7"],
            InvalidAddressPolicy::Skip,
        )
        .unwrap();
        assert_eq!(
            verdicts(&report),
            vec![
                ("10.10.22.99:3260", Verdict::Pass),
                ("10.10.20.7", Verdict::Fail),
            ]
        );
        let rejected: Vec<&str> = report.rejected.iter().filter_map(|e| e.input()).collect();
        assert_eq!(rejected, vec!["10.10.x.5", "10.10.22"]);
    }

    #[test]
    fn test_bad_netmask_and_svip() {
        assert!(matches!(
            check_subnet("255.255.x.0", "10.10.22.5", &["10.10.22.1"], InvalidAddressPolicy::Abort),
            Err(SubnetError::InvalidNetmask { .. })
        ));
        assert!(matches!(
            check_subnet("255.255.254.0", "10.10.22", &["10.10.22.1"], InvalidAddressPolicy::Abort),
            Err(SubnetError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_degenerate_mask() {
        let report = check_subnet(
            "255.255.255.255",
            "10.0.0.7",
            &["10.0.0.7", "10.0.0.8"],
            InvalidAddressPolicy::Abort,
        )
        .unwrap();
        assert!(report.significant_octet.degenerate);
        assert_eq!(report.reference, BlockRange::new(7, 7));
        assert_eq!(report.results[0].verdict, Verdict::Pass);
        assert_eq!(report.results[1].verdict, Verdict::Fail);
    }

    #[test]
    fn test_empty_session_list() {
        let report = check_subnet(
            "255.255.254.0",
            "10.10.22.5",
            &Vec::<String>::new(),
            InvalidAddressPolicy::Abort,
        )
        .unwrap();
        assert!(report.results.is_empty());
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_classify_addresses_keeps_order() {
        let addresses = ["10.0.9.1", "10.0.1.1", "10.0.5.1", "10.0.3.1"];
        let (results, _) =
            classify_addresses(BlockRange::new(0, 3), 2, &addresses, InvalidAddressPolicy::Abort)
                .unwrap();
        let order: Vec<&str> = results.iter().map(|c| c.address.raw.as_str()).collect();
        assert_eq!(order, addresses.to_vec());
        let values: Vec<u8> = results.iter().map(|c| c.octet_value).collect();
        assert_eq!(values, vec![9, 1, 5, 3]);
    }

    #[test]
    fn test_classify_addresses_rejects_position_past_last_octet() {
        let addresses = ["10.0.9.1", "10.0.1.1"];
        for position in [4, 7, usize::MAX] {
            let err = classify_addresses(
                BlockRange::new(0, 3),
                position,
                &addresses,
                InvalidAddressPolicy::Skip,
            )
            .unwrap_err();
            assert_eq!(err, SubnetError::InvalidOctetPosition { position });
        }
    }

    #[test]
    fn test_check_subnet_zero_octet_before_last() {
        // 255.255.0.0 compares the third octet exactly
        let report = check_subnet(
            "255.255.0.0",
            "10.10.22.5",
            &["10.10.22.200", "10.10.23.1", "10.99.22.7"],
            InvalidAddressPolicy::Abort,
        )
        .unwrap();
        assert_eq!(report.significant_octet.position, 2);
        assert_eq!(report.significant_octet.block_size, 1);
        assert_eq!(report.reference, BlockRange::new(22, 22));
        assert_eq!(
            verdicts(&report),
            vec![
                ("10.10.22.200", Verdict::Pass),
                ("10.10.23.1", Verdict::Fail),
                ("10.99.22.7", Verdict::Pass),
            ]
        );
    }
}
