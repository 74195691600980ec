//! Known-vector and behavioral tests for transaction IDs and signing hashes.

use crate::sighash::{
    signature_hash_ecdsa, signature_hash_schnorr, SigHashBase, SigHashType,
};
use crate::{Outpoint, Transaction, TransactionError, TransactionInput, TransactionOutput};

fn h(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

fn input(txid_hex: &str, index: u32) -> TransactionInput {
    TransactionInput::new(Outpoint::from_hex(txid_hex, index).unwrap())
}

/// The three-input payment transaction from a known mainnet signing flow.
fn three_input_tx() -> (Transaction, Vec<u64>, Vec<u8>) {
    let mut tx = Transaction::new();
    tx.add_input(input(
        "ae96e819429e9da538e84cb213f62fbc8ad32e932d7c7f1fb9bd2fedf8fd7b4a",
        0,
    ));
    tx.add_input(input(
        "deb88e7dd734437c6232a636085ef917d1d13cc549fe14749765508b2782f2fb",
        0,
    ));
    tx.add_input(input(
        "304db39069dc409acedf544443dcd4a4f02bfad4aeb67116f8bf087822c456af",
        0,
    ));
    tx.add_output(TransactionOutput::new(
        100_000,
        h("2060072BBDDB7A7D1DBF40302CE04D51DB49E223F8E5159FCCE14143FD4BE20328AC"),
    ));
    tx.add_output(TransactionOutput::new(
        519_870_000,
        h("2103EB30400CE9D1DEED12B84D4161A1FA922EF4185A155EF3EC208078B3807B126FAB"),
    ));

    let prev_values = vec![500_000_000, 10_000_000, 10_000_000];
    let connected_script =
        h("21034c88a1a83469ddf20d0c07e5c4a1e7b83734e721e60d642b94a53222c47c670dab");
    (tx, prev_values, connected_script)
}

#[test]
fn test_ecdsa_signing_hash_three_inputs() {
    let (tx, prev_values, connected_script) = three_input_tx();

    let expected = [
        "f5080102132c6dab382de67a427f1df560ba7f5f0d7fa4dfa535c474761423c2",
        "90767e75d102556256e4b3c76f341292fddbef1683c49e3c03ac16a83fd1fb83",
        "f9738fe93426667581db4ba1ae4f432f384c393d0f098d3a9aa6087c4f62c4a4",
    ];
    for (i, want) in expected.iter().enumerate() {
        let digest = signature_hash_ecdsa(
            &tx,
            i,
            &connected_script,
            prev_values[i],
            SigHashType::ALL,
        )
        .unwrap();
        assert_eq!(hex::encode(digest), *want, "input {}", i);
    }
}

#[test]
fn test_ecdsa_signing_hash_single_input() {
    let mut tx = Transaction::new();
    tx.add_input(input(
        "ae96e819429e9da538e84cb213f62fbc8ad32e932d7c7f1fb9bd2fedf8fd7b4a",
        0,
    ));
    tx.add_output(TransactionOutput::new(
        100_000,
        h("AA20383B73D107F9730F6C24BC5293240AC3B827E19E0E1BF4EF16852BEB297222C587"),
    ));
    tx.add_output(TransactionOutput::new(
        499_890_000,
        h("2103EB30400CE9D1DEED12B84D4161A1FA922EF4185A155EF3EC208078B3807B126FAB"),
    ));
    let connected_script =
        h("21034c88a1a83469ddf20d0c07e5c4a1e7b83734e721e60d642b94a53222c47c670dab");

    let digest =
        signature_hash_ecdsa(&tx, 0, &connected_script, 500_000_000, SigHashType::ALL).unwrap();
    assert_eq!(
        hex::encode(digest),
        "c550515d34a091d7f3d2827286e7aef685ece9c0bbccb4b08bc65f6ebd83e8f2"
    );
}

#[test]
fn test_transaction_id() {
    let mut tx = Transaction::new();
    tx.add_input(input(
        "4DF1F7923708F6FA98F8D192CDB511666FC93C858D86FB7BC61BC7C13D54C9F4",
        2,
    ));
    tx.add_output(TransactionOutput::new(
        500_003_000,
        h("AA207B1CFEE1AA9CB2AB4EFF9FF9593F88D3F0453F02E02790AC493F8EB712DCE17787"),
    ));
    tx.add_output(TransactionOutput::new(
        3_764_387_352,
        h("2035C82AA416591A1AFB84D10B6D225899F27CE6B51381C03B8CF104C3906258D3AC"),
    ));

    assert_eq!(
        tx.id().to_hex(),
        "c2cb9d865f5085cd6f7f23365545c68d1eaca7e3cde9d231a64812be2c989a30"
    );
}

#[test]
fn test_schnorr_and_ecdsa_digests_differ() {
    let (tx, prev_values, connected_script) = three_input_tx();

    let schnorr =
        signature_hash_schnorr(&tx, 0, &connected_script, prev_values[0], SigHashType::ALL)
            .unwrap();
    let ecdsa =
        signature_hash_ecdsa(&tx, 0, &connected_script, prev_values[0], SigHashType::ALL).unwrap();
    assert_ne!(schnorr, ecdsa);
}

#[test]
fn test_signing_hash_is_deterministic() {
    let (tx, prev_values, connected_script) = three_input_tx();
    let a = signature_hash_schnorr(&tx, 1, &connected_script, prev_values[1], SigHashType::ALL)
        .unwrap();
    let b = signature_hash_schnorr(&tx, 1, &connected_script, prev_values[1], SigHashType::ALL)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_input_index_out_of_range() {
    let (tx, _, connected_script) = three_input_tx();
    let err = signature_hash_schnorr(&tx, 3, &connected_script, 0, SigHashType::ALL).unwrap_err();
    assert!(matches!(
        err,
        TransactionError::InputIndexOutOfRange { index: 3, input_count: 3 }
    ));
}

#[test]
fn test_anyone_can_pay_ignores_other_inputs() {
    let (tx, prev_values, connected_script) = three_input_tx();
    let acp = SigHashType {
        base: SigHashBase::All,
        anyone_can_pay: true,
    };

    let digest = signature_hash_schnorr(&tx, 0, &connected_script, prev_values[0], acp).unwrap();

    // Replace the other inputs entirely; the digest must not move.
    let mut modified = tx.clone();
    modified.inputs[1] = input(
        "0000000000000000000000000000000000000000000000000000000000000001",
        7,
    );
    modified.inputs.pop();
    let digest2 =
        signature_hash_schnorr(&modified, 0, &connected_script, prev_values[0], acp).unwrap();
    assert_eq!(digest, digest2);

    // Without ANYONECANPAY the same change must move the digest.
    let all = signature_hash_schnorr(&tx, 0, &connected_script, prev_values[0], SigHashType::ALL)
        .unwrap();
    let all2 =
        signature_hash_schnorr(&modified, 0, &connected_script, prev_values[0], SigHashType::ALL)
            .unwrap();
    assert_ne!(all, all2);
}

#[test]
fn test_none_ignores_outputs() {
    let (tx, prev_values, connected_script) = three_input_tx();
    let none = SigHashType {
        base: SigHashBase::None,
        anyone_can_pay: false,
    };

    let digest = signature_hash_schnorr(&tx, 0, &connected_script, prev_values[0], none).unwrap();

    let mut modified = tx.clone();
    modified.outputs.clear();
    let digest2 =
        signature_hash_schnorr(&modified, 0, &connected_script, prev_values[0], none).unwrap();
    assert_eq!(digest, digest2);
}

#[test]
fn test_single_commits_to_matching_output_only() {
    let (tx, prev_values, connected_script) = three_input_tx();
    let single = SigHashType {
        base: SigHashBase::Single,
        anyone_can_pay: false,
    };

    let digest = signature_hash_schnorr(&tx, 0, &connected_script, prev_values[0], single).unwrap();

    // Changing the non-matching output does not move the digest.
    let mut modified = tx.clone();
    modified.outputs[1].value += 1;
    let digest2 =
        signature_hash_schnorr(&modified, 0, &connected_script, prev_values[0], single).unwrap();
    assert_eq!(digest, digest2);

    // Changing the matching output does.
    let mut modified = tx.clone();
    modified.outputs[0].value += 1;
    let digest3 =
        signature_hash_schnorr(&modified, 0, &connected_script, prev_values[0], single).unwrap();
    assert_ne!(digest, digest3);
}

#[test]
fn test_single_out_of_range_hashes_no_outputs() {
    let (tx, prev_values, connected_script) = three_input_tx();
    let single = SigHashType {
        base: SigHashBase::Single,
        anyone_can_pay: false,
    };

    // Input 2 has no matching output (only two outputs); outputs changes
    // must not move the digest.
    let digest = signature_hash_schnorr(&tx, 2, &connected_script, prev_values[2], single).unwrap();
    let mut modified = tx.clone();
    modified.outputs.clear();
    let digest2 =
        signature_hash_schnorr(&modified, 2, &connected_script, prev_values[2], single).unwrap();
    assert_eq!(digest, digest2);

    // NONE also hashes no outputs, but the flag byte keeps the digests apart.
    let none = SigHashType {
        base: SigHashBase::None,
        anyone_can_pay: false,
    };
    let none_digest =
        signature_hash_schnorr(&tx, 2, &connected_script, prev_values[2], none).unwrap();
    assert_ne!(digest, none_digest);
}

#[test]
fn test_sequences_commitment_is_blanked() {
    // The aggregate sequences hash commits to zeros, but the per-input
    // section carries the real sequence: changing the signed input's
    // sequence moves the digest, changing another input's does not.
    let (tx, prev_values, connected_script) = three_input_tx();
    let digest = signature_hash_schnorr(&tx, 0, &connected_script, prev_values[0], SigHashType::ALL)
        .unwrap();

    let mut other_changed = tx.clone();
    other_changed.inputs[1].sequence = 0xffff_ffff_ffff_ffff;
    let digest2 = signature_hash_schnorr(
        &other_changed,
        0,
        &connected_script,
        prev_values[0],
        SigHashType::ALL,
    )
    .unwrap();
    assert_eq!(digest, digest2);

    let mut own_changed = tx.clone();
    own_changed.inputs[0].sequence = 1;
    let digest3 = signature_hash_schnorr(
        &own_changed,
        0,
        &connected_script,
        prev_values[0],
        SigHashType::ALL,
    )
    .unwrap();
    assert_ne!(digest, digest3);
}

#[test]
fn test_transaction_id_ignores_sequences() {
    let mut tx = Transaction::new();
    tx.add_input(input(
        "4DF1F7923708F6FA98F8D192CDB511666FC93C858D86FB7BC61BC7C13D54C9F4",
        2,
    ));
    tx.add_output(TransactionOutput::new(1, vec![0xAC]));

    let id = tx.id();
    tx.inputs[0].sequence = 42;
    assert_eq!(tx.id(), id);
}
