//! Group operation test vectors.
//!
//! Multiples of each curve's base point, computed with an independent
//! big-integer reference implementation of the affine group law and checked
//! against `n·G = O` for the published order `n`. The secp256k1 and P-256
//! multiples agree with the published SEC 2 / NIST point lists.

use hex_literal::hex;

/// Repeated addition of the secp256k1 base point: `k·G` for `k = 1..=8`.
pub const SECP256K1_ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    ),
    (
        hex!("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
        hex!("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"),
    ),
    (
        hex!("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"),
        hex!("388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672"),
    ),
    (
        hex!("e493dbf1c10d80f3581e4904930b1404cc6c13900ee0758474fa94abe8c4cd13"),
        hex!("51ed993ea0d455b75642e2098ea51448d967ae33bfbdfe40cfe97bdc47739922"),
    ),
    (
        hex!("2f8bde4d1a07209355b4a7250a5c5128e88b84bddc619ab7cba8d569b240efe4"),
        hex!("d8ac222636e5e3d6d4dba9dda6c9c426f788271bab0d6840dca87d3aa6ac62d6"),
    ),
    (
        hex!("fff97bd5755eeea420453a14355235d382f6472f8568a18b2f057a1460297556"),
        hex!("ae12777aacfbb620f3be96017f45c560de80f0f6518fe4a03c870c36b075f297"),
    ),
    (
        hex!("5cbdf0646e5db4eaa398f365f2ea7a0e3d419b7e0330e39ce92bddedcac4f9bc"),
        hex!("6aebca40ba255960a3178d6d861a54dba813d0b813fde7b5a5082628087264da"),
    ),
    (
        hex!("2f01e5e15cca351daff3843fb70f3c2f0a1bdd05e5af888a67784ef3e10a2a01"),
        hex!("5c4da8a741539949293d082a132d13b4c2e213d6ba5b7617b5da2cb76cbde904"),
    ),
];

/// secp256k1 scalar multiplication vectors: `(k, x, y)`.
pub const SECP256K1_MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("7513bda5dd0fc8a01053383ac7ec2c925457da22336da9d8c8764d7edb5586b0"),
        hex!("60af23df66c5918ccf0314541fa765b4cdfdb60a064dee781a473278e63670dc"),
        hex!("5ed75238c7c44014dedbe1e963685a205dc37ba693e330db8f3dd6f79bee4c6c"),
    ),
    (
        hex!("e042d32c3886b777d53c68db1d969e0eca8b43828b863916f3cb002680986de5"),
        hex!("bf83bd269263b100defdfadf796372d7e25bb6d14407fe5d99a8101df2b2fc94"),
        hex!("0977cc51f3d1ee95ded1af8405fee6d315fab6a8406c07679e15312b56a07a84"),
    ),
    (
        hex!("ecb1488cd9cf7d3cfb5fdd8e9365339d41902d7745cbf51e9e1165c60e56ecfa"),
        hex!("da6efc6a9176040d5fd14d0f28e70a7a3a55a3b996a2fe476d7068d4e6be9861"),
        hex!("ddf0e3c27d4a70edcbbd107656507c30ecf7d79d8d94417838a8d401e36d9062"),
    ),
];

/// Repeated addition of the NIST P-256 base point: `k·G` for `k = 1..=6`.
pub const P256_ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    ),
    (
        hex!("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"),
        hex!("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"),
    ),
    (
        hex!("5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c"),
        hex!("8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032"),
    ),
    (
        hex!("e2534a3532d08fbba02dde659ee62bd0031fe2db785596ef509302446b030852"),
        hex!("e0f1575a4c633cc719dfee5fda862d764efc96c3f30ee0055c42c23f184ed8c6"),
    ),
    (
        hex!("51590b7a515140d2d784c85608668fdfef8c82fd1f5be52421554a0dc3d033ed"),
        hex!("e0c17da8904a727d8ae1bf36bf8a79260d012f00d4d80888d1d0bb44fda16da4"),
    ),
    (
        hex!("b01a172a76a4602c92d3242cb897dde3024c740debb215b4c6b0aae93c2291a9"),
        hex!("e85c10743237dad56fec0e2dfba703791c00f7701c7e16bdfd7c48538fc77fe2"),
    ),
];

/// NIST P-256 scalar multiplication vectors: `(k, x, y)`.
pub const P256_MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("dd5600ca3d550f380c91c843ec327e9c820e815b8a28448ebb4e152c2f89a2af"),
        hex!("cf10515f0d6f30b0621450b7c10158a48c52d341988df7207f02cf00a9fcb287"),
        hex!("339bcee83f302f496c945ead4880088f95971ff2499dc54b2e9dc4a48aca70fc"),
    ),
    (
        hex!("c9e9c89d96b11aef137398771c6557e6a3e85cc2e5c9f10620555e7dcc32bf8d"),
        hex!("2e2de482d5869bafd8f8156d4a1ae64d5d4627f427225c3105a8e03aed3d4477"),
        hex!("1132e4b405a8ae67d49a3e9c4fa21a7c611d3c64fff0394a3b5ebb9ff93b3952"),
    ),
];

/// Repeated addition of the NIST P-521 base point: `k·G` for `k = 1..=4`.
pub const P521_ADD_TEST_VECTORS: &[([u8; 66], [u8; 66])] = &[
    (
        hex!("00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66"),
        hex!("011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650"),
    ),
    (
        hex!("00433c219024277e7e682fcb288148c282747403279b1ccc06352c6e5505d769be97b3b204da6ef55507aa104a3a35c5af41cf2fa364d60fd967f43e3933ba6d783d"),
        hex!("00f4bb8cc7f86db26700a7f3eceeeed3f0b5c6b5107c4da97740ab21a29906c42dbbb3e377de9f251f6b93937fa99a3248f4eafcbe95edc0f4f71be356d661f41b02"),
    ),
    (
        hex!("01a73d352443de29195dd91d6a64b5959479b52a6e5b123d9ab9e5ad7a112d7a8dd1ad3f164a3a4832051da6bd16b59fe21baeb490862c32ea05a5919d2ede37ad7d"),
        hex!("013e9b03b97dfa62ddd9979f86c6cab814f2f1557fa82a9d0317d2f8ab1fa355ceec2e2dd4cf8dc575b02d5aced1dec3c70cf105c9bc93a590425f588ca1ee86c0e5"),
    ),
    (
        hex!("0035b5df64ae2ac204c354b483487c9070cdc61c891c5ff39afc06c5d55541d3ceac8659e24afe3d0750e8b88e9f078af066a1d5025b08e5a5e2fbc87412871902f3"),
        hex!("0082096f84261279d2b673e0178eb0b4abb65521aef6e6e32e1b5ae63fe2f19907f279f283e54ba385405224f750a95b85eebb7faef04699d1d9e21f47fc346e4d0d"),
    ),
];

/// NIST P-521 scalar multiplication vectors: `(k, x, y)`.
pub const P521_MUL_TEST_VECTORS: &[([u8; 66], [u8; 66], [u8; 66])] = &[
    (
        hex!("00f8afda794be7d2b1a0ae7f4d8a18afeab0bc248d29e166ae451019c430805903bb8c292a31e02e3377364b3f95d1933512c0b2ebc79b5de5e838e1f590ed886ea0"),
        hex!("016c2462b09611926af583283945aec9094d07ddcb623614ef5e1f5c30cfba57510369db3c88cb060a3e5355ace4c3f053b2f798d88d9bdb3b3de239f86e491a8cfa"),
        hex!("01c7022e2e449c495509cb8d6ec164def6311a21ec101e54d4b899cb123ef00bb412bc2072c772efb5dbad937e328738264df3c1d76b10e1874694a2e995f1e0e471"),
    ),
];

/// Repeated addition of the NIST K-163 base point: `k·G` for `k = 1..=6`.
pub const K163_ADD_TEST_VECTORS: &[([u8; 21], [u8; 21])] = &[
    (
        hex!("02fe13c0537bbc11acaa07d793de4e6d5e5c94eee8"),
        hex!("0289070fb05d38ff58321f2e800536d538ccdaa3d9"),
    ),
    (
        hex!("00cb5ca2738fe300aacfb00b42a77b828d8a5c41eb"),
        hex!("0229c79e9ab85f90acd3d5fa3a696664515efefa6b"),
    ),
    (
        hex!("02acfcfcc9a2af8e3f2828024f820033db20f69520"),
        hex!("05729c47f915badc7b4c17df14e5804109ffecdfe4"),
    ),
    (
        hex!("00ba8c7e6e2523ef94cbc1e56facfede24f3f91578"),
        hex!("0510f96cbc41cf3bdfa0157e9e8fee2c605791db0d"),
    ),
    (
        hex!("03799f22e9423edff60294e8288884a04e107b6b6c"),
        hex!("0682c9197f934512ce56e7d77ca4cc4b30d471ead8"),
    ),
    (
        hex!("0765470bc65e9ab8c40b297c983b1000bcf021426e"),
        hex!("00a58ba7c589659f870a0cb121f76d61122d8741b6"),
    ),
];

/// NIST K-163 scalar multiplication vectors: `(k, x, y)`.
pub const K163_MUL_TEST_VECTORS: &[([u8; 21], [u8; 21], [u8; 21])] = &[
    (
        hex!("004b5ff9e5e6fc1c131d7bac5bb677be97f5d1402f"),
        hex!("03dbaf4575a71cf3ff690b63211686fbc82780cf19"),
        hex!("04e44268ecc9fb8316bad65efdab6f4135772e23c5"),
    ),
    (
        hex!("03c5faa47ab55caecb1440af790ed3160d90888c0a"),
        hex!("049c1725a805102897d8924466ff7a70ee8946e2c7"),
        hex!("07a5f4201b815134686ff63677b34edbdc791f42c7"),
    ),
];

/// Repeated addition of the NIST B-233 base point: `k·G` for `k = 1..=4`.
pub const B233_ADD_TEST_VECTORS: &[([u8; 30], [u8; 30])] = &[
    (
        hex!("00fac9dfcbac8313bb2139f1bb755fef65bc391f8b36f8f8eb7371fd558b"),
        hex!("01006a08a41903350678e58528bebf8a0beff867a7ca36716f7e01f81052"),
    ),
    (
        hex!("00845fd61638bac7d9e109a67a1f7047dc0fd9a5488a8468364bdc592aad"),
        hex!("001b1420774abba2587c83900984765a8a85d776325fc39cc7823d734660"),
    ),
    (
        hex!("0080f50a330911bd753a76364595b9f0158c4d02a85cc0e3fb6ea0aef9ff"),
        hex!("017a49033f12eb52675e98e6432cc27104bd5c42bcbe3daf76901c9b8743"),
    ),
    (
        hex!("0063a1baaac9b4861cb6aac5b38889a57a9629c7b04e7825ceb3fb4428a8"),
        hex!("0132a03fae14e34053d6cceacc117bff8efaf5f008d32ab626cbf9012209"),
    ),
];

/// NIST B-233 scalar multiplication vectors: `(k, x, y)`.
pub const B233_MUL_TEST_VECTORS: &[([u8; 30], [u8; 30], [u8; 30])] = &[
    (
        hex!("00653324c3ebd375bc4aad62c4f89275e82b7f203c37f28a0759b796e35b"),
        hex!("006737dda3bbf437d7ea66eb32871966e09a2153434d75c36a48c6a3215d"),
        hex!("0183e4073d6a0e2bb4749681129561ce2819efa87fcd57f3f6fcb5cf94da"),
    ),
];


