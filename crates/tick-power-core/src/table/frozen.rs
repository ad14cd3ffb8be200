//! Frozen power tables for both width policies.
//!
//! Generated by `tick-power-gen --format rust`; do not edit by hand.
//! Limbs are little-endian.

use crate::constants::BIT_COUNT;
use crate::math::big_int::U256;

#[derive(Debug, Clone, Copy)]
pub(crate) struct FrozenWord {
    pub shift: u32,
    pub value: U256,
}

pub(crate) const FULL_POSITIVE: [FrozenWord; BIT_COUNT] = [
    FrozenWord { shift: 254, value: U256([0xd288ce703afb7e90, 0x495182a9930be0de, 0xca57a786c226809d, 0x4001a36e2eb1c432]) },
    FrozenWord { shift: 254, value: U256([0xbb2834a77c863868, 0xfe4ac926faeb9915, 0xdacc3edd606dd3ed, 0x400346e71a2af97d]) },
    FrozenWord { shift: 254, value: U256([0x284df5667db09bbc, 0x7739cf1c046528ff, 0x0c145b9465142851, 0x40068df9288d32c2]) },
    FrozenWord { shift: 254, value: U256([0xda69f1629aa19f43, 0xe53bf5ea7b558f5b, 0x6896ad180649e7e3, 0x400d1c9e2ac3a4ab]) },
    FrozenWord { shift: 254, value: U256([0x447e186bff71c9c4, 0xd0b7eaa10756eb08, 0x2975ff70b33d6663, 0x401a3bec02949520]) },
    FrozenWord { shift: 254, value: U256([0x04dc77bb7e989061, 0x5ed5a2265893ed33, 0x77e76aa95a110b39, 0x40348298ed05ce0e]) },
    FrozenWord { shift: 254, value: U256([0x42fa511331eb1fd3, 0x0b7cc656bf3555ea, 0xa5ce37d7a598e5bc, 0x406930471d0b75dc]) },
    FrozenWord { shift: 254, value: U256([0x4053165bb2892b7b, 0xdf84cdbf726823a6, 0xb7035b790f422074, 0x40d30d70c7d933e9]) },
    FrozenWord { shift: 254, value: U256([0x67a00ef315d62698, 0x1fb1625c98ad7dfc, 0xe06fb568cac3f39d, 0x41a8d2de322abfef]) },
    FrozenWord { shift: 254, value: U256([0xde15c4b8cda531f9, 0xadef4cb27ec07fbf, 0xa6b9dc6c58a529fa, 0x435ca9a91b3362f3]) },
    FrozenWord { shift: 254, value: U256([0xcfc16fb564c75e65, 0xab173f2555dba8d7, 0xb71d5fea8cc5537d, 0x46e6896398e4a165]) },
    FrozenWord { shift: 254, value: U256([0xa5b63b6ded94edd2, 0x9c78079216b5c00a, 0xcf345ef970d0f514, 0x4e8b8af6813e0de7]) },
    FrozenWord { shift: 254, value: U256([0x66153712e91fe172, 0x6fbffd972009fe84, 0x9dfcaad0ba1f3d44, 0x606552f9a7836a3f]) },
    FrozenWord { shift: 253, value: U256([0x2b7f17673fdc185a, 0x8b32802418ba6dc5, 0x1004a50ee120c3ee, 0x48984caba30b4052]) },
    FrozenWord { shift: 252, value: U256([0xdb5ae95af040a51d, 0x2097b20c4044ea37, 0xc616779e807e264b, 0x525816eeb9f935b1]) },
    FrozenWord { shift: 250, value: U256([0x22af42ae6880dba4, 0x9e5f271f86d0ae4c, 0xd34c6b819406e07e, 0x69f23402d545a13f]) },
    FrozenWord { shift: 245, value: U256([0xac8d8b64d2f0555c, 0x940d3f2b96738458, 0x108b218cd9bc7a31, 0x57b127a165bef92f]) },
    FrozenWord { shift: 236, value: U256([0x7782c70be8056deb, 0x8f29d8059159cea1, 0x8b95d2152dccf412, 0x78278e1e19e448cf]) },
    FrozenWord { shift: 217, value: U256([0x10a78e284a7d3884, 0x0bd3e607eff082d8, 0x2dfd5bc63274436f, 0x70ca36b1a8aea028]) },
    FrozenWord { shift: 179, value: U256([0x1c5ac172b2329ec7, 0xc939a994dc0b710b, 0x87acb0d7265658fc, 0x63631f2b9f4cdc58]) },
];

pub(crate) const FULL_NEGATIVE: [FrozenWord; BIT_COUNT] = [
    FrozenWord { shift: 255, value: U256([0x6110c42dc4aa4630, 0xdc71f5b5b75abe30, 0x2cd234c82c07109c, 0x7ffcb9391b9ea099]) },
    FrozenWord { shift: 255, value: U256([0x5f573c01a2378788, 0xcc5283c6d29f7d13, 0x77891abe79e3fee5, 0x7ff97287afb2b499]) },
    FrozenWord { shift: 255, value: U256([0xfcde05548779b999, 0xf82545109004f813, 0x0e1b1275504a0e67, 0x7ff2e5653f087273]) },
    FrozenWord { shift: 255, value: U256([0x9aa1651732358d5c, 0xd6be04f6c410f67e, 0xe4edac41ae493321, 0x7fe5cc21eb07b0ac]) },
    FrozenWord { shift: 255, value: U256([0x40f21749fea16743, 0xc0f7823e2b4ed9d9, 0xa397344b6fd92a5f, 0x7fcb9da0fd4c6040]) },
    FrozenWord { shift: 255, value: U256([0x3573cd1cb8ea5cfd, 0x4bf498ae1adffdae, 0x21f63c59935a9430, 0x7f9750b23364b51c]) },
    FrozenWord { shift: 255, value: U256([0x3cc29d9e57b1e7e1, 0x7aa211afa6b27ee4, 0x08e230f8cb4e1829, 0x7f2ef702354cd154]) },
    FrozenWord { shift: 255, value: U256([0x067935c012b3a7ea, 0xee1343339947a5cd, 0x6e7fe41da3cd51d1, 0x7e5f4363c8054457]) },
    FrozenWord { shift: 255, value: U256([0x2202191e788e7407, 0xfd65f8c837d32d5c, 0xb79583a67bc0af29, 0x7cc3d3929d62098b]) },
    FrozenWord { shift: 255, value: U256([0xce2a29bf47b3b92b, 0x650162bc58ea10ac, 0xca063d1cc725b879, 0x799c9584115b8002]) },
    FrozenWord { shift: 255, value: U256([0xc1dce8e7ae36716d, 0x4d3c429931ed1d98, 0x21d94e3fd37444ec, 0x738aca3ad1614dba]) },
    FrozenWord { shift: 255, value: U256([0xe15250b7eaf00f95, 0xb51ef9fe0952e0aa, 0x422d6c7bc9552c12, 0x684bf9defe90115c]) },
    FrozenWord { shift: 255, value: U256([0x362bfb0fdce6d92a, 0x7d0b02124a96a953, 0xc532ee0fc87030f2, 0x54fba32316c387ef]) },
    FrozenWord { shift: 256, value: U256([0x44efb8f73f24f4ed, 0xc49744d5020b5c91, 0x90bb3df62baf32f6, 0x70d869a156d2a1b8]) },
    FrozenWord { shift: 257, value: U256([0x555d994c7f75987f, 0x0d83d099fd495a0b, 0x02462a0aa85f9f4b, 0x637c26bf2fa11fb3]) },
    FrozenWord { shift: 259, value: U256([0x70f307e24aa846f3, 0xed60eac06975018d, 0x33bef2a79f4cde47, 0x4d52845adbd4270e]) },
    FrozenWord { shift: 264, value: U256([0x3ab8d4dc789df107, 0x0e6dc91bb2843f8e, 0x99c329225ee6044e, 0x5d6af8dedb811966]) },
    FrozenWord { shift: 273, value: U256([0x69c34beae1c878ea, 0x969fe6d7392df3db, 0x4c0837dbfd2f6e9b, 0x442dcb09ebf43d52]) },
    FrozenWord { shift: 292, value: U256([0x9cec6fe33e319d90, 0x987e9cb487802047, 0x44e8fa23b8ad7d66, 0x48a170391f7dc424]) },
    FrozenWord { shift: 330, value: U256([0x0b85d4c67a5a738f, 0x7212a03e3ffb8bee, 0xc78a05ecb747340a, 0x526cd3b9eb098b48]) },
];

pub(crate) const HALF_POSITIVE: [FrozenWord; BIT_COUNT] = [
    FrozenWord { shift: 126, value: U256([0xca57a786c226809d, 0x4001a36e2eb1c432, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 126, value: U256([0xdacc3edd606dd3ed, 0x400346e71a2af97d, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 126, value: U256([0x0c145b9465142851, 0x40068df9288d32c2, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 126, value: U256([0x6896ad180649e7e3, 0x400d1c9e2ac3a4ab, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 126, value: U256([0x2975ff70b33d6663, 0x401a3bec02949520, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 126, value: U256([0x77e76aa95a110b39, 0x40348298ed05ce0e, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 126, value: U256([0xa5ce37d7a598e5bc, 0x406930471d0b75dc, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 126, value: U256([0xb7035b790f422074, 0x40d30d70c7d933e9, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 126, value: U256([0xe06fb568cac3f39d, 0x41a8d2de322abfef, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 126, value: U256([0xa6b9dc6c58a529fa, 0x435ca9a91b3362f3, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 126, value: U256([0xb71d5fea8cc5537d, 0x46e6896398e4a165, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 126, value: U256([0xcf345ef970d0f514, 0x4e8b8af6813e0de7, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 126, value: U256([0x9dfcaad0ba1f3d44, 0x606552f9a7836a3f, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 125, value: U256([0x1004a50ee120c3ee, 0x48984caba30b4052, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 124, value: U256([0xc616779e807e264b, 0x525816eeb9f935b1, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 122, value: U256([0xd34c6b819406e07e, 0x69f23402d545a13f, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 117, value: U256([0x108b218cd9bc7a31, 0x57b127a165bef92f, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 108, value: U256([0x8b95d2152dccf412, 0x78278e1e19e448cf, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 89, value: U256([0x2dfd5bc63274436f, 0x70ca36b1a8aea028, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 51, value: U256([0x87acb0d7265658fc, 0x63631f2b9f4cdc58, 0x0000000000000000, 0x0000000000000000]) },
];

pub(crate) const HALF_NEGATIVE: [FrozenWord; BIT_COUNT] = [
    FrozenWord { shift: 127, value: U256([0x2cd234c82c07109c, 0x7ffcb9391b9ea099, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 127, value: U256([0x77891abe79e3fee5, 0x7ff97287afb2b499, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 127, value: U256([0x0e1b1275504a0e67, 0x7ff2e5653f087273, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 127, value: U256([0xe4edac41ae493321, 0x7fe5cc21eb07b0ac, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 127, value: U256([0xa397344b6fd92a5f, 0x7fcb9da0fd4c6040, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 127, value: U256([0x21f63c59935a9430, 0x7f9750b23364b51c, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 127, value: U256([0x08e230f8cb4e1829, 0x7f2ef702354cd154, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 127, value: U256([0x6e7fe41da3cd51d1, 0x7e5f4363c8054457, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 127, value: U256([0xb79583a67bc0af29, 0x7cc3d3929d62098b, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 127, value: U256([0xca063d1cc725b879, 0x799c9584115b8002, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 127, value: U256([0x21d94e3fd37444ec, 0x738aca3ad1614dba, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 127, value: U256([0x422d6c7bc9552c12, 0x684bf9defe90115c, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 127, value: U256([0xc532ee0fc87030f2, 0x54fba32316c387ef, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 128, value: U256([0x90bb3df62baf32f6, 0x70d869a156d2a1b8, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 129, value: U256([0x02462a0aa85f9f4b, 0x637c26bf2fa11fb3, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 131, value: U256([0x33bef2a79f4cde47, 0x4d52845adbd4270e, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 136, value: U256([0x99c329225ee6044e, 0x5d6af8dedb811966, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 145, value: U256([0x4c0837dbfd2f6e9b, 0x442dcb09ebf43d52, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 164, value: U256([0x44e8fa23b8ad7d66, 0x48a170391f7dc424, 0x0000000000000000, 0x0000000000000000]) },
    FrozenWord { shift: 202, value: U256([0xc78a05ecb747340a, 0x526cd3b9eb098b48, 0x0000000000000000, 0x0000000000000000]) },
];
