// Anchor
pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds
pub const DISPATCHER_SEED: &[u8] = b"Dispatcher";
pub const RECEIVED_SEED: &[u8] = b"Received";
pub const REMOTE_SEED: &[u8] = b"Remote";
pub const ADMIN_SEED: &[u8] = b"Admin";

// Message types. SEND is the only type the dispatcher recognizes.
pub const MSG_TYPE_SEND: u16 = 1;

// Inbound payloads longer than this cannot fit the received-state account.
pub const MAX_MESSAGE_LEN: usize = 256;
pub const MAX_ENFORCED_OPTIONS_LEN: usize = 64;

// Execution options use the endpoint's TYPE_3 framing.
pub const OPTIONS_TYPE_3: [u8; 2] = [0, 3];

// Layerzero
pub const REGISTER_OAPP: &str = "register_oapp";
pub const ENDPOINT_SEND: &str = "send";
pub const ENDPOINT_QUOTE: &str = "quote";
pub const ENDPOINT_CLEAR: &str = "clear";
pub const CLEAR_MIN_ACCOUNTS_LEN: usize = 8;
pub const ENDPOINT_SEED: &[u8] = b"Endpoint";
pub const NONCE_SEED: &[u8] = b"Nonce";
pub const PAYLOAD_HASH_SEED: &[u8] = b"PayloadHash";
pub const OAPP_SEED: &[u8] = b"OApp";
pub const EVENT_SEED: &[u8] = b"__event_authority";

// Test fee schedule, mirrors the lz_mock endpoint pricing. Unit-test builds
// compile out the quote CPI and price destinations with these instead.
pub const MOCK_BASE_FEE: u64 = 10_000;
pub const MOCK_FEE_PER_EID: u64 = 5;
pub const MOCK_FEE_PER_BYTE: u64 = 10;
