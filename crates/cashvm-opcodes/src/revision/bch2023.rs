//! BCH 2023 instruction set (CashTokens upgrade).

use super::Revision;

/// Opcode assignments and descriptions as of the May 2023 upgrade.
pub static BCH_2023: Revision = Revision {
    id: "BCH_2023",
    opcodes: &[
        ("OP_0", 0x00),
        ("OP_PUSHBYTES_1", 0x01),
        ("OP_PUSHBYTES_2", 0x02),
        ("OP_PUSHBYTES_3", 0x03),
        ("OP_PUSHBYTES_4", 0x04),
        ("OP_PUSHBYTES_5", 0x05),
        ("OP_PUSHBYTES_6", 0x06),
        ("OP_PUSHBYTES_7", 0x07),
        ("OP_PUSHBYTES_8", 0x08),
        ("OP_PUSHBYTES_9", 0x09),
        ("OP_PUSHBYTES_10", 0x0a),
        ("OP_PUSHBYTES_11", 0x0b),
        ("OP_PUSHBYTES_12", 0x0c),
        ("OP_PUSHBYTES_13", 0x0d),
        ("OP_PUSHBYTES_14", 0x0e),
        ("OP_PUSHBYTES_15", 0x0f),
        ("OP_PUSHBYTES_16", 0x10),
        ("OP_PUSHBYTES_17", 0x11),
        ("OP_PUSHBYTES_18", 0x12),
        ("OP_PUSHBYTES_19", 0x13),
        ("OP_PUSHBYTES_20", 0x14),
        ("OP_PUSHBYTES_21", 0x15),
        ("OP_PUSHBYTES_22", 0x16),
        ("OP_PUSHBYTES_23", 0x17),
        ("OP_PUSHBYTES_24", 0x18),
        ("OP_PUSHBYTES_25", 0x19),
        ("OP_PUSHBYTES_26", 0x1a),
        ("OP_PUSHBYTES_27", 0x1b),
        ("OP_PUSHBYTES_28", 0x1c),
        ("OP_PUSHBYTES_29", 0x1d),
        ("OP_PUSHBYTES_30", 0x1e),
        ("OP_PUSHBYTES_31", 0x1f),
        ("OP_PUSHBYTES_32", 0x20),
        ("OP_PUSHBYTES_33", 0x21),
        ("OP_PUSHBYTES_34", 0x22),
        ("OP_PUSHBYTES_35", 0x23),
        ("OP_PUSHBYTES_36", 0x24),
        ("OP_PUSHBYTES_37", 0x25),
        ("OP_PUSHBYTES_38", 0x26),
        ("OP_PUSHBYTES_39", 0x27),
        ("OP_PUSHBYTES_40", 0x28),
        ("OP_PUSHBYTES_41", 0x29),
        ("OP_PUSHBYTES_42", 0x2a),
        ("OP_PUSHBYTES_43", 0x2b),
        ("OP_PUSHBYTES_44", 0x2c),
        ("OP_PUSHBYTES_45", 0x2d),
        ("OP_PUSHBYTES_46", 0x2e),
        ("OP_PUSHBYTES_47", 0x2f),
        ("OP_PUSHBYTES_48", 0x30),
        ("OP_PUSHBYTES_49", 0x31),
        ("OP_PUSHBYTES_50", 0x32),
        ("OP_PUSHBYTES_51", 0x33),
        ("OP_PUSHBYTES_52", 0x34),
        ("OP_PUSHBYTES_53", 0x35),
        ("OP_PUSHBYTES_54", 0x36),
        ("OP_PUSHBYTES_55", 0x37),
        ("OP_PUSHBYTES_56", 0x38),
        ("OP_PUSHBYTES_57", 0x39),
        ("OP_PUSHBYTES_58", 0x3a),
        ("OP_PUSHBYTES_59", 0x3b),
        ("OP_PUSHBYTES_60", 0x3c),
        ("OP_PUSHBYTES_61", 0x3d),
        ("OP_PUSHBYTES_62", 0x3e),
        ("OP_PUSHBYTES_63", 0x3f),
        ("OP_PUSHBYTES_64", 0x40),
        ("OP_PUSHBYTES_65", 0x41),
        ("OP_PUSHBYTES_66", 0x42),
        ("OP_PUSHBYTES_67", 0x43),
        ("OP_PUSHBYTES_68", 0x44),
        ("OP_PUSHBYTES_69", 0x45),
        ("OP_PUSHBYTES_70", 0x46),
        ("OP_PUSHBYTES_71", 0x47),
        ("OP_PUSHBYTES_72", 0x48),
        ("OP_PUSHBYTES_73", 0x49),
        ("OP_PUSHBYTES_74", 0x4a),
        ("OP_PUSHBYTES_75", 0x4b),
        ("OP_PUSHDATA_1", 0x4c),
        ("OP_PUSHDATA_2", 0x4d),
        ("OP_PUSHDATA_4", 0x4e),
        ("OP_1NEGATE", 0x4f),
        ("OP_RESERVED", 0x50),
        ("OP_1", 0x51),
        ("OP_2", 0x52),
        ("OP_3", 0x53),
        ("OP_4", 0x54),
        ("OP_5", 0x55),
        ("OP_6", 0x56),
        ("OP_7", 0x57),
        ("OP_8", 0x58),
        ("OP_9", 0x59),
        ("OP_10", 0x5a),
        ("OP_11", 0x5b),
        ("OP_12", 0x5c),
        ("OP_13", 0x5d),
        ("OP_14", 0x5e),
        ("OP_15", 0x5f),
        ("OP_16", 0x60),
        ("OP_NOP", 0x61),
        ("OP_VER", 0x62),
        ("OP_IF", 0x63),
        ("OP_NOTIF", 0x64),
        ("OP_VERIF", 0x65),
        ("OP_VERNOTIF", 0x66),
        ("OP_ELSE", 0x67),
        ("OP_ENDIF", 0x68),
        ("OP_VERIFY", 0x69),
        ("OP_RETURN", 0x6a),
        ("OP_TOALTSTACK", 0x6b),
        ("OP_FROMALTSTACK", 0x6c),
        ("OP_2DROP", 0x6d),
        ("OP_2DUP", 0x6e),
        ("OP_3DUP", 0x6f),
        ("OP_2OVER", 0x70),
        ("OP_2ROT", 0x71),
        ("OP_2SWAP", 0x72),
        ("OP_IFDUP", 0x73),
        ("OP_DEPTH", 0x74),
        ("OP_DROP", 0x75),
        ("OP_DUP", 0x76),
        ("OP_NIP", 0x77),
        ("OP_OVER", 0x78),
        ("OP_PICK", 0x79),
        ("OP_ROLL", 0x7a),
        ("OP_ROT", 0x7b),
        ("OP_SWAP", 0x7c),
        ("OP_TUCK", 0x7d),
        ("OP_CAT", 0x7e),
        ("OP_SPLIT", 0x7f),
        ("OP_NUM2BIN", 0x80),
        ("OP_BIN2NUM", 0x81),
        ("OP_SIZE", 0x82),
        ("OP_INVERT", 0x83),
        ("OP_AND", 0x84),
        ("OP_OR", 0x85),
        ("OP_XOR", 0x86),
        ("OP_EQUAL", 0x87),
        ("OP_EQUALVERIFY", 0x88),
        ("OP_RESERVED1", 0x89),
        ("OP_RESERVED2", 0x8a),
        ("OP_1ADD", 0x8b),
        ("OP_1SUB", 0x8c),
        ("OP_2MUL", 0x8d),
        ("OP_2DIV", 0x8e),
        ("OP_NEGATE", 0x8f),
        ("OP_ABS", 0x90),
        ("OP_NOT", 0x91),
        ("OP_0NOTEQUAL", 0x92),
        ("OP_ADD", 0x93),
        ("OP_SUB", 0x94),
        ("OP_MUL", 0x95),
        ("OP_DIV", 0x96),
        ("OP_MOD", 0x97),
        ("OP_LSHIFT", 0x98),
        ("OP_RSHIFT", 0x99),
        ("OP_BOOLAND", 0x9a),
        ("OP_BOOLOR", 0x9b),
        ("OP_NUMEQUAL", 0x9c),
        ("OP_NUMEQUALVERIFY", 0x9d),
        ("OP_NUMNOTEQUAL", 0x9e),
        ("OP_LESSTHAN", 0x9f),
        ("OP_GREATERTHAN", 0xa0),
        ("OP_LESSTHANOREQUAL", 0xa1),
        ("OP_GREATERTHANOREQUAL", 0xa2),
        ("OP_MIN", 0xa3),
        ("OP_MAX", 0xa4),
        ("OP_WITHIN", 0xa5),
        ("OP_RIPEMD160", 0xa6),
        ("OP_SHA1", 0xa7),
        ("OP_SHA256", 0xa8),
        ("OP_HASH160", 0xa9),
        ("OP_HASH256", 0xaa),
        ("OP_CODESEPARATOR", 0xab),
        ("OP_CHECKSIG", 0xac),
        ("OP_CHECKSIGVERIFY", 0xad),
        ("OP_CHECKMULTISIG", 0xae),
        ("OP_CHECKMULTISIGVERIFY", 0xaf),
        ("OP_NOP1", 0xb0),
        ("OP_CHECKLOCKTIMEVERIFY", 0xb1),
        ("OP_CHECKSEQUENCEVERIFY", 0xb2),
        ("OP_NOP4", 0xb3),
        ("OP_NOP5", 0xb4),
        ("OP_NOP6", 0xb5),
        ("OP_NOP7", 0xb6),
        ("OP_NOP8", 0xb7),
        ("OP_NOP9", 0xb8),
        ("OP_NOP10", 0xb9),
        ("OP_CHECKDATASIG", 0xba),
        ("OP_CHECKDATASIGVERIFY", 0xbb),
        ("OP_REVERSEBYTES", 0xbc),
        ("OP_UNKNOWN189", 0xbd),
        ("OP_UNKNOWN190", 0xbe),
        ("OP_UNKNOWN191", 0xbf),
        ("OP_INPUTINDEX", 0xc0),
        ("OP_ACTIVEBYTECODE", 0xc1),
        ("OP_TXVERSION", 0xc2),
        ("OP_TXINPUTCOUNT", 0xc3),
        ("OP_TXOUTPUTCOUNT", 0xc4),
        ("OP_TXLOCKTIME", 0xc5),
        ("OP_UTXOVALUE", 0xc6),
        ("OP_UTXOBYTECODE", 0xc7),
        ("OP_OUTPOINTTXHASH", 0xc8),
        ("OP_OUTPOINTINDEX", 0xc9),
        ("OP_INPUTBYTECODE", 0xca),
        ("OP_INPUTSEQUENCENUMBER", 0xcb),
        ("OP_OUTPUTVALUE", 0xcc),
        ("OP_OUTPUTBYTECODE", 0xcd),
        ("OP_UTXOTOKENCATEGORY", 0xce),
        ("OP_UTXOTOKENCOMMITMENT", 0xcf),
        ("OP_UTXOTOKENAMOUNT", 0xd0),
        ("OP_OUTPUTTOKENCATEGORY", 0xd1),
        ("OP_OUTPUTTOKENCOMMITMENT", 0xd2),
        ("OP_OUTPUTTOKENAMOUNT", 0xd3),
        ("OP_UNKNOWN212", 0xd4),
        ("OP_UNKNOWN213", 0xd5),
        ("OP_UNKNOWN214", 0xd6),
        ("OP_UNKNOWN215", 0xd7),
        ("OP_UNKNOWN216", 0xd8),
        ("OP_UNKNOWN217", 0xd9),
        ("OP_UNKNOWN218", 0xda),
        ("OP_UNKNOWN219", 0xdb),
        ("OP_UNKNOWN220", 0xdc),
        ("OP_UNKNOWN221", 0xdd),
        ("OP_UNKNOWN222", 0xde),
        ("OP_UNKNOWN223", 0xdf),
        ("OP_UNKNOWN224", 0xe0),
        ("OP_UNKNOWN225", 0xe1),
        ("OP_UNKNOWN226", 0xe2),
        ("OP_UNKNOWN227", 0xe3),
        ("OP_UNKNOWN228", 0xe4),
        ("OP_UNKNOWN229", 0xe5),
        ("OP_UNKNOWN230", 0xe6),
        ("OP_UNKNOWN231", 0xe7),
        ("OP_UNKNOWN232", 0xe8),
        ("OP_UNKNOWN233", 0xe9),
        ("OP_UNKNOWN234", 0xea),
        ("OP_UNKNOWN235", 0xeb),
        ("OP_UNKNOWN236", 0xec),
        ("OP_UNKNOWN237", 0xed),
        ("OP_UNKNOWN238", 0xee),
        ("OP_UNKNOWN239", 0xef),
        ("OP_UNKNOWN240", 0xf0),
        ("OP_UNKNOWN241", 0xf1),
        ("OP_UNKNOWN242", 0xf2),
        ("OP_UNKNOWN243", 0xf3),
        ("OP_UNKNOWN244", 0xf4),
        ("OP_UNKNOWN245", 0xf5),
        ("OP_UNKNOWN246", 0xf6),
        ("OP_UNKNOWN247", 0xf7),
        ("OP_UNKNOWN248", 0xf8),
        ("OP_UNKNOWN249", 0xf9),
        ("OP_UNKNOWN250", 0xfa),
        ("OP_UNKNOWN251", 0xfb),
        ("OP_UNKNOWN252", 0xfc),
        ("OP_UNKNOWN253", 0xfd),
        ("OP_UNKNOWN254", 0xfe),
        ("OP_UNKNOWN255", 0xff),
    ],
    // Every assigned opcode carries a description; unknown codepoints do not.
    descriptions: &[
        (
            "OP_0",
            "Push the VM Number 0 (an empty stack item) onto the stack.",
        ),
        (
            "OP_PUSHBYTES_1",
            "Push the next byte onto the stack.",
        ),
        (
            "OP_PUSHBYTES_2",
            "Push the next 2 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_3",
            "Push the next 3 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_4",
            "Push the next 4 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_5",
            "Push the next 5 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_6",
            "Push the next 6 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_7",
            "Push the next 7 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_8",
            "Push the next 8 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_9",
            "Push the next 9 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_10",
            "Push the next 10 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_11",
            "Push the next 11 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_12",
            "Push the next 12 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_13",
            "Push the next 13 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_14",
            "Push the next 14 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_15",
            "Push the next 15 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_16",
            "Push the next 16 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_17",
            "Push the next 17 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_18",
            "Push the next 18 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_19",
            "Push the next 19 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_20",
            "Push the next 20 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_21",
            "Push the next 21 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_22",
            "Push the next 22 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_23",
            "Push the next 23 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_24",
            "Push the next 24 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_25",
            "Push the next 25 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_26",
            "Push the next 26 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_27",
            "Push the next 27 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_28",
            "Push the next 28 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_29",
            "Push the next 29 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_30",
            "Push the next 30 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_31",
            "Push the next 31 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_32",
            "Push the next 32 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_33",
            "Push the next 33 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_34",
            "Push the next 34 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_35",
            "Push the next 35 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_36",
            "Push the next 36 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_37",
            "Push the next 37 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_38",
            "Push the next 38 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_39",
            "Push the next 39 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_40",
            "Push the next 40 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_41",
            "Push the next 41 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_42",
            "Push the next 42 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_43",
            "Push the next 43 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_44",
            "Push the next 44 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_45",
            "Push the next 45 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_46",
            "Push the next 46 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_47",
            "Push the next 47 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_48",
            "Push the next 48 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_49",
            "Push the next 49 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_50",
            "Push the next 50 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_51",
            "Push the next 51 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_52",
            "Push the next 52 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_53",
            "Push the next 53 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_54",
            "Push the next 54 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_55",
            "Push the next 55 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_56",
            "Push the next 56 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_57",
            "Push the next 57 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_58",
            "Push the next 58 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_59",
            "Push the next 59 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_60",
            "Push the next 60 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_61",
            "Push the next 61 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_62",
            "Push the next 62 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_63",
            "Push the next 63 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_64",
            "Push the next 64 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_65",
            "Push the next 65 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_66",
            "Push the next 66 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_67",
            "Push the next 67 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_68",
            "Push the next 68 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_69",
            "Push the next 69 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_70",
            "Push the next 70 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_71",
            "Push the next 71 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_72",
            "Push the next 72 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_73",
            "Push the next 73 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_74",
            "Push the next 74 bytes onto the stack.",
        ),
        (
            "OP_PUSHBYTES_75",
            "Push the next 75 bytes onto the stack.",
        ),
        (
            "OP_PUSHDATA_1",
            "Read the next Uint8 and push that number of bytes onto the stack.",
        ),
        (
            "OP_PUSHDATA_2",
            "Read the next little-endian Uint16 and push that number of bytes onto the stack.",
        ),
        (
            "OP_PUSHDATA_4",
            "Read the next little-endian Uint32 and push that number of bytes onto the stack.",
        ),
        (
            "OP_1NEGATE",
            "Push the VM Number -1 onto the stack.",
        ),
        (
            "OP_RESERVED",
            "Error unless found in an unexecuted conditional branch. (Note: OP_RESERVED does not count toward the operation cost limit.)",
        ),
        (
            "OP_1",
            "Push the VM Number 1 onto the stack.",
        ),
        (
            "OP_2",
            "Push the VM Number 2 onto the stack.",
        ),
        (
            "OP_3",
            "Push the VM Number 3 onto the stack.",
        ),
        (
            "OP_4",
            "Push the VM Number 4 onto the stack.",
        ),
        (
            "OP_5",
            "Push the VM Number 5 onto the stack.",
        ),
        (
            "OP_6",
            "Push the VM Number 6 onto the stack.",
        ),
        (
            "OP_7",
            "Push the VM Number 7 onto the stack.",
        ),
        (
            "OP_8",
            "Push the VM Number 8 onto the stack.",
        ),
        (
            "OP_9",
            "Push the VM Number 9 onto the stack.",
        ),
        (
            "OP_10",
            "Push the VM Number 10 onto the stack.",
        ),
        (
            "OP_11",
            "Push the VM Number 11 onto the stack.",
        ),
        (
            "OP_12",
            "Push the VM Number 12 onto the stack.",
        ),
        (
            "OP_13",
            "Push the VM Number 13 onto the stack.",
        ),
        (
            "OP_14",
            "Push the VM Number 14 onto the stack.",
        ),
        (
            "OP_15",
            "Push the VM Number 15 onto the stack.",
        ),
        (
            "OP_16",
            "Push the VM Number 16 onto the stack.",
        ),
        (
            "OP_NOP",
            "No operation.",
        ),
        (
            "OP_VER",
            "Error unless found in an unexecuted conditional branch.",
        ),
        (
            "OP_IF",
            "Pop the top item from the stack. If it is not truthy, skip evaluation until a matching OP_ELSE or OP_ENDIF.",
        ),
        (
            "OP_NOTIF",
            "Pop the top item from the stack. If it is truthy, skip evaluation until a matching OP_ELSE or OP_ENDIF.",
        ),
        (
            "OP_VERIF",
            "Error, even when found in an unexecuted conditional branch.",
        ),
        (
            "OP_VERNOTIF",
            "Error, even when found in an unexecuted conditional branch.",
        ),
        (
            "OP_ELSE",
            "Invert the result of the last OP_IF or OP_NOTIF: begin evaluating skipped code, or skip the code currently being evaluated.",
        ),
        (
            "OP_ENDIF",
            "Close a conditional block (OP_IF or OP_NOTIF ... OP_ENDIF).",
        ),
        (
            "OP_VERIFY",
            "Pop the top item from the stack and error if it is not truthy.",
        ),
        (
            "OP_RETURN",
            "Error when executed.",
        ),
        (
            "OP_TOALTSTACK",
            "Pop the top item from the stack and push it onto the alternate stack.",
        ),
        (
            "OP_FROMALTSTACK",
            "Pop the top item from the alternate stack and push it onto the stack.",
        ),
        (
            "OP_2DROP",
            "Pop the top 2 items from the stack and discard them.",
        ),
        (
            "OP_2DUP",
            "Duplicate the top 2 items on the stack. (E.g. [a, b] -> [a, b, a, b])",
        ),
        (
            "OP_3DUP",
            "Duplicate the top 3 items on the stack. (E.g. [a, b, c] -> [a, b, c, a, b, c])",
        ),
        (
            "OP_2OVER",
            "Duplicate the 2 items beginning at a depth of 2 on the stack. (E.g. [a, b, c, d] -> [a, b, c, d, a, b])",
        ),
        (
            "OP_2ROT",
            "Rotate the top 6 items on the stack, bringing the fifth and sixth items to the top. (E.g. [a, b, c, d, e, f] -> [c, d, e, f, a, b])",
        ),
        (
            "OP_2SWAP",
            "Swap the positions of the top two pairs of items on the stack. (E.g. [a, b, c, d] -> [c, d, a, b])",
        ),
        (
            "OP_IFDUP",
            "If the top item on the stack is truthy, duplicate it.",
        ),
        (
            "OP_DEPTH",
            "Push the current number of stack items as a VM Number.",
        ),
        (
            "OP_DROP",
            "Pop the top item from the stack and discard it. (E.g. [a] -> [])",
        ),
        (
            "OP_DUP",
            "Duplicate the top item on the stack. (E.g. [a] -> [a, a])",
        ),
        (
            "OP_NIP",
            "Remove the second-to-top item from the stack. (E.g. [a, b] -> [b])",
        ),
        (
            "OP_OVER",
            "Duplicate the second-to-top item on the stack. (E.g. [a, b] -> [a, b, a])",
        ),
        (
            "OP_PICK",
            "Pop the top item from the stack as a VM Number. Duplicate the item at that depth (zero-indexed), placing it on top of the stack. (E.g. [a, b, c, 2] -> [a, b, c, a])",
        ),
        (
            "OP_ROLL",
            "Pop the top item from the stack as a VM Number. Move the item at that depth (zero-indexed) to the top of the stack. (E.g. [a, b, c, 2] -> [b, c, a])",
        ),
        (
            "OP_ROT",
            "Rotate the top 3 items on the stack, bringing the third item to the top. (E.g. [a, b, c] -> [b, c, a])",
        ),
        (
            "OP_SWAP",
            "Swap the top two items on the stack. (E.g. [a, b] -> [b, a])",
        ),
        (
            "OP_TUCK",
            "Duplicate the item at the top of the stack, inserting it below the second-to-top item. (E.g. [a, b] -> [b, a, b])",
        ),
        (
            "OP_CAT",
            "Pop the top 2 items from the stack and concatenate them, pushing the result.",
        ),
        (
            "OP_SPLIT",
            "Pop the top item from the stack as an index (VM Number) and the next item as a byte array. Split the byte array into two stack items at the index (zero-based), pushing the results.",
        ),
        (
            "OP_NUM2BIN",
            "Pop the top item from the stack as an item length (VM Number) and the next item as a VM Number (without encoding restrictions). Re-encode the number using a byte array of the provided length, filling any unused bytes with zeros, then push the result. (A.K.A. number to binary)",
        ),
        (
            "OP_BIN2NUM",
            "Pop the top item from the stack as a VM Number without encoding restrictions. Minimally-encode the number, then push the result. (A.K.A. binary to number)",
        ),
        (
            "OP_SIZE",
            "Push the byte-length of the top stack item as a VM Number.",
        ),
        (
            "OP_INVERT",
            "Error, even when found in an unexecuted conditional branch. (This opcode was disabled in 2010.)",
        ),
        (
            "OP_AND",
            "Pop the top 2 items from the stack and perform a bitwise AND on each byte, pushing the result. If the lengths of the items are not equal, error.",
        ),
        (
            "OP_OR",
            "Pop the top 2 items from the stack and perform a bitwise OR on each byte, pushing the result. If the lengths of the items are not equal, error.",
        ),
        (
            "OP_XOR",
            "Pop the top 2 items from the stack and perform a bitwise XOR on each byte, pushing the result. If the lengths of the items are not equal, error.",
        ),
        (
            "OP_EQUAL",
            "Pop the top two items from the stack and compare them byte-by-byte. If they are the same, push a VM Number 1, otherwise push a VM Number 0.",
        ),
        (
            "OP_EQUALVERIFY",
            "Pop the top two items from the stack and compare them byte-by-byte. If the values are different, error. (This operation is a combination of OP_EQUAL followed by OP_VERIFY.)",
        ),
        (
            "OP_RESERVED1",
            "Error unless found in an unexecuted conditional branch.",
        ),
        (
            "OP_RESERVED2",
            "Error unless found in an unexecuted conditional branch.",
        ),
        (
            "OP_1ADD",
            "Pop the top item from the stack as a VM Number, add 1, then push the result.",
        ),
        (
            "OP_1SUB",
            "Pop the top item from the stack as a VM Number, subtract 1, then push the result.",
        ),
        (
            "OP_2MUL",
            "Error, even when found in an unexecuted conditional branch. (This opcode was disabled in 2010.)",
        ),
        (
            "OP_2DIV",
            "Error, even when found in an unexecuted conditional branch. (This opcode was disabled in 2010.)",
        ),
        (
            "OP_NEGATE",
            "Pop the top item from the stack as a VM Number, negate it, then push the result.",
        ),
        (
            "OP_ABS",
            "Pop the top item from the stack as a VM Number, take its absolute value, then push the result.",
        ),
        (
            "OP_NOT",
            "Pop the top item from the stack as a VM Number. If its value is 0, push a VM Number 1, otherwise, push a VM Number 0.",
        ),
        (
            "OP_0NOTEQUAL",
            "Pop the top item from the stack as a VM Number. If its value is not 0, push a VM Number 1, otherwise, push a VM Number 0.",
        ),
        (
            "OP_ADD",
            "Pop the top two items from the stack as VM Numbers. Add them, then push the result.",
        ),
        (
            "OP_SUB",
            "Pop the top two items from the stack as VM Numbers. Subtract the top item from the second item, then push the result.",
        ),
        (
            "OP_MUL",
            "Pop the top two items from the stack as VM Numbers. Multiply them, then push the result.",
        ),
        (
            "OP_DIV",
            "Pop the top two items from the stack as VM Numbers. Divide the second-to-top item by the top item, truncating toward zero, then push the result. If the divisor is 0, error.",
        ),
        (
            "OP_MOD",
            "Pop the top two items from the stack as VM Numbers. Divide the second-to-top item by the top item, then push the remainder. If the divisor is 0, error.",
        ),
        (
            "OP_LSHIFT",
            "Error, even when found in an unexecuted conditional branch. (This opcode was disabled in 2010.)",
        ),
        (
            "OP_RSHIFT",
            "Error, even when found in an unexecuted conditional branch. (This opcode was disabled in 2010.)",
        ),
        (
            "OP_BOOLAND",
            "Pop the top two items from the stack as VM Numbers. If neither value is a VM Number 0, push a VM Number 1. Otherwise, push a VM Number 0.",
        ),
        (
            "OP_BOOLOR",
            "Pop the top two items from the stack as VM Numbers. If either value is not a VM Number 0, push a VM Number 1. Otherwise, push a VM Number 0.",
        ),
        (
            "OP_NUMEQUAL",
            "Pop the top two items from the stack as VM Numbers. If the values are equal, push a VM Number 1. Otherwise, push a VM Number 0.",
        ),
        (
            "OP_NUMEQUALVERIFY",
            "Pop the top two items from the stack as VM Numbers. If the values are different, error. (This operation is a combination of OP_NUMEQUAL followed by OP_VERIFY.)",
        ),
        (
            "OP_NUMNOTEQUAL",
            "Pop the top two items from the stack as VM Numbers. If the values are not equal, push a VM Number 1. Otherwise, push a VM Number 0.",
        ),
        (
            "OP_LESSTHAN",
            "Pop the top two items from the stack as VM Numbers. If the second item is less than the top item, push a VM Number 1. Otherwise, push a VM Number 0.",
        ),
        (
            "OP_GREATERTHAN",
            "Pop the top two items from the stack as VM Numbers. If the second item is greater than the top item, push a VM Number 1. Otherwise, push a VM Number 0.",
        ),
        (
            "OP_LESSTHANOREQUAL",
            "Pop the top two items from the stack as VM Numbers. If the second item is less than or equal to the top item, push a VM Number 1. Otherwise, push a VM Number 0.",
        ),
        (
            "OP_GREATERTHANOREQUAL",
            "Pop the top two items from the stack as VM Numbers. If the second item is greater than or equal to the top item, push a VM Number 1. Otherwise, push a VM Number 0.",
        ),
        (
            "OP_MIN",
            "Pop the top two items from the stack as VM Numbers. Push the smaller of the two numbers.",
        ),
        (
            "OP_MAX",
            "Pop the top two items from the stack as VM Numbers. Push the larger of the two numbers.",
        ),
        (
            "OP_WITHIN",
            "Pop the top three items from the stack as VM Numbers. If the top number is within the range defined by the following two numbers (left-inclusive), push a VM Number 1. Otherwise, push a VM Number 0.",
        ),
        (
            "OP_RIPEMD160",
            "Pop the top item from the stack and pass it through ripemd160, pushing the result onto the stack.",
        ),
        (
            "OP_SHA1",
            "Pop the top item from the stack and pass it through sha1, pushing the result onto the stack.",
        ),
        (
            "OP_SHA256",
            "Pop the top item from the stack and pass it through sha256, pushing the result onto the stack.",
        ),
        (
            "OP_HASH160",
            "Pop the top item from the stack and pass it through sha256, then ripemd160, pushing the result onto the stack.",
        ),
        (
            "OP_HASH256",
            "Pop the top item from the stack and pass it through sha256 twice, pushing the result onto the stack.",
        ),
        (
            "OP_CODESEPARATOR",
            "Update the value of lastCodeSeparator to the instruction pointer's current value. (This reduces the coverage of signing serializations used in signature verification operations.)",
        ),
        (
            "OP_CHECKSIG",
            "Pop the top 2 items from the stack. Treat the top as a public key and the second as a signature. If the signature is valid, push a VM Number 1, otherwise push a VM Number 0.",
        ),
        (
            "OP_CHECKSIGVERIFY",
            "Pop the top 2 items from the stack. Treat the top as a public key and the second as a signature. If the signature is not valid, error. (This operation is a combination of OP_CHECKSIG followed by OP_VERIFY.)",
        ),
        (
            "OP_CHECKMULTISIG",
            "Pop items from the stack as a public key count, public keys, a signature count, signatures, and a legacy bug value. If every signature is valid for one of the public keys (in order), push a VM Number 1, otherwise push a VM Number 0.",
        ),
        (
            "OP_CHECKMULTISIGVERIFY",
            "Pop items from the stack as a public key count, public keys, a signature count, signatures, and a legacy bug value. If any signature is not valid, error. (This operation is a combination of OP_CHECKMULTISIG followed by OP_VERIFY.)",
        ),
        (
            "OP_NOP1",
            "No operation (reserved for future expansion).",
        ),
        (
            "OP_CHECKLOCKTIMEVERIFY",
            "Verify the transaction occurs after an absolute block time or height: read the top item on the stack as a VM Number (without removing it), and compare it to the transaction's locktime. If the required locktime has not passed, or if locktime has been disabled for this input by a maximized sequence number, error.",
        ),
        (
            "OP_CHECKSEQUENCEVERIFY",
            "Verify the transaction occurs after a relative block time or height: read the top item on the stack as a VM Number (without removing it), and compare it to the age encoded in the input's sequence number. If the required relative locktime has not passed, error.",
        ),
        (
            "OP_NOP4",
            "No operation (reserved for future expansion).",
        ),
        (
            "OP_NOP5",
            "No operation (reserved for future expansion).",
        ),
        (
            "OP_NOP6",
            "No operation (reserved for future expansion).",
        ),
        (
            "OP_NOP7",
            "No operation (reserved for future expansion).",
        ),
        (
            "OP_NOP8",
            "No operation (reserved for future expansion).",
        ),
        (
            "OP_NOP9",
            "No operation (reserved for future expansion).",
        ),
        (
            "OP_NOP10",
            "No operation (reserved for future expansion).",
        ),
        (
            "OP_CHECKDATASIG",
            "Pop the top 3 items from the stack. Treat the top as a public key, the second as a message, and the third as a signature. If the signature is valid, push a VM Number 1, otherwise push a VM Number 0.",
        ),
        (
            "OP_CHECKDATASIGVERIFY",
            "Pop the top 3 items from the stack. Treat the top as a public key, the second as a message, and the third as a signature. If the signature is not valid, error. (This operation is a combination of OP_CHECKDATASIG followed by OP_VERIFY.)",
        ),
        (
            "OP_REVERSEBYTES",
            "Pop the top item from the stack and reverse it, pushing the result.",
        ),
        (
            "OP_INPUTINDEX",
            "Push the index of the input being evaluated to the stack as a VM Number.",
        ),
        (
            "OP_ACTIVEBYTECODE",
            "Push the bytecode currently being evaluated, beginning after the last executed OP_CODESEPARATOR, to the stack. For Pay-to-Script-Hash (P2SH) evaluations, this is the redeem bytecode of the input being evaluated; for all other evaluations, this is the locking bytecode of the UTXO being spent.",
        ),
        (
            "OP_TXVERSION",
            "Push the version of the current transaction to the stack as a VM Number.",
        ),
        (
            "OP_TXINPUTCOUNT",
            "Push the count of inputs in the current transaction to the stack as a VM Number.",
        ),
        (
            "OP_TXOUTPUTCOUNT",
            "Push the count of outputs in the current transaction to the stack as a VM Number.",
        ),
        (
            "OP_TXLOCKTIME",
            "Push the locktime of the current transaction to the stack as a VM Number.",
        ),
        (
            "OP_UTXOVALUE",
            "Pop the top item from the stack as an input index (VM Number). Push the value (in satoshis) of the Unspent Transaction Output (UTXO) spent by that input to the stack as a VM Number.",
        ),
        (
            "OP_UTXOBYTECODE",
            "Pop the top item from the stack as an input index (VM Number). Push the full locking bytecode of the Unspent Transaction Output (UTXO) spent by that input to the stack.",
        ),
        (
            "OP_OUTPOINTTXHASH",
            "Pop the top item from the stack as an input index (VM Number). Push the outpoint transaction hash (the hash of the transaction which originally created the UTXO being spent) of that input to the stack in OP_HASH256 byte order.",
        ),
        (
            "OP_OUTPOINTINDEX",
            "Pop the top item from the stack as an input index (VM Number). Push the outpoint index of that input to the stack as a VM Number.",
        ),
        (
            "OP_INPUTBYTECODE",
            "Pop the top item from the stack as an input index (VM Number). Push the unlocking bytecode of the input at that index to the stack.",
        ),
        (
            "OP_INPUTSEQUENCENUMBER",
            "Pop the top item from the stack as an input index (VM Number). Push the sequence number of the input at that index to the stack as a VM Number.",
        ),
        (
            "OP_OUTPUTVALUE",
            "Pop the top item from the stack as an output index (VM Number). Push the value (in satoshis) of the output at that index to the stack as a VM Number.",
        ),
        (
            "OP_OUTPUTBYTECODE",
            "Pop the top item from the stack as an output index (VM Number). Push the locking bytecode of the output at that index to the stack.",
        ),
        (
            "OP_UTXOTOKENCATEGORY",
            "Pop the top item from the stack as an input index (VM Number). If the UTXO spent by that input includes no tokens, push a VM Number 0. If the UTXO does not include a non-fungible token with a capability, push its token category; otherwise, push the token category followed by the capability, where mutable is represented by 1 and minting by 2.",
        ),
        (
            "OP_UTXOTOKENCOMMITMENT",
            "Pop the top item from the stack as an input index (VM Number). Push the non-fungible token commitment of the UTXO spent by that input to the stack. If the UTXO includes no non-fungible token, push a VM Number 0.",
        ),
        (
            "OP_UTXOTOKENAMOUNT",
            "Pop the top item from the stack as an input index (VM Number). Push the fungible token amount of the UTXO spent by that input to the stack as a VM Number.",
        ),
        (
            "OP_OUTPUTTOKENCATEGORY",
            "Pop the top item from the stack as an output index (VM Number). If the output at that index includes no tokens, push a VM Number 0. If the output does not include a non-fungible token with a capability, push its token category; otherwise, push the token category followed by the capability, where mutable is represented by 1 and minting by 2.",
        ),
        (
            "OP_OUTPUTTOKENCOMMITMENT",
            "Pop the top item from the stack as an output index (VM Number). Push the non-fungible token commitment of the output at that index to the stack. If the output includes no non-fungible token, push a VM Number 0.",
        ),
        (
            "OP_OUTPUTTOKENAMOUNT",
            "Pop the top item from the stack as an output index (VM Number). Push the fungible token amount of the output at that index to the stack as a VM Number.",
        ),
    ],
};
