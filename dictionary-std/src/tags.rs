//! Data element tag declarations
//!
//! Automatically generated. Edit at your own risk.

use dcmtags_core::dictionary::{DataDictionaryEntryRef, Multiplicity as Vm, TagRange::*, VirtualVr::*};
use dcmtags_core::Tag;
use dcmtags_core::VR::*;

/// Command Group Length (0000,0000) UL 1
#[rustfmt::skip]
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
/// Command Length to End (0000,0001) UL 1 (retired)
#[rustfmt::skip]
pub const COMMAND_LENGTH_TO_END: Tag = Tag(0x0000, 0x0001);
/// Affected SOP Class UID (0000,0002) UI 1
#[rustfmt::skip]
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);
/// Requested SOP Class UID (0000,0003) UI 1
#[rustfmt::skip]
pub const REQUESTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0003);
/// Command Recognition Code (0000,0010) SH 1 (retired)
#[rustfmt::skip]
pub const COMMAND_RECOGNITION_CODE: Tag = Tag(0x0000, 0x0010);
/// Command Field (0000,0100) US 1
#[rustfmt::skip]
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);
/// Message ID (0000,0110) US 1
#[rustfmt::skip]
pub const MESSAGE_ID: Tag = Tag(0x0000, 0x0110);
/// Message ID Being Responded To (0000,0120) US 1
#[rustfmt::skip]
pub const MESSAGE_ID_BEING_RESPONDED_TO: Tag = Tag(0x0000, 0x0120);
/// Initiator (0000,0200) AE 1 (retired)
#[rustfmt::skip]
pub const INITIATOR: Tag = Tag(0x0000, 0x0200);
/// Receiver (0000,0300) AE 1 (retired)
#[rustfmt::skip]
pub const RECEIVER: Tag = Tag(0x0000, 0x0300);
/// Find Location (0000,0400) AE 1 (retired)
#[rustfmt::skip]
pub const FIND_LOCATION: Tag = Tag(0x0000, 0x0400);
/// Move Destination (0000,0600) AE 1
#[rustfmt::skip]
pub const MOVE_DESTINATION: Tag = Tag(0x0000, 0x0600);
/// Priority (0000,0700) US 1
#[rustfmt::skip]
pub const PRIORITY: Tag = Tag(0x0000, 0x0700);
/// Command Data Set Type (0000,0800) US 1
#[rustfmt::skip]
pub const COMMAND_DATA_SET_TYPE: Tag = Tag(0x0000, 0x0800);
/// Number of Matches (0000,0850) US 1 (retired)
#[rustfmt::skip]
pub const NUMBER_OF_MATCHES: Tag = Tag(0x0000, 0x0850);
/// Response Sequence Number (0000,0860) US 1 (retired)
#[rustfmt::skip]
pub const RESPONSE_SEQUENCE_NUMBER: Tag = Tag(0x0000, 0x0860);
/// Status (0000,0900) US 1
#[rustfmt::skip]
pub const STATUS: Tag = Tag(0x0000, 0x0900);
/// Offending Element (0000,0901) AT 1-n
#[rustfmt::skip]
pub const OFFENDING_ELEMENT: Tag = Tag(0x0000, 0x0901);
/// Error Comment (0000,0902) LO 1
#[rustfmt::skip]
pub const ERROR_COMMENT: Tag = Tag(0x0000, 0x0902);
/// Error ID (0000,0903) US 1
#[rustfmt::skip]
pub const ERROR_ID: Tag = Tag(0x0000, 0x0903);
/// Affected SOP Instance UID (0000,1000) UI 1
#[rustfmt::skip]
pub const AFFECTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1000);
/// Requested SOP Instance UID (0000,1001) UI 1
#[rustfmt::skip]
pub const REQUESTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1001);
/// Event Type ID (0000,1002) US 1
#[rustfmt::skip]
pub const EVENT_TYPE_ID: Tag = Tag(0x0000, 0x1002);
/// Attribute Identifier List (0000,1005) AT 1-n
#[rustfmt::skip]
pub const ATTRIBUTE_IDENTIFIER_LIST: Tag = Tag(0x0000, 0x1005);
/// Action Type ID (0000,1008) US 1
#[rustfmt::skip]
pub const ACTION_TYPE_ID: Tag = Tag(0x0000, 0x1008);
/// Number of Remaining Sub-operations (0000,1020) US 1
#[rustfmt::skip]
pub const NUMBER_OF_REMAINING_SUBOPERATIONS: Tag = Tag(0x0000, 0x1020);
/// Number of Completed Sub-operations (0000,1021) US 1
#[rustfmt::skip]
pub const NUMBER_OF_COMPLETED_SUBOPERATIONS: Tag = Tag(0x0000, 0x1021);
/// Number of Failed Sub-operations (0000,1022) US 1
#[rustfmt::skip]
pub const NUMBER_OF_FAILED_SUBOPERATIONS: Tag = Tag(0x0000, 0x1022);
/// Number of Warning Sub-operations (0000,1023) US 1
#[rustfmt::skip]
pub const NUMBER_OF_WARNING_SUBOPERATIONS: Tag = Tag(0x0000, 0x1023);
/// Move Originator Application Entity Title (0000,1030) AE 1
#[rustfmt::skip]
pub const MOVE_ORIGINATOR_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0000, 0x1030);
/// Move Originator Message ID (0000,1031) US 1
#[rustfmt::skip]
pub const MOVE_ORIGINATOR_MESSAGE_ID: Tag = Tag(0x0000, 0x1031);
/// Dialog Receiver (0000,4000) LT 1 (retired)
#[rustfmt::skip]
pub const DIALOG_RECEIVER: Tag = Tag(0x0000, 0x4000);
/// Terminal Type (0000,4010) LT 1 (retired)
#[rustfmt::skip]
pub const TERMINAL_TYPE: Tag = Tag(0x0000, 0x4010);
/// Message Set ID (0000,5010) SH 1 (retired)
#[rustfmt::skip]
pub const MESSAGE_SET_ID: Tag = Tag(0x0000, 0x5010);
/// End Message ID (0000,5020) SH 1 (retired)
#[rustfmt::skip]
pub const END_MESSAGE_ID: Tag = Tag(0x0000, 0x5020);
/// Display Format (0000,5110) LT 1 (retired)
#[rustfmt::skip]
pub const DISPLAY_FORMAT: Tag = Tag(0x0000, 0x5110);
/// Page Position ID (0000,5120) LT 1 (retired)
#[rustfmt::skip]
pub const PAGE_POSITION_ID: Tag = Tag(0x0000, 0x5120);
/// Text Format ID (0000,5130) CS 1 (retired)
#[rustfmt::skip]
pub const TEXT_FORMAT_ID: Tag = Tag(0x0000, 0x5130);
/// Normal/Reverse (0000,5140) CS 1 (retired)
#[rustfmt::skip]
pub const NORMAL_REVERSE: Tag = Tag(0x0000, 0x5140);
/// Add Gray Scale (0000,5150) CS 1 (retired)
#[rustfmt::skip]
pub const ADD_GRAY_SCALE: Tag = Tag(0x0000, 0x5150);
/// Borders (0000,5160) CS 1 (retired)
#[rustfmt::skip]
pub const BORDERS: Tag = Tag(0x0000, 0x5160);
/// Copies (0000,5170) IS 1 (retired)
#[rustfmt::skip]
pub const COPIES: Tag = Tag(0x0000, 0x5170);
/// Command Magnification Type (0000,5180) CS 1 (retired)
#[rustfmt::skip]
pub const COMMAND_MAGNIFICATION_TYPE: Tag = Tag(0x0000, 0x5180);
/// Erase (0000,5190) CS 1 (retired)
#[rustfmt::skip]
pub const ERASE: Tag = Tag(0x0000, 0x5190);
/// Print (0000,51A0) CS 1 (retired)
#[rustfmt::skip]
pub const PRINT: Tag = Tag(0x0000, 0x51A0);
/// Overlays (0000,51B0) US 1-n (retired)
#[rustfmt::skip]
pub const OVERLAYS: Tag = Tag(0x0000, 0x51B0);
/// File Meta Information Group Length (0002,0000) UL 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// File Meta Information Version (0002,0001) OB 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// Media Storage SOP Class UID (0002,0002) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// Media Storage SOP Instance UID (0002,0003) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// Transfer Syntax UID (0002,0010) UI 1
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// Implementation Class UID (0002,0012) UI 1
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// Implementation Version Name (0002,0013) SH 1
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// Source Application Entity Title (0002,0016) AE 1
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// Sending Application Entity Title (0002,0017) AE 1
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// Receiving Application Entity Title (0002,0018) AE 1
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// Source Presentation Address (0002,0026) UR 1
#[rustfmt::skip]
pub const SOURCE_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0026);
/// Sending Presentation Address (0002,0027) UR 1
#[rustfmt::skip]
pub const SENDING_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0027);
/// Receiving Presentation Address (0002,0028) UR 1
#[rustfmt::skip]
pub const RECEIVING_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0028);
/// RTV Meta Information Version (0002,0031) OB 1
#[rustfmt::skip]
pub const RTV_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0031);
/// RTV Communication SOP Class UID (0002,0032) UI 1
#[rustfmt::skip]
pub const RTV_COMMUNICATION_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0032);
/// RTV Communication SOP Instance UID (0002,0033) UI 1
#[rustfmt::skip]
pub const RTV_COMMUNICATION_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0033);
/// RTV Source Identifier (0002,0035) OB 1
#[rustfmt::skip]
pub const RTV_SOURCE_IDENTIFIER: Tag = Tag(0x0002, 0x0035);
/// RTV Flow Identifier (0002,0036) OB 1
#[rustfmt::skip]
pub const RTV_FLOW_IDENTIFIER: Tag = Tag(0x0002, 0x0036);
/// RTV Flow RTP Sampling Rate (0002,0037) UL 1
#[rustfmt::skip]
pub const RTV_FLOW_RTP_SAMPLING_RATE: Tag = Tag(0x0002, 0x0037);
/// RTV Flow Actual Frame Duration (0002,0038) FD 1
#[rustfmt::skip]
pub const RTV_FLOW_ACTUAL_FRAME_DURATION: Tag = Tag(0x0002, 0x0038);
/// Private Information Creator UID (0002,0100) UI 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// Private Information (0002,0102) OB 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// File-set ID (0004,1130) CS 1
#[rustfmt::skip]
pub const FILE_SET_ID: Tag = Tag(0x0004, 0x1130);
/// File-set Descriptor File ID (0004,1141) CS 1-8
#[rustfmt::skip]
pub const FILE_SET_DESCRIPTOR_FILE_ID: Tag = Tag(0x0004, 0x1141);
/// Specific Character Set of File-set Descriptor File (0004,1142) CS 1
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET_OF_FILE_SET_DESCRIPTOR_FILE: Tag = Tag(0x0004, 0x1142);
/// Offset of the First Directory Record of the Root Directory Entity (0004,1200) UL 1
#[rustfmt::skip]
pub const OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1200);
/// Offset of the Last Directory Record of the Root Directory Entity (0004,1202) UL 1
#[rustfmt::skip]
pub const OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1202);
/// File-set Consistency Flag (0004,1212) US 1
#[rustfmt::skip]
pub const FILE_SET_CONSISTENCY_FLAG: Tag = Tag(0x0004, 0x1212);
/// Directory Record Sequence (0004,1220) SQ 1
#[rustfmt::skip]
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
/// Offset of the Next Directory Record (0004,1400) UL 1
#[rustfmt::skip]
pub const OFFSET_OF_THE_NEXT_DIRECTORY_RECORD: Tag = Tag(0x0004, 0x1400);
/// Record In-use Flag (0004,1410) US 1
#[rustfmt::skip]
pub const RECORD_IN_USE_FLAG: Tag = Tag(0x0004, 0x1410);
/// Offset of Referenced Lower-Level Directory Entity (0004,1420) UL 1
#[rustfmt::skip]
pub const OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1420);
/// Directory Record Type (0004,1430) CS 1
#[rustfmt::skip]
pub const DIRECTORY_RECORD_TYPE: Tag = Tag(0x0004, 0x1430);
/// Private Record UID (0004,1432) UI 1
#[rustfmt::skip]
pub const PRIVATE_RECORD_UID: Tag = Tag(0x0004, 0x1432);
/// Referenced File ID (0004,1500) CS 1-8
#[rustfmt::skip]
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);
/// MRDR Directory Record Offset (0004,1504) UL 1 (retired)
#[rustfmt::skip]
pub const MRDR_DIRECTORY_RECORD_OFFSET: Tag = Tag(0x0004, 0x1504);
/// Referenced SOP Class UID in File (0004,1510) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x1510);
/// Referenced SOP Instance UID in File (0004,1511) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID_IN_FILE: Tag = Tag(0x0004, 0x1511);
/// Referenced Transfer Syntax UID in File (0004,1512) UI 1
#[rustfmt::skip]
pub const REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE: Tag = Tag(0x0004, 0x1512);
/// Referenced Related General SOP Class UID in File (0004,151A) UI 1-n
#[rustfmt::skip]
pub const REFERENCED_RELATED_GENERAL_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x151A);
/// Number of References (0004,1600) UL 1 (retired)
#[rustfmt::skip]
pub const NUMBER_OF_REFERENCES: Tag = Tag(0x0004, 0x1600);
/// Current Frame Functional Groups Sequence (0006,0001) SQ 1
#[rustfmt::skip]
pub const CURRENT_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x0006, 0x0001);
/// Length to End (0008,0001) UL 1 (retired)
#[rustfmt::skip]
pub const LENGTH_TO_END: Tag = Tag(0x0008, 0x0001);
/// Specific Character Set (0008,0005) CS 1-n
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// Language Code Sequence (0008,0006) SQ 1
#[rustfmt::skip]
pub const LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0006);
/// Image Type (0008,0008) CS 2-n
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// Recognition Code (0008,0010) SH 1 (retired)
#[rustfmt::skip]
pub const RECOGNITION_CODE: Tag = Tag(0x0008, 0x0010);
/// Instance Creation Date (0008,0012) DA 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// Instance Creation Time (0008,0013) TM 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// Instance Creator UID (0008,0014) UI 1
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// Instance Coercion DateTime (0008,0015) DT 1
#[rustfmt::skip]
pub const INSTANCE_COERCION_DATE_TIME: Tag = Tag(0x0008, 0x0015);
/// SOP Class UID (0008,0016) UI 1
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// Acquisition UID (0008,0017) UI 1
#[rustfmt::skip]
pub const ACQUISITION_UID: Tag = Tag(0x0008, 0x0017);
/// SOP Instance UID (0008,0018) UI 1
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// Pyramid UID (0008,0019) UI 1
#[rustfmt::skip]
pub const PYRAMID_UID: Tag = Tag(0x0008, 0x0019);
/// Related General SOP Class UID (0008,001A) UI 1-n
#[rustfmt::skip]
pub const RELATED_GENERAL_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001A);
/// Original Specialized SOP Class UID (0008,001B) UI 1
#[rustfmt::skip]
pub const ORIGINAL_SPECIALIZED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001B);
/// Study Date (0008,0020) DA 1
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// Series Date (0008,0021) DA 1
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// Acquisition Date (0008,0022) DA 1
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// Content Date (0008,0023) DA 1
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// Overlay Date (0008,0024) DA 1 (retired)
#[rustfmt::skip]
pub const OVERLAY_DATE: Tag = Tag(0x0008, 0x0024);
/// Curve Date (0008,0025) DA 1 (retired)
#[rustfmt::skip]
pub const CURVE_DATE: Tag = Tag(0x0008, 0x0025);
/// Acquisition DateTime (0008,002A) DT 1
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// Study Time (0008,0030) TM 1
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// Series Time (0008,0031) TM 1
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// Acquisition Time (0008,0032) TM 1
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// Content Time (0008,0033) TM 1
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// Overlay Time (0008,0034) TM 1 (retired)
#[rustfmt::skip]
pub const OVERLAY_TIME: Tag = Tag(0x0008, 0x0034);
/// Curve Time (0008,0035) TM 1 (retired)
#[rustfmt::skip]
pub const CURVE_TIME: Tag = Tag(0x0008, 0x0035);
/// Data Set Type (0008,0040) US 1 (retired)
#[rustfmt::skip]
pub const DATA_SET_TYPE: Tag = Tag(0x0008, 0x0040);
/// Data Set Subtype (0008,0041) LO 1 (retired)
#[rustfmt::skip]
pub const DATA_SET_SUBTYPE: Tag = Tag(0x0008, 0x0041);
/// Nuclear Medicine Series Type (0008,0042) CS 1 (retired)
#[rustfmt::skip]
pub const NUCLEAR_MEDICINE_SERIES_TYPE: Tag = Tag(0x0008, 0x0042);
/// Accession Number (0008,0050) SH 1
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Issuer of Accession Number Sequence (0008,0051) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_ACCESSION_NUMBER_SEQUENCE: Tag = Tag(0x0008, 0x0051);
/// Query/Retrieve Level (0008,0052) CS 1
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// Query/Retrieve View (0008,0053) CS 1
#[rustfmt::skip]
pub const QUERY_RETRIEVE_VIEW: Tag = Tag(0x0008, 0x0053);
/// Retrieve AE Title (0008,0054) AE 1-n
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// Station AE Title (0008,0055) AE 1
#[rustfmt::skip]
pub const STATION_AE_TITLE: Tag = Tag(0x0008, 0x0055);
/// Instance Availability (0008,0056) CS 1
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// Failed SOP Instance UID List (0008,0058) UI 1-n
#[rustfmt::skip]
pub const FAILED_SOP_INSTANCE_UID_LIST: Tag = Tag(0x0008, 0x0058);
/// Modality (0008,0060) CS 1
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Modalities in Study (0008,0061) CS 1-n
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// SOP Classes in Study (0008,0062) UI 1-n
#[rustfmt::skip]
pub const SOP_CLASSES_IN_STUDY: Tag = Tag(0x0008, 0x0062);
/// Anatomic Regions in Study Code Sequence (0008,0063) SQ 1
#[rustfmt::skip]
pub const ANATOMIC_REGIONS_IN_STUDY_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0063);
/// Conversion Type (0008,0064) CS 1
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Presentation Intent Type (0008,0068) CS 1
#[rustfmt::skip]
pub const PRESENTATION_INTENT_TYPE: Tag = Tag(0x0008, 0x0068);
/// Manufacturer (0008,0070) LO 1
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// Institution Name (0008,0080) LO 1
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// Institution Address (0008,0081) ST 1
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// Institution Code Sequence (0008,0082) SQ 1
#[rustfmt::skip]
pub const INSTITUTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0082);
/// Referring Physician's Name (0008,0090) PN 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// Referring Physician's Address (0008,0092) ST 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_ADDRESS: Tag = Tag(0x0008, 0x0092);
/// Referring Physician's Telephone Numbers (0008,0094) SH 1-n
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_TELEPHONE_NUMBERS: Tag = Tag(0x0008, 0x0094);
/// Referring Physician Identification Sequence (0008,0096) SQ 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0096);
/// Consulting Physician's Name (0008,009C) PN 1-n
#[rustfmt::skip]
pub const CONSULTING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x009C);
/// Consulting Physician Identification Sequence (0008,009D) SQ 1
#[rustfmt::skip]
pub const CONSULTING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x009D);
/// Code Value (0008,0100) SH 1
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// Coding Scheme Designator (0008,0102) SH 1
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// Coding Scheme Version (0008,0103) SH 1
#[rustfmt::skip]
pub const CODING_SCHEME_VERSION: Tag = Tag(0x0008, 0x0103);
/// Code Meaning (0008,0104) LO 1
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// Mapping Resource (0008,0105) CS 1
#[rustfmt::skip]
pub const MAPPING_RESOURCE: Tag = Tag(0x0008, 0x0105);
/// Context Group Version (0008,0106) DT 1
#[rustfmt::skip]
pub const CONTEXT_GROUP_VERSION: Tag = Tag(0x0008, 0x0106);
/// Context Group Local Version (0008,0107) DT 1
#[rustfmt::skip]
pub const CONTEXT_GROUP_LOCAL_VERSION: Tag = Tag(0x0008, 0x0107);
/// Context Group Extension Flag (0008,010B) CS 1
#[rustfmt::skip]
pub const CONTEXT_GROUP_EXTENSION_FLAG: Tag = Tag(0x0008, 0x010B);
/// Coding Scheme UID (0008,010C) UI 1
#[rustfmt::skip]
pub const CODING_SCHEME_UID: Tag = Tag(0x0008, 0x010C);
/// Context Group Extension Creator UID (0008,010D) UI 1
#[rustfmt::skip]
pub const CONTEXT_GROUP_EXTENSION_CREATOR_UID: Tag = Tag(0x0008, 0x010D);
/// Context Identifier (0008,010F) CS 1
#[rustfmt::skip]
pub const CONTEXT_IDENTIFIER: Tag = Tag(0x0008, 0x010F);
/// Coding Scheme Identification Sequence (0008,0110) SQ 1
#[rustfmt::skip]
pub const CODING_SCHEME_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0110);
/// Coding Scheme Registry (0008,0112) LO 1
#[rustfmt::skip]
pub const CODING_SCHEME_REGISTRY: Tag = Tag(0x0008, 0x0112);
/// Coding Scheme External ID (0008,0114) ST 1
#[rustfmt::skip]
pub const CODING_SCHEME_EXTERNAL_ID: Tag = Tag(0x0008, 0x0114);
/// Coding Scheme Name (0008,0115) ST 1
#[rustfmt::skip]
pub const CODING_SCHEME_NAME: Tag = Tag(0x0008, 0x0115);
/// Coding Scheme Responsible Organization (0008,0116) ST 1
#[rustfmt::skip]
pub const CODING_SCHEME_RESPONSIBLE_ORGANIZATION: Tag = Tag(0x0008, 0x0116);
/// Context UID (0008,0117) UI 1
#[rustfmt::skip]
pub const CONTEXT_UID: Tag = Tag(0x0008, 0x0117);
/// Mapping Resource UID (0008,0118) UI 1
#[rustfmt::skip]
pub const MAPPING_RESOURCE_UID: Tag = Tag(0x0008, 0x0118);
/// Long Code Value (0008,0119) UC 1
#[rustfmt::skip]
pub const LONG_CODE_VALUE: Tag = Tag(0x0008, 0x0119);
/// URN Code Value (0008,0120) UR 1
#[rustfmt::skip]
pub const URN_CODE_VALUE: Tag = Tag(0x0008, 0x0120);
/// Equivalent Code Sequence (0008,0121) SQ 1
#[rustfmt::skip]
pub const EQUIVALENT_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0121);
/// Mapping Resource Name (0008,0122) LO 1
#[rustfmt::skip]
pub const MAPPING_RESOURCE_NAME: Tag = Tag(0x0008, 0x0122);
/// Context Group Identification Sequence (0008,0123) SQ 1
#[rustfmt::skip]
pub const CONTEXT_GROUP_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0123);
/// Mapping Resource Identification Sequence (0008,0124) SQ 1
#[rustfmt::skip]
pub const MAPPING_RESOURCE_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0124);
/// Timezone Offset From UTC (0008,0201) SH 1
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// Private Data Element Characteristics Sequence (0008,0220) SQ 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x0008, 0x0220);
/// Private Group Reference (0008,0301) US 1
#[rustfmt::skip]
pub const PRIVATE_GROUP_REFERENCE: Tag = Tag(0x0008, 0x0301);
/// Private Creator Reference (0008,0302) LO 1
#[rustfmt::skip]
pub const PRIVATE_CREATOR_REFERENCE: Tag = Tag(0x0008, 0x0302);
/// Block Identifying Information Status (0008,0303) CS 1
#[rustfmt::skip]
pub const BLOCK_IDENTIFYING_INFORMATION_STATUS: Tag = Tag(0x0008, 0x0303);
/// Nonidentifying Private Elements (0008,0304) US 1-n
#[rustfmt::skip]
pub const NONIDENTIFYING_PRIVATE_ELEMENTS: Tag = Tag(0x0008, 0x0304);
/// Deidentification Action Sequence (0008,0305) SQ 1
#[rustfmt::skip]
pub const DEIDENTIFICATION_ACTION_SEQUENCE: Tag = Tag(0x0008, 0x0305);
/// Identifying Private Elements (0008,0306) US 1-n
#[rustfmt::skip]
pub const IDENTIFYING_PRIVATE_ELEMENTS: Tag = Tag(0x0008, 0x0306);
/// Deidentification Action (0008,0307) CS 1
#[rustfmt::skip]
pub const DEIDENTIFICATION_ACTION: Tag = Tag(0x0008, 0x0307);
/// Private Data Element (0008,0308) US 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT: Tag = Tag(0x0008, 0x0308);
/// Private Data Element Value Multiplicity (0008,0309) UL 1-3
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_VALUE_MULTIPLICITY: Tag = Tag(0x0008, 0x0309);
/// Private Data Element Value Representation (0008,030A) CS 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_VALUE_REPRESENTATION: Tag = Tag(0x0008, 0x030A);
/// Private Data Element Number of Items (0008,030B) UL 1-2
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_NUMBER_OF_ITEMS: Tag = Tag(0x0008, 0x030B);
/// Private Data Element Name (0008,030C) UC 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_NAME: Tag = Tag(0x0008, 0x030C);
/// Private Data Element Keyword (0008,030D) UC 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_KEYWORD: Tag = Tag(0x0008, 0x030D);
/// Private Data Element Description (0008,030E) UT 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_DESCRIPTION: Tag = Tag(0x0008, 0x030E);
/// Private Data Element Encoding (0008,030F) UT 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_ENCODING: Tag = Tag(0x0008, 0x030F);
/// Private Data Element Definition Sequence (0008,0310) SQ 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_DEFINITION_SEQUENCE: Tag = Tag(0x0008, 0x0310);
/// Network ID (0008,1000) AE 1 (retired)
#[rustfmt::skip]
pub const NETWORK_ID: Tag = Tag(0x0008, 0x1000);
/// Station Name (0008,1010) SH 1
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// Study Description (0008,1030) LO 1
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// Procedure Code Sequence (0008,1032) SQ 1
#[rustfmt::skip]
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// Series Description (0008,103E) LO 1
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// Series Description Code Sequence (0008,103F) SQ 1
#[rustfmt::skip]
pub const SERIES_DESCRIPTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x103F);
/// Institutional Department Name (0008,1040) LO 1
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// Physician(s) of Record (0008,1048) PN 1-n
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// Physicians of Record Identification Sequence (0008,1049) SQ 1
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1049);
/// Performing Physician's Name (0008,1050) PN 1-n
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// Performing Physician Identification Sequence (0008,1052) SQ 1
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1052);
/// Name of Physician(s) Reading Study (0008,1060) PN 1-n
#[rustfmt::skip]
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// Physicians Reading Study Identification Sequence (0008,1062) SQ 1
#[rustfmt::skip]
pub const PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1062);
/// Operators' Name (0008,1070) PN 1-n
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// Operator Identification Sequence (0008,1072) SQ 1
#[rustfmt::skip]
pub const OPERATOR_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1072);
/// Admitting Diagnoses Description (0008,1080) LO 1-n
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// Admitting Diagnoses Code Sequence (0008,1084) SQ 1
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1084);
/// Pyramid Description (0008,1088) LO 1
#[rustfmt::skip]
pub const PYRAMID_DESCRIPTION: Tag = Tag(0x0008, 0x1088);
/// Manufacturer's Model Name (0008,1090) LO 1
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// Referenced Results Sequence (0008,1100) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_RESULTS_SEQUENCE: Tag = Tag(0x0008, 0x1100);
/// Referenced Study Sequence (0008,1110) SQ 1
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// Referenced Performed Procedure Step Sequence (0008,1111) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// Referenced Instances by SOP Class Sequence (0008,1112) SQ 1
#[rustfmt::skip]
pub const REFERENCED_INSTANCES_BY_SOP_CLASS_SEQUENCE: Tag = Tag(0x0008, 0x1112);
/// Referenced Series Sequence (0008,1115) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// Referenced Patient Sequence (0008,1120) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// Referenced Visit Sequence (0008,1125) SQ 1
#[rustfmt::skip]
pub const REFERENCED_VISIT_SEQUENCE: Tag = Tag(0x0008, 0x1125);
/// Referenced Overlay Sequence (0008,1130) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_OVERLAY_SEQUENCE: Tag = Tag(0x0008, 0x1130);
/// Referenced Stereometric Instance Sequence (0008,1134) SQ 1
#[rustfmt::skip]
pub const REFERENCED_STEREOMETRIC_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x1134);
/// Referenced Waveform Sequence (0008,113A) SQ 1
#[rustfmt::skip]
pub const REFERENCED_WAVEFORM_SEQUENCE: Tag = Tag(0x0008, 0x113A);
/// Referenced Image Sequence (0008,1140) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// Referenced Curve Sequence (0008,1145) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_CURVE_SEQUENCE: Tag = Tag(0x0008, 0x1145);
/// Referenced Instance Sequence (0008,114A) SQ 1
#[rustfmt::skip]
pub const REFERENCED_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x114A);
/// Referenced Real World Value Mapping Instance Sequence (0008,114B) SQ 1
#[rustfmt::skip]
pub const REFERENCED_REAL_WORLD_VALUE_MAPPING_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x114B);
/// Referenced SOP Class UID (0008,1150) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// Referenced SOP Instance UID (0008,1155) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// Definition Source Sequence (0008,1156) SQ 1
#[rustfmt::skip]
pub const DEFINITION_SOURCE_SEQUENCE: Tag = Tag(0x0008, 0x1156);
/// SOP Classes Supported (0008,115A) UI 1-n
#[rustfmt::skip]
pub const SOP_CLASSES_SUPPORTED: Tag = Tag(0x0008, 0x115A);
/// Referenced Frame Number (0008,1160) IS 1-n
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// Simple Frame List (0008,1161) UL 1-n
#[rustfmt::skip]
pub const SIMPLE_FRAME_LIST: Tag = Tag(0x0008, 0x1161);
/// Calculated Frame List (0008,1162) UL 3-3n
#[rustfmt::skip]
pub const CALCULATED_FRAME_LIST: Tag = Tag(0x0008, 0x1162);
/// Time Range (0008,1163) FD 2
#[rustfmt::skip]
pub const TIME_RANGE: Tag = Tag(0x0008, 0x1163);
/// Frame Extraction Sequence (0008,1164) SQ 1
#[rustfmt::skip]
pub const FRAME_EXTRACTION_SEQUENCE: Tag = Tag(0x0008, 0x1164);
/// Multi-frame Source SOP Instance UID (0008,1167) UI 1
#[rustfmt::skip]
pub const MULTI_FRAME_SOURCE_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1167);
/// Retrieve URL (0008,1190) UR 1
#[rustfmt::skip]
pub const RETRIEVE_URL: Tag = Tag(0x0008, 0x1190);
/// Transaction UID (0008,1195) UI 1
#[rustfmt::skip]
pub const TRANSACTION_UID: Tag = Tag(0x0008, 0x1195);
/// Warning Reason (0008,1196) US 1
#[rustfmt::skip]
pub const WARNING_REASON: Tag = Tag(0x0008, 0x1196);
/// Failure Reason (0008,1197) US 1
#[rustfmt::skip]
pub const FAILURE_REASON: Tag = Tag(0x0008, 0x1197);
/// Failed SOP Sequence (0008,1198) SQ 1
#[rustfmt::skip]
pub const FAILED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1198);
/// Referenced SOP Sequence (0008,1199) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// Other Failures Sequence (0008,119A) SQ 1
#[rustfmt::skip]
pub const OTHER_FAILURES_SEQUENCE: Tag = Tag(0x0008, 0x119A);
/// Failed Study Sequence (0008,119B) SQ 1
#[rustfmt::skip]
pub const FAILED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x119B);
/// Studies Containing Other Referenced Instances Sequence (0008,1200) SQ 1
#[rustfmt::skip]
pub const STUDIES_CONTAINING_OTHER_REFERENCED_INSTANCES_SEQUENCE: Tag = Tag(0x0008, 0x1200);
/// Related Series Sequence (0008,1250) SQ 1
#[rustfmt::skip]
pub const RELATED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1250);
/// Lossy Image Compression (Retired) (0008,2110) CS 1 (retired)
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RETIRED: Tag = Tag(0x0008, 0x2110);
/// Derivation Description (0008,2111) ST 1
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// Source Image Sequence (0008,2112) SQ 1
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// Stage Name (0008,2120) SH 1
#[rustfmt::skip]
pub const STAGE_NAME: Tag = Tag(0x0008, 0x2120);
/// Stage Number (0008,2122) IS 1
#[rustfmt::skip]
pub const STAGE_NUMBER: Tag = Tag(0x0008, 0x2122);
/// Number of Stages (0008,2124) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_STAGES: Tag = Tag(0x0008, 0x2124);
/// View Name (0008,2127) SH 1
#[rustfmt::skip]
pub const VIEW_NAME: Tag = Tag(0x0008, 0x2127);
/// View Number (0008,2128) IS 1
#[rustfmt::skip]
pub const VIEW_NUMBER: Tag = Tag(0x0008, 0x2128);
/// Number of Event Timers (0008,2129) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_EVENT_TIMERS: Tag = Tag(0x0008, 0x2129);
/// Number of Views in Stage (0008,212A) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_VIEWS_IN_STAGE: Tag = Tag(0x0008, 0x212A);
/// Event Elapsed Time(s) (0008,2130) DS 1-n
#[rustfmt::skip]
pub const EVENT_ELAPSED_TIMES: Tag = Tag(0x0008, 0x2130);
/// Event Timer Name(s) (0008,2132) LO 1-n
#[rustfmt::skip]
pub const EVENT_TIMER_NAMES: Tag = Tag(0x0008, 0x2132);
/// Event Timer Sequence (0008,2133) SQ 1
#[rustfmt::skip]
pub const EVENT_TIMER_SEQUENCE: Tag = Tag(0x0008, 0x2133);
/// Event Time Offset (0008,2134) FD 1
#[rustfmt::skip]
pub const EVENT_TIME_OFFSET: Tag = Tag(0x0008, 0x2134);
/// Event Code Sequence (0008,2135) SQ 1
#[rustfmt::skip]
pub const EVENT_CODE_SEQUENCE: Tag = Tag(0x0008, 0x2135);
/// Start Trim (0008,2142) IS 1
#[rustfmt::skip]
pub const START_TRIM: Tag = Tag(0x0008, 0x2142);
/// Stop Trim (0008,2143) IS 1
#[rustfmt::skip]
pub const STOP_TRIM: Tag = Tag(0x0008, 0x2143);
/// Recommended Display Frame Rate (0008,2144) IS 1
#[rustfmt::skip]
pub const RECOMMENDED_DISPLAY_FRAME_RATE: Tag = Tag(0x0008, 0x2144);
/// Transducer Position (0008,2200) CS 1 (retired)
#[rustfmt::skip]
pub const TRANSDUCER_POSITION: Tag = Tag(0x0008, 0x2200);
/// Transducer Orientation (0008,2204) CS 1 (retired)
#[rustfmt::skip]
pub const TRANSDUCER_ORIENTATION: Tag = Tag(0x0008, 0x2204);
/// Anatomic Structure (0008,2208) CS 1 (retired)
#[rustfmt::skip]
pub const ANATOMIC_STRUCTURE: Tag = Tag(0x0008, 0x2208);
/// Anatomic Region Sequence (0008,2218) SQ 1
#[rustfmt::skip]
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
/// Anatomic Region Modifier Sequence (0008,2220) SQ 1
#[rustfmt::skip]
pub const ANATOMIC_REGION_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2220);
/// Primary Anatomic Structure Sequence (0008,2228) SQ 1
#[rustfmt::skip]
pub const PRIMARY_ANATOMIC_STRUCTURE_SEQUENCE: Tag = Tag(0x0008, 0x2228);
/// Anatomic Structure, Space or Region Sequence (0008,2229) SQ 1 (retired)
#[rustfmt::skip]
pub const ANATOMIC_STRUCTURE_SPACE_OR_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2229);
/// Primary Anatomic Structure Modifier Sequence (0008,2230) SQ 1
#[rustfmt::skip]
pub const PRIMARY_ANATOMIC_STRUCTURE_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2230);
/// Transducer Position Sequence (0008,2240) SQ 1 (retired)
#[rustfmt::skip]
pub const TRANSDUCER_POSITION_SEQUENCE: Tag = Tag(0x0008, 0x2240);
/// Transducer Position Modifier Sequence (0008,2242) SQ 1 (retired)
#[rustfmt::skip]
pub const TRANSDUCER_POSITION_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2242);
/// Transducer Orientation Sequence (0008,2244) SQ 1 (retired)
#[rustfmt::skip]
pub const TRANSDUCER_ORIENTATION_SEQUENCE: Tag = Tag(0x0008, 0x2244);
/// Transducer Orientation Modifier Sequence (0008,2246) SQ 1 (retired)
#[rustfmt::skip]
pub const TRANSDUCER_ORIENTATION_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2246);
/// Anatomic Structure Space Or Region Code Sequence (Trial) (0008,2251) SQ 1 (retired)
#[rustfmt::skip]
pub const ANATOMIC_STRUCTURE_SPACE_OR_REGION_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0008, 0x2251);
/// Anatomic Portal Of Entrance Code Sequence (Trial) (0008,2253) SQ 1 (retired)
#[rustfmt::skip]
pub const ANATOMIC_PORTAL_OF_ENTRANCE_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0008, 0x2253);
/// Anatomic Approach Direction Code Sequence (Trial) (0008,2255) SQ 1 (retired)
#[rustfmt::skip]
pub const ANATOMIC_APPROACH_DIRECTION_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0008, 0x2255);
/// Anatomic Perspective Description (Trial) (0008,2256) ST 1 (retired)
#[rustfmt::skip]
pub const ANATOMIC_PERSPECTIVE_DESCRIPTION_TRIAL: Tag = Tag(0x0008, 0x2256);
/// Anatomic Perspective Code Sequence (Trial) (0008,2257) SQ 1 (retired)
#[rustfmt::skip]
pub const ANATOMIC_PERSPECTIVE_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0008, 0x2257);
/// Anatomic Location Of Examining Instrument Description (Trial) (0008,2258) ST 1 (retired)
#[rustfmt::skip]
pub const ANATOMIC_LOCATION_OF_EXAMINING_INSTRUMENT_DESCRIPTION_TRIAL: Tag = Tag(0x0008, 0x2258);
/// Anatomic Location Of Examining Instrument Code Sequence (Trial) (0008,2259) SQ 1 (retired)
#[rustfmt::skip]
pub const ANATOMIC_LOCATION_OF_EXAMINING_INSTRUMENT_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0008, 0x2259);
/// Anatomic Structure Space Or Region Modifier Code Sequence (Trial) (0008,225A) SQ 1 (retired)
#[rustfmt::skip]
pub const ANATOMIC_STRUCTURE_SPACE_OR_REGION_MODIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0008, 0x225A);
/// On Axis Background Anatomic Structure Code Sequence (Trial) (0008,225C) SQ 1 (retired)
#[rustfmt::skip]
pub const ON_AXIS_BACKGROUND_ANATOMIC_STRUCTURE_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0008, 0x225C);
/// Alternate Representation Sequence (0008,3001) SQ 1
#[rustfmt::skip]
pub const ALTERNATE_REPRESENTATION_SEQUENCE: Tag = Tag(0x0008, 0x3001);
/// Available Transfer Syntax UID (0008,3002) UI 1-n
#[rustfmt::skip]
pub const AVAILABLE_TRANSFER_SYNTAX_UID: Tag = Tag(0x0008, 0x3002);
/// Irradiation Event UID (0008,3010) UI 1-n
#[rustfmt::skip]
pub const IRRADIATION_EVENT_UID: Tag = Tag(0x0008, 0x3010);
/// Source Irradiation Event Sequence (0008,3011) SQ 1
#[rustfmt::skip]
pub const SOURCE_IRRADIATION_EVENT_SEQUENCE: Tag = Tag(0x0008, 0x3011);
/// Radiopharmaceutical Administration Event UID (0008,3012) UI 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_ADMINISTRATION_EVENT_UID: Tag = Tag(0x0008, 0x3012);
/// Identifying Comments (0008,4000) LT 1 (retired)
#[rustfmt::skip]
pub const IDENTIFYING_COMMENTS: Tag = Tag(0x0008, 0x4000);
/// Frame Type (0008,9007) CS 4-4n
#[rustfmt::skip]
pub const FRAME_TYPE: Tag = Tag(0x0008, 0x9007);
/// Referenced Image Evidence Sequence (0008,9092) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_EVIDENCE_SEQUENCE: Tag = Tag(0x0008, 0x9092);
/// Referenced Raw Data Sequence (0008,9121) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RAW_DATA_SEQUENCE: Tag = Tag(0x0008, 0x9121);
/// Creator-Version UID (0008,9123) UI 1
#[rustfmt::skip]
pub const CREATOR_VERSION_UID: Tag = Tag(0x0008, 0x9123);
/// Derivation Image Sequence (0008,9124) SQ 1
#[rustfmt::skip]
pub const DERIVATION_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x9124);
/// Source Image Evidence Sequence (0008,9154) SQ 1
#[rustfmt::skip]
pub const SOURCE_IMAGE_EVIDENCE_SEQUENCE: Tag = Tag(0x0008, 0x9154);
/// Pixel Presentation (0008,9205) CS 1
#[rustfmt::skip]
pub const PIXEL_PRESENTATION: Tag = Tag(0x0008, 0x9205);
/// Volumetric Properties (0008,9206) CS 1
#[rustfmt::skip]
pub const VOLUMETRIC_PROPERTIES: Tag = Tag(0x0008, 0x9206);
/// Volume Based Calculation Technique (0008,9207) CS 1
#[rustfmt::skip]
pub const VOLUME_BASED_CALCULATION_TECHNIQUE: Tag = Tag(0x0008, 0x9207);
/// Complex Image Component (0008,9208) CS 1
#[rustfmt::skip]
pub const COMPLEX_IMAGE_COMPONENT: Tag = Tag(0x0008, 0x9208);
/// Acquisition Contrast (0008,9209) CS 1
#[rustfmt::skip]
pub const ACQUISITION_CONTRAST: Tag = Tag(0x0008, 0x9209);
/// Derivation Code Sequence (0008,9215) SQ 1
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// Referenced Presentation State Sequence (0008,9237) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PRESENTATION_STATE_SEQUENCE: Tag = Tag(0x0008, 0x9237);
/// Referenced Other Plane Sequence (0008,9410) SQ 1
#[rustfmt::skip]
pub const REFERENCED_OTHER_PLANE_SEQUENCE: Tag = Tag(0x0008, 0x9410);
/// Frame Display Sequence (0008,9458) SQ 1
#[rustfmt::skip]
pub const FRAME_DISPLAY_SEQUENCE: Tag = Tag(0x0008, 0x9458);
/// Recommended Display Frame Rate in Float (0008,9459) FL 1
#[rustfmt::skip]
pub const RECOMMENDED_DISPLAY_FRAME_RATE_IN_FLOAT: Tag = Tag(0x0008, 0x9459);
/// Skip Frame Range Flag (0008,9460) CS 1
#[rustfmt::skip]
pub const SKIP_FRAME_RANGE_FLAG: Tag = Tag(0x0008, 0x9460);
/// Patient's Name (0010,0010) PN 1
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// Patient ID (0010,0020) LO 1
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// Issuer of Patient ID (0010,0021) LO 1
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// Type of Patient ID (0010,0022) CS 1
#[rustfmt::skip]
pub const TYPE_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0022);
/// Issuer of Patient ID Qualifiers Sequence (0010,0024) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID_QUALIFIERS_SEQUENCE: Tag = Tag(0x0010, 0x0024);
/// Source Patient Group Identification Sequence (0010,0026) SQ 1
#[rustfmt::skip]
pub const SOURCE_PATIENT_GROUP_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0010, 0x0026);
/// Group of Patients Identification Sequence (0010,0027) SQ 1
#[rustfmt::skip]
pub const GROUP_OF_PATIENTS_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0010, 0x0027);
/// Subject Relative Position in Image (0010,0028) US 3
#[rustfmt::skip]
pub const SUBJECT_RELATIVE_POSITION_IN_IMAGE: Tag = Tag(0x0010, 0x0028);
/// Patient's Birth Date (0010,0030) DA 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// Patient's Birth Time (0010,0032) TM 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// Patient's Birth Date in Alternative Calendar (0010,0033) LO 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE_IN_ALTERNATIVE_CALENDAR: Tag = Tag(0x0010, 0x0033);
/// Patient's Death Date in Alternative Calendar (0010,0034) LO 1
#[rustfmt::skip]
pub const PATIENT_DEATH_DATE_IN_ALTERNATIVE_CALENDAR: Tag = Tag(0x0010, 0x0034);
/// Patient's Alternative Calendar (0010,0035) CS 1
#[rustfmt::skip]
pub const PATIENT_ALTERNATIVE_CALENDAR: Tag = Tag(0x0010, 0x0035);
/// Patient's Sex (0010,0040) CS 1
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// Patient's Insurance Plan Code Sequence (0010,0050) SQ 1
#[rustfmt::skip]
pub const PATIENT_INSURANCE_PLAN_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0050);
/// Patient's Primary Language Code Sequence (0010,0101) SQ 1
#[rustfmt::skip]
pub const PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0101);
/// Patient's Primary Language Modifier Code Sequence (0010,0102) SQ 1
#[rustfmt::skip]
pub const PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0102);
/// Quality Control Subject (0010,0200) CS 1
#[rustfmt::skip]
pub const QUALITY_CONTROL_SUBJECT: Tag = Tag(0x0010, 0x0200);
/// Quality Control Subject Type Code Sequence (0010,0201) SQ 1
#[rustfmt::skip]
pub const QUALITY_CONTROL_SUBJECT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0201);
/// Strain Description (0010,0212) UC 1
#[rustfmt::skip]
pub const STRAIN_DESCRIPTION: Tag = Tag(0x0010, 0x0212);
/// Strain Nomenclature (0010,0213) LO 1
#[rustfmt::skip]
pub const STRAIN_NOMENCLATURE: Tag = Tag(0x0010, 0x0213);
/// Strain Stock Number (0010,0214) LO 1
#[rustfmt::skip]
pub const STRAIN_STOCK_NUMBER: Tag = Tag(0x0010, 0x0214);
/// Strain Source Registry Code Sequence (0010,0215) SQ 1
#[rustfmt::skip]
pub const STRAIN_SOURCE_REGISTRY_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0215);
/// Strain Stock Sequence (0010,0216) SQ 1
#[rustfmt::skip]
pub const STRAIN_STOCK_SEQUENCE: Tag = Tag(0x0010, 0x0216);
/// Strain Source (0010,0217) LO 1
#[rustfmt::skip]
pub const STRAIN_SOURCE: Tag = Tag(0x0010, 0x0217);
/// Strain Additional Information (0010,0218) UT 1
#[rustfmt::skip]
pub const STRAIN_ADDITIONAL_INFORMATION: Tag = Tag(0x0010, 0x0218);
/// Strain Code Sequence (0010,0219) SQ 1
#[rustfmt::skip]
pub const STRAIN_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0219);
/// Genetic Modifications Sequence (0010,0221) SQ 1
#[rustfmt::skip]
pub const GENETIC_MODIFICATIONS_SEQUENCE: Tag = Tag(0x0010, 0x0221);
/// Genetic Modifications Description (0010,0222) UC 1
#[rustfmt::skip]
pub const GENETIC_MODIFICATIONS_DESCRIPTION: Tag = Tag(0x0010, 0x0222);
/// Genetic Modifications Nomenclature (0010,0223) LO 1
#[rustfmt::skip]
pub const GENETIC_MODIFICATIONS_NOMENCLATURE: Tag = Tag(0x0010, 0x0223);
/// Genetic Modifications Code Sequence (0010,0229) SQ 1
#[rustfmt::skip]
pub const GENETIC_MODIFICATIONS_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0229);
/// Other Patient IDs (0010,1000) LO 1-n (retired)
#[rustfmt::skip]
pub const OTHER_PATIENT_I_DS: Tag = Tag(0x0010, 0x1000);
/// Other Patient Names (0010,1001) PN 1-n
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// Other Patient IDs Sequence (0010,1002) SQ 1
#[rustfmt::skip]
pub const OTHER_PATIENT_I_DS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
/// Patient's Birth Name (0010,1005) PN 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_NAME: Tag = Tag(0x0010, 0x1005);
/// Patient's Age (0010,1010) AS 1
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// Patient's Size (0010,1020) DS 1
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// Patient's Size Code Sequence (0010,1021) SQ 1
#[rustfmt::skip]
pub const PATIENT_SIZE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x1021);
/// Patient's Body Mass Index (0010,1022) DS 1
#[rustfmt::skip]
pub const PATIENT_BODY_MASS_INDEX: Tag = Tag(0x0010, 0x1022);
/// Measured AP Dimension (0010,1023) DS 1
#[rustfmt::skip]
pub const MEASURED_AP_DIMENSION: Tag = Tag(0x0010, 0x1023);
/// Measured Lateral Dimension (0010,1024) DS 1
#[rustfmt::skip]
pub const MEASURED_LATERAL_DIMENSION: Tag = Tag(0x0010, 0x1024);
/// Patient's Weight (0010,1030) DS 1
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// Patient's Address (0010,1040) LO 1
#[rustfmt::skip]
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
/// Insurance Plan Identification (0010,1050) LO 1-n (retired)
#[rustfmt::skip]
pub const INSURANCE_PLAN_IDENTIFICATION: Tag = Tag(0x0010, 0x1050);
/// Patient's Mother's Birth Name (0010,1060) PN 1
#[rustfmt::skip]
pub const PATIENT_MOTHER_BIRTH_NAME: Tag = Tag(0x0010, 0x1060);
/// Military Rank (0010,1080) LO 1
#[rustfmt::skip]
pub const MILITARY_RANK: Tag = Tag(0x0010, 0x1080);
/// Branch of Service (0010,1081) LO 1
#[rustfmt::skip]
pub const BRANCH_OF_SERVICE: Tag = Tag(0x0010, 0x1081);
/// Medical Record Locator (0010,1090) LO 1 (retired)
#[rustfmt::skip]
pub const MEDICAL_RECORD_LOCATOR: Tag = Tag(0x0010, 0x1090);
/// Referenced Patient Photo Sequence (0010,1100) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PATIENT_PHOTO_SEQUENCE: Tag = Tag(0x0010, 0x1100);
/// Medical Alerts (0010,2000) LO 1-n
#[rustfmt::skip]
pub const MEDICAL_ALERTS: Tag = Tag(0x0010, 0x2000);
/// Allergies (0010,2110) LO 1-n
#[rustfmt::skip]
pub const ALLERGIES: Tag = Tag(0x0010, 0x2110);
/// Country of Residence (0010,2150) LO 1
#[rustfmt::skip]
pub const COUNTRY_OF_RESIDENCE: Tag = Tag(0x0010, 0x2150);
/// Region of Residence (0010,2152) LO 1
#[rustfmt::skip]
pub const REGION_OF_RESIDENCE: Tag = Tag(0x0010, 0x2152);
/// Patient's Telephone Numbers (0010,2154) SH 1-n
#[rustfmt::skip]
pub const PATIENT_TELEPHONE_NUMBERS: Tag = Tag(0x0010, 0x2154);
/// Patient's Telecom Information (0010,2155) LT 1
#[rustfmt::skip]
pub const PATIENT_TELECOM_INFORMATION: Tag = Tag(0x0010, 0x2155);
/// Ethnic Group (0010,2160) SH 1
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Ethnic Group Code Sequence (0010,2161) SQ 1
#[rustfmt::skip]
pub const ETHNIC_GROUP_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2161);
/// Ethnic Groups (0010,2162) UC 1-n
#[rustfmt::skip]
pub const ETHNIC_GROUPS: Tag = Tag(0x0010, 0x2162);
/// Occupation (0010,2180) SH 1
#[rustfmt::skip]
pub const OCCUPATION: Tag = Tag(0x0010, 0x2180);
/// Smoking Status (0010,21A0) CS 1
#[rustfmt::skip]
pub const SMOKING_STATUS: Tag = Tag(0x0010, 0x21A0);
/// Additional Patient History (0010,21B0) LT 1
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// Pregnancy Status (0010,21C0) US 1
#[rustfmt::skip]
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// Last Menstrual Date (0010,21D0) DA 1
#[rustfmt::skip]
pub const LAST_MENSTRUAL_DATE: Tag = Tag(0x0010, 0x21D0);
/// Patient's Religious Preference (0010,21F0) LO 1
#[rustfmt::skip]
pub const PATIENT_RELIGIOUS_PREFERENCE: Tag = Tag(0x0010, 0x21F0);
/// Patient Species Description (0010,2201) LO 1
#[rustfmt::skip]
pub const PATIENT_SPECIES_DESCRIPTION: Tag = Tag(0x0010, 0x2201);
/// Patient Species Code Sequence (0010,2202) SQ 1
#[rustfmt::skip]
pub const PATIENT_SPECIES_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2202);
/// Patient's Sex Neutered (0010,2203) CS 1
#[rustfmt::skip]
pub const PATIENT_SEX_NEUTERED: Tag = Tag(0x0010, 0x2203);
/// Patient Breed Description (0010,2292) LO 1
#[rustfmt::skip]
pub const PATIENT_BREED_DESCRIPTION: Tag = Tag(0x0010, 0x2292);
/// Patient Breed Code Sequence (0010,2293) SQ 1
#[rustfmt::skip]
pub const PATIENT_BREED_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2293);
/// Breed Registration Sequence (0010,2294) SQ 1
#[rustfmt::skip]
pub const BREED_REGISTRATION_SEQUENCE: Tag = Tag(0x0010, 0x2294);
/// Breed Registration Number (0010,2295) LO 1
#[rustfmt::skip]
pub const BREED_REGISTRATION_NUMBER: Tag = Tag(0x0010, 0x2295);
/// Breed Registry Code Sequence (0010,2296) SQ 1
#[rustfmt::skip]
pub const BREED_REGISTRY_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2296);
/// Responsible Person (0010,2297) PN 1
#[rustfmt::skip]
pub const RESPONSIBLE_PERSON: Tag = Tag(0x0010, 0x2297);
/// Responsible Person Role (0010,2298) CS 1
#[rustfmt::skip]
pub const RESPONSIBLE_PERSON_ROLE: Tag = Tag(0x0010, 0x2298);
/// Responsible Organization (0010,2299) LO 1
#[rustfmt::skip]
pub const RESPONSIBLE_ORGANIZATION: Tag = Tag(0x0010, 0x2299);
/// Patient Comments (0010,4000) LT 1
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// Examined Body Thickness (0010,9431) FL 1
#[rustfmt::skip]
pub const EXAMINED_BODY_THICKNESS: Tag = Tag(0x0010, 0x9431);
/// Clinical Trial Sponsor Name (0012,0010) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SPONSOR_NAME: Tag = Tag(0x0012, 0x0010);
/// Clinical Trial Protocol ID (0012,0020) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_ID: Tag = Tag(0x0012, 0x0020);
/// Clinical Trial Protocol Name (0012,0021) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_NAME: Tag = Tag(0x0012, 0x0021);
/// Clinical Trial Site ID (0012,0030) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SITE_ID: Tag = Tag(0x0012, 0x0030);
/// Clinical Trial Site Name (0012,0031) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SITE_NAME: Tag = Tag(0x0012, 0x0031);
/// Clinical Trial Subject ID (0012,0040) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SUBJECT_ID: Tag = Tag(0x0012, 0x0040);
/// Clinical Trial Subject Reading ID (0012,0042) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SUBJECT_READING_ID: Tag = Tag(0x0012, 0x0042);
/// Clinical Trial Time Point ID (0012,0050) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_TIME_POINT_ID: Tag = Tag(0x0012, 0x0050);
/// Clinical Trial Time Point Description (0012,0051) ST 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_TIME_POINT_DESCRIPTION: Tag = Tag(0x0012, 0x0051);
/// Longitudinal Temporal Offset from Event (0012,0052) FD 1
#[rustfmt::skip]
pub const LONGITUDINAL_TEMPORAL_OFFSET_FROM_EVENT: Tag = Tag(0x0012, 0x0052);
/// Longitudinal Temporal Event Type (0012,0053) CS 1
#[rustfmt::skip]
pub const LONGITUDINAL_TEMPORAL_EVENT_TYPE: Tag = Tag(0x0012, 0x0053);
/// Clinical Trial Coordinating Center Name (0012,0060) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_COORDINATING_CENTER_NAME: Tag = Tag(0x0012, 0x0060);
/// Patient Identity Removed (0012,0062) CS 1
#[rustfmt::skip]
pub const PATIENT_IDENTITY_REMOVED: Tag = Tag(0x0012, 0x0062);
/// De-identification Method (0012,0063) LO 1-n
#[rustfmt::skip]
pub const DEIDENTIFICATION_METHOD: Tag = Tag(0x0012, 0x0063);
/// De-identification Method Code Sequence (0012,0064) SQ 1
#[rustfmt::skip]
pub const DEIDENTIFICATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0012, 0x0064);
/// Clinical Trial Series ID (0012,0071) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SERIES_ID: Tag = Tag(0x0012, 0x0071);
/// Clinical Trial Series Description (0012,0072) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SERIES_DESCRIPTION: Tag = Tag(0x0012, 0x0072);
/// Clinical Trial Protocol Ethics Committee Name (0012,0081) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_NAME: Tag = Tag(0x0012, 0x0081);
/// Clinical Trial Protocol Ethics Committee Approval Number (0012,0082) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_APPROVAL_NUMBER: Tag = Tag(0x0012, 0x0082);
/// Consent for Clinical Trial Use Sequence (0012,0083) SQ 1
#[rustfmt::skip]
pub const CONSENT_FOR_CLINICAL_TRIAL_USE_SEQUENCE: Tag = Tag(0x0012, 0x0083);
/// Distribution Type (0012,0084) CS 1
#[rustfmt::skip]
pub const DISTRIBUTION_TYPE: Tag = Tag(0x0012, 0x0084);
/// Consent for Distribution Flag (0012,0085) CS 1
#[rustfmt::skip]
pub const CONSENT_FOR_DISTRIBUTION_FLAG: Tag = Tag(0x0012, 0x0085);
/// Ethics Committee Approval Effectiveness Start Date (0012,0086) DA 1
#[rustfmt::skip]
pub const ETHICS_COMMITTEE_APPROVAL_EFFECTIVENESS_START_DATE: Tag = Tag(0x0012, 0x0086);
/// Ethics Committee Approval Effectiveness End Date (0012,0087) DA 1
#[rustfmt::skip]
pub const ETHICS_COMMITTEE_APPROVAL_EFFECTIVENESS_END_DATE: Tag = Tag(0x0012, 0x0087);
/// Contrast/Bolus Agent (0018,0010) LO 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// Contrast/Bolus Agent Sequence (0018,0012) SQ 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT_SEQUENCE: Tag = Tag(0x0018, 0x0012);
/// Contrast/Bolus T1 Relaxivity (0018,0013) FL 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_T1RELAXIVITY: Tag = Tag(0x0018, 0x0013);
/// Contrast/Bolus Administration Route Sequence (0018,0014) SQ 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_ADMINISTRATION_ROUTE_SEQUENCE: Tag = Tag(0x0018, 0x0014);
/// Body Part Examined (0018,0015) CS 1
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// Scanning Sequence (0018,0020) CS 1-n
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// Sequence Variant (0018,0021) CS 1-n
#[rustfmt::skip]
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// Scan Options (0018,0022) CS 1-n
#[rustfmt::skip]
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MR Acquisition Type (0018,0023) CS 1
#[rustfmt::skip]
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// Sequence Name (0018,0024) SH 1
#[rustfmt::skip]
pub const SEQUENCE_NAME: Tag = Tag(0x0018, 0x0024);
/// Angio Flag (0018,0025) CS 1
#[rustfmt::skip]
pub const ANGIO_FLAG: Tag = Tag(0x0018, 0x0025);
/// Intervention Drug Information Sequence (0018,0026) SQ 1
#[rustfmt::skip]
pub const INTERVENTION_DRUG_INFORMATION_SEQUENCE: Tag = Tag(0x0018, 0x0026);
/// Intervention Drug Stop Time (0018,0027) TM 1
#[rustfmt::skip]
pub const INTERVENTION_DRUG_STOP_TIME: Tag = Tag(0x0018, 0x0027);
/// Intervention Drug Dose (0018,0028) DS 1
#[rustfmt::skip]
pub const INTERVENTION_DRUG_DOSE: Tag = Tag(0x0018, 0x0028);
/// Intervention Drug Code Sequence (0018,0029) SQ 1
#[rustfmt::skip]
pub const INTERVENTION_DRUG_CODE_SEQUENCE: Tag = Tag(0x0018, 0x0029);
/// Additional Drug Sequence (0018,002A) SQ 1
#[rustfmt::skip]
pub const ADDITIONAL_DRUG_SEQUENCE: Tag = Tag(0x0018, 0x002A);
/// Radionuclide (0018,0030) LO 1-n (retired)
#[rustfmt::skip]
pub const RADIONUCLIDE: Tag = Tag(0x0018, 0x0030);
/// Radiopharmaceutical (0018,0031) LO 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL: Tag = Tag(0x0018, 0x0031);
/// Energy Window Centerline (0018,0032) DS 1 (retired)
#[rustfmt::skip]
pub const ENERGY_WINDOW_CENTERLINE: Tag = Tag(0x0018, 0x0032);
/// Energy Window Total Width (0018,0033) DS 1-n (retired)
#[rustfmt::skip]
pub const ENERGY_WINDOW_TOTAL_WIDTH: Tag = Tag(0x0018, 0x0033);
/// Intervention Drug Name (0018,0034) LO 1
#[rustfmt::skip]
pub const INTERVENTION_DRUG_NAME: Tag = Tag(0x0018, 0x0034);
/// Intervention Drug Start Time (0018,0035) TM 1
#[rustfmt::skip]
pub const INTERVENTION_DRUG_START_TIME: Tag = Tag(0x0018, 0x0035);
/// Intervention Sequence (0018,0036) SQ 1
#[rustfmt::skip]
pub const INTERVENTION_SEQUENCE: Tag = Tag(0x0018, 0x0036);
/// Therapy Type (0018,0037) CS 1 (retired)
#[rustfmt::skip]
pub const THERAPY_TYPE: Tag = Tag(0x0018, 0x0037);
/// Intervention Status (0018,0038) CS 1
#[rustfmt::skip]
pub const INTERVENTION_STATUS: Tag = Tag(0x0018, 0x0038);
/// Therapy Description (0018,0039) CS 1 (retired)
#[rustfmt::skip]
pub const THERAPY_DESCRIPTION: Tag = Tag(0x0018, 0x0039);
/// Intervention Description (0018,003A) ST 1
#[rustfmt::skip]
pub const INTERVENTION_DESCRIPTION: Tag = Tag(0x0018, 0x003A);
/// Cine Rate (0018,0040) IS 1
#[rustfmt::skip]
pub const CINE_RATE: Tag = Tag(0x0018, 0x0040);
/// Initial Cine Run State (0018,0042) CS 1
#[rustfmt::skip]
pub const INITIAL_CINE_RUN_STATE: Tag = Tag(0x0018, 0x0042);
/// Slice Thickness (0018,0050) DS 1
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS 1
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// Counts Accumulated (0018,0070) IS 1
#[rustfmt::skip]
pub const COUNTS_ACCUMULATED: Tag = Tag(0x0018, 0x0070);
/// Acquisition Termination Condition (0018,0071) CS 1
#[rustfmt::skip]
pub const ACQUISITION_TERMINATION_CONDITION: Tag = Tag(0x0018, 0x0071);
/// Effective Duration (0018,0072) DS 1
#[rustfmt::skip]
pub const EFFECTIVE_DURATION: Tag = Tag(0x0018, 0x0072);
/// Acquisition Start Condition (0018,0073) CS 1
#[rustfmt::skip]
pub const ACQUISITION_START_CONDITION: Tag = Tag(0x0018, 0x0073);
/// Acquisition Start Condition Data (0018,0074) IS 1
#[rustfmt::skip]
pub const ACQUISITION_START_CONDITION_DATA: Tag = Tag(0x0018, 0x0074);
/// Acquisition Termination Condition Data (0018,0075) IS 1
#[rustfmt::skip]
pub const ACQUISITION_TERMINATION_CONDITION_DATA: Tag = Tag(0x0018, 0x0075);
/// Repetition Time (0018,0080) DS 1
#[rustfmt::skip]
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// Echo Time (0018,0081) DS 1
#[rustfmt::skip]
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// Inversion Time (0018,0082) DS 1
#[rustfmt::skip]
pub const INVERSION_TIME: Tag = Tag(0x0018, 0x0082);
/// Number of Averages (0018,0083) DS 1
#[rustfmt::skip]
pub const NUMBER_OF_AVERAGES: Tag = Tag(0x0018, 0x0083);
/// Imaging Frequency (0018,0084) DS 1
#[rustfmt::skip]
pub const IMAGING_FREQUENCY: Tag = Tag(0x0018, 0x0084);
/// Imaged Nucleus (0018,0085) SH 1
#[rustfmt::skip]
pub const IMAGED_NUCLEUS: Tag = Tag(0x0018, 0x0085);
/// Echo Number(s) (0018,0086) IS 1-n
#[rustfmt::skip]
pub const ECHO_NUMBERS: Tag = Tag(0x0018, 0x0086);
/// Magnetic Field Strength (0018,0087) DS 1
#[rustfmt::skip]
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// Spacing Between Slices (0018,0088) DS 1
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// Number of Phase Encoding Steps (0018,0089) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_PHASE_ENCODING_STEPS: Tag = Tag(0x0018, 0x0089);
/// Data Collection Diameter (0018,0090) DS 1
#[rustfmt::skip]
pub const DATA_COLLECTION_DIAMETER: Tag = Tag(0x0018, 0x0090);
/// Echo Train Length (0018,0091) IS 1
#[rustfmt::skip]
pub const ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x0091);
/// Percent Sampling (0018,0093) DS 1
#[rustfmt::skip]
pub const PERCENT_SAMPLING: Tag = Tag(0x0018, 0x0093);
/// Percent Phase Field of View (0018,0094) DS 1
#[rustfmt::skip]
pub const PERCENT_PHASE_FIELD_OF_VIEW: Tag = Tag(0x0018, 0x0094);
/// Pixel Bandwidth (0018,0095) DS 1
#[rustfmt::skip]
pub const PIXEL_BANDWIDTH: Tag = Tag(0x0018, 0x0095);
/// Device Serial Number (0018,1000) LO 1
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// Device UID (0018,1002) UI 1
#[rustfmt::skip]
pub const DEVICE_UID: Tag = Tag(0x0018, 0x1002);
/// Device ID (0018,1003) LO 1
#[rustfmt::skip]
pub const DEVICE_ID: Tag = Tag(0x0018, 0x1003);
/// Plate ID (0018,1004) LO 1
#[rustfmt::skip]
pub const PLATE_ID: Tag = Tag(0x0018, 0x1004);
/// Generator ID (0018,1005) LO 1
#[rustfmt::skip]
pub const GENERATOR_ID: Tag = Tag(0x0018, 0x1005);
/// Grid ID (0018,1006) LO 1
#[rustfmt::skip]
pub const GRID_ID: Tag = Tag(0x0018, 0x1006);
/// Cassette ID (0018,1007) LO 1
#[rustfmt::skip]
pub const CASSETTE_ID: Tag = Tag(0x0018, 0x1007);
/// Gantry ID (0018,1008) LO 1
#[rustfmt::skip]
pub const GANTRY_ID: Tag = Tag(0x0018, 0x1008);
/// Unique Device Identifier (0018,1009) UT 1
#[rustfmt::skip]
pub const UNIQUE_DEVICE_IDENTIFIER: Tag = Tag(0x0018, 0x1009);
/// UDI Sequence (0018,100A) SQ 1
#[rustfmt::skip]
pub const UDI_SEQUENCE: Tag = Tag(0x0018, 0x100A);
/// Manufacturer's Device Class UID (0018,100B) UI 1-n
#[rustfmt::skip]
pub const MANUFACTURER_DEVICE_CLASS_UID: Tag = Tag(0x0018, 0x100B);
/// Secondary Capture Device ID (0018,1010) LO 1
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_ID: Tag = Tag(0x0018, 0x1010);
/// Hardcopy Creation Device ID (0018,1011) LO 1 (retired)
#[rustfmt::skip]
pub const HARDCOPY_CREATION_DEVICE_ID: Tag = Tag(0x0018, 0x1011);
/// Date of Secondary Capture (0018,1012) DA 1
#[rustfmt::skip]
pub const DATE_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1012);
/// Time of Secondary Capture (0018,1014) TM 1
#[rustfmt::skip]
pub const TIME_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1014);
/// Secondary Capture Device Manufacturer (0018,1016) LO 1
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER: Tag = Tag(0x0018, 0x1016);
/// Hardcopy Device Manufacturer (0018,1017) LO 1 (retired)
#[rustfmt::skip]
pub const HARDCOPY_DEVICE_MANUFACTURER: Tag = Tag(0x0018, 0x1017);
/// Secondary Capture Device Manufacturer's Model Name (0018,1018) LO 1
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER_MODEL_NAME: Tag = Tag(0x0018, 0x1018);
/// Secondary Capture Device Software Versions (0018,1019) LO 1-n
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1019);
/// Hardcopy Device Software Version (0018,101A) LO 1-n (retired)
#[rustfmt::skip]
pub const HARDCOPY_DEVICE_SOFTWARE_VERSION: Tag = Tag(0x0018, 0x101A);
/// Hardcopy Device Manufacturer's Model Name (0018,101B) LO 1 (retired)
#[rustfmt::skip]
pub const HARDCOPY_DEVICE_MANUFACTURER_MODEL_NAME: Tag = Tag(0x0018, 0x101B);
/// Software Versions (0018,1020) LO 1-n
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// Video Image Format Acquired (0018,1022) SH 1
#[rustfmt::skip]
pub const VIDEO_IMAGE_FORMAT_ACQUIRED: Tag = Tag(0x0018, 0x1022);
/// Digital Image Format Acquired (0018,1023) LO 1
#[rustfmt::skip]
pub const DIGITAL_IMAGE_FORMAT_ACQUIRED: Tag = Tag(0x0018, 0x1023);
/// Protocol Name (0018,1030) LO 1
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// Contrast/Bolus Route (0018,1040) LO 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_ROUTE: Tag = Tag(0x0018, 0x1040);
/// Contrast/Bolus Volume (0018,1041) DS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_VOLUME: Tag = Tag(0x0018, 0x1041);
/// Contrast/Bolus Start Time (0018,1042) TM 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_START_TIME: Tag = Tag(0x0018, 0x1042);
/// Contrast/Bolus Stop Time (0018,1043) TM 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_STOP_TIME: Tag = Tag(0x0018, 0x1043);
/// Contrast/Bolus Total Dose (0018,1044) DS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_TOTAL_DOSE: Tag = Tag(0x0018, 0x1044);
/// Syringe Counts (0018,1045) IS 1
#[rustfmt::skip]
pub const SYRINGE_COUNTS: Tag = Tag(0x0018, 0x1045);
/// Contrast Flow Rate (0018,1046) DS 1-n
#[rustfmt::skip]
pub const CONTRAST_FLOW_RATE: Tag = Tag(0x0018, 0x1046);
/// Contrast Flow Duration (0018,1047) DS 1-n
#[rustfmt::skip]
pub const CONTRAST_FLOW_DURATION: Tag = Tag(0x0018, 0x1047);
/// Contrast/Bolus Ingredient (0018,1048) CS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_INGREDIENT: Tag = Tag(0x0018, 0x1048);
/// Contrast/Bolus Ingredient Concentration (0018,1049) DS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_INGREDIENT_CONCENTRATION: Tag = Tag(0x0018, 0x1049);
/// Spatial Resolution (0018,1050) DS 1
#[rustfmt::skip]
pub const SPATIAL_RESOLUTION: Tag = Tag(0x0018, 0x1050);
/// Trigger Time (0018,1060) DS 1
#[rustfmt::skip]
pub const TRIGGER_TIME: Tag = Tag(0x0018, 0x1060);
/// Trigger Source or Type (0018,1061) LO 1
#[rustfmt::skip]
pub const TRIGGER_SOURCE_OR_TYPE: Tag = Tag(0x0018, 0x1061);
/// Nominal Interval (0018,1062) IS 1
#[rustfmt::skip]
pub const NOMINAL_INTERVAL: Tag = Tag(0x0018, 0x1062);
/// Frame Time (0018,1063) DS 1
#[rustfmt::skip]
pub const FRAME_TIME: Tag = Tag(0x0018, 0x1063);
/// Cardiac Framing Type (0018,1064) LO 1
#[rustfmt::skip]
pub const CARDIAC_FRAMING_TYPE: Tag = Tag(0x0018, 0x1064);
/// Frame Time Vector (0018,1065) DS 1-n
#[rustfmt::skip]
pub const FRAME_TIME_VECTOR: Tag = Tag(0x0018, 0x1065);
/// Frame Delay (0018,1066) DS 1
#[rustfmt::skip]
pub const FRAME_DELAY: Tag = Tag(0x0018, 0x1066);
/// Image Trigger Delay (0018,1067) DS 1
#[rustfmt::skip]
pub const IMAGE_TRIGGER_DELAY: Tag = Tag(0x0018, 0x1067);
/// Multiplex Group Time Offset (0018,1068) DS 1
#[rustfmt::skip]
pub const MULTIPLEX_GROUP_TIME_OFFSET: Tag = Tag(0x0018, 0x1068);
/// Trigger Time Offset (0018,1069) DS 1
#[rustfmt::skip]
pub const TRIGGER_TIME_OFFSET: Tag = Tag(0x0018, 0x1069);
/// Synchronization Trigger (0018,106A) CS 1
#[rustfmt::skip]
pub const SYNCHRONIZATION_TRIGGER: Tag = Tag(0x0018, 0x106A);
/// Synchronization Channel (0018,106C) US 2
#[rustfmt::skip]
pub const SYNCHRONIZATION_CHANNEL: Tag = Tag(0x0018, 0x106C);
/// Trigger Sample Position (0018,106E) UL 1
#[rustfmt::skip]
pub const TRIGGER_SAMPLE_POSITION: Tag = Tag(0x0018, 0x106E);
/// Radiopharmaceutical Route (0018,1070) LO 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_ROUTE: Tag = Tag(0x0018, 0x1070);
/// Radiopharmaceutical Volume (0018,1071) DS 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_VOLUME: Tag = Tag(0x0018, 0x1071);
/// Radiopharmaceutical Start Time (0018,1072) TM 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_START_TIME: Tag = Tag(0x0018, 0x1072);
/// Radiopharmaceutical Stop Time (0018,1073) TM 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_STOP_TIME: Tag = Tag(0x0018, 0x1073);
/// Radionuclide Total Dose (0018,1074) DS 1
#[rustfmt::skip]
pub const RADIONUCLIDE_TOTAL_DOSE: Tag = Tag(0x0018, 0x1074);
/// Radionuclide Half Life (0018,1075) DS 1
#[rustfmt::skip]
pub const RADIONUCLIDE_HALF_LIFE: Tag = Tag(0x0018, 0x1075);
/// Radionuclide Positron Fraction (0018,1076) DS 1
#[rustfmt::skip]
pub const RADIONUCLIDE_POSITRON_FRACTION: Tag = Tag(0x0018, 0x1076);
/// Radiopharmaceutical Specific Activity (0018,1077) DS 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_SPECIFIC_ACTIVITY: Tag = Tag(0x0018, 0x1077);
/// Radiopharmaceutical Start DateTime (0018,1078) DT 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_START_DATE_TIME: Tag = Tag(0x0018, 0x1078);
/// Radiopharmaceutical Stop DateTime (0018,1079) DT 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_STOP_DATE_TIME: Tag = Tag(0x0018, 0x1079);
/// Beat Rejection Flag (0018,1080) CS 1
#[rustfmt::skip]
pub const BEAT_REJECTION_FLAG: Tag = Tag(0x0018, 0x1080);
/// Low R-R Value (0018,1081) IS 1
#[rustfmt::skip]
pub const LOW_RR_VALUE: Tag = Tag(0x0018, 0x1081);
/// High R-R Value (0018,1082) IS 1
#[rustfmt::skip]
pub const HIGH_RR_VALUE: Tag = Tag(0x0018, 0x1082);
/// Intervals Acquired (0018,1083) IS 1
#[rustfmt::skip]
pub const INTERVALS_ACQUIRED: Tag = Tag(0x0018, 0x1083);
/// Intervals Rejected (0018,1084) IS 1
#[rustfmt::skip]
pub const INTERVALS_REJECTED: Tag = Tag(0x0018, 0x1084);
/// PVC Rejection (0018,1085) LO 1
#[rustfmt::skip]
pub const PVC_REJECTION: Tag = Tag(0x0018, 0x1085);
/// Skip Beats (0018,1086) IS 1
#[rustfmt::skip]
pub const SKIP_BEATS: Tag = Tag(0x0018, 0x1086);
/// Heart Rate (0018,1088) IS 1
#[rustfmt::skip]
pub const HEART_RATE: Tag = Tag(0x0018, 0x1088);
/// Trigger Window (0018,1094) IS 1
#[rustfmt::skip]
pub const TRIGGER_WINDOW: Tag = Tag(0x0018, 0x1094);
/// Reconstruction Diameter (0018,1100) DS 1
#[rustfmt::skip]
pub const RECONSTRUCTION_DIAMETER: Tag = Tag(0x0018, 0x1100);
/// Distance Source to Detector (0018,1110) DS 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_DETECTOR: Tag = Tag(0x0018, 0x1110);
/// Distance Source to Patient (0018,1111) DS 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_PATIENT: Tag = Tag(0x0018, 0x1111);
/// Estimated Radiographic Magnification Factor (0018,1114) DS 1
#[rustfmt::skip]
pub const ESTIMATED_RADIOGRAPHIC_MAGNIFICATION_FACTOR: Tag = Tag(0x0018, 0x1114);
/// Gantry/Detector Tilt (0018,1120) DS 1
#[rustfmt::skip]
pub const GANTRY_DETECTOR_TILT: Tag = Tag(0x0018, 0x1120);
/// Gantry/Detector Slew (0018,1121) DS 1
#[rustfmt::skip]
pub const GANTRY_DETECTOR_SLEW: Tag = Tag(0x0018, 0x1121);
/// Table Height (0018,1130) DS 1
#[rustfmt::skip]
pub const TABLE_HEIGHT: Tag = Tag(0x0018, 0x1130);
/// Table Traverse (0018,1131) DS 1
#[rustfmt::skip]
pub const TABLE_TRAVERSE: Tag = Tag(0x0018, 0x1131);
/// Table Motion (0018,1134) CS 1
#[rustfmt::skip]
pub const TABLE_MOTION: Tag = Tag(0x0018, 0x1134);
/// Table Vertical Increment (0018,1135) DS 1-n
#[rustfmt::skip]
pub const TABLE_VERTICAL_INCREMENT: Tag = Tag(0x0018, 0x1135);
/// Table Lateral Increment (0018,1136) DS 1-n
#[rustfmt::skip]
pub const TABLE_LATERAL_INCREMENT: Tag = Tag(0x0018, 0x1136);
/// Table Longitudinal Increment (0018,1137) DS 1-n
#[rustfmt::skip]
pub const TABLE_LONGITUDINAL_INCREMENT: Tag = Tag(0x0018, 0x1137);
/// Table Angle (0018,1138) DS 1
#[rustfmt::skip]
pub const TABLE_ANGLE: Tag = Tag(0x0018, 0x1138);
/// Table Type (0018,113A) CS 1
#[rustfmt::skip]
pub const TABLE_TYPE: Tag = Tag(0x0018, 0x113A);
/// Rotation Direction (0018,1140) CS 1
#[rustfmt::skip]
pub const ROTATION_DIRECTION: Tag = Tag(0x0018, 0x1140);
/// Radial Position (0018,1142) DS 1-n
#[rustfmt::skip]
pub const RADIAL_POSITION: Tag = Tag(0x0018, 0x1142);
/// Scan Arc (0018,1143) DS 1
#[rustfmt::skip]
pub const SCAN_ARC: Tag = Tag(0x0018, 0x1143);
/// Angular Step (0018,1144) DS 1
#[rustfmt::skip]
pub const ANGULAR_STEP: Tag = Tag(0x0018, 0x1144);
/// Center of Rotation Offset (0018,1145) DS 1
#[rustfmt::skip]
pub const CENTER_OF_ROTATION_OFFSET: Tag = Tag(0x0018, 0x1145);
/// Rotation Offset (0018,1146) DS 1-n (retired)
#[rustfmt::skip]
pub const ROTATION_OFFSET: Tag = Tag(0x0018, 0x1146);
/// Field of View Shape (0018,1147) CS 1
#[rustfmt::skip]
pub const FIELD_OF_VIEW_SHAPE: Tag = Tag(0x0018, 0x1147);
/// Field of View Dimension(s) (0018,1149) IS 1-2
#[rustfmt::skip]
pub const FIELD_OF_VIEW_DIMENSIONS: Tag = Tag(0x0018, 0x1149);
/// Exposure Time (0018,1150) IS 1
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// X-Ray Tube Current (0018,1151) IS 1
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152) IS 1
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// Exposure in µAs (0018,1153) IS 1
#[rustfmt::skip]
pub const EXPOSURE_INU_AS: Tag = Tag(0x0018, 0x1153);
/// Average Pulse Width (0018,1154) DS 1
#[rustfmt::skip]
pub const AVERAGE_PULSE_WIDTH: Tag = Tag(0x0018, 0x1154);
/// Radiation Setting (0018,1155) CS 1
#[rustfmt::skip]
pub const RADIATION_SETTING: Tag = Tag(0x0018, 0x1155);
/// Rectification Type (0018,1156) CS 1
#[rustfmt::skip]
pub const RECTIFICATION_TYPE: Tag = Tag(0x0018, 0x1156);
/// Radiation Mode (0018,115A) CS 1
#[rustfmt::skip]
pub const RADIATION_MODE: Tag = Tag(0x0018, 0x115A);
/// Image and Fluoroscopy Area Dose Product (0018,115E) DS 1
#[rustfmt::skip]
pub const IMAGE_AND_FLUOROSCOPY_AREA_DOSE_PRODUCT: Tag = Tag(0x0018, 0x115E);
/// Filter Type (0018,1160) SH 1
#[rustfmt::skip]
pub const FILTER_TYPE: Tag = Tag(0x0018, 0x1160);
/// Filter Beam Path Length Minimum (0018,1161) FL 1-n
#[rustfmt::skip]
pub const FILTER_BEAM_PATH_LENGTH_MINIMUM: Tag = Tag(0x0018, 0x1161);
/// Intensifier Size (0018,1162) DS 1
#[rustfmt::skip]
pub const INTENSIFIER_SIZE: Tag = Tag(0x0018, 0x1162);
/// Imager Pixel Spacing (0018,1164) DS 2
#[rustfmt::skip]
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// Grid (0018,1166) CS 1-n
#[rustfmt::skip]
pub const GRID: Tag = Tag(0x0018, 0x1166);
/// Generator Power (0018,1170) IS 1
#[rustfmt::skip]
pub const GENERATOR_POWER: Tag = Tag(0x0018, 0x1170);
/// Collimator/grid Name (0018,1180) SH 1
#[rustfmt::skip]
pub const COLLIMATOR_GRID_NAME: Tag = Tag(0x0018, 0x1180);
/// Collimator Type (0018,1181) CS 1
#[rustfmt::skip]
pub const COLLIMATOR_TYPE: Tag = Tag(0x0018, 0x1181);
/// Focal Distance (0018,1182) IS 1-2
#[rustfmt::skip]
pub const FOCAL_DISTANCE: Tag = Tag(0x0018, 0x1182);
/// X Focus Center (0018,1183) DS 1-2
#[rustfmt::skip]
pub const X_FOCUS_CENTER: Tag = Tag(0x0018, 0x1183);
/// Y Focus Center (0018,1184) DS 1-2
#[rustfmt::skip]
pub const Y_FOCUS_CENTER: Tag = Tag(0x0018, 0x1184);
/// Focal Spot(s) (0018,1190) DS 1-n
#[rustfmt::skip]
pub const FOCAL_SPOTS: Tag = Tag(0x0018, 0x1190);
/// Anode Target Material (0018,1191) CS 1
#[rustfmt::skip]
pub const ANODE_TARGET_MATERIAL: Tag = Tag(0x0018, 0x1191);
/// Body Part Thickness (0018,11A0) DS 1
#[rustfmt::skip]
pub const BODY_PART_THICKNESS: Tag = Tag(0x0018, 0x11A0);
/// Compression Force (0018,11A2) DS 1
#[rustfmt::skip]
pub const COMPRESSION_FORCE: Tag = Tag(0x0018, 0x11A2);
/// Compression Pressure (0018,11A3) DS 1
#[rustfmt::skip]
pub const COMPRESSION_PRESSURE: Tag = Tag(0x0018, 0x11A3);
/// Paddle Description (0018,11A4) LO 1
#[rustfmt::skip]
pub const PADDLE_DESCRIPTION: Tag = Tag(0x0018, 0x11A4);
/// Compression Contact Area (0018,11A5) DS 1
#[rustfmt::skip]
pub const COMPRESSION_CONTACT_AREA: Tag = Tag(0x0018, 0x11A5);
/// Date of Last Calibration (0018,1200) DA 1-n
#[rustfmt::skip]
pub const DATE_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1200);
/// Time of Last Calibration (0018,1201) TM 1-n
#[rustfmt::skip]
pub const TIME_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1201);
/// DateTime of Last Calibration (0018,1202) DT 1
#[rustfmt::skip]
pub const DATE_TIME_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1202);
/// Convolution Kernel (0018,1210) SH 1-n
#[rustfmt::skip]
pub const CONVOLUTION_KERNEL: Tag = Tag(0x0018, 0x1210);
/// Receive Coil Name (0018,1250) SH 1
#[rustfmt::skip]
pub const RECEIVE_COIL_NAME: Tag = Tag(0x0018, 0x1250);
/// Transmit Coil Name (0018,1251) SH 1
#[rustfmt::skip]
pub const TRANSMIT_COIL_NAME: Tag = Tag(0x0018, 0x1251);
/// Plate Type (0018,1260) SH 1
#[rustfmt::skip]
pub const PLATE_TYPE: Tag = Tag(0x0018, 0x1260);
/// Phosphor Type (0018,1261) LO 1
#[rustfmt::skip]
pub const PHOSPHOR_TYPE: Tag = Tag(0x0018, 0x1261);
/// Water Equivalent Diameter (0018,1271) FD 1
#[rustfmt::skip]
pub const WATER_EQUIVALENT_DIAMETER: Tag = Tag(0x0018, 0x1271);
/// Water Equivalent Diameter Calculation Method Code Sequence (0018,1272) SQ 1
#[rustfmt::skip]
pub const WATER_EQUIVALENT_DIAMETER_CALCULATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0018, 0x1272);
/// Scan Velocity (0018,1300) DS 1
#[rustfmt::skip]
pub const SCAN_VELOCITY: Tag = Tag(0x0018, 0x1300);
/// Whole Body Technique (0018,1301) CS 1-n
#[rustfmt::skip]
pub const WHOLE_BODY_TECHNIQUE: Tag = Tag(0x0018, 0x1301);
/// Scan Length (0018,1302) IS 1
#[rustfmt::skip]
pub const SCAN_LENGTH: Tag = Tag(0x0018, 0x1302);
/// Acquisition Matrix (0018,1310) US 4
#[rustfmt::skip]
pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);
/// In-plane Phase Encoding Direction (0018,1312) CS 1
#[rustfmt::skip]
pub const IN_PLANE_PHASE_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x1312);
/// Flip Angle (0018,1314) DS 1
#[rustfmt::skip]
pub const FLIP_ANGLE: Tag = Tag(0x0018, 0x1314);
/// Variable Flip Angle Flag (0018,1315) CS 1
#[rustfmt::skip]
pub const VARIABLE_FLIP_ANGLE_FLAG: Tag = Tag(0x0018, 0x1315);
/// SAR (0018,1316) DS 1
#[rustfmt::skip]
pub const SAR: Tag = Tag(0x0018, 0x1316);
/// dB/dt (0018,1318) DS 1
#[rustfmt::skip]
pub const D_BDT: Tag = Tag(0x0018, 0x1318);
/// B1rms (0018,1320) FL 1
#[rustfmt::skip]
pub const B1RMS: Tag = Tag(0x0018, 0x1320);
/// Acquisition Device Processing Description (0018,1400) LO 1
#[rustfmt::skip]
pub const ACQUISITION_DEVICE_PROCESSING_DESCRIPTION: Tag = Tag(0x0018, 0x1400);
/// Acquisition Device Processing Code (0018,1401) LO 1
#[rustfmt::skip]
pub const ACQUISITION_DEVICE_PROCESSING_CODE: Tag = Tag(0x0018, 0x1401);
/// Cassette Orientation (0018,1402) CS 1
#[rustfmt::skip]
pub const CASSETTE_ORIENTATION: Tag = Tag(0x0018, 0x1402);
/// Cassette Size (0018,1403) CS 1
#[rustfmt::skip]
pub const CASSETTE_SIZE: Tag = Tag(0x0018, 0x1403);
/// Exposures on Plate (0018,1404) US 1
#[rustfmt::skip]
pub const EXPOSURES_ON_PLATE: Tag = Tag(0x0018, 0x1404);
/// Relative X-Ray Exposure (0018,1405) IS 1
#[rustfmt::skip]
pub const RELATIVE_X_RAY_EXPOSURE: Tag = Tag(0x0018, 0x1405);
/// Exposure Index (0018,1411) DS 1
#[rustfmt::skip]
pub const EXPOSURE_INDEX: Tag = Tag(0x0018, 0x1411);
/// Target Exposure Index (0018,1412) DS 1
#[rustfmt::skip]
pub const TARGET_EXPOSURE_INDEX: Tag = Tag(0x0018, 0x1412);
/// Deviation Index (0018,1413) DS 1
#[rustfmt::skip]
pub const DEVIATION_INDEX: Tag = Tag(0x0018, 0x1413);
/// Column Angulation (0018,1450) DS 1
#[rustfmt::skip]
pub const COLUMN_ANGULATION: Tag = Tag(0x0018, 0x1450);
/// Tomo Layer Height (0018,1460) DS 1
#[rustfmt::skip]
pub const TOMO_LAYER_HEIGHT: Tag = Tag(0x0018, 0x1460);
/// Tomo Angle (0018,1470) DS 1
#[rustfmt::skip]
pub const TOMO_ANGLE: Tag = Tag(0x0018, 0x1470);
/// Tomo Time (0018,1480) DS 1
#[rustfmt::skip]
pub const TOMO_TIME: Tag = Tag(0x0018, 0x1480);
/// Tomo Type (0018,1490) CS 1
#[rustfmt::skip]
pub const TOMO_TYPE: Tag = Tag(0x0018, 0x1490);
/// Tomo Class (0018,1491) CS 1
#[rustfmt::skip]
pub const TOMO_CLASS: Tag = Tag(0x0018, 0x1491);
/// Number of Tomosynthesis Source Images (0018,1495) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_TOMOSYNTHESIS_SOURCE_IMAGES: Tag = Tag(0x0018, 0x1495);
/// Positioner Motion (0018,1500) CS 1
#[rustfmt::skip]
pub const POSITIONER_MOTION: Tag = Tag(0x0018, 0x1500);
/// Positioner Type (0018,1508) CS 1
#[rustfmt::skip]
pub const POSITIONER_TYPE: Tag = Tag(0x0018, 0x1508);
/// Positioner Primary Angle (0018,1510) DS 1
#[rustfmt::skip]
pub const POSITIONER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x1510);
/// Positioner Secondary Angle (0018,1511) DS 1
#[rustfmt::skip]
pub const POSITIONER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x1511);
/// Positioner Primary Angle Increment (0018,1520) DS 1-n
#[rustfmt::skip]
pub const POSITIONER_PRIMARY_ANGLE_INCREMENT: Tag = Tag(0x0018, 0x1520);
/// Positioner Secondary Angle Increment (0018,1521) DS 1-n
#[rustfmt::skip]
pub const POSITIONER_SECONDARY_ANGLE_INCREMENT: Tag = Tag(0x0018, 0x1521);
/// Detector Primary Angle (0018,1530) DS 1
#[rustfmt::skip]
pub const DETECTOR_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x1530);
/// Detector Secondary Angle (0018,1531) DS 1
#[rustfmt::skip]
pub const DETECTOR_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x1531);
/// Shutter Shape (0018,1600) CS 1-3
#[rustfmt::skip]
pub const SHUTTER_SHAPE: Tag = Tag(0x0018, 0x1600);
/// Shutter Left Vertical Edge (0018,1602) IS 1
#[rustfmt::skip]
pub const SHUTTER_LEFT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1602);
/// Shutter Right Vertical Edge (0018,1604) IS 1
#[rustfmt::skip]
pub const SHUTTER_RIGHT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1604);
/// Shutter Upper Horizontal Edge (0018,1606) IS 1
#[rustfmt::skip]
pub const SHUTTER_UPPER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1606);
/// Shutter Lower Horizontal Edge (0018,1608) IS 1
#[rustfmt::skip]
pub const SHUTTER_LOWER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1608);
/// Center of Circular Shutter (0018,1610) IS 2
#[rustfmt::skip]
pub const CENTER_OF_CIRCULAR_SHUTTER: Tag = Tag(0x0018, 0x1610);
/// Radius of Circular Shutter (0018,1612) IS 1
#[rustfmt::skip]
pub const RADIUS_OF_CIRCULAR_SHUTTER: Tag = Tag(0x0018, 0x1612);
/// Vertices of the Polygonal Shutter (0018,1620) IS 2-2n
#[rustfmt::skip]
pub const VERTICES_OF_THE_POLYGONAL_SHUTTER: Tag = Tag(0x0018, 0x1620);
/// Shutter Presentation Value (0018,1622) US 1
#[rustfmt::skip]
pub const SHUTTER_PRESENTATION_VALUE: Tag = Tag(0x0018, 0x1622);
/// Shutter Overlay Group (0018,1623) US 1
#[rustfmt::skip]
pub const SHUTTER_OVERLAY_GROUP: Tag = Tag(0x0018, 0x1623);
/// Shutter Presentation Color CIELab Value (0018,1624) US 3
#[rustfmt::skip]
pub const SHUTTER_PRESENTATION_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0018, 0x1624);
/// Collimator Shape (0018,1700) CS 1-3
#[rustfmt::skip]
pub const COLLIMATOR_SHAPE: Tag = Tag(0x0018, 0x1700);
/// Collimator Left Vertical Edge (0018,1702) IS 1
#[rustfmt::skip]
pub const COLLIMATOR_LEFT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1702);
/// Collimator Right Vertical Edge (0018,1704) IS 1
#[rustfmt::skip]
pub const COLLIMATOR_RIGHT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1704);
/// Collimator Upper Horizontal Edge (0018,1706) IS 1
#[rustfmt::skip]
pub const COLLIMATOR_UPPER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1706);
/// Collimator Lower Horizontal Edge (0018,1708) IS 1
#[rustfmt::skip]
pub const COLLIMATOR_LOWER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1708);
/// Center of Circular Collimator (0018,1710) IS 2
#[rustfmt::skip]
pub const CENTER_OF_CIRCULAR_COLLIMATOR: Tag = Tag(0x0018, 0x1710);
/// Radius of Circular Collimator (0018,1712) IS 1
#[rustfmt::skip]
pub const RADIUS_OF_CIRCULAR_COLLIMATOR: Tag = Tag(0x0018, 0x1712);
/// Vertices of the Polygonal Collimator (0018,1720) IS 2-2n
#[rustfmt::skip]
pub const VERTICES_OF_THE_POLYGONAL_COLLIMATOR: Tag = Tag(0x0018, 0x1720);
/// Acquisition Time Synchronized (0018,1800) CS 1
#[rustfmt::skip]
pub const ACQUISITION_TIME_SYNCHRONIZED: Tag = Tag(0x0018, 0x1800);
/// Time Source (0018,1801) SH 1
#[rustfmt::skip]
pub const TIME_SOURCE: Tag = Tag(0x0018, 0x1801);
/// Time Distribution Protocol (0018,1802) CS 1
#[rustfmt::skip]
pub const TIME_DISTRIBUTION_PROTOCOL: Tag = Tag(0x0018, 0x1802);
/// NTP Source Address (0018,1803) LO 1
#[rustfmt::skip]
pub const NTP_SOURCE_ADDRESS: Tag = Tag(0x0018, 0x1803);
/// Page Number Vector (0018,2001) IS 1-n
#[rustfmt::skip]
pub const PAGE_NUMBER_VECTOR: Tag = Tag(0x0018, 0x2001);
/// Frame Label Vector (0018,2002) SH 1-n
#[rustfmt::skip]
pub const FRAME_LABEL_VECTOR: Tag = Tag(0x0018, 0x2002);
/// Frame Primary Angle Vector (0018,2003) DS 1-n
#[rustfmt::skip]
pub const FRAME_PRIMARY_ANGLE_VECTOR: Tag = Tag(0x0018, 0x2003);
/// Frame Secondary Angle Vector (0018,2004) DS 1-n
#[rustfmt::skip]
pub const FRAME_SECONDARY_ANGLE_VECTOR: Tag = Tag(0x0018, 0x2004);
/// Slice Location Vector (0018,2005) DS 1-n
#[rustfmt::skip]
pub const SLICE_LOCATION_VECTOR: Tag = Tag(0x0018, 0x2005);
/// Display Window Label Vector (0018,2006) SH 1-n
#[rustfmt::skip]
pub const DISPLAY_WINDOW_LABEL_VECTOR: Tag = Tag(0x0018, 0x2006);
/// Nominal Scanned Pixel Spacing (0018,2010) DS 2
#[rustfmt::skip]
pub const NOMINAL_SCANNED_PIXEL_SPACING: Tag = Tag(0x0018, 0x2010);
/// Digitizing Device Transport Direction (0018,2020) CS 1
#[rustfmt::skip]
pub const DIGITIZING_DEVICE_TRANSPORT_DIRECTION: Tag = Tag(0x0018, 0x2020);
/// Rotation of Scanned Film (0018,2030) DS 1
#[rustfmt::skip]
pub const ROTATION_OF_SCANNED_FILM: Tag = Tag(0x0018, 0x2030);
/// Biopsy Target Sequence (0018,2041) SQ 1
#[rustfmt::skip]
pub const BIOPSY_TARGET_SEQUENCE: Tag = Tag(0x0018, 0x2041);
/// Target UID (0018,2042) UI 1
#[rustfmt::skip]
pub const TARGET_UID: Tag = Tag(0x0018, 0x2042);
/// Localizing Cursor Position (0018,2043) FL 2
#[rustfmt::skip]
pub const LOCALIZING_CURSOR_POSITION: Tag = Tag(0x0018, 0x2043);
/// Calculated Target Position (0018,2044) FL 3
#[rustfmt::skip]
pub const CALCULATED_TARGET_POSITION: Tag = Tag(0x0018, 0x2044);
/// Target Label (0018,2045) SH 1
#[rustfmt::skip]
pub const TARGET_LABEL: Tag = Tag(0x0018, 0x2045);
/// Displayed Z Value (0018,2046) FL 1
#[rustfmt::skip]
pub const DISPLAYED_Z_VALUE: Tag = Tag(0x0018, 0x2046);
/// IVUS Acquisition (0018,3100) CS 1
#[rustfmt::skip]
pub const IVUS_ACQUISITION: Tag = Tag(0x0018, 0x3100);
/// IVUS Pullback Rate (0018,3101) DS 1
#[rustfmt::skip]
pub const IVUS_PULLBACK_RATE: Tag = Tag(0x0018, 0x3101);
/// IVUS Gated Rate (0018,3102) DS 1
#[rustfmt::skip]
pub const IVUS_GATED_RATE: Tag = Tag(0x0018, 0x3102);
/// IVUS Pullback Start Frame Number (0018,3103) IS 1
#[rustfmt::skip]
pub const IVUS_PULLBACK_START_FRAME_NUMBER: Tag = Tag(0x0018, 0x3103);
/// IVUS Pullback Stop Frame Number (0018,3104) IS 1
#[rustfmt::skip]
pub const IVUS_PULLBACK_STOP_FRAME_NUMBER: Tag = Tag(0x0018, 0x3104);
/// Lesion Number (0018,3105) IS 1-n
#[rustfmt::skip]
pub const LESION_NUMBER: Tag = Tag(0x0018, 0x3105);
/// Acquisition Comments (0018,4000) LT 1 (retired)
#[rustfmt::skip]
pub const ACQUISITION_COMMENTS: Tag = Tag(0x0018, 0x4000);
/// Output Power (0018,5000) SH 1-n
#[rustfmt::skip]
pub const OUTPUT_POWER: Tag = Tag(0x0018, 0x5000);
/// Transducer Data (0018,5010) LO 1-n
#[rustfmt::skip]
pub const TRANSDUCER_DATA: Tag = Tag(0x0018, 0x5010);
/// Transducer Identification Sequence (0018,5011) SQ 1
#[rustfmt::skip]
pub const TRANSDUCER_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0018, 0x5011);
/// Focus Depth (0018,5012) DS 1
#[rustfmt::skip]
pub const FOCUS_DEPTH: Tag = Tag(0x0018, 0x5012);
/// Processing Function (0018,5020) LO 1
#[rustfmt::skip]
pub const PROCESSING_FUNCTION: Tag = Tag(0x0018, 0x5020);
/// Postprocessing Function (0018,5021) LO 1 (retired)
#[rustfmt::skip]
pub const POSTPROCESSING_FUNCTION: Tag = Tag(0x0018, 0x5021);
/// Mechanical Index (0018,5022) DS 1
#[rustfmt::skip]
pub const MECHANICAL_INDEX: Tag = Tag(0x0018, 0x5022);
/// Bone Thermal Index (0018,5024) DS 1
#[rustfmt::skip]
pub const BONE_THERMAL_INDEX: Tag = Tag(0x0018, 0x5024);
/// Cranial Thermal Index (0018,5026) DS 1
#[rustfmt::skip]
pub const CRANIAL_THERMAL_INDEX: Tag = Tag(0x0018, 0x5026);
/// Soft Tissue Thermal Index (0018,5027) DS 1
#[rustfmt::skip]
pub const SOFT_TISSUE_THERMAL_INDEX: Tag = Tag(0x0018, 0x5027);
/// Soft Tissue-focus Thermal Index (0018,5028) DS 1
#[rustfmt::skip]
pub const SOFT_TISSUE_FOCUS_THERMAL_INDEX: Tag = Tag(0x0018, 0x5028);
/// Soft Tissue-surface Thermal Index (0018,5029) DS 1
#[rustfmt::skip]
pub const SOFT_TISSUE_SURFACE_THERMAL_INDEX: Tag = Tag(0x0018, 0x5029);
/// Dynamic Range (0018,5030) DS 1 (retired)
#[rustfmt::skip]
pub const DYNAMIC_RANGE: Tag = Tag(0x0018, 0x5030);
/// Total Gain (0018,5040) DS 1 (retired)
#[rustfmt::skip]
pub const TOTAL_GAIN: Tag = Tag(0x0018, 0x5040);
/// Depth of Scan Field (0018,5050) IS 1
#[rustfmt::skip]
pub const DEPTH_OF_SCAN_FIELD: Tag = Tag(0x0018, 0x5050);
/// Patient Position (0018,5100) CS 1
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// View Position (0018,5101) CS 1
#[rustfmt::skip]
pub const VIEW_POSITION: Tag = Tag(0x0018, 0x5101);
/// Projection Eponymous Name Code Sequence (0018,5104) SQ 1
#[rustfmt::skip]
pub const PROJECTION_EPONYMOUS_NAME_CODE_SEQUENCE: Tag = Tag(0x0018, 0x5104);
/// Image Transformation Matrix (0018,5210) DS 6 (retired)
#[rustfmt::skip]
pub const IMAGE_TRANSFORMATION_MATRIX: Tag = Tag(0x0018, 0x5210);
/// Image Translation Vector (0018,5212) DS 3 (retired)
#[rustfmt::skip]
pub const IMAGE_TRANSLATION_VECTOR: Tag = Tag(0x0018, 0x5212);
/// Sensitivity (0018,6000) DS 1
#[rustfmt::skip]
pub const SENSITIVITY: Tag = Tag(0x0018, 0x6000);
/// Sequence of Ultrasound Regions (0018,6011) SQ 1
#[rustfmt::skip]
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);
/// Region Spatial Format (0018,6012) US 1
#[rustfmt::skip]
pub const REGION_SPATIAL_FORMAT: Tag = Tag(0x0018, 0x6012);
/// Region Data Type (0018,6014) US 1
#[rustfmt::skip]
pub const REGION_DATA_TYPE: Tag = Tag(0x0018, 0x6014);
/// Region Flags (0018,6016) UL 1
#[rustfmt::skip]
pub const REGION_FLAGS: Tag = Tag(0x0018, 0x6016);
/// Region Location Min X0 (0018,6018) UL 1
#[rustfmt::skip]
pub const REGION_LOCATION_MIN_X0: Tag = Tag(0x0018, 0x6018);
/// Region Location Min Y0 (0018,601A) UL 1
#[rustfmt::skip]
pub const REGION_LOCATION_MIN_Y0: Tag = Tag(0x0018, 0x601A);
/// Region Location Max X1 (0018,601C) UL 1
#[rustfmt::skip]
pub const REGION_LOCATION_MAX_X1: Tag = Tag(0x0018, 0x601C);
/// Region Location Max Y1 (0018,601E) UL 1
#[rustfmt::skip]
pub const REGION_LOCATION_MAX_Y1: Tag = Tag(0x0018, 0x601E);
/// Reference Pixel X0 (0018,6020) SL 1
#[rustfmt::skip]
pub const REFERENCE_PIXEL_X0: Tag = Tag(0x0018, 0x6020);
/// Reference Pixel Y0 (0018,6022) SL 1
#[rustfmt::skip]
pub const REFERENCE_PIXEL_Y0: Tag = Tag(0x0018, 0x6022);
/// Physical Units X Direction (0018,6024) US 1
#[rustfmt::skip]
pub const PHYSICAL_UNITS_X_DIRECTION: Tag = Tag(0x0018, 0x6024);
/// Physical Units Y Direction (0018,6026) US 1
#[rustfmt::skip]
pub const PHYSICAL_UNITS_Y_DIRECTION: Tag = Tag(0x0018, 0x6026);
/// Reference Pixel Physical Value X (0018,6028) FD 1
#[rustfmt::skip]
pub const REFERENCE_PIXEL_PHYSICAL_VALUE_X: Tag = Tag(0x0018, 0x6028);
/// Reference Pixel Physical Value Y (0018,602A) FD 1
#[rustfmt::skip]
pub const REFERENCE_PIXEL_PHYSICAL_VALUE_Y: Tag = Tag(0x0018, 0x602A);
/// Physical Delta X (0018,602C) FD 1
#[rustfmt::skip]
pub const PHYSICAL_DELTA_X: Tag = Tag(0x0018, 0x602C);
/// Physical Delta Y (0018,602E) FD 1
#[rustfmt::skip]
pub const PHYSICAL_DELTA_Y: Tag = Tag(0x0018, 0x602E);
/// Transducer Frequency (0018,6030) UL 1
#[rustfmt::skip]
pub const TRANSDUCER_FREQUENCY: Tag = Tag(0x0018, 0x6030);
/// Transducer Type (0018,6031) CS 1
#[rustfmt::skip]
pub const TRANSDUCER_TYPE: Tag = Tag(0x0018, 0x6031);
/// Pulse Repetition Frequency (0018,6032) UL 1
#[rustfmt::skip]
pub const PULSE_REPETITION_FREQUENCY: Tag = Tag(0x0018, 0x6032);
/// Doppler Correction Angle (0018,6034) FD 1
#[rustfmt::skip]
pub const DOPPLER_CORRECTION_ANGLE: Tag = Tag(0x0018, 0x6034);
/// Steering Angle (0018,6036) FD 1
#[rustfmt::skip]
pub const STEERING_ANGLE: Tag = Tag(0x0018, 0x6036);
/// Doppler Sample Volume X Position (Retired) (0018,6038) UL 1 (retired)
#[rustfmt::skip]
pub const DOPPLER_SAMPLE_VOLUME_X_POSITION_RETIRED: Tag = Tag(0x0018, 0x6038);
/// Doppler Sample Volume X Position (0018,6039) SL 1
#[rustfmt::skip]
pub const DOPPLER_SAMPLE_VOLUME_X_POSITION: Tag = Tag(0x0018, 0x6039);
/// Doppler Sample Volume Y Position (Retired) (0018,603A) UL 1 (retired)
#[rustfmt::skip]
pub const DOPPLER_SAMPLE_VOLUME_Y_POSITION_RETIRED: Tag = Tag(0x0018, 0x603A);
/// Doppler Sample Volume Y Position (0018,603B) SL 1
#[rustfmt::skip]
pub const DOPPLER_SAMPLE_VOLUME_Y_POSITION: Tag = Tag(0x0018, 0x603B);
/// TM-Line Position X0 (Retired) (0018,603C) UL 1 (retired)
#[rustfmt::skip]
pub const TM_LINE_POSITION_X0RETIRED: Tag = Tag(0x0018, 0x603C);
/// TM-Line Position X0 (0018,603D) SL 1
#[rustfmt::skip]
pub const TM_LINE_POSITION_X0: Tag = Tag(0x0018, 0x603D);
/// TM-Line Position Y0 (Retired) (0018,603E) UL 1 (retired)
#[rustfmt::skip]
pub const TM_LINE_POSITION_Y0RETIRED: Tag = Tag(0x0018, 0x603E);
/// TM-Line Position Y0 (0018,603F) SL 1
#[rustfmt::skip]
pub const TM_LINE_POSITION_Y0: Tag = Tag(0x0018, 0x603F);
/// TM-Line Position X1 (Retired) (0018,6040) UL 1 (retired)
#[rustfmt::skip]
pub const TM_LINE_POSITION_X1RETIRED: Tag = Tag(0x0018, 0x6040);
/// TM-Line Position X1 (0018,6041) SL 1
#[rustfmt::skip]
pub const TM_LINE_POSITION_X1: Tag = Tag(0x0018, 0x6041);
/// TM-Line Position Y1 (Retired) (0018,6042) UL 1 (retired)
#[rustfmt::skip]
pub const TM_LINE_POSITION_Y1RETIRED: Tag = Tag(0x0018, 0x6042);
/// TM-Line Position Y1 (0018,6043) SL 1
#[rustfmt::skip]
pub const TM_LINE_POSITION_Y1: Tag = Tag(0x0018, 0x6043);
/// Pixel Component Organization (0018,6044) US 1
#[rustfmt::skip]
pub const PIXEL_COMPONENT_ORGANIZATION: Tag = Tag(0x0018, 0x6044);
/// Pixel Component Mask (0018,6046) UL 1
#[rustfmt::skip]
pub const PIXEL_COMPONENT_MASK: Tag = Tag(0x0018, 0x6046);
/// Pixel Component Range Start (0018,6048) UL 1
#[rustfmt::skip]
pub const PIXEL_COMPONENT_RANGE_START: Tag = Tag(0x0018, 0x6048);
/// Pixel Component Range Stop (0018,604A) UL 1
#[rustfmt::skip]
pub const PIXEL_COMPONENT_RANGE_STOP: Tag = Tag(0x0018, 0x604A);
/// Pixel Component Physical Units (0018,604C) US 1
#[rustfmt::skip]
pub const PIXEL_COMPONENT_PHYSICAL_UNITS: Tag = Tag(0x0018, 0x604C);
/// Pixel Component Data Type (0018,604E) US 1
#[rustfmt::skip]
pub const PIXEL_COMPONENT_DATA_TYPE: Tag = Tag(0x0018, 0x604E);
/// Number of Table Break Points (0018,6050) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_TABLE_BREAK_POINTS: Tag = Tag(0x0018, 0x6050);
/// Table of X Break Points (0018,6052) UL 1-n
#[rustfmt::skip]
pub const TABLE_OF_X_BREAK_POINTS: Tag = Tag(0x0018, 0x6052);
/// Table of Y Break Points (0018,6054) FD 1-n
#[rustfmt::skip]
pub const TABLE_OF_Y_BREAK_POINTS: Tag = Tag(0x0018, 0x6054);
/// Number of Table Entries (0018,6056) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_TABLE_ENTRIES: Tag = Tag(0x0018, 0x6056);
/// Table of Pixel Values (0018,6058) UL 1-n
#[rustfmt::skip]
pub const TABLE_OF_PIXEL_VALUES: Tag = Tag(0x0018, 0x6058);
/// Table of Parameter Values (0018,605A) FL 1-n
#[rustfmt::skip]
pub const TABLE_OF_PARAMETER_VALUES: Tag = Tag(0x0018, 0x605A);
/// R Wave Time Vector (0018,6060) FL 1-n
#[rustfmt::skip]
pub const R_WAVE_TIME_VECTOR: Tag = Tag(0x0018, 0x6060);
/// Active Image Area Overlay Group (0018,6070) US 1
#[rustfmt::skip]
pub const ACTIVE_IMAGE_AREA_OVERLAY_GROUP: Tag = Tag(0x0018, 0x6070);
/// Detector Conditions Nominal Flag (0018,7000) CS 1
#[rustfmt::skip]
pub const DETECTOR_CONDITIONS_NOMINAL_FLAG: Tag = Tag(0x0018, 0x7000);
/// Detector Temperature (0018,7001) DS 1
#[rustfmt::skip]
pub const DETECTOR_TEMPERATURE: Tag = Tag(0x0018, 0x7001);
/// Detector Type (0018,7004) CS 1
#[rustfmt::skip]
pub const DETECTOR_TYPE: Tag = Tag(0x0018, 0x7004);
/// Detector Configuration (0018,7005) CS 1
#[rustfmt::skip]
pub const DETECTOR_CONFIGURATION: Tag = Tag(0x0018, 0x7005);
/// Detector Description (0018,7006) LT 1
#[rustfmt::skip]
pub const DETECTOR_DESCRIPTION: Tag = Tag(0x0018, 0x7006);
/// Detector Mode (0018,7008) LT 1
#[rustfmt::skip]
pub const DETECTOR_MODE: Tag = Tag(0x0018, 0x7008);
/// Detector ID (0018,700A) SH 1
#[rustfmt::skip]
pub const DETECTOR_ID: Tag = Tag(0x0018, 0x700A);
/// Date of Last Detector Calibration (0018,700C) DA 1
#[rustfmt::skip]
pub const DATE_OF_LAST_DETECTOR_CALIBRATION: Tag = Tag(0x0018, 0x700C);
/// Time of Last Detector Calibration (0018,700E) TM 1
#[rustfmt::skip]
pub const TIME_OF_LAST_DETECTOR_CALIBRATION: Tag = Tag(0x0018, 0x700E);
/// Exposures on Detector Since Last Calibration (0018,7010) IS 1
#[rustfmt::skip]
pub const EXPOSURES_ON_DETECTOR_SINCE_LAST_CALIBRATION: Tag = Tag(0x0018, 0x7010);
/// Exposures on Detector Since Manufactured (0018,7011) IS 1
#[rustfmt::skip]
pub const EXPOSURES_ON_DETECTOR_SINCE_MANUFACTURED: Tag = Tag(0x0018, 0x7011);
/// Detector Time Since Last Exposure (0018,7012) DS 1
#[rustfmt::skip]
pub const DETECTOR_TIME_SINCE_LAST_EXPOSURE: Tag = Tag(0x0018, 0x7012);
/// Detector Active Time (0018,7014) DS 1
#[rustfmt::skip]
pub const DETECTOR_ACTIVE_TIME: Tag = Tag(0x0018, 0x7014);
/// Detector Activation Offset From Exposure (0018,7016) DS 1
#[rustfmt::skip]
pub const DETECTOR_ACTIVATION_OFFSET_FROM_EXPOSURE: Tag = Tag(0x0018, 0x7016);
/// Detector Binning (0018,701A) DS 2
#[rustfmt::skip]
pub const DETECTOR_BINNING: Tag = Tag(0x0018, 0x701A);
/// Detector Element Physical Size (0018,7020) DS 2
#[rustfmt::skip]
pub const DETECTOR_ELEMENT_PHYSICAL_SIZE: Tag = Tag(0x0018, 0x7020);
/// Detector Element Spacing (0018,7022) DS 2
#[rustfmt::skip]
pub const DETECTOR_ELEMENT_SPACING: Tag = Tag(0x0018, 0x7022);
/// Detector Active Shape (0018,7024) CS 1
#[rustfmt::skip]
pub const DETECTOR_ACTIVE_SHAPE: Tag = Tag(0x0018, 0x7024);
/// Detector Active Dimension(s) (0018,7026) DS 1-2
#[rustfmt::skip]
pub const DETECTOR_ACTIVE_DIMENSIONS: Tag = Tag(0x0018, 0x7026);
/// Detector Active Origin (0018,7028) DS 2
#[rustfmt::skip]
pub const DETECTOR_ACTIVE_ORIGIN: Tag = Tag(0x0018, 0x7028);
/// Detector Manufacturer Name (0018,702A) LO 1
#[rustfmt::skip]
pub const DETECTOR_MANUFACTURER_NAME: Tag = Tag(0x0018, 0x702A);
/// Detector Manufacturer's Model Name (0018,702B) LO 1
#[rustfmt::skip]
pub const DETECTOR_MANUFACTURER_MODEL_NAME: Tag = Tag(0x0018, 0x702B);
/// Field of View Origin (0018,7030) DS 2
#[rustfmt::skip]
pub const FIELD_OF_VIEW_ORIGIN: Tag = Tag(0x0018, 0x7030);
/// Field of View Rotation (0018,7032) DS 1
#[rustfmt::skip]
pub const FIELD_OF_VIEW_ROTATION: Tag = Tag(0x0018, 0x7032);
/// Field of View Horizontal Flip (0018,7034) CS 1
#[rustfmt::skip]
pub const FIELD_OF_VIEW_HORIZONTAL_FLIP: Tag = Tag(0x0018, 0x7034);
/// Pixel Data Area Origin Relative To FOV (0018,7036) FL 2
#[rustfmt::skip]
pub const PIXEL_DATA_AREA_ORIGIN_RELATIVE_TO_FOV: Tag = Tag(0x0018, 0x7036);
/// Pixel Data Area Rotation Angle Relative To FOV (0018,7038) FL 1
#[rustfmt::skip]
pub const PIXEL_DATA_AREA_ROTATION_ANGLE_RELATIVE_TO_FOV: Tag = Tag(0x0018, 0x7038);
/// Grid Absorbing Material (0018,7040) LT 1
#[rustfmt::skip]
pub const GRID_ABSORBING_MATERIAL: Tag = Tag(0x0018, 0x7040);
/// Grid Spacing Material (0018,7041) LT 1
#[rustfmt::skip]
pub const GRID_SPACING_MATERIAL: Tag = Tag(0x0018, 0x7041);
/// Grid Thickness (0018,7042) DS 1
#[rustfmt::skip]
pub const GRID_THICKNESS: Tag = Tag(0x0018, 0x7042);
/// Grid Pitch (0018,7044) DS 1
#[rustfmt::skip]
pub const GRID_PITCH: Tag = Tag(0x0018, 0x7044);
/// Grid Aspect Ratio (0018,7046) IS 2
#[rustfmt::skip]
pub const GRID_ASPECT_RATIO: Tag = Tag(0x0018, 0x7046);
/// Grid Period (0018,7048) DS 1
#[rustfmt::skip]
pub const GRID_PERIOD: Tag = Tag(0x0018, 0x7048);
/// Grid Focal Distance (0018,704C) DS 1
#[rustfmt::skip]
pub const GRID_FOCAL_DISTANCE: Tag = Tag(0x0018, 0x704C);
/// Filter Material (0018,7050) CS 1-n
#[rustfmt::skip]
pub const FILTER_MATERIAL: Tag = Tag(0x0018, 0x7050);
/// Filter Thickness Minimum (0018,7052) DS 1-n
#[rustfmt::skip]
pub const FILTER_THICKNESS_MINIMUM: Tag = Tag(0x0018, 0x7052);
/// Filter Thickness Maximum (0018,7054) DS 1-n
#[rustfmt::skip]
pub const FILTER_THICKNESS_MAXIMUM: Tag = Tag(0x0018, 0x7054);
/// Filter Beam Path Length Maximum (0018,7056) FL 1-n
#[rustfmt::skip]
pub const FILTER_BEAM_PATH_LENGTH_MAXIMUM: Tag = Tag(0x0018, 0x7056);
/// Exposure Control Mode (0018,7060) CS 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_MODE: Tag = Tag(0x0018, 0x7060);
/// Exposure Control Mode Description (0018,7062) LT 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_MODE_DESCRIPTION: Tag = Tag(0x0018, 0x7062);
/// Exposure Status (0018,7064) CS 1
#[rustfmt::skip]
pub const EXPOSURE_STATUS: Tag = Tag(0x0018, 0x7064);
/// Phototimer Setting (0018,7065) DS 1
#[rustfmt::skip]
pub const PHOTOTIMER_SETTING: Tag = Tag(0x0018, 0x7065);
/// Exposure Time in µS (0018,8150) DS 1
#[rustfmt::skip]
pub const EXPOSURE_TIME_INU_S: Tag = Tag(0x0018, 0x8150);
/// X-Ray Tube Current in µA (0018,8151) DS 1
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT_INU_A: Tag = Tag(0x0018, 0x8151);
/// Content Qualification (0018,9004) CS 1
#[rustfmt::skip]
pub const CONTENT_QUALIFICATION: Tag = Tag(0x0018, 0x9004);
/// Pulse Sequence Name (0018,9005) SH 1
#[rustfmt::skip]
pub const PULSE_SEQUENCE_NAME: Tag = Tag(0x0018, 0x9005);
/// MR Imaging Modifier Sequence (0018,9006) SQ 1
#[rustfmt::skip]
pub const MR_IMAGING_MODIFIER_SEQUENCE: Tag = Tag(0x0018, 0x9006);
/// Echo Pulse Sequence (0018,9008) CS 1
#[rustfmt::skip]
pub const ECHO_PULSE_SEQUENCE: Tag = Tag(0x0018, 0x9008);
/// Inversion Recovery (0018,9009) CS 1
#[rustfmt::skip]
pub const INVERSION_RECOVERY: Tag = Tag(0x0018, 0x9009);
/// Flow Compensation (0018,9010) CS 1
#[rustfmt::skip]
pub const FLOW_COMPENSATION: Tag = Tag(0x0018, 0x9010);
/// Multiple Spin Echo (0018,9011) CS 1
#[rustfmt::skip]
pub const MULTIPLE_SPIN_ECHO: Tag = Tag(0x0018, 0x9011);
/// Multi-planar Excitation (0018,9012) CS 1
#[rustfmt::skip]
pub const MULTI_PLANAR_EXCITATION: Tag = Tag(0x0018, 0x9012);
/// Phase Contrast (0018,9014) CS 1
#[rustfmt::skip]
pub const PHASE_CONTRAST: Tag = Tag(0x0018, 0x9014);
/// Time of Flight Contrast (0018,9015) CS 1
#[rustfmt::skip]
pub const TIME_OF_FLIGHT_CONTRAST: Tag = Tag(0x0018, 0x9015);
/// Spoiling (0018,9016) CS 1
#[rustfmt::skip]
pub const SPOILING: Tag = Tag(0x0018, 0x9016);
/// Steady State Pulse Sequence (0018,9017) CS 1
#[rustfmt::skip]
pub const STEADY_STATE_PULSE_SEQUENCE: Tag = Tag(0x0018, 0x9017);
/// Echo Planar Pulse Sequence (0018,9018) CS 1
#[rustfmt::skip]
pub const ECHO_PLANAR_PULSE_SEQUENCE: Tag = Tag(0x0018, 0x9018);
/// Tag Angle First Axis (0018,9019) FD 1
#[rustfmt::skip]
pub const TAG_ANGLE_FIRST_AXIS: Tag = Tag(0x0018, 0x9019);
/// Magnetization Transfer (0018,9020) CS 1
#[rustfmt::skip]
pub const MAGNETIZATION_TRANSFER: Tag = Tag(0x0018, 0x9020);
/// T2 Preparation (0018,9021) CS 1
#[rustfmt::skip]
pub const T2PREPARATION: Tag = Tag(0x0018, 0x9021);
/// Blood Signal Nulling (0018,9022) CS 1
#[rustfmt::skip]
pub const BLOOD_SIGNAL_NULLING: Tag = Tag(0x0018, 0x9022);
/// Saturation Recovery (0018,9024) CS 1
#[rustfmt::skip]
pub const SATURATION_RECOVERY: Tag = Tag(0x0018, 0x9024);
/// Spectrally Selected Suppression (0018,9025) CS 1
#[rustfmt::skip]
pub const SPECTRALLY_SELECTED_SUPPRESSION: Tag = Tag(0x0018, 0x9025);
/// Spectrally Selected Excitation (0018,9026) CS 1
#[rustfmt::skip]
pub const SPECTRALLY_SELECTED_EXCITATION: Tag = Tag(0x0018, 0x9026);
/// Spatial Pre-saturation (0018,9027) CS 1
#[rustfmt::skip]
pub const SPATIAL_PRESATURATION: Tag = Tag(0x0018, 0x9027);
/// Tagging (0018,9028) CS 1
#[rustfmt::skip]
pub const TAGGING: Tag = Tag(0x0018, 0x9028);
/// Oversampling Phase (0018,9029) CS 1
#[rustfmt::skip]
pub const OVERSAMPLING_PHASE: Tag = Tag(0x0018, 0x9029);
/// Tag Spacing First Dimension (0018,9030) FD 1
#[rustfmt::skip]
pub const TAG_SPACING_FIRST_DIMENSION: Tag = Tag(0x0018, 0x9030);
/// Geometry of k-Space Traversal (0018,9032) CS 1
#[rustfmt::skip]
pub const GEOMETRY_OF_K_SPACE_TRAVERSAL: Tag = Tag(0x0018, 0x9032);
/// Segmented k-Space Traversal (0018,9033) CS 1
#[rustfmt::skip]
pub const SEGMENTED_K_SPACE_TRAVERSAL: Tag = Tag(0x0018, 0x9033);
/// Rectilinear Phase Encode Reordering (0018,9034) CS 1
#[rustfmt::skip]
pub const RECTILINEAR_PHASE_ENCODE_REORDERING: Tag = Tag(0x0018, 0x9034);
/// Tag Thickness (0018,9035) FD 1
#[rustfmt::skip]
pub const TAG_THICKNESS: Tag = Tag(0x0018, 0x9035);
/// Partial Fourier Direction (0018,9036) CS 1
#[rustfmt::skip]
pub const PARTIAL_FOURIER_DIRECTION: Tag = Tag(0x0018, 0x9036);
/// Cardiac Synchronization Technique (0018,9037) CS 1
#[rustfmt::skip]
pub const CARDIAC_SYNCHRONIZATION_TECHNIQUE: Tag = Tag(0x0018, 0x9037);
/// Receive Coil Manufacturer Name (0018,9041) LO 1
#[rustfmt::skip]
pub const RECEIVE_COIL_MANUFACTURER_NAME: Tag = Tag(0x0018, 0x9041);
/// MR Receive Coil Sequence (0018,9042) SQ 1
#[rustfmt::skip]
pub const MR_RECEIVE_COIL_SEQUENCE: Tag = Tag(0x0018, 0x9042);
/// Receive Coil Type (0018,9043) CS 1
#[rustfmt::skip]
pub const RECEIVE_COIL_TYPE: Tag = Tag(0x0018, 0x9043);
/// Quadrature Receive Coil (0018,9044) CS 1
#[rustfmt::skip]
pub const QUADRATURE_RECEIVE_COIL: Tag = Tag(0x0018, 0x9044);
/// Multi-Coil Definition Sequence (0018,9045) SQ 1
#[rustfmt::skip]
pub const MULTI_COIL_DEFINITION_SEQUENCE: Tag = Tag(0x0018, 0x9045);
/// Multi-Coil Configuration (0018,9046) LO 1
#[rustfmt::skip]
pub const MULTI_COIL_CONFIGURATION: Tag = Tag(0x0018, 0x9046);
/// Multi-Coil Element Name (0018,9047) SH 1
#[rustfmt::skip]
pub const MULTI_COIL_ELEMENT_NAME: Tag = Tag(0x0018, 0x9047);
/// Multi-Coil Element Used (0018,9048) CS 1
#[rustfmt::skip]
pub const MULTI_COIL_ELEMENT_USED: Tag = Tag(0x0018, 0x9048);
/// MR Transmit Coil Sequence (0018,9049) SQ 1
#[rustfmt::skip]
pub const MR_TRANSMIT_COIL_SEQUENCE: Tag = Tag(0x0018, 0x9049);
/// Transmit Coil Manufacturer Name (0018,9050) LO 1
#[rustfmt::skip]
pub const TRANSMIT_COIL_MANUFACTURER_NAME: Tag = Tag(0x0018, 0x9050);
/// Transmit Coil Type (0018,9051) CS 1
#[rustfmt::skip]
pub const TRANSMIT_COIL_TYPE: Tag = Tag(0x0018, 0x9051);
/// Spectral Width (0018,9052) FD 1-2
#[rustfmt::skip]
pub const SPECTRAL_WIDTH: Tag = Tag(0x0018, 0x9052);
/// Chemical Shift Reference (0018,9053) FD 1-2
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_REFERENCE: Tag = Tag(0x0018, 0x9053);
/// Volume Localization Technique (0018,9054) CS 1
#[rustfmt::skip]
pub const VOLUME_LOCALIZATION_TECHNIQUE: Tag = Tag(0x0018, 0x9054);
/// MR Acquisition Frequency Encoding Steps (0018,9058) US 1
#[rustfmt::skip]
pub const MR_ACQUISITION_FREQUENCY_ENCODING_STEPS: Tag = Tag(0x0018, 0x9058);
/// De-coupling (0018,9059) CS 1
#[rustfmt::skip]
pub const DECOUPLING: Tag = Tag(0x0018, 0x9059);
/// De-coupled Nucleus (0018,9060) CS 1-2
#[rustfmt::skip]
pub const DECOUPLED_NUCLEUS: Tag = Tag(0x0018, 0x9060);
/// De-coupling Frequency (0018,9061) FD 1-2
#[rustfmt::skip]
pub const DECOUPLING_FREQUENCY: Tag = Tag(0x0018, 0x9061);
/// De-coupling Method (0018,9062) CS 1
#[rustfmt::skip]
pub const DECOUPLING_METHOD: Tag = Tag(0x0018, 0x9062);
/// De-coupling Chemical Shift Reference (0018,9063) FD 1-2
#[rustfmt::skip]
pub const DECOUPLING_CHEMICAL_SHIFT_REFERENCE: Tag = Tag(0x0018, 0x9063);
/// k-space Filtering (0018,9064) CS 1
#[rustfmt::skip]
pub const K_SPACE_FILTERING: Tag = Tag(0x0018, 0x9064);
/// Time Domain Filtering (0018,9065) CS 1-2
#[rustfmt::skip]
pub const TIME_DOMAIN_FILTERING: Tag = Tag(0x0018, 0x9065);
/// Number of Zero Fills (0018,9066) US 1-2
#[rustfmt::skip]
pub const NUMBER_OF_ZERO_FILLS: Tag = Tag(0x0018, 0x9066);
/// Baseline Correction (0018,9067) CS 1
#[rustfmt::skip]
pub const BASELINE_CORRECTION: Tag = Tag(0x0018, 0x9067);
/// Parallel Reduction Factor In-plane (0018,9069) FD 1
#[rustfmt::skip]
pub const PARALLEL_REDUCTION_FACTOR_IN_PLANE: Tag = Tag(0x0018, 0x9069);
/// Cardiac R-R Interval Specified (0018,9070) FD 1
#[rustfmt::skip]
pub const CARDIAC_RR_INTERVAL_SPECIFIED: Tag = Tag(0x0018, 0x9070);
/// Acquisition Duration (0018,9073) FD 1
#[rustfmt::skip]
pub const ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9073);
/// Frame Acquisition DateTime (0018,9074) DT 1
#[rustfmt::skip]
pub const FRAME_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9074);
/// Diffusion Directionality (0018,9075) CS 1
#[rustfmt::skip]
pub const DIFFUSION_DIRECTIONALITY: Tag = Tag(0x0018, 0x9075);
/// Diffusion Gradient Direction Sequence (0018,9076) SQ 1
#[rustfmt::skip]
pub const DIFFUSION_GRADIENT_DIRECTION_SEQUENCE: Tag = Tag(0x0018, 0x9076);
/// Parallel Acquisition (0018,9077) CS 1
#[rustfmt::skip]
pub const PARALLEL_ACQUISITION: Tag = Tag(0x0018, 0x9077);
/// Parallel Acquisition Technique (0018,9078) CS 1
#[rustfmt::skip]
pub const PARALLEL_ACQUISITION_TECHNIQUE: Tag = Tag(0x0018, 0x9078);
/// Inversion Times (0018,9079) FD 1-n
#[rustfmt::skip]
pub const INVERSION_TIMES: Tag = Tag(0x0018, 0x9079);
/// Metabolite Map Description (0018,9080) ST 1
#[rustfmt::skip]
pub const METABOLITE_MAP_DESCRIPTION: Tag = Tag(0x0018, 0x9080);
/// Partial Fourier (0018,9081) CS 1
#[rustfmt::skip]
pub const PARTIAL_FOURIER: Tag = Tag(0x0018, 0x9081);
/// Effective Echo Time (0018,9082) FD 1
#[rustfmt::skip]
pub const EFFECTIVE_ECHO_TIME: Tag = Tag(0x0018, 0x9082);
/// Metabolite Map Code Sequence (0018,9083) SQ 1
#[rustfmt::skip]
pub const METABOLITE_MAP_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9083);
/// Chemical Shift Sequence (0018,9084) SQ 1
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_SEQUENCE: Tag = Tag(0x0018, 0x9084);
/// Cardiac Signal Source (0018,9085) CS 1
#[rustfmt::skip]
pub const CARDIAC_SIGNAL_SOURCE: Tag = Tag(0x0018, 0x9085);
/// Diffusion b-value (0018,9087) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE: Tag = Tag(0x0018, 0x9087);
/// Diffusion Gradient Orientation (0018,9089) FD 3
#[rustfmt::skip]
pub const DIFFUSION_GRADIENT_ORIENTATION: Tag = Tag(0x0018, 0x9089);
/// Velocity Encoding Direction (0018,9090) FD 3
#[rustfmt::skip]
pub const VELOCITY_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x9090);
/// Velocity Encoding Minimum Value (0018,9091) FD 1
#[rustfmt::skip]
pub const VELOCITY_ENCODING_MINIMUM_VALUE: Tag = Tag(0x0018, 0x9091);
/// Velocity Encoding Acquisition Sequence (0018,9092) SQ 1
#[rustfmt::skip]
pub const VELOCITY_ENCODING_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9092);
/// Number of k-Space Trajectories (0018,9093) US 1
#[rustfmt::skip]
pub const NUMBER_OF_K_SPACE_TRAJECTORIES: Tag = Tag(0x0018, 0x9093);
/// Coverage of k-Space (0018,9094) CS 1
#[rustfmt::skip]
pub const COVERAGE_OF_K_SPACE: Tag = Tag(0x0018, 0x9094);
/// Spectroscopy Acquisition Phase Rows (0018,9095) UL 1
#[rustfmt::skip]
pub const SPECTROSCOPY_ACQUISITION_PHASE_ROWS: Tag = Tag(0x0018, 0x9095);
/// Parallel Reduction Factor In-plane (Retired) (0018,9096) FD 1 (retired)
#[rustfmt::skip]
pub const PARALLEL_REDUCTION_FACTOR_IN_PLANE_RETIRED: Tag = Tag(0x0018, 0x9096);
/// Transmitter Frequency (0018,9098) FD 1-2
#[rustfmt::skip]
pub const TRANSMITTER_FREQUENCY: Tag = Tag(0x0018, 0x9098);
/// Resonant Nucleus (0018,9100) CS 1-2
#[rustfmt::skip]
pub const RESONANT_NUCLEUS: Tag = Tag(0x0018, 0x9100);
/// Frequency Correction (0018,9101) CS 1
#[rustfmt::skip]
pub const FREQUENCY_CORRECTION: Tag = Tag(0x0018, 0x9101);
/// MR Spectroscopy FOV/Geometry Sequence (0018,9103) SQ 1
#[rustfmt::skip]
pub const MR_SPECTROSCOPY_FOV_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9103);
/// Slab Thickness (0018,9104) FD 1
#[rustfmt::skip]
pub const SLAB_THICKNESS: Tag = Tag(0x0018, 0x9104);
/// Slab Orientation (0018,9105) FD 3
#[rustfmt::skip]
pub const SLAB_ORIENTATION: Tag = Tag(0x0018, 0x9105);
/// Mid Slab Position (0018,9106) FD 3
#[rustfmt::skip]
pub const MID_SLAB_POSITION: Tag = Tag(0x0018, 0x9106);
/// MR Spatial Saturation Sequence (0018,9107) SQ 1
#[rustfmt::skip]
pub const MR_SPATIAL_SATURATION_SEQUENCE: Tag = Tag(0x0018, 0x9107);
/// MR Timing and Related Parameters Sequence (0018,9112) SQ 1
#[rustfmt::skip]
pub const MR_TIMING_AND_RELATED_PARAMETERS_SEQUENCE: Tag = Tag(0x0018, 0x9112);
/// MR Echo Sequence (0018,9114) SQ 1
#[rustfmt::skip]
pub const MR_ECHO_SEQUENCE: Tag = Tag(0x0018, 0x9114);
/// MR Modifier Sequence (0018,9115) SQ 1
#[rustfmt::skip]
pub const MR_MODIFIER_SEQUENCE: Tag = Tag(0x0018, 0x9115);
/// MR Diffusion Sequence (0018,9117) SQ 1
#[rustfmt::skip]
pub const MR_DIFFUSION_SEQUENCE: Tag = Tag(0x0018, 0x9117);
/// Cardiac Synchronization Sequence (0018,9118) SQ 1
#[rustfmt::skip]
pub const CARDIAC_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x0018, 0x9118);
/// MR Averages Sequence (0018,9119) SQ 1
#[rustfmt::skip]
pub const MR_AVERAGES_SEQUENCE: Tag = Tag(0x0018, 0x9119);
/// MR FOV/Geometry Sequence (0018,9125) SQ 1
#[rustfmt::skip]
pub const MRFOV_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9125);
/// Volume Localization Sequence (0018,9126) SQ 1
#[rustfmt::skip]
pub const VOLUME_LOCALIZATION_SEQUENCE: Tag = Tag(0x0018, 0x9126);
/// Spectroscopy Acquisition Data Columns (0018,9127) UL 1
#[rustfmt::skip]
pub const SPECTROSCOPY_ACQUISITION_DATA_COLUMNS: Tag = Tag(0x0018, 0x9127);
/// Diffusion Anisotropy Type (0018,9147) CS 1
#[rustfmt::skip]
pub const DIFFUSION_ANISOTROPY_TYPE: Tag = Tag(0x0018, 0x9147);
/// Frame Reference DateTime (0018,9151) DT 1
#[rustfmt::skip]
pub const FRAME_REFERENCE_DATE_TIME: Tag = Tag(0x0018, 0x9151);
/// MR Metabolite Map Sequence (0018,9152) SQ 1
#[rustfmt::skip]
pub const MR_METABOLITE_MAP_SEQUENCE: Tag = Tag(0x0018, 0x9152);
/// Parallel Reduction Factor out-of-plane (0018,9155) FD 1
#[rustfmt::skip]
pub const PARALLEL_REDUCTION_FACTOR_OUT_OF_PLANE: Tag = Tag(0x0018, 0x9155);
/// Spectroscopy Acquisition Out-of-plane Phase Steps (0018,9159) UL 1
#[rustfmt::skip]
pub const SPECTROSCOPY_ACQUISITION_OUT_OF_PLANE_PHASE_STEPS: Tag = Tag(0x0018, 0x9159);
/// Bulk Motion Status (0018,9166) CS 1 (retired)
#[rustfmt::skip]
pub const BULK_MOTION_STATUS: Tag = Tag(0x0018, 0x9166);
/// Parallel Reduction Factor Second In-plane (0018,9168) FD 1
#[rustfmt::skip]
pub const PARALLEL_REDUCTION_FACTOR_SECOND_IN_PLANE: Tag = Tag(0x0018, 0x9168);
/// Cardiac Beat Rejection Technique (0018,9169) CS 1
#[rustfmt::skip]
pub const CARDIAC_BEAT_REJECTION_TECHNIQUE: Tag = Tag(0x0018, 0x9169);
/// Respiratory Motion Compensation Technique (0018,9170) CS 1
#[rustfmt::skip]
pub const RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE: Tag = Tag(0x0018, 0x9170);
/// Respiratory Signal Source (0018,9171) CS 1
#[rustfmt::skip]
pub const RESPIRATORY_SIGNAL_SOURCE: Tag = Tag(0x0018, 0x9171);
/// Bulk Motion Compensation Technique (0018,9172) CS 1
#[rustfmt::skip]
pub const BULK_MOTION_COMPENSATION_TECHNIQUE: Tag = Tag(0x0018, 0x9172);
/// Bulk Motion Signal Source (0018,9173) CS 1
#[rustfmt::skip]
pub const BULK_MOTION_SIGNAL_SOURCE: Tag = Tag(0x0018, 0x9173);
/// Applicable Safety Standard Agency (0018,9174) CS 1
#[rustfmt::skip]
pub const APPLICABLE_SAFETY_STANDARD_AGENCY: Tag = Tag(0x0018, 0x9174);
/// Applicable Safety Standard Description (0018,9175) LO 1
#[rustfmt::skip]
pub const APPLICABLE_SAFETY_STANDARD_DESCRIPTION: Tag = Tag(0x0018, 0x9175);
/// Operating Mode Sequence (0018,9176) SQ 1
#[rustfmt::skip]
pub const OPERATING_MODE_SEQUENCE: Tag = Tag(0x0018, 0x9176);
/// Operating Mode Type (0018,9177) CS 1
#[rustfmt::skip]
pub const OPERATING_MODE_TYPE: Tag = Tag(0x0018, 0x9177);
/// Operating Mode (0018,9178) CS 1
#[rustfmt::skip]
pub const OPERATING_MODE: Tag = Tag(0x0018, 0x9178);
/// Specific Absorption Rate Definition (0018,9179) CS 1
#[rustfmt::skip]
pub const SPECIFIC_ABSORPTION_RATE_DEFINITION: Tag = Tag(0x0018, 0x9179);
/// Gradient Output Type (0018,9180) CS 1
#[rustfmt::skip]
pub const GRADIENT_OUTPUT_TYPE: Tag = Tag(0x0018, 0x9180);
/// Specific Absorption Rate Value (0018,9181) FD 1
#[rustfmt::skip]
pub const SPECIFIC_ABSORPTION_RATE_VALUE: Tag = Tag(0x0018, 0x9181);
/// Gradient Output (0018,9182) FD 1
#[rustfmt::skip]
pub const GRADIENT_OUTPUT: Tag = Tag(0x0018, 0x9182);
/// Flow Compensation Direction (0018,9183) CS 1
#[rustfmt::skip]
pub const FLOW_COMPENSATION_DIRECTION: Tag = Tag(0x0018, 0x9183);
/// Tagging Delay (0018,9184) FD 1
#[rustfmt::skip]
pub const TAGGING_DELAY: Tag = Tag(0x0018, 0x9184);
/// Respiratory Motion Compensation Technique Description (0018,9185) ST 1
#[rustfmt::skip]
pub const RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE_DESCRIPTION: Tag = Tag(0x0018, 0x9185);
/// Respiratory Signal Source ID (0018,9186) SH 1
#[rustfmt::skip]
pub const RESPIRATORY_SIGNAL_SOURCE_ID: Tag = Tag(0x0018, 0x9186);
/// Chemical Shift Minimum Integration Limit in Hz (0018,9195) FD 1 (retired)
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_MINIMUM_INTEGRATION_LIMIT_IN_HZ: Tag = Tag(0x0018, 0x9195);
/// Chemical Shift Maximum Integration Limit in Hz (0018,9196) FD 1 (retired)
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_MAXIMUM_INTEGRATION_LIMIT_IN_HZ: Tag = Tag(0x0018, 0x9196);
/// MR Velocity Encoding Sequence (0018,9197) SQ 1
#[rustfmt::skip]
pub const MR_VELOCITY_ENCODING_SEQUENCE: Tag = Tag(0x0018, 0x9197);
/// First Order Phase Correction (0018,9198) CS 1
#[rustfmt::skip]
pub const FIRST_ORDER_PHASE_CORRECTION: Tag = Tag(0x0018, 0x9198);
/// Water Referenced Phase Correction (0018,9199) CS 1
#[rustfmt::skip]
pub const WATER_REFERENCED_PHASE_CORRECTION: Tag = Tag(0x0018, 0x9199);
/// MR Spectroscopy Acquisition Type (0018,9200) CS 1
#[rustfmt::skip]
pub const MR_SPECTROSCOPY_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x9200);
/// Respiratory Cycle Position (0018,9214) CS 1
#[rustfmt::skip]
pub const RESPIRATORY_CYCLE_POSITION: Tag = Tag(0x0018, 0x9214);
/// Velocity Encoding Maximum Value (0018,9217) FD 1
#[rustfmt::skip]
pub const VELOCITY_ENCODING_MAXIMUM_VALUE: Tag = Tag(0x0018, 0x9217);
/// Tag Spacing Second Dimension (0018,9218) FD 1
#[rustfmt::skip]
pub const TAG_SPACING_SECOND_DIMENSION: Tag = Tag(0x0018, 0x9218);
/// Tag Angle Second Axis (0018,9219) SS 1
#[rustfmt::skip]
pub const TAG_ANGLE_SECOND_AXIS: Tag = Tag(0x0018, 0x9219);
/// Frame Acquisition Duration (0018,9220) FD 1
#[rustfmt::skip]
pub const FRAME_ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9220);
/// MR Image Frame Type Sequence (0018,9226) SQ 1
#[rustfmt::skip]
pub const MR_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9226);
/// MR Spectroscopy Frame Type Sequence (0018,9227) SQ 1
#[rustfmt::skip]
pub const MR_SPECTROSCOPY_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9227);
/// MR Acquisition Phase Encoding Steps in-plane (0018,9231) US 1
#[rustfmt::skip]
pub const MR_ACQUISITION_PHASE_ENCODING_STEPS_IN_PLANE: Tag = Tag(0x0018, 0x9231);
/// MR Acquisition Phase Encoding Steps out-of-plane (0018,9232) US 1
#[rustfmt::skip]
pub const MR_ACQUISITION_PHASE_ENCODING_STEPS_OUT_OF_PLANE: Tag = Tag(0x0018, 0x9232);
/// Spectroscopy Acquisition Phase Columns (0018,9234) UL 1
#[rustfmt::skip]
pub const SPECTROSCOPY_ACQUISITION_PHASE_COLUMNS: Tag = Tag(0x0018, 0x9234);
/// Cardiac Cycle Position (0018,9236) CS 1
#[rustfmt::skip]
pub const CARDIAC_CYCLE_POSITION: Tag = Tag(0x0018, 0x9236);
/// Specific Absorption Rate Sequence (0018,9239) SQ 1
#[rustfmt::skip]
pub const SPECIFIC_ABSORPTION_RATE_SEQUENCE: Tag = Tag(0x0018, 0x9239);
/// RF Echo Train Length (0018,9240) US 1
#[rustfmt::skip]
pub const RF_ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x9240);
/// Gradient Echo Train Length (0018,9241) US 1
#[rustfmt::skip]
pub const GRADIENT_ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x9241);
/// Arterial Spin Labeling Contrast (0018,9250) CS 1
#[rustfmt::skip]
pub const ARTERIAL_SPIN_LABELING_CONTRAST: Tag = Tag(0x0018, 0x9250);
/// MR Arterial Spin Labeling Sequence (0018,9251) SQ 1
#[rustfmt::skip]
pub const MR_ARTERIAL_SPIN_LABELING_SEQUENCE: Tag = Tag(0x0018, 0x9251);
/// ASL Technique Description (0018,9252) LO 1
#[rustfmt::skip]
pub const ASL_TECHNIQUE_DESCRIPTION: Tag = Tag(0x0018, 0x9252);
/// ASL Slab Number (0018,9253) US 1
#[rustfmt::skip]
pub const ASL_SLAB_NUMBER: Tag = Tag(0x0018, 0x9253);
/// ASL Slab Thickness (0018,9254) FD 1
#[rustfmt::skip]
pub const ASL_SLAB_THICKNESS: Tag = Tag(0x0018, 0x9254);
/// ASL Slab Orientation (0018,9255) FD 3
#[rustfmt::skip]
pub const ASL_SLAB_ORIENTATION: Tag = Tag(0x0018, 0x9255);
/// ASL Mid Slab Position (0018,9256) FD 3
#[rustfmt::skip]
pub const ASL_MID_SLAB_POSITION: Tag = Tag(0x0018, 0x9256);
/// ASL Context (0018,9257) CS 1
#[rustfmt::skip]
pub const ASL_CONTEXT: Tag = Tag(0x0018, 0x9257);
/// ASL Pulse Train Duration (0018,9258) UL 1
#[rustfmt::skip]
pub const ASL_PULSE_TRAIN_DURATION: Tag = Tag(0x0018, 0x9258);
/// ASL Crusher Flag (0018,9259) CS 1
#[rustfmt::skip]
pub const ASL_CRUSHER_FLAG: Tag = Tag(0x0018, 0x9259);
/// ASL Crusher Flow Limit (0018,925A) FD 1
#[rustfmt::skip]
pub const ASL_CRUSHER_FLOW_LIMIT: Tag = Tag(0x0018, 0x925A);
/// ASL Crusher Description (0018,925B) LO 1
#[rustfmt::skip]
pub const ASL_CRUSHER_DESCRIPTION: Tag = Tag(0x0018, 0x925B);
/// ASL Bolus Cut-off Flag (0018,925C) CS 1
#[rustfmt::skip]
pub const ASL_BOLUS_CUTOFF_FLAG: Tag = Tag(0x0018, 0x925C);
/// ASL Bolus Cut-off Timing Sequence (0018,925D) SQ 1
#[rustfmt::skip]
pub const ASL_BOLUS_CUTOFF_TIMING_SEQUENCE: Tag = Tag(0x0018, 0x925D);
/// ASL Bolus Cut-off Technique (0018,925E) LO 1
#[rustfmt::skip]
pub const ASL_BOLUS_CUTOFF_TECHNIQUE: Tag = Tag(0x0018, 0x925E);
/// ASL Bolus Cut-off Delay Time (0018,925F) UL 1
#[rustfmt::skip]
pub const ASL_BOLUS_CUTOFF_DELAY_TIME: Tag = Tag(0x0018, 0x925F);
/// ASL Slab Sequence (0018,9260) SQ 1
#[rustfmt::skip]
pub const ASL_SLAB_SEQUENCE: Tag = Tag(0x0018, 0x9260);
/// Chemical Shift Minimum Integration Limit in ppm (0018,9295) FD 1
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_MINIMUM_INTEGRATION_LIMIT_INPPM: Tag = Tag(0x0018, 0x9295);
/// Chemical Shift Maximum Integration Limit in ppm (0018,9296) FD 1
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_MAXIMUM_INTEGRATION_LIMIT_INPPM: Tag = Tag(0x0018, 0x9296);
/// Water Reference Acquisition (0018,9297) CS 1
#[rustfmt::skip]
pub const WATER_REFERENCE_ACQUISITION: Tag = Tag(0x0018, 0x9297);
/// Echo Peak Position (0018,9298) IS 1
#[rustfmt::skip]
pub const ECHO_PEAK_POSITION: Tag = Tag(0x0018, 0x9298);
/// CT Acquisition Type Sequence (0018,9301) SQ 1
#[rustfmt::skip]
pub const CT_ACQUISITION_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9301);
/// Acquisition Type (0018,9302) CS 1
#[rustfmt::skip]
pub const ACQUISITION_TYPE: Tag = Tag(0x0018, 0x9302);
/// Tube Angle (0018,9303) FD 1
#[rustfmt::skip]
pub const TUBE_ANGLE: Tag = Tag(0x0018, 0x9303);
/// CT Acquisition Details Sequence (0018,9304) SQ 1
#[rustfmt::skip]
pub const CT_ACQUISITION_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9304);
/// Revolution Time (0018,9305) FD 1
#[rustfmt::skip]
pub const REVOLUTION_TIME: Tag = Tag(0x0018, 0x9305);
/// Single Collimation Width (0018,9306) FD 1
#[rustfmt::skip]
pub const SINGLE_COLLIMATION_WIDTH: Tag = Tag(0x0018, 0x9306);
/// Total Collimation Width (0018,9307) FD 1
#[rustfmt::skip]
pub const TOTAL_COLLIMATION_WIDTH: Tag = Tag(0x0018, 0x9307);
/// CT Table Dynamics Sequence (0018,9308) SQ 1
#[rustfmt::skip]
pub const CT_TABLE_DYNAMICS_SEQUENCE: Tag = Tag(0x0018, 0x9308);
/// Table Speed (0018,9309) FD 1
#[rustfmt::skip]
pub const TABLE_SPEED: Tag = Tag(0x0018, 0x9309);
/// Table Feed per Rotation (0018,9310) FD 1
#[rustfmt::skip]
pub const TABLE_FEED_PER_ROTATION: Tag = Tag(0x0018, 0x9310);
/// Spiral Pitch Factor (0018,9311) FD 1
#[rustfmt::skip]
pub const SPIRAL_PITCH_FACTOR: Tag = Tag(0x0018, 0x9311);
/// CT Geometry Sequence (0018,9312) SQ 1
#[rustfmt::skip]
pub const CT_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9312);
/// Data Collection Center (Patient) (0018,9313) FD 3
#[rustfmt::skip]
pub const DATA_COLLECTION_CENTER_PATIENT: Tag = Tag(0x0018, 0x9313);
/// CT Reconstruction Sequence (0018,9314) SQ 1
#[rustfmt::skip]
pub const CT_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9314);
/// Reconstruction Algorithm (0018,9315) CS 1
#[rustfmt::skip]
pub const RECONSTRUCTION_ALGORITHM: Tag = Tag(0x0018, 0x9315);
/// Convolution Kernel Group (0018,9316) CS 1
#[rustfmt::skip]
pub const CONVOLUTION_KERNEL_GROUP: Tag = Tag(0x0018, 0x9316);
/// Reconstruction Field of View (0018,9317) FD 2
#[rustfmt::skip]
pub const RECONSTRUCTION_FIELD_OF_VIEW: Tag = Tag(0x0018, 0x9317);
/// Reconstruction Target Center (Patient) (0018,9318) FD 3
#[rustfmt::skip]
pub const RECONSTRUCTION_TARGET_CENTER_PATIENT: Tag = Tag(0x0018, 0x9318);
/// Reconstruction Angle (0018,9319) FD 1
#[rustfmt::skip]
pub const RECONSTRUCTION_ANGLE: Tag = Tag(0x0018, 0x9319);
/// Image Filter (0018,9320) SH 1
#[rustfmt::skip]
pub const IMAGE_FILTER: Tag = Tag(0x0018, 0x9320);
/// CT Exposure Sequence (0018,9321) SQ 1
#[rustfmt::skip]
pub const CT_EXPOSURE_SEQUENCE: Tag = Tag(0x0018, 0x9321);
/// Reconstruction Pixel Spacing (0018,9322) FD 2
#[rustfmt::skip]
pub const RECONSTRUCTION_PIXEL_SPACING: Tag = Tag(0x0018, 0x9322);
/// Exposure Modulation Type (0018,9323) CS 1-n
#[rustfmt::skip]
pub const EXPOSURE_MODULATION_TYPE: Tag = Tag(0x0018, 0x9323);
/// Estimated Dose Saving (0018,9324) FD 1 (retired)
#[rustfmt::skip]
pub const ESTIMATED_DOSE_SAVING: Tag = Tag(0x0018, 0x9324);
/// CT X-Ray Details Sequence (0018,9325) SQ 1
#[rustfmt::skip]
pub const CTX_RAY_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9325);
/// CT Position Sequence (0018,9326) SQ 1
#[rustfmt::skip]
pub const CT_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9326);
/// Table Position (0018,9327) FD 1
#[rustfmt::skip]
pub const TABLE_POSITION: Tag = Tag(0x0018, 0x9327);
/// Exposure Time in ms (0018,9328) FD 1
#[rustfmt::skip]
pub const EXPOSURE_TIME_INMS: Tag = Tag(0x0018, 0x9328);
/// CT Image Frame Type Sequence (0018,9329) SQ 1
#[rustfmt::skip]
pub const CT_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9329);
/// X-Ray Tube Current in mA (0018,9330) FD 1
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT_INM_A: Tag = Tag(0x0018, 0x9330);
/// Exposure in mAs (0018,9332) FD 1
#[rustfmt::skip]
pub const EXPOSURE_INM_AS: Tag = Tag(0x0018, 0x9332);
/// Constant Volume Flag (0018,9333) CS 1
#[rustfmt::skip]
pub const CONSTANT_VOLUME_FLAG: Tag = Tag(0x0018, 0x9333);
/// Fluoroscopy Flag (0018,9334) CS 1
#[rustfmt::skip]
pub const FLUOROSCOPY_FLAG: Tag = Tag(0x0018, 0x9334);
/// Distance Source to Data Collection Center (0018,9335) FD 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_DATA_COLLECTION_CENTER: Tag = Tag(0x0018, 0x9335);
/// Contrast/Bolus Agent Number (0018,9337) US 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT_NUMBER: Tag = Tag(0x0018, 0x9337);
/// Contrast/Bolus Ingredient Code Sequence (0018,9338) SQ 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_INGREDIENT_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9338);
/// Contrast Administration Profile Sequence (0018,9340) SQ 1
#[rustfmt::skip]
pub const CONTRAST_ADMINISTRATION_PROFILE_SEQUENCE: Tag = Tag(0x0018, 0x9340);
/// Contrast/Bolus Usage Sequence (0018,9341) SQ 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_USAGE_SEQUENCE: Tag = Tag(0x0018, 0x9341);
/// Contrast/Bolus Agent Administered (0018,9342) CS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT_ADMINISTERED: Tag = Tag(0x0018, 0x9342);
/// Contrast/Bolus Agent Detected (0018,9343) CS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT_DETECTED: Tag = Tag(0x0018, 0x9343);
/// Contrast/Bolus Agent Phase (0018,9344) CS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT_PHASE: Tag = Tag(0x0018, 0x9344);
/// CTDIvol (0018,9345) FD 1
#[rustfmt::skip]
pub const CTD_IVOL: Tag = Tag(0x0018, 0x9345);
/// CTDI Phantom Type Code Sequence (0018,9346) SQ 1
#[rustfmt::skip]
pub const CTDI_PHANTOM_TYPE_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9346);
/// Calcium Scoring Mass Factor Patient (0018,9351) FL 1
#[rustfmt::skip]
pub const CALCIUM_SCORING_MASS_FACTOR_PATIENT: Tag = Tag(0x0018, 0x9351);
/// Calcium Scoring Mass Factor Device (0018,9352) FL 3
#[rustfmt::skip]
pub const CALCIUM_SCORING_MASS_FACTOR_DEVICE: Tag = Tag(0x0018, 0x9352);
/// Energy Weighting Factor (0018,9353) FL 1
#[rustfmt::skip]
pub const ENERGY_WEIGHTING_FACTOR: Tag = Tag(0x0018, 0x9353);
/// CT Additional X-Ray Source Sequence (0018,9360) SQ 1
#[rustfmt::skip]
pub const CT_ADDITIONAL_X_RAY_SOURCE_SEQUENCE: Tag = Tag(0x0018, 0x9360);
/// Projection Pixel Calibration Sequence (0018,9401) SQ 1
#[rustfmt::skip]
pub const PROJECTION_PIXEL_CALIBRATION_SEQUENCE: Tag = Tag(0x0018, 0x9401);
/// Distance Source to Isocenter (0018,9402) FL 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_ISOCENTER: Tag = Tag(0x0018, 0x9402);
/// Distance Object to Table Top (0018,9403) FL 1
#[rustfmt::skip]
pub const DISTANCE_OBJECT_TO_TABLE_TOP: Tag = Tag(0x0018, 0x9403);
/// Object Pixel Spacing in Center of Beam (0018,9404) FL 2
#[rustfmt::skip]
pub const OBJECT_PIXEL_SPACING_IN_CENTER_OF_BEAM: Tag = Tag(0x0018, 0x9404);
/// Positioner Position Sequence (0018,9405) SQ 1
#[rustfmt::skip]
pub const POSITIONER_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9405);
/// Table Position Sequence (0018,9406) SQ 1
#[rustfmt::skip]
pub const TABLE_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9406);
/// Collimator Shape Sequence (0018,9407) SQ 1
#[rustfmt::skip]
pub const COLLIMATOR_SHAPE_SEQUENCE: Tag = Tag(0x0018, 0x9407);
/// Planes in Acquisition (0018,9410) CS 1
#[rustfmt::skip]
pub const PLANES_IN_ACQUISITION: Tag = Tag(0x0018, 0x9410);
/// XA/XRF Frame Characteristics Sequence (0018,9412) SQ 1
#[rustfmt::skip]
pub const XAXRF_FRAME_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x0018, 0x9412);
/// Frame Acquisition Sequence (0018,9417) SQ 1
#[rustfmt::skip]
pub const FRAME_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9417);
/// X-Ray Receptor Type (0018,9420) CS 1
#[rustfmt::skip]
pub const X_RAY_RECEPTOR_TYPE: Tag = Tag(0x0018, 0x9420);
/// Acquisition Protocol Name (0018,9423) LO 1
#[rustfmt::skip]
pub const ACQUISITION_PROTOCOL_NAME: Tag = Tag(0x0018, 0x9423);
/// Acquisition Protocol Description (0018,9424) LT 1
#[rustfmt::skip]
pub const ACQUISITION_PROTOCOL_DESCRIPTION: Tag = Tag(0x0018, 0x9424);
/// Contrast/Bolus Ingredient Opaque (0018,9425) CS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_INGREDIENT_OPAQUE: Tag = Tag(0x0018, 0x9425);
/// Distance Receptor Plane to Detector Housing (0018,9426) FL 1
#[rustfmt::skip]
pub const DISTANCE_RECEPTOR_PLANE_TO_DETECTOR_HOUSING: Tag = Tag(0x0018, 0x9426);
/// Intensifier Active Shape (0018,9427) CS 1
#[rustfmt::skip]
pub const INTENSIFIER_ACTIVE_SHAPE: Tag = Tag(0x0018, 0x9427);
/// Intensifier Active Dimension(s) (0018,9428) FL 1-2
#[rustfmt::skip]
pub const INTENSIFIER_ACTIVE_DIMENSIONS: Tag = Tag(0x0018, 0x9428);
/// Physical Detector Size (0018,9429) FL 2
#[rustfmt::skip]
pub const PHYSICAL_DETECTOR_SIZE: Tag = Tag(0x0018, 0x9429);
/// Position of Isocenter Projection (0018,9430) FL 2
#[rustfmt::skip]
pub const POSITION_OF_ISOCENTER_PROJECTION: Tag = Tag(0x0018, 0x9430);
/// Field of View Sequence (0018,9432) SQ 1
#[rustfmt::skip]
pub const FIELD_OF_VIEW_SEQUENCE: Tag = Tag(0x0018, 0x9432);
/// Field of View Description (0018,9433) LO 1
#[rustfmt::skip]
pub const FIELD_OF_VIEW_DESCRIPTION: Tag = Tag(0x0018, 0x9433);
/// Exposure Control Sensing Regions Sequence (0018,9434) SQ 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGIONS_SEQUENCE: Tag = Tag(0x0018, 0x9434);
/// Exposure Control Sensing Region Shape (0018,9435) CS 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGION_SHAPE: Tag = Tag(0x0018, 0x9435);
/// Exposure Control Sensing Region Left Vertical Edge (0018,9436) SS 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGION_LEFT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x9436);
/// Exposure Control Sensing Region Right Vertical Edge (0018,9437) SS 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGION_RIGHT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x9437);
/// Exposure Control Sensing Region Upper Horizontal Edge (0018,9438) SS 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGION_UPPER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x9438);
/// Exposure Control Sensing Region Lower Horizontal Edge (0018,9439) SS 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGION_LOWER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x9439);
/// Center of Circular Exposure Control Sensing Region (0018,9440) SS 2
#[rustfmt::skip]
pub const CENTER_OF_CIRCULAR_EXPOSURE_CONTROL_SENSING_REGION: Tag = Tag(0x0018, 0x9440);
/// Radius of Circular Exposure Control Sensing Region (0018,9441) US 1
#[rustfmt::skip]
pub const RADIUS_OF_CIRCULAR_EXPOSURE_CONTROL_SENSING_REGION: Tag = Tag(0x0018, 0x9441);
/// Vertices of the Polygonal Exposure Control Sensing Region (0018,9442) SS 2-n
#[rustfmt::skip]
pub const VERTICES_OF_THE_POLYGONAL_EXPOSURE_CONTROL_SENSING_REGION: Tag = Tag(0x0018, 0x9442);
/// Column Angulation (Patient) (0018,9447) FL 1
#[rustfmt::skip]
pub const COLUMN_ANGULATION_PATIENT: Tag = Tag(0x0018, 0x9447);
/// Beam Angle (0018,9449) FL 1
#[rustfmt::skip]
pub const BEAM_ANGLE: Tag = Tag(0x0018, 0x9449);
/// Frame Detector Parameters Sequence (0018,9451) SQ 1
#[rustfmt::skip]
pub const FRAME_DETECTOR_PARAMETERS_SEQUENCE: Tag = Tag(0x0018, 0x9451);
/// Calculated Anatomy Thickness (0018,9452) FL 1
#[rustfmt::skip]
pub const CALCULATED_ANATOMY_THICKNESS: Tag = Tag(0x0018, 0x9452);
/// Calibration Sequence (0018,9455) SQ 1
#[rustfmt::skip]
pub const CALIBRATION_SEQUENCE: Tag = Tag(0x0018, 0x9455);
/// Object Thickness Sequence (0018,9456) SQ 1
#[rustfmt::skip]
pub const OBJECT_THICKNESS_SEQUENCE: Tag = Tag(0x0018, 0x9456);
/// Plane Identification (0018,9457) CS 1
#[rustfmt::skip]
pub const PLANE_IDENTIFICATION: Tag = Tag(0x0018, 0x9457);
/// Field of View Dimension(s) in Float (0018,9461) FL 1-2
#[rustfmt::skip]
pub const FIELD_OF_VIEW_DIMENSIONS_IN_FLOAT: Tag = Tag(0x0018, 0x9461);
/// Isocenter Reference System Sequence (0018,9462) SQ 1
#[rustfmt::skip]
pub const ISOCENTER_REFERENCE_SYSTEM_SEQUENCE: Tag = Tag(0x0018, 0x9462);
/// Positioner Isocenter Primary Angle (0018,9463) FL 1
#[rustfmt::skip]
pub const POSITIONER_ISOCENTER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x9463);
/// Positioner Isocenter Secondary Angle (0018,9464) FL 1
#[rustfmt::skip]
pub const POSITIONER_ISOCENTER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x9464);
/// Positioner Isocenter Detector Rotation Angle (0018,9465) FL 1
#[rustfmt::skip]
pub const POSITIONER_ISOCENTER_DETECTOR_ROTATION_ANGLE: Tag = Tag(0x0018, 0x9465);
/// Table X Position to Isocenter (0018,9466) FL 1
#[rustfmt::skip]
pub const TABLE_X_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9466);
/// Table Y Position to Isocenter (0018,9467) FL 1
#[rustfmt::skip]
pub const TABLE_Y_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9467);
/// Table Z Position to Isocenter (0018,9468) FL 1
#[rustfmt::skip]
pub const TABLE_Z_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9468);
/// Table Horizontal Rotation Angle (0018,9469) FL 1
#[rustfmt::skip]
pub const TABLE_HORIZONTAL_ROTATION_ANGLE: Tag = Tag(0x0018, 0x9469);
/// Table Head Tilt Angle (0018,9470) FL 1
#[rustfmt::skip]
pub const TABLE_HEAD_TILT_ANGLE: Tag = Tag(0x0018, 0x9470);
/// Table Cradle Tilt Angle (0018,9471) FL 1
#[rustfmt::skip]
pub const TABLE_CRADLE_TILT_ANGLE: Tag = Tag(0x0018, 0x9471);
/// Frame Display Shutter Sequence (0018,9472) SQ 1
#[rustfmt::skip]
pub const FRAME_DISPLAY_SHUTTER_SEQUENCE: Tag = Tag(0x0018, 0x9472);
/// Acquired Image Area Dose Product (0018,9473) FL 1
#[rustfmt::skip]
pub const ACQUIRED_IMAGE_AREA_DOSE_PRODUCT: Tag = Tag(0x0018, 0x9473);
/// C-arm Positioner Tabletop Relationship (0018,9474) CS 1
#[rustfmt::skip]
pub const C_ARM_POSITIONER_TABLETOP_RELATIONSHIP: Tag = Tag(0x0018, 0x9474);
/// X-Ray Geometry Sequence (0018,9476) SQ 1
#[rustfmt::skip]
pub const X_RAY_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9476);
/// Irradiation Event Identification Sequence (0018,9477) SQ 1
#[rustfmt::skip]
pub const IRRADIATION_EVENT_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0018, 0x9477);
/// X-Ray 3D Frame Type Sequence (0018,9504) SQ 1
#[rustfmt::skip]
pub const X_RAY3D_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9504);
/// Contributing Sources Sequence (0018,9506) SQ 1
#[rustfmt::skip]
pub const CONTRIBUTING_SOURCES_SEQUENCE: Tag = Tag(0x0018, 0x9506);
/// X-Ray 3D Acquisition Sequence (0018,9507) SQ 1
#[rustfmt::skip]
pub const X_RAY3D_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9507);
/// Primary Positioner Scan Arc (0018,9508) FL 1
#[rustfmt::skip]
pub const PRIMARY_POSITIONER_SCAN_ARC: Tag = Tag(0x0018, 0x9508);
/// Secondary Positioner Scan Arc (0018,9509) FL 1
#[rustfmt::skip]
pub const SECONDARY_POSITIONER_SCAN_ARC: Tag = Tag(0x0018, 0x9509);
/// Primary Positioner Scan Start Angle (0018,9510) FL 1
#[rustfmt::skip]
pub const PRIMARY_POSITIONER_SCAN_START_ANGLE: Tag = Tag(0x0018, 0x9510);
/// Secondary Positioner Scan Start Angle (0018,9511) FL 1
#[rustfmt::skip]
pub const SECONDARY_POSITIONER_SCAN_START_ANGLE: Tag = Tag(0x0018, 0x9511);
/// Primary Positioner Increment (0018,9514) FL 1
#[rustfmt::skip]
pub const PRIMARY_POSITIONER_INCREMENT: Tag = Tag(0x0018, 0x9514);
/// Secondary Positioner Increment (0018,9515) FL 1
#[rustfmt::skip]
pub const SECONDARY_POSITIONER_INCREMENT: Tag = Tag(0x0018, 0x9515);
/// Start Acquisition DateTime (0018,9516) DT 1
#[rustfmt::skip]
pub const START_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9516);
/// End Acquisition DateTime (0018,9517) DT 1
#[rustfmt::skip]
pub const END_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9517);
/// Primary Positioner Increment Sign (0018,9518) SS 1
#[rustfmt::skip]
pub const PRIMARY_POSITIONER_INCREMENT_SIGN: Tag = Tag(0x0018, 0x9518);
/// Secondary Positioner Increment Sign (0018,9519) SS 1
#[rustfmt::skip]
pub const SECONDARY_POSITIONER_INCREMENT_SIGN: Tag = Tag(0x0018, 0x9519);
/// Application Name (0018,9524) LO 1
#[rustfmt::skip]
pub const APPLICATION_NAME: Tag = Tag(0x0018, 0x9524);
/// Application Version (0018,9525) LO 1
#[rustfmt::skip]
pub const APPLICATION_VERSION: Tag = Tag(0x0018, 0x9525);
/// Application Manufacturer (0018,9526) LO 1
#[rustfmt::skip]
pub const APPLICATION_MANUFACTURER: Tag = Tag(0x0018, 0x9526);
/// Algorithm Type (0018,9527) CS 1
#[rustfmt::skip]
pub const ALGORITHM_TYPE: Tag = Tag(0x0018, 0x9527);
/// Algorithm Description (0018,9528) LO 1
#[rustfmt::skip]
pub const ALGORITHM_DESCRIPTION: Tag = Tag(0x0018, 0x9528);
/// X-Ray 3D Reconstruction Sequence (0018,9530) SQ 1
#[rustfmt::skip]
pub const X_RAY3D_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9530);
/// Reconstruction Description (0018,9531) LO 1
#[rustfmt::skip]
pub const RECONSTRUCTION_DESCRIPTION: Tag = Tag(0x0018, 0x9531);
/// Per Projection Acquisition Sequence (0018,9538) SQ 1
#[rustfmt::skip]
pub const PER_PROJECTION_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9538);
/// Detector Position Sequence (0018,9541) SQ 1
#[rustfmt::skip]
pub const DETECTOR_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9541);
/// X-Ray Acquisition Dose Sequence (0018,9542) SQ 1
#[rustfmt::skip]
pub const X_RAY_ACQUISITION_DOSE_SEQUENCE: Tag = Tag(0x0018, 0x9542);
/// X-Ray Source Isocenter Primary Angle (0018,9543) FD 1
#[rustfmt::skip]
pub const X_RAY_SOURCE_ISOCENTER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x9543);
/// X-Ray Source Isocenter Secondary Angle (0018,9544) FD 1
#[rustfmt::skip]
pub const X_RAY_SOURCE_ISOCENTER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x9544);
/// Breast Support Isocenter Primary Angle (0018,9545) FD 1
#[rustfmt::skip]
pub const BREAST_SUPPORT_ISOCENTER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x9545);
/// Breast Support Isocenter Secondary Angle (0018,9546) FD 1
#[rustfmt::skip]
pub const BREAST_SUPPORT_ISOCENTER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x9546);
/// Breast Support X Position to Isocenter (0018,9547) FD 1
#[rustfmt::skip]
pub const BREAST_SUPPORT_X_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9547);
/// Breast Support Y Position to Isocenter (0018,9548) FD 1
#[rustfmt::skip]
pub const BREAST_SUPPORT_Y_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9548);
/// Breast Support Z Position to Isocenter (0018,9549) FD 1
#[rustfmt::skip]
pub const BREAST_SUPPORT_Z_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9549);
/// Detector Isocenter Primary Angle (0018,9550) FD 1
#[rustfmt::skip]
pub const DETECTOR_ISOCENTER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x9550);
/// Detector Isocenter Secondary Angle (0018,9551) FD 1
#[rustfmt::skip]
pub const DETECTOR_ISOCENTER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x9551);
/// Detector X Position to Isocenter (0018,9552) FD 1
#[rustfmt::skip]
pub const DETECTOR_X_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9552);
/// Detector Y Position to Isocenter (0018,9553) FD 1
#[rustfmt::skip]
pub const DETECTOR_Y_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9553);
/// Detector Z Position to Isocenter (0018,9554) FD 1
#[rustfmt::skip]
pub const DETECTOR_Z_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9554);
/// X-Ray Grid Sequence (0018,9555) SQ 1
#[rustfmt::skip]
pub const X_RAY_GRID_SEQUENCE: Tag = Tag(0x0018, 0x9555);
/// X-Ray Filter Sequence (0018,9556) SQ 1
#[rustfmt::skip]
pub const X_RAY_FILTER_SEQUENCE: Tag = Tag(0x0018, 0x9556);
/// Detector Active Area TLHC Position (0018,9557) FD 3
#[rustfmt::skip]
pub const DETECTOR_ACTIVE_AREA_TLHC_POSITION: Tag = Tag(0x0018, 0x9557);
/// Detector Active Area Orientation (0018,9558) FD 6
#[rustfmt::skip]
pub const DETECTOR_ACTIVE_AREA_ORIENTATION: Tag = Tag(0x0018, 0x9558);
/// Positioner Primary Angle Direction (0018,9559) CS 1
#[rustfmt::skip]
pub const POSITIONER_PRIMARY_ANGLE_DIRECTION: Tag = Tag(0x0018, 0x9559);
/// Diffusion b-matrix Sequence (0018,9601) SQ 1
#[rustfmt::skip]
pub const DIFFUSION_B_MATRIX_SEQUENCE: Tag = Tag(0x0018, 0x9601);
/// Diffusion b-value XX (0018,9602) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE_XX: Tag = Tag(0x0018, 0x9602);
/// Diffusion b-value XY (0018,9603) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE_XY: Tag = Tag(0x0018, 0x9603);
/// Diffusion b-value XZ (0018,9604) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE_XZ: Tag = Tag(0x0018, 0x9604);
/// Diffusion b-value YY (0018,9605) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE_YY: Tag = Tag(0x0018, 0x9605);
/// Diffusion b-value YZ (0018,9606) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE_YZ: Tag = Tag(0x0018, 0x9606);
/// Diffusion b-value ZZ (0018,9607) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE_ZZ: Tag = Tag(0x0018, 0x9607);
/// Functional MR Sequence (0018,9621) SQ 1
#[rustfmt::skip]
pub const FUNCTIONAL_MR_SEQUENCE: Tag = Tag(0x0018, 0x9621);
/// Functional Settling Phase Frames Present (0018,9622) CS 1
#[rustfmt::skip]
pub const FUNCTIONAL_SETTLING_PHASE_FRAMES_PRESENT: Tag = Tag(0x0018, 0x9622);
/// Functional Sync Pulse (0018,9623) DT 1
#[rustfmt::skip]
pub const FUNCTIONAL_SYNC_PULSE: Tag = Tag(0x0018, 0x9623);
/// Settling Phase Frame (0018,9624) CS 1
#[rustfmt::skip]
pub const SETTLING_PHASE_FRAME: Tag = Tag(0x0018, 0x9624);
/// Decay Correction DateTime (0018,9701) DT 1
#[rustfmt::skip]
pub const DECAY_CORRECTION_DATE_TIME: Tag = Tag(0x0018, 0x9701);
/// Start Density Threshold (0018,9715) FD 1
#[rustfmt::skip]
pub const START_DENSITY_THRESHOLD: Tag = Tag(0x0018, 0x9715);
/// Start Relative Density Difference Threshold (0018,9716) FD 1
#[rustfmt::skip]
pub const START_RELATIVE_DENSITY_DIFFERENCE_THRESHOLD: Tag = Tag(0x0018, 0x9716);
/// Start Cardiac Trigger Count Threshold (0018,9717) FD 1
#[rustfmt::skip]
pub const START_CARDIAC_TRIGGER_COUNT_THRESHOLD: Tag = Tag(0x0018, 0x9717);
/// Start Respiratory Trigger Count Threshold (0018,9718) FD 1
#[rustfmt::skip]
pub const START_RESPIRATORY_TRIGGER_COUNT_THRESHOLD: Tag = Tag(0x0018, 0x9718);
/// Termination Counts Threshold (0018,9719) FD 1
#[rustfmt::skip]
pub const TERMINATION_COUNTS_THRESHOLD: Tag = Tag(0x0018, 0x9719);
/// Termination Density Threshold (0018,9720) FD 1
#[rustfmt::skip]
pub const TERMINATION_DENSITY_THRESHOLD: Tag = Tag(0x0018, 0x9720);
/// Termination Relative Density Threshold (0018,9721) FD 1
#[rustfmt::skip]
pub const TERMINATION_RELATIVE_DENSITY_THRESHOLD: Tag = Tag(0x0018, 0x9721);
/// Termination Time Threshold (0018,9722) FD 1
#[rustfmt::skip]
pub const TERMINATION_TIME_THRESHOLD: Tag = Tag(0x0018, 0x9722);
/// Termination Cardiac Trigger Count Threshold (0018,9723) FD 1
#[rustfmt::skip]
pub const TERMINATION_CARDIAC_TRIGGER_COUNT_THRESHOLD: Tag = Tag(0x0018, 0x9723);
/// Termination Respiratory Trigger Count Threshold (0018,9724) FD 1
#[rustfmt::skip]
pub const TERMINATION_RESPIRATORY_TRIGGER_COUNT_THRESHOLD: Tag = Tag(0x0018, 0x9724);
/// Detector Geometry (0018,9725) CS 1
#[rustfmt::skip]
pub const DETECTOR_GEOMETRY: Tag = Tag(0x0018, 0x9725);
/// Transverse Detector Separation (0018,9726) FD 1
#[rustfmt::skip]
pub const TRANSVERSE_DETECTOR_SEPARATION: Tag = Tag(0x0018, 0x9726);
/// Axial Detector Dimension (0018,9727) FD 1
#[rustfmt::skip]
pub const AXIAL_DETECTOR_DIMENSION: Tag = Tag(0x0018, 0x9727);
/// Radiopharmaceutical Agent Number (0018,9729) US 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_AGENT_NUMBER: Tag = Tag(0x0018, 0x9729);
/// PET Frame Acquisition Sequence (0018,9732) SQ 1
#[rustfmt::skip]
pub const PET_FRAME_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9732);
/// PET Detector Motion Details Sequence (0018,9733) SQ 1
#[rustfmt::skip]
pub const PET_DETECTOR_MOTION_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9733);
/// PET Table Dynamics Sequence (0018,9734) SQ 1
#[rustfmt::skip]
pub const PET_TABLE_DYNAMICS_SEQUENCE: Tag = Tag(0x0018, 0x9734);
/// PET Position Sequence (0018,9735) SQ 1
#[rustfmt::skip]
pub const PET_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9735);
/// PET Frame Correction Factors Sequence (0018,9736) SQ 1
#[rustfmt::skip]
pub const PET_FRAME_CORRECTION_FACTORS_SEQUENCE: Tag = Tag(0x0018, 0x9736);
/// Radiopharmaceutical Usage Sequence (0018,9737) SQ 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_USAGE_SEQUENCE: Tag = Tag(0x0018, 0x9737);
/// Attenuation Correction Source (0018,9738) CS 1
#[rustfmt::skip]
pub const ATTENUATION_CORRECTION_SOURCE: Tag = Tag(0x0018, 0x9738);
/// Number of Iterations (0018,9739) US 1
#[rustfmt::skip]
pub const NUMBER_OF_ITERATIONS: Tag = Tag(0x0018, 0x9739);
/// Number of Subsets (0018,9740) US 1
#[rustfmt::skip]
pub const NUMBER_OF_SUBSETS: Tag = Tag(0x0018, 0x9740);
/// PET Reconstruction Sequence (0018,9749) SQ 1
#[rustfmt::skip]
pub const PET_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9749);
/// PET Frame Type Sequence (0018,9751) SQ 1
#[rustfmt::skip]
pub const PET_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9751);
/// Time of Flight Information Used (0018,9755) CS 1
#[rustfmt::skip]
pub const TIME_OF_FLIGHT_INFORMATION_USED: Tag = Tag(0x0018, 0x9755);
/// Reconstruction Type (0018,9756) CS 1
#[rustfmt::skip]
pub const RECONSTRUCTION_TYPE: Tag = Tag(0x0018, 0x9756);
/// Decay Corrected (0018,9758) CS 1
#[rustfmt::skip]
pub const DECAY_CORRECTED: Tag = Tag(0x0018, 0x9758);
/// Attenuation Corrected (0018,9759) CS 1
#[rustfmt::skip]
pub const ATTENUATION_CORRECTED: Tag = Tag(0x0018, 0x9759);
/// Scatter Corrected (0018,9760) CS 1
#[rustfmt::skip]
pub const SCATTER_CORRECTED: Tag = Tag(0x0018, 0x9760);
/// Dead Time Corrected (0018,9761) CS 1
#[rustfmt::skip]
pub const DEAD_TIME_CORRECTED: Tag = Tag(0x0018, 0x9761);
/// Gantry Motion Corrected (0018,9762) CS 1
#[rustfmt::skip]
pub const GANTRY_MOTION_CORRECTED: Tag = Tag(0x0018, 0x9762);
/// Patient Motion Corrected (0018,9763) CS 1
#[rustfmt::skip]
pub const PATIENT_MOTION_CORRECTED: Tag = Tag(0x0018, 0x9763);
/// Count Loss Normalization Corrected (0018,9764) CS 1
#[rustfmt::skip]
pub const COUNT_LOSS_NORMALIZATION_CORRECTED: Tag = Tag(0x0018, 0x9764);
/// Randoms Corrected (0018,9765) CS 1
#[rustfmt::skip]
pub const RANDOMS_CORRECTED: Tag = Tag(0x0018, 0x9765);
/// Non-uniform Radial Sampling Corrected (0018,9766) CS 1
#[rustfmt::skip]
pub const NON_UNIFORM_RADIAL_SAMPLING_CORRECTED: Tag = Tag(0x0018, 0x9766);
/// Sensitivity Calibrated (0018,9767) CS 1
#[rustfmt::skip]
pub const SENSITIVITY_CALIBRATED: Tag = Tag(0x0018, 0x9767);
/// Detector Normalization Correction (0018,9768) CS 1
#[rustfmt::skip]
pub const DETECTOR_NORMALIZATION_CORRECTION: Tag = Tag(0x0018, 0x9768);
/// Iterative Reconstruction Method (0018,9769) CS 1
#[rustfmt::skip]
pub const ITERATIVE_RECONSTRUCTION_METHOD: Tag = Tag(0x0018, 0x9769);
/// Attenuation Correction Temporal Relationship (0018,9770) CS 1
#[rustfmt::skip]
pub const ATTENUATION_CORRECTION_TEMPORAL_RELATIONSHIP: Tag = Tag(0x0018, 0x9770);
/// Patient Physiological State Sequence (0018,9771) SQ 1
#[rustfmt::skip]
pub const PATIENT_PHYSIOLOGICAL_STATE_SEQUENCE: Tag = Tag(0x0018, 0x9771);
/// Patient Physiological State Code Sequence (0018,9772) SQ 1
#[rustfmt::skip]
pub const PATIENT_PHYSIOLOGICAL_STATE_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9772);
/// Depth(s) of Focus (0018,9801) FD 1-n
#[rustfmt::skip]
pub const DEPTHS_OF_FOCUS: Tag = Tag(0x0018, 0x9801);
/// Excluded Intervals Sequence (0018,9803) SQ 1
#[rustfmt::skip]
pub const EXCLUDED_INTERVALS_SEQUENCE: Tag = Tag(0x0018, 0x9803);
/// Exclusion Start DateTime (0018,9804) DT 1
#[rustfmt::skip]
pub const EXCLUSION_START_DATE_TIME: Tag = Tag(0x0018, 0x9804);
/// Exclusion Duration (0018,9805) FD 1
#[rustfmt::skip]
pub const EXCLUSION_DURATION: Tag = Tag(0x0018, 0x9805);
/// US Image Description Sequence (0018,9806) SQ 1
#[rustfmt::skip]
pub const US_IMAGE_DESCRIPTION_SEQUENCE: Tag = Tag(0x0018, 0x9806);
/// Image Data Type Sequence (0018,9807) SQ 1
#[rustfmt::skip]
pub const IMAGE_DATA_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9807);
/// Data Type (0018,9808) CS 1
#[rustfmt::skip]
pub const DATA_TYPE: Tag = Tag(0x0018, 0x9808);
/// Transducer Scan Pattern Code Sequence (0018,9809) SQ 1
#[rustfmt::skip]
pub const TRANSDUCER_SCAN_PATTERN_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9809);
/// Aliased Data Type (0018,980B) CS 1
#[rustfmt::skip]
pub const ALIASED_DATA_TYPE: Tag = Tag(0x0018, 0x980B);
/// Position Measuring Device Used (0018,980C) CS 1
#[rustfmt::skip]
pub const POSITION_MEASURING_DEVICE_USED: Tag = Tag(0x0018, 0x980C);
/// Transducer Geometry Code Sequence (0018,980D) SQ 1
#[rustfmt::skip]
pub const TRANSDUCER_GEOMETRY_CODE_SEQUENCE: Tag = Tag(0x0018, 0x980D);
/// Transducer Beam Steering Code Sequence (0018,980E) SQ 1
#[rustfmt::skip]
pub const TRANSDUCER_BEAM_STEERING_CODE_SEQUENCE: Tag = Tag(0x0018, 0x980E);
/// Transducer Application Code Sequence (0018,980F) SQ 1
#[rustfmt::skip]
pub const TRANSDUCER_APPLICATION_CODE_SEQUENCE: Tag = Tag(0x0018, 0x980F);
/// Zero Velocity Pixel Value (0018,9810) US or SS 1
#[rustfmt::skip]
pub const ZERO_VELOCITY_PIXEL_VALUE: Tag = Tag(0x0018, 0x9810);
/// Contributing Equipment Sequence (0018,A001) SQ 1
#[rustfmt::skip]
pub const CONTRIBUTING_EQUIPMENT_SEQUENCE: Tag = Tag(0x0018, 0xA001);
/// Contribution DateTime (0018,A002) DT 1
#[rustfmt::skip]
pub const CONTRIBUTION_DATE_TIME: Tag = Tag(0x0018, 0xA002);
/// Contribution Description (0018,A003) ST 1
#[rustfmt::skip]
pub const CONTRIBUTION_DESCRIPTION: Tag = Tag(0x0018, 0xA003);
/// Study Instance UID (0020,000D) UI 1
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// Series Instance UID (0020,000E) UI 1
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// Study ID (0020,0010) SH 1
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// Series Number (0020,0011) IS 1
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// Acquisition Number (0020,0012) IS 1
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// Instance Number (0020,0013) IS 1
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// Isotope Number (0020,0014) IS 1 (retired)
#[rustfmt::skip]
pub const ISOTOPE_NUMBER: Tag = Tag(0x0020, 0x0014);
/// Phase Number (0020,0015) IS 1 (retired)
#[rustfmt::skip]
pub const PHASE_NUMBER: Tag = Tag(0x0020, 0x0015);
/// Interval Number (0020,0016) IS 1 (retired)
#[rustfmt::skip]
pub const INTERVAL_NUMBER: Tag = Tag(0x0020, 0x0016);
/// Time Slot Number (0020,0017) IS 1 (retired)
#[rustfmt::skip]
pub const TIME_SLOT_NUMBER: Tag = Tag(0x0020, 0x0017);
/// Angle Number (0020,0018) IS 1 (retired)
#[rustfmt::skip]
pub const ANGLE_NUMBER: Tag = Tag(0x0020, 0x0018);
/// Item Number (0020,0019) IS 1
#[rustfmt::skip]
pub const ITEM_NUMBER: Tag = Tag(0x0020, 0x0019);
/// Patient Orientation (0020,0020) CS 2
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// Overlay Number (0020,0022) IS 1 (retired)
#[rustfmt::skip]
pub const OVERLAY_NUMBER: Tag = Tag(0x0020, 0x0022);
/// Curve Number (0020,0024) IS 1 (retired)
#[rustfmt::skip]
pub const CURVE_NUMBER: Tag = Tag(0x0020, 0x0024);
/// LUT Number (0020,0026) IS 1 (retired)
#[rustfmt::skip]
pub const LUT_NUMBER: Tag = Tag(0x0020, 0x0026);
/// Pyramid Label (0020,0027) LO 1
#[rustfmt::skip]
pub const PYRAMID_LABEL: Tag = Tag(0x0020, 0x0027);
/// Image Position (0020,0030) DS 3 (retired)
#[rustfmt::skip]
pub const IMAGE_POSITION: Tag = Tag(0x0020, 0x0030);
/// Image Position (Patient) (0020,0032) DS 3
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// Image Orientation (0020,0035) DS 6 (retired)
#[rustfmt::skip]
pub const IMAGE_ORIENTATION: Tag = Tag(0x0020, 0x0035);
/// Image Orientation (Patient) (0020,0037) DS 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// Location (0020,0050) DS 1 (retired)
#[rustfmt::skip]
pub const LOCATION: Tag = Tag(0x0020, 0x0050);
/// Frame of Reference UID (0020,0052) UI 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality (0020,0060) CS 1
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// Image Laterality (0020,0062) CS 1
#[rustfmt::skip]
pub const IMAGE_LATERALITY: Tag = Tag(0x0020, 0x0062);
/// Image Geometry Type (0020,0070) LO 1 (retired)
#[rustfmt::skip]
pub const IMAGE_GEOMETRY_TYPE: Tag = Tag(0x0020, 0x0070);
/// Masking Image (0020,0080) CS 1-n (retired)
#[rustfmt::skip]
pub const MASKING_IMAGE: Tag = Tag(0x0020, 0x0080);
/// Report Number (0020,00AA) IS 1 (retired)
#[rustfmt::skip]
pub const REPORT_NUMBER: Tag = Tag(0x0020, 0x00AA);
/// Temporal Position Identifier (0020,0100) IS 1
#[rustfmt::skip]
pub const TEMPORAL_POSITION_IDENTIFIER: Tag = Tag(0x0020, 0x0100);
/// Number of Temporal Positions (0020,0105) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_TEMPORAL_POSITIONS: Tag = Tag(0x0020, 0x0105);
/// Temporal Resolution (0020,0110) DS 1
#[rustfmt::skip]
pub const TEMPORAL_RESOLUTION: Tag = Tag(0x0020, 0x0110);
/// Synchronization Frame of Reference UID (0020,0200) UI 1
#[rustfmt::skip]
pub const SYNCHRONIZATION_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0200);
/// SOP Instance UID of Concatenation Source (0020,0242) UI 1
#[rustfmt::skip]
pub const SOP_INSTANCE_UID_OF_CONCATENATION_SOURCE: Tag = Tag(0x0020, 0x0242);
/// Series in Study (0020,1000) IS 1 (retired)
#[rustfmt::skip]
pub const SERIES_IN_STUDY: Tag = Tag(0x0020, 0x1000);
/// Acquisitions in Series (0020,1001) IS 1 (retired)
#[rustfmt::skip]
pub const ACQUISITIONS_IN_SERIES: Tag = Tag(0x0020, 0x1001);
/// Images in Acquisition (0020,1002) IS 1
#[rustfmt::skip]
pub const IMAGES_IN_ACQUISITION: Tag = Tag(0x0020, 0x1002);
/// Images in Series (0020,1003) IS 1 (retired)
#[rustfmt::skip]
pub const IMAGES_IN_SERIES: Tag = Tag(0x0020, 0x1003);
/// Acquisitions in Study (0020,1004) IS 1 (retired)
#[rustfmt::skip]
pub const ACQUISITIONS_IN_STUDY: Tag = Tag(0x0020, 0x1004);
/// Images in Study (0020,1005) IS 1 (retired)
#[rustfmt::skip]
pub const IMAGES_IN_STUDY: Tag = Tag(0x0020, 0x1005);
/// Reference (0020,1020) LO 1-n (retired)
#[rustfmt::skip]
pub const REFERENCE: Tag = Tag(0x0020, 0x1020);
/// Target Position Reference Indicator (0020,103F) LO 1
#[rustfmt::skip]
pub const TARGET_POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x103F);
/// Position Reference Indicator (0020,1040) LO 1
#[rustfmt::skip]
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// Slice Location (0020,1041) DS 1
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// Other Study Numbers (0020,1070) IS 1-n (retired)
#[rustfmt::skip]
pub const OTHER_STUDY_NUMBERS: Tag = Tag(0x0020, 0x1070);
/// Number of Patient Related Studies (0020,1200) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_PATIENT_RELATED_STUDIES: Tag = Tag(0x0020, 0x1200);
/// Number of Patient Related Series (0020,1202) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_PATIENT_RELATED_SERIES: Tag = Tag(0x0020, 0x1202);
/// Number of Patient Related Instances (0020,1204) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_PATIENT_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1204);
/// Number of Study Related Series (0020,1206) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_SERIES: Tag = Tag(0x0020, 0x1206);
/// Number of Study Related Instances (0020,1208) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1208);
/// Number of Series Related Instances (0020,1209) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_SERIES_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1209);
/// Source Image IDs (0020,31xx) CS 1-n (retired)
#[rustfmt::skip]
pub const SOURCE_IMAGE_I_DS: Tag = Tag(0x0020, 0x3100);
/// Modifying Device ID (0020,3401) CS 1 (retired)
#[rustfmt::skip]
pub const MODIFYING_DEVICE_ID: Tag = Tag(0x0020, 0x3401);
/// Modified Image ID (0020,3402) CS 1 (retired)
#[rustfmt::skip]
pub const MODIFIED_IMAGE_ID: Tag = Tag(0x0020, 0x3402);
/// Modified Image Date (0020,3403) DA 1 (retired)
#[rustfmt::skip]
pub const MODIFIED_IMAGE_DATE: Tag = Tag(0x0020, 0x3403);
/// Modifying Device Manufacturer (0020,3404) LO 1 (retired)
#[rustfmt::skip]
pub const MODIFYING_DEVICE_MANUFACTURER: Tag = Tag(0x0020, 0x3404);
/// Modified Image Time (0020,3405) TM 1 (retired)
#[rustfmt::skip]
pub const MODIFIED_IMAGE_TIME: Tag = Tag(0x0020, 0x3405);
/// Modified Image Description (0020,3406) LO 1 (retired)
#[rustfmt::skip]
pub const MODIFIED_IMAGE_DESCRIPTION: Tag = Tag(0x0020, 0x3406);
/// Image Comments (0020,4000) LT 1
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// Original Image Identification (0020,5000) AT 1-n (retired)
#[rustfmt::skip]
pub const ORIGINAL_IMAGE_IDENTIFICATION: Tag = Tag(0x0020, 0x5000);
/// Original Image Identification Nomenclature (0020,5002) LO 1-n (retired)
#[rustfmt::skip]
pub const ORIGINAL_IMAGE_IDENTIFICATION_NOMENCLATURE: Tag = Tag(0x0020, 0x5002);
/// Stack ID (0020,9056) SH 1
#[rustfmt::skip]
pub const STACK_ID: Tag = Tag(0x0020, 0x9056);
/// In-Stack Position Number (0020,9057) UL 1
#[rustfmt::skip]
pub const IN_STACK_POSITION_NUMBER: Tag = Tag(0x0020, 0x9057);
/// Frame Content Sequence (0020,9111) SQ 1
#[rustfmt::skip]
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0020, 0x9111);
/// Plane Position Sequence (0020,9113) SQ 1
#[rustfmt::skip]
pub const PLANE_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9113);
/// Plane Orientation Sequence (0020,9116) SQ 1
#[rustfmt::skip]
pub const PLANE_ORIENTATION_SEQUENCE: Tag = Tag(0x0020, 0x9116);
/// Temporal Position Index (0020,9128) UL 1
#[rustfmt::skip]
pub const TEMPORAL_POSITION_INDEX: Tag = Tag(0x0020, 0x9128);
/// Nominal Cardiac Trigger Delay Time (0020,9153) FD 1
#[rustfmt::skip]
pub const NOMINAL_CARDIAC_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9153);
/// Nominal Cardiac Trigger Time Prior To R-Peak (0020,9154) FL 1
#[rustfmt::skip]
pub const NOMINAL_CARDIAC_TRIGGER_TIME_PRIOR_TO_R_PEAK: Tag = Tag(0x0020, 0x9154);
/// Actual Cardiac Trigger Time Prior To R-Peak (0020,9155) FL 1
#[rustfmt::skip]
pub const ACTUAL_CARDIAC_TRIGGER_TIME_PRIOR_TO_R_PEAK: Tag = Tag(0x0020, 0x9155);
/// Frame Acquisition Number (0020,9156) US 1
#[rustfmt::skip]
pub const FRAME_ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x9156);
/// Dimension Index Values (0020,9157) UL 1-n
#[rustfmt::skip]
pub const DIMENSION_INDEX_VALUES: Tag = Tag(0x0020, 0x9157);
/// Frame Comments (0020,9158) LT 1
#[rustfmt::skip]
pub const FRAME_COMMENTS: Tag = Tag(0x0020, 0x9158);
/// Concatenation UID (0020,9161) UI 1
#[rustfmt::skip]
pub const CONCATENATION_UID: Tag = Tag(0x0020, 0x9161);
/// In-concatenation Number (0020,9162) US 1
#[rustfmt::skip]
pub const IN_CONCATENATION_NUMBER: Tag = Tag(0x0020, 0x9162);
/// In-concatenation Total Number (0020,9163) US 1
#[rustfmt::skip]
pub const IN_CONCATENATION_TOTAL_NUMBER: Tag = Tag(0x0020, 0x9163);
/// Dimension Organization UID (0020,9164) UI 1
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_UID: Tag = Tag(0x0020, 0x9164);
/// Dimension Index Pointer (0020,9165) AT 1
#[rustfmt::skip]
pub const DIMENSION_INDEX_POINTER: Tag = Tag(0x0020, 0x9165);
/// Functional Group Pointer (0020,9167) AT 1
#[rustfmt::skip]
pub const FUNCTIONAL_GROUP_POINTER: Tag = Tag(0x0020, 0x9167);
/// Unassigned Shared Converted Attributes Sequence (0020,9170) SQ 1
#[rustfmt::skip]
pub const UNASSIGNED_SHARED_CONVERTED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0020, 0x9170);
/// Unassigned Per-Frame Converted Attributes Sequence (0020,9171) SQ 1
#[rustfmt::skip]
pub const UNASSIGNED_PER_FRAME_CONVERTED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0020, 0x9171);
/// Conversion Source Attributes Sequence (0020,9172) SQ 1
#[rustfmt::skip]
pub const CONVERSION_SOURCE_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0020, 0x9172);
/// Dimension Index Private Creator (0020,9213) LO 1
#[rustfmt::skip]
pub const DIMENSION_INDEX_PRIVATE_CREATOR: Tag = Tag(0x0020, 0x9213);
/// Dimension Organization Sequence (0020,9221) SQ 1
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9221);
/// Dimension Index Sequence (0020,9222) SQ 1
#[rustfmt::skip]
pub const DIMENSION_INDEX_SEQUENCE: Tag = Tag(0x0020, 0x9222);
/// Concatenation Frame Offset Number (0020,9228) UL 1
#[rustfmt::skip]
pub const CONCATENATION_FRAME_OFFSET_NUMBER: Tag = Tag(0x0020, 0x9228);
/// Functional Group Private Creator (0020,9238) LO 1
#[rustfmt::skip]
pub const FUNCTIONAL_GROUP_PRIVATE_CREATOR: Tag = Tag(0x0020, 0x9238);
/// Nominal Percentage of Cardiac Phase (0020,9241) FL 1
#[rustfmt::skip]
pub const NOMINAL_PERCENTAGE_OF_CARDIAC_PHASE: Tag = Tag(0x0020, 0x9241);
/// Nominal Percentage of Respiratory Phase (0020,9245) FL 1
#[rustfmt::skip]
pub const NOMINAL_PERCENTAGE_OF_RESPIRATORY_PHASE: Tag = Tag(0x0020, 0x9245);
/// Starting Respiratory Amplitude (0020,9246) FL 1
#[rustfmt::skip]
pub const STARTING_RESPIRATORY_AMPLITUDE: Tag = Tag(0x0020, 0x9246);
/// Starting Respiratory Phase (0020,9247) CS 1
#[rustfmt::skip]
pub const STARTING_RESPIRATORY_PHASE: Tag = Tag(0x0020, 0x9247);
/// Ending Respiratory Amplitude (0020,9248) FL 1
#[rustfmt::skip]
pub const ENDING_RESPIRATORY_AMPLITUDE: Tag = Tag(0x0020, 0x9248);
/// Ending Respiratory Phase (0020,9249) CS 1
#[rustfmt::skip]
pub const ENDING_RESPIRATORY_PHASE: Tag = Tag(0x0020, 0x9249);
/// Respiratory Trigger Type (0020,9250) CS 1
#[rustfmt::skip]
pub const RESPIRATORY_TRIGGER_TYPE: Tag = Tag(0x0020, 0x9250);
/// R-R Interval Time Nominal (0020,9251) FD 1
#[rustfmt::skip]
pub const RR_INTERVAL_TIME_NOMINAL: Tag = Tag(0x0020, 0x9251);
/// Actual Cardiac Trigger Delay Time (0020,9252) FD 1
#[rustfmt::skip]
pub const ACTUAL_CARDIAC_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9252);
/// Respiratory Synchronization Sequence (0020,9253) SQ 1
#[rustfmt::skip]
pub const RESPIRATORY_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9253);
/// Respiratory Interval Time (0020,9254) FD 1
#[rustfmt::skip]
pub const RESPIRATORY_INTERVAL_TIME: Tag = Tag(0x0020, 0x9254);
/// Nominal Respiratory Trigger Delay Time (0020,9255) FD 1
#[rustfmt::skip]
pub const NOMINAL_RESPIRATORY_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9255);
/// Respiratory Trigger Delay Threshold (0020,9256) FD 1
#[rustfmt::skip]
pub const RESPIRATORY_TRIGGER_DELAY_THRESHOLD: Tag = Tag(0x0020, 0x9256);
/// Actual Respiratory Trigger Delay Time (0020,9257) FD 1
#[rustfmt::skip]
pub const ACTUAL_RESPIRATORY_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9257);
/// Image Position (Volume) (0020,9301) FD 3
#[rustfmt::skip]
pub const IMAGE_POSITION_VOLUME: Tag = Tag(0x0020, 0x9301);
/// Image Orientation (Volume) (0020,9302) FD 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_VOLUME: Tag = Tag(0x0020, 0x9302);
/// Ultrasound Acquisition Geometry (0020,9307) CS 1
#[rustfmt::skip]
pub const ULTRASOUND_ACQUISITION_GEOMETRY: Tag = Tag(0x0020, 0x9307);
/// Apex Position (0020,9308) FD 3
#[rustfmt::skip]
pub const APEX_POSITION: Tag = Tag(0x0020, 0x9308);
/// Volume to Transducer Mapping Matrix (0020,9309) FD 16
#[rustfmt::skip]
pub const VOLUME_TO_TRANSDUCER_MAPPING_MATRIX: Tag = Tag(0x0020, 0x9309);
/// Volume to Table Mapping Matrix (0020,930A) FD 16
#[rustfmt::skip]
pub const VOLUME_TO_TABLE_MAPPING_MATRIX: Tag = Tag(0x0020, 0x930A);
/// Volume to Transducer Relationship (0020,930B) CS 1
#[rustfmt::skip]
pub const VOLUME_TO_TRANSDUCER_RELATIONSHIP: Tag = Tag(0x0020, 0x930B);
/// Patient Frame of Reference Source (0020,930C) CS 1
#[rustfmt::skip]
pub const PATIENT_FRAME_OF_REFERENCE_SOURCE: Tag = Tag(0x0020, 0x930C);
/// Temporal Position Time Offset (0020,930D) FD 1
#[rustfmt::skip]
pub const TEMPORAL_POSITION_TIME_OFFSET: Tag = Tag(0x0020, 0x930D);
/// Plane Position (Volume) Sequence (0020,930E) SQ 1
#[rustfmt::skip]
pub const PLANE_POSITION_VOLUME_SEQUENCE: Tag = Tag(0x0020, 0x930E);
/// Plane Orientation (Volume) Sequence (0020,930F) SQ 1
#[rustfmt::skip]
pub const PLANE_ORIENTATION_VOLUME_SEQUENCE: Tag = Tag(0x0020, 0x930F);
/// Temporal Position Sequence (0020,9310) SQ 1
#[rustfmt::skip]
pub const TEMPORAL_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9310);
/// Dimension Organization Type (0020,9311) CS 1
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_TYPE: Tag = Tag(0x0020, 0x9311);
/// Volume Frame of Reference UID (0020,9312) UI 1
#[rustfmt::skip]
pub const VOLUME_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x9312);
/// Table Frame of Reference UID (0020,9313) UI 1
#[rustfmt::skip]
pub const TABLE_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x9313);
/// Dimension Description Label (0020,9421) LO 1
#[rustfmt::skip]
pub const DIMENSION_DESCRIPTION_LABEL: Tag = Tag(0x0020, 0x9421);
/// Patient Orientation in Frame Sequence (0020,9450) SQ 1
#[rustfmt::skip]
pub const PATIENT_ORIENTATION_IN_FRAME_SEQUENCE: Tag = Tag(0x0020, 0x9450);
/// Frame Label (0020,9453) LO 1
#[rustfmt::skip]
pub const FRAME_LABEL: Tag = Tag(0x0020, 0x9453);
/// Acquisition Index (0020,9518) US 1-n
#[rustfmt::skip]
pub const ACQUISITION_INDEX: Tag = Tag(0x0020, 0x9518);
/// Contributing SOP Instances Reference Sequence (0020,9529) SQ 1
#[rustfmt::skip]
pub const CONTRIBUTING_SOP_INSTANCES_REFERENCE_SEQUENCE: Tag = Tag(0x0020, 0x9529);
/// Reconstruction Index (0020,9536) US 1
#[rustfmt::skip]
pub const RECONSTRUCTION_INDEX: Tag = Tag(0x0020, 0x9536);
/// Light Path Filter Pass-Through Wavelength (0022,0001) US 1
#[rustfmt::skip]
pub const LIGHT_PATH_FILTER_PASS_THROUGH_WAVELENGTH: Tag = Tag(0x0022, 0x0001);
/// Light Path Filter Pass Band (0022,0002) US 2
#[rustfmt::skip]
pub const LIGHT_PATH_FILTER_PASS_BAND: Tag = Tag(0x0022, 0x0002);
/// Image Path Filter Pass-Through Wavelength (0022,0003) US 1
#[rustfmt::skip]
pub const IMAGE_PATH_FILTER_PASS_THROUGH_WAVELENGTH: Tag = Tag(0x0022, 0x0003);
/// Image Path Filter Pass Band (0022,0004) US 2
#[rustfmt::skip]
pub const IMAGE_PATH_FILTER_PASS_BAND: Tag = Tag(0x0022, 0x0004);
/// Patient Eye Movement Commanded (0022,0005) CS 1
#[rustfmt::skip]
pub const PATIENT_EYE_MOVEMENT_COMMANDED: Tag = Tag(0x0022, 0x0005);
/// Patient Eye Movement Command Code Sequence (0022,0006) SQ 1
#[rustfmt::skip]
pub const PATIENT_EYE_MOVEMENT_COMMAND_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0006);
/// Spherical Lens Power (0022,0007) FL 1
#[rustfmt::skip]
pub const SPHERICAL_LENS_POWER: Tag = Tag(0x0022, 0x0007);
/// Cylinder Lens Power (0022,0008) FL 1
#[rustfmt::skip]
pub const CYLINDER_LENS_POWER: Tag = Tag(0x0022, 0x0008);
/// Cylinder Axis (0022,0009) FL 1
#[rustfmt::skip]
pub const CYLINDER_AXIS: Tag = Tag(0x0022, 0x0009);
/// Emmetropic Magnification (0022,000A) FL 1
#[rustfmt::skip]
pub const EMMETROPIC_MAGNIFICATION: Tag = Tag(0x0022, 0x000A);
/// Intra Ocular Pressure (0022,000B) FL 1
#[rustfmt::skip]
pub const INTRA_OCULAR_PRESSURE: Tag = Tag(0x0022, 0x000B);
/// Horizontal Field of View (0022,000C) FL 1
#[rustfmt::skip]
pub const HORIZONTAL_FIELD_OF_VIEW: Tag = Tag(0x0022, 0x000C);
/// Pupil Dilated (0022,000D) CS 1
#[rustfmt::skip]
pub const PUPIL_DILATED: Tag = Tag(0x0022, 0x000D);
/// Degree of Dilation (0022,000E) FL 1
#[rustfmt::skip]
pub const DEGREE_OF_DILATION: Tag = Tag(0x0022, 0x000E);
/// Stereo Baseline Angle (0022,0010) FL 1
#[rustfmt::skip]
pub const STEREO_BASELINE_ANGLE: Tag = Tag(0x0022, 0x0010);
/// Stereo Baseline Displacement (0022,0011) FL 1
#[rustfmt::skip]
pub const STEREO_BASELINE_DISPLACEMENT: Tag = Tag(0x0022, 0x0011);
/// Stereo Horizontal Pixel Offset (0022,0012) FL 1
#[rustfmt::skip]
pub const STEREO_HORIZONTAL_PIXEL_OFFSET: Tag = Tag(0x0022, 0x0012);
/// Stereo Vertical Pixel Offset (0022,0013) FL 1
#[rustfmt::skip]
pub const STEREO_VERTICAL_PIXEL_OFFSET: Tag = Tag(0x0022, 0x0013);
/// Stereo Rotation (0022,0014) FL 1
#[rustfmt::skip]
pub const STEREO_ROTATION: Tag = Tag(0x0022, 0x0014);
/// Acquisition Device Type Code Sequence (0022,0015) SQ 1
#[rustfmt::skip]
pub const ACQUISITION_DEVICE_TYPE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0015);
/// Illumination Type Code Sequence (0022,0016) SQ 1
#[rustfmt::skip]
pub const ILLUMINATION_TYPE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0016);
/// Light Path Filter Type Stack Code Sequence (0022,0017) SQ 1
#[rustfmt::skip]
pub const LIGHT_PATH_FILTER_TYPE_STACK_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0017);
/// Image Path Filter Type Stack Code Sequence (0022,0018) SQ 1
#[rustfmt::skip]
pub const IMAGE_PATH_FILTER_TYPE_STACK_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0018);
/// Lenses Code Sequence (0022,0019) SQ 1
#[rustfmt::skip]
pub const LENSES_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0019);
/// Channel Description Code Sequence (0022,001A) SQ 1
#[rustfmt::skip]
pub const CHANNEL_DESCRIPTION_CODE_SEQUENCE: Tag = Tag(0x0022, 0x001A);
/// Refractive State Sequence (0022,001B) SQ 1
#[rustfmt::skip]
pub const REFRACTIVE_STATE_SEQUENCE: Tag = Tag(0x0022, 0x001B);
/// Mydriatic Agent Code Sequence (0022,001C) SQ 1
#[rustfmt::skip]
pub const MYDRIATIC_AGENT_CODE_SEQUENCE: Tag = Tag(0x0022, 0x001C);
/// Relative Image Position Code Sequence (0022,001D) SQ 1
#[rustfmt::skip]
pub const RELATIVE_IMAGE_POSITION_CODE_SEQUENCE: Tag = Tag(0x0022, 0x001D);
/// Camera Angle of View (0022,001E) FL 1
#[rustfmt::skip]
pub const CAMERA_ANGLE_OF_VIEW: Tag = Tag(0x0022, 0x001E);
/// Stereo Pairs Sequence (0022,0020) SQ 1
#[rustfmt::skip]
pub const STEREO_PAIRS_SEQUENCE: Tag = Tag(0x0022, 0x0020);
/// Left Image Sequence (0022,0021) SQ 1
#[rustfmt::skip]
pub const LEFT_IMAGE_SEQUENCE: Tag = Tag(0x0022, 0x0021);
/// Right Image Sequence (0022,0022) SQ 1
#[rustfmt::skip]
pub const RIGHT_IMAGE_SEQUENCE: Tag = Tag(0x0022, 0x0022);
/// Axial Length of the Eye (0022,0030) FL 1
#[rustfmt::skip]
pub const AXIAL_LENGTH_OF_THE_EYE: Tag = Tag(0x0022, 0x0030);
/// Ophthalmic Frame Location Sequence (0022,0031) SQ 1
#[rustfmt::skip]
pub const OPHTHALMIC_FRAME_LOCATION_SEQUENCE: Tag = Tag(0x0022, 0x0031);
/// Reference Coordinates (0022,0032) FL 2-2n
#[rustfmt::skip]
pub const REFERENCE_COORDINATES: Tag = Tag(0x0022, 0x0032);
/// Depth Spatial Resolution (0022,0035) FL 1
#[rustfmt::skip]
pub const DEPTH_SPATIAL_RESOLUTION: Tag = Tag(0x0022, 0x0035);
/// Maximum Depth Distortion (0022,0036) FL 1
#[rustfmt::skip]
pub const MAXIMUM_DEPTH_DISTORTION: Tag = Tag(0x0022, 0x0036);
/// Along-scan Spatial Resolution (0022,0037) FL 1
#[rustfmt::skip]
pub const ALONG_SCAN_SPATIAL_RESOLUTION: Tag = Tag(0x0022, 0x0037);
/// Maximum Along-scan Distortion (0022,0038) FL 1
#[rustfmt::skip]
pub const MAXIMUM_ALONG_SCAN_DISTORTION: Tag = Tag(0x0022, 0x0038);
/// Ophthalmic Image Orientation (0022,0039) CS 1
#[rustfmt::skip]
pub const OPHTHALMIC_IMAGE_ORIENTATION: Tag = Tag(0x0022, 0x0039);
/// Depth of Transverse Image (0022,0041) FL 1
#[rustfmt::skip]
pub const DEPTH_OF_TRANSVERSE_IMAGE: Tag = Tag(0x0022, 0x0041);
/// Mydriatic Agent Concentration Units Sequence (0022,0042) SQ 1
#[rustfmt::skip]
pub const MYDRIATIC_AGENT_CONCENTRATION_UNITS_SEQUENCE: Tag = Tag(0x0022, 0x0042);
/// Across-scan Spatial Resolution (0022,0048) FL 1
#[rustfmt::skip]
pub const ACROSS_SCAN_SPATIAL_RESOLUTION: Tag = Tag(0x0022, 0x0048);
/// Maximum Across-scan Distortion (0022,0049) FL 1
#[rustfmt::skip]
pub const MAXIMUM_ACROSS_SCAN_DISTORTION: Tag = Tag(0x0022, 0x0049);
/// Mydriatic Agent Concentration (0022,004E) DS 1
#[rustfmt::skip]
pub const MYDRIATIC_AGENT_CONCENTRATION: Tag = Tag(0x0022, 0x004E);
/// Illumination Wave Length (0022,0055) FL 1
#[rustfmt::skip]
pub const ILLUMINATION_WAVE_LENGTH: Tag = Tag(0x0022, 0x0055);
/// Illumination Power (0022,0056) FL 1
#[rustfmt::skip]
pub const ILLUMINATION_POWER: Tag = Tag(0x0022, 0x0056);
/// Illumination Bandwidth (0022,0057) FL 1
#[rustfmt::skip]
pub const ILLUMINATION_BANDWIDTH: Tag = Tag(0x0022, 0x0057);
/// Mydriatic Agent Sequence (0022,0058) SQ 1
#[rustfmt::skip]
pub const MYDRIATIC_AGENT_SEQUENCE: Tag = Tag(0x0022, 0x0058);
/// Samples per Pixel (0028,0002) US 1
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// Samples per Pixel Used (0028,0003) US 1
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL_USED: Tag = Tag(0x0028, 0x0003);
/// Photometric Interpretation (0028,0004) CS 1
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// Image Dimensions (0028,0005) US 1 (retired)
#[rustfmt::skip]
pub const IMAGE_DIMENSIONS: Tag = Tag(0x0028, 0x0005);
/// Planar Configuration (0028,0006) US 1
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// Frame Dimension Pointer (Retired) (0028,0007) US 1 (retired)
#[rustfmt::skip]
pub const FRAME_DIMENSION_POINTER_RETIRED: Tag = Tag(0x0028, 0x0007);
/// Number of Frames (0028,0008) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Frame Increment Pointer (0028,0009) AT 1-n
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Frame Dimension Pointer (0028,000A) AT 1-n
#[rustfmt::skip]
pub const FRAME_DIMENSION_POINTER: Tag = Tag(0x0028, 0x000A);
/// Frame Dimension Pointer (Trial) (0028,000B) AT 1-n (retired)
#[rustfmt::skip]
pub const FRAME_DIMENSION_POINTER_TRIAL: Tag = Tag(0x0028, 0x000B);
/// Rows (0028,0010) US 1
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US 1
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Planes (0028,0012) US 1 (retired)
#[rustfmt::skip]
pub const PLANES: Tag = Tag(0x0028, 0x0012);
/// Ultrasound Color Data Present (0028,0014) US 1
#[rustfmt::skip]
pub const ULTRASOUND_COLOR_DATA_PRESENT: Tag = Tag(0x0028, 0x0014);
/// Sub-sampling Interval (0028,0020) LO 1 (retired)
#[rustfmt::skip]
pub const SUBSAMPLING_INTERVAL: Tag = Tag(0x0028, 0x0020);
/// Pixel Spacing (0028,0030) DS 2
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// Zoom Factor (0028,0031) DS 2
#[rustfmt::skip]
pub const ZOOM_FACTOR: Tag = Tag(0x0028, 0x0031);
/// Zoom Center (0028,0032) DS 2
#[rustfmt::skip]
pub const ZOOM_CENTER: Tag = Tag(0x0028, 0x0032);
/// Pixel Aspect Ratio (0028,0034) IS 2
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// Image Dimensions (Retired) (0028,0035) US 2 (retired)
#[rustfmt::skip]
pub const IMAGE_DIMENSIONS_RETIRED: Tag = Tag(0x0028, 0x0035);
/// Image Format (0028,0040) CS 1 (retired)
#[rustfmt::skip]
pub const IMAGE_FORMAT: Tag = Tag(0x0028, 0x0040);
/// Manipulated Image (0028,0050) LO 1-n (retired)
#[rustfmt::skip]
pub const MANIPULATED_IMAGE: Tag = Tag(0x0028, 0x0050);
/// Corrected Image (0028,0051) CS 1-n
#[rustfmt::skip]
pub const CORRECTED_IMAGE: Tag = Tag(0x0028, 0x0051);
/// Pixel Spacing Calibration Type (0028,0052) CS 1
#[rustfmt::skip]
pub const PIXEL_SPACING_CALIBRATION_TYPE: Tag = Tag(0x0028, 0x0052);
/// Pixel Spacing Calibration Description (0028,0053) LO 1
#[rustfmt::skip]
pub const PIXEL_SPACING_CALIBRATION_DESCRIPTION: Tag = Tag(0x0028, 0x0053);
/// Compression Recognition Code (0028,005F) LO 1 (retired)
#[rustfmt::skip]
pub const COMPRESSION_RECOGNITION_CODE: Tag = Tag(0x0028, 0x005F);
/// Compression Code (0028,0060) CS 1 (retired)
#[rustfmt::skip]
pub const COMPRESSION_CODE: Tag = Tag(0x0028, 0x0060);
/// Compression Originator (0028,0065) CS 1-n (retired)
#[rustfmt::skip]
pub const COMPRESSION_ORIGINATOR: Tag = Tag(0x0028, 0x0065);
/// Compression Label (0028,0066) LO 1 (retired)
#[rustfmt::skip]
pub const COMPRESSION_LABEL: Tag = Tag(0x0028, 0x0066);
/// Compression Description (0028,0068) SH 1 (retired)
#[rustfmt::skip]
pub const COMPRESSION_DESCRIPTION: Tag = Tag(0x0028, 0x0068);
/// Compression Sequence (0028,0069) CS 1-n (retired)
#[rustfmt::skip]
pub const COMPRESSION_SEQUENCE: Tag = Tag(0x0028, 0x0069);
/// Compression Step Pointers (0028,0070) AT 1-n (retired)
#[rustfmt::skip]
pub const COMPRESSION_STEP_POINTERS: Tag = Tag(0x0028, 0x0070);
/// Repeat Interval (0028,0080) US 1 (retired)
#[rustfmt::skip]
pub const REPEAT_INTERVAL: Tag = Tag(0x0028, 0x0080);
/// Bits Grouped (0028,0081) US 1 (retired)
#[rustfmt::skip]
pub const BITS_GROUPED: Tag = Tag(0x0028, 0x0081);
/// Perimeter Table (0028,0090) US 1-n (retired)
#[rustfmt::skip]
pub const PERIMETER_TABLE: Tag = Tag(0x0028, 0x0090);
/// Perimeter Value (0028,0091) US or SS 1 (retired)
#[rustfmt::skip]
pub const PERIMETER_VALUE: Tag = Tag(0x0028, 0x0091);
/// Predictor Rows (0028,00A0) US 1 (retired)
#[rustfmt::skip]
pub const PREDICTOR_ROWS: Tag = Tag(0x0028, 0x00A0);
/// Predictor Columns (0028,00A1) US 1 (retired)
#[rustfmt::skip]
pub const PREDICTOR_COLUMNS: Tag = Tag(0x0028, 0x00A1);
/// Predictor Constants (0028,00A2) US 1-n (retired)
#[rustfmt::skip]
pub const PREDICTOR_CONSTANTS: Tag = Tag(0x0028, 0x00A2);
/// Blocked Pixels (0028,00B0) CS 1 (retired)
#[rustfmt::skip]
pub const BLOCKED_PIXELS: Tag = Tag(0x0028, 0x00B0);
/// Block Rows (0028,00B1) US 1 (retired)
#[rustfmt::skip]
pub const BLOCK_ROWS: Tag = Tag(0x0028, 0x00B1);
/// Block Columns (0028,00B2) US 1 (retired)
#[rustfmt::skip]
pub const BLOCK_COLUMNS: Tag = Tag(0x0028, 0x00B2);
/// Row Overlap (0028,00C0) US 1 (retired)
#[rustfmt::skip]
pub const ROW_OVERLAP: Tag = Tag(0x0028, 0x00C0);
/// Column Overlap (0028,00C1) US 1 (retired)
#[rustfmt::skip]
pub const COLUMN_OVERLAP: Tag = Tag(0x0028, 0x00C1);
/// Bits Allocated (0028,0100) US 1
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// Bits Stored (0028,0101) US 1
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// High Bit (0028,0102) US 1
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// Pixel Representation (0028,0103) US 1
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// Smallest Valid Pixel Value (0028,0104) US or SS 1 (retired)
#[rustfmt::skip]
pub const SMALLEST_VALID_PIXEL_VALUE: Tag = Tag(0x0028, 0x0104);
/// Largest Valid Pixel Value (0028,0105) US or SS 1 (retired)
#[rustfmt::skip]
pub const LARGEST_VALID_PIXEL_VALUE: Tag = Tag(0x0028, 0x0105);
/// Smallest Image Pixel Value (0028,0106) US or SS 1
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// Largest Image Pixel Value (0028,0107) US or SS 1
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// Smallest Pixel Value in Series (0028,0108) US or SS 1
#[rustfmt::skip]
pub const SMALLEST_PIXEL_VALUE_IN_SERIES: Tag = Tag(0x0028, 0x0108);
/// Largest Pixel Value in Series (0028,0109) US or SS 1
#[rustfmt::skip]
pub const LARGEST_PIXEL_VALUE_IN_SERIES: Tag = Tag(0x0028, 0x0109);
/// Smallest Image Pixel Value in Plane (0028,0110) US or SS 1 (retired)
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE_IN_PLANE: Tag = Tag(0x0028, 0x0110);
/// Largest Image Pixel Value in Plane (0028,0111) US or SS 1 (retired)
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE_IN_PLANE: Tag = Tag(0x0028, 0x0111);
/// Pixel Padding Value (0028,0120) US or SS 1
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// Pixel Padding Range Limit (0028,0121) US or SS 1
#[rustfmt::skip]
pub const PIXEL_PADDING_RANGE_LIMIT: Tag = Tag(0x0028, 0x0121);
/// Float Pixel Padding Value (0028,0122) FL 1
#[rustfmt::skip]
pub const FLOAT_PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0122);
/// Double Float Pixel Padding Value (0028,0123) FD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0123);
/// Float Pixel Padding Range Limit (0028,0124) FL 1
#[rustfmt::skip]
pub const FLOAT_PIXEL_PADDING_RANGE_LIMIT: Tag = Tag(0x0028, 0x0124);
/// Double Float Pixel Padding Range Limit (0028,0125) FD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_PADDING_RANGE_LIMIT: Tag = Tag(0x0028, 0x0125);
/// Image Location (0028,0200) US 1 (retired)
#[rustfmt::skip]
pub const IMAGE_LOCATION: Tag = Tag(0x0028, 0x0200);
/// Quality Control Image (0028,0300) CS 1
#[rustfmt::skip]
pub const QUALITY_CONTROL_IMAGE: Tag = Tag(0x0028, 0x0300);
/// Burned In Annotation (0028,0301) CS 1
#[rustfmt::skip]
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
/// Recognizable Visual Features (0028,0302) CS 1
#[rustfmt::skip]
pub const RECOGNIZABLE_VISUAL_FEATURES: Tag = Tag(0x0028, 0x0302);
/// Longitudinal Temporal Information Modified (0028,0303) CS 1
#[rustfmt::skip]
pub const LONGITUDINAL_TEMPORAL_INFORMATION_MODIFIED: Tag = Tag(0x0028, 0x0303);
/// Referenced Color Palette Instance UID (0028,0304) UI 1
#[rustfmt::skip]
pub const REFERENCED_COLOR_PALETTE_INSTANCE_UID: Tag = Tag(0x0028, 0x0304);
/// Transform Label (0028,0400) LO 1 (retired)
#[rustfmt::skip]
pub const TRANSFORM_LABEL: Tag = Tag(0x0028, 0x0400);
/// Transform Version Number (0028,0401) LO 1 (retired)
#[rustfmt::skip]
pub const TRANSFORM_VERSION_NUMBER: Tag = Tag(0x0028, 0x0401);
/// Number of Transform Steps (0028,0402) US 1 (retired)
#[rustfmt::skip]
pub const NUMBER_OF_TRANSFORM_STEPS: Tag = Tag(0x0028, 0x0402);
/// Sequence of Compressed Data (0028,0403) LO 1-n (retired)
#[rustfmt::skip]
pub const SEQUENCE_OF_COMPRESSED_DATA: Tag = Tag(0x0028, 0x0403);
/// Details of Coefficients (0028,0404) AT 1-n (retired)
#[rustfmt::skip]
pub const DETAILS_OF_COEFFICIENTS: Tag = Tag(0x0028, 0x0404);
/// DCT Label (0028,0700) LO 1 (retired)
#[rustfmt::skip]
pub const DCT_LABEL: Tag = Tag(0x0028, 0x0700);
/// Data Block Description (0028,0701) CS 1-n (retired)
#[rustfmt::skip]
pub const DATA_BLOCK_DESCRIPTION: Tag = Tag(0x0028, 0x0701);
/// Data Block (0028,0702) AT 1-n (retired)
#[rustfmt::skip]
pub const DATA_BLOCK: Tag = Tag(0x0028, 0x0702);
/// Normalization Factor Format (0028,0710) US 1 (retired)
#[rustfmt::skip]
pub const NORMALIZATION_FACTOR_FORMAT: Tag = Tag(0x0028, 0x0710);
/// Zonal Map Number Format (0028,0720) US 1 (retired)
#[rustfmt::skip]
pub const ZONAL_MAP_NUMBER_FORMAT: Tag = Tag(0x0028, 0x0720);
/// Zonal Map Location (0028,0721) AT 1-n (retired)
#[rustfmt::skip]
pub const ZONAL_MAP_LOCATION: Tag = Tag(0x0028, 0x0721);
/// Zonal Map Format (0028,0722) US 1 (retired)
#[rustfmt::skip]
pub const ZONAL_MAP_FORMAT: Tag = Tag(0x0028, 0x0722);
/// Adaptive Map Format (0028,0730) US 1 (retired)
#[rustfmt::skip]
pub const ADAPTIVE_MAP_FORMAT: Tag = Tag(0x0028, 0x0730);
/// Code Number Format (0028,0740) US 1 (retired)
#[rustfmt::skip]
pub const CODE_NUMBER_FORMAT: Tag = Tag(0x0028, 0x0740);
/// Pixel Intensity Relationship (0028,1040) CS 1
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP: Tag = Tag(0x0028, 0x1040);
/// Pixel Intensity Relationship Sign (0028,1041) SS 1
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP_SIGN: Tag = Tag(0x0028, 0x1041);
/// Window Center (0028,1050) DS 1-n
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// Window Width (0028,1051) DS 1-n
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// Rescale Intercept (0028,1052) DS 1
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// Rescale Slope (0028,1053) DS 1
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// Rescale Type (0028,1054) LO 1
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// Window Center & Width Explanation (0028,1055) LO 1-n
#[rustfmt::skip]
pub const WINDOW_CENTER_WIDTH_EXPLANATION: Tag = Tag(0x0028, 0x1055);
/// VOI LUT Function (0028,1056) CS 1
#[rustfmt::skip]
pub const VOILUT_FUNCTION: Tag = Tag(0x0028, 0x1056);
/// Gray Scale (0028,1080) CS 1 (retired)
#[rustfmt::skip]
pub const GRAY_SCALE: Tag = Tag(0x0028, 0x1080);
/// Recommended Viewing Mode (0028,1090) CS 1
#[rustfmt::skip]
pub const RECOMMENDED_VIEWING_MODE: Tag = Tag(0x0028, 0x1090);
/// Gray Lookup Table Descriptor (0028,1100) US or SS 3 (retired)
#[rustfmt::skip]
pub const GRAY_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1100);
/// Red Palette Color Lookup Table Descriptor (0028,1101) US or SS 3
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// Green Palette Color Lookup Table Descriptor (0028,1102) US or SS 3
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// Blue Palette Color Lookup Table Descriptor (0028,1103) US or SS 3
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// Alpha Palette Color Lookup Table Descriptor (0028,1104) US 3
#[rustfmt::skip]
pub const ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1104);
/// Large Red Palette Color Lookup Table Descriptor (0028,1111) US or SS 4 (retired)
#[rustfmt::skip]
pub const LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1111);
/// Large Green Palette Color Lookup Table Descriptor (0028,1112) US or SS 4 (retired)
#[rustfmt::skip]
pub const LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1112);
/// Large Blue Palette Color Lookup Table Descriptor (0028,1113) US or SS 4 (retired)
#[rustfmt::skip]
pub const LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1113);
/// Palette Color Lookup Table UID (0028,1199) UI 1
#[rustfmt::skip]
pub const PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1199);
/// Gray Lookup Table Data (0028,1200) US or SS or OW 1-n or 1 (retired)
#[rustfmt::skip]
pub const GRAY_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1200);
/// Red Palette Color Lookup Table Data (0028,1201) OW 1
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// Green Palette Color Lookup Table Data (0028,1202) OW 1
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// Blue Palette Color Lookup Table Data (0028,1203) OW 1
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// Alpha Palette Color Lookup Table Data (0028,1204) OW 1
#[rustfmt::skip]
pub const ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1204);
/// Large Red Palette Color Lookup Table Data (0028,1211) OW 1 (retired)
#[rustfmt::skip]
pub const LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1211);
/// Large Green Palette Color Lookup Table Data (0028,1212) OW 1 (retired)
#[rustfmt::skip]
pub const LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1212);
/// Large Blue Palette Color Lookup Table Data (0028,1213) OW 1 (retired)
#[rustfmt::skip]
pub const LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1213);
/// Large Palette Color Lookup Table UID (0028,1214) UI 1 (retired)
#[rustfmt::skip]
pub const LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1214);
/// Segmented Red Palette Color Lookup Table Data (0028,1221) OW 1
#[rustfmt::skip]
pub const SEGMENTED_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1221);
/// Segmented Green Palette Color Lookup Table Data (0028,1222) OW 1
#[rustfmt::skip]
pub const SEGMENTED_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1222);
/// Segmented Blue Palette Color Lookup Table Data (0028,1223) OW 1
#[rustfmt::skip]
pub const SEGMENTED_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1223);
/// Segmented Alpha Palette Color Lookup Table Data (0028,1224) OW 1
#[rustfmt::skip]
pub const SEGMENTED_ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1224);
/// Stored Value Color Range Sequence (0028,1230) SQ 1
#[rustfmt::skip]
pub const STORED_VALUE_COLOR_RANGE_SEQUENCE: Tag = Tag(0x0028, 0x1230);
/// Minimum Stored Value Mapped (0028,1231) FD 1
#[rustfmt::skip]
pub const MINIMUM_STORED_VALUE_MAPPED: Tag = Tag(0x0028, 0x1231);
/// Maximum Stored Value Mapped (0028,1232) FD 1
#[rustfmt::skip]
pub const MAXIMUM_STORED_VALUE_MAPPED: Tag = Tag(0x0028, 0x1232);
/// Breast Implant Present (0028,1300) CS 1
#[rustfmt::skip]
pub const BREAST_IMPLANT_PRESENT: Tag = Tag(0x0028, 0x1300);
/// Partial View (0028,1350) CS 1
#[rustfmt::skip]
pub const PARTIAL_VIEW: Tag = Tag(0x0028, 0x1350);
/// Partial View Description (0028,1351) ST 1
#[rustfmt::skip]
pub const PARTIAL_VIEW_DESCRIPTION: Tag = Tag(0x0028, 0x1351);
/// Partial View Code Sequence (0028,1352) SQ 1
#[rustfmt::skip]
pub const PARTIAL_VIEW_CODE_SEQUENCE: Tag = Tag(0x0028, 0x1352);
/// Spatial Locations Preserved (0028,135A) CS 1
#[rustfmt::skip]
pub const SPATIAL_LOCATIONS_PRESERVED: Tag = Tag(0x0028, 0x135A);
/// Data Frame Assignment Sequence (0028,1401) SQ 1
#[rustfmt::skip]
pub const DATA_FRAME_ASSIGNMENT_SEQUENCE: Tag = Tag(0x0028, 0x1401);
/// Data Path Assignment (0028,1402) CS 1
#[rustfmt::skip]
pub const DATA_PATH_ASSIGNMENT: Tag = Tag(0x0028, 0x1402);
/// Bits Mapped to Color Lookup Table (0028,1403) US 1
#[rustfmt::skip]
pub const BITS_MAPPED_TO_COLOR_LOOKUP_TABLE: Tag = Tag(0x0028, 0x1403);
/// Blending LUT 1 Sequence (0028,1404) SQ 1
#[rustfmt::skip]
pub const BLENDING_LUT1SEQUENCE: Tag = Tag(0x0028, 0x1404);
/// Blending LUT 1 Transfer Function (0028,1405) CS 1
#[rustfmt::skip]
pub const BLENDING_LUT1TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x1405);
/// Blending Weight Constant (0028,1406) FD 1
#[rustfmt::skip]
pub const BLENDING_WEIGHT_CONSTANT: Tag = Tag(0x0028, 0x1406);
/// Blending Lookup Table Descriptor (0028,1407) US 3
#[rustfmt::skip]
pub const BLENDING_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1407);
/// Blending Lookup Table Data (0028,1408) OW 1
#[rustfmt::skip]
pub const BLENDING_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1408);
/// Enhanced Palette Color Lookup Table Sequence (0028,140B) SQ 1
#[rustfmt::skip]
pub const ENHANCED_PALETTE_COLOR_LOOKUP_TABLE_SEQUENCE: Tag = Tag(0x0028, 0x140B);
/// Blending LUT 2 Sequence (0028,140C) SQ 1
#[rustfmt::skip]
pub const BLENDING_LUT2SEQUENCE: Tag = Tag(0x0028, 0x140C);
/// Blending LUT 2 Transfer Function (0028,140D) CS 1
#[rustfmt::skip]
pub const BLENDING_LUT2TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x140D);
/// Data Path ID (0028,140E) CS 1
#[rustfmt::skip]
pub const DATA_PATH_ID: Tag = Tag(0x0028, 0x140E);
/// RGB LUT Transfer Function (0028,140F) CS 1
#[rustfmt::skip]
pub const RGBLUT_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x140F);
/// Alpha LUT Transfer Function (0028,1410) CS 1
#[rustfmt::skip]
pub const ALPHA_LUT_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x1410);
/// ICC Profile (0028,2000) OB 1
#[rustfmt::skip]
pub const ICC_PROFILE: Tag = Tag(0x0028, 0x2000);
/// Color Space (0028,2002) CS 1
#[rustfmt::skip]
pub const COLOR_SPACE: Tag = Tag(0x0028, 0x2002);
/// Lossy Image Compression (0028,2110) CS 1
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// Lossy Image Compression Ratio (0028,2112) DS 1-n
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// Lossy Image Compression Method (0028,2114) CS 1-n
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_METHOD: Tag = Tag(0x0028, 0x2114);
/// Modality LUT Sequence (0028,3000) SQ 1
#[rustfmt::skip]
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// LUT Descriptor (0028,3002) US or SS 3
#[rustfmt::skip]
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUT Explanation (0028,3003) LO 1
#[rustfmt::skip]
pub const LUT_EXPLANATION: Tag = Tag(0x0028, 0x3003);
/// Modality LUT Type (0028,3004) LO 1
#[rustfmt::skip]
pub const MODALITY_LUT_TYPE: Tag = Tag(0x0028, 0x3004);
/// LUT Data (0028,3006) US or OW 1-n
#[rustfmt::skip]
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOI LUT Sequence (0028,3010) SQ 1
#[rustfmt::skip]
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// Softcopy VOI LUT Sequence (0028,3110) SQ 1
#[rustfmt::skip]
pub const SOFTCOPY_VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3110);
/// Image Presentation Comments (0028,4000) LT 1 (retired)
#[rustfmt::skip]
pub const IMAGE_PRESENTATION_COMMENTS: Tag = Tag(0x0028, 0x4000);
/// Bi-Plane Acquisition Sequence (0028,5000) SQ 1 (retired)
#[rustfmt::skip]
pub const BI_PLANE_ACQUISITION_SEQUENCE: Tag = Tag(0x0028, 0x5000);
/// Representative Frame Number (0028,6010) US 1
#[rustfmt::skip]
pub const REPRESENTATIVE_FRAME_NUMBER: Tag = Tag(0x0028, 0x6010);
/// Frame Numbers of Interest (FOI) (0028,6020) US 1-n
#[rustfmt::skip]
pub const FRAME_NUMBERS_OF_INTEREST: Tag = Tag(0x0028, 0x6020);
/// Frame of Interest Description (0028,6022) LO 1-n
#[rustfmt::skip]
pub const FRAME_OF_INTEREST_DESCRIPTION: Tag = Tag(0x0028, 0x6022);
/// Frame of Interest Type (0028,6023) CS 1-n
#[rustfmt::skip]
pub const FRAME_OF_INTEREST_TYPE: Tag = Tag(0x0028, 0x6023);
/// Mask Pointer(s) (0028,6030) US 1-n (retired)
#[rustfmt::skip]
pub const MASK_POINTERS: Tag = Tag(0x0028, 0x6030);
/// R Wave Pointer (0028,6040) US 1-n
#[rustfmt::skip]
pub const R_WAVE_POINTER: Tag = Tag(0x0028, 0x6040);
/// Mask Subtraction Sequence (0028,6100) SQ 1
#[rustfmt::skip]
pub const MASK_SUBTRACTION_SEQUENCE: Tag = Tag(0x0028, 0x6100);
/// Mask Operation (0028,6101) CS 1
#[rustfmt::skip]
pub const MASK_OPERATION: Tag = Tag(0x0028, 0x6101);
/// Applicable Frame Range (0028,6102) US 2-2n
#[rustfmt::skip]
pub const APPLICABLE_FRAME_RANGE: Tag = Tag(0x0028, 0x6102);
/// Mask Frame Numbers (0028,6110) US 1-n
#[rustfmt::skip]
pub const MASK_FRAME_NUMBERS: Tag = Tag(0x0028, 0x6110);
/// Contrast Frame Averaging (0028,6112) US 1
#[rustfmt::skip]
pub const CONTRAST_FRAME_AVERAGING: Tag = Tag(0x0028, 0x6112);
/// Mask Sub-pixel Shift (0028,6114) FL 2
#[rustfmt::skip]
pub const MASK_SUB_PIXEL_SHIFT: Tag = Tag(0x0028, 0x6114);
/// TID Offset (0028,6120) SS 1
#[rustfmt::skip]
pub const TID_OFFSET: Tag = Tag(0x0028, 0x6120);
/// Mask Operation Explanation (0028,6190) ST 1
#[rustfmt::skip]
pub const MASK_OPERATION_EXPLANATION: Tag = Tag(0x0028, 0x6190);
/// Equipment Administrator Sequence (0028,7000) SQ 1
#[rustfmt::skip]
pub const EQUIPMENT_ADMINISTRATOR_SEQUENCE: Tag = Tag(0x0028, 0x7000);
/// Number of Display Subsystems (0028,7001) US 1
#[rustfmt::skip]
pub const NUMBER_OF_DISPLAY_SUBSYSTEMS: Tag = Tag(0x0028, 0x7001);
/// Current Configuration ID (0028,7002) US 1
#[rustfmt::skip]
pub const CURRENT_CONFIGURATION_ID: Tag = Tag(0x0028, 0x7002);
/// Display Subsystem ID (0028,7003) US 1
#[rustfmt::skip]
pub const DISPLAY_SUBSYSTEM_ID: Tag = Tag(0x0028, 0x7003);
/// Pixel Data Provider URL (0028,7FE0) UR 1
#[rustfmt::skip]
pub const PIXEL_DATA_PROVIDER_URL: Tag = Tag(0x0028, 0x7FE0);
/// Data Point Rows (0028,9001) UL 1
#[rustfmt::skip]
pub const DATA_POINT_ROWS: Tag = Tag(0x0028, 0x9001);
/// Data Point Columns (0028,9002) UL 1
#[rustfmt::skip]
pub const DATA_POINT_COLUMNS: Tag = Tag(0x0028, 0x9002);
/// Signal Domain Columns (0028,9003) CS 1
#[rustfmt::skip]
pub const SIGNAL_DOMAIN_COLUMNS: Tag = Tag(0x0028, 0x9003);
/// Largest Monochrome Pixel Value (0028,9099) US 1 (retired)
#[rustfmt::skip]
pub const LARGEST_MONOCHROME_PIXEL_VALUE: Tag = Tag(0x0028, 0x9099);
/// Data Representation (0028,9108) CS 1
#[rustfmt::skip]
pub const DATA_REPRESENTATION: Tag = Tag(0x0028, 0x9108);
/// Pixel Measures Sequence (0028,9110) SQ 1
#[rustfmt::skip]
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);
/// Frame VOI LUT Sequence (0028,9132) SQ 1
#[rustfmt::skip]
pub const FRAME_VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x9132);
/// Pixel Value Transformation Sequence (0028,9145) SQ 1
#[rustfmt::skip]
pub const PIXEL_VALUE_TRANSFORMATION_SEQUENCE: Tag = Tag(0x0028, 0x9145);
/// Signal Domain Rows (0028,9235) CS 1
#[rustfmt::skip]
pub const SIGNAL_DOMAIN_ROWS: Tag = Tag(0x0028, 0x9235);
/// Display Filter Percentage (0028,9411) FL 1
#[rustfmt::skip]
pub const DISPLAY_FILTER_PERCENTAGE: Tag = Tag(0x0028, 0x9411);
/// Frame Pixel Shift Sequence (0028,9415) SQ 1
#[rustfmt::skip]
pub const FRAME_PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9415);
/// Subtraction Item ID (0028,9416) US 1
#[rustfmt::skip]
pub const SUBTRACTION_ITEM_ID: Tag = Tag(0x0028, 0x9416);
/// Pixel Intensity Relationship LUT Sequence (0028,9422) SQ 1
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP_LUT_SEQUENCE: Tag = Tag(0x0028, 0x9422);
/// Frame Pixel Data Properties Sequence (0028,9443) SQ 1
#[rustfmt::skip]
pub const FRAME_PIXEL_DATA_PROPERTIES_SEQUENCE: Tag = Tag(0x0028, 0x9443);
/// Geometrical Properties (0028,9444) CS 1
#[rustfmt::skip]
pub const GEOMETRICAL_PROPERTIES: Tag = Tag(0x0028, 0x9444);
/// Geometric Maximum Distortion (0028,9445) FL 1
#[rustfmt::skip]
pub const GEOMETRIC_MAXIMUM_DISTORTION: Tag = Tag(0x0028, 0x9445);
/// Image Processing Applied (0028,9446) CS 1-n
#[rustfmt::skip]
pub const IMAGE_PROCESSING_APPLIED: Tag = Tag(0x0028, 0x9446);
/// Mask Selection Mode (0028,9454) CS 1
#[rustfmt::skip]
pub const MASK_SELECTION_MODE: Tag = Tag(0x0028, 0x9454);
/// LUT Function (0028,9474) CS 1
#[rustfmt::skip]
pub const LUT_FUNCTION: Tag = Tag(0x0028, 0x9474);
/// Mask Visibility Percentage (0028,9478) FL 1
#[rustfmt::skip]
pub const MASK_VISIBILITY_PERCENTAGE: Tag = Tag(0x0028, 0x9478);
/// Pixel Shift Sequence (0028,9501) SQ 1
#[rustfmt::skip]
pub const PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9501);
/// Region Pixel Shift Sequence (0028,9502) SQ 1
#[rustfmt::skip]
pub const REGION_PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9502);
/// Vertices of the Region (0028,9503) SS 2-2n
#[rustfmt::skip]
pub const VERTICES_OF_THE_REGION: Tag = Tag(0x0028, 0x9503);
/// Multi-frame Presentation Sequence (0028,9505) SQ 1
#[rustfmt::skip]
pub const MULTI_FRAME_PRESENTATION_SEQUENCE: Tag = Tag(0x0028, 0x9505);
/// Pixel Shift Frame Range (0028,9506) US 2-2n
#[rustfmt::skip]
pub const PIXEL_SHIFT_FRAME_RANGE: Tag = Tag(0x0028, 0x9506);
/// LUT Frame Range (0028,9507) US 2-2n
#[rustfmt::skip]
pub const LUT_FRAME_RANGE: Tag = Tag(0x0028, 0x9507);
/// Image to Equipment Mapping Matrix (0028,9520) DS 16
#[rustfmt::skip]
pub const IMAGE_TO_EQUIPMENT_MAPPING_MATRIX: Tag = Tag(0x0028, 0x9520);
/// Equipment Coordinate System Identification (0028,9537) CS 1
#[rustfmt::skip]
pub const EQUIPMENT_COORDINATE_SYSTEM_IDENTIFICATION: Tag = Tag(0x0028, 0x9537);
/// Study Status ID (0032,000A) CS 1 (retired)
#[rustfmt::skip]
pub const STUDY_STATUS_ID: Tag = Tag(0x0032, 0x000A);
/// Study Priority ID (0032,000C) CS 1 (retired)
#[rustfmt::skip]
pub const STUDY_PRIORITY_ID: Tag = Tag(0x0032, 0x000C);
/// Study ID Issuer (0032,0012) LO 1 (retired)
#[rustfmt::skip]
pub const STUDY_ID_ISSUER: Tag = Tag(0x0032, 0x0012);
/// Study Verified Date (0032,0032) DA 1 (retired)
#[rustfmt::skip]
pub const STUDY_VERIFIED_DATE: Tag = Tag(0x0032, 0x0032);
/// Study Verified Time (0032,0033) TM 1 (retired)
#[rustfmt::skip]
pub const STUDY_VERIFIED_TIME: Tag = Tag(0x0032, 0x0033);
/// Study Read Date (0032,0034) DA 1 (retired)
#[rustfmt::skip]
pub const STUDY_READ_DATE: Tag = Tag(0x0032, 0x0034);
/// Study Read Time (0032,0035) TM 1 (retired)
#[rustfmt::skip]
pub const STUDY_READ_TIME: Tag = Tag(0x0032, 0x0035);
/// Scheduled Study Start Date (0032,1000) DA 1 (retired)
#[rustfmt::skip]
pub const SCHEDULED_STUDY_START_DATE: Tag = Tag(0x0032, 0x1000);
/// Scheduled Study Start Time (0032,1001) TM 1 (retired)
#[rustfmt::skip]
pub const SCHEDULED_STUDY_START_TIME: Tag = Tag(0x0032, 0x1001);
/// Scheduled Study Stop Date (0032,1010) DA 1 (retired)
#[rustfmt::skip]
pub const SCHEDULED_STUDY_STOP_DATE: Tag = Tag(0x0032, 0x1010);
/// Scheduled Study Stop Time (0032,1011) TM 1 (retired)
#[rustfmt::skip]
pub const SCHEDULED_STUDY_STOP_TIME: Tag = Tag(0x0032, 0x1011);
/// Scheduled Study Location (0032,1020) LO 1 (retired)
#[rustfmt::skip]
pub const SCHEDULED_STUDY_LOCATION: Tag = Tag(0x0032, 0x1020);
/// Scheduled Study Location AE Title (0032,1021) AE 1-n (retired)
#[rustfmt::skip]
pub const SCHEDULED_STUDY_LOCATION_AE_TITLE: Tag = Tag(0x0032, 0x1021);
/// Reason for Study (0032,1030) LO 1 (retired)
#[rustfmt::skip]
pub const REASON_FOR_STUDY: Tag = Tag(0x0032, 0x1030);
/// Requesting Physician Identification Sequence (0032,1031) SQ 1
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0032, 0x1031);
/// Requesting Physician (0032,1032) PN 1
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// Requesting Service (0032,1033) LO 1
#[rustfmt::skip]
pub const REQUESTING_SERVICE: Tag = Tag(0x0032, 0x1033);
/// Requesting Service Code Sequence (0032,1034) SQ 1
#[rustfmt::skip]
pub const REQUESTING_SERVICE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1034);
/// Study Arrival Date (0032,1040) DA 1 (retired)
#[rustfmt::skip]
pub const STUDY_ARRIVAL_DATE: Tag = Tag(0x0032, 0x1040);
/// Study Arrival Time (0032,1041) TM 1 (retired)
#[rustfmt::skip]
pub const STUDY_ARRIVAL_TIME: Tag = Tag(0x0032, 0x1041);
/// Study Completion Date (0032,1050) DA 1 (retired)
#[rustfmt::skip]
pub const STUDY_COMPLETION_DATE: Tag = Tag(0x0032, 0x1050);
/// Study Completion Time (0032,1051) TM 1 (retired)
#[rustfmt::skip]
pub const STUDY_COMPLETION_TIME: Tag = Tag(0x0032, 0x1051);
/// Study Component Status ID (0032,1055) CS 1 (retired)
#[rustfmt::skip]
pub const STUDY_COMPONENT_STATUS_ID: Tag = Tag(0x0032, 0x1055);
/// Requested Procedure Description (0032,1060) LO 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// Requested Procedure Code Sequence (0032,1064) SQ 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
/// Reason for Visit (0032,1066) UT 1
#[rustfmt::skip]
pub const REASON_FOR_VISIT: Tag = Tag(0x0032, 0x1066);
/// Reason for Visit Code Sequence (0032,1067) SQ 1
#[rustfmt::skip]
pub const REASON_FOR_VISIT_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1067);
/// Requested Contrast Agent (0032,1070) LO 1
#[rustfmt::skip]
pub const REQUESTED_CONTRAST_AGENT: Tag = Tag(0x0032, 0x1070);
/// Study Comments (0032,4000) LT 1 (retired)
#[rustfmt::skip]
pub const STUDY_COMMENTS: Tag = Tag(0x0032, 0x4000);
/// Referenced Patient Alias Sequence (0038,0004) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_PATIENT_ALIAS_SEQUENCE: Tag = Tag(0x0038, 0x0004);
/// Visit Status ID (0038,0008) CS 1
#[rustfmt::skip]
pub const VISIT_STATUS_ID: Tag = Tag(0x0038, 0x0008);
/// Admission ID (0038,0010) LO 1
#[rustfmt::skip]
pub const ADMISSION_ID: Tag = Tag(0x0038, 0x0010);
/// Issuer of Admission ID (0038,0011) LO 1 (retired)
#[rustfmt::skip]
pub const ISSUER_OF_ADMISSION_ID: Tag = Tag(0x0038, 0x0011);
/// Issuer of Admission ID Sequence (0038,0014) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_ADMISSION_ID_SEQUENCE: Tag = Tag(0x0038, 0x0014);
/// Route of Admissions (0038,0016) LO 1
#[rustfmt::skip]
pub const ROUTE_OF_ADMISSIONS: Tag = Tag(0x0038, 0x0016);
/// Scheduled Admission Date (0038,001A) DA 1 (retired)
#[rustfmt::skip]
pub const SCHEDULED_ADMISSION_DATE: Tag = Tag(0x0038, 0x001A);
/// Scheduled Admission Time (0038,001B) TM 1 (retired)
#[rustfmt::skip]
pub const SCHEDULED_ADMISSION_TIME: Tag = Tag(0x0038, 0x001B);
/// Scheduled Discharge Date (0038,001C) DA 1 (retired)
#[rustfmt::skip]
pub const SCHEDULED_DISCHARGE_DATE: Tag = Tag(0x0038, 0x001C);
/// Scheduled Discharge Time (0038,001D) TM 1 (retired)
#[rustfmt::skip]
pub const SCHEDULED_DISCHARGE_TIME: Tag = Tag(0x0038, 0x001D);
/// Scheduled Patient Institution Residence (0038,001E) LO 1 (retired)
#[rustfmt::skip]
pub const SCHEDULED_PATIENT_INSTITUTION_RESIDENCE: Tag = Tag(0x0038, 0x001E);
/// Admitting Date (0038,0020) DA 1
#[rustfmt::skip]
pub const ADMITTING_DATE: Tag = Tag(0x0038, 0x0020);
/// Admitting Time (0038,0021) TM 1
#[rustfmt::skip]
pub const ADMITTING_TIME: Tag = Tag(0x0038, 0x0021);
/// Discharge Date (0038,0030) DA 1 (retired)
#[rustfmt::skip]
pub const DISCHARGE_DATE: Tag = Tag(0x0038, 0x0030);
/// Discharge Time (0038,0032) TM 1 (retired)
#[rustfmt::skip]
pub const DISCHARGE_TIME: Tag = Tag(0x0038, 0x0032);
/// Discharge Diagnosis Description (0038,0040) LO 1 (retired)
#[rustfmt::skip]
pub const DISCHARGE_DIAGNOSIS_DESCRIPTION: Tag = Tag(0x0038, 0x0040);
/// Discharge Diagnosis Code Sequence (0038,0044) SQ 1 (retired)
#[rustfmt::skip]
pub const DISCHARGE_DIAGNOSIS_CODE_SEQUENCE: Tag = Tag(0x0038, 0x0044);
/// Special Needs (0038,0050) LO 1
#[rustfmt::skip]
pub const SPECIAL_NEEDS: Tag = Tag(0x0038, 0x0050);
/// Service Episode ID (0038,0060) LO 1
#[rustfmt::skip]
pub const SERVICE_EPISODE_ID: Tag = Tag(0x0038, 0x0060);
/// Issuer of Service Episode ID (0038,0061) LO 1 (retired)
#[rustfmt::skip]
pub const ISSUER_OF_SERVICE_EPISODE_ID: Tag = Tag(0x0038, 0x0061);
/// Service Episode Description (0038,0062) LO 1
#[rustfmt::skip]
pub const SERVICE_EPISODE_DESCRIPTION: Tag = Tag(0x0038, 0x0062);
/// Issuer of Service Episode ID Sequence (0038,0064) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_SERVICE_EPISODE_ID_SEQUENCE: Tag = Tag(0x0038, 0x0064);
/// Pertinent Documents Sequence (0038,0100) SQ 1
#[rustfmt::skip]
pub const PERTINENT_DOCUMENTS_SEQUENCE: Tag = Tag(0x0038, 0x0100);
/// Pertinent Resources Sequence (0038,0101) SQ 1
#[rustfmt::skip]
pub const PERTINENT_RESOURCES_SEQUENCE: Tag = Tag(0x0038, 0x0101);
/// Resource Description (0038,0102) LO 1
#[rustfmt::skip]
pub const RESOURCE_DESCRIPTION: Tag = Tag(0x0038, 0x0102);
/// Current Patient Location (0038,0300) LO 1
#[rustfmt::skip]
pub const CURRENT_PATIENT_LOCATION: Tag = Tag(0x0038, 0x0300);
/// Patient's Institution Residence (0038,0400) LO 1
#[rustfmt::skip]
pub const PATIENT_INSTITUTION_RESIDENCE: Tag = Tag(0x0038, 0x0400);
/// Patient State (0038,0500) LO 1
#[rustfmt::skip]
pub const PATIENT_STATE: Tag = Tag(0x0038, 0x0500);
/// Visit Comments (0038,4000) LT 1
#[rustfmt::skip]
pub const VISIT_COMMENTS: Tag = Tag(0x0038, 0x4000);
/// Waveform Originality (003A,0004) CS 1
#[rustfmt::skip]
pub const WAVEFORM_ORIGINALITY: Tag = Tag(0x003A, 0x0004);
/// Number of Waveform Channels (003A,0005) US 1
#[rustfmt::skip]
pub const NUMBER_OF_WAVEFORM_CHANNELS: Tag = Tag(0x003A, 0x0005);
/// Number of Waveform Samples (003A,0010) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_WAVEFORM_SAMPLES: Tag = Tag(0x003A, 0x0010);
/// Sampling Frequency (003A,001A) DS 1
#[rustfmt::skip]
pub const SAMPLING_FREQUENCY: Tag = Tag(0x003A, 0x001A);
/// Multiplex Group Label (003A,0020) SH 1
#[rustfmt::skip]
pub const MULTIPLEX_GROUP_LABEL: Tag = Tag(0x003A, 0x0020);
/// Channel Definition Sequence (003A,0200) SQ 1
#[rustfmt::skip]
pub const CHANNEL_DEFINITION_SEQUENCE: Tag = Tag(0x003A, 0x0200);
/// Waveform Channel Number (003A,0202) IS 1
#[rustfmt::skip]
pub const WAVEFORM_CHANNEL_NUMBER: Tag = Tag(0x003A, 0x0202);
/// Channel Label (003A,0203) SH 1
#[rustfmt::skip]
pub const CHANNEL_LABEL: Tag = Tag(0x003A, 0x0203);
/// Channel Status (003A,0205) CS 1-n
#[rustfmt::skip]
pub const CHANNEL_STATUS: Tag = Tag(0x003A, 0x0205);
/// Channel Source Sequence (003A,0208) SQ 1
#[rustfmt::skip]
pub const CHANNEL_SOURCE_SEQUENCE: Tag = Tag(0x003A, 0x0208);
/// Channel Source Modifiers Sequence (003A,0209) SQ 1
#[rustfmt::skip]
pub const CHANNEL_SOURCE_MODIFIERS_SEQUENCE: Tag = Tag(0x003A, 0x0209);
/// Source Waveform Sequence (003A,020A) SQ 1
#[rustfmt::skip]
pub const SOURCE_WAVEFORM_SEQUENCE: Tag = Tag(0x003A, 0x020A);
/// Channel Derivation Description (003A,020C) LO 1
#[rustfmt::skip]
pub const CHANNEL_DERIVATION_DESCRIPTION: Tag = Tag(0x003A, 0x020C);
/// Channel Sensitivity (003A,0210) DS 1
#[rustfmt::skip]
pub const CHANNEL_SENSITIVITY: Tag = Tag(0x003A, 0x0210);
/// Channel Sensitivity Units Sequence (003A,0211) SQ 1
#[rustfmt::skip]
pub const CHANNEL_SENSITIVITY_UNITS_SEQUENCE: Tag = Tag(0x003A, 0x0211);
/// Channel Sensitivity Correction Factor (003A,0212) DS 1
#[rustfmt::skip]
pub const CHANNEL_SENSITIVITY_CORRECTION_FACTOR: Tag = Tag(0x003A, 0x0212);
/// Channel Baseline (003A,0213) DS 1
#[rustfmt::skip]
pub const CHANNEL_BASELINE: Tag = Tag(0x003A, 0x0213);
/// Channel Time Skew (003A,0214) DS 1
#[rustfmt::skip]
pub const CHANNEL_TIME_SKEW: Tag = Tag(0x003A, 0x0214);
/// Channel Sample Skew (003A,0215) DS 1
#[rustfmt::skip]
pub const CHANNEL_SAMPLE_SKEW: Tag = Tag(0x003A, 0x0215);
/// Channel Offset (003A,0218) DS 1
#[rustfmt::skip]
pub const CHANNEL_OFFSET: Tag = Tag(0x003A, 0x0218);
/// Waveform Bits Stored (003A,021A) US 1
#[rustfmt::skip]
pub const WAVEFORM_BITS_STORED: Tag = Tag(0x003A, 0x021A);
/// Filter Low Frequency (003A,0220) DS 1
#[rustfmt::skip]
pub const FILTER_LOW_FREQUENCY: Tag = Tag(0x003A, 0x0220);
/// Filter High Frequency (003A,0221) DS 1
#[rustfmt::skip]
pub const FILTER_HIGH_FREQUENCY: Tag = Tag(0x003A, 0x0221);
/// Notch Filter Frequency (003A,0222) DS 1
#[rustfmt::skip]
pub const NOTCH_FILTER_FREQUENCY: Tag = Tag(0x003A, 0x0222);
/// Notch Filter Bandwidth (003A,0223) DS 1
#[rustfmt::skip]
pub const NOTCH_FILTER_BANDWIDTH: Tag = Tag(0x003A, 0x0223);
/// Waveform Data Display Scale (003A,0230) FL 1
#[rustfmt::skip]
pub const WAVEFORM_DATA_DISPLAY_SCALE: Tag = Tag(0x003A, 0x0230);
/// Waveform Display Background CIELab Value (003A,0231) US 3
#[rustfmt::skip]
pub const WAVEFORM_DISPLAY_BACKGROUND_CIE_LAB_VALUE: Tag = Tag(0x003A, 0x0231);
/// Waveform Presentation Group Sequence (003A,0240) SQ 1
#[rustfmt::skip]
pub const WAVEFORM_PRESENTATION_GROUP_SEQUENCE: Tag = Tag(0x003A, 0x0240);
/// Presentation Group Number (003A,0241) US 1
#[rustfmt::skip]
pub const PRESENTATION_GROUP_NUMBER: Tag = Tag(0x003A, 0x0241);
/// Channel Display Sequence (003A,0242) SQ 1
#[rustfmt::skip]
pub const CHANNEL_DISPLAY_SEQUENCE: Tag = Tag(0x003A, 0x0242);
/// Channel Recommended Display CIELab Value (003A,0244) US 3
#[rustfmt::skip]
pub const CHANNEL_RECOMMENDED_DISPLAY_CIE_LAB_VALUE: Tag = Tag(0x003A, 0x0244);
/// Channel Position (003A,0245) FL 1
#[rustfmt::skip]
pub const CHANNEL_POSITION: Tag = Tag(0x003A, 0x0245);
/// Display Shading Flag (003A,0246) CS 1
#[rustfmt::skip]
pub const DISPLAY_SHADING_FLAG: Tag = Tag(0x003A, 0x0246);
/// Fractional Channel Display Scale (003A,0247) FL 1
#[rustfmt::skip]
pub const FRACTIONAL_CHANNEL_DISPLAY_SCALE: Tag = Tag(0x003A, 0x0247);
/// Absolute Channel Display Scale (003A,0248) FL 1
#[rustfmt::skip]
pub const ABSOLUTE_CHANNEL_DISPLAY_SCALE: Tag = Tag(0x003A, 0x0248);
/// Multiplexed Audio Channels Description Code Sequence (003A,0300) SQ 1
#[rustfmt::skip]
pub const MULTIPLEXED_AUDIO_CHANNELS_DESCRIPTION_CODE_SEQUENCE: Tag = Tag(0x003A, 0x0300);
/// Channel Identification Code (003A,0301) IS 1
#[rustfmt::skip]
pub const CHANNEL_IDENTIFICATION_CODE: Tag = Tag(0x003A, 0x0301);
/// Channel Mode (003A,0302) CS 1
#[rustfmt::skip]
pub const CHANNEL_MODE: Tag = Tag(0x003A, 0x0302);
/// Scheduled Station AE Title (0040,0001) AE 1-n
#[rustfmt::skip]
pub const SCHEDULED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0001);
/// Scheduled Procedure Step Start Date (0040,0002) DA 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0002);
/// Scheduled Procedure Step Start Time (0040,0003) TM 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0003);
/// Scheduled Procedure Step End Date (0040,0004) DA 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_END_DATE: Tag = Tag(0x0040, 0x0004);
/// Scheduled Procedure Step End Time (0040,0005) TM 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_END_TIME: Tag = Tag(0x0040, 0x0005);
/// Scheduled Performing Physician's Name (0040,0006) PN 1
#[rustfmt::skip]
pub const SCHEDULED_PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0040, 0x0006);
/// Scheduled Procedure Step Description (0040,0007) LO 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0007);
/// Scheduled Protocol Code Sequence (0040,0008) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0008);
/// Scheduled Procedure Step ID (0040,0009) SH 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0009);
/// Stage Code Sequence (0040,000A) SQ 1
#[rustfmt::skip]
pub const STAGE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x000A);
/// Scheduled Performing Physician Identification Sequence (0040,000B) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0040, 0x000B);
/// Scheduled Station Name (0040,0010) SH 1-n
#[rustfmt::skip]
pub const SCHEDULED_STATION_NAME: Tag = Tag(0x0040, 0x0010);
/// Scheduled Procedure Step Location (0040,0011) SH 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_LOCATION: Tag = Tag(0x0040, 0x0011);
/// Pre-Medication (0040,0012) LO 1
#[rustfmt::skip]
pub const PRE_MEDICATION: Tag = Tag(0x0040, 0x0012);
/// Scheduled Procedure Step Status (0040,0020) CS 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_STATUS: Tag = Tag(0x0040, 0x0020);
/// Order Placer Identifier Sequence (0040,0026) SQ 1
#[rustfmt::skip]
pub const ORDER_PLACER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0026);
/// Order Filler Identifier Sequence (0040,0027) SQ 1
#[rustfmt::skip]
pub const ORDER_FILLER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0027);
/// Local Namespace Entity ID (0040,0031) UT 1
#[rustfmt::skip]
pub const LOCAL_NAMESPACE_ENTITY_ID: Tag = Tag(0x0040, 0x0031);
/// Universal Entity ID (0040,0032) UT 1
#[rustfmt::skip]
pub const UNIVERSAL_ENTITY_ID: Tag = Tag(0x0040, 0x0032);
/// Universal Entity ID Type (0040,0033) CS 1
#[rustfmt::skip]
pub const UNIVERSAL_ENTITY_ID_TYPE: Tag = Tag(0x0040, 0x0033);
/// Identifier Type Code (0040,0035) CS 1
#[rustfmt::skip]
pub const IDENTIFIER_TYPE_CODE: Tag = Tag(0x0040, 0x0035);
/// Assigning Facility Sequence (0040,0036) SQ 1
#[rustfmt::skip]
pub const ASSIGNING_FACILITY_SEQUENCE: Tag = Tag(0x0040, 0x0036);
/// Assigning Jurisdiction Code Sequence (0040,0039) SQ 1
#[rustfmt::skip]
pub const ASSIGNING_JURISDICTION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0039);
/// Assigning Agency or Department Code Sequence (0040,003A) SQ 1
#[rustfmt::skip]
pub const ASSIGNING_AGENCY_OR_DEPARTMENT_CODE_SEQUENCE: Tag = Tag(0x0040, 0x003A);
/// Scheduled Procedure Step Sequence (0040,0100) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0100);
/// Referenced Non-Image Composite SOP Instance Sequence (0040,0220) SQ 1
#[rustfmt::skip]
pub const REFERENCED_NON_IMAGE_COMPOSITE_SOP_INSTANCE_SEQUENCE: Tag = Tag(0x0040, 0x0220);
/// Performed Station AE Title (0040,0241) AE 1
#[rustfmt::skip]
pub const PERFORMED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0241);
/// Performed Station Name (0040,0242) SH 1
#[rustfmt::skip]
pub const PERFORMED_STATION_NAME: Tag = Tag(0x0040, 0x0242);
/// Performed Location (0040,0243) SH 1
#[rustfmt::skip]
pub const PERFORMED_LOCATION: Tag = Tag(0x0040, 0x0243);
/// Performed Procedure Step Start Date (0040,0244) DA 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// Performed Procedure Step Start Time (0040,0245) TM 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// Performed Procedure Step End Date (0040,0250) DA 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_END_DATE: Tag = Tag(0x0040, 0x0250);
/// Performed Procedure Step End Time (0040,0251) TM 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_END_TIME: Tag = Tag(0x0040, 0x0251);
/// Performed Procedure Step Status (0040,0252) CS 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_STATUS: Tag = Tag(0x0040, 0x0252);
/// Performed Procedure Step ID (0040,0253) SH 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// Performed Procedure Step Description (0040,0254) LO 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// Performed Procedure Type Description (0040,0255) LO 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_TYPE_DESCRIPTION: Tag = Tag(0x0040, 0x0255);
/// Performed Protocol Code Sequence (0040,0260) SQ 1
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// Performed Protocol Type (0040,0261) CS 1
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_TYPE: Tag = Tag(0x0040, 0x0261);
/// Scheduled Step Attributes Sequence (0040,0270) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_STEP_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0270);
/// Request Attributes Sequence (0040,0275) SQ 1
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// Comments on the Performed Procedure Step (0040,0280) ST 1
#[rustfmt::skip]
pub const COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP: Tag = Tag(0x0040, 0x0280);
/// Performed Procedure Step Discontinuation Reason Code Sequence (0040,0281) SQ 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DISCONTINUATION_REASON_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0281);
/// Quantity Sequence (0040,0293) SQ 1
#[rustfmt::skip]
pub const QUANTITY_SEQUENCE: Tag = Tag(0x0040, 0x0293);
/// Quantity (0040,0294) DS 1
#[rustfmt::skip]
pub const QUANTITY: Tag = Tag(0x0040, 0x0294);
/// Measuring Units Sequence (0040,0295) SQ 1
#[rustfmt::skip]
pub const MEASURING_UNITS_SEQUENCE: Tag = Tag(0x0040, 0x0295);
/// Billing Item Sequence (0040,0296) SQ 1
#[rustfmt::skip]
pub const BILLING_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0296);
/// Total Time of Fluoroscopy (0040,0300) US 1 (retired)
#[rustfmt::skip]
pub const TOTAL_TIME_OF_FLUOROSCOPY: Tag = Tag(0x0040, 0x0300);
/// Total Number of Exposures (0040,0301) US 1 (retired)
#[rustfmt::skip]
pub const TOTAL_NUMBER_OF_EXPOSURES: Tag = Tag(0x0040, 0x0301);
/// Entrance Dose (0040,0302) US 1
#[rustfmt::skip]
pub const ENTRANCE_DOSE: Tag = Tag(0x0040, 0x0302);
/// Exposed Area (0040,0303) US 1-2
#[rustfmt::skip]
pub const EXPOSED_AREA: Tag = Tag(0x0040, 0x0303);
/// Distance Source to Entrance (0040,0306) DS 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_ENTRANCE: Tag = Tag(0x0040, 0x0306);
/// Distance Source to Support (0040,0307) DS 1 (retired)
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_SUPPORT: Tag = Tag(0x0040, 0x0307);
/// Exposure Dose Sequence (0040,030E) SQ 1
#[rustfmt::skip]
pub const EXPOSURE_DOSE_SEQUENCE: Tag = Tag(0x0040, 0x030E);
/// Comments on Radiation Dose (0040,0310) ST 1
#[rustfmt::skip]
pub const COMMENTS_ON_RADIATION_DOSE: Tag = Tag(0x0040, 0x0310);
/// X-Ray Output (0040,0312) DS 1
#[rustfmt::skip]
pub const X_RAY_OUTPUT: Tag = Tag(0x0040, 0x0312);
/// Half Value Layer (0040,0314) DS 1
#[rustfmt::skip]
pub const HALF_VALUE_LAYER: Tag = Tag(0x0040, 0x0314);
/// Organ Dose (0040,0316) DS 1
#[rustfmt::skip]
pub const ORGAN_DOSE: Tag = Tag(0x0040, 0x0316);
/// Organ Exposed (0040,0318) CS 1
#[rustfmt::skip]
pub const ORGAN_EXPOSED: Tag = Tag(0x0040, 0x0318);
/// Billing Procedure Step Sequence (0040,0320) SQ 1
#[rustfmt::skip]
pub const BILLING_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0320);
/// Film Consumption Sequence (0040,0321) SQ 1
#[rustfmt::skip]
pub const FILM_CONSUMPTION_SEQUENCE: Tag = Tag(0x0040, 0x0321);
/// Billing Supplies and Devices Sequence (0040,0324) SQ 1
#[rustfmt::skip]
pub const BILLING_SUPPLIES_AND_DEVICES_SEQUENCE: Tag = Tag(0x0040, 0x0324);
/// Referenced Procedure Step Sequence (0040,0330) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0330);
/// Performed Series Sequence (0040,0340) SQ 1
#[rustfmt::skip]
pub const PERFORMED_SERIES_SEQUENCE: Tag = Tag(0x0040, 0x0340);
/// Comments on the Scheduled Procedure Step (0040,0400) LT 1
#[rustfmt::skip]
pub const COMMENTS_ON_THE_SCHEDULED_PROCEDURE_STEP: Tag = Tag(0x0040, 0x0400);
/// Protocol Context Sequence (0040,0440) SQ 1
#[rustfmt::skip]
pub const PROTOCOL_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0440);
/// Content Item Modifier Sequence (0040,0441) SQ 1
#[rustfmt::skip]
pub const CONTENT_ITEM_MODIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0441);
/// Scheduled Specimen Sequence (0040,0500) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_SPECIMEN_SEQUENCE: Tag = Tag(0x0040, 0x0500);
/// Specimen Accession Number (0040,050A) LO 1 (retired)
#[rustfmt::skip]
pub const SPECIMEN_ACCESSION_NUMBER: Tag = Tag(0x0040, 0x050A);
/// Container Identifier (0040,0512) LO 1
#[rustfmt::skip]
pub const CONTAINER_IDENTIFIER: Tag = Tag(0x0040, 0x0512);
/// Issuer of the Container Identifier Sequence (0040,0513) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_THE_CONTAINER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0513);
/// Alternate Container Identifier Sequence (0040,0515) SQ 1
#[rustfmt::skip]
pub const ALTERNATE_CONTAINER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0515);
/// Container Type Code Sequence (0040,0518) SQ 1
#[rustfmt::skip]
pub const CONTAINER_TYPE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0518);
/// Container Description (0040,051A) LO 1
#[rustfmt::skip]
pub const CONTAINER_DESCRIPTION: Tag = Tag(0x0040, 0x051A);
/// Container Component Sequence (0040,0520) SQ 1
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_SEQUENCE: Tag = Tag(0x0040, 0x0520);
/// Specimen Sequence (0040,0550) SQ 1 (retired)
#[rustfmt::skip]
pub const SPECIMEN_SEQUENCE: Tag = Tag(0x0040, 0x0550);
/// Specimen Identifier (0040,0551) LO 1
#[rustfmt::skip]
pub const SPECIMEN_IDENTIFIER: Tag = Tag(0x0040, 0x0551);
/// Specimen Description Sequence (Trial) (0040,0552) SQ 1 (retired)
#[rustfmt::skip]
pub const SPECIMEN_DESCRIPTION_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0x0552);
/// Specimen Description (Trial) (0040,0553) ST 1 (retired)
#[rustfmt::skip]
pub const SPECIMEN_DESCRIPTION_TRIAL: Tag = Tag(0x0040, 0x0553);
/// Specimen UID (0040,0554) UI 1
#[rustfmt::skip]
pub const SPECIMEN_UID: Tag = Tag(0x0040, 0x0554);
/// Acquisition Context Sequence (0040,0555) SQ 1
#[rustfmt::skip]
pub const ACQUISITION_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0555);
/// Acquisition Context Description (0040,0556) ST 1
#[rustfmt::skip]
pub const ACQUISITION_CONTEXT_DESCRIPTION: Tag = Tag(0x0040, 0x0556);
/// Specimen Description Sequence (0040,0560) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_DESCRIPTION_SEQUENCE: Tag = Tag(0x0040, 0x0560);
/// Issuer of the Specimen Identifier Sequence (0040,0562) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_THE_SPECIMEN_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0562);
/// Specimen Type Code Sequence (0040,059A) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_TYPE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x059A);
/// Specimen Short Description (0040,0600) LO 1
#[rustfmt::skip]
pub const SPECIMEN_SHORT_DESCRIPTION: Tag = Tag(0x0040, 0x0600);
/// Specimen Detailed Description (0040,0602) UT 1
#[rustfmt::skip]
pub const SPECIMEN_DETAILED_DESCRIPTION: Tag = Tag(0x0040, 0x0602);
/// Specimen Preparation Sequence (0040,0610) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_PREPARATION_SEQUENCE: Tag = Tag(0x0040, 0x0610);
/// Specimen Preparation Step Content Item Sequence (0040,0612) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_PREPARATION_STEP_CONTENT_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0612);
/// Specimen Localization Content Item Sequence (0040,0620) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_LOCALIZATION_CONTENT_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0620);
/// Slide Identifier (0040,06FA) LO 1 (retired)
#[rustfmt::skip]
pub const SLIDE_IDENTIFIER: Tag = Tag(0x0040, 0x06FA);
/// Whole Slide Microscopy Image Frame Type Sequence (0040,0710) SQ 1
#[rustfmt::skip]
pub const WHOLE_SLIDE_MICROSCOPY_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0040, 0x0710);
/// Image Center Point Coordinates Sequence (0040,071A) SQ 1
#[rustfmt::skip]
pub const IMAGE_CENTER_POINT_COORDINATES_SEQUENCE: Tag = Tag(0x0040, 0x071A);
/// X Offset in Slide Coordinate System (0040,072A) DS 1
#[rustfmt::skip]
pub const X_OFFSET_IN_SLIDE_COORDINATE_SYSTEM: Tag = Tag(0x0040, 0x072A);
/// Y Offset in Slide Coordinate System (0040,073A) DS 1
#[rustfmt::skip]
pub const Y_OFFSET_IN_SLIDE_COORDINATE_SYSTEM: Tag = Tag(0x0040, 0x073A);
/// Z Offset in Slide Coordinate System (0040,074A) DS 1
#[rustfmt::skip]
pub const Z_OFFSET_IN_SLIDE_COORDINATE_SYSTEM: Tag = Tag(0x0040, 0x074A);
/// Pixel Spacing Sequence (0040,08D8) SQ 1 (retired)
#[rustfmt::skip]
pub const PIXEL_SPACING_SEQUENCE: Tag = Tag(0x0040, 0x08D8);
/// Coordinate System Axis Code Sequence (0040,08DA) SQ 1 (retired)
#[rustfmt::skip]
pub const COORDINATE_SYSTEM_AXIS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x08DA);
/// Measurement Units Code Sequence (0040,08EA) SQ 1
#[rustfmt::skip]
pub const MEASUREMENT_UNITS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x08EA);
/// Vital Stain Code Sequence (Trial) (0040,09F8) SQ 1 (retired)
#[rustfmt::skip]
pub const VITAL_STAIN_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0x09F8);
/// Requested Procedure ID (0040,1001) SH 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_ID: Tag = Tag(0x0040, 0x1001);
/// Reason for the Requested Procedure (0040,1002) LO 1
#[rustfmt::skip]
pub const REASON_FOR_THE_REQUESTED_PROCEDURE: Tag = Tag(0x0040, 0x1002);
/// Requested Procedure Priority (0040,1003) SH 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_PRIORITY: Tag = Tag(0x0040, 0x1003);
/// Patient Transport Arrangements (0040,1004) LO 1
#[rustfmt::skip]
pub const PATIENT_TRANSPORT_ARRANGEMENTS: Tag = Tag(0x0040, 0x1004);
/// Requested Procedure Location (0040,1005) LO 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_LOCATION: Tag = Tag(0x0040, 0x1005);
/// Placer Order Number / Procedure (0040,1006) SH 1 (retired)
#[rustfmt::skip]
pub const PLACER_ORDER_NUMBER_PROCEDURE: Tag = Tag(0x0040, 0x1006);
/// Filler Order Number / Procedure (0040,1007) SH 1 (retired)
#[rustfmt::skip]
pub const FILLER_ORDER_NUMBER_PROCEDURE: Tag = Tag(0x0040, 0x1007);
/// Confidentiality Code (0040,1008) LO 1
#[rustfmt::skip]
pub const CONFIDENTIALITY_CODE: Tag = Tag(0x0040, 0x1008);
/// Reporting Priority (0040,1009) SH 1
#[rustfmt::skip]
pub const REPORTING_PRIORITY: Tag = Tag(0x0040, 0x1009);
/// Reason for Requested Procedure Code Sequence (0040,100A) SQ 1
#[rustfmt::skip]
pub const REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x100A);
/// Names of Intended Recipients of Results (0040,1010) PN 1-n
#[rustfmt::skip]
pub const NAMES_OF_INTENDED_RECIPIENTS_OF_RESULTS: Tag = Tag(0x0040, 0x1010);
/// Intended Recipients of Results Identification Sequence (0040,1011) SQ 1
#[rustfmt::skip]
pub const INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0040, 0x1011);
/// Reason For Performed Procedure Code Sequence (0040,1012) SQ 1
#[rustfmt::skip]
pub const REASON_FOR_PERFORMED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x1012);
/// Requested Procedure Description (Trial) (0040,1060) LO 1 (retired)
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION_TRIAL: Tag = Tag(0x0040, 0x1060);
/// Person Identification Code Sequence (0040,1101) SQ 1
#[rustfmt::skip]
pub const PERSON_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x1101);
/// Person's Address (0040,1102) ST 1
#[rustfmt::skip]
pub const PERSON_ADDRESS: Tag = Tag(0x0040, 0x1102);
/// Person's Telephone Numbers (0040,1103) LO 1-n
#[rustfmt::skip]
pub const PERSON_TELEPHONE_NUMBERS: Tag = Tag(0x0040, 0x1103);
/// Person's Telecom Information (0040,1104) LT 1
#[rustfmt::skip]
pub const PERSON_TELECOM_INFORMATION: Tag = Tag(0x0040, 0x1104);
/// Requested Procedure Comments (0040,1400) LT 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_COMMENTS: Tag = Tag(0x0040, 0x1400);
/// Reason for the Imaging Service Request (0040,2001) LO 1 (retired)
#[rustfmt::skip]
pub const REASON_FOR_THE_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2001);
/// Issue Date of Imaging Service Request (0040,2004) DA 1
#[rustfmt::skip]
pub const ISSUE_DATE_OF_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2004);
/// Issue Time of Imaging Service Request (0040,2005) TM 1
#[rustfmt::skip]
pub const ISSUE_TIME_OF_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2005);
/// Placer Order Number / Imaging Service Request (Retired) (0040,2006) SH 1 (retired)
#[rustfmt::skip]
pub const PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST_RETIRED: Tag = Tag(0x0040, 0x2006);
/// Filler Order Number / Imaging Service Request (Retired) (0040,2007) SH 1 (retired)
#[rustfmt::skip]
pub const FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST_RETIRED: Tag = Tag(0x0040, 0x2007);
/// Order Entered By (0040,2008) PN 1
#[rustfmt::skip]
pub const ORDER_ENTERED_BY: Tag = Tag(0x0040, 0x2008);
/// Order Enterer's Location (0040,2009) SH 1
#[rustfmt::skip]
pub const ORDER_ENTERER_LOCATION: Tag = Tag(0x0040, 0x2009);
/// Order Callback Phone Number (0040,2010) SH 1
#[rustfmt::skip]
pub const ORDER_CALLBACK_PHONE_NUMBER: Tag = Tag(0x0040, 0x2010);
/// Order Callback Telecom Information (0040,2011) LT 1
#[rustfmt::skip]
pub const ORDER_CALLBACK_TELECOM_INFORMATION: Tag = Tag(0x0040, 0x2011);
/// Placer Order Number / Imaging Service Request (0040,2016) LO 1
#[rustfmt::skip]
pub const PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2016);
/// Filler Order Number / Imaging Service Request (0040,2017) LO 1
#[rustfmt::skip]
pub const FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2017);
/// Imaging Service Request Comments (0040,2400) LT 1
#[rustfmt::skip]
pub const IMAGING_SERVICE_REQUEST_COMMENTS: Tag = Tag(0x0040, 0x2400);
/// Confidentiality Constraint on Patient Data Description (0040,3001) LO 1
#[rustfmt::skip]
pub const CONFIDENTIALITY_CONSTRAINT_ON_PATIENT_DATA_DESCRIPTION: Tag = Tag(0x0040, 0x3001);
/// General Purpose Scheduled Procedure Step Status (0040,4001) CS 1 (retired)
#[rustfmt::skip]
pub const GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_STATUS: Tag = Tag(0x0040, 0x4001);
/// General Purpose Performed Procedure Step Status (0040,4002) CS 1 (retired)
#[rustfmt::skip]
pub const GENERAL_PURPOSE_PERFORMED_PROCEDURE_STEP_STATUS: Tag = Tag(0x0040, 0x4002);
/// General Purpose Scheduled Procedure Step Priority (0040,4003) CS 1 (retired)
#[rustfmt::skip]
pub const GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_PRIORITY: Tag = Tag(0x0040, 0x4003);
/// Scheduled Processing Applications Code Sequence (0040,4004) SQ 1 (retired)
#[rustfmt::skip]
pub const SCHEDULED_PROCESSING_APPLICATIONS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4004);
/// Scheduled Procedure Step Start DateTime (0040,4005) DT 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_DATE_TIME: Tag = Tag(0x0040, 0x4005);
/// Multiple Copies Flag (0040,4006) CS 1 (retired)
#[rustfmt::skip]
pub const MULTIPLE_COPIES_FLAG: Tag = Tag(0x0040, 0x4006);
/// Performed Processing Applications Code Sequence (0040,4007) SQ 1
#[rustfmt::skip]
pub const PERFORMED_PROCESSING_APPLICATIONS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4007);
/// Scheduled Procedure Step Expiration DateTime (0040,4008) DT 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_EXPIRATION_DATE_TIME: Tag = Tag(0x0040, 0x4008);
/// Human Performer Code Sequence (0040,4009) SQ 1
#[rustfmt::skip]
pub const HUMAN_PERFORMER_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4009);
/// Scheduled Procedure Step Modification DateTime (0040,4010) DT 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_MODIFICATION_DATE_TIME: Tag = Tag(0x0040, 0x4010);
/// Expected Completion DateTime (0040,4011) DT 1
#[rustfmt::skip]
pub const EXPECTED_COMPLETION_DATE_TIME: Tag = Tag(0x0040, 0x4011);
/// Resulting General Purpose Performed Procedure Steps Sequence (0040,4015) SQ 1 (retired)
#[rustfmt::skip]
pub const RESULTING_GENERAL_PURPOSE_PERFORMED_PROCEDURE_STEPS_SEQUENCE: Tag = Tag(0x0040, 0x4015);
/// Referenced General Purpose Scheduled Procedure Step Sequence (0040,4016) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x4016);
/// Scheduled Workitem Code Sequence (0040,4018) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_WORKITEM_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4018);
/// Performed Workitem Code Sequence (0040,4019) SQ 1
#[rustfmt::skip]
pub const PERFORMED_WORKITEM_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4019);
/// Input Availability Flag (0040,4020) CS 1 (retired)
#[rustfmt::skip]
pub const INPUT_AVAILABILITY_FLAG: Tag = Tag(0x0040, 0x4020);
/// Input Information Sequence (0040,4021) SQ 1
#[rustfmt::skip]
pub const INPUT_INFORMATION_SEQUENCE: Tag = Tag(0x0040, 0x4021);
/// Relevant Information Sequence (0040,4022) SQ 1 (retired)
#[rustfmt::skip]
pub const RELEVANT_INFORMATION_SEQUENCE: Tag = Tag(0x0040, 0x4022);
/// Referenced General Purpose Scheduled Procedure Step Transaction UID (0040,4023) UI 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_TRANSACTION_UID: Tag = Tag(0x0040, 0x4023);
/// Scheduled Station Name Code Sequence (0040,4025) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_STATION_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4025);
/// Scheduled Station Class Code Sequence (0040,4026) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_STATION_CLASS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4026);
/// Scheduled Station Geographic Location Code Sequence (0040,4027) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4027);
/// Performed Station Name Code Sequence (0040,4028) SQ 1
#[rustfmt::skip]
pub const PERFORMED_STATION_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4028);
/// Performed Station Class Code Sequence (0040,4029) SQ 1
#[rustfmt::skip]
pub const PERFORMED_STATION_CLASS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4029);
/// Performed Station Geographic Location Code Sequence (0040,4030) SQ 1
#[rustfmt::skip]
pub const PERFORMED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4030);
/// Requested Subsequent Workitem Code Sequence (0040,4031) SQ 1 (retired)
#[rustfmt::skip]
pub const REQUESTED_SUBSEQUENT_WORKITEM_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4031);
/// Non-DICOM Output Code Sequence (0040,4032) SQ 1 (retired)
#[rustfmt::skip]
pub const NON_DICOM_OUTPUT_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4032);
/// Output Information Sequence (0040,4033) SQ 1
#[rustfmt::skip]
pub const OUTPUT_INFORMATION_SEQUENCE: Tag = Tag(0x0040, 0x4033);
/// Scheduled Human Performers Sequence (0040,4034) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_HUMAN_PERFORMERS_SEQUENCE: Tag = Tag(0x0040, 0x4034);
/// Actual Human Performers Sequence (0040,4035) SQ 1
#[rustfmt::skip]
pub const ACTUAL_HUMAN_PERFORMERS_SEQUENCE: Tag = Tag(0x0040, 0x4035);
/// Human Performer's Organization (0040,4036) LO 1
#[rustfmt::skip]
pub const HUMAN_PERFORMER_ORGANIZATION: Tag = Tag(0x0040, 0x4036);
/// Human Performer's Name (0040,4037) PN 1
#[rustfmt::skip]
pub const HUMAN_PERFORMER_NAME: Tag = Tag(0x0040, 0x4037);
/// Raw Data Handling (0040,4040) CS 1
#[rustfmt::skip]
pub const RAW_DATA_HANDLING: Tag = Tag(0x0040, 0x4040);
/// Input Readiness State (0040,4041) CS 1
#[rustfmt::skip]
pub const INPUT_READINESS_STATE: Tag = Tag(0x0040, 0x4041);
/// Performed Procedure Step Start DateTime (0040,4050) DT 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE_TIME: Tag = Tag(0x0040, 0x4050);
/// Performed Procedure Step End DateTime (0040,4051) DT 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_END_DATE_TIME: Tag = Tag(0x0040, 0x4051);
/// Procedure Step Cancellation DateTime (0040,4052) DT 1
#[rustfmt::skip]
pub const PROCEDURE_STEP_CANCELLATION_DATE_TIME: Tag = Tag(0x0040, 0x4052);
/// Output Destination Sequence (0040,4070) SQ 1
#[rustfmt::skip]
pub const OUTPUT_DESTINATION_SEQUENCE: Tag = Tag(0x0040, 0x4070);
/// DICOM Storage Sequence (0040,4071) SQ 1
#[rustfmt::skip]
pub const DICOM_STORAGE_SEQUENCE: Tag = Tag(0x0040, 0x4071);
/// STOW-RS Storage Sequence (0040,4072) SQ 1
#[rustfmt::skip]
pub const STOWRS_STORAGE_SEQUENCE: Tag = Tag(0x0040, 0x4072);
/// Storage URL (0040,4073) UR 1
#[rustfmt::skip]
pub const STORAGE_URL: Tag = Tag(0x0040, 0x4073);
/// XDS Storage Sequence (0040,4074) SQ 1
#[rustfmt::skip]
pub const XDS_STORAGE_SEQUENCE: Tag = Tag(0x0040, 0x4074);
/// Entrance Dose in mGy (0040,8302) DS 1
#[rustfmt::skip]
pub const ENTRANCE_DOSE_INM_GY: Tag = Tag(0x0040, 0x8302);
/// Entrance Dose Derivation (0040,8303) CS 1
#[rustfmt::skip]
pub const ENTRANCE_DOSE_DERIVATION: Tag = Tag(0x0040, 0x8303);
/// Parametric Map Frame Type Sequence (0040,9092) SQ 1
#[rustfmt::skip]
pub const PARAMETRIC_MAP_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0040, 0x9092);
/// Referenced Image Real World Value Mapping Sequence (0040,9094) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9094);
/// Real World Value Mapping Sequence (0040,9096) SQ 1
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);
/// Pixel Value Mapping Code Sequence (0040,9098) SQ 1
#[rustfmt::skip]
pub const PIXEL_VALUE_MAPPING_CODE_SEQUENCE: Tag = Tag(0x0040, 0x9098);
/// LUT Label (0040,9210) SH 1
#[rustfmt::skip]
pub const LUT_LABEL: Tag = Tag(0x0040, 0x9210);
/// Real World Value Last Value Mapped (0040,9211) US or SS 1
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_LAST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9211);
/// Real World Value LUT Data (0040,9212) FD 1-n
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_LUT_DATA: Tag = Tag(0x0040, 0x9212);
/// Double Float Real World Value Last Value Mapped (0040,9213) FD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_REAL_WORLD_VALUE_LAST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9213);
/// Double Float Real World Value First Value Mapped (0040,9214) FD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_REAL_WORLD_VALUE_FIRST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9214);
/// Real World Value First Value Mapped (0040,9216) US or SS 1
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_FIRST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9216);
/// Quantity Definition Sequence (0040,9220) SQ 1
#[rustfmt::skip]
pub const QUANTITY_DEFINITION_SEQUENCE: Tag = Tag(0x0040, 0x9220);
/// Real World Value Intercept (0040,9224) FD 1
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_INTERCEPT: Tag = Tag(0x0040, 0x9224);
/// Real World Value Slope (0040,9225) FD 1
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_SLOPE: Tag = Tag(0x0040, 0x9225);
/// Findings Flag (Trial) (0040,A007) CS 1 (retired)
#[rustfmt::skip]
pub const FINDINGS_FLAG_TRIAL: Tag = Tag(0x0040, 0xA007);
/// Relationship Type (0040,A010) CS 1
#[rustfmt::skip]
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
/// Findings Sequence (Trial) (0040,A020) SQ 1 (retired)
#[rustfmt::skip]
pub const FINDINGS_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA020);
/// Findings Group UID (Trial) (0040,A021) UI 1 (retired)
#[rustfmt::skip]
pub const FINDINGS_GROUP_UID_TRIAL: Tag = Tag(0x0040, 0xA021);
/// Referenced Findings Group UID (Trial) (0040,A022) UI 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_FINDINGS_GROUP_UID_TRIAL: Tag = Tag(0x0040, 0xA022);
/// Findings Group Recording Date (Trial) (0040,A023) DA 1 (retired)
#[rustfmt::skip]
pub const FINDINGS_GROUP_RECORDING_DATE_TRIAL: Tag = Tag(0x0040, 0xA023);
/// Findings Group Recording Time (Trial) (0040,A024) TM 1 (retired)
#[rustfmt::skip]
pub const FINDINGS_GROUP_RECORDING_TIME_TRIAL: Tag = Tag(0x0040, 0xA024);
/// Findings Source Category Code Sequence (Trial) (0040,A026) SQ 1 (retired)
#[rustfmt::skip]
pub const FINDINGS_SOURCE_CATEGORY_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA026);
/// Verifying Organization (0040,A027) LO 1
#[rustfmt::skip]
pub const VERIFYING_ORGANIZATION: Tag = Tag(0x0040, 0xA027);
/// Documenting Organization Identifier Code Sequence (Trial) (0040,A028) SQ 1 (retired)
#[rustfmt::skip]
pub const DOCUMENTING_ORGANIZATION_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA028);
/// Verification DateTime (0040,A030) DT 1
#[rustfmt::skip]
pub const VERIFICATION_DATE_TIME: Tag = Tag(0x0040, 0xA030);
/// Observation DateTime (0040,A032) DT 1
#[rustfmt::skip]
pub const OBSERVATION_DATE_TIME: Tag = Tag(0x0040, 0xA032);
/// Observation Start DateTime (0040,A033) DT 1
#[rustfmt::skip]
pub const OBSERVATION_START_DATE_TIME: Tag = Tag(0x0040, 0xA033);
/// Value Type (0040,A040) CS 1
#[rustfmt::skip]
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// Concept Name Code Sequence (0040,A043) SQ 1
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// Measurement Precision Description (Trial) (0040,A047) LO 1 (retired)
#[rustfmt::skip]
pub const MEASUREMENT_PRECISION_DESCRIPTION_TRIAL: Tag = Tag(0x0040, 0xA047);
/// Continuity Of Content (0040,A050) CS 1
#[rustfmt::skip]
pub const CONTINUITY_OF_CONTENT: Tag = Tag(0x0040, 0xA050);
/// Urgency or Priority Alerts (Trial) (0040,A057) CS 1-n (retired)
#[rustfmt::skip]
pub const URGENCY_OR_PRIORITY_ALERTS_TRIAL: Tag = Tag(0x0040, 0xA057);
/// Sequencing Indicator (Trial) (0040,A060) LO 1 (retired)
#[rustfmt::skip]
pub const SEQUENCING_INDICATOR_TRIAL: Tag = Tag(0x0040, 0xA060);
/// Document Identifier Code Sequence (Trial) (0040,A066) SQ 1 (retired)
#[rustfmt::skip]
pub const DOCUMENT_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA066);
/// Document Author (Trial) (0040,A067) PN 1 (retired)
#[rustfmt::skip]
pub const DOCUMENT_AUTHOR_TRIAL: Tag = Tag(0x0040, 0xA067);
/// Document Author Identifier Code Sequence (Trial) (0040,A068) SQ 1 (retired)
#[rustfmt::skip]
pub const DOCUMENT_AUTHOR_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA068);
/// Identifier Code Sequence (Trial) (0040,A070) SQ 1 (retired)
#[rustfmt::skip]
pub const IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA070);
/// Verifying Observer Sequence (0040,A073) SQ 1
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA073);
/// Object Binary Identifier (Trial) (0040,A074) OB 1 (retired)
#[rustfmt::skip]
pub const OBJECT_BINARY_IDENTIFIER_TRIAL: Tag = Tag(0x0040, 0xA074);
/// Verifying Observer Name (0040,A075) PN 1
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_NAME: Tag = Tag(0x0040, 0xA075);
/// Documenting Observer Identifier Code Sequence (Trial) (0040,A076) SQ 1 (retired)
#[rustfmt::skip]
pub const DOCUMENTING_OBSERVER_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA076);
/// Author Observer Sequence (0040,A078) SQ 1
#[rustfmt::skip]
pub const AUTHOR_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA078);
/// Participant Sequence (0040,A07A) SQ 1
#[rustfmt::skip]
pub const PARTICIPANT_SEQUENCE: Tag = Tag(0x0040, 0xA07A);
/// Custodial Organization Sequence (0040,A07C) SQ 1
#[rustfmt::skip]
pub const CUSTODIAL_ORGANIZATION_SEQUENCE: Tag = Tag(0x0040, 0xA07C);
/// Participation Type (0040,A080) CS 1
#[rustfmt::skip]
pub const PARTICIPATION_TYPE: Tag = Tag(0x0040, 0xA080);
/// Participation DateTime (0040,A082) DT 1
#[rustfmt::skip]
pub const PARTICIPATION_DATE_TIME: Tag = Tag(0x0040, 0xA082);
/// Observer Type (0040,A084) CS 1
#[rustfmt::skip]
pub const OBSERVER_TYPE: Tag = Tag(0x0040, 0xA084);
/// Procedure Identifier Code Sequence (Trial) (0040,A085) SQ 1 (retired)
#[rustfmt::skip]
pub const PROCEDURE_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA085);
/// Verifying Observer Identification Code Sequence (0040,A088) SQ 1
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA088);
/// Object Directory Binary Identifier (Trial) (0040,A089) OB 1 (retired)
#[rustfmt::skip]
pub const OBJECT_DIRECTORY_BINARY_IDENTIFIER_TRIAL: Tag = Tag(0x0040, 0xA089);
/// Equivalent CDA Document Sequence (0040,A090) SQ 1 (retired)
#[rustfmt::skip]
pub const EQUIVALENT_CDA_DOCUMENT_SEQUENCE: Tag = Tag(0x0040, 0xA090);
/// Referenced Waveform Channels (0040,A0B0) US 2-2n
#[rustfmt::skip]
pub const REFERENCED_WAVEFORM_CHANNELS: Tag = Tag(0x0040, 0xA0B0);
/// Date of Document or Verbal Transaction (Trial) (0040,A110) DA 1 (retired)
#[rustfmt::skip]
pub const DATE_OF_DOCUMENT_OR_VERBAL_TRANSACTION_TRIAL: Tag = Tag(0x0040, 0xA110);
/// Time of Document Creation or Verbal Transaction (Trial) (0040,A112) TM 1 (retired)
#[rustfmt::skip]
pub const TIME_OF_DOCUMENT_CREATION_OR_VERBAL_TRANSACTION_TRIAL: Tag = Tag(0x0040, 0xA112);
/// DateTime (0040,A120) DT 1
#[rustfmt::skip]
pub const DATE_TIME: Tag = Tag(0x0040, 0xA120);
/// Date (0040,A121) DA 1
#[rustfmt::skip]
pub const DATE: Tag = Tag(0x0040, 0xA121);
/// Time (0040,A122) TM 1
#[rustfmt::skip]
pub const TIME: Tag = Tag(0x0040, 0xA122);
/// Person Name (0040,A123) PN 1
#[rustfmt::skip]
pub const PERSON_NAME: Tag = Tag(0x0040, 0xA123);
/// UID (0040,A124) UI 1
#[rustfmt::skip]
pub const UID: Tag = Tag(0x0040, 0xA124);
/// Report Status ID (Trial) (0040,A125) CS 2 (retired)
#[rustfmt::skip]
pub const REPORT_STATUS_ID_TRIAL: Tag = Tag(0x0040, 0xA125);
/// Temporal Range Type (0040,A130) CS 1
#[rustfmt::skip]
pub const TEMPORAL_RANGE_TYPE: Tag = Tag(0x0040, 0xA130);
/// Referenced Sample Positions (0040,A132) UL 1-n
#[rustfmt::skip]
pub const REFERENCED_SAMPLE_POSITIONS: Tag = Tag(0x0040, 0xA132);
/// Referenced Frame Numbers (0040,A136) US 1-n (retired)
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBERS: Tag = Tag(0x0040, 0xA136);
/// Referenced Time Offsets (0040,A138) DS 1-n
#[rustfmt::skip]
pub const REFERENCED_TIME_OFFSETS: Tag = Tag(0x0040, 0xA138);
/// Referenced DateTime (0040,A13A) DT 1-n
#[rustfmt::skip]
pub const REFERENCED_DATE_TIME: Tag = Tag(0x0040, 0xA13A);
/// Text Value (0040,A160) UT 1
#[rustfmt::skip]
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// Floating Point Value (0040,A161) FD 1-n
#[rustfmt::skip]
pub const FLOATING_POINT_VALUE: Tag = Tag(0x0040, 0xA161);
/// Rational Numerator Value (0040,A162) SL 1-n
#[rustfmt::skip]
pub const RATIONAL_NUMERATOR_VALUE: Tag = Tag(0x0040, 0xA162);
/// Rational Denominator Value (0040,A163) UL 1-n
#[rustfmt::skip]
pub const RATIONAL_DENOMINATOR_VALUE: Tag = Tag(0x0040, 0xA163);
/// Observation Category Code Sequence (Trial) (0040,A167) SQ 1 (retired)
#[rustfmt::skip]
pub const OBSERVATION_CATEGORY_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA167);
/// Concept Code Sequence (0040,A168) SQ 1
#[rustfmt::skip]
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// Bibliographic Citation (Trial) (0040,A16A) ST 1 (retired)
#[rustfmt::skip]
pub const BIBLIOGRAPHIC_CITATION_TRIAL: Tag = Tag(0x0040, 0xA16A);
/// Purpose of Reference Code Sequence (0040,A170) SQ 1
#[rustfmt::skip]
pub const PURPOSE_OF_REFERENCE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA170);
/// Observation UID (0040,A171) UI 1
#[rustfmt::skip]
pub const OBSERVATION_UID: Tag = Tag(0x0040, 0xA171);
/// Referenced Observation UID (Trial) (0040,A172) UI 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_OBSERVATION_UID_TRIAL: Tag = Tag(0x0040, 0xA172);
/// Referenced Observation Class (Trial) (0040,A173) CS 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_OBSERVATION_CLASS_TRIAL: Tag = Tag(0x0040, 0xA173);
/// Referenced Object Observation Class (Trial) (0040,A174) CS 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_OBJECT_OBSERVATION_CLASS_TRIAL: Tag = Tag(0x0040, 0xA174);
/// Annotation Group Number (0040,A180) US 1
#[rustfmt::skip]
pub const ANNOTATION_GROUP_NUMBER: Tag = Tag(0x0040, 0xA180);
/// Observation Date (Trial) (0040,A192) DA 1 (retired)
#[rustfmt::skip]
pub const OBSERVATION_DATE_TRIAL: Tag = Tag(0x0040, 0xA192);
/// Observation Time (Trial) (0040,A193) TM 1 (retired)
#[rustfmt::skip]
pub const OBSERVATION_TIME_TRIAL: Tag = Tag(0x0040, 0xA193);
/// Measurement Automation (Trial) (0040,A194) CS 1 (retired)
#[rustfmt::skip]
pub const MEASUREMENT_AUTOMATION_TRIAL: Tag = Tag(0x0040, 0xA194);
/// Modifier Code Sequence (0040,A195) SQ 1
#[rustfmt::skip]
pub const MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA195);
/// Identification Description (Trial) (0040,A224) ST 1 (retired)
#[rustfmt::skip]
pub const IDENTIFICATION_DESCRIPTION_TRIAL: Tag = Tag(0x0040, 0xA224);
/// Coordinates Set Geometric Type (Trial) (0040,A290) CS 1 (retired)
#[rustfmt::skip]
pub const COORDINATES_SET_GEOMETRIC_TYPE_TRIAL: Tag = Tag(0x0040, 0xA290);
/// Algorithm Code Sequence (Trial) (0040,A296) SQ 1 (retired)
#[rustfmt::skip]
pub const ALGORITHM_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA296);
/// Algorithm Description (Trial) (0040,A297) ST 1 (retired)
#[rustfmt::skip]
pub const ALGORITHM_DESCRIPTION_TRIAL: Tag = Tag(0x0040, 0xA297);
/// Pixel Coordinates Set (Trial) (0040,A29A) SL 2-2n (retired)
#[rustfmt::skip]
pub const PIXEL_COORDINATES_SET_TRIAL: Tag = Tag(0x0040, 0xA29A);
/// Measured Value Sequence (0040,A300) SQ 1
#[rustfmt::skip]
pub const MEASURED_VALUE_SEQUENCE: Tag = Tag(0x0040, 0xA300);
/// Numeric Value Qualifier Code Sequence (0040,A301) SQ 1
#[rustfmt::skip]
pub const NUMERIC_VALUE_QUALIFIER_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA301);
/// Current Observer (Trial) (0040,A307) PN 1 (retired)
#[rustfmt::skip]
pub const CURRENT_OBSERVER_TRIAL: Tag = Tag(0x0040, 0xA307);
/// Numeric Value (0040,A30A) DS 1-n
#[rustfmt::skip]
pub const NUMERIC_VALUE: Tag = Tag(0x0040, 0xA30A);
/// Referenced Accession Sequence (Trial) (0040,A313) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_ACCESSION_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA313);
/// Report Status Comment (Trial) (0040,A33A) ST 1 (retired)
#[rustfmt::skip]
pub const REPORT_STATUS_COMMENT_TRIAL: Tag = Tag(0x0040, 0xA33A);
/// Procedure Context Sequence (Trial) (0040,A340) SQ 1 (retired)
#[rustfmt::skip]
pub const PROCEDURE_CONTEXT_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA340);
/// Verbal Source (Trial) (0040,A352) PN 1 (retired)
#[rustfmt::skip]
pub const VERBAL_SOURCE_TRIAL: Tag = Tag(0x0040, 0xA352);
/// Address (Trial) (0040,A353) ST 1 (retired)
#[rustfmt::skip]
pub const ADDRESS_TRIAL: Tag = Tag(0x0040, 0xA353);
/// Telephone Number (Trial) (0040,A354) LO 1 (retired)
#[rustfmt::skip]
pub const TELEPHONE_NUMBER_TRIAL: Tag = Tag(0x0040, 0xA354);
/// Verbal Source Identifier Code Sequence (Trial) (0040,A358) SQ 1 (retired)
#[rustfmt::skip]
pub const VERBAL_SOURCE_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA358);
/// Predecessor Documents Sequence (0040,A360) SQ 1
#[rustfmt::skip]
pub const PREDECESSOR_DOCUMENTS_SEQUENCE: Tag = Tag(0x0040, 0xA360);
/// Referenced Request Sequence (0040,A370) SQ 1
#[rustfmt::skip]
pub const REFERENCED_REQUEST_SEQUENCE: Tag = Tag(0x0040, 0xA370);
/// Performed Procedure Code Sequence (0040,A372) SQ 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA372);
/// Current Requested Procedure Evidence Sequence (0040,A375) SQ 1
#[rustfmt::skip]
pub const CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA375);
/// Report Detail Sequence (Trial) (0040,A380) SQ 1 (retired)
#[rustfmt::skip]
pub const REPORT_DETAIL_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA380);
/// Pertinent Other Evidence Sequence (0040,A385) SQ 1
#[rustfmt::skip]
pub const PERTINENT_OTHER_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA385);
/// HL7 Structured Document Reference Sequence (0040,A390) SQ 1
#[rustfmt::skip]
pub const HL7STRUCTURED_DOCUMENT_REFERENCE_SEQUENCE: Tag = Tag(0x0040, 0xA390);
/// Observation Subject UID (Trial) (0040,A402) UI 1 (retired)
#[rustfmt::skip]
pub const OBSERVATION_SUBJECT_UID_TRIAL: Tag = Tag(0x0040, 0xA402);
/// Observation Subject Class (Trial) (0040,A403) CS 1 (retired)
#[rustfmt::skip]
pub const OBSERVATION_SUBJECT_CLASS_TRIAL: Tag = Tag(0x0040, 0xA403);
/// Observation Subject Type Code Sequence (Trial) (0040,A404) SQ 1 (retired)
#[rustfmt::skip]
pub const OBSERVATION_SUBJECT_TYPE_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA404);
/// Completion Flag (0040,A491) CS 1
#[rustfmt::skip]
pub const COMPLETION_FLAG: Tag = Tag(0x0040, 0xA491);
/// Completion Flag Description (0040,A492) LO 1
#[rustfmt::skip]
pub const COMPLETION_FLAG_DESCRIPTION: Tag = Tag(0x0040, 0xA492);
/// Verification Flag (0040,A493) CS 1
#[rustfmt::skip]
pub const VERIFICATION_FLAG: Tag = Tag(0x0040, 0xA493);
/// Archive Requested (0040,A494) CS 1
#[rustfmt::skip]
pub const ARCHIVE_REQUESTED: Tag = Tag(0x0040, 0xA494);
/// Preliminary Flag (0040,A496) CS 1
#[rustfmt::skip]
pub const PRELIMINARY_FLAG: Tag = Tag(0x0040, 0xA496);
/// Content Template Sequence (0040,A504) SQ 1
#[rustfmt::skip]
pub const CONTENT_TEMPLATE_SEQUENCE: Tag = Tag(0x0040, 0xA504);
/// Identical Documents Sequence (0040,A525) SQ 1
#[rustfmt::skip]
pub const IDENTICAL_DOCUMENTS_SEQUENCE: Tag = Tag(0x0040, 0xA525);
/// Observation Subject Context Flag (Trial) (0040,A600) CS 1 (retired)
#[rustfmt::skip]
pub const OBSERVATION_SUBJECT_CONTEXT_FLAG_TRIAL: Tag = Tag(0x0040, 0xA600);
/// Observer Context Flag (Trial) (0040,A601) CS 1 (retired)
#[rustfmt::skip]
pub const OBSERVER_CONTEXT_FLAG_TRIAL: Tag = Tag(0x0040, 0xA601);
/// Procedure Context Flag (Trial) (0040,A603) CS 1 (retired)
#[rustfmt::skip]
pub const PROCEDURE_CONTEXT_FLAG_TRIAL: Tag = Tag(0x0040, 0xA603);
/// Content Sequence (0040,A730) SQ 1
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// Relationship Sequence (Trial) (0040,A731) SQ 1 (retired)
#[rustfmt::skip]
pub const RELATIONSHIP_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA731);
/// Relationship Type Code Sequence (Trial) (0040,A732) SQ 1 (retired)
#[rustfmt::skip]
pub const RELATIONSHIP_TYPE_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA732);
/// Language Code Sequence (Trial) (0040,A744) SQ 1 (retired)
#[rustfmt::skip]
pub const LANGUAGE_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA744);
/// Tabulated Values Sequence (0040,A801) SQ 1
#[rustfmt::skip]
pub const TABULATED_VALUES_SEQUENCE: Tag = Tag(0x0040, 0xA801);
/// Number of Table Rows (0040,A802) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_TABLE_ROWS: Tag = Tag(0x0040, 0xA802);
/// Number of Table Columns (0040,A803) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_TABLE_COLUMNS: Tag = Tag(0x0040, 0xA803);
/// Table Row Number (0040,A804) UL 1
#[rustfmt::skip]
pub const TABLE_ROW_NUMBER: Tag = Tag(0x0040, 0xA804);
/// Table Column Number (0040,A805) UL 1
#[rustfmt::skip]
pub const TABLE_COLUMN_NUMBER: Tag = Tag(0x0040, 0xA805);
/// Table Row Definition Sequence (0040,A806) SQ 1
#[rustfmt::skip]
pub const TABLE_ROW_DEFINITION_SEQUENCE: Tag = Tag(0x0040, 0xA806);
/// Table Column Definition Sequence (0040,A807) SQ 1
#[rustfmt::skip]
pub const TABLE_COLUMN_DEFINITION_SEQUENCE: Tag = Tag(0x0040, 0xA807);
/// Cell Values Sequence (0040,A808) SQ 1
#[rustfmt::skip]
pub const CELL_VALUES_SEQUENCE: Tag = Tag(0x0040, 0xA808);
/// Uniform Resource Locator (Trial) (0040,A992) ST 1 (retired)
#[rustfmt::skip]
pub const UNIFORM_RESOURCE_LOCATOR_TRIAL: Tag = Tag(0x0040, 0xA992);
/// Waveform Annotation Sequence (0040,B020) SQ 1
#[rustfmt::skip]
pub const WAVEFORM_ANNOTATION_SEQUENCE: Tag = Tag(0x0040, 0xB020);
/// Template Identifier (0040,DB00) CS 1
#[rustfmt::skip]
pub const TEMPLATE_IDENTIFIER: Tag = Tag(0x0040, 0xDB00);
/// Template Version (0040,DB06) DT 1 (retired)
#[rustfmt::skip]
pub const TEMPLATE_VERSION: Tag = Tag(0x0040, 0xDB06);
/// Template Local Version (0040,DB07) DT 1 (retired)
#[rustfmt::skip]
pub const TEMPLATE_LOCAL_VERSION: Tag = Tag(0x0040, 0xDB07);
/// Template Extension Flag (0040,DB0B) CS 1 (retired)
#[rustfmt::skip]
pub const TEMPLATE_EXTENSION_FLAG: Tag = Tag(0x0040, 0xDB0B);
/// Template Extension Organization UID (0040,DB0C) UI 1 (retired)
#[rustfmt::skip]
pub const TEMPLATE_EXTENSION_ORGANIZATION_UID: Tag = Tag(0x0040, 0xDB0C);
/// Template Extension Creator UID (0040,DB0D) UI 1 (retired)
#[rustfmt::skip]
pub const TEMPLATE_EXTENSION_CREATOR_UID: Tag = Tag(0x0040, 0xDB0D);
/// Referenced Content Item Identifier (0040,DB73) UL 1-n
#[rustfmt::skip]
pub const REFERENCED_CONTENT_ITEM_IDENTIFIER: Tag = Tag(0x0040, 0xDB73);
/// HL7 Instance Identifier (0040,E001) ST 1
#[rustfmt::skip]
pub const HL7INSTANCE_IDENTIFIER: Tag = Tag(0x0040, 0xE001);
/// HL7 Document Effective Time (0040,E004) DT 1
#[rustfmt::skip]
pub const HL7DOCUMENT_EFFECTIVE_TIME: Tag = Tag(0x0040, 0xE004);
/// HL7 Document Type Code Sequence (0040,E006) SQ 1
#[rustfmt::skip]
pub const HL7DOCUMENT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xE006);
/// Document Class Code Sequence (0040,E008) SQ 1
#[rustfmt::skip]
pub const DOCUMENT_CLASS_CODE_SEQUENCE: Tag = Tag(0x0040, 0xE008);
/// Retrieve URI (0040,E010) UR 1
#[rustfmt::skip]
pub const RETRIEVE_URI: Tag = Tag(0x0040, 0xE010);
/// Retrieve Location UID (0040,E011) UI 1
#[rustfmt::skip]
pub const RETRIEVE_LOCATION_UID: Tag = Tag(0x0040, 0xE011);
/// Type of Instances (0040,E020) CS 1
#[rustfmt::skip]
pub const TYPE_OF_INSTANCES: Tag = Tag(0x0040, 0xE020);
/// DICOM Retrieval Sequence (0040,E021) SQ 1
#[rustfmt::skip]
pub const DICOM_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE021);
/// DICOM Media Retrieval Sequence (0040,E022) SQ 1
#[rustfmt::skip]
pub const DICOM_MEDIA_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE022);
/// WADO Retrieval Sequence (0040,E023) SQ 1
#[rustfmt::skip]
pub const WADO_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE023);
/// XDS Retrieval Sequence (0040,E024) SQ 1
#[rustfmt::skip]
pub const XDS_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE024);
/// WADO-RS Retrieval Sequence (0040,E025) SQ 1
#[rustfmt::skip]
pub const WADORS_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE025);
/// Repository Unique ID (0040,E030) UI 1
#[rustfmt::skip]
pub const REPOSITORY_UNIQUE_ID: Tag = Tag(0x0040, 0xE030);
/// Home Community ID (0040,E031) UI 1
#[rustfmt::skip]
pub const HOME_COMMUNITY_ID: Tag = Tag(0x0040, 0xE031);
/// Document Title (0042,0010) ST 1
#[rustfmt::skip]
pub const DOCUMENT_TITLE: Tag = Tag(0x0042, 0x0010);
/// Encapsulated Document (0042,0011) OB 1
#[rustfmt::skip]
pub const ENCAPSULATED_DOCUMENT: Tag = Tag(0x0042, 0x0011);
/// MIME Type of Encapsulated Document (0042,0012) LO 1
#[rustfmt::skip]
pub const MIME_TYPE_OF_ENCAPSULATED_DOCUMENT: Tag = Tag(0x0042, 0x0012);
/// Source Instance Sequence (0042,0013) SQ 1
#[rustfmt::skip]
pub const SOURCE_INSTANCE_SEQUENCE: Tag = Tag(0x0042, 0x0013);
/// List of MIME Types (0042,0014) LO 1-n
#[rustfmt::skip]
pub const LIST_OF_MIME_TYPES: Tag = Tag(0x0042, 0x0014);
/// Encapsulated Document Length (0042,0015) UL 1
#[rustfmt::skip]
pub const ENCAPSULATED_DOCUMENT_LENGTH: Tag = Tag(0x0042, 0x0015);
/// Product Package Identifier (0044,0001) ST 1
#[rustfmt::skip]
pub const PRODUCT_PACKAGE_IDENTIFIER: Tag = Tag(0x0044, 0x0001);
/// Substance Administration Approval (0044,0002) CS 1
#[rustfmt::skip]
pub const SUBSTANCE_ADMINISTRATION_APPROVAL: Tag = Tag(0x0044, 0x0002);
/// Approval Status Further Description (0044,0003) LT 1
#[rustfmt::skip]
pub const APPROVAL_STATUS_FURTHER_DESCRIPTION: Tag = Tag(0x0044, 0x0003);
/// Approval Status DateTime (0044,0004) DT 1
#[rustfmt::skip]
pub const APPROVAL_STATUS_DATE_TIME: Tag = Tag(0x0044, 0x0004);
/// Product Type Code Sequence (0044,0007) SQ 1
#[rustfmt::skip]
pub const PRODUCT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0044, 0x0007);
/// Product Name (0044,0008) LO 1-n
#[rustfmt::skip]
pub const PRODUCT_NAME: Tag = Tag(0x0044, 0x0008);
/// Product Description (0044,0009) LT 1
#[rustfmt::skip]
pub const PRODUCT_DESCRIPTION: Tag = Tag(0x0044, 0x0009);
/// Product Lot Identifier (0044,000A) LO 1
#[rustfmt::skip]
pub const PRODUCT_LOT_IDENTIFIER: Tag = Tag(0x0044, 0x000A);
/// Product Expiration DateTime (0044,000B) DT 1
#[rustfmt::skip]
pub const PRODUCT_EXPIRATION_DATE_TIME: Tag = Tag(0x0044, 0x000B);
/// Substance Administration DateTime (0044,0010) DT 1
#[rustfmt::skip]
pub const SUBSTANCE_ADMINISTRATION_DATE_TIME: Tag = Tag(0x0044, 0x0010);
/// Substance Administration Notes (0044,0011) LO 1
#[rustfmt::skip]
pub const SUBSTANCE_ADMINISTRATION_NOTES: Tag = Tag(0x0044, 0x0011);
/// Substance Administration Device ID (0044,0012) LO 1
#[rustfmt::skip]
pub const SUBSTANCE_ADMINISTRATION_DEVICE_ID: Tag = Tag(0x0044, 0x0012);
/// Product Parameter Sequence (0044,0013) SQ 1
#[rustfmt::skip]
pub const PRODUCT_PARAMETER_SEQUENCE: Tag = Tag(0x0044, 0x0013);
/// Substance Administration Parameter Sequence (0044,0019) SQ 1
#[rustfmt::skip]
pub const SUBSTANCE_ADMINISTRATION_PARAMETER_SEQUENCE: Tag = Tag(0x0044, 0x0019);
/// Imaged Volume Width (0048,0001) FL 1
#[rustfmt::skip]
pub const IMAGED_VOLUME_WIDTH: Tag = Tag(0x0048, 0x0001);
/// Imaged Volume Height (0048,0002) FL 1
#[rustfmt::skip]
pub const IMAGED_VOLUME_HEIGHT: Tag = Tag(0x0048, 0x0002);
/// Imaged Volume Depth (0048,0003) FL 1
#[rustfmt::skip]
pub const IMAGED_VOLUME_DEPTH: Tag = Tag(0x0048, 0x0003);
/// Total Pixel Matrix Columns (0048,0006) UL 1
#[rustfmt::skip]
pub const TOTAL_PIXEL_MATRIX_COLUMNS: Tag = Tag(0x0048, 0x0006);
/// Total Pixel Matrix Rows (0048,0007) UL 1
#[rustfmt::skip]
pub const TOTAL_PIXEL_MATRIX_ROWS: Tag = Tag(0x0048, 0x0007);
/// Total Pixel Matrix Origin Sequence (0048,0008) SQ 1
#[rustfmt::skip]
pub const TOTAL_PIXEL_MATRIX_ORIGIN_SEQUENCE: Tag = Tag(0x0048, 0x0008);
/// Specimen Label in Image (0048,0010) CS 1
#[rustfmt::skip]
pub const SPECIMEN_LABEL_IN_IMAGE: Tag = Tag(0x0048, 0x0010);
/// Focus Method (0048,0011) CS 1
#[rustfmt::skip]
pub const FOCUS_METHOD: Tag = Tag(0x0048, 0x0011);
/// Extended Depth of Field (0048,0012) CS 1
#[rustfmt::skip]
pub const EXTENDED_DEPTH_OF_FIELD: Tag = Tag(0x0048, 0x0012);
/// Number of Focal Planes (0048,0013) US 1
#[rustfmt::skip]
pub const NUMBER_OF_FOCAL_PLANES: Tag = Tag(0x0048, 0x0013);
/// Distance Between Focal Planes (0048,0014) FL 1
#[rustfmt::skip]
pub const DISTANCE_BETWEEN_FOCAL_PLANES: Tag = Tag(0x0048, 0x0014);
/// Recommended Absent Pixel CIELab Value (0048,0015) US 3
#[rustfmt::skip]
pub const RECOMMENDED_ABSENT_PIXEL_CIE_LAB_VALUE: Tag = Tag(0x0048, 0x0015);
/// Illuminator Type Code Sequence (0048,0100) SQ 1
#[rustfmt::skip]
pub const ILLUMINATOR_TYPE_CODE_SEQUENCE: Tag = Tag(0x0048, 0x0100);
/// Image Orientation (Slide) (0048,0102) DS 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_SLIDE: Tag = Tag(0x0048, 0x0102);
/// Optical Path Sequence (0048,0105) SQ 1
#[rustfmt::skip]
pub const OPTICAL_PATH_SEQUENCE: Tag = Tag(0x0048, 0x0105);
/// Optical Path Identifier (0048,0106) SH 1
#[rustfmt::skip]
pub const OPTICAL_PATH_IDENTIFIER: Tag = Tag(0x0048, 0x0106);
/// Optical Path Description (0048,0107) ST 1
#[rustfmt::skip]
pub const OPTICAL_PATH_DESCRIPTION: Tag = Tag(0x0048, 0x0107);
/// Illumination Color Code Sequence (0048,0108) SQ 1
#[rustfmt::skip]
pub const ILLUMINATION_COLOR_CODE_SEQUENCE: Tag = Tag(0x0048, 0x0108);
/// Specimen Reference Sequence (0048,0110) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_REFERENCE_SEQUENCE: Tag = Tag(0x0048, 0x0110);
/// Condenser Lens Power (0048,0111) DS 1
#[rustfmt::skip]
pub const CONDENSER_LENS_POWER: Tag = Tag(0x0048, 0x0111);
/// Objective Lens Power (0048,0112) DS 1
#[rustfmt::skip]
pub const OBJECTIVE_LENS_POWER: Tag = Tag(0x0048, 0x0112);
/// Objective Lens Numerical Aperture (0048,0113) DS 1
#[rustfmt::skip]
pub const OBJECTIVE_LENS_NUMERICAL_APERTURE: Tag = Tag(0x0048, 0x0113);
/// Palette Color Lookup Table Sequence (0048,0120) SQ 1
#[rustfmt::skip]
pub const PALETTE_COLOR_LOOKUP_TABLE_SEQUENCE: Tag = Tag(0x0048, 0x0120);
/// Referenced Image Navigation Sequence (0048,0200) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_NAVIGATION_SEQUENCE: Tag = Tag(0x0048, 0x0200);
/// Top Left Hand Corner of Localizer Area (0048,0201) US 2
#[rustfmt::skip]
pub const TOP_LEFT_HAND_CORNER_OF_LOCALIZER_AREA: Tag = Tag(0x0048, 0x0201);
/// Bottom Right Hand Corner of Localizer Area (0048,0202) US 2
#[rustfmt::skip]
pub const BOTTOM_RIGHT_HAND_CORNER_OF_LOCALIZER_AREA: Tag = Tag(0x0048, 0x0202);
/// Optical Path Identification Sequence (0048,0207) SQ 1
#[rustfmt::skip]
pub const OPTICAL_PATH_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0048, 0x0207);
/// Plane Position (Slide) Sequence (0048,021A) SQ 1
#[rustfmt::skip]
pub const PLANE_POSITION_SLIDE_SEQUENCE: Tag = Tag(0x0048, 0x021A);
/// Column Position In Total Image Pixel Matrix (0048,021E) SL 1
#[rustfmt::skip]
pub const COLUMN_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX: Tag = Tag(0x0048, 0x021E);
/// Row Position In Total Image Pixel Matrix (0048,021F) SL 1
#[rustfmt::skip]
pub const ROW_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX: Tag = Tag(0x0048, 0x021F);
/// Pixel Origin Interpretation (0048,0301) CS 1
#[rustfmt::skip]
pub const PIXEL_ORIGIN_INTERPRETATION: Tag = Tag(0x0048, 0x0301);
/// Number of Optical Paths (0048,0302) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_OPTICAL_PATHS: Tag = Tag(0x0048, 0x0302);
/// Total Pixel Matrix Focal Planes (0048,0303) UL 1
#[rustfmt::skip]
pub const TOTAL_PIXEL_MATRIX_FOCAL_PLANES: Tag = Tag(0x0048, 0x0303);
/// Calibration Image (0050,0004) CS 1
#[rustfmt::skip]
pub const CALIBRATION_IMAGE: Tag = Tag(0x0050, 0x0004);
/// Device Sequence (0050,0010) SQ 1
#[rustfmt::skip]
pub const DEVICE_SEQUENCE: Tag = Tag(0x0050, 0x0010);
/// Container Component Type Code Sequence (0050,0012) SQ 1
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0050, 0x0012);
/// Container Component Thickness (0050,0013) FD 1
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_THICKNESS: Tag = Tag(0x0050, 0x0013);
/// Device Length (0050,0014) DS 1
#[rustfmt::skip]
pub const DEVICE_LENGTH: Tag = Tag(0x0050, 0x0014);
/// Container Component Width (0050,0015) FD 1
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_WIDTH: Tag = Tag(0x0050, 0x0015);
/// Device Diameter (0050,0016) DS 1
#[rustfmt::skip]
pub const DEVICE_DIAMETER: Tag = Tag(0x0050, 0x0016);
/// Device Diameter Units (0050,0017) CS 1
#[rustfmt::skip]
pub const DEVICE_DIAMETER_UNITS: Tag = Tag(0x0050, 0x0017);
/// Device Volume (0050,0018) DS 1
#[rustfmt::skip]
pub const DEVICE_VOLUME: Tag = Tag(0x0050, 0x0018);
/// Inter-Marker Distance (0050,0019) DS 1
#[rustfmt::skip]
pub const INTER_MARKER_DISTANCE: Tag = Tag(0x0050, 0x0019);
/// Container Component Material (0050,001A) CS 1
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_MATERIAL: Tag = Tag(0x0050, 0x001A);
/// Container Component ID (0050,001B) LO 1
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_ID: Tag = Tag(0x0050, 0x001B);
/// Container Component Length (0050,001C) FD 1
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_LENGTH: Tag = Tag(0x0050, 0x001C);
/// Container Component Diameter (0050,001D) FD 1
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_DIAMETER: Tag = Tag(0x0050, 0x001D);
/// Container Component Description (0050,001E) LO 1
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_DESCRIPTION: Tag = Tag(0x0050, 0x001E);
/// Device Description (0050,0020) LO 1
#[rustfmt::skip]
pub const DEVICE_DESCRIPTION: Tag = Tag(0x0050, 0x0020);
/// Long Device Description (0050,0021) ST 1
#[rustfmt::skip]
pub const LONG_DEVICE_DESCRIPTION: Tag = Tag(0x0050, 0x0021);
/// Contrast/Bolus Ingredient Percent by Volume (0052,0001) FL 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_INGREDIENT_PERCENT_BY_VOLUME: Tag = Tag(0x0052, 0x0001);
/// OCT Focal Distance (0052,0002) FD 1
#[rustfmt::skip]
pub const OCT_FOCAL_DISTANCE: Tag = Tag(0x0052, 0x0002);
/// Beam Spot Size (0052,0003) FD 1
#[rustfmt::skip]
pub const BEAM_SPOT_SIZE: Tag = Tag(0x0052, 0x0003);
/// Effective Refractive Index (0052,0004) FD 1
#[rustfmt::skip]
pub const EFFECTIVE_REFRACTIVE_INDEX: Tag = Tag(0x0052, 0x0004);
/// OCT Acquisition Domain (0052,0006) CS 1
#[rustfmt::skip]
pub const OCT_ACQUISITION_DOMAIN: Tag = Tag(0x0052, 0x0006);
/// OCT Optical Center Wavelength (0052,0007) FD 1
#[rustfmt::skip]
pub const OCT_OPTICAL_CENTER_WAVELENGTH: Tag = Tag(0x0052, 0x0007);
/// Axial Resolution (0052,0008) FD 1
#[rustfmt::skip]
pub const AXIAL_RESOLUTION: Tag = Tag(0x0052, 0x0008);
/// Ranging Depth (0052,0009) FD 1
#[rustfmt::skip]
pub const RANGING_DEPTH: Tag = Tag(0x0052, 0x0009);
/// A-line Rate (0052,0011) FD 1
#[rustfmt::skip]
pub const A_LINE_RATE: Tag = Tag(0x0052, 0x0011);
/// A-lines Per Frame (0052,0012) US 1
#[rustfmt::skip]
pub const A_LINES_PER_FRAME: Tag = Tag(0x0052, 0x0012);
/// Catheter Rotational Rate (0052,0013) FD 1
#[rustfmt::skip]
pub const CATHETER_ROTATIONAL_RATE: Tag = Tag(0x0052, 0x0013);
/// A-line Pixel Spacing (0052,0014) FD 1
#[rustfmt::skip]
pub const A_LINE_PIXEL_SPACING: Tag = Tag(0x0052, 0x0014);
/// Mode of Percutaneous Access Sequence (0052,0016) SQ 1
#[rustfmt::skip]
pub const MODE_OF_PERCUTANEOUS_ACCESS_SEQUENCE: Tag = Tag(0x0052, 0x0016);
/// Intravascular OCT Frame Type Sequence (0052,0025) SQ 1
#[rustfmt::skip]
pub const INTRAVASCULAR_OCT_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0052, 0x0025);
/// OCT Z Offset Applied (0052,0026) CS 1
#[rustfmt::skip]
pub const OCTZ_OFFSET_APPLIED: Tag = Tag(0x0052, 0x0026);
/// Intravascular Frame Content Sequence (0052,0027) SQ 1
#[rustfmt::skip]
pub const INTRAVASCULAR_FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0052, 0x0027);
/// Intravascular Longitudinal Distance (0052,0028) FD 1
#[rustfmt::skip]
pub const INTRAVASCULAR_LONGITUDINAL_DISTANCE: Tag = Tag(0x0052, 0x0028);
/// Intravascular OCT Frame Content Sequence (0052,0029) SQ 1
#[rustfmt::skip]
pub const INTRAVASCULAR_OCT_FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0052, 0x0029);
/// OCT Z Offset Correction (0052,0030) SS 1
#[rustfmt::skip]
pub const OCTZ_OFFSET_CORRECTION: Tag = Tag(0x0052, 0x0030);
/// Catheter Direction of Rotation (0052,0031) CS 1
#[rustfmt::skip]
pub const CATHETER_DIRECTION_OF_ROTATION: Tag = Tag(0x0052, 0x0031);
/// Seam Line Location (0052,0033) FD 1
#[rustfmt::skip]
pub const SEAM_LINE_LOCATION: Tag = Tag(0x0052, 0x0033);
/// First A-line Location (0052,0034) FD 1
#[rustfmt::skip]
pub const FIRST_A_LINE_LOCATION: Tag = Tag(0x0052, 0x0034);
/// Seam Line Index (0052,0036) US 1
#[rustfmt::skip]
pub const SEAM_LINE_INDEX: Tag = Tag(0x0052, 0x0036);
/// Number of Padded A-lines (0052,0038) US 1
#[rustfmt::skip]
pub const NUMBER_OF_PADDED_ALINES: Tag = Tag(0x0052, 0x0038);
/// Interpolation Type (0052,0039) CS 1
#[rustfmt::skip]
pub const INTERPOLATION_TYPE: Tag = Tag(0x0052, 0x0039);
/// Refractive Index Applied (0052,003A) CS 1
#[rustfmt::skip]
pub const REFRACTIVE_INDEX_APPLIED: Tag = Tag(0x0052, 0x003A);
/// Energy Window Vector (0054,0010) US 1-n
#[rustfmt::skip]
pub const ENERGY_WINDOW_VECTOR: Tag = Tag(0x0054, 0x0010);
/// Number of Energy Windows (0054,0011) US 1
#[rustfmt::skip]
pub const NUMBER_OF_ENERGY_WINDOWS: Tag = Tag(0x0054, 0x0011);
/// Energy Window Information Sequence (0054,0012) SQ 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0012);
/// Energy Window Range Sequence (0054,0013) SQ 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_RANGE_SEQUENCE: Tag = Tag(0x0054, 0x0013);
/// Energy Window Lower Limit (0054,0014) DS 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_LOWER_LIMIT: Tag = Tag(0x0054, 0x0014);
/// Energy Window Upper Limit (0054,0015) DS 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_UPPER_LIMIT: Tag = Tag(0x0054, 0x0015);
/// Radiopharmaceutical Information Sequence (0054,0016) SQ 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
/// Residual Syringe Counts (0054,0017) IS 1
#[rustfmt::skip]
pub const RESIDUAL_SYRINGE_COUNTS: Tag = Tag(0x0054, 0x0017);
/// Energy Window Name (0054,0018) SH 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_NAME: Tag = Tag(0x0054, 0x0018);
/// Detector Vector (0054,0020) US 1-n
#[rustfmt::skip]
pub const DETECTOR_VECTOR: Tag = Tag(0x0054, 0x0020);
/// Number of Detectors (0054,0021) US 1
#[rustfmt::skip]
pub const NUMBER_OF_DETECTORS: Tag = Tag(0x0054, 0x0021);
/// Detector Information Sequence (0054,0022) SQ 1
#[rustfmt::skip]
pub const DETECTOR_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0022);
/// Phase Vector (0054,0030) US 1-n
#[rustfmt::skip]
pub const PHASE_VECTOR: Tag = Tag(0x0054, 0x0030);
/// Number of Phases (0054,0031) US 1
#[rustfmt::skip]
pub const NUMBER_OF_PHASES: Tag = Tag(0x0054, 0x0031);
/// Phase Information Sequence (0054,0032) SQ 1
#[rustfmt::skip]
pub const PHASE_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0032);
/// Number of Frames in Phase (0054,0033) US 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES_IN_PHASE: Tag = Tag(0x0054, 0x0033);
/// Phase Delay (0054,0036) IS 1
#[rustfmt::skip]
pub const PHASE_DELAY: Tag = Tag(0x0054, 0x0036);
/// Pause Between Frames (0054,0038) IS 1
#[rustfmt::skip]
pub const PAUSE_BETWEEN_FRAMES: Tag = Tag(0x0054, 0x0038);
/// Phase Description (0054,0039) CS 1
#[rustfmt::skip]
pub const PHASE_DESCRIPTION: Tag = Tag(0x0054, 0x0039);
/// Rotation Vector (0054,0050) US 1-n
#[rustfmt::skip]
pub const ROTATION_VECTOR: Tag = Tag(0x0054, 0x0050);
/// Number of Rotations (0054,0051) US 1
#[rustfmt::skip]
pub const NUMBER_OF_ROTATIONS: Tag = Tag(0x0054, 0x0051);
/// Rotation Information Sequence (0054,0052) SQ 1
#[rustfmt::skip]
pub const ROTATION_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0052);
/// Number of Frames in Rotation (0054,0053) US 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES_IN_ROTATION: Tag = Tag(0x0054, 0x0053);
/// R-R Interval Vector (0054,0060) US 1-n
#[rustfmt::skip]
pub const RR_INTERVAL_VECTOR: Tag = Tag(0x0054, 0x0060);
/// Number of R-R Intervals (0054,0061) US 1
#[rustfmt::skip]
pub const NUMBER_OF_RR_INTERVALS: Tag = Tag(0x0054, 0x0061);
/// Gated Information Sequence (0054,0062) SQ 1
#[rustfmt::skip]
pub const GATED_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0062);
/// Data Information Sequence (0054,0063) SQ 1
#[rustfmt::skip]
pub const DATA_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0063);
/// Time Slot Vector (0054,0070) US 1-n
#[rustfmt::skip]
pub const TIME_SLOT_VECTOR: Tag = Tag(0x0054, 0x0070);
/// Number of Time Slots (0054,0071) US 1
#[rustfmt::skip]
pub const NUMBER_OF_TIME_SLOTS: Tag = Tag(0x0054, 0x0071);
/// Time Slot Information Sequence (0054,0072) SQ 1
#[rustfmt::skip]
pub const TIME_SLOT_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0072);
/// Time Slot Time (0054,0073) DS 1
#[rustfmt::skip]
pub const TIME_SLOT_TIME: Tag = Tag(0x0054, 0x0073);
/// Slice Vector (0054,0080) US 1-n
#[rustfmt::skip]
pub const SLICE_VECTOR: Tag = Tag(0x0054, 0x0080);
/// Number of Slices (0054,0081) US 1
#[rustfmt::skip]
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// Angular View Vector (0054,0090) US 1-n
#[rustfmt::skip]
pub const ANGULAR_VIEW_VECTOR: Tag = Tag(0x0054, 0x0090);
/// Time Slice Vector (0054,0100) US 1-n
#[rustfmt::skip]
pub const TIME_SLICE_VECTOR: Tag = Tag(0x0054, 0x0100);
/// Number of Time Slices (0054,0101) US 1
#[rustfmt::skip]
pub const NUMBER_OF_TIME_SLICES: Tag = Tag(0x0054, 0x0101);
/// Start Angle (0054,0200) DS 1
#[rustfmt::skip]
pub const START_ANGLE: Tag = Tag(0x0054, 0x0200);
/// Type of Detector Motion (0054,0202) CS 1
#[rustfmt::skip]
pub const TYPE_OF_DETECTOR_MOTION: Tag = Tag(0x0054, 0x0202);
/// Trigger Vector (0054,0210) IS 1-n
#[rustfmt::skip]
pub const TRIGGER_VECTOR: Tag = Tag(0x0054, 0x0210);
/// Number of Triggers in Phase (0054,0211) US 1
#[rustfmt::skip]
pub const NUMBER_OF_TRIGGERS_IN_PHASE: Tag = Tag(0x0054, 0x0211);
/// View Code Sequence (0054,0220) SQ 1
#[rustfmt::skip]
pub const VIEW_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0220);
/// View Modifier Code Sequence (0054,0222) SQ 1
#[rustfmt::skip]
pub const VIEW_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0222);
/// Radionuclide Code Sequence (0054,0300) SQ 1
#[rustfmt::skip]
pub const RADIONUCLIDE_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0300);
/// Administration Route Code Sequence (0054,0302) SQ 1
#[rustfmt::skip]
pub const ADMINISTRATION_ROUTE_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0302);
/// Radiopharmaceutical Code Sequence (0054,0304) SQ 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0304);
/// Calibration Data Sequence (0054,0306) SQ 1
#[rustfmt::skip]
pub const CALIBRATION_DATA_SEQUENCE: Tag = Tag(0x0054, 0x0306);
/// Energy Window Number (0054,0308) US 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_NUMBER: Tag = Tag(0x0054, 0x0308);
/// Image ID (0054,0400) SH 1
#[rustfmt::skip]
pub const IMAGE_ID: Tag = Tag(0x0054, 0x0400);
/// Patient Orientation Code Sequence (0054,0410) SQ 1
#[rustfmt::skip]
pub const PATIENT_ORIENTATION_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0410);
/// Patient Orientation Modifier Code Sequence (0054,0412) SQ 1
#[rustfmt::skip]
pub const PATIENT_ORIENTATION_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0412);
/// Patient Gantry Relationship Code Sequence (0054,0414) SQ 1
#[rustfmt::skip]
pub const PATIENT_GANTRY_RELATIONSHIP_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0414);
/// Slice Progression Direction (0054,0500) CS 1
#[rustfmt::skip]
pub const SLICE_PROGRESSION_DIRECTION: Tag = Tag(0x0054, 0x0500);
/// Scan Progression Direction (0054,0501) CS 1
#[rustfmt::skip]
pub const SCAN_PROGRESSION_DIRECTION: Tag = Tag(0x0054, 0x0501);
/// Series Type (0054,1000) CS 2
#[rustfmt::skip]
pub const SERIES_TYPE: Tag = Tag(0x0054, 0x1000);
/// Units (0054,1001) CS 1
#[rustfmt::skip]
pub const UNITS: Tag = Tag(0x0054, 0x1001);
/// Counts Source (0054,1002) CS 1
#[rustfmt::skip]
pub const COUNTS_SOURCE: Tag = Tag(0x0054, 0x1002);
/// Reprojection Method (0054,1004) CS 1
#[rustfmt::skip]
pub const REPROJECTION_METHOD: Tag = Tag(0x0054, 0x1004);
/// SUV Type (0054,1006) CS 1
#[rustfmt::skip]
pub const SUV_TYPE: Tag = Tag(0x0054, 0x1006);
/// Randoms Correction Method (0054,1100) CS 1
#[rustfmt::skip]
pub const RANDOMS_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1100);
/// Attenuation Correction Method (0054,1101) LO 1
#[rustfmt::skip]
pub const ATTENUATION_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1101);
/// Decay Correction (0054,1102) CS 1
#[rustfmt::skip]
pub const DECAY_CORRECTION: Tag = Tag(0x0054, 0x1102);
/// Reconstruction Method (0054,1103) LO 1
#[rustfmt::skip]
pub const RECONSTRUCTION_METHOD: Tag = Tag(0x0054, 0x1103);
/// Detector Lines of Response Used (0054,1104) LO 1
#[rustfmt::skip]
pub const DETECTOR_LINES_OF_RESPONSE_USED: Tag = Tag(0x0054, 0x1104);
/// Scatter Correction Method (0054,1105) LO 1
#[rustfmt::skip]
pub const SCATTER_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1105);
/// Axial Acceptance (0054,1200) DS 1
#[rustfmt::skip]
pub const AXIAL_ACCEPTANCE: Tag = Tag(0x0054, 0x1200);
/// Axial Mash (0054,1201) IS 2
#[rustfmt::skip]
pub const AXIAL_MASH: Tag = Tag(0x0054, 0x1201);
/// Transverse Mash (0054,1202) IS 1
#[rustfmt::skip]
pub const TRANSVERSE_MASH: Tag = Tag(0x0054, 0x1202);
/// Detector Element Size (0054,1203) DS 2
#[rustfmt::skip]
pub const DETECTOR_ELEMENT_SIZE: Tag = Tag(0x0054, 0x1203);
/// Coincidence Window Width (0054,1210) DS 1
#[rustfmt::skip]
pub const COINCIDENCE_WINDOW_WIDTH: Tag = Tag(0x0054, 0x1210);
/// Secondary Counts Type (0054,1220) CS 1-n
#[rustfmt::skip]
pub const SECONDARY_COUNTS_TYPE: Tag = Tag(0x0054, 0x1220);
/// Frame Reference Time (0054,1300) DS 1
#[rustfmt::skip]
pub const FRAME_REFERENCE_TIME: Tag = Tag(0x0054, 0x1300);
/// Primary (Prompts) Counts Accumulated (0054,1310) IS 1
#[rustfmt::skip]
pub const PRIMARY_PROMPTS_COUNTS_ACCUMULATED: Tag = Tag(0x0054, 0x1310);
/// Secondary Counts Accumulated (0054,1311) IS 1-n
#[rustfmt::skip]
pub const SECONDARY_COUNTS_ACCUMULATED: Tag = Tag(0x0054, 0x1311);
/// Slice Sensitivity Factor (0054,1320) DS 1
#[rustfmt::skip]
pub const SLICE_SENSITIVITY_FACTOR: Tag = Tag(0x0054, 0x1320);
/// Decay Factor (0054,1321) DS 1
#[rustfmt::skip]
pub const DECAY_FACTOR: Tag = Tag(0x0054, 0x1321);
/// Dose Calibration Factor (0054,1322) DS 1
#[rustfmt::skip]
pub const DOSE_CALIBRATION_FACTOR: Tag = Tag(0x0054, 0x1322);
/// Scatter Fraction Factor (0054,1323) DS 1
#[rustfmt::skip]
pub const SCATTER_FRACTION_FACTOR: Tag = Tag(0x0054, 0x1323);
/// Dead Time Factor (0054,1324) DS 1
#[rustfmt::skip]
pub const DEAD_TIME_FACTOR: Tag = Tag(0x0054, 0x1324);
/// Image Index (0054,1330) US 1
#[rustfmt::skip]
pub const IMAGE_INDEX: Tag = Tag(0x0054, 0x1330);
/// Counts Included (0054,1400) CS 1-n (retired)
#[rustfmt::skip]
pub const COUNTS_INCLUDED: Tag = Tag(0x0054, 0x1400);
/// Dead Time Correction Flag (0054,1401) CS 1 (retired)
#[rustfmt::skip]
pub const DEAD_TIME_CORRECTION_FLAG: Tag = Tag(0x0054, 0x1401);
/// Histogram Sequence (0060,3000) SQ 1
#[rustfmt::skip]
pub const HISTOGRAM_SEQUENCE: Tag = Tag(0x0060, 0x3000);
/// Histogram Number of Bins (0060,3002) US 1
#[rustfmt::skip]
pub const HISTOGRAM_NUMBER_OF_BINS: Tag = Tag(0x0060, 0x3002);
/// Histogram First Bin Value (0060,3004) US or SS 1
#[rustfmt::skip]
pub const HISTOGRAM_FIRST_BIN_VALUE: Tag = Tag(0x0060, 0x3004);
/// Histogram Last Bin Value (0060,3006) US or SS 1
#[rustfmt::skip]
pub const HISTOGRAM_LAST_BIN_VALUE: Tag = Tag(0x0060, 0x3006);
/// Histogram Bin Width (0060,3008) US 1
#[rustfmt::skip]
pub const HISTOGRAM_BIN_WIDTH: Tag = Tag(0x0060, 0x3008);
/// Histogram Explanation (0060,3010) LO 1
#[rustfmt::skip]
pub const HISTOGRAM_EXPLANATION: Tag = Tag(0x0060, 0x3010);
/// Histogram Data (0060,3020) UL 1-n
#[rustfmt::skip]
pub const HISTOGRAM_DATA: Tag = Tag(0x0060, 0x3020);
/// Segmentation Type (0062,0001) CS 1
#[rustfmt::skip]
pub const SEGMENTATION_TYPE: Tag = Tag(0x0062, 0x0001);
/// Segment Sequence (0062,0002) SQ 1
#[rustfmt::skip]
pub const SEGMENT_SEQUENCE: Tag = Tag(0x0062, 0x0002);
/// Segmented Property Category Code Sequence (0062,0003) SQ 1
#[rustfmt::skip]
pub const SEGMENTED_PROPERTY_CATEGORY_CODE_SEQUENCE: Tag = Tag(0x0062, 0x0003);
/// Segment Number (0062,0004) US 1
#[rustfmt::skip]
pub const SEGMENT_NUMBER: Tag = Tag(0x0062, 0x0004);
/// Segment Label (0062,0005) LO 1
#[rustfmt::skip]
pub const SEGMENT_LABEL: Tag = Tag(0x0062, 0x0005);
/// Segment Description (0062,0006) ST 1
#[rustfmt::skip]
pub const SEGMENT_DESCRIPTION: Tag = Tag(0x0062, 0x0006);
/// Segmentation Algorithm Identification Sequence (0062,0007) SQ 1
#[rustfmt::skip]
pub const SEGMENTATION_ALGORITHM_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0062, 0x0007);
/// Segment Algorithm Type (0062,0008) CS 1
#[rustfmt::skip]
pub const SEGMENT_ALGORITHM_TYPE: Tag = Tag(0x0062, 0x0008);
/// Segment Algorithm Name (0062,0009) LO 1-n
#[rustfmt::skip]
pub const SEGMENT_ALGORITHM_NAME: Tag = Tag(0x0062, 0x0009);
/// Segment Identification Sequence (0062,000A) SQ 1
#[rustfmt::skip]
pub const SEGMENT_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0062, 0x000A);
/// Referenced Segment Number (0062,000B) US 1-n
#[rustfmt::skip]
pub const REFERENCED_SEGMENT_NUMBER: Tag = Tag(0x0062, 0x000B);
/// Recommended Display Grayscale Value (0062,000C) US 1
#[rustfmt::skip]
pub const RECOMMENDED_DISPLAY_GRAYSCALE_VALUE: Tag = Tag(0x0062, 0x000C);
/// Recommended Display CIELab Value (0062,000D) US 3
#[rustfmt::skip]
pub const RECOMMENDED_DISPLAY_CIE_LAB_VALUE: Tag = Tag(0x0062, 0x000D);
/// Maximum Fractional Value (0062,000E) US 1
#[rustfmt::skip]
pub const MAXIMUM_FRACTIONAL_VALUE: Tag = Tag(0x0062, 0x000E);
/// Segmented Property Type Code Sequence (0062,000F) SQ 1
#[rustfmt::skip]
pub const SEGMENTED_PROPERTY_TYPE_CODE_SEQUENCE: Tag = Tag(0x0062, 0x000F);
/// Segmentation Fractional Type (0062,0010) CS 1
#[rustfmt::skip]
pub const SEGMENTATION_FRACTIONAL_TYPE: Tag = Tag(0x0062, 0x0010);
/// Segmented Property Type Modifier Code Sequence (0062,0011) SQ 1
#[rustfmt::skip]
pub const SEGMENTED_PROPERTY_TYPE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0062, 0x0011);
/// Used Segments Sequence (0062,0012) SQ 1
#[rustfmt::skip]
pub const USED_SEGMENTS_SEQUENCE: Tag = Tag(0x0062, 0x0012);
/// Segments Overlap (0062,0013) CS 1
#[rustfmt::skip]
pub const SEGMENTS_OVERLAP: Tag = Tag(0x0062, 0x0013);
/// Tracking ID (0062,0020) UT 1
#[rustfmt::skip]
pub const TRACKING_ID: Tag = Tag(0x0062, 0x0020);
/// Tracking UID (0062,0021) UI 1
#[rustfmt::skip]
pub const TRACKING_UID: Tag = Tag(0x0062, 0x0021);
/// Deformable Registration Sequence (0064,0002) SQ 1
#[rustfmt::skip]
pub const DEFORMABLE_REGISTRATION_SEQUENCE: Tag = Tag(0x0064, 0x0002);
/// Source Frame of Reference UID (0064,0003) UI 1
#[rustfmt::skip]
pub const SOURCE_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0064, 0x0003);
/// Deformable Registration Grid Sequence (0064,0005) SQ 1
#[rustfmt::skip]
pub const DEFORMABLE_REGISTRATION_GRID_SEQUENCE: Tag = Tag(0x0064, 0x0005);
/// Grid Dimensions (0064,0007) UL 3
#[rustfmt::skip]
pub const GRID_DIMENSIONS: Tag = Tag(0x0064, 0x0007);
/// Grid Resolution (0064,0008) FD 3
#[rustfmt::skip]
pub const GRID_RESOLUTION: Tag = Tag(0x0064, 0x0008);
/// Vector Grid Data (0064,0009) OF 1
#[rustfmt::skip]
pub const VECTOR_GRID_DATA: Tag = Tag(0x0064, 0x0009);
/// Pre Deformation Matrix Registration Sequence (0064,000F) SQ 1
#[rustfmt::skip]
pub const PRE_DEFORMATION_MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0064, 0x000F);
/// Post Deformation Matrix Registration Sequence (0064,0010) SQ 1
#[rustfmt::skip]
pub const POST_DEFORMATION_MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0064, 0x0010);
/// Number of Surfaces (0066,0001) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_SURFACES: Tag = Tag(0x0066, 0x0001);
/// Surface Sequence (0066,0002) SQ 1
#[rustfmt::skip]
pub const SURFACE_SEQUENCE: Tag = Tag(0x0066, 0x0002);
/// Surface Number (0066,0003) UL 1
#[rustfmt::skip]
pub const SURFACE_NUMBER: Tag = Tag(0x0066, 0x0003);
/// Surface Comments (0066,0004) LT 1
#[rustfmt::skip]
pub const SURFACE_COMMENTS: Tag = Tag(0x0066, 0x0004);
/// Surface Processing (0066,0009) CS 1
#[rustfmt::skip]
pub const SURFACE_PROCESSING: Tag = Tag(0x0066, 0x0009);
/// Surface Processing Ratio (0066,000A) FL 1
#[rustfmt::skip]
pub const SURFACE_PROCESSING_RATIO: Tag = Tag(0x0066, 0x000A);
/// Surface Processing Description (0066,000B) LO 1
#[rustfmt::skip]
pub const SURFACE_PROCESSING_DESCRIPTION: Tag = Tag(0x0066, 0x000B);
/// Recommended Presentation Opacity (0066,000C) FL 1
#[rustfmt::skip]
pub const RECOMMENDED_PRESENTATION_OPACITY: Tag = Tag(0x0066, 0x000C);
/// Recommended Presentation Type (0066,000D) CS 1
#[rustfmt::skip]
pub const RECOMMENDED_PRESENTATION_TYPE: Tag = Tag(0x0066, 0x000D);
/// Finite Volume (0066,000E) CS 1
#[rustfmt::skip]
pub const FINITE_VOLUME: Tag = Tag(0x0066, 0x000E);
/// Manifold (0066,0010) CS 1
#[rustfmt::skip]
pub const MANIFOLD: Tag = Tag(0x0066, 0x0010);
/// Surface Points Sequence (0066,0011) SQ 1
#[rustfmt::skip]
pub const SURFACE_POINTS_SEQUENCE: Tag = Tag(0x0066, 0x0011);
/// Surface Points Normals Sequence (0066,0012) SQ 1
#[rustfmt::skip]
pub const SURFACE_POINTS_NORMALS_SEQUENCE: Tag = Tag(0x0066, 0x0012);
/// Surface Mesh Primitives Sequence (0066,0013) SQ 1
#[rustfmt::skip]
pub const SURFACE_MESH_PRIMITIVES_SEQUENCE: Tag = Tag(0x0066, 0x0013);
/// Number of Surface Points (0066,0015) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_SURFACE_POINTS: Tag = Tag(0x0066, 0x0015);
/// Point Coordinates Data (0066,0016) OF 1
#[rustfmt::skip]
pub const POINT_COORDINATES_DATA: Tag = Tag(0x0066, 0x0016);
/// Point Position Accuracy (0066,0017) FL 3
#[rustfmt::skip]
pub const POINT_POSITION_ACCURACY: Tag = Tag(0x0066, 0x0017);
/// Mean Point Distance (0066,0018) FL 1
#[rustfmt::skip]
pub const MEAN_POINT_DISTANCE: Tag = Tag(0x0066, 0x0018);
/// Maximum Point Distance (0066,0019) FL 1
#[rustfmt::skip]
pub const MAXIMUM_POINT_DISTANCE: Tag = Tag(0x0066, 0x0019);
/// Points Bounding Box Coordinates (0066,001A) FL 6
#[rustfmt::skip]
pub const POINTS_BOUNDING_BOX_COORDINATES: Tag = Tag(0x0066, 0x001A);
/// Axis of Rotation (0066,001B) FL 3
#[rustfmt::skip]
pub const AXIS_OF_ROTATION: Tag = Tag(0x0066, 0x001B);
/// Center of Rotation (0066,001C) FL 3
#[rustfmt::skip]
pub const CENTER_OF_ROTATION: Tag = Tag(0x0066, 0x001C);
/// Number of Vectors (0066,001E) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_VECTORS: Tag = Tag(0x0066, 0x001E);
/// Vector Dimensionality (0066,001F) US 1
#[rustfmt::skip]
pub const VECTOR_DIMENSIONALITY: Tag = Tag(0x0066, 0x001F);
/// Vector Accuracy (0066,0020) FL 1-n
#[rustfmt::skip]
pub const VECTOR_ACCURACY: Tag = Tag(0x0066, 0x0020);
/// Vector Coordinate Data (0066,0021) OF 1
#[rustfmt::skip]
pub const VECTOR_COORDINATE_DATA: Tag = Tag(0x0066, 0x0021);
/// Triangle Point Index List (0066,0023) OW 1 (retired)
#[rustfmt::skip]
pub const TRIANGLE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0023);
/// Edge Point Index List (0066,0024) OW 1 (retired)
#[rustfmt::skip]
pub const EDGE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0024);
/// Vertex Point Index List (0066,0025) OW 1 (retired)
#[rustfmt::skip]
pub const VERTEX_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0025);
/// Triangle Strip Sequence (0066,0026) SQ 1
#[rustfmt::skip]
pub const TRIANGLE_STRIP_SEQUENCE: Tag = Tag(0x0066, 0x0026);
/// Triangle Fan Sequence (0066,0027) SQ 1
#[rustfmt::skip]
pub const TRIANGLE_FAN_SEQUENCE: Tag = Tag(0x0066, 0x0027);
/// Line Sequence (0066,0028) SQ 1
#[rustfmt::skip]
pub const LINE_SEQUENCE: Tag = Tag(0x0066, 0x0028);
/// Primitive Point Index List (0066,0029) OW 1 (retired)
#[rustfmt::skip]
pub const PRIMITIVE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0029);
/// Surface Count (0066,002A) UL 1
#[rustfmt::skip]
pub const SURFACE_COUNT: Tag = Tag(0x0066, 0x002A);
/// Referenced Surface Sequence (0066,002B) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SURFACE_SEQUENCE: Tag = Tag(0x0066, 0x002B);
/// Referenced Surface Number (0066,002C) UL 1
#[rustfmt::skip]
pub const REFERENCED_SURFACE_NUMBER: Tag = Tag(0x0066, 0x002C);
/// Segment Surface Generation Algorithm Identification Sequence (0066,002D) SQ 1
#[rustfmt::skip]
pub const SEGMENT_SURFACE_GENERATION_ALGORITHM_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0066, 0x002D);
/// Segment Surface Source Instance Sequence (0066,002E) SQ 1
#[rustfmt::skip]
pub const SEGMENT_SURFACE_SOURCE_INSTANCE_SEQUENCE: Tag = Tag(0x0066, 0x002E);
/// Algorithm Family Code Sequence (0066,002F) SQ 1
#[rustfmt::skip]
pub const ALGORITHM_FAMILY_CODE_SEQUENCE: Tag = Tag(0x0066, 0x002F);
/// Algorithm Name Code Sequence (0066,0030) SQ 1
#[rustfmt::skip]
pub const ALGORITHM_NAME_CODE_SEQUENCE: Tag = Tag(0x0066, 0x0030);
/// Algorithm Version (0066,0031) LO 1
#[rustfmt::skip]
pub const ALGORITHM_VERSION: Tag = Tag(0x0066, 0x0031);
/// Algorithm Parameters (0066,0032) LT 1
#[rustfmt::skip]
pub const ALGORITHM_PARAMETERS: Tag = Tag(0x0066, 0x0032);
/// Facet Sequence (0066,0034) SQ 1
#[rustfmt::skip]
pub const FACET_SEQUENCE: Tag = Tag(0x0066, 0x0034);
/// Surface Processing Algorithm Identification Sequence (0066,0035) SQ 1
#[rustfmt::skip]
pub const SURFACE_PROCESSING_ALGORITHM_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0066, 0x0035);
/// Algorithm Name (0066,0036) LO 1
#[rustfmt::skip]
pub const ALGORITHM_NAME: Tag = Tag(0x0066, 0x0036);
/// Recommended Point Radius (0066,0037) FL 1
#[rustfmt::skip]
pub const RECOMMENDED_POINT_RADIUS: Tag = Tag(0x0066, 0x0037);
/// Recommended Line Thickness (0066,0038) FL 1
#[rustfmt::skip]
pub const RECOMMENDED_LINE_THICKNESS: Tag = Tag(0x0066, 0x0038);
/// Long Primitive Point Index List (0066,0040) OL 1
#[rustfmt::skip]
pub const LONG_PRIMITIVE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0040);
/// Long Triangle Point Index List (0066,0041) OL 1
#[rustfmt::skip]
pub const LONG_TRIANGLE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0041);
/// Long Edge Point Index List (0066,0042) OL 1
#[rustfmt::skip]
pub const LONG_EDGE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0042);
/// Long Vertex Point Index List (0066,0043) OL 1
#[rustfmt::skip]
pub const LONG_VERTEX_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0043);
/// Track Set Sequence (0066,0101) SQ 1
#[rustfmt::skip]
pub const TRACK_SET_SEQUENCE: Tag = Tag(0x0066, 0x0101);
/// Track Sequence (0066,0102) SQ 1
#[rustfmt::skip]
pub const TRACK_SEQUENCE: Tag = Tag(0x0066, 0x0102);
/// Recommended Display CIELab Value List (0066,0103) OW 1
#[rustfmt::skip]
pub const RECOMMENDED_DISPLAY_CIE_LAB_VALUE_LIST: Tag = Tag(0x0066, 0x0103);
/// Tracking Algorithm Identification Sequence (0066,0104) SQ 1
#[rustfmt::skip]
pub const TRACKING_ALGORITHM_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0066, 0x0104);
/// Track Set Number (0066,0105) UL 1
#[rustfmt::skip]
pub const TRACK_SET_NUMBER: Tag = Tag(0x0066, 0x0105);
/// Track Set Label (0066,0106) LO 1
#[rustfmt::skip]
pub const TRACK_SET_LABEL: Tag = Tag(0x0066, 0x0106);
/// Track Set Description (0066,0107) UT 1
#[rustfmt::skip]
pub const TRACK_SET_DESCRIPTION: Tag = Tag(0x0066, 0x0107);
/// Track Set Anatomical Type Code Sequence (0066,0108) SQ 1
#[rustfmt::skip]
pub const TRACK_SET_ANATOMICAL_TYPE_CODE_SEQUENCE: Tag = Tag(0x0066, 0x0108);
/// Measurements Sequence (0066,0121) SQ 1
#[rustfmt::skip]
pub const MEASUREMENTS_SEQUENCE: Tag = Tag(0x0066, 0x0121);
/// Track Set Statistics Sequence (0066,0124) SQ 1
#[rustfmt::skip]
pub const TRACK_SET_STATISTICS_SEQUENCE: Tag = Tag(0x0066, 0x0124);
/// Floating Point Values (0066,0125) OF 1
#[rustfmt::skip]
pub const FLOATING_POINT_VALUES: Tag = Tag(0x0066, 0x0125);
/// Track Point Index List (0066,0129) OL 1
#[rustfmt::skip]
pub const TRACK_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0129);
/// Track Statistics Sequence (0066,0130) SQ 1
#[rustfmt::skip]
pub const TRACK_STATISTICS_SEQUENCE: Tag = Tag(0x0066, 0x0130);
/// Measurement Values Sequence (0066,0132) SQ 1
#[rustfmt::skip]
pub const MEASUREMENT_VALUES_SEQUENCE: Tag = Tag(0x0066, 0x0132);
/// Diffusion Acquisition Code Sequence (0066,0133) SQ 1
#[rustfmt::skip]
pub const DIFFUSION_ACQUISITION_CODE_SEQUENCE: Tag = Tag(0x0066, 0x0133);
/// Diffusion Model Code Sequence (0066,0134) SQ 1
#[rustfmt::skip]
pub const DIFFUSION_MODEL_CODE_SEQUENCE: Tag = Tag(0x0066, 0x0134);
/// Graphic Annotation Sequence (0070,0001) SQ 1
#[rustfmt::skip]
pub const GRAPHIC_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x0001);
/// Graphic Layer (0070,0002) CS 1
#[rustfmt::skip]
pub const GRAPHIC_LAYER: Tag = Tag(0x0070, 0x0002);
/// Bounding Box Annotation Units (0070,0003) CS 1
#[rustfmt::skip]
pub const BOUNDING_BOX_ANNOTATION_UNITS: Tag = Tag(0x0070, 0x0003);
/// Anchor Point Annotation Units (0070,0004) CS 1
#[rustfmt::skip]
pub const ANCHOR_POINT_ANNOTATION_UNITS: Tag = Tag(0x0070, 0x0004);
/// Graphic Annotation Units (0070,0005) CS 1
#[rustfmt::skip]
pub const GRAPHIC_ANNOTATION_UNITS: Tag = Tag(0x0070, 0x0005);
/// Unformatted Text Value (0070,0006) ST 1
#[rustfmt::skip]
pub const UNFORMATTED_TEXT_VALUE: Tag = Tag(0x0070, 0x0006);
/// Text Object Sequence (0070,0008) SQ 1
#[rustfmt::skip]
pub const TEXT_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0008);
/// Graphic Object Sequence (0070,0009) SQ 1
#[rustfmt::skip]
pub const GRAPHIC_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0009);
/// Bounding Box Top Left Hand Corner (0070,0010) FL 2
#[rustfmt::skip]
pub const BOUNDING_BOX_TOP_LEFT_HAND_CORNER: Tag = Tag(0x0070, 0x0010);
/// Bounding Box Bottom Right Hand Corner (0070,0011) FL 2
#[rustfmt::skip]
pub const BOUNDING_BOX_BOTTOM_RIGHT_HAND_CORNER: Tag = Tag(0x0070, 0x0011);
/// Bounding Box Text Horizontal Justification (0070,0012) CS 1
#[rustfmt::skip]
pub const BOUNDING_BOX_TEXT_HORIZONTAL_JUSTIFICATION: Tag = Tag(0x0070, 0x0012);
/// Anchor Point (0070,0014) FL 2
#[rustfmt::skip]
pub const ANCHOR_POINT: Tag = Tag(0x0070, 0x0014);
/// Anchor Point Visibility (0070,0015) CS 1
#[rustfmt::skip]
pub const ANCHOR_POINT_VISIBILITY: Tag = Tag(0x0070, 0x0015);
/// Graphic Dimensions (0070,0020) US 1
#[rustfmt::skip]
pub const GRAPHIC_DIMENSIONS: Tag = Tag(0x0070, 0x0020);
/// Number of Graphic Points (0070,0021) US 1
#[rustfmt::skip]
pub const NUMBER_OF_GRAPHIC_POINTS: Tag = Tag(0x0070, 0x0021);
/// Graphic Data (0070,0022) FL 2-n
#[rustfmt::skip]
pub const GRAPHIC_DATA: Tag = Tag(0x0070, 0x0022);
/// Graphic Type (0070,0023) CS 1
#[rustfmt::skip]
pub const GRAPHIC_TYPE: Tag = Tag(0x0070, 0x0023);
/// Graphic Filled (0070,0024) CS 1
#[rustfmt::skip]
pub const GRAPHIC_FILLED: Tag = Tag(0x0070, 0x0024);
/// Image Rotation (Retired) (0070,0040) IS 1 (retired)
#[rustfmt::skip]
pub const IMAGE_ROTATION_RETIRED: Tag = Tag(0x0070, 0x0040);
/// Image Horizontal Flip (0070,0041) CS 1
#[rustfmt::skip]
pub const IMAGE_HORIZONTAL_FLIP: Tag = Tag(0x0070, 0x0041);
/// Image Rotation (0070,0042) US 1
#[rustfmt::skip]
pub const IMAGE_ROTATION: Tag = Tag(0x0070, 0x0042);
/// Displayed Area Top Left Hand Corner (Trial) (0070,0050) US 2 (retired)
#[rustfmt::skip]
pub const DISPLAYED_AREA_TOP_LEFT_HAND_CORNER_TRIAL: Tag = Tag(0x0070, 0x0050);
/// Displayed Area Bottom Right Hand Corner (Trial) (0070,0051) US 2 (retired)
#[rustfmt::skip]
pub const DISPLAYED_AREA_BOTTOM_RIGHT_HAND_CORNER_TRIAL: Tag = Tag(0x0070, 0x0051);
/// Displayed Area Top Left Hand Corner (0070,0052) SL 2
#[rustfmt::skip]
pub const DISPLAYED_AREA_TOP_LEFT_HAND_CORNER: Tag = Tag(0x0070, 0x0052);
/// Displayed Area Bottom Right Hand Corner (0070,0053) SL 2
#[rustfmt::skip]
pub const DISPLAYED_AREA_BOTTOM_RIGHT_HAND_CORNER: Tag = Tag(0x0070, 0x0053);
/// Displayed Area Selection Sequence (0070,005A) SQ 1
#[rustfmt::skip]
pub const DISPLAYED_AREA_SELECTION_SEQUENCE: Tag = Tag(0x0070, 0x005A);
/// Graphic Layer Sequence (0070,0060) SQ 1
#[rustfmt::skip]
pub const GRAPHIC_LAYER_SEQUENCE: Tag = Tag(0x0070, 0x0060);
/// Graphic Layer Order (0070,0062) IS 1
#[rustfmt::skip]
pub const GRAPHIC_LAYER_ORDER: Tag = Tag(0x0070, 0x0062);
/// Graphic Layer Recommended Display Grayscale Value (0070,0066) US 1
#[rustfmt::skip]
pub const GRAPHIC_LAYER_RECOMMENDED_DISPLAY_GRAYSCALE_VALUE: Tag = Tag(0x0070, 0x0066);
/// Graphic Layer Recommended Display RGB Value (0070,0067) US 3 (retired)
#[rustfmt::skip]
pub const GRAPHIC_LAYER_RECOMMENDED_DISPLAY_RGB_VALUE: Tag = Tag(0x0070, 0x0067);
/// Graphic Layer Description (0070,0068) LO 1
#[rustfmt::skip]
pub const GRAPHIC_LAYER_DESCRIPTION: Tag = Tag(0x0070, 0x0068);
/// Content Label (0070,0080) CS 1
#[rustfmt::skip]
pub const CONTENT_LABEL: Tag = Tag(0x0070, 0x0080);
/// Content Description (0070,0081) LO 1
#[rustfmt::skip]
pub const CONTENT_DESCRIPTION: Tag = Tag(0x0070, 0x0081);
/// Presentation Creation Date (0070,0082) DA 1
#[rustfmt::skip]
pub const PRESENTATION_CREATION_DATE: Tag = Tag(0x0070, 0x0082);
/// Presentation Creation Time (0070,0083) TM 1
#[rustfmt::skip]
pub const PRESENTATION_CREATION_TIME: Tag = Tag(0x0070, 0x0083);
/// Content Creator's Name (0070,0084) PN 1
#[rustfmt::skip]
pub const CONTENT_CREATOR_NAME: Tag = Tag(0x0070, 0x0084);
/// Content Creator's Identification Code Sequence (0070,0086) SQ 1
#[rustfmt::skip]
pub const CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0070, 0x0086);
/// Alternate Content Description Sequence (0070,0087) SQ 1
#[rustfmt::skip]
pub const ALTERNATE_CONTENT_DESCRIPTION_SEQUENCE: Tag = Tag(0x0070, 0x0087);
/// Presentation Size Mode (0070,0100) CS 1
#[rustfmt::skip]
pub const PRESENTATION_SIZE_MODE: Tag = Tag(0x0070, 0x0100);
/// Presentation Pixel Spacing (0070,0101) DS 2
#[rustfmt::skip]
pub const PRESENTATION_PIXEL_SPACING: Tag = Tag(0x0070, 0x0101);
/// Presentation Pixel Aspect Ratio (0070,0102) IS 2
#[rustfmt::skip]
pub const PRESENTATION_PIXEL_ASPECT_RATIO: Tag = Tag(0x0070, 0x0102);
/// Presentation Pixel Magnification Ratio (0070,0103) FL 1
#[rustfmt::skip]
pub const PRESENTATION_PIXEL_MAGNIFICATION_RATIO: Tag = Tag(0x0070, 0x0103);
/// Graphic Group Label (0070,0207) LO 1
#[rustfmt::skip]
pub const GRAPHIC_GROUP_LABEL: Tag = Tag(0x0070, 0x0207);
/// Graphic Group Description (0070,0208) ST 1
#[rustfmt::skip]
pub const GRAPHIC_GROUP_DESCRIPTION: Tag = Tag(0x0070, 0x0208);
/// Compound Graphic Sequence (0070,0209) SQ 1
#[rustfmt::skip]
pub const COMPOUND_GRAPHIC_SEQUENCE: Tag = Tag(0x0070, 0x0209);
/// Compound Graphic Instance ID (0070,0226) UL 1
#[rustfmt::skip]
pub const COMPOUND_GRAPHIC_INSTANCE_ID: Tag = Tag(0x0070, 0x0226);
/// Font Name (0070,0227) LO 1
#[rustfmt::skip]
pub const FONT_NAME: Tag = Tag(0x0070, 0x0227);
/// Font Name Type (0070,0228) CS 1
#[rustfmt::skip]
pub const FONT_NAME_TYPE: Tag = Tag(0x0070, 0x0228);
/// CSS Font Name (0070,0229) LO 1
#[rustfmt::skip]
pub const CSS_FONT_NAME: Tag = Tag(0x0070, 0x0229);
/// Rotation Angle (0070,0230) FD 1
#[rustfmt::skip]
pub const ROTATION_ANGLE: Tag = Tag(0x0070, 0x0230);
/// Text Style Sequence (0070,0231) SQ 1
#[rustfmt::skip]
pub const TEXT_STYLE_SEQUENCE: Tag = Tag(0x0070, 0x0231);
/// Line Style Sequence (0070,0232) SQ 1
#[rustfmt::skip]
pub const LINE_STYLE_SEQUENCE: Tag = Tag(0x0070, 0x0232);
/// Fill Style Sequence (0070,0233) SQ 1
#[rustfmt::skip]
pub const FILL_STYLE_SEQUENCE: Tag = Tag(0x0070, 0x0233);
/// Graphic Group Sequence (0070,0234) SQ 1
#[rustfmt::skip]
pub const GRAPHIC_GROUP_SEQUENCE: Tag = Tag(0x0070, 0x0234);
/// Text Color CIELab Value (0070,0241) US 3
#[rustfmt::skip]
pub const TEXT_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0241);
/// Horizontal Alignment (0070,0242) CS 1
#[rustfmt::skip]
pub const HORIZONTAL_ALIGNMENT: Tag = Tag(0x0070, 0x0242);
/// Vertical Alignment (0070,0243) CS 1
#[rustfmt::skip]
pub const VERTICAL_ALIGNMENT: Tag = Tag(0x0070, 0x0243);
/// Shadow Style (0070,0244) CS 1
#[rustfmt::skip]
pub const SHADOW_STYLE: Tag = Tag(0x0070, 0x0244);
/// Shadow Offset X (0070,0245) FL 1
#[rustfmt::skip]
pub const SHADOW_OFFSET_X: Tag = Tag(0x0070, 0x0245);
/// Shadow Offset Y (0070,0246) FL 1
#[rustfmt::skip]
pub const SHADOW_OFFSET_Y: Tag = Tag(0x0070, 0x0246);
/// Shadow Color CIELab Value (0070,0247) US 3
#[rustfmt::skip]
pub const SHADOW_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0247);
/// Underlined (0070,0248) CS 1
#[rustfmt::skip]
pub const UNDERLINED: Tag = Tag(0x0070, 0x0248);
/// Bold (0070,0249) CS 1
#[rustfmt::skip]
pub const BOLD: Tag = Tag(0x0070, 0x0249);
/// Italic (0070,0250) CS 1
#[rustfmt::skip]
pub const ITALIC: Tag = Tag(0x0070, 0x0250);
/// Pattern On Color CIELab Value (0070,0251) US 3
#[rustfmt::skip]
pub const PATTERN_ON_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0251);
/// Pattern Off Color CIELab Value (0070,0252) US 3
#[rustfmt::skip]
pub const PATTERN_OFF_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0252);
/// Line Thickness (0070,0253) FL 1
#[rustfmt::skip]
pub const LINE_THICKNESS: Tag = Tag(0x0070, 0x0253);
/// Line Dashing Style (0070,0254) CS 1
#[rustfmt::skip]
pub const LINE_DASHING_STYLE: Tag = Tag(0x0070, 0x0254);
/// Line Pattern (0070,0255) UL 1
#[rustfmt::skip]
pub const LINE_PATTERN: Tag = Tag(0x0070, 0x0255);
/// Fill Pattern (0070,0256) OB 1
#[rustfmt::skip]
pub const FILL_PATTERN: Tag = Tag(0x0070, 0x0256);
/// Fill Mode (0070,0257) CS 1
#[rustfmt::skip]
pub const FILL_MODE: Tag = Tag(0x0070, 0x0257);
/// Shadow Opacity (0070,0258) FL 1
#[rustfmt::skip]
pub const SHADOW_OPACITY: Tag = Tag(0x0070, 0x0258);
/// Gap Length (0070,0261) FL 1
#[rustfmt::skip]
pub const GAP_LENGTH: Tag = Tag(0x0070, 0x0261);
/// Diameter of Visibility (0070,0262) FL 1
#[rustfmt::skip]
pub const DIAMETER_OF_VISIBILITY: Tag = Tag(0x0070, 0x0262);
/// Rotation Point (0070,0273) FL 2
#[rustfmt::skip]
pub const ROTATION_POINT: Tag = Tag(0x0070, 0x0273);
/// Tick Alignment (0070,0274) CS 1
#[rustfmt::skip]
pub const TICK_ALIGNMENT: Tag = Tag(0x0070, 0x0274);
/// Show Tick Label (0070,0278) CS 1
#[rustfmt::skip]
pub const SHOW_TICK_LABEL: Tag = Tag(0x0070, 0x0278);
/// Tick Label Alignment (0070,0279) CS 1
#[rustfmt::skip]
pub const TICK_LABEL_ALIGNMENT: Tag = Tag(0x0070, 0x0279);
/// Compound Graphic Units (0070,0282) CS 1
#[rustfmt::skip]
pub const COMPOUND_GRAPHIC_UNITS: Tag = Tag(0x0070, 0x0282);
/// Pattern On Opacity (0070,0284) FL 1
#[rustfmt::skip]
pub const PATTERN_ON_OPACITY: Tag = Tag(0x0070, 0x0284);
/// Pattern Off Opacity (0070,0285) FL 1
#[rustfmt::skip]
pub const PATTERN_OFF_OPACITY: Tag = Tag(0x0070, 0x0285);
/// Major Ticks Sequence (0070,0287) SQ 1
#[rustfmt::skip]
pub const MAJOR_TICKS_SEQUENCE: Tag = Tag(0x0070, 0x0287);
/// Tick Position (0070,0288) FL 1
#[rustfmt::skip]
pub const TICK_POSITION: Tag = Tag(0x0070, 0x0288);
/// Tick Label (0070,0289) SH 1
#[rustfmt::skip]
pub const TICK_LABEL: Tag = Tag(0x0070, 0x0289);
/// Compound Graphic Type (0070,0294) CS 1
#[rustfmt::skip]
pub const COMPOUND_GRAPHIC_TYPE: Tag = Tag(0x0070, 0x0294);
/// Graphic Group ID (0070,0295) UL 1
#[rustfmt::skip]
pub const GRAPHIC_GROUP_ID: Tag = Tag(0x0070, 0x0295);
/// Shape Type (0070,0306) CS 1
#[rustfmt::skip]
pub const SHAPE_TYPE: Tag = Tag(0x0070, 0x0306);
/// Registration Sequence (0070,0308) SQ 1
#[rustfmt::skip]
pub const REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0308);
/// Matrix Registration Sequence (0070,0309) SQ 1
#[rustfmt::skip]
pub const MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0309);
/// Matrix Sequence (0070,030A) SQ 1
#[rustfmt::skip]
pub const MATRIX_SEQUENCE: Tag = Tag(0x0070, 0x030A);
/// Frame of Reference to Displayed Coordinate System Transformation Matrix (0070,030B) FD 16
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_TO_DISPLAYED_COORDINATE_SYSTEM_TRANSFORMATION_MATRIX: Tag = Tag(0x0070, 0x030B);
/// Frame of Reference Transformation Matrix Type (0070,030C) CS 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_TRANSFORMATION_MATRIX_TYPE: Tag = Tag(0x0070, 0x030C);
/// Registration Type Code Sequence (0070,030D) SQ 1
#[rustfmt::skip]
pub const REGISTRATION_TYPE_CODE_SEQUENCE: Tag = Tag(0x0070, 0x030D);
/// Fiducial Description (0070,030F) ST 1
#[rustfmt::skip]
pub const FIDUCIAL_DESCRIPTION: Tag = Tag(0x0070, 0x030F);
/// Fiducial Identifier (0070,0310) SH 1
#[rustfmt::skip]
pub const FIDUCIAL_IDENTIFIER: Tag = Tag(0x0070, 0x0310);
/// Fiducial Identifier Code Sequence (0070,0311) SQ 1
#[rustfmt::skip]
pub const FIDUCIAL_IDENTIFIER_CODE_SEQUENCE: Tag = Tag(0x0070, 0x0311);
/// Contour Uncertainty Radius (0070,0312) FD 1
#[rustfmt::skip]
pub const CONTOUR_UNCERTAINTY_RADIUS: Tag = Tag(0x0070, 0x0312);
/// Used Fiducials Sequence (0070,0314) SQ 1
#[rustfmt::skip]
pub const USED_FIDUCIALS_SEQUENCE: Tag = Tag(0x0070, 0x0314);
/// Graphic Coordinates Data Sequence (0070,0318) SQ 1
#[rustfmt::skip]
pub const GRAPHIC_COORDINATES_DATA_SEQUENCE: Tag = Tag(0x0070, 0x0318);
/// Fiducial UID (0070,031A) UI 1
#[rustfmt::skip]
pub const FIDUCIAL_UID: Tag = Tag(0x0070, 0x031A);
/// Referenced Fiducial UID (0070,031B) UI 1
#[rustfmt::skip]
pub const REFERENCED_FIDUCIAL_UID: Tag = Tag(0x0070, 0x031B);
/// Fiducial Set Sequence (0070,031C) SQ 1
#[rustfmt::skip]
pub const FIDUCIAL_SET_SEQUENCE: Tag = Tag(0x0070, 0x031C);
/// Fiducial Sequence (0070,031E) SQ 1
#[rustfmt::skip]
pub const FIDUCIAL_SEQUENCE: Tag = Tag(0x0070, 0x031E);
/// Fiducials Property Category Code Sequence (0070,031F) SQ 1
#[rustfmt::skip]
pub const FIDUCIALS_PROPERTY_CATEGORY_CODE_SEQUENCE: Tag = Tag(0x0070, 0x031F);
/// Graphic Layer Recommended Display CIELab Value (0070,0401) US 3
#[rustfmt::skip]
pub const GRAPHIC_LAYER_RECOMMENDED_DISPLAY_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0401);
/// Blending Sequence (0070,0402) SQ 1
#[rustfmt::skip]
pub const BLENDING_SEQUENCE: Tag = Tag(0x0070, 0x0402);
/// Relative Opacity (0070,0403) FL 1
#[rustfmt::skip]
pub const RELATIVE_OPACITY: Tag = Tag(0x0070, 0x0403);
/// Referenced Spatial Registration Sequence (0070,0404) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SPATIAL_REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0404);
/// Blending Position (0070,0405) CS 1
#[rustfmt::skip]
pub const BLENDING_POSITION: Tag = Tag(0x0070, 0x0405);
/// Presentation Display Collection UID (0070,1101) UI 1
#[rustfmt::skip]
pub const PRESENTATION_DISPLAY_COLLECTION_UID: Tag = Tag(0x0070, 0x1101);
/// Presentation Sequence Collection UID (0070,1102) UI 1
#[rustfmt::skip]
pub const PRESENTATION_SEQUENCE_COLLECTION_UID: Tag = Tag(0x0070, 0x1102);
/// Presentation Sequence Position Index (0070,1103) US 1
#[rustfmt::skip]
pub const PRESENTATION_SEQUENCE_POSITION_INDEX: Tag = Tag(0x0070, 0x1103);
/// Rendered Image Reference Sequence (0070,1104) SQ 1
#[rustfmt::skip]
pub const RENDERED_IMAGE_REFERENCE_SEQUENCE: Tag = Tag(0x0070, 0x1104);
/// Volumetric Presentation State Input Sequence (0070,1201) SQ 1
#[rustfmt::skip]
pub const VOLUMETRIC_PRESENTATION_STATE_INPUT_SEQUENCE: Tag = Tag(0x0070, 0x1201);
/// Presentation Input Type (0070,1202) CS 1
#[rustfmt::skip]
pub const PRESENTATION_INPUT_TYPE: Tag = Tag(0x0070, 0x1202);
/// Input Sequence Position Index (0070,1203) US 1
#[rustfmt::skip]
pub const INPUT_SEQUENCE_POSITION_INDEX: Tag = Tag(0x0070, 0x1203);
/// Crop (0070,1204) CS 1
#[rustfmt::skip]
pub const CROP: Tag = Tag(0x0070, 0x1204);
/// Cropping Specification Index (0070,1205) US 1-n
#[rustfmt::skip]
pub const CROPPING_SPECIFICATION_INDEX: Tag = Tag(0x0070, 0x1205);
/// Compositing Method (0070,1206) CS 1 (retired)
#[rustfmt::skip]
pub const COMPOSITING_METHOD: Tag = Tag(0x0070, 0x1206);
/// Volumetric Presentation Input Number (0070,1207) US 1
#[rustfmt::skip]
pub const VOLUMETRIC_PRESENTATION_INPUT_NUMBER: Tag = Tag(0x0070, 0x1207);
/// Image Volume Geometry (0070,1208) CS 1
#[rustfmt::skip]
pub const IMAGE_VOLUME_GEOMETRY: Tag = Tag(0x0070, 0x1208);
/// Volumetric Presentation Input Set UID (0070,1209) UI 1
#[rustfmt::skip]
pub const VOLUMETRIC_PRESENTATION_INPUT_SET_UID: Tag = Tag(0x0070, 0x1209);
/// Volumetric Presentation Input Set Sequence (0070,120A) SQ 1
#[rustfmt::skip]
pub const VOLUMETRIC_PRESENTATION_INPUT_SET_SEQUENCE: Tag = Tag(0x0070, 0x120A);
/// Global Crop (0070,120B) CS 1
#[rustfmt::skip]
pub const GLOBAL_CROP: Tag = Tag(0x0070, 0x120B);
/// Global Cropping Specification Index (0070,120C) US 1-n
#[rustfmt::skip]
pub const GLOBAL_CROPPING_SPECIFICATION_INDEX: Tag = Tag(0x0070, 0x120C);
/// Rendering Method (0070,120D) CS 1
#[rustfmt::skip]
pub const RENDERING_METHOD: Tag = Tag(0x0070, 0x120D);
/// Volume Cropping Sequence (0070,1301) SQ 1
#[rustfmt::skip]
pub const VOLUME_CROPPING_SEQUENCE: Tag = Tag(0x0070, 0x1301);
/// Volume Cropping Method (0070,1302) CS 1
#[rustfmt::skip]
pub const VOLUME_CROPPING_METHOD: Tag = Tag(0x0070, 0x1302);
/// Bounding Box Crop (0070,1303) FD 6
#[rustfmt::skip]
pub const BOUNDING_BOX_CROP: Tag = Tag(0x0070, 0x1303);
/// Oblique Cropping Plane Sequence (0070,1304) SQ 1
#[rustfmt::skip]
pub const OBLIQUE_CROPPING_PLANE_SEQUENCE: Tag = Tag(0x0070, 0x1304);
/// Plane (0070,1305) FD 4
#[rustfmt::skip]
pub const PLANE: Tag = Tag(0x0070, 0x1305);
/// Plane Normal (0070,1306) FD 3
#[rustfmt::skip]
pub const PLANE_NORMAL: Tag = Tag(0x0070, 0x1306);
/// Cropping Specification Number (0070,1309) US 1
#[rustfmt::skip]
pub const CROPPING_SPECIFICATION_NUMBER: Tag = Tag(0x0070, 0x1309);
/// Multi-Planar Reconstruction Style (0070,1501) CS 1
#[rustfmt::skip]
pub const MULTI_PLANAR_RECONSTRUCTION_STYLE: Tag = Tag(0x0070, 0x1501);
/// MPR Thickness Type (0070,1502) CS 1
#[rustfmt::skip]
pub const MPR_THICKNESS_TYPE: Tag = Tag(0x0070, 0x1502);
/// MPR Slab Thickness (0070,1503) FD 1
#[rustfmt::skip]
pub const MPR_SLAB_THICKNESS: Tag = Tag(0x0070, 0x1503);
/// MPR Top Left Hand Corner (0070,1505) FD 3
#[rustfmt::skip]
pub const MPR_TOP_LEFT_HAND_CORNER: Tag = Tag(0x0070, 0x1505);
/// MPR View Width Direction (0070,1507) FD 3
#[rustfmt::skip]
pub const MPR_VIEW_WIDTH_DIRECTION: Tag = Tag(0x0070, 0x1507);
/// MPR View Width (0070,1508) FD 1
#[rustfmt::skip]
pub const MPR_VIEW_WIDTH: Tag = Tag(0x0070, 0x1508);
/// Number of Volumetric Curve Points (0070,150C) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_VOLUMETRIC_CURVE_POINTS: Tag = Tag(0x0070, 0x150C);
/// Volumetric Curve Points (0070,150D) OD 1
#[rustfmt::skip]
pub const VOLUMETRIC_CURVE_POINTS: Tag = Tag(0x0070, 0x150D);
/// MPR View Height Direction (0070,1511) FD 3
#[rustfmt::skip]
pub const MPR_VIEW_HEIGHT_DIRECTION: Tag = Tag(0x0070, 0x1511);
/// MPR View Height (0070,1512) FD 1
#[rustfmt::skip]
pub const MPR_VIEW_HEIGHT: Tag = Tag(0x0070, 0x1512);
/// Render Projection (0070,1602) CS 1
#[rustfmt::skip]
pub const RENDER_PROJECTION: Tag = Tag(0x0070, 0x1602);
/// Viewpoint Position (0070,1603) FD 3
#[rustfmt::skip]
pub const VIEWPOINT_POSITION: Tag = Tag(0x0070, 0x1603);
/// Viewpoint LookAt Point (0070,1604) FD 3
#[rustfmt::skip]
pub const VIEWPOINT_LOOK_AT_POINT: Tag = Tag(0x0070, 0x1604);
/// Viewpoint Up Direction (0070,1605) FD 3
#[rustfmt::skip]
pub const VIEWPOINT_UP_DIRECTION: Tag = Tag(0x0070, 0x1605);
/// Render Field of View (0070,1606) FD 6
#[rustfmt::skip]
pub const RENDER_FIELD_OF_VIEW: Tag = Tag(0x0070, 0x1606);
/// Sampling Step Size (0070,1607) FD 1
#[rustfmt::skip]
pub const SAMPLING_STEP_SIZE: Tag = Tag(0x0070, 0x1607);
/// Shading Style (0070,1701) CS 1
#[rustfmt::skip]
pub const SHADING_STYLE: Tag = Tag(0x0070, 0x1701);
/// Ambient Reflection Intensity (0070,1702) FD 1
#[rustfmt::skip]
pub const AMBIENT_REFLECTION_INTENSITY: Tag = Tag(0x0070, 0x1702);
/// Light Direction (0070,1703) FD 3
#[rustfmt::skip]
pub const LIGHT_DIRECTION: Tag = Tag(0x0070, 0x1703);
/// Diffuse Reflection Intensity (0070,1704) FD 1
#[rustfmt::skip]
pub const DIFFUSE_REFLECTION_INTENSITY: Tag = Tag(0x0070, 0x1704);
/// Specular Reflection Intensity (0070,1705) FD 1
#[rustfmt::skip]
pub const SPECULAR_REFLECTION_INTENSITY: Tag = Tag(0x0070, 0x1705);
/// Shininess (0070,1706) FD 1
#[rustfmt::skip]
pub const SHININESS: Tag = Tag(0x0070, 0x1706);
/// Presentation State Classification Component Sequence (0070,1801) SQ 1
#[rustfmt::skip]
pub const PRESENTATION_STATE_CLASSIFICATION_COMPONENT_SEQUENCE: Tag = Tag(0x0070, 0x1801);
/// Component Type (0070,1802) CS 1
#[rustfmt::skip]
pub const COMPONENT_TYPE: Tag = Tag(0x0070, 0x1802);
/// Component Input Sequence (0070,1803) SQ 1
#[rustfmt::skip]
pub const COMPONENT_INPUT_SEQUENCE: Tag = Tag(0x0070, 0x1803);
/// Volumetric Presentation Input Index (0070,1804) US 1
#[rustfmt::skip]
pub const VOLUMETRIC_PRESENTATION_INPUT_INDEX: Tag = Tag(0x0070, 0x1804);
/// Presentation State Compositor Component Sequence (0070,1805) SQ 1
#[rustfmt::skip]
pub const PRESENTATION_STATE_COMPOSITOR_COMPONENT_SEQUENCE: Tag = Tag(0x0070, 0x1805);
/// Weighting Transfer Function Sequence (0070,1806) SQ 1
#[rustfmt::skip]
pub const WEIGHTING_TRANSFER_FUNCTION_SEQUENCE: Tag = Tag(0x0070, 0x1806);
/// Weighting Lookup Table Descriptor (0070,1807) US 3
#[rustfmt::skip]
pub const WEIGHTING_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0070, 0x1807);
/// Weighting Lookup Table Data (0070,1808) OB 1
#[rustfmt::skip]
pub const WEIGHTING_LOOKUP_TABLE_DATA: Tag = Tag(0x0070, 0x1808);
/// Volumetric Annotation Sequence (0070,1901) SQ 1
#[rustfmt::skip]
pub const VOLUMETRIC_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x1901);
/// Referenced Structured Context Sequence (0070,1903) SQ 1
#[rustfmt::skip]
pub const REFERENCED_STRUCTURED_CONTEXT_SEQUENCE: Tag = Tag(0x0070, 0x1903);
/// Referenced Content Item (0070,1904) UI 1
#[rustfmt::skip]
pub const REFERENCED_CONTENT_ITEM: Tag = Tag(0x0070, 0x1904);
/// Volumetric Presentation Input Annotation Sequence (0070,1905) SQ 1
#[rustfmt::skip]
pub const VOLUMETRIC_PRESENTATION_INPUT_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x1905);
/// Annotation Clipping (0070,1907) CS 1
#[rustfmt::skip]
pub const ANNOTATION_CLIPPING: Tag = Tag(0x0070, 0x1907);
/// Presentation Animation Style (0070,1A01) CS 1
#[rustfmt::skip]
pub const PRESENTATION_ANIMATION_STYLE: Tag = Tag(0x0070, 0x1A01);
/// Recommended Animation Rate (0070,1A03) FD 1
#[rustfmt::skip]
pub const RECOMMENDED_ANIMATION_RATE: Tag = Tag(0x0070, 0x1A03);
/// Animation Curve Sequence (0070,1A04) SQ 1
#[rustfmt::skip]
pub const ANIMATION_CURVE_SEQUENCE: Tag = Tag(0x0070, 0x1A04);
/// Animation Step Size (0070,1A05) FD 1
#[rustfmt::skip]
pub const ANIMATION_STEP_SIZE: Tag = Tag(0x0070, 0x1A05);
/// Swivel Range (0070,1A06) FD 1
#[rustfmt::skip]
pub const SWIVEL_RANGE: Tag = Tag(0x0070, 0x1A06);
/// Volumetric Curve Up Directions (0070,1A07) OD 1
#[rustfmt::skip]
pub const VOLUMETRIC_CURVE_UP_DIRECTIONS: Tag = Tag(0x0070, 0x1A07);
/// Volume Stream Sequence (0070,1A08) SQ 1
#[rustfmt::skip]
pub const VOLUME_STREAM_SEQUENCE: Tag = Tag(0x0070, 0x1A08);
/// RGBA Transfer Function Description (0070,1A09) LO 1
#[rustfmt::skip]
pub const RGBA_TRANSFER_FUNCTION_DESCRIPTION: Tag = Tag(0x0070, 0x1A09);
/// Advanced Blending Sequence (0070,1B01) SQ 1
#[rustfmt::skip]
pub const ADVANCED_BLENDING_SEQUENCE: Tag = Tag(0x0070, 0x1B01);
/// Blending Input Number (0070,1B02) US 1
#[rustfmt::skip]
pub const BLENDING_INPUT_NUMBER: Tag = Tag(0x0070, 0x1B02);
/// Blending Display Input Sequence (0070,1B03) SQ 1
#[rustfmt::skip]
pub const BLENDING_DISPLAY_INPUT_SEQUENCE: Tag = Tag(0x0070, 0x1B03);
/// Blending Display Sequence (0070,1B04) SQ 1
#[rustfmt::skip]
pub const BLENDING_DISPLAY_SEQUENCE: Tag = Tag(0x0070, 0x1B04);
/// Blending Mode (0070,1B06) CS 1
#[rustfmt::skip]
pub const BLENDING_MODE: Tag = Tag(0x0070, 0x1B06);
/// Time Series Blending (0070,1B07) CS 1
#[rustfmt::skip]
pub const TIME_SERIES_BLENDING: Tag = Tag(0x0070, 0x1B07);
/// Geometry for Display (0070,1B08) CS 1
#[rustfmt::skip]
pub const GEOMETRY_FOR_DISPLAY: Tag = Tag(0x0070, 0x1B08);
/// Threshold Sequence (0070,1B11) SQ 1
#[rustfmt::skip]
pub const THRESHOLD_SEQUENCE: Tag = Tag(0x0070, 0x1B11);
/// Threshold Value Sequence (0070,1B12) SQ 1
#[rustfmt::skip]
pub const THRESHOLD_VALUE_SEQUENCE: Tag = Tag(0x0070, 0x1B12);
/// Threshold Type (0070,1B13) CS 1
#[rustfmt::skip]
pub const THRESHOLD_TYPE: Tag = Tag(0x0070, 0x1B13);
/// Threshold Value (0070,1B14) FD 1
#[rustfmt::skip]
pub const THRESHOLD_VALUE: Tag = Tag(0x0070, 0x1B14);
/// Hanging Protocol Name (0072,0002) SH 1
#[rustfmt::skip]
pub const HANGING_PROTOCOL_NAME: Tag = Tag(0x0072, 0x0002);
/// Hanging Protocol Description (0072,0004) LO 1
#[rustfmt::skip]
pub const HANGING_PROTOCOL_DESCRIPTION: Tag = Tag(0x0072, 0x0004);
/// Hanging Protocol Level (0072,0006) CS 1
#[rustfmt::skip]
pub const HANGING_PROTOCOL_LEVEL: Tag = Tag(0x0072, 0x0006);
/// Hanging Protocol Creator (0072,0008) LO 1
#[rustfmt::skip]
pub const HANGING_PROTOCOL_CREATOR: Tag = Tag(0x0072, 0x0008);
/// Hanging Protocol Creation DateTime (0072,000A) DT 1
#[rustfmt::skip]
pub const HANGING_PROTOCOL_CREATION_DATE_TIME: Tag = Tag(0x0072, 0x000A);
/// Hanging Protocol Definition Sequence (0072,000C) SQ 1
#[rustfmt::skip]
pub const HANGING_PROTOCOL_DEFINITION_SEQUENCE: Tag = Tag(0x0072, 0x000C);
/// Hanging Protocol User Identification Code Sequence (0072,000E) SQ 1
#[rustfmt::skip]
pub const HANGING_PROTOCOL_USER_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0072, 0x000E);
/// Hanging Protocol User Group Name (0072,0010) LO 1
#[rustfmt::skip]
pub const HANGING_PROTOCOL_USER_GROUP_NAME: Tag = Tag(0x0072, 0x0010);
/// Source Hanging Protocol Sequence (0072,0012) SQ 1
#[rustfmt::skip]
pub const SOURCE_HANGING_PROTOCOL_SEQUENCE: Tag = Tag(0x0072, 0x0012);
/// Number of Priors Referenced (0072,0014) US 1
#[rustfmt::skip]
pub const NUMBER_OF_PRIORS_REFERENCED: Tag = Tag(0x0072, 0x0014);
/// Image Sets Sequence (0072,0020) SQ 1
#[rustfmt::skip]
pub const IMAGE_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0020);
/// Image Set Selector Sequence (0072,0022) SQ 1
#[rustfmt::skip]
pub const IMAGE_SET_SELECTOR_SEQUENCE: Tag = Tag(0x0072, 0x0022);
/// Image Set Selector Usage Flag (0072,0024) CS 1
#[rustfmt::skip]
pub const IMAGE_SET_SELECTOR_USAGE_FLAG: Tag = Tag(0x0072, 0x0024);
/// Selector Attribute (0072,0026) AT 1
#[rustfmt::skip]
pub const SELECTOR_ATTRIBUTE: Tag = Tag(0x0072, 0x0026);
/// Selector Value Number (0072,0028) US 1
#[rustfmt::skip]
pub const SELECTOR_VALUE_NUMBER: Tag = Tag(0x0072, 0x0028);
/// Time Based Image Sets Sequence (0072,0030) SQ 1
#[rustfmt::skip]
pub const TIME_BASED_IMAGE_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0030);
/// Image Set Number (0072,0032) US 1
#[rustfmt::skip]
pub const IMAGE_SET_NUMBER: Tag = Tag(0x0072, 0x0032);
/// Image Set Selector Category (0072,0034) CS 1
#[rustfmt::skip]
pub const IMAGE_SET_SELECTOR_CATEGORY: Tag = Tag(0x0072, 0x0034);
/// Relative Time (0072,0038) US 2
#[rustfmt::skip]
pub const RELATIVE_TIME: Tag = Tag(0x0072, 0x0038);
/// Relative Time Units (0072,003A) CS 1
#[rustfmt::skip]
pub const RELATIVE_TIME_UNITS: Tag = Tag(0x0072, 0x003A);
/// Abstract Prior Value (0072,003C) SS 2
#[rustfmt::skip]
pub const ABSTRACT_PRIOR_VALUE: Tag = Tag(0x0072, 0x003C);
/// Abstract Prior Code Sequence (0072,003E) SQ 1
#[rustfmt::skip]
pub const ABSTRACT_PRIOR_CODE_SEQUENCE: Tag = Tag(0x0072, 0x003E);
/// Image Set Label (0072,0040) LO 1
#[rustfmt::skip]
pub const IMAGE_SET_LABEL: Tag = Tag(0x0072, 0x0040);
/// Selector Attribute VR (0072,0050) CS 1
#[rustfmt::skip]
pub const SELECTOR_ATTRIBUTE_VR: Tag = Tag(0x0072, 0x0050);
/// Selector Sequence Pointer (0072,0052) AT 1-n
#[rustfmt::skip]
pub const SELECTOR_SEQUENCE_POINTER: Tag = Tag(0x0072, 0x0052);
/// Selector Sequence Pointer Private Creator (0072,0054) LO 1-n
#[rustfmt::skip]
pub const SELECTOR_SEQUENCE_POINTER_PRIVATE_CREATOR: Tag = Tag(0x0072, 0x0054);
/// Selector Attribute Private Creator (0072,0056) LO 1
#[rustfmt::skip]
pub const SELECTOR_ATTRIBUTE_PRIVATE_CREATOR: Tag = Tag(0x0072, 0x0056);
/// Selector AE Value (0072,005E) AE 1-n
#[rustfmt::skip]
pub const SELECTOR_AE_VALUE: Tag = Tag(0x0072, 0x005E);
/// Selector AS Value (0072,005F) AS 1-n
#[rustfmt::skip]
pub const SELECTOR_AS_VALUE: Tag = Tag(0x0072, 0x005F);
/// Selector AT Value (0072,0060) AT 1-n
#[rustfmt::skip]
pub const SELECTOR_AT_VALUE: Tag = Tag(0x0072, 0x0060);
/// Selector DA Value (0072,0061) DA 1-n
#[rustfmt::skip]
pub const SELECTOR_DA_VALUE: Tag = Tag(0x0072, 0x0061);
/// Selector CS Value (0072,0062) CS 1-n
#[rustfmt::skip]
pub const SELECTOR_CS_VALUE: Tag = Tag(0x0072, 0x0062);
/// Selector DT Value (0072,0063) DT 1-n
#[rustfmt::skip]
pub const SELECTOR_DT_VALUE: Tag = Tag(0x0072, 0x0063);
/// Selector IS Value (0072,0064) IS 1-n
#[rustfmt::skip]
pub const SELECTOR_IS_VALUE: Tag = Tag(0x0072, 0x0064);
/// Selector OB Value (0072,0065) OB 1
#[rustfmt::skip]
pub const SELECTOR_OB_VALUE: Tag = Tag(0x0072, 0x0065);
/// Selector LO Value (0072,0066) LO 1-n
#[rustfmt::skip]
pub const SELECTOR_LO_VALUE: Tag = Tag(0x0072, 0x0066);
/// Selector OF Value (0072,0067) OF 1
#[rustfmt::skip]
pub const SELECTOR_OF_VALUE: Tag = Tag(0x0072, 0x0067);
/// Selector LT Value (0072,0068) LT 1
#[rustfmt::skip]
pub const SELECTOR_LT_VALUE: Tag = Tag(0x0072, 0x0068);
/// Selector OW Value (0072,0069) OW 1
#[rustfmt::skip]
pub const SELECTOR_OW_VALUE: Tag = Tag(0x0072, 0x0069);
/// Selector PN Value (0072,006A) PN 1-n
#[rustfmt::skip]
pub const SELECTOR_PN_VALUE: Tag = Tag(0x0072, 0x006A);
/// Selector TM Value (0072,006B) TM 1-n
#[rustfmt::skip]
pub const SELECTOR_TM_VALUE: Tag = Tag(0x0072, 0x006B);
/// Selector SH Value (0072,006C) SH 1-n
#[rustfmt::skip]
pub const SELECTOR_SH_VALUE: Tag = Tag(0x0072, 0x006C);
/// Selector UN Value (0072,006D) UN 1
#[rustfmt::skip]
pub const SELECTOR_UN_VALUE: Tag = Tag(0x0072, 0x006D);
/// Selector ST Value (0072,006E) ST 1
#[rustfmt::skip]
pub const SELECTOR_ST_VALUE: Tag = Tag(0x0072, 0x006E);
/// Selector UC Value (0072,006F) UC 1-n
#[rustfmt::skip]
pub const SELECTOR_UC_VALUE: Tag = Tag(0x0072, 0x006F);
/// Selector UT Value (0072,0070) UT 1
#[rustfmt::skip]
pub const SELECTOR_UT_VALUE: Tag = Tag(0x0072, 0x0070);
/// Selector UR Value (0072,0071) UR 1
#[rustfmt::skip]
pub const SELECTOR_UR_VALUE: Tag = Tag(0x0072, 0x0071);
/// Selector DS Value (0072,0072) DS 1-n
#[rustfmt::skip]
pub const SELECTOR_DS_VALUE: Tag = Tag(0x0072, 0x0072);
/// Selector OD Value (0072,0073) OD 1
#[rustfmt::skip]
pub const SELECTOR_OD_VALUE: Tag = Tag(0x0072, 0x0073);
/// Selector FD Value (0072,0074) FD 1-n
#[rustfmt::skip]
pub const SELECTOR_FD_VALUE: Tag = Tag(0x0072, 0x0074);
/// Selector OL Value (0072,0075) OL 1
#[rustfmt::skip]
pub const SELECTOR_OL_VALUE: Tag = Tag(0x0072, 0x0075);
/// Selector FL Value (0072,0076) FL 1-n
#[rustfmt::skip]
pub const SELECTOR_FL_VALUE: Tag = Tag(0x0072, 0x0076);
/// Selector UL Value (0072,0078) UL 1-n
#[rustfmt::skip]
pub const SELECTOR_UL_VALUE: Tag = Tag(0x0072, 0x0078);
/// Selector US Value (0072,007A) US 1-n
#[rustfmt::skip]
pub const SELECTOR_US_VALUE: Tag = Tag(0x0072, 0x007A);
/// Selector SL Value (0072,007C) SL 1-n
#[rustfmt::skip]
pub const SELECTOR_SL_VALUE: Tag = Tag(0x0072, 0x007C);
/// Selector SS Value (0072,007E) SS 1-n
#[rustfmt::skip]
pub const SELECTOR_SS_VALUE: Tag = Tag(0x0072, 0x007E);
/// Selector UI Value (0072,007F) UI 1-n
#[rustfmt::skip]
pub const SELECTOR_UI_VALUE: Tag = Tag(0x0072, 0x007F);
/// Selector Code Sequence Value (0072,0080) SQ 1
#[rustfmt::skip]
pub const SELECTOR_CODE_SEQUENCE_VALUE: Tag = Tag(0x0072, 0x0080);
/// Selector OV Value (0072,0081) OV 1
#[rustfmt::skip]
pub const SELECTOR_OV_VALUE: Tag = Tag(0x0072, 0x0081);
/// Selector SV Value (0072,0082) SV 1-n
#[rustfmt::skip]
pub const SELECTOR_SV_VALUE: Tag = Tag(0x0072, 0x0082);
/// Selector UV Value (0072,0083) UV 1-n
#[rustfmt::skip]
pub const SELECTOR_UV_VALUE: Tag = Tag(0x0072, 0x0083);
/// Number of Screens (0072,0100) US 1
#[rustfmt::skip]
pub const NUMBER_OF_SCREENS: Tag = Tag(0x0072, 0x0100);
/// Nominal Screen Definition Sequence (0072,0102) SQ 1
#[rustfmt::skip]
pub const NOMINAL_SCREEN_DEFINITION_SEQUENCE: Tag = Tag(0x0072, 0x0102);
/// Number of Vertical Pixels (0072,0104) US 1
#[rustfmt::skip]
pub const NUMBER_OF_VERTICAL_PIXELS: Tag = Tag(0x0072, 0x0104);
/// Number of Horizontal Pixels (0072,0106) US 1
#[rustfmt::skip]
pub const NUMBER_OF_HORIZONTAL_PIXELS: Tag = Tag(0x0072, 0x0106);
/// Display Environment Spatial Position (0072,0108) FD 4
#[rustfmt::skip]
pub const DISPLAY_ENVIRONMENT_SPATIAL_POSITION: Tag = Tag(0x0072, 0x0108);
/// Screen Minimum Grayscale Bit Depth (0072,010A) US 1
#[rustfmt::skip]
pub const SCREEN_MINIMUM_GRAYSCALE_BIT_DEPTH: Tag = Tag(0x0072, 0x010A);
/// Screen Minimum Color Bit Depth (0072,010C) US 1
#[rustfmt::skip]
pub const SCREEN_MINIMUM_COLOR_BIT_DEPTH: Tag = Tag(0x0072, 0x010C);
/// Application Maximum Repaint Time (0072,010E) US 1
#[rustfmt::skip]
pub const APPLICATION_MAXIMUM_REPAINT_TIME: Tag = Tag(0x0072, 0x010E);
/// Display Sets Sequence (0072,0200) SQ 1
#[rustfmt::skip]
pub const DISPLAY_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0200);
/// Display Set Number (0072,0202) US 1
#[rustfmt::skip]
pub const DISPLAY_SET_NUMBER: Tag = Tag(0x0072, 0x0202);
/// Display Set Label (0072,0203) LO 1
#[rustfmt::skip]
pub const DISPLAY_SET_LABEL: Tag = Tag(0x0072, 0x0203);
/// Display Set Presentation Group (0072,0204) US 1
#[rustfmt::skip]
pub const DISPLAY_SET_PRESENTATION_GROUP: Tag = Tag(0x0072, 0x0204);
/// Display Set Presentation Group Description (0072,0206) LO 1
#[rustfmt::skip]
pub const DISPLAY_SET_PRESENTATION_GROUP_DESCRIPTION: Tag = Tag(0x0072, 0x0206);
/// Partial Data Display Handling (0072,0208) CS 1
#[rustfmt::skip]
pub const PARTIAL_DATA_DISPLAY_HANDLING: Tag = Tag(0x0072, 0x0208);
/// Synchronized Scrolling Sequence (0072,0210) SQ 1
#[rustfmt::skip]
pub const SYNCHRONIZED_SCROLLING_SEQUENCE: Tag = Tag(0x0072, 0x0210);
/// Display Set Scrolling Group (0072,0212) US 2-n
#[rustfmt::skip]
pub const DISPLAY_SET_SCROLLING_GROUP: Tag = Tag(0x0072, 0x0212);
/// Navigation Indicator Sequence (0072,0214) SQ 1
#[rustfmt::skip]
pub const NAVIGATION_INDICATOR_SEQUENCE: Tag = Tag(0x0072, 0x0214);
/// Navigation Display Set (0072,0216) US 1
#[rustfmt::skip]
pub const NAVIGATION_DISPLAY_SET: Tag = Tag(0x0072, 0x0216);
/// Reference Display Sets (0072,0218) US 1-n
#[rustfmt::skip]
pub const REFERENCE_DISPLAY_SETS: Tag = Tag(0x0072, 0x0218);
/// Image Boxes Sequence (0072,0300) SQ 1
#[rustfmt::skip]
pub const IMAGE_BOXES_SEQUENCE: Tag = Tag(0x0072, 0x0300);
/// Image Box Number (0072,0302) US 1
#[rustfmt::skip]
pub const IMAGE_BOX_NUMBER: Tag = Tag(0x0072, 0x0302);
/// Image Box Layout Type (0072,0304) CS 1
#[rustfmt::skip]
pub const IMAGE_BOX_LAYOUT_TYPE: Tag = Tag(0x0072, 0x0304);
/// Image Box Tile Horizontal Dimension (0072,0306) US 1
#[rustfmt::skip]
pub const IMAGE_BOX_TILE_HORIZONTAL_DIMENSION: Tag = Tag(0x0072, 0x0306);
/// Image Box Tile Vertical Dimension (0072,0308) US 1
#[rustfmt::skip]
pub const IMAGE_BOX_TILE_VERTICAL_DIMENSION: Tag = Tag(0x0072, 0x0308);
/// Image Box Scroll Direction (0072,0310) CS 1
#[rustfmt::skip]
pub const IMAGE_BOX_SCROLL_DIRECTION: Tag = Tag(0x0072, 0x0310);
/// Image Box Small Scroll Type (0072,0312) CS 1
#[rustfmt::skip]
pub const IMAGE_BOX_SMALL_SCROLL_TYPE: Tag = Tag(0x0072, 0x0312);
/// Image Box Small Scroll Amount (0072,0314) US 1
#[rustfmt::skip]
pub const IMAGE_BOX_SMALL_SCROLL_AMOUNT: Tag = Tag(0x0072, 0x0314);
/// Image Box Large Scroll Type (0072,0316) CS 1
#[rustfmt::skip]
pub const IMAGE_BOX_LARGE_SCROLL_TYPE: Tag = Tag(0x0072, 0x0316);
/// Image Box Large Scroll Amount (0072,0318) US 1
#[rustfmt::skip]
pub const IMAGE_BOX_LARGE_SCROLL_AMOUNT: Tag = Tag(0x0072, 0x0318);
/// Image Box Overlap Priority (0072,0320) US 1
#[rustfmt::skip]
pub const IMAGE_BOX_OVERLAP_PRIORITY: Tag = Tag(0x0072, 0x0320);
/// Cine Relative to Real-Time (0072,0330) FD 1
#[rustfmt::skip]
pub const CINE_RELATIVE_TO_REAL_TIME: Tag = Tag(0x0072, 0x0330);
/// Filter Operations Sequence (0072,0400) SQ 1
#[rustfmt::skip]
pub const FILTER_OPERATIONS_SEQUENCE: Tag = Tag(0x0072, 0x0400);
/// Filter-by Category (0072,0402) CS 1
#[rustfmt::skip]
pub const FILTER_BY_CATEGORY: Tag = Tag(0x0072, 0x0402);
/// Filter-by Attribute Presence (0072,0404) CS 1
#[rustfmt::skip]
pub const FILTER_BY_ATTRIBUTE_PRESENCE: Tag = Tag(0x0072, 0x0404);
/// Filter-by Operator (0072,0406) CS 1
#[rustfmt::skip]
pub const FILTER_BY_OPERATOR: Tag = Tag(0x0072, 0x0406);
/// Structured Display Background CIELab Value (0072,0420) US 3
#[rustfmt::skip]
pub const STRUCTURED_DISPLAY_BACKGROUND_CIE_LAB_VALUE: Tag = Tag(0x0072, 0x0420);
/// Empty Image Box CIELab Value (0072,0421) US 3
#[rustfmt::skip]
pub const EMPTY_IMAGE_BOX_CIE_LAB_VALUE: Tag = Tag(0x0072, 0x0421);
/// Structured Display Image Box Sequence (0072,0422) SQ 1
#[rustfmt::skip]
pub const STRUCTURED_DISPLAY_IMAGE_BOX_SEQUENCE: Tag = Tag(0x0072, 0x0422);
/// Structured Display Text Box Sequence (0072,0424) SQ 1
#[rustfmt::skip]
pub const STRUCTURED_DISPLAY_TEXT_BOX_SEQUENCE: Tag = Tag(0x0072, 0x0424);
/// Referenced First Frame Sequence (0072,0427) SQ 1
#[rustfmt::skip]
pub const REFERENCED_FIRST_FRAME_SEQUENCE: Tag = Tag(0x0072, 0x0427);
/// Image Box Synchronization Sequence (0072,0430) SQ 1
#[rustfmt::skip]
pub const IMAGE_BOX_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x0072, 0x0430);
/// Synchronized Image Box List (0072,0432) US 2-n
#[rustfmt::skip]
pub const SYNCHRONIZED_IMAGE_BOX_LIST: Tag = Tag(0x0072, 0x0432);
/// Type of Synchronization (0072,0434) CS 1
#[rustfmt::skip]
pub const TYPE_OF_SYNCHRONIZATION: Tag = Tag(0x0072, 0x0434);
/// Blending Operation Type (0072,0500) CS 1
#[rustfmt::skip]
pub const BLENDING_OPERATION_TYPE: Tag = Tag(0x0072, 0x0500);
/// Reformatting Operation Type (0072,0510) CS 1
#[rustfmt::skip]
pub const REFORMATTING_OPERATION_TYPE: Tag = Tag(0x0072, 0x0510);
/// Reformatting Thickness (0072,0512) FD 1
#[rustfmt::skip]
pub const REFORMATTING_THICKNESS: Tag = Tag(0x0072, 0x0512);
/// Reformatting Interval (0072,0514) FD 1
#[rustfmt::skip]
pub const REFORMATTING_INTERVAL: Tag = Tag(0x0072, 0x0514);
/// Reformatting Operation Initial View Direction (0072,0516) CS 1
#[rustfmt::skip]
pub const REFORMATTING_OPERATION_INITIAL_VIEW_DIRECTION: Tag = Tag(0x0072, 0x0516);
/// 3D Rendering Type (0072,0520) CS 1-n
#[rustfmt::skip]
pub const THREE_D_RENDERING_TYPE: Tag = Tag(0x0072, 0x0520);
/// Sorting Operations Sequence (0072,0600) SQ 1
#[rustfmt::skip]
pub const SORTING_OPERATIONS_SEQUENCE: Tag = Tag(0x0072, 0x0600);
/// Sort-by Category (0072,0602) CS 1
#[rustfmt::skip]
pub const SORT_BY_CATEGORY: Tag = Tag(0x0072, 0x0602);
/// Sorting Direction (0072,0604) CS 1
#[rustfmt::skip]
pub const SORTING_DIRECTION: Tag = Tag(0x0072, 0x0604);
/// Display Set Patient Orientation (0072,0700) CS 2
#[rustfmt::skip]
pub const DISPLAY_SET_PATIENT_ORIENTATION: Tag = Tag(0x0072, 0x0700);
/// VOI Type (0072,0702) CS 1
#[rustfmt::skip]
pub const VOI_TYPE: Tag = Tag(0x0072, 0x0702);
/// Pseudo-Color Type (0072,0704) CS 1
#[rustfmt::skip]
pub const PSEUDO_COLOR_TYPE: Tag = Tag(0x0072, 0x0704);
/// Pseudo-Color Palette Instance Reference Sequence (0072,0705) SQ 1
#[rustfmt::skip]
pub const PSEUDO_COLOR_PALETTE_INSTANCE_REFERENCE_SEQUENCE: Tag = Tag(0x0072, 0x0705);
/// Show Grayscale Inverted (0072,0706) CS 1
#[rustfmt::skip]
pub const SHOW_GRAYSCALE_INVERTED: Tag = Tag(0x0072, 0x0706);
/// Show Image True Size Flag (0072,0710) CS 1
#[rustfmt::skip]
pub const SHOW_IMAGE_TRUE_SIZE_FLAG: Tag = Tag(0x0072, 0x0710);
/// Show Graphic Annotation Flag (0072,0712) CS 1
#[rustfmt::skip]
pub const SHOW_GRAPHIC_ANNOTATION_FLAG: Tag = Tag(0x0072, 0x0712);
/// Show Patient Demographics Flag (0072,0714) CS 1
#[rustfmt::skip]
pub const SHOW_PATIENT_DEMOGRAPHICS_FLAG: Tag = Tag(0x0072, 0x0714);
/// Show Acquisition Techniques Flag (0072,0716) CS 1
#[rustfmt::skip]
pub const SHOW_ACQUISITION_TECHNIQUES_FLAG: Tag = Tag(0x0072, 0x0716);
/// Display Set Horizontal Justification (0072,0717) CS 1
#[rustfmt::skip]
pub const DISPLAY_SET_HORIZONTAL_JUSTIFICATION: Tag = Tag(0x0072, 0x0717);
/// Display Set Vertical Justification (0072,0718) CS 1
#[rustfmt::skip]
pub const DISPLAY_SET_VERTICAL_JUSTIFICATION: Tag = Tag(0x0072, 0x0718);
/// Continuation Start Meterset (0074,0120) FD 1
#[rustfmt::skip]
pub const CONTINUATION_START_METERSET: Tag = Tag(0x0074, 0x0120);
/// Continuation End Meterset (0074,0121) FD 1
#[rustfmt::skip]
pub const CONTINUATION_END_METERSET: Tag = Tag(0x0074, 0x0121);
/// Procedure Step State (0074,1000) CS 1
#[rustfmt::skip]
pub const PROCEDURE_STEP_STATE: Tag = Tag(0x0074, 0x1000);
/// Procedure Step Progress Information Sequence (0074,1002) SQ 1
#[rustfmt::skip]
pub const PROCEDURE_STEP_PROGRESS_INFORMATION_SEQUENCE: Tag = Tag(0x0074, 0x1002);
/// Procedure Step Progress (0074,1004) DS 1
#[rustfmt::skip]
pub const PROCEDURE_STEP_PROGRESS: Tag = Tag(0x0074, 0x1004);
/// Procedure Step Progress Description (0074,1006) ST 1
#[rustfmt::skip]
pub const PROCEDURE_STEP_PROGRESS_DESCRIPTION: Tag = Tag(0x0074, 0x1006);
/// Procedure Step Progress Parameters Sequence (0074,1007) SQ 1
#[rustfmt::skip]
pub const PROCEDURE_STEP_PROGRESS_PARAMETERS_SEQUENCE: Tag = Tag(0x0074, 0x1007);
/// Procedure Step Communications URI Sequence (0074,1008) SQ 1
#[rustfmt::skip]
pub const PROCEDURE_STEP_COMMUNICATIONS_URI_SEQUENCE: Tag = Tag(0x0074, 0x1008);
/// Contact URI (0074,100A) UR 1
#[rustfmt::skip]
pub const CONTACT_URI: Tag = Tag(0x0074, 0x100A);
/// Contact Display Name (0074,100C) LO 1
#[rustfmt::skip]
pub const CONTACT_DISPLAY_NAME: Tag = Tag(0x0074, 0x100C);
/// Procedure Step Discontinuation Reason Code Sequence (0074,100E) SQ 1
#[rustfmt::skip]
pub const PROCEDURE_STEP_DISCONTINUATION_REASON_CODE_SEQUENCE: Tag = Tag(0x0074, 0x100E);
/// Beam Task Sequence (0074,1020) SQ 1
#[rustfmt::skip]
pub const BEAM_TASK_SEQUENCE: Tag = Tag(0x0074, 0x1020);
/// Beam Task Type (0074,1022) CS 1
#[rustfmt::skip]
pub const BEAM_TASK_TYPE: Tag = Tag(0x0074, 0x1022);
/// Beam Order Index (Trial) (0074,1024) IS 1 (retired)
#[rustfmt::skip]
pub const BEAM_ORDER_INDEX_TRIAL: Tag = Tag(0x0074, 0x1024);
/// Autosequence Flag (0074,1025) CS 1
#[rustfmt::skip]
pub const AUTOSEQUENCE_FLAG: Tag = Tag(0x0074, 0x1025);
/// Table Top Vertical Adjusted Position (0074,1026) FD 1
#[rustfmt::skip]
pub const TABLE_TOP_VERTICAL_ADJUSTED_POSITION: Tag = Tag(0x0074, 0x1026);
/// Table Top Longitudinal Adjusted Position (0074,1027) FD 1
#[rustfmt::skip]
pub const TABLE_TOP_LONGITUDINAL_ADJUSTED_POSITION: Tag = Tag(0x0074, 0x1027);
/// Table Top Lateral Adjusted Position (0074,1028) FD 1
#[rustfmt::skip]
pub const TABLE_TOP_LATERAL_ADJUSTED_POSITION: Tag = Tag(0x0074, 0x1028);
/// Patient Support Adjusted Angle (0074,102A) FD 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_ADJUSTED_ANGLE: Tag = Tag(0x0074, 0x102A);
/// Table Top Eccentric Adjusted Angle (0074,102B) FD 1
#[rustfmt::skip]
pub const TABLE_TOP_ECCENTRIC_ADJUSTED_ANGLE: Tag = Tag(0x0074, 0x102B);
/// Table Top Pitch Adjusted Angle (0074,102C) FD 1
#[rustfmt::skip]
pub const TABLE_TOP_PITCH_ADJUSTED_ANGLE: Tag = Tag(0x0074, 0x102C);
/// Table Top Roll Adjusted Angle (0074,102D) FD 1
#[rustfmt::skip]
pub const TABLE_TOP_ROLL_ADJUSTED_ANGLE: Tag = Tag(0x0074, 0x102D);
/// Delivery Verification Image Sequence (0074,1030) SQ 1
#[rustfmt::skip]
pub const DELIVERY_VERIFICATION_IMAGE_SEQUENCE: Tag = Tag(0x0074, 0x1030);
/// Verification Image Timing (0074,1032) CS 1
#[rustfmt::skip]
pub const VERIFICATION_IMAGE_TIMING: Tag = Tag(0x0074, 0x1032);
/// Double Exposure Flag (0074,1034) CS 1
#[rustfmt::skip]
pub const DOUBLE_EXPOSURE_FLAG: Tag = Tag(0x0074, 0x1034);
/// Double Exposure Ordering (0074,1036) CS 1
#[rustfmt::skip]
pub const DOUBLE_EXPOSURE_ORDERING: Tag = Tag(0x0074, 0x1036);
/// Double Exposure Meterset (Trial) (0074,1038) DS 1 (retired)
#[rustfmt::skip]
pub const DOUBLE_EXPOSURE_METERSET_TRIAL: Tag = Tag(0x0074, 0x1038);
/// Double Exposure Field Delta (Trial) (0074,103A) DS 4 (retired)
#[rustfmt::skip]
pub const DOUBLE_EXPOSURE_FIELD_DELTA_TRIAL: Tag = Tag(0x0074, 0x103A);
/// Related Reference RT Image Sequence (0074,1040) SQ 1
#[rustfmt::skip]
pub const RELATED_REFERENCE_RT_IMAGE_SEQUENCE: Tag = Tag(0x0074, 0x1040);
/// General Machine Verification Sequence (0074,1042) SQ 1
#[rustfmt::skip]
pub const GENERAL_MACHINE_VERIFICATION_SEQUENCE: Tag = Tag(0x0074, 0x1042);
/// Conventional Machine Verification Sequence (0074,1044) SQ 1
#[rustfmt::skip]
pub const CONVENTIONAL_MACHINE_VERIFICATION_SEQUENCE: Tag = Tag(0x0074, 0x1044);
/// Ion Machine Verification Sequence (0074,1046) SQ 1
#[rustfmt::skip]
pub const ION_MACHINE_VERIFICATION_SEQUENCE: Tag = Tag(0x0074, 0x1046);
/// Failed Attributes Sequence (0074,1048) SQ 1
#[rustfmt::skip]
pub const FAILED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0074, 0x1048);
/// Overridden Attributes Sequence (0074,104A) SQ 1
#[rustfmt::skip]
pub const OVERRIDDEN_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0074, 0x104A);
/// Conventional Control Point Verification Sequence (0074,104C) SQ 1
#[rustfmt::skip]
pub const CONVENTIONAL_CONTROL_POINT_VERIFICATION_SEQUENCE: Tag = Tag(0x0074, 0x104C);
/// Ion Control Point Verification Sequence (0074,104E) SQ 1
#[rustfmt::skip]
pub const ION_CONTROL_POINT_VERIFICATION_SEQUENCE: Tag = Tag(0x0074, 0x104E);
/// Attribute Occurrence Sequence (0074,1050) SQ 1
#[rustfmt::skip]
pub const ATTRIBUTE_OCCURRENCE_SEQUENCE: Tag = Tag(0x0074, 0x1050);
/// Attribute Occurrence Pointer (0074,1052) AT 1
#[rustfmt::skip]
pub const ATTRIBUTE_OCCURRENCE_POINTER: Tag = Tag(0x0074, 0x1052);
/// Attribute Item Selector (0074,1054) UL 1
#[rustfmt::skip]
pub const ATTRIBUTE_ITEM_SELECTOR: Tag = Tag(0x0074, 0x1054);
/// Attribute Occurrence Private Creator (0074,1056) LO 1
#[rustfmt::skip]
pub const ATTRIBUTE_OCCURRENCE_PRIVATE_CREATOR: Tag = Tag(0x0074, 0x1056);
/// Selector Sequence Pointer Items (0074,1057) IS 1-n
#[rustfmt::skip]
pub const SELECTOR_SEQUENCE_POINTER_ITEMS: Tag = Tag(0x0074, 0x1057);
/// Scheduled Procedure Step Priority (0074,1200) CS 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_PRIORITY: Tag = Tag(0x0074, 0x1200);
/// Worklist Label (0074,1202) LO 1
#[rustfmt::skip]
pub const WORKLIST_LABEL: Tag = Tag(0x0074, 0x1202);
/// Procedure Step Label (0074,1204) LO 1
#[rustfmt::skip]
pub const PROCEDURE_STEP_LABEL: Tag = Tag(0x0074, 0x1204);
/// Scheduled Processing Parameters Sequence (0074,1210) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_PROCESSING_PARAMETERS_SEQUENCE: Tag = Tag(0x0074, 0x1210);
/// Performed Processing Parameters Sequence (0074,1212) SQ 1
#[rustfmt::skip]
pub const PERFORMED_PROCESSING_PARAMETERS_SEQUENCE: Tag = Tag(0x0074, 0x1212);
/// Unified Procedure Step Performed Procedure Sequence (0074,1216) SQ 1
#[rustfmt::skip]
pub const UNIFIED_PROCEDURE_STEP_PERFORMED_PROCEDURE_SEQUENCE: Tag = Tag(0x0074, 0x1216);
/// Related Procedure Step Sequence (0074,1220) SQ 1 (retired)
#[rustfmt::skip]
pub const RELATED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0074, 0x1220);
/// Procedure Step Relationship Type (0074,1222) LO 1 (retired)
#[rustfmt::skip]
pub const PROCEDURE_STEP_RELATIONSHIP_TYPE: Tag = Tag(0x0074, 0x1222);
/// Replaced Procedure Step Sequence (0074,1224) SQ 1
#[rustfmt::skip]
pub const REPLACED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0074, 0x1224);
/// Deletion Lock (0074,1230) LO 1
#[rustfmt::skip]
pub const DELETION_LOCK: Tag = Tag(0x0074, 0x1230);
/// Receiving AE (0074,1234) AE 1
#[rustfmt::skip]
pub const RECEIVING_AE: Tag = Tag(0x0074, 0x1234);
/// Requesting AE (0074,1236) AE 1
#[rustfmt::skip]
pub const REQUESTING_AE: Tag = Tag(0x0074, 0x1236);
/// Reason for Cancellation (0074,1238) LT 1
#[rustfmt::skip]
pub const REASON_FOR_CANCELLATION: Tag = Tag(0x0074, 0x1238);
/// SCP Status (0074,1242) CS 1
#[rustfmt::skip]
pub const SCP_STATUS: Tag = Tag(0x0074, 0x1242);
/// Subscription List Status (0074,1244) CS 1
#[rustfmt::skip]
pub const SUBSCRIPTION_LIST_STATUS: Tag = Tag(0x0074, 0x1244);
/// Unified Procedure Step List Status (0074,1246) CS 1
#[rustfmt::skip]
pub const UNIFIED_PROCEDURE_STEP_LIST_STATUS: Tag = Tag(0x0074, 0x1246);
/// Beam Order Index (0074,1324) UL 1
#[rustfmt::skip]
pub const BEAM_ORDER_INDEX: Tag = Tag(0x0074, 0x1324);
/// Double Exposure Meterset (0074,1338) FD 1
#[rustfmt::skip]
pub const DOUBLE_EXPOSURE_METERSET: Tag = Tag(0x0074, 0x1338);
/// Double Exposure Field Delta (0074,133A) FD 4
#[rustfmt::skip]
pub const DOUBLE_EXPOSURE_FIELD_DELTA: Tag = Tag(0x0074, 0x133A);
/// Brachy Task Sequence (0074,1401) SQ 1
#[rustfmt::skip]
pub const BRACHY_TASK_SEQUENCE: Tag = Tag(0x0074, 0x1401);
/// Continuation Start Total Reference Air Kerma (0074,1402) DS 1
#[rustfmt::skip]
pub const CONTINUATION_START_TOTAL_REFERENCE_AIR_KERMA: Tag = Tag(0x0074, 0x1402);
/// Continuation End Total Reference Air Kerma (0074,1403) DS 1
#[rustfmt::skip]
pub const CONTINUATION_END_TOTAL_REFERENCE_AIR_KERMA: Tag = Tag(0x0074, 0x1403);
/// Continuation Pulse Number (0074,1404) IS 1
#[rustfmt::skip]
pub const CONTINUATION_PULSE_NUMBER: Tag = Tag(0x0074, 0x1404);
/// Channel Delivery Order Sequence (0074,1405) SQ 1
#[rustfmt::skip]
pub const CHANNEL_DELIVERY_ORDER_SEQUENCE: Tag = Tag(0x0074, 0x1405);
/// Referenced Channel Number (0074,1406) IS 1
#[rustfmt::skip]
pub const REFERENCED_CHANNEL_NUMBER: Tag = Tag(0x0074, 0x1406);
/// Start Cumulative Time Weight (0074,1407) DS 1
#[rustfmt::skip]
pub const START_CUMULATIVE_TIME_WEIGHT: Tag = Tag(0x0074, 0x1407);
/// End Cumulative Time Weight (0074,1408) DS 1
#[rustfmt::skip]
pub const END_CUMULATIVE_TIME_WEIGHT: Tag = Tag(0x0074, 0x1408);
/// Omitted Channel Sequence (0074,1409) SQ 1
#[rustfmt::skip]
pub const OMITTED_CHANNEL_SEQUENCE: Tag = Tag(0x0074, 0x1409);
/// Reason for Channel Omission (0074,140A) CS 1
#[rustfmt::skip]
pub const REASON_FOR_CHANNEL_OMISSION: Tag = Tag(0x0074, 0x140A);
/// Reason for Channel Omission Description (0074,140B) LO 1
#[rustfmt::skip]
pub const REASON_FOR_CHANNEL_OMISSION_DESCRIPTION: Tag = Tag(0x0074, 0x140B);
/// Channel Delivery Order Index (0074,140C) IS 1
#[rustfmt::skip]
pub const CHANNEL_DELIVERY_ORDER_INDEX: Tag = Tag(0x0074, 0x140C);
/// Channel Delivery Continuation Sequence (0074,140D) SQ 1
#[rustfmt::skip]
pub const CHANNEL_DELIVERY_CONTINUATION_SEQUENCE: Tag = Tag(0x0074, 0x140D);
/// Omitted Application Setup Sequence (0074,140E) SQ 1
#[rustfmt::skip]
pub const OMITTED_APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x0074, 0x140E);
/// Implant Assembly Template Name (0076,0001) LO 1
#[rustfmt::skip]
pub const IMPLANT_ASSEMBLY_TEMPLATE_NAME: Tag = Tag(0x0076, 0x0001);
/// Implant Assembly Template Issuer (0076,0003) LO 1
#[rustfmt::skip]
pub const IMPLANT_ASSEMBLY_TEMPLATE_ISSUER: Tag = Tag(0x0076, 0x0003);
/// Implant Assembly Template Version (0076,0006) LO 1
#[rustfmt::skip]
pub const IMPLANT_ASSEMBLY_TEMPLATE_VERSION: Tag = Tag(0x0076, 0x0006);
/// Replaced Implant Assembly Template Sequence (0076,0008) SQ 1
#[rustfmt::skip]
pub const REPLACED_IMPLANT_ASSEMBLY_TEMPLATE_SEQUENCE: Tag = Tag(0x0076, 0x0008);
/// Implant Assembly Template Type (0076,000A) CS 1
#[rustfmt::skip]
pub const IMPLANT_ASSEMBLY_TEMPLATE_TYPE: Tag = Tag(0x0076, 0x000A);
/// Original Implant Assembly Template Sequence (0076,000C) SQ 1
#[rustfmt::skip]
pub const ORIGINAL_IMPLANT_ASSEMBLY_TEMPLATE_SEQUENCE: Tag = Tag(0x0076, 0x000C);
/// Derivation Implant Assembly Template Sequence (0076,000E) SQ 1
#[rustfmt::skip]
pub const DERIVATION_IMPLANT_ASSEMBLY_TEMPLATE_SEQUENCE: Tag = Tag(0x0076, 0x000E);
/// Implant Assembly Template Target Anatomy Sequence (0076,0010) SQ 1
#[rustfmt::skip]
pub const IMPLANT_ASSEMBLY_TEMPLATE_TARGET_ANATOMY_SEQUENCE: Tag = Tag(0x0076, 0x0010);
/// Procedure Type Code Sequence (0076,0020) SQ 1
#[rustfmt::skip]
pub const PROCEDURE_TYPE_CODE_SEQUENCE: Tag = Tag(0x0076, 0x0020);
/// Surgical Technique (0076,0030) LO 1
#[rustfmt::skip]
pub const SURGICAL_TECHNIQUE: Tag = Tag(0x0076, 0x0030);
/// Component Types Sequence (0076,0032) SQ 1
#[rustfmt::skip]
pub const COMPONENT_TYPES_SEQUENCE: Tag = Tag(0x0076, 0x0032);
/// Component Type Code Sequence (0076,0034) SQ 1
#[rustfmt::skip]
pub const COMPONENT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0076, 0x0034);
/// Exclusive Component Type (0076,0036) CS 1
#[rustfmt::skip]
pub const EXCLUSIVE_COMPONENT_TYPE: Tag = Tag(0x0076, 0x0036);
/// Mandatory Component Type (0076,0038) CS 1
#[rustfmt::skip]
pub const MANDATORY_COMPONENT_TYPE: Tag = Tag(0x0076, 0x0038);
/// Component Sequence (0076,0040) SQ 1
#[rustfmt::skip]
pub const COMPONENT_SEQUENCE: Tag = Tag(0x0076, 0x0040);
/// Component ID (0076,0055) US 1
#[rustfmt::skip]
pub const COMPONENT_ID: Tag = Tag(0x0076, 0x0055);
/// Component Assembly Sequence (0076,0060) SQ 1
#[rustfmt::skip]
pub const COMPONENT_ASSEMBLY_SEQUENCE: Tag = Tag(0x0076, 0x0060);
/// Component 1 Referenced ID (0076,0070) US 1
#[rustfmt::skip]
pub const COMPONENT1REFERENCED_ID: Tag = Tag(0x0076, 0x0070);
/// Component 1 Referenced Mating Feature Set ID (0076,0080) US 1
#[rustfmt::skip]
pub const COMPONENT1REFERENCED_MATING_FEATURE_SET_ID: Tag = Tag(0x0076, 0x0080);
/// Component 1 Referenced Mating Feature ID (0076,0090) US 1
#[rustfmt::skip]
pub const COMPONENT1REFERENCED_MATING_FEATURE_ID: Tag = Tag(0x0076, 0x0090);
/// Component 2 Referenced ID (0076,00A0) US 1
#[rustfmt::skip]
pub const COMPONENT2REFERENCED_ID: Tag = Tag(0x0076, 0x00A0);
/// Component 2 Referenced Mating Feature Set ID (0076,00B0) US 1
#[rustfmt::skip]
pub const COMPONENT2REFERENCED_MATING_FEATURE_SET_ID: Tag = Tag(0x0076, 0x00B0);
/// Component 2 Referenced Mating Feature ID (0076,00C0) US 1
#[rustfmt::skip]
pub const COMPONENT2REFERENCED_MATING_FEATURE_ID: Tag = Tag(0x0076, 0x00C0);
/// Implant Template Group Name (0078,0001) LO 1
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_NAME: Tag = Tag(0x0078, 0x0001);
/// Implant Template Group Description (0078,0010) ST 1
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_DESCRIPTION: Tag = Tag(0x0078, 0x0010);
/// Implant Template Group Issuer (0078,0020) LO 1
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_ISSUER: Tag = Tag(0x0078, 0x0020);
/// Implant Template Group Version (0078,0024) LO 1
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_VERSION: Tag = Tag(0x0078, 0x0024);
/// Replaced Implant Template Group Sequence (0078,0026) SQ 1
#[rustfmt::skip]
pub const REPLACED_IMPLANT_TEMPLATE_GROUP_SEQUENCE: Tag = Tag(0x0078, 0x0026);
/// Implant Template Group Target Anatomy Sequence (0078,0028) SQ 1
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_TARGET_ANATOMY_SEQUENCE: Tag = Tag(0x0078, 0x0028);
/// Implant Template Group Members Sequence (0078,002A) SQ 1
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_MEMBERS_SEQUENCE: Tag = Tag(0x0078, 0x002A);
/// Implant Template Group Member ID (0078,002E) US 1
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_MEMBER_ID: Tag = Tag(0x0078, 0x002E);
/// 3D Implant Template Group Member Matching Point (0078,0050) FD 3
#[rustfmt::skip]
pub const THREE_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_POINT: Tag = Tag(0x0078, 0x0050);
/// 3D Implant Template Group Member Matching Axes (0078,0060) FD 9
#[rustfmt::skip]
pub const THREE_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_AXES: Tag = Tag(0x0078, 0x0060);
/// Implant Template Group Member Matching 2D Coordinates Sequence (0078,0070) SQ 1
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING2D_COORDINATES_SEQUENCE: Tag = Tag(0x0078, 0x0070);
/// 2D Implant Template Group Member Matching Point (0078,0090) FD 2
#[rustfmt::skip]
pub const TWO_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_POINT: Tag = Tag(0x0078, 0x0090);
/// 2D Implant Template Group Member Matching Axes (0078,00A0) FD 4
#[rustfmt::skip]
pub const TWO_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_AXES: Tag = Tag(0x0078, 0x00A0);
/// Implant Template Group Variation Dimension Sequence (0078,00B0) SQ 1
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_SEQUENCE: Tag = Tag(0x0078, 0x00B0);
/// Implant Template Group Variation Dimension Name (0078,00B2) LO 1
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_NAME: Tag = Tag(0x0078, 0x00B2);
/// Implant Template Group Variation Dimension Rank Sequence (0078,00B4) SQ 1
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_RANK_SEQUENCE: Tag = Tag(0x0078, 0x00B4);
/// Referenced Implant Template Group Member ID (0078,00B6) US 1
#[rustfmt::skip]
pub const REFERENCED_IMPLANT_TEMPLATE_GROUP_MEMBER_ID: Tag = Tag(0x0078, 0x00B6);
/// Implant Template Group Variation Dimension Rank (0078,00B8) US 1
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_RANK: Tag = Tag(0x0078, 0x00B8);
/// Surface Scan Acquisition Type Code Sequence (0080,0001) SQ 1
#[rustfmt::skip]
pub const SURFACE_SCAN_ACQUISITION_TYPE_CODE_SEQUENCE: Tag = Tag(0x0080, 0x0001);
/// Surface Scan Mode Code Sequence (0080,0002) SQ 1
#[rustfmt::skip]
pub const SURFACE_SCAN_MODE_CODE_SEQUENCE: Tag = Tag(0x0080, 0x0002);
/// Registration Method Code Sequence (0080,0003) SQ 1
#[rustfmt::skip]
pub const REGISTRATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0080, 0x0003);
/// Shot Duration Time (0080,0004) FD 1
#[rustfmt::skip]
pub const SHOT_DURATION_TIME: Tag = Tag(0x0080, 0x0004);
/// Shot Offset Time (0080,0005) FD 1
#[rustfmt::skip]
pub const SHOT_OFFSET_TIME: Tag = Tag(0x0080, 0x0005);
/// Surface Point Presentation Value Data (0080,0006) US 1-n
#[rustfmt::skip]
pub const SURFACE_POINT_PRESENTATION_VALUE_DATA: Tag = Tag(0x0080, 0x0006);
/// Surface Point Color CIELab Value Data (0080,0007) US 3-3n
#[rustfmt::skip]
pub const SURFACE_POINT_COLOR_CIE_LAB_VALUE_DATA: Tag = Tag(0x0080, 0x0007);
/// UV Mapping Sequence (0080,0008) SQ 1
#[rustfmt::skip]
pub const UV_MAPPING_SEQUENCE: Tag = Tag(0x0080, 0x0008);
/// Texture Label (0080,0009) SH 1
#[rustfmt::skip]
pub const TEXTURE_LABEL: Tag = Tag(0x0080, 0x0009);
/// U Value Data (0080,0010) OF 1
#[rustfmt::skip]
pub const U_VALUE_DATA: Tag = Tag(0x0080, 0x0010);
/// V Value Data (0080,0011) OF 1
#[rustfmt::skip]
pub const V_VALUE_DATA: Tag = Tag(0x0080, 0x0011);
/// Referenced Texture Sequence (0080,0012) SQ 1
#[rustfmt::skip]
pub const REFERENCED_TEXTURE_SEQUENCE: Tag = Tag(0x0080, 0x0012);
/// Referenced Surface Data Sequence (0080,0013) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SURFACE_DATA_SEQUENCE: Tag = Tag(0x0080, 0x0013);
/// Assessment Summary (0082,0001) CS 1
#[rustfmt::skip]
pub const ASSESSMENT_SUMMARY: Tag = Tag(0x0082, 0x0001);
/// Assessment Summary Description (0082,0003) UT 1
#[rustfmt::skip]
pub const ASSESSMENT_SUMMARY_DESCRIPTION: Tag = Tag(0x0082, 0x0003);
/// Assessed SOP Instance Sequence (0082,0004) SQ 1
#[rustfmt::skip]
pub const ASSESSED_SOP_INSTANCE_SEQUENCE: Tag = Tag(0x0082, 0x0004);
/// Referenced Comparison SOP Instance Sequence (0082,0005) SQ 1
#[rustfmt::skip]
pub const REFERENCED_COMPARISON_SOP_INSTANCE_SEQUENCE: Tag = Tag(0x0082, 0x0005);
/// Number of Assessment Observations (0082,0006) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_ASSESSMENT_OBSERVATIONS: Tag = Tag(0x0082, 0x0006);
/// Assessment Observations Sequence (0082,0007) SQ 1
#[rustfmt::skip]
pub const ASSESSMENT_OBSERVATIONS_SEQUENCE: Tag = Tag(0x0082, 0x0007);
/// Observation Significance (0082,0008) CS 1
#[rustfmt::skip]
pub const OBSERVATION_SIGNIFICANCE: Tag = Tag(0x0082, 0x0008);
/// Observation Description (0082,000A) UT 1
#[rustfmt::skip]
pub const OBSERVATION_DESCRIPTION: Tag = Tag(0x0082, 0x000A);
/// Structured Constraint Observation Sequence (0082,000C) SQ 1
#[rustfmt::skip]
pub const STRUCTURED_CONSTRAINT_OBSERVATION_SEQUENCE: Tag = Tag(0x0082, 0x000C);
/// Assessed Attribute Value Sequence (0082,0010) SQ 1
#[rustfmt::skip]
pub const ASSESSED_ATTRIBUTE_VALUE_SEQUENCE: Tag = Tag(0x0082, 0x0010);
/// Assessment Set ID (0082,0016) LO 1
#[rustfmt::skip]
pub const ASSESSMENT_SET_ID: Tag = Tag(0x0082, 0x0016);
/// Assessment Requester Sequence (0082,0017) SQ 1
#[rustfmt::skip]
pub const ASSESSMENT_REQUESTER_SEQUENCE: Tag = Tag(0x0082, 0x0017);
/// Selector Attribute Name (0082,0018) LO 1
#[rustfmt::skip]
pub const SELECTOR_ATTRIBUTE_NAME: Tag = Tag(0x0082, 0x0018);
/// Selector Attribute Keyword (0082,0019) LO 1
#[rustfmt::skip]
pub const SELECTOR_ATTRIBUTE_KEYWORD: Tag = Tag(0x0082, 0x0019);
/// Assessment Type Code Sequence (0082,0021) SQ 1
#[rustfmt::skip]
pub const ASSESSMENT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0082, 0x0021);
/// Observation Basis Code Sequence (0082,0022) SQ 1
#[rustfmt::skip]
pub const OBSERVATION_BASIS_CODE_SEQUENCE: Tag = Tag(0x0082, 0x0022);
/// Assessment Label (0082,0023) LO 1
#[rustfmt::skip]
pub const ASSESSMENT_LABEL: Tag = Tag(0x0082, 0x0023);
/// Constraint Type (0082,0032) CS 1
#[rustfmt::skip]
pub const CONSTRAINT_TYPE: Tag = Tag(0x0082, 0x0032);
/// Specification Selection Guidance (0082,0033) UT 1
#[rustfmt::skip]
pub const SPECIFICATION_SELECTION_GUIDANCE: Tag = Tag(0x0082, 0x0033);
/// Constraint Value Sequence (0082,0034) SQ 1
#[rustfmt::skip]
pub const CONSTRAINT_VALUE_SEQUENCE: Tag = Tag(0x0082, 0x0034);
/// Recommended Default Value Sequence (0082,0035) SQ 1
#[rustfmt::skip]
pub const RECOMMENDED_DEFAULT_VALUE_SEQUENCE: Tag = Tag(0x0082, 0x0035);
/// Constraint Violation Significance (0082,0036) CS 1
#[rustfmt::skip]
pub const CONSTRAINT_VIOLATION_SIGNIFICANCE: Tag = Tag(0x0082, 0x0036);
/// Constraint Violation Condition (0082,0037) UT 1
#[rustfmt::skip]
pub const CONSTRAINT_VIOLATION_CONDITION: Tag = Tag(0x0082, 0x0037);
/// Modifiable Constraint Flag (0082,0038) CS 1
#[rustfmt::skip]
pub const MODIFIABLE_CONSTRAINT_FLAG: Tag = Tag(0x0082, 0x0038);
/// Storage Media File-set ID (0088,0130) SH 1
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_ID: Tag = Tag(0x0088, 0x0130);
/// Storage Media File-set UID (0088,0140) UI 1
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// Icon Image Sequence (0088,0200) SQ 1
#[rustfmt::skip]
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// Topic Title (0088,0904) LO 1 (retired)
#[rustfmt::skip]
pub const TOPIC_TITLE: Tag = Tag(0x0088, 0x0904);
/// Topic Subject (0088,0906) ST 1 (retired)
#[rustfmt::skip]
pub const TOPIC_SUBJECT: Tag = Tag(0x0088, 0x0906);
/// Topic Author (0088,0910) LO 1 (retired)
#[rustfmt::skip]
pub const TOPIC_AUTHOR: Tag = Tag(0x0088, 0x0910);
/// Topic Keywords (0088,0912) LO 1-32 (retired)
#[rustfmt::skip]
pub const TOPIC_KEYWORDS: Tag = Tag(0x0088, 0x0912);
/// SOP Instance Status (0100,0410) CS 1
#[rustfmt::skip]
pub const SOP_INSTANCE_STATUS: Tag = Tag(0x0100, 0x0410);
/// SOP Authorization DateTime (0100,0420) DT 1
#[rustfmt::skip]
pub const SOP_AUTHORIZATION_DATE_TIME: Tag = Tag(0x0100, 0x0420);
/// SOP Authorization Comment (0100,0424) LT 1
#[rustfmt::skip]
pub const SOP_AUTHORIZATION_COMMENT: Tag = Tag(0x0100, 0x0424);
/// Authorization Equipment Certification Number (0100,0426) LO 1
#[rustfmt::skip]
pub const AUTHORIZATION_EQUIPMENT_CERTIFICATION_NUMBER: Tag = Tag(0x0100, 0x0426);
/// MAC ID Number (0400,0005) US 1
#[rustfmt::skip]
pub const MACID_NUMBER: Tag = Tag(0x0400, 0x0005);
/// MAC Calculation Transfer Syntax UID (0400,0010) UI 1
#[rustfmt::skip]
pub const MAC_CALCULATION_TRANSFER_SYNTAX_UID: Tag = Tag(0x0400, 0x0010);
/// MAC Algorithm (0400,0015) CS 1
#[rustfmt::skip]
pub const MAC_ALGORITHM: Tag = Tag(0x0400, 0x0015);
/// Data Elements Signed (0400,0020) AT 1-n
#[rustfmt::skip]
pub const DATA_ELEMENTS_SIGNED: Tag = Tag(0x0400, 0x0020);
/// Digital Signature UID (0400,0100) UI 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURE_UID: Tag = Tag(0x0400, 0x0100);
/// Digital Signature DateTime (0400,0105) DT 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURE_DATE_TIME: Tag = Tag(0x0400, 0x0105);
/// Certificate Type (0400,0110) CS 1
#[rustfmt::skip]
pub const CERTIFICATE_TYPE: Tag = Tag(0x0400, 0x0110);
/// Certificate of Signer (0400,0115) OB 1
#[rustfmt::skip]
pub const CERTIFICATE_OF_SIGNER: Tag = Tag(0x0400, 0x0115);
/// Signature (0400,0120) OB 1
#[rustfmt::skip]
pub const SIGNATURE: Tag = Tag(0x0400, 0x0120);
/// Certified Timestamp Type (0400,0305) CS 1
#[rustfmt::skip]
pub const CERTIFIED_TIMESTAMP_TYPE: Tag = Tag(0x0400, 0x0305);
/// Certified Timestamp (0400,0310) OB 1
#[rustfmt::skip]
pub const CERTIFIED_TIMESTAMP: Tag = Tag(0x0400, 0x0310);
/// Digital Signature Purpose Code Sequence (0400,0401) SQ 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURE_PURPOSE_CODE_SEQUENCE: Tag = Tag(0x0400, 0x0401);
/// Referenced Digital Signature Sequence (0400,0402) SQ 1
#[rustfmt::skip]
pub const REFERENCED_DIGITAL_SIGNATURE_SEQUENCE: Tag = Tag(0x0400, 0x0402);
/// Referenced SOP Instance MAC Sequence (0400,0403) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_MAC_SEQUENCE: Tag = Tag(0x0400, 0x0403);
/// MAC (0400,0404) OB 1
#[rustfmt::skip]
pub const MAC: Tag = Tag(0x0400, 0x0404);
/// Encrypted Attributes Sequence (0400,0500) SQ 1
#[rustfmt::skip]
pub const ENCRYPTED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0500);
/// Encrypted Content Transfer Syntax UID (0400,0510) UI 1
#[rustfmt::skip]
pub const ENCRYPTED_CONTENT_TRANSFER_SYNTAX_UID: Tag = Tag(0x0400, 0x0510);
/// Encrypted Content (0400,0520) OB 1
#[rustfmt::skip]
pub const ENCRYPTED_CONTENT: Tag = Tag(0x0400, 0x0520);
/// Modified Attributes Sequence (0400,0550) SQ 1
#[rustfmt::skip]
pub const MODIFIED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0550);
/// Nonconforming Modified Attributes Sequence (0400,0551) SQ 1
#[rustfmt::skip]
pub const NONCONFORMING_MODIFIED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0551);
/// Nonconforming Data Element Value (0400,0552) OB 1
#[rustfmt::skip]
pub const NONCONFORMING_DATA_ELEMENT_VALUE: Tag = Tag(0x0400, 0x0552);
/// Original Attributes Sequence (0400,0561) SQ 1
#[rustfmt::skip]
pub const ORIGINAL_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0561);
/// Attribute Modification DateTime (0400,0562) DT 1
#[rustfmt::skip]
pub const ATTRIBUTE_MODIFICATION_DATE_TIME: Tag = Tag(0x0400, 0x0562);
/// Modifying System (0400,0563) LO 1
#[rustfmt::skip]
pub const MODIFYING_SYSTEM: Tag = Tag(0x0400, 0x0563);
/// Source of Previous Values (0400,0564) LO 1
#[rustfmt::skip]
pub const SOURCE_OF_PREVIOUS_VALUES: Tag = Tag(0x0400, 0x0564);
/// Reason for the Attribute Modification (0400,0565) CS 1
#[rustfmt::skip]
pub const REASON_FOR_THE_ATTRIBUTE_MODIFICATION: Tag = Tag(0x0400, 0x0565);
/// Instance Origin Status (0400,0600) CS 1
#[rustfmt::skip]
pub const INSTANCE_ORIGIN_STATUS: Tag = Tag(0x0400, 0x0600);
/// Number of Copies (2000,0010) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_COPIES: Tag = Tag(0x2000, 0x0010);
/// Printer Configuration Sequence (2000,001E) SQ 1
#[rustfmt::skip]
pub const PRINTER_CONFIGURATION_SEQUENCE: Tag = Tag(0x2000, 0x001E);
/// Print Priority (2000,0020) CS 1
#[rustfmt::skip]
pub const PRINT_PRIORITY: Tag = Tag(0x2000, 0x0020);
/// Medium Type (2000,0030) CS 1
#[rustfmt::skip]
pub const MEDIUM_TYPE: Tag = Tag(0x2000, 0x0030);
/// Film Destination (2000,0040) CS 1
#[rustfmt::skip]
pub const FILM_DESTINATION: Tag = Tag(0x2000, 0x0040);
/// Film Session Label (2000,0050) LO 1
#[rustfmt::skip]
pub const FILM_SESSION_LABEL: Tag = Tag(0x2000, 0x0050);
/// Memory Allocation (2000,0060) IS 1
#[rustfmt::skip]
pub const MEMORY_ALLOCATION: Tag = Tag(0x2000, 0x0060);
/// Maximum Memory Allocation (2000,0061) IS 1
#[rustfmt::skip]
pub const MAXIMUM_MEMORY_ALLOCATION: Tag = Tag(0x2000, 0x0061);
/// Color Image Printing Flag (2000,0062) CS 1 (retired)
#[rustfmt::skip]
pub const COLOR_IMAGE_PRINTING_FLAG: Tag = Tag(0x2000, 0x0062);
/// Collation Flag (2000,0063) CS 1 (retired)
#[rustfmt::skip]
pub const COLLATION_FLAG: Tag = Tag(0x2000, 0x0063);
/// Annotation Flag (2000,0065) CS 1 (retired)
#[rustfmt::skip]
pub const ANNOTATION_FLAG: Tag = Tag(0x2000, 0x0065);
/// Image Overlay Flag (2000,0067) CS 1 (retired)
#[rustfmt::skip]
pub const IMAGE_OVERLAY_FLAG: Tag = Tag(0x2000, 0x0067);
/// Presentation LUT Flag (2000,0069) CS 1 (retired)
#[rustfmt::skip]
pub const PRESENTATION_LUT_FLAG: Tag = Tag(0x2000, 0x0069);
/// Image Box Presentation LUT Flag (2000,006A) CS 1 (retired)
#[rustfmt::skip]
pub const IMAGE_BOX_PRESENTATION_LUT_FLAG: Tag = Tag(0x2000, 0x006A);
/// Memory Bit Depth (2000,00A0) US 1
#[rustfmt::skip]
pub const MEMORY_BIT_DEPTH: Tag = Tag(0x2000, 0x00A0);
/// Printing Bit Depth (2000,00A1) US 1
#[rustfmt::skip]
pub const PRINTING_BIT_DEPTH: Tag = Tag(0x2000, 0x00A1);
/// Media Installed Sequence (2000,00A2) SQ 1
#[rustfmt::skip]
pub const MEDIA_INSTALLED_SEQUENCE: Tag = Tag(0x2000, 0x00A2);
/// Other Media Available Sequence (2000,00A4) SQ 1
#[rustfmt::skip]
pub const OTHER_MEDIA_AVAILABLE_SEQUENCE: Tag = Tag(0x2000, 0x00A4);
/// Supported Image Display Formats Sequence (2000,00A8) SQ 1
#[rustfmt::skip]
pub const SUPPORTED_IMAGE_DISPLAY_FORMATS_SEQUENCE: Tag = Tag(0x2000, 0x00A8);
/// Referenced Film Box Sequence (2000,0500) SQ 1
#[rustfmt::skip]
pub const REFERENCED_FILM_BOX_SEQUENCE: Tag = Tag(0x2000, 0x0500);
/// Referenced Stored Print Sequence (2000,0510) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_STORED_PRINT_SEQUENCE: Tag = Tag(0x2000, 0x0510);
/// Image Display Format (2010,0010) ST 1
#[rustfmt::skip]
pub const IMAGE_DISPLAY_FORMAT: Tag = Tag(0x2010, 0x0010);
/// Annotation Display Format ID (2010,0030) CS 1
#[rustfmt::skip]
pub const ANNOTATION_DISPLAY_FORMAT_ID: Tag = Tag(0x2010, 0x0030);
/// Film Orientation (2010,0040) CS 1
#[rustfmt::skip]
pub const FILM_ORIENTATION: Tag = Tag(0x2010, 0x0040);
/// Film Size ID (2010,0050) CS 1
#[rustfmt::skip]
pub const FILM_SIZE_ID: Tag = Tag(0x2010, 0x0050);
/// Printer Resolution ID (2010,0052) CS 1
#[rustfmt::skip]
pub const PRINTER_RESOLUTION_ID: Tag = Tag(0x2010, 0x0052);
/// Default Printer Resolution ID (2010,0054) CS 1
#[rustfmt::skip]
pub const DEFAULT_PRINTER_RESOLUTION_ID: Tag = Tag(0x2010, 0x0054);
/// Magnification Type (2010,0060) CS 1
#[rustfmt::skip]
pub const MAGNIFICATION_TYPE: Tag = Tag(0x2010, 0x0060);
/// Smoothing Type (2010,0080) CS 1
#[rustfmt::skip]
pub const SMOOTHING_TYPE: Tag = Tag(0x2010, 0x0080);
/// Default Magnification Type (2010,00A6) CS 1
#[rustfmt::skip]
pub const DEFAULT_MAGNIFICATION_TYPE: Tag = Tag(0x2010, 0x00A6);
/// Other Magnification Types Available (2010,00A7) CS 1-n
#[rustfmt::skip]
pub const OTHER_MAGNIFICATION_TYPES_AVAILABLE: Tag = Tag(0x2010, 0x00A7);
/// Default Smoothing Type (2010,00A8) CS 1
#[rustfmt::skip]
pub const DEFAULT_SMOOTHING_TYPE: Tag = Tag(0x2010, 0x00A8);
/// Other Smoothing Types Available (2010,00A9) CS 1-n
#[rustfmt::skip]
pub const OTHER_SMOOTHING_TYPES_AVAILABLE: Tag = Tag(0x2010, 0x00A9);
/// Border Density (2010,0100) CS 1
#[rustfmt::skip]
pub const BORDER_DENSITY: Tag = Tag(0x2010, 0x0100);
/// Empty Image Density (2010,0110) CS 1
#[rustfmt::skip]
pub const EMPTY_IMAGE_DENSITY: Tag = Tag(0x2010, 0x0110);
/// Min Density (2010,0120) US 1
#[rustfmt::skip]
pub const MIN_DENSITY: Tag = Tag(0x2010, 0x0120);
/// Max Density (2010,0130) US 1
#[rustfmt::skip]
pub const MAX_DENSITY: Tag = Tag(0x2010, 0x0130);
/// Trim (2010,0140) CS 1
#[rustfmt::skip]
pub const TRIM: Tag = Tag(0x2010, 0x0140);
/// Configuration Information (2010,0150) ST 1
#[rustfmt::skip]
pub const CONFIGURATION_INFORMATION: Tag = Tag(0x2010, 0x0150);
/// Configuration Information Description (2010,0152) LT 1
#[rustfmt::skip]
pub const CONFIGURATION_INFORMATION_DESCRIPTION: Tag = Tag(0x2010, 0x0152);
/// Maximum Collated Films (2010,0154) IS 1
#[rustfmt::skip]
pub const MAXIMUM_COLLATED_FILMS: Tag = Tag(0x2010, 0x0154);
/// Illumination (2010,015E) US 1
#[rustfmt::skip]
pub const ILLUMINATION: Tag = Tag(0x2010, 0x015E);
/// Reflected Ambient Light (2010,0160) US 1
#[rustfmt::skip]
pub const REFLECTED_AMBIENT_LIGHT: Tag = Tag(0x2010, 0x0160);
/// Printer Pixel Spacing (2010,0376) DS 2
#[rustfmt::skip]
pub const PRINTER_PIXEL_SPACING: Tag = Tag(0x2010, 0x0376);
/// Referenced Film Session Sequence (2010,0500) SQ 1
#[rustfmt::skip]
pub const REFERENCED_FILM_SESSION_SEQUENCE: Tag = Tag(0x2010, 0x0500);
/// Referenced Image Box Sequence (2010,0510) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_BOX_SEQUENCE: Tag = Tag(0x2010, 0x0510);
/// Referenced Basic Annotation Box Sequence (2010,0520) SQ 1
#[rustfmt::skip]
pub const REFERENCED_BASIC_ANNOTATION_BOX_SEQUENCE: Tag = Tag(0x2010, 0x0520);
/// Image Box Position (2020,0010) US 1
#[rustfmt::skip]
pub const IMAGE_BOX_POSITION: Tag = Tag(0x2020, 0x0010);
/// Polarity (2020,0020) CS 1
#[rustfmt::skip]
pub const POLARITY: Tag = Tag(0x2020, 0x0020);
/// Requested Image Size (2020,0030) DS 1
#[rustfmt::skip]
pub const REQUESTED_IMAGE_SIZE: Tag = Tag(0x2020, 0x0030);
/// Requested Decimate/Crop Behavior (2020,0040) CS 1
#[rustfmt::skip]
pub const REQUESTED_DECIMATE_CROP_BEHAVIOR: Tag = Tag(0x2020, 0x0040);
/// Requested Resolution ID (2020,0050) CS 1
#[rustfmt::skip]
pub const REQUESTED_RESOLUTION_ID: Tag = Tag(0x2020, 0x0050);
/// Requested Image Size Flag (2020,00A0) CS 1
#[rustfmt::skip]
pub const REQUESTED_IMAGE_SIZE_FLAG: Tag = Tag(0x2020, 0x00A0);
/// Decimate/Crop Result (2020,00A2) CS 1
#[rustfmt::skip]
pub const DECIMATE_CROP_RESULT: Tag = Tag(0x2020, 0x00A2);
/// Basic Grayscale Image Sequence (2020,0110) SQ 1
#[rustfmt::skip]
pub const BASIC_GRAYSCALE_IMAGE_SEQUENCE: Tag = Tag(0x2020, 0x0110);
/// Basic Color Image Sequence (2020,0111) SQ 1
#[rustfmt::skip]
pub const BASIC_COLOR_IMAGE_SEQUENCE: Tag = Tag(0x2020, 0x0111);
/// Referenced Image Overlay Box Sequence (2020,0130) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_IMAGE_OVERLAY_BOX_SEQUENCE: Tag = Tag(0x2020, 0x0130);
/// Referenced VOI LUT Box Sequence (2020,0140) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_VOILUT_BOX_SEQUENCE: Tag = Tag(0x2020, 0x0140);
/// Annotation Position (2030,0010) US 1
#[rustfmt::skip]
pub const ANNOTATION_POSITION: Tag = Tag(0x2030, 0x0010);
/// Text String (2030,0020) LO 1
#[rustfmt::skip]
pub const TEXT_STRING: Tag = Tag(0x2030, 0x0020);
/// Referenced Overlay Plane Sequence (2040,0010) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_OVERLAY_PLANE_SEQUENCE: Tag = Tag(0x2040, 0x0010);
/// Referenced Overlay Plane Groups (2040,0011) US 1-99 (retired)
#[rustfmt::skip]
pub const REFERENCED_OVERLAY_PLANE_GROUPS: Tag = Tag(0x2040, 0x0011);
/// Overlay Pixel Data Sequence (2040,0020) SQ 1 (retired)
#[rustfmt::skip]
pub const OVERLAY_PIXEL_DATA_SEQUENCE: Tag = Tag(0x2040, 0x0020);
/// Overlay Magnification Type (2040,0060) CS 1 (retired)
#[rustfmt::skip]
pub const OVERLAY_MAGNIFICATION_TYPE: Tag = Tag(0x2040, 0x0060);
/// Overlay Smoothing Type (2040,0070) CS 1 (retired)
#[rustfmt::skip]
pub const OVERLAY_SMOOTHING_TYPE: Tag = Tag(0x2040, 0x0070);
/// Overlay or Image Magnification (2040,0072) CS 1 (retired)
#[rustfmt::skip]
pub const OVERLAY_OR_IMAGE_MAGNIFICATION: Tag = Tag(0x2040, 0x0072);
/// Magnify to Number of Columns (2040,0074) US 1 (retired)
#[rustfmt::skip]
pub const MAGNIFY_TO_NUMBER_OF_COLUMNS: Tag = Tag(0x2040, 0x0074);
/// Overlay Foreground Density (2040,0080) CS 1 (retired)
#[rustfmt::skip]
pub const OVERLAY_FOREGROUND_DENSITY: Tag = Tag(0x2040, 0x0080);
/// Overlay Background Density (2040,0082) CS 1 (retired)
#[rustfmt::skip]
pub const OVERLAY_BACKGROUND_DENSITY: Tag = Tag(0x2040, 0x0082);
/// Overlay Mode (2040,0090) CS 1 (retired)
#[rustfmt::skip]
pub const OVERLAY_MODE: Tag = Tag(0x2040, 0x0090);
/// Threshold Density (2040,0100) CS 1 (retired)
#[rustfmt::skip]
pub const THRESHOLD_DENSITY: Tag = Tag(0x2040, 0x0100);
/// Referenced Image Box Sequence (Retired) (2040,0500) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_IMAGE_BOX_SEQUENCE_RETIRED: Tag = Tag(0x2040, 0x0500);
/// Presentation LUT Sequence (2050,0010) SQ 1
#[rustfmt::skip]
pub const PRESENTATION_LUT_SEQUENCE: Tag = Tag(0x2050, 0x0010);
/// Presentation LUT Shape (2050,0020) CS 1
#[rustfmt::skip]
pub const PRESENTATION_LUT_SHAPE: Tag = Tag(0x2050, 0x0020);
/// Referenced Presentation LUT Sequence (2050,0500) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PRESENTATION_LUT_SEQUENCE: Tag = Tag(0x2050, 0x0500);
/// Print Job ID (2100,0010) SH 1 (retired)
#[rustfmt::skip]
pub const PRINT_JOB_ID: Tag = Tag(0x2100, 0x0010);
/// Execution Status (2100,0020) CS 1
#[rustfmt::skip]
pub const EXECUTION_STATUS: Tag = Tag(0x2100, 0x0020);
/// Execution Status Info (2100,0030) CS 1
#[rustfmt::skip]
pub const EXECUTION_STATUS_INFO: Tag = Tag(0x2100, 0x0030);
/// Creation Date (2100,0040) DA 1
#[rustfmt::skip]
pub const CREATION_DATE: Tag = Tag(0x2100, 0x0040);
/// Creation Time (2100,0050) TM 1
#[rustfmt::skip]
pub const CREATION_TIME: Tag = Tag(0x2100, 0x0050);
/// Originator (2100,0070) AE 1
#[rustfmt::skip]
pub const ORIGINATOR: Tag = Tag(0x2100, 0x0070);
/// Destination AE (2100,0140) AE 1 (retired)
#[rustfmt::skip]
pub const DESTINATION_AE: Tag = Tag(0x2100, 0x0140);
/// Owner ID (2100,0160) SH 1
#[rustfmt::skip]
pub const OWNER_ID: Tag = Tag(0x2100, 0x0160);
/// Number of Films (2100,0170) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FILMS: Tag = Tag(0x2100, 0x0170);
/// Referenced Print Job Sequence (Pull Stored Print) (2100,0500) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_PRINT_JOB_SEQUENCE_PULL_STORED_PRINT: Tag = Tag(0x2100, 0x0500);
/// Printer Status (2110,0010) CS 1
#[rustfmt::skip]
pub const PRINTER_STATUS: Tag = Tag(0x2110, 0x0010);
/// Printer Status Info (2110,0020) CS 1
#[rustfmt::skip]
pub const PRINTER_STATUS_INFO: Tag = Tag(0x2110, 0x0020);
/// Printer Name (2110,0030) LO 1
#[rustfmt::skip]
pub const PRINTER_NAME: Tag = Tag(0x2110, 0x0030);
/// Print Queue ID (2110,0099) SH 1 (retired)
#[rustfmt::skip]
pub const PRINT_QUEUE_ID: Tag = Tag(0x2110, 0x0099);
/// Queue Status (2120,0010) CS 1 (retired)
#[rustfmt::skip]
pub const QUEUE_STATUS: Tag = Tag(0x2120, 0x0010);
/// Print Job Description Sequence (2120,0050) SQ 1 (retired)
#[rustfmt::skip]
pub const PRINT_JOB_DESCRIPTION_SEQUENCE: Tag = Tag(0x2120, 0x0050);
/// Referenced Print Job Sequence (2120,0070) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_PRINT_JOB_SEQUENCE: Tag = Tag(0x2120, 0x0070);
/// Print Management Capabilities Sequence (2130,0010) SQ 1 (retired)
#[rustfmt::skip]
pub const PRINT_MANAGEMENT_CAPABILITIES_SEQUENCE: Tag = Tag(0x2130, 0x0010);
/// Printer Characteristics Sequence (2130,0015) SQ 1 (retired)
#[rustfmt::skip]
pub const PRINTER_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x2130, 0x0015);
/// Film Box Content Sequence (2130,0030) SQ 1 (retired)
#[rustfmt::skip]
pub const FILM_BOX_CONTENT_SEQUENCE: Tag = Tag(0x2130, 0x0030);
/// Image Box Content Sequence (2130,0040) SQ 1 (retired)
#[rustfmt::skip]
pub const IMAGE_BOX_CONTENT_SEQUENCE: Tag = Tag(0x2130, 0x0040);
/// Annotation Content Sequence (2130,0050) SQ 1 (retired)
#[rustfmt::skip]
pub const ANNOTATION_CONTENT_SEQUENCE: Tag = Tag(0x2130, 0x0050);
/// Image Overlay Box Content Sequence (2130,0060) SQ 1 (retired)
#[rustfmt::skip]
pub const IMAGE_OVERLAY_BOX_CONTENT_SEQUENCE: Tag = Tag(0x2130, 0x0060);
/// Presentation LUT Content Sequence (2130,0080) SQ 1 (retired)
#[rustfmt::skip]
pub const PRESENTATION_LUT_CONTENT_SEQUENCE: Tag = Tag(0x2130, 0x0080);
/// Proposed Study Sequence (2130,00A0) SQ 1 (retired)
#[rustfmt::skip]
pub const PROPOSED_STUDY_SEQUENCE: Tag = Tag(0x2130, 0x00A0);
/// Original Image Sequence (2130,00C0) SQ 1 (retired)
#[rustfmt::skip]
pub const ORIGINAL_IMAGE_SEQUENCE: Tag = Tag(0x2130, 0x00C0);
/// Label Using Information Extracted From Instances (2200,0001) CS 1
#[rustfmt::skip]
pub const LABEL_USING_INFORMATION_EXTRACTED_FROM_INSTANCES: Tag = Tag(0x2200, 0x0001);
/// Label Text (2200,0002) UT 1
#[rustfmt::skip]
pub const LABEL_TEXT: Tag = Tag(0x2200, 0x0002);
/// Label Style Selection (2200,0003) CS 1
#[rustfmt::skip]
pub const LABEL_STYLE_SELECTION: Tag = Tag(0x2200, 0x0003);
/// Media Disposition (2200,0004) LT 1
#[rustfmt::skip]
pub const MEDIA_DISPOSITION: Tag = Tag(0x2200, 0x0004);
/// Barcode Value (2200,0005) LT 1
#[rustfmt::skip]
pub const BARCODE_VALUE: Tag = Tag(0x2200, 0x0005);
/// Barcode Symbology (2200,0006) CS 1
#[rustfmt::skip]
pub const BARCODE_SYMBOLOGY: Tag = Tag(0x2200, 0x0006);
/// Allow Media Splitting (2200,0007) CS 1
#[rustfmt::skip]
pub const ALLOW_MEDIA_SPLITTING: Tag = Tag(0x2200, 0x0007);
/// Include Non-DICOM Objects (2200,0008) CS 1
#[rustfmt::skip]
pub const INCLUDE_NON_DICOM_OBJECTS: Tag = Tag(0x2200, 0x0008);
/// Include Display Application (2200,0009) CS 1
#[rustfmt::skip]
pub const INCLUDE_DISPLAY_APPLICATION: Tag = Tag(0x2200, 0x0009);
/// Preserve Composite Instances After Media Creation (2200,000A) CS 1
#[rustfmt::skip]
pub const PRESERVE_COMPOSITE_INSTANCES_AFTER_MEDIA_CREATION: Tag = Tag(0x2200, 0x000A);
/// Total Number of Pieces of Media Created (2200,000B) US 1
#[rustfmt::skip]
pub const TOTAL_NUMBER_OF_PIECES_OF_MEDIA_CREATED: Tag = Tag(0x2200, 0x000B);
/// Requested Media Application Profile (2200,000C) LO 1
#[rustfmt::skip]
pub const REQUESTED_MEDIA_APPLICATION_PROFILE: Tag = Tag(0x2200, 0x000C);
/// Referenced Storage Media Sequence (2200,000D) SQ 1
#[rustfmt::skip]
pub const REFERENCED_STORAGE_MEDIA_SEQUENCE: Tag = Tag(0x2200, 0x000D);
/// Failure Attributes (2200,000E) AT 1-n
#[rustfmt::skip]
pub const FAILURE_ATTRIBUTES: Tag = Tag(0x2200, 0x000E);
/// Allow Lossy Compression (2200,000F) CS 1
#[rustfmt::skip]
pub const ALLOW_LOSSY_COMPRESSION: Tag = Tag(0x2200, 0x000F);
/// Request Priority (2200,0020) CS 1
#[rustfmt::skip]
pub const REQUEST_PRIORITY: Tag = Tag(0x2200, 0x0020);
/// RT Image Label (3002,0002) SH 1
#[rustfmt::skip]
pub const RT_IMAGE_LABEL: Tag = Tag(0x3002, 0x0002);
/// RT Image Name (3002,0003) LO 1
#[rustfmt::skip]
pub const RT_IMAGE_NAME: Tag = Tag(0x3002, 0x0003);
/// RT Image Description (3002,0004) ST 1
#[rustfmt::skip]
pub const RT_IMAGE_DESCRIPTION: Tag = Tag(0x3002, 0x0004);
/// Reported Values Origin (3002,000A) CS 1
#[rustfmt::skip]
pub const REPORTED_VALUES_ORIGIN: Tag = Tag(0x3002, 0x000A);
/// RT Image Plane (3002,000C) CS 1
#[rustfmt::skip]
pub const RT_IMAGE_PLANE: Tag = Tag(0x3002, 0x000C);
/// X-Ray Image Receptor Translation (3002,000D) DS 3
#[rustfmt::skip]
pub const X_RAY_IMAGE_RECEPTOR_TRANSLATION: Tag = Tag(0x3002, 0x000D);
/// X-Ray Image Receptor Angle (3002,000E) DS 1
#[rustfmt::skip]
pub const X_RAY_IMAGE_RECEPTOR_ANGLE: Tag = Tag(0x3002, 0x000E);
/// RT Image Orientation (3002,0010) DS 6
#[rustfmt::skip]
pub const RT_IMAGE_ORIENTATION: Tag = Tag(0x3002, 0x0010);
/// Image Plane Pixel Spacing (3002,0011) DS 2
#[rustfmt::skip]
pub const IMAGE_PLANE_PIXEL_SPACING: Tag = Tag(0x3002, 0x0011);
/// RT Image Position (3002,0012) DS 2
#[rustfmt::skip]
pub const RT_IMAGE_POSITION: Tag = Tag(0x3002, 0x0012);
/// Radiation Machine Name (3002,0020) SH 1
#[rustfmt::skip]
pub const RADIATION_MACHINE_NAME: Tag = Tag(0x3002, 0x0020);
/// Radiation Machine SAD (3002,0022) DS 1
#[rustfmt::skip]
pub const RADIATION_MACHINE_SAD: Tag = Tag(0x3002, 0x0022);
/// Radiation Machine SSD (3002,0024) DS 1
#[rustfmt::skip]
pub const RADIATION_MACHINE_SSD: Tag = Tag(0x3002, 0x0024);
/// RT Image SID (3002,0026) DS 1
#[rustfmt::skip]
pub const RT_IMAGE_SID: Tag = Tag(0x3002, 0x0026);
/// Source to Reference Object Distance (3002,0028) DS 1
#[rustfmt::skip]
pub const SOURCE_TO_REFERENCE_OBJECT_DISTANCE: Tag = Tag(0x3002, 0x0028);
/// Fraction Number (3002,0029) IS 1
#[rustfmt::skip]
pub const FRACTION_NUMBER: Tag = Tag(0x3002, 0x0029);
/// Exposure Sequence (3002,0030) SQ 1
#[rustfmt::skip]
pub const EXPOSURE_SEQUENCE: Tag = Tag(0x3002, 0x0030);
/// Meterset Exposure (3002,0032) DS 1
#[rustfmt::skip]
pub const METERSET_EXPOSURE: Tag = Tag(0x3002, 0x0032);
/// Diaphragm Position (3002,0034) DS 4
#[rustfmt::skip]
pub const DIAPHRAGM_POSITION: Tag = Tag(0x3002, 0x0034);
/// Fluence Map Sequence (3002,0040) SQ 1
#[rustfmt::skip]
pub const FLUENCE_MAP_SEQUENCE: Tag = Tag(0x3002, 0x0040);
/// Fluence Data Source (3002,0041) CS 1
#[rustfmt::skip]
pub const FLUENCE_DATA_SOURCE: Tag = Tag(0x3002, 0x0041);
/// Fluence Data Scale (3002,0042) DS 1
#[rustfmt::skip]
pub const FLUENCE_DATA_SCALE: Tag = Tag(0x3002, 0x0042);
/// Primary Fluence Mode Sequence (3002,0050) SQ 1
#[rustfmt::skip]
pub const PRIMARY_FLUENCE_MODE_SEQUENCE: Tag = Tag(0x3002, 0x0050);
/// Fluence Mode (3002,0051) CS 1
#[rustfmt::skip]
pub const FLUENCE_MODE: Tag = Tag(0x3002, 0x0051);
/// Fluence Mode ID (3002,0052) SH 1
#[rustfmt::skip]
pub const FLUENCE_MODE_ID: Tag = Tag(0x3002, 0x0052);
/// Selected Frame Number (3002,0100) IS 1
#[rustfmt::skip]
pub const SELECTED_FRAME_NUMBER: Tag = Tag(0x3002, 0x0100);
/// Selected Frame Functional Groups Sequence (3002,0101) SQ 1
#[rustfmt::skip]
pub const SELECTED_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x3002, 0x0101);
/// RT Image Frame General Content Sequence (3002,0102) SQ 1
#[rustfmt::skip]
pub const RT_IMAGE_FRAME_GENERAL_CONTENT_SEQUENCE: Tag = Tag(0x3002, 0x0102);
/// RT Image Frame Context Sequence (3002,0103) SQ 1
#[rustfmt::skip]
pub const RT_IMAGE_FRAME_CONTEXT_SEQUENCE: Tag = Tag(0x3002, 0x0103);
/// RT Image Scope Sequence (3002,0104) SQ 1
#[rustfmt::skip]
pub const RT_IMAGE_SCOPE_SEQUENCE: Tag = Tag(0x3002, 0x0104);
/// Beam Modifier Coordinates Presence Flag (3002,0105) CS 1
#[rustfmt::skip]
pub const BEAM_MODIFIER_COORDINATES_PRESENCE_FLAG: Tag = Tag(0x3002, 0x0105);
/// Start Cumulative Meterset (3002,0106) FD 1
#[rustfmt::skip]
pub const START_CUMULATIVE_METERSET: Tag = Tag(0x3002, 0x0106);
/// Stop Cumulative Meterset (3002,0107) FD 1
#[rustfmt::skip]
pub const STOP_CUMULATIVE_METERSET: Tag = Tag(0x3002, 0x0107);
/// RT Acquisition Patient Position Sequence (3002,0108) SQ 1
#[rustfmt::skip]
pub const RT_ACQUISITION_PATIENT_POSITION_SEQUENCE: Tag = Tag(0x3002, 0x0108);
/// RT Image Frame Imaging Device Position Sequence (3002,0109) SQ 1
#[rustfmt::skip]
pub const RT_IMAGE_FRAME_IMAGING_DEVICE_POSITION_SEQUENCE: Tag = Tag(0x3002, 0x0109);
/// RT Image Frame kV Radiation Acquisition Sequence (3002,010A) SQ 1
#[rustfmt::skip]
pub const RT_IMAGE_FRAMEK_V_RADIATION_ACQUISITION_SEQUENCE: Tag = Tag(0x3002, 0x010A);
/// RT Image Frame MV Radiation Acquisition Sequence (3002,010B) SQ 1
#[rustfmt::skip]
pub const RT_IMAGE_FRAME_MV_RADIATION_ACQUISITION_SEQUENCE: Tag = Tag(0x3002, 0x010B);
/// RT Image Frame Radiation Acquisition Sequence (3002,010C) SQ 1
#[rustfmt::skip]
pub const RT_IMAGE_FRAME_RADIATION_ACQUISITION_SEQUENCE: Tag = Tag(0x3002, 0x010C);
/// Imaging Source Position Sequence (3002,010D) SQ 1
#[rustfmt::skip]
pub const IMAGING_SOURCE_POSITION_SEQUENCE: Tag = Tag(0x3002, 0x010D);
/// Image Receptor Position Sequence (3002,010E) SQ 1
#[rustfmt::skip]
pub const IMAGE_RECEPTOR_POSITION_SEQUENCE: Tag = Tag(0x3002, 0x010E);
/// Device Position to Equipment Mapping Matrix (3002,010F) FD 16
#[rustfmt::skip]
pub const DEVICE_POSITION_TO_EQUIPMENT_MAPPING_MATRIX: Tag = Tag(0x3002, 0x010F);
/// Device Position Parameter Sequence (3002,0110) SQ 1
#[rustfmt::skip]
pub const DEVICE_POSITION_PARAMETER_SEQUENCE: Tag = Tag(0x3002, 0x0110);
/// Imaging Source Location Specification Type (3002,0111) CS 1
#[rustfmt::skip]
pub const IMAGING_SOURCE_LOCATION_SPECIFICATION_TYPE: Tag = Tag(0x3002, 0x0111);
/// Imaging Device Location Matrix Sequence (3002,0112) SQ 1
#[rustfmt::skip]
pub const IMAGING_DEVICE_LOCATION_MATRIX_SEQUENCE: Tag = Tag(0x3002, 0x0112);
/// Imaging Device Location Parameter Sequence (3002,0113) SQ 1
#[rustfmt::skip]
pub const IMAGING_DEVICE_LOCATION_PARAMETER_SEQUENCE: Tag = Tag(0x3002, 0x0113);
/// Imaging Aperture Sequence (3002,0114) SQ 1
#[rustfmt::skip]
pub const IMAGING_APERTURE_SEQUENCE: Tag = Tag(0x3002, 0x0114);
/// Imaging Aperture Specification Type (3002,0115) CS 1
#[rustfmt::skip]
pub const IMAGING_APERTURE_SPECIFICATION_TYPE: Tag = Tag(0x3002, 0x0115);
/// Number of Acquisition Devices (3002,0116) US 1
#[rustfmt::skip]
pub const NUMBER_OF_ACQUISITION_DEVICES: Tag = Tag(0x3002, 0x0116);
/// Acquisition Device Sequence (3002,0117) SQ 1
#[rustfmt::skip]
pub const ACQUISITION_DEVICE_SEQUENCE: Tag = Tag(0x3002, 0x0117);
/// Acquisition Task Sequence (3002,0118) SQ 1
#[rustfmt::skip]
pub const ACQUISITION_TASK_SEQUENCE: Tag = Tag(0x3002, 0x0118);
/// Acquisition Task Workitem Code Sequence (3002,0119) SQ 1
#[rustfmt::skip]
pub const ACQUISITION_TASK_WORKITEM_CODE_SEQUENCE: Tag = Tag(0x3002, 0x0119);
/// Acquisition Subtask Sequence (3002,011A) SQ 1
#[rustfmt::skip]
pub const ACQUISITION_SUBTASK_SEQUENCE: Tag = Tag(0x3002, 0x011A);
/// Subtask Workitem Code Sequence (3002,011B) SQ 1
#[rustfmt::skip]
pub const SUBTASK_WORKITEM_CODE_SEQUENCE: Tag = Tag(0x3002, 0x011B);
/// Acquisition Task Index (3002,011C) US 1
#[rustfmt::skip]
pub const ACQUISITION_TASK_INDEX: Tag = Tag(0x3002, 0x011C);
/// Acquisition Subtask Index (3002,011D) US 1
#[rustfmt::skip]
pub const ACQUISITION_SUBTASK_INDEX: Tag = Tag(0x3002, 0x011D);
/// Referenced Baseline Parameters RT Radiation Instance Sequence (3002,011E) SQ 1
#[rustfmt::skip]
pub const REFERENCED_BASELINE_PARAMETERS_RT_RADIATION_INSTANCE_SEQUENCE: Tag = Tag(0x3002, 0x011E);
/// Position Acquisition Template Identification Sequence (3002,011F) SQ 1
#[rustfmt::skip]
pub const POSITION_ACQUISITION_TEMPLATE_IDENTIFICATION_SEQUENCE: Tag = Tag(0x3002, 0x011F);
/// Position Acquisition Template ID (3002,0120) ST 1
#[rustfmt::skip]
pub const POSITION_ACQUISITION_TEMPLATE_ID: Tag = Tag(0x3002, 0x0120);
/// Position Acquisition Template Name (3002,0121) LO 1
#[rustfmt::skip]
pub const POSITION_ACQUISITION_TEMPLATE_NAME: Tag = Tag(0x3002, 0x0121);
/// Position Acquisition Template Code Sequence (3002,0122) SQ 1
#[rustfmt::skip]
pub const POSITION_ACQUISITION_TEMPLATE_CODE_SEQUENCE: Tag = Tag(0x3002, 0x0122);
/// Position Acquisition Template Description (3002,0123) LT 1
#[rustfmt::skip]
pub const POSITION_ACQUISITION_TEMPLATE_DESCRIPTION: Tag = Tag(0x3002, 0x0123);
/// Acquisition Task Applicability Sequence (3002,0124) SQ 1
#[rustfmt::skip]
pub const ACQUISITION_TASK_APPLICABILITY_SEQUENCE: Tag = Tag(0x3002, 0x0124);
/// Projection Imaging Acquisition Parameter Sequence (3002,0125) SQ 1
#[rustfmt::skip]
pub const PROJECTION_IMAGING_ACQUISITION_PARAMETER_SEQUENCE: Tag = Tag(0x3002, 0x0125);
/// CT Imaging Acquisition Parameter Sequence (3002,0126) SQ 1
#[rustfmt::skip]
pub const CT_IMAGING_ACQUISITION_PARAMETER_SEQUENCE: Tag = Tag(0x3002, 0x0126);
/// KV Imaging Generation Parameters Sequence (3002,0127) SQ 1
#[rustfmt::skip]
pub const KV_IMAGING_GENERATION_PARAMETERS_SEQUENCE: Tag = Tag(0x3002, 0x0127);
/// MV Imaging Generation Parameters Sequence (3002,0128) SQ 1
#[rustfmt::skip]
pub const MV_IMAGING_GENERATION_PARAMETERS_SEQUENCE: Tag = Tag(0x3002, 0x0128);
/// Acquisition Signal Type (3002,0129) CS 1
#[rustfmt::skip]
pub const ACQUISITION_SIGNAL_TYPE: Tag = Tag(0x3002, 0x0129);
/// Acquisition Method (3002,012A) CS 1
#[rustfmt::skip]
pub const ACQUISITION_METHOD: Tag = Tag(0x3002, 0x012A);
/// Scan Start Position Sequence (3002,012B) SQ 1
#[rustfmt::skip]
pub const SCAN_START_POSITION_SEQUENCE: Tag = Tag(0x3002, 0x012B);
/// Scan Stop Position Sequence (3002,012C) SQ 1
#[rustfmt::skip]
pub const SCAN_STOP_POSITION_SEQUENCE: Tag = Tag(0x3002, 0x012C);
/// Imaging Source to Beam Modifier Definition Plane Distance (3002,012D) FD 1
#[rustfmt::skip]
pub const IMAGING_SOURCE_TO_BEAM_MODIFIER_DEFINITION_PLANE_DISTANCE: Tag = Tag(0x3002, 0x012D);
/// Scan Arc Type (3002,012E) CS 1
#[rustfmt::skip]
pub const SCAN_ARC_TYPE: Tag = Tag(0x3002, 0x012E);
/// Detector Positioning Type (3002,012F) CS 1
#[rustfmt::skip]
pub const DETECTOR_POSITIONING_TYPE: Tag = Tag(0x3002, 0x012F);
/// Additional RT Accessory Device Sequence (3002,0130) SQ 1
#[rustfmt::skip]
pub const ADDITIONAL_RT_ACCESSORY_DEVICE_SEQUENCE: Tag = Tag(0x3002, 0x0130);
/// Device-Specific Acquisition Parameter Sequence (3002,0131) SQ 1
#[rustfmt::skip]
pub const DEVICE_SPECIFIC_ACQUISITION_PARAMETER_SEQUENCE: Tag = Tag(0x3002, 0x0131);
/// Referenced Position Reference Instance Sequence (3002,0132) SQ 1
#[rustfmt::skip]
pub const REFERENCED_POSITION_REFERENCE_INSTANCE_SEQUENCE: Tag = Tag(0x3002, 0x0132);
/// Energy Derivation Code Sequence (3002,0133) SQ 1
#[rustfmt::skip]
pub const ENERGY_DERIVATION_CODE_SEQUENCE: Tag = Tag(0x3002, 0x0133);
/// Maximum Cumulative Meterset Exposure (3002,0134) FD 1
#[rustfmt::skip]
pub const MAXIMUM_CUMULATIVE_METERSET_EXPOSURE: Tag = Tag(0x3002, 0x0134);
/// Acquisition Initiation Sequence (3002,0135) SQ 1
#[rustfmt::skip]
pub const ACQUISITION_INITIATION_SEQUENCE: Tag = Tag(0x3002, 0x0135);
/// DVH Type (3004,0001) CS 1
#[rustfmt::skip]
pub const DVH_TYPE: Tag = Tag(0x3004, 0x0001);
/// Dose Units (3004,0002) CS 1
#[rustfmt::skip]
pub const DOSE_UNITS: Tag = Tag(0x3004, 0x0002);
/// Dose Type (3004,0004) CS 1
#[rustfmt::skip]
pub const DOSE_TYPE: Tag = Tag(0x3004, 0x0004);
/// Spatial Transform of Dose (3004,0005) CS 1
#[rustfmt::skip]
pub const SPATIAL_TRANSFORM_OF_DOSE: Tag = Tag(0x3004, 0x0005);
/// Dose Comment (3004,0006) LO 1
#[rustfmt::skip]
pub const DOSE_COMMENT: Tag = Tag(0x3004, 0x0006);
/// Normalization Point (3004,0008) DS 3
#[rustfmt::skip]
pub const NORMALIZATION_POINT: Tag = Tag(0x3004, 0x0008);
/// Dose Summation Type (3004,000A) CS 1
#[rustfmt::skip]
pub const DOSE_SUMMATION_TYPE: Tag = Tag(0x3004, 0x000A);
/// Grid Frame Offset Vector (3004,000C) DS 2-n
#[rustfmt::skip]
pub const GRID_FRAME_OFFSET_VECTOR: Tag = Tag(0x3004, 0x000C);
/// Dose Grid Scaling (3004,000E) DS 1
#[rustfmt::skip]
pub const DOSE_GRID_SCALING: Tag = Tag(0x3004, 0x000E);
/// RT Dose ROI Sequence (3004,0010) SQ 1 (retired)
#[rustfmt::skip]
pub const RT_DOSE_ROI_SEQUENCE: Tag = Tag(0x3004, 0x0010);
/// Dose Value (3004,0012) DS 1 (retired)
#[rustfmt::skip]
pub const DOSE_VALUE: Tag = Tag(0x3004, 0x0012);
/// Tissue Heterogeneity Correction (3004,0014) CS 1-3
#[rustfmt::skip]
pub const TISSUE_HETEROGENEITY_CORRECTION: Tag = Tag(0x3004, 0x0014);
/// Recommended Isodose Level Sequence (3004,0016) SQ 1
#[rustfmt::skip]
pub const RECOMMENDED_ISODOSE_LEVEL_SEQUENCE: Tag = Tag(0x3004, 0x0016);
/// DVH Normalization Point (3004,0040) DS 3
#[rustfmt::skip]
pub const DVH_NORMALIZATION_POINT: Tag = Tag(0x3004, 0x0040);
/// DVH Normalization Dose Value (3004,0042) DS 1
#[rustfmt::skip]
pub const DVH_NORMALIZATION_DOSE_VALUE: Tag = Tag(0x3004, 0x0042);
/// DVH Sequence (3004,0050) SQ 1
#[rustfmt::skip]
pub const DVH_SEQUENCE: Tag = Tag(0x3004, 0x0050);
/// DVH Dose Scaling (3004,0052) DS 1
#[rustfmt::skip]
pub const DVH_DOSE_SCALING: Tag = Tag(0x3004, 0x0052);
/// DVH Volume Units (3004,0054) CS 1
#[rustfmt::skip]
pub const DVH_VOLUME_UNITS: Tag = Tag(0x3004, 0x0054);
/// DVH Number of Bins (3004,0056) IS 1
#[rustfmt::skip]
pub const DVH_NUMBER_OF_BINS: Tag = Tag(0x3004, 0x0056);
/// DVH Data (3004,0058) DS 2-2n
#[rustfmt::skip]
pub const DVH_DATA: Tag = Tag(0x3004, 0x0058);
/// DVH Referenced ROI Sequence (3004,0060) SQ 1
#[rustfmt::skip]
pub const DVH_REFERENCED_ROI_SEQUENCE: Tag = Tag(0x3004, 0x0060);
/// DVH ROI Contribution Type (3004,0062) CS 1
#[rustfmt::skip]
pub const DVHROI_CONTRIBUTION_TYPE: Tag = Tag(0x3004, 0x0062);
/// DVH Minimum Dose (3004,0070) DS 1
#[rustfmt::skip]
pub const DVH_MINIMUM_DOSE: Tag = Tag(0x3004, 0x0070);
/// DVH Maximum Dose (3004,0072) DS 1
#[rustfmt::skip]
pub const DVH_MAXIMUM_DOSE: Tag = Tag(0x3004, 0x0072);
/// DVH Mean Dose (3004,0074) DS 1
#[rustfmt::skip]
pub const DVH_MEAN_DOSE: Tag = Tag(0x3004, 0x0074);
/// Structure Set Label (3006,0002) SH 1
#[rustfmt::skip]
pub const STRUCTURE_SET_LABEL: Tag = Tag(0x3006, 0x0002);
/// Structure Set Name (3006,0004) LO 1
#[rustfmt::skip]
pub const STRUCTURE_SET_NAME: Tag = Tag(0x3006, 0x0004);
/// Structure Set Description (3006,0006) ST 1
#[rustfmt::skip]
pub const STRUCTURE_SET_DESCRIPTION: Tag = Tag(0x3006, 0x0006);
/// Structure Set Date (3006,0008) DA 1
#[rustfmt::skip]
pub const STRUCTURE_SET_DATE: Tag = Tag(0x3006, 0x0008);
/// Structure Set Time (3006,0009) TM 1
#[rustfmt::skip]
pub const STRUCTURE_SET_TIME: Tag = Tag(0x3006, 0x0009);
/// Referenced Frame of Reference Sequence (3006,0010) SQ 1
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_SEQUENCE: Tag = Tag(0x3006, 0x0010);
/// RT Referenced Study Sequence (3006,0012) SQ 1
#[rustfmt::skip]
pub const RT_REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x3006, 0x0012);
/// RT Referenced Series Sequence (3006,0014) SQ 1
#[rustfmt::skip]
pub const RT_REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x3006, 0x0014);
/// Contour Image Sequence (3006,0016) SQ 1
#[rustfmt::skip]
pub const CONTOUR_IMAGE_SEQUENCE: Tag = Tag(0x3006, 0x0016);
/// Predecessor Structure Set Sequence (3006,0018) SQ 1
#[rustfmt::skip]
pub const PREDECESSOR_STRUCTURE_SET_SEQUENCE: Tag = Tag(0x3006, 0x0018);
/// Structure Set ROI Sequence (3006,0020) SQ 1
#[rustfmt::skip]
pub const STRUCTURE_SET_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0020);
/// ROI Number (3006,0022) IS 1
#[rustfmt::skip]
pub const ROI_NUMBER: Tag = Tag(0x3006, 0x0022);
/// Referenced Frame of Reference UID (3006,0024) UI 1
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x0024);
/// ROI Name (3006,0026) LO 1
#[rustfmt::skip]
pub const ROI_NAME: Tag = Tag(0x3006, 0x0026);
/// ROI Description (3006,0028) ST 1
#[rustfmt::skip]
pub const ROI_DESCRIPTION: Tag = Tag(0x3006, 0x0028);
/// ROI Display Color (3006,002A) IS 3
#[rustfmt::skip]
pub const ROI_DISPLAY_COLOR: Tag = Tag(0x3006, 0x002A);
/// ROI Volume (3006,002C) DS 1
#[rustfmt::skip]
pub const ROI_VOLUME: Tag = Tag(0x3006, 0x002C);
/// ROI DateTime (3006,002D) DT 1
#[rustfmt::skip]
pub const ROI_DATE_TIME: Tag = Tag(0x3006, 0x002D);
/// ROI Observation DateTime (3006,002E) DT 1
#[rustfmt::skip]
pub const ROI_OBSERVATION_DATE_TIME: Tag = Tag(0x3006, 0x002E);
/// RT Related ROI Sequence (3006,0030) SQ 1
#[rustfmt::skip]
pub const RT_RELATED_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0030);
/// RT ROI Relationship (3006,0033) CS 1
#[rustfmt::skip]
pub const RTROI_RELATIONSHIP: Tag = Tag(0x3006, 0x0033);
/// ROI Generation Algorithm (3006,0036) CS 1
#[rustfmt::skip]
pub const ROI_GENERATION_ALGORITHM: Tag = Tag(0x3006, 0x0036);
/// ROI Derivation Algorithm Identification Sequence (3006,0037) SQ 1
#[rustfmt::skip]
pub const ROI_DERIVATION_ALGORITHM_IDENTIFICATION_SEQUENCE: Tag = Tag(0x3006, 0x0037);
/// ROI Generation Description (3006,0038) LO 1
#[rustfmt::skip]
pub const ROI_GENERATION_DESCRIPTION: Tag = Tag(0x3006, 0x0038);
/// ROI Contour Sequence (3006,0039) SQ 1
#[rustfmt::skip]
pub const ROI_CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0039);
/// Contour Sequence (3006,0040) SQ 1
#[rustfmt::skip]
pub const CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0040);
/// Contour Geometric Type (3006,0042) CS 1
#[rustfmt::skip]
pub const CONTOUR_GEOMETRIC_TYPE: Tag = Tag(0x3006, 0x0042);
/// Contour Slab Thickness (3006,0044) DS 1 (retired)
#[rustfmt::skip]
pub const CONTOUR_SLAB_THICKNESS: Tag = Tag(0x3006, 0x0044);
/// Contour Offset Vector (3006,0045) DS 3 (retired)
#[rustfmt::skip]
pub const CONTOUR_OFFSET_VECTOR: Tag = Tag(0x3006, 0x0045);
/// Number of Contour Points (3006,0046) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_CONTOUR_POINTS: Tag = Tag(0x3006, 0x0046);
/// Contour Number (3006,0048) IS 1
#[rustfmt::skip]
pub const CONTOUR_NUMBER: Tag = Tag(0x3006, 0x0048);
/// Attached Contours (3006,0049) IS 1-n (retired)
#[rustfmt::skip]
pub const ATTACHED_CONTOURS: Tag = Tag(0x3006, 0x0049);
/// Source Pixel Planes Characteristics Sequence (3006,004A) SQ 1
#[rustfmt::skip]
pub const SOURCE_PIXEL_PLANES_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x3006, 0x004A);
/// Source Series Sequence (3006,004B) SQ 1
#[rustfmt::skip]
pub const SOURCE_SERIES_SEQUENCE: Tag = Tag(0x3006, 0x004B);
/// Source Series Information Sequence (3006,004C) SQ 1
#[rustfmt::skip]
pub const SOURCE_SERIES_INFORMATION_SEQUENCE: Tag = Tag(0x3006, 0x004C);
/// ROI Creator Sequence (3006,004D) SQ 1
#[rustfmt::skip]
pub const ROI_CREATOR_SEQUENCE: Tag = Tag(0x3006, 0x004D);
/// ROI Interpreter Sequence (3006,004E) SQ 1
#[rustfmt::skip]
pub const ROI_INTERPRETER_SEQUENCE: Tag = Tag(0x3006, 0x004E);
/// ROI Observation Context Code Sequence (3006,004F) SQ 1
#[rustfmt::skip]
pub const ROI_OBSERVATION_CONTEXT_CODE_SEQUENCE: Tag = Tag(0x3006, 0x004F);
/// Contour Data (3006,0050) DS 3-3n
#[rustfmt::skip]
pub const CONTOUR_DATA: Tag = Tag(0x3006, 0x0050);
/// RT ROI Observations Sequence (3006,0080) SQ 1
#[rustfmt::skip]
pub const RTROI_OBSERVATIONS_SEQUENCE: Tag = Tag(0x3006, 0x0080);
/// Observation Number (3006,0082) IS 1
#[rustfmt::skip]
pub const OBSERVATION_NUMBER: Tag = Tag(0x3006, 0x0082);
/// Referenced ROI Number (3006,0084) IS 1
#[rustfmt::skip]
pub const REFERENCED_ROI_NUMBER: Tag = Tag(0x3006, 0x0084);
/// ROI Observation Label (3006,0085) SH 1 (retired)
#[rustfmt::skip]
pub const ROI_OBSERVATION_LABEL: Tag = Tag(0x3006, 0x0085);
/// RT ROI Identification Code Sequence (3006,0086) SQ 1
#[rustfmt::skip]
pub const RTROI_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x3006, 0x0086);
/// ROI Observation Description (3006,0088) ST 1 (retired)
#[rustfmt::skip]
pub const ROI_OBSERVATION_DESCRIPTION: Tag = Tag(0x3006, 0x0088);
/// Related RT ROI Observations Sequence (3006,00A0) SQ 1
#[rustfmt::skip]
pub const RELATED_RTROI_OBSERVATIONS_SEQUENCE: Tag = Tag(0x3006, 0x00A0);
/// RT ROI Interpreted Type (3006,00A4) CS 1
#[rustfmt::skip]
pub const RTROI_INTERPRETED_TYPE: Tag = Tag(0x3006, 0x00A4);
/// ROI Interpreter (3006,00A6) PN 1
#[rustfmt::skip]
pub const ROI_INTERPRETER: Tag = Tag(0x3006, 0x00A6);
/// ROI Physical Properties Sequence (3006,00B0) SQ 1
#[rustfmt::skip]
pub const ROI_PHYSICAL_PROPERTIES_SEQUENCE: Tag = Tag(0x3006, 0x00B0);
/// ROI Physical Property (3006,00B2) CS 1
#[rustfmt::skip]
pub const ROI_PHYSICAL_PROPERTY: Tag = Tag(0x3006, 0x00B2);
/// ROI Physical Property Value (3006,00B4) DS 1
#[rustfmt::skip]
pub const ROI_PHYSICAL_PROPERTY_VALUE: Tag = Tag(0x3006, 0x00B4);
/// ROI Elemental Composition Sequence (3006,00B6) SQ 1
#[rustfmt::skip]
pub const ROI_ELEMENTAL_COMPOSITION_SEQUENCE: Tag = Tag(0x3006, 0x00B6);
/// ROI Elemental Composition Atomic Number (3006,00B7) US 1
#[rustfmt::skip]
pub const ROI_ELEMENTAL_COMPOSITION_ATOMIC_NUMBER: Tag = Tag(0x3006, 0x00B7);
/// ROI Elemental Composition Atomic Mass Fraction (3006,00B8) FL 1
#[rustfmt::skip]
pub const ROI_ELEMENTAL_COMPOSITION_ATOMIC_MASS_FRACTION: Tag = Tag(0x3006, 0x00B8);
/// Additional RT ROI Identification Code Sequence (3006,00B9) SQ 1 (retired)
#[rustfmt::skip]
pub const ADDITIONAL_RTROI_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x3006, 0x00B9);
/// Frame of Reference Relationship Sequence (3006,00C0) SQ 1 (retired)
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_RELATIONSHIP_SEQUENCE: Tag = Tag(0x3006, 0x00C0);
/// Related Frame of Reference UID (3006,00C2) UI 1 (retired)
#[rustfmt::skip]
pub const RELATED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x00C2);
/// Frame of Reference Transformation Type (3006,00C4) CS 1 (retired)
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_TRANSFORMATION_TYPE: Tag = Tag(0x3006, 0x00C4);
/// Frame of Reference Transformation Matrix (3006,00C6) DS 16
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_TRANSFORMATION_MATRIX: Tag = Tag(0x3006, 0x00C6);
/// Frame of Reference Transformation Comment (3006,00C8) LO 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_TRANSFORMATION_COMMENT: Tag = Tag(0x3006, 0x00C8);
/// Patient Location Coordinates Sequence (3006,00C9) SQ 1
#[rustfmt::skip]
pub const PATIENT_LOCATION_COORDINATES_SEQUENCE: Tag = Tag(0x3006, 0x00C9);
/// Patient Location Coordinates Code Sequence (3006,00CA) SQ 1
#[rustfmt::skip]
pub const PATIENT_LOCATION_COORDINATES_CODE_SEQUENCE: Tag = Tag(0x3006, 0x00CA);
/// Patient Support Position Sequence (3006,00CB) SQ 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_POSITION_SEQUENCE: Tag = Tag(0x3006, 0x00CB);
/// Measured Dose Reference Sequence (3008,0010) SQ 1
#[rustfmt::skip]
pub const MEASURED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x0010);
/// Measured Dose Description (3008,0012) ST 1
#[rustfmt::skip]
pub const MEASURED_DOSE_DESCRIPTION: Tag = Tag(0x3008, 0x0012);
/// Measured Dose Type (3008,0014) CS 1
#[rustfmt::skip]
pub const MEASURED_DOSE_TYPE: Tag = Tag(0x3008, 0x0014);
/// Measured Dose Value (3008,0016) DS 1
#[rustfmt::skip]
pub const MEASURED_DOSE_VALUE: Tag = Tag(0x3008, 0x0016);
/// Treatment Session Beam Sequence (3008,0020) SQ 1
#[rustfmt::skip]
pub const TREATMENT_SESSION_BEAM_SEQUENCE: Tag = Tag(0x3008, 0x0020);
/// Treatment Session Ion Beam Sequence (3008,0021) SQ 1
#[rustfmt::skip]
pub const TREATMENT_SESSION_ION_BEAM_SEQUENCE: Tag = Tag(0x3008, 0x0021);
/// Current Fraction Number (3008,0022) IS 1
#[rustfmt::skip]
pub const CURRENT_FRACTION_NUMBER: Tag = Tag(0x3008, 0x0022);
/// Treatment Control Point Date (3008,0024) DA 1
#[rustfmt::skip]
pub const TREATMENT_CONTROL_POINT_DATE: Tag = Tag(0x3008, 0x0024);
/// Treatment Control Point Time (3008,0025) TM 1
#[rustfmt::skip]
pub const TREATMENT_CONTROL_POINT_TIME: Tag = Tag(0x3008, 0x0025);
/// Treatment Termination Status (3008,002A) CS 1
#[rustfmt::skip]
pub const TREATMENT_TERMINATION_STATUS: Tag = Tag(0x3008, 0x002A);
/// Treatment Termination Code (3008,002B) SH 1 (retired)
#[rustfmt::skip]
pub const TREATMENT_TERMINATION_CODE: Tag = Tag(0x3008, 0x002B);
/// Treatment Verification Status (3008,002C) CS 1
#[rustfmt::skip]
pub const TREATMENT_VERIFICATION_STATUS: Tag = Tag(0x3008, 0x002C);
/// Referenced Treatment Record Sequence (3008,0030) SQ 1
#[rustfmt::skip]
pub const REFERENCED_TREATMENT_RECORD_SEQUENCE: Tag = Tag(0x3008, 0x0030);
/// Specified Primary Meterset (3008,0032) DS 1
#[rustfmt::skip]
pub const SPECIFIED_PRIMARY_METERSET: Tag = Tag(0x3008, 0x0032);
/// Specified Secondary Meterset (3008,0033) DS 1
#[rustfmt::skip]
pub const SPECIFIED_SECONDARY_METERSET: Tag = Tag(0x3008, 0x0033);
/// Delivered Primary Meterset (3008,0036) DS 1
#[rustfmt::skip]
pub const DELIVERED_PRIMARY_METERSET: Tag = Tag(0x3008, 0x0036);
/// Delivered Secondary Meterset (3008,0037) DS 1
#[rustfmt::skip]
pub const DELIVERED_SECONDARY_METERSET: Tag = Tag(0x3008, 0x0037);
/// Specified Treatment Time (3008,003A) DS 1
#[rustfmt::skip]
pub const SPECIFIED_TREATMENT_TIME: Tag = Tag(0x3008, 0x003A);
/// Delivered Treatment Time (3008,003B) DS 1
#[rustfmt::skip]
pub const DELIVERED_TREATMENT_TIME: Tag = Tag(0x3008, 0x003B);
/// Control Point Delivery Sequence (3008,0040) SQ 1
#[rustfmt::skip]
pub const CONTROL_POINT_DELIVERY_SEQUENCE: Tag = Tag(0x3008, 0x0040);
/// Ion Control Point Delivery Sequence (3008,0041) SQ 1
#[rustfmt::skip]
pub const ION_CONTROL_POINT_DELIVERY_SEQUENCE: Tag = Tag(0x3008, 0x0041);
/// Specified Meterset (3008,0042) DS 1
#[rustfmt::skip]
pub const SPECIFIED_METERSET: Tag = Tag(0x3008, 0x0042);
/// Delivered Meterset (3008,0044) DS 1
#[rustfmt::skip]
pub const DELIVERED_METERSET: Tag = Tag(0x3008, 0x0044);
/// Meterset Rate Set (3008,0045) FL 1
#[rustfmt::skip]
pub const METERSET_RATE_SET: Tag = Tag(0x3008, 0x0045);
/// Meterset Rate Delivered (3008,0046) FL 1
#[rustfmt::skip]
pub const METERSET_RATE_DELIVERED: Tag = Tag(0x3008, 0x0046);
/// Scan Spot Metersets Delivered (3008,0047) FL 1-n
#[rustfmt::skip]
pub const SCAN_SPOT_METERSETS_DELIVERED: Tag = Tag(0x3008, 0x0047);
/// Dose Rate Delivered (3008,0048) DS 1
#[rustfmt::skip]
pub const DOSE_RATE_DELIVERED: Tag = Tag(0x3008, 0x0048);
/// Treatment Summary Calculated Dose Reference Sequence (3008,0050) SQ 1
#[rustfmt::skip]
pub const TREATMENT_SUMMARY_CALCULATED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x0050);
/// Cumulative Dose to Dose Reference (3008,0052) DS 1
#[rustfmt::skip]
pub const CUMULATIVE_DOSE_TO_DOSE_REFERENCE: Tag = Tag(0x3008, 0x0052);
/// First Treatment Date (3008,0054) DA 1
#[rustfmt::skip]
pub const FIRST_TREATMENT_DATE: Tag = Tag(0x3008, 0x0054);
/// Most Recent Treatment Date (3008,0056) DA 1
#[rustfmt::skip]
pub const MOST_RECENT_TREATMENT_DATE: Tag = Tag(0x3008, 0x0056);
/// Number of Fractions Delivered (3008,005A) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRACTIONS_DELIVERED: Tag = Tag(0x3008, 0x005A);
/// Override Sequence (3008,0060) SQ 1
#[rustfmt::skip]
pub const OVERRIDE_SEQUENCE: Tag = Tag(0x3008, 0x0060);
/// Parameter Sequence Pointer (3008,0061) AT 1
#[rustfmt::skip]
pub const PARAMETER_SEQUENCE_POINTER: Tag = Tag(0x3008, 0x0061);
/// Override Parameter Pointer (3008,0062) AT 1
#[rustfmt::skip]
pub const OVERRIDE_PARAMETER_POINTER: Tag = Tag(0x3008, 0x0062);
/// Parameter Item Index (3008,0063) IS 1
#[rustfmt::skip]
pub const PARAMETER_ITEM_INDEX: Tag = Tag(0x3008, 0x0063);
/// Measured Dose Reference Number (3008,0064) IS 1
#[rustfmt::skip]
pub const MEASURED_DOSE_REFERENCE_NUMBER: Tag = Tag(0x3008, 0x0064);
/// Parameter Pointer (3008,0065) AT 1
#[rustfmt::skip]
pub const PARAMETER_POINTER: Tag = Tag(0x3008, 0x0065);
/// Override Reason (3008,0066) ST 1
#[rustfmt::skip]
pub const OVERRIDE_REASON: Tag = Tag(0x3008, 0x0066);
/// Parameter Value Number (3008,0067) US 1
#[rustfmt::skip]
pub const PARAMETER_VALUE_NUMBER: Tag = Tag(0x3008, 0x0067);
/// Corrected Parameter Sequence (3008,0068) SQ 1
#[rustfmt::skip]
pub const CORRECTED_PARAMETER_SEQUENCE: Tag = Tag(0x3008, 0x0068);
/// Correction Value (3008,006A) FL 1
#[rustfmt::skip]
pub const CORRECTION_VALUE: Tag = Tag(0x3008, 0x006A);
/// Calculated Dose Reference Sequence (3008,0070) SQ 1
#[rustfmt::skip]
pub const CALCULATED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x0070);
/// Calculated Dose Reference Number (3008,0072) IS 1
#[rustfmt::skip]
pub const CALCULATED_DOSE_REFERENCE_NUMBER: Tag = Tag(0x3008, 0x0072);
/// Calculated Dose Reference Description (3008,0074) ST 1
#[rustfmt::skip]
pub const CALCULATED_DOSE_REFERENCE_DESCRIPTION: Tag = Tag(0x3008, 0x0074);
/// Calculated Dose Reference Dose Value (3008,0076) DS 1
#[rustfmt::skip]
pub const CALCULATED_DOSE_REFERENCE_DOSE_VALUE: Tag = Tag(0x3008, 0x0076);
/// Start Meterset (3008,0078) DS 1
#[rustfmt::skip]
pub const START_METERSET: Tag = Tag(0x3008, 0x0078);
/// End Meterset (3008,007A) DS 1
#[rustfmt::skip]
pub const END_METERSET: Tag = Tag(0x3008, 0x007A);
/// Referenced Measured Dose Reference Sequence (3008,0080) SQ 1
#[rustfmt::skip]
pub const REFERENCED_MEASURED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x0080);
/// Referenced Measured Dose Reference Number (3008,0082) IS 1
#[rustfmt::skip]
pub const REFERENCED_MEASURED_DOSE_REFERENCE_NUMBER: Tag = Tag(0x3008, 0x0082);
/// Referenced Calculated Dose Reference Sequence (3008,0090) SQ 1
#[rustfmt::skip]
pub const REFERENCED_CALCULATED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x0090);
/// Referenced Calculated Dose Reference Number (3008,0092) IS 1
#[rustfmt::skip]
pub const REFERENCED_CALCULATED_DOSE_REFERENCE_NUMBER: Tag = Tag(0x3008, 0x0092);
/// Beam Limiting Device Leaf Pairs Sequence (3008,00A0) SQ 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_LEAF_PAIRS_SEQUENCE: Tag = Tag(0x3008, 0x00A0);
/// Enhanced RT Beam Limiting Device Sequence (3008,00A1) SQ 1
#[rustfmt::skip]
pub const ENHANCED_RT_BEAM_LIMITING_DEVICE_SEQUENCE: Tag = Tag(0x3008, 0x00A1);
/// Enhanced RT Beam Limiting Opening Sequence (3008,00A2) SQ 1
#[rustfmt::skip]
pub const ENHANCED_RT_BEAM_LIMITING_OPENING_SEQUENCE: Tag = Tag(0x3008, 0x00A2);
/// Enhanced RT Beam Limiting Device Definition Flag (3008,00A3) CS 1
#[rustfmt::skip]
pub const ENHANCED_RT_BEAM_LIMITING_DEVICE_DEFINITION_FLAG: Tag = Tag(0x3008, 0x00A3);
/// Parallel RT Beam Delimiter Opening Extents (3008,00A4) FD 2-2n
#[rustfmt::skip]
pub const PARALLEL_RT_BEAM_DELIMITER_OPENING_EXTENTS: Tag = Tag(0x3008, 0x00A4);
/// Recorded Wedge Sequence (3008,00B0) SQ 1
#[rustfmt::skip]
pub const RECORDED_WEDGE_SEQUENCE: Tag = Tag(0x3008, 0x00B0);
/// Recorded Compensator Sequence (3008,00C0) SQ 1
#[rustfmt::skip]
pub const RECORDED_COMPENSATOR_SEQUENCE: Tag = Tag(0x3008, 0x00C0);
/// Recorded Block Sequence (3008,00D0) SQ 1
#[rustfmt::skip]
pub const RECORDED_BLOCK_SEQUENCE: Tag = Tag(0x3008, 0x00D0);
/// Recorded Block Slab Sequence (3008,00D1) SQ 1
#[rustfmt::skip]
pub const RECORDED_BLOCK_SLAB_SEQUENCE: Tag = Tag(0x3008, 0x00D1);
/// Treatment Summary Measured Dose Reference Sequence (3008,00E0) SQ 1
#[rustfmt::skip]
pub const TREATMENT_SUMMARY_MEASURED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x00E0);
/// Recorded Snout Sequence (3008,00F0) SQ 1
#[rustfmt::skip]
pub const RECORDED_SNOUT_SEQUENCE: Tag = Tag(0x3008, 0x00F0);
/// Recorded Range Shifter Sequence (3008,00F2) SQ 1
#[rustfmt::skip]
pub const RECORDED_RANGE_SHIFTER_SEQUENCE: Tag = Tag(0x3008, 0x00F2);
/// Recorded Lateral Spreading Device Sequence (3008,00F4) SQ 1
#[rustfmt::skip]
pub const RECORDED_LATERAL_SPREADING_DEVICE_SEQUENCE: Tag = Tag(0x3008, 0x00F4);
/// Recorded Range Modulator Sequence (3008,00F6) SQ 1
#[rustfmt::skip]
pub const RECORDED_RANGE_MODULATOR_SEQUENCE: Tag = Tag(0x3008, 0x00F6);
/// Recorded Source Sequence (3008,0100) SQ 1
#[rustfmt::skip]
pub const RECORDED_SOURCE_SEQUENCE: Tag = Tag(0x3008, 0x0100);
/// Source Serial Number (3008,0105) LO 1
#[rustfmt::skip]
pub const SOURCE_SERIAL_NUMBER: Tag = Tag(0x3008, 0x0105);
/// Treatment Session Application Setup Sequence (3008,0110) SQ 1
#[rustfmt::skip]
pub const TREATMENT_SESSION_APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x3008, 0x0110);
/// Application Setup Check (3008,0116) CS 1
#[rustfmt::skip]
pub const APPLICATION_SETUP_CHECK: Tag = Tag(0x3008, 0x0116);
/// Recorded Brachy Accessory Device Sequence (3008,0120) SQ 1
#[rustfmt::skip]
pub const RECORDED_BRACHY_ACCESSORY_DEVICE_SEQUENCE: Tag = Tag(0x3008, 0x0120);
/// Referenced Brachy Accessory Device Number (3008,0122) IS 1
#[rustfmt::skip]
pub const REFERENCED_BRACHY_ACCESSORY_DEVICE_NUMBER: Tag = Tag(0x3008, 0x0122);
/// Recorded Channel Sequence (3008,0130) SQ 1
#[rustfmt::skip]
pub const RECORDED_CHANNEL_SEQUENCE: Tag = Tag(0x3008, 0x0130);
/// Specified Channel Total Time (3008,0132) DS 1
#[rustfmt::skip]
pub const SPECIFIED_CHANNEL_TOTAL_TIME: Tag = Tag(0x3008, 0x0132);
/// Delivered Channel Total Time (3008,0134) DS 1
#[rustfmt::skip]
pub const DELIVERED_CHANNEL_TOTAL_TIME: Tag = Tag(0x3008, 0x0134);
/// Specified Number of Pulses (3008,0136) IS 1
#[rustfmt::skip]
pub const SPECIFIED_NUMBER_OF_PULSES: Tag = Tag(0x3008, 0x0136);
/// Delivered Number of Pulses (3008,0138) IS 1
#[rustfmt::skip]
pub const DELIVERED_NUMBER_OF_PULSES: Tag = Tag(0x3008, 0x0138);
/// Specified Pulse Repetition Interval (3008,013A) DS 1
#[rustfmt::skip]
pub const SPECIFIED_PULSE_REPETITION_INTERVAL: Tag = Tag(0x3008, 0x013A);
/// Delivered Pulse Repetition Interval (3008,013C) DS 1
#[rustfmt::skip]
pub const DELIVERED_PULSE_REPETITION_INTERVAL: Tag = Tag(0x3008, 0x013C);
/// Recorded Source Applicator Sequence (3008,0140) SQ 1
#[rustfmt::skip]
pub const RECORDED_SOURCE_APPLICATOR_SEQUENCE: Tag = Tag(0x3008, 0x0140);
/// Referenced Source Applicator Number (3008,0142) IS 1
#[rustfmt::skip]
pub const REFERENCED_SOURCE_APPLICATOR_NUMBER: Tag = Tag(0x3008, 0x0142);
/// Recorded Channel Shield Sequence (3008,0150) SQ 1
#[rustfmt::skip]
pub const RECORDED_CHANNEL_SHIELD_SEQUENCE: Tag = Tag(0x3008, 0x0150);
/// Referenced Channel Shield Number (3008,0152) IS 1
#[rustfmt::skip]
pub const REFERENCED_CHANNEL_SHIELD_NUMBER: Tag = Tag(0x3008, 0x0152);
/// Brachy Control Point Delivered Sequence (3008,0160) SQ 1
#[rustfmt::skip]
pub const BRACHY_CONTROL_POINT_DELIVERED_SEQUENCE: Tag = Tag(0x3008, 0x0160);
/// Safe Position Exit Date (3008,0162) DA 1
#[rustfmt::skip]
pub const SAFE_POSITION_EXIT_DATE: Tag = Tag(0x3008, 0x0162);
/// Safe Position Exit Time (3008,0164) TM 1
#[rustfmt::skip]
pub const SAFE_POSITION_EXIT_TIME: Tag = Tag(0x3008, 0x0164);
/// Safe Position Return Date (3008,0166) DA 1
#[rustfmt::skip]
pub const SAFE_POSITION_RETURN_DATE: Tag = Tag(0x3008, 0x0166);
/// Safe Position Return Time (3008,0168) TM 1
#[rustfmt::skip]
pub const SAFE_POSITION_RETURN_TIME: Tag = Tag(0x3008, 0x0168);
/// Pulse Specific Brachy Control Point Delivered Sequence (3008,0171) SQ 1
#[rustfmt::skip]
pub const PULSE_SPECIFIC_BRACHY_CONTROL_POINT_DELIVERED_SEQUENCE: Tag = Tag(0x3008, 0x0171);
/// Pulse Number (3008,0172) US 1
#[rustfmt::skip]
pub const PULSE_NUMBER: Tag = Tag(0x3008, 0x0172);
/// Brachy Pulse Control Point Delivered Sequence (3008,0173) SQ 1
#[rustfmt::skip]
pub const BRACHY_PULSE_CONTROL_POINT_DELIVERED_SEQUENCE: Tag = Tag(0x3008, 0x0173);
/// Current Treatment Status (3008,0200) CS 1
#[rustfmt::skip]
pub const CURRENT_TREATMENT_STATUS: Tag = Tag(0x3008, 0x0200);
/// Treatment Status Comment (3008,0202) ST 1
#[rustfmt::skip]
pub const TREATMENT_STATUS_COMMENT: Tag = Tag(0x3008, 0x0202);
/// Fraction Group Summary Sequence (3008,0220) SQ 1
#[rustfmt::skip]
pub const FRACTION_GROUP_SUMMARY_SEQUENCE: Tag = Tag(0x3008, 0x0220);
/// Referenced Fraction Number (3008,0223) IS 1
#[rustfmt::skip]
pub const REFERENCED_FRACTION_NUMBER: Tag = Tag(0x3008, 0x0223);
/// Fraction Group Type (3008,0224) CS 1
#[rustfmt::skip]
pub const FRACTION_GROUP_TYPE: Tag = Tag(0x3008, 0x0224);
/// Beam Stopper Position (3008,0230) CS 1
#[rustfmt::skip]
pub const BEAM_STOPPER_POSITION: Tag = Tag(0x3008, 0x0230);
/// Fraction Status Summary Sequence (3008,0240) SQ 1
#[rustfmt::skip]
pub const FRACTION_STATUS_SUMMARY_SEQUENCE: Tag = Tag(0x3008, 0x0240);
/// Treatment Date (3008,0250) DA 1
#[rustfmt::skip]
pub const TREATMENT_DATE: Tag = Tag(0x3008, 0x0250);
/// Treatment Time (3008,0251) TM 1
#[rustfmt::skip]
pub const TREATMENT_TIME: Tag = Tag(0x3008, 0x0251);
/// RT Plan Label (300A,0002) SH 1
#[rustfmt::skip]
pub const RT_PLAN_LABEL: Tag = Tag(0x300A, 0x0002);
/// RT Plan Name (300A,0003) LO 1
#[rustfmt::skip]
pub const RT_PLAN_NAME: Tag = Tag(0x300A, 0x0003);
/// RT Plan Description (300A,0004) ST 1
#[rustfmt::skip]
pub const RT_PLAN_DESCRIPTION: Tag = Tag(0x300A, 0x0004);
/// RT Plan Date (300A,0006) DA 1
#[rustfmt::skip]
pub const RT_PLAN_DATE: Tag = Tag(0x300A, 0x0006);
/// RT Plan Time (300A,0007) TM 1
#[rustfmt::skip]
pub const RT_PLAN_TIME: Tag = Tag(0x300A, 0x0007);
/// Treatment Protocols (300A,0009) LO 1-n
#[rustfmt::skip]
pub const TREATMENT_PROTOCOLS: Tag = Tag(0x300A, 0x0009);
/// Plan Intent (300A,000A) CS 1
#[rustfmt::skip]
pub const PLAN_INTENT: Tag = Tag(0x300A, 0x000A);
/// Treatment Sites (300A,000B) LO 1-n (retired)
#[rustfmt::skip]
pub const TREATMENT_SITES: Tag = Tag(0x300A, 0x000B);
/// RT Plan Geometry (300A,000C) CS 1
#[rustfmt::skip]
pub const RT_PLAN_GEOMETRY: Tag = Tag(0x300A, 0x000C);
/// Prescription Description (300A,000E) ST 1
#[rustfmt::skip]
pub const PRESCRIPTION_DESCRIPTION: Tag = Tag(0x300A, 0x000E);
/// Dose Reference Sequence (300A,0010) SQ 1
#[rustfmt::skip]
pub const DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300A, 0x0010);
/// Dose Reference Number (300A,0012) IS 1
#[rustfmt::skip]
pub const DOSE_REFERENCE_NUMBER: Tag = Tag(0x300A, 0x0012);
/// Dose Reference UID (300A,0013) UI 1
#[rustfmt::skip]
pub const DOSE_REFERENCE_UID: Tag = Tag(0x300A, 0x0013);
/// Dose Reference Structure Type (300A,0014) CS 1
#[rustfmt::skip]
pub const DOSE_REFERENCE_STRUCTURE_TYPE: Tag = Tag(0x300A, 0x0014);
/// Nominal Beam Energy Unit (300A,0015) CS 1
#[rustfmt::skip]
pub const NOMINAL_BEAM_ENERGY_UNIT: Tag = Tag(0x300A, 0x0015);
/// Dose Reference Description (300A,0016) LO 1
#[rustfmt::skip]
pub const DOSE_REFERENCE_DESCRIPTION: Tag = Tag(0x300A, 0x0016);
/// Dose Reference Point Coordinates (300A,0018) DS 3
#[rustfmt::skip]
pub const DOSE_REFERENCE_POINT_COORDINATES: Tag = Tag(0x300A, 0x0018);
/// Nominal Prior Dose (300A,001A) DS 1
#[rustfmt::skip]
pub const NOMINAL_PRIOR_DOSE: Tag = Tag(0x300A, 0x001A);
/// Dose Reference Type (300A,0020) CS 1
#[rustfmt::skip]
pub const DOSE_REFERENCE_TYPE: Tag = Tag(0x300A, 0x0020);
/// Constraint Weight (300A,0021) DS 1
#[rustfmt::skip]
pub const CONSTRAINT_WEIGHT: Tag = Tag(0x300A, 0x0021);
/// Delivery Warning Dose (300A,0022) DS 1
#[rustfmt::skip]
pub const DELIVERY_WARNING_DOSE: Tag = Tag(0x300A, 0x0022);
/// Delivery Maximum Dose (300A,0023) DS 1
#[rustfmt::skip]
pub const DELIVERY_MAXIMUM_DOSE: Tag = Tag(0x300A, 0x0023);
/// Target Minimum Dose (300A,0025) DS 1
#[rustfmt::skip]
pub const TARGET_MINIMUM_DOSE: Tag = Tag(0x300A, 0x0025);
/// Target Prescription Dose (300A,0026) DS 1
#[rustfmt::skip]
pub const TARGET_PRESCRIPTION_DOSE: Tag = Tag(0x300A, 0x0026);
/// Target Maximum Dose (300A,0027) DS 1
#[rustfmt::skip]
pub const TARGET_MAXIMUM_DOSE: Tag = Tag(0x300A, 0x0027);
/// Target Underdose Volume Fraction (300A,0028) DS 1
#[rustfmt::skip]
pub const TARGET_UNDERDOSE_VOLUME_FRACTION: Tag = Tag(0x300A, 0x0028);
/// Organ at Risk Full-volume Dose (300A,002A) DS 1
#[rustfmt::skip]
pub const ORGAN_AT_RISK_FULL_VOLUME_DOSE: Tag = Tag(0x300A, 0x002A);
/// Organ at Risk Limit Dose (300A,002B) DS 1
#[rustfmt::skip]
pub const ORGAN_AT_RISK_LIMIT_DOSE: Tag = Tag(0x300A, 0x002B);
/// Organ at Risk Maximum Dose (300A,002C) DS 1
#[rustfmt::skip]
pub const ORGAN_AT_RISK_MAXIMUM_DOSE: Tag = Tag(0x300A, 0x002C);
/// Organ at Risk Overdose Volume Fraction (300A,002D) DS 1
#[rustfmt::skip]
pub const ORGAN_AT_RISK_OVERDOSE_VOLUME_FRACTION: Tag = Tag(0x300A, 0x002D);
/// Tolerance Table Sequence (300A,0040) SQ 1
#[rustfmt::skip]
pub const TOLERANCE_TABLE_SEQUENCE: Tag = Tag(0x300A, 0x0040);
/// Tolerance Table Number (300A,0042) IS 1
#[rustfmt::skip]
pub const TOLERANCE_TABLE_NUMBER: Tag = Tag(0x300A, 0x0042);
/// Tolerance Table Label (300A,0043) SH 1
#[rustfmt::skip]
pub const TOLERANCE_TABLE_LABEL: Tag = Tag(0x300A, 0x0043);
/// Gantry Angle Tolerance (300A,0044) DS 1
#[rustfmt::skip]
pub const GANTRY_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0044);
/// Beam Limiting Device Angle Tolerance (300A,0046) DS 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0046);
/// Beam Limiting Device Tolerance Sequence (300A,0048) SQ 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_TOLERANCE_SEQUENCE: Tag = Tag(0x300A, 0x0048);
/// Beam Limiting Device Position Tolerance (300A,004A) DS 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x004A);
/// Snout Position Tolerance (300A,004B) FL 1
#[rustfmt::skip]
pub const SNOUT_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x004B);
/// Patient Support Angle Tolerance (300A,004C) DS 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x004C);
/// Table Top Eccentric Angle Tolerance (300A,004E) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_ECCENTRIC_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x004E);
/// Table Top Pitch Angle Tolerance (300A,004F) FL 1
#[rustfmt::skip]
pub const TABLE_TOP_PITCH_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x004F);
/// Table Top Roll Angle Tolerance (300A,0050) FL 1
#[rustfmt::skip]
pub const TABLE_TOP_ROLL_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0050);
/// Table Top Vertical Position Tolerance (300A,0051) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_VERTICAL_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x0051);
/// Table Top Longitudinal Position Tolerance (300A,0052) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_LONGITUDINAL_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x0052);
/// Table Top Lateral Position Tolerance (300A,0053) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_LATERAL_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x0053);
/// RT Plan Relationship (300A,0055) CS 1
#[rustfmt::skip]
pub const RT_PLAN_RELATIONSHIP: Tag = Tag(0x300A, 0x0055);
/// Fraction Group Sequence (300A,0070) SQ 1
#[rustfmt::skip]
pub const FRACTION_GROUP_SEQUENCE: Tag = Tag(0x300A, 0x0070);
/// Fraction Group Number (300A,0071) IS 1
#[rustfmt::skip]
pub const FRACTION_GROUP_NUMBER: Tag = Tag(0x300A, 0x0071);
/// Fraction Group Description (300A,0072) LO 1
#[rustfmt::skip]
pub const FRACTION_GROUP_DESCRIPTION: Tag = Tag(0x300A, 0x0072);
/// Number of Fractions Planned (300A,0078) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRACTIONS_PLANNED: Tag = Tag(0x300A, 0x0078);
/// Number of Fraction Pattern Digits Per Day (300A,0079) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRACTION_PATTERN_DIGITS_PER_DAY: Tag = Tag(0x300A, 0x0079);
/// Repeat Fraction Cycle Length (300A,007A) IS 1
#[rustfmt::skip]
pub const REPEAT_FRACTION_CYCLE_LENGTH: Tag = Tag(0x300A, 0x007A);
/// Fraction Pattern (300A,007B) LT 1
#[rustfmt::skip]
pub const FRACTION_PATTERN: Tag = Tag(0x300A, 0x007B);
/// Number of Beams (300A,0080) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_BEAMS: Tag = Tag(0x300A, 0x0080);
/// Beam Dose Specification Point (300A,0082) DS 3 (retired)
#[rustfmt::skip]
pub const BEAM_DOSE_SPECIFICATION_POINT: Tag = Tag(0x300A, 0x0082);
/// Referenced Dose Reference UID (300A,0083) UI 1
#[rustfmt::skip]
pub const REFERENCED_DOSE_REFERENCE_UID: Tag = Tag(0x300A, 0x0083);
/// Beam Dose (300A,0084) DS 1
#[rustfmt::skip]
pub const BEAM_DOSE: Tag = Tag(0x300A, 0x0084);
/// Beam Meterset (300A,0086) DS 1
#[rustfmt::skip]
pub const BEAM_METERSET: Tag = Tag(0x300A, 0x0086);
/// Beam Dose Point Depth (300A,0088) FL 1 (retired)
#[rustfmt::skip]
pub const BEAM_DOSE_POINT_DEPTH: Tag = Tag(0x300A, 0x0088);
/// Beam Dose Point Equivalent Depth (300A,0089) FL 1 (retired)
#[rustfmt::skip]
pub const BEAM_DOSE_POINT_EQUIVALENT_DEPTH: Tag = Tag(0x300A, 0x0089);
/// Beam Dose Point SSD (300A,008A) FL 1 (retired)
#[rustfmt::skip]
pub const BEAM_DOSE_POINT_SSD: Tag = Tag(0x300A, 0x008A);
/// Beam Dose Meaning (300A,008B) CS 1
#[rustfmt::skip]
pub const BEAM_DOSE_MEANING: Tag = Tag(0x300A, 0x008B);
/// Beam Dose Verification Control Point Sequence (300A,008C) SQ 1
#[rustfmt::skip]
pub const BEAM_DOSE_VERIFICATION_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x008C);
/// Average Beam Dose Point Depth (300A,008D) FL 1 (retired)
#[rustfmt::skip]
pub const AVERAGE_BEAM_DOSE_POINT_DEPTH: Tag = Tag(0x300A, 0x008D);
/// Average Beam Dose Point Equivalent Depth (300A,008E) FL 1 (retired)
#[rustfmt::skip]
pub const AVERAGE_BEAM_DOSE_POINT_EQUIVALENT_DEPTH: Tag = Tag(0x300A, 0x008E);
/// Average Beam Dose Point SSD (300A,008F) FL 1 (retired)
#[rustfmt::skip]
pub const AVERAGE_BEAM_DOSE_POINT_SSD: Tag = Tag(0x300A, 0x008F);
/// Beam Dose Type (300A,0090) CS 1
#[rustfmt::skip]
pub const BEAM_DOSE_TYPE: Tag = Tag(0x300A, 0x0090);
/// Alternate Beam Dose (300A,0091) DS 1
#[rustfmt::skip]
pub const ALTERNATE_BEAM_DOSE: Tag = Tag(0x300A, 0x0091);
/// Alternate Beam Dose Type (300A,0092) CS 1
#[rustfmt::skip]
pub const ALTERNATE_BEAM_DOSE_TYPE: Tag = Tag(0x300A, 0x0092);
/// Depth Value Averaging Flag (300A,0093) CS 1
#[rustfmt::skip]
pub const DEPTH_VALUE_AVERAGING_FLAG: Tag = Tag(0x300A, 0x0093);
/// Beam Dose Point Source to External Contour Distance (300A,0094) DS 1
#[rustfmt::skip]
pub const BEAM_DOSE_POINT_SOURCE_TO_EXTERNAL_CONTOUR_DISTANCE: Tag = Tag(0x300A, 0x0094);
/// Number of Brachy Application Setups (300A,00A0) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_BRACHY_APPLICATION_SETUPS: Tag = Tag(0x300A, 0x00A0);
/// Brachy Application Setup Dose Specification Point (300A,00A2) DS 3
#[rustfmt::skip]
pub const BRACHY_APPLICATION_SETUP_DOSE_SPECIFICATION_POINT: Tag = Tag(0x300A, 0x00A2);
/// Brachy Application Setup Dose (300A,00A4) DS 1
#[rustfmt::skip]
pub const BRACHY_APPLICATION_SETUP_DOSE: Tag = Tag(0x300A, 0x00A4);
/// Beam Sequence (300A,00B0) SQ 1
#[rustfmt::skip]
pub const BEAM_SEQUENCE: Tag = Tag(0x300A, 0x00B0);
/// Treatment Machine Name (300A,00B2) SH 1
#[rustfmt::skip]
pub const TREATMENT_MACHINE_NAME: Tag = Tag(0x300A, 0x00B2);
/// Primary Dosimeter Unit (300A,00B3) CS 1
#[rustfmt::skip]
pub const PRIMARY_DOSIMETER_UNIT: Tag = Tag(0x300A, 0x00B3);
/// Source-Axis Distance (300A,00B4) DS 1
#[rustfmt::skip]
pub const SOURCE_AXIS_DISTANCE: Tag = Tag(0x300A, 0x00B4);
/// Beam Limiting Device Sequence (300A,00B6) SQ 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x00B6);
/// RT Beam Limiting Device Type (300A,00B8) CS 1
#[rustfmt::skip]
pub const RT_BEAM_LIMITING_DEVICE_TYPE: Tag = Tag(0x300A, 0x00B8);
/// Source to Beam Limiting Device Distance (300A,00BA) DS 1
#[rustfmt::skip]
pub const SOURCE_TO_BEAM_LIMITING_DEVICE_DISTANCE: Tag = Tag(0x300A, 0x00BA);
/// Isocenter to Beam Limiting Device Distance (300A,00BB) FL 1
#[rustfmt::skip]
pub const ISOCENTER_TO_BEAM_LIMITING_DEVICE_DISTANCE: Tag = Tag(0x300A, 0x00BB);
/// Number of Leaf/Jaw Pairs (300A,00BC) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_LEAF_JAW_PAIRS: Tag = Tag(0x300A, 0x00BC);
/// Leaf Position Boundaries (300A,00BE) DS 3-n
#[rustfmt::skip]
pub const LEAF_POSITION_BOUNDARIES: Tag = Tag(0x300A, 0x00BE);
/// Beam Number (300A,00C0) IS 1
#[rustfmt::skip]
pub const BEAM_NUMBER: Tag = Tag(0x300A, 0x00C0);
/// Beam Name (300A,00C2) LO 1
#[rustfmt::skip]
pub const BEAM_NAME: Tag = Tag(0x300A, 0x00C2);
/// Beam Description (300A,00C3) ST 1
#[rustfmt::skip]
pub const BEAM_DESCRIPTION: Tag = Tag(0x300A, 0x00C3);
/// Beam Type (300A,00C4) CS 1
#[rustfmt::skip]
pub const BEAM_TYPE: Tag = Tag(0x300A, 0x00C4);
/// Beam Delivery Duration Limit (300A,00C5) FD 1
#[rustfmt::skip]
pub const BEAM_DELIVERY_DURATION_LIMIT: Tag = Tag(0x300A, 0x00C5);
/// Radiation Type (300A,00C6) CS 1
#[rustfmt::skip]
pub const RADIATION_TYPE: Tag = Tag(0x300A, 0x00C6);
/// High-Dose Technique Type (300A,00C7) CS 1
#[rustfmt::skip]
pub const HIGH_DOSE_TECHNIQUE_TYPE: Tag = Tag(0x300A, 0x00C7);
/// Reference Image Number (300A,00C8) IS 1
#[rustfmt::skip]
pub const REFERENCE_IMAGE_NUMBER: Tag = Tag(0x300A, 0x00C8);
/// Planned Verification Image Sequence (300A,00CA) SQ 1
#[rustfmt::skip]
pub const PLANNED_VERIFICATION_IMAGE_SEQUENCE: Tag = Tag(0x300A, 0x00CA);
/// Imaging Device-Specific Acquisition Parameters (300A,00CC) LO 1-n
#[rustfmt::skip]
pub const IMAGING_DEVICE_SPECIFIC_ACQUISITION_PARAMETERS: Tag = Tag(0x300A, 0x00CC);
/// Treatment Delivery Type (300A,00CE) CS 1
#[rustfmt::skip]
pub const TREATMENT_DELIVERY_TYPE: Tag = Tag(0x300A, 0x00CE);
/// Number of Wedges (300A,00D0) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_WEDGES: Tag = Tag(0x300A, 0x00D0);
/// Wedge Sequence (300A,00D1) SQ 1
#[rustfmt::skip]
pub const WEDGE_SEQUENCE: Tag = Tag(0x300A, 0x00D1);
/// Wedge Number (300A,00D2) IS 1
#[rustfmt::skip]
pub const WEDGE_NUMBER: Tag = Tag(0x300A, 0x00D2);
/// Wedge Type (300A,00D3) CS 1
#[rustfmt::skip]
pub const WEDGE_TYPE: Tag = Tag(0x300A, 0x00D3);
/// Wedge ID (300A,00D4) SH 1
#[rustfmt::skip]
pub const WEDGE_ID: Tag = Tag(0x300A, 0x00D4);
/// Wedge Angle (300A,00D5) IS 1
#[rustfmt::skip]
pub const WEDGE_ANGLE: Tag = Tag(0x300A, 0x00D5);
/// Wedge Factor (300A,00D6) DS 1
#[rustfmt::skip]
pub const WEDGE_FACTOR: Tag = Tag(0x300A, 0x00D6);
/// Total Wedge Tray Water-Equivalent Thickness (300A,00D7) FL 1
#[rustfmt::skip]
pub const TOTAL_WEDGE_TRAY_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x00D7);
/// Wedge Orientation (300A,00D8) DS 1
#[rustfmt::skip]
pub const WEDGE_ORIENTATION: Tag = Tag(0x300A, 0x00D8);
/// Isocenter to Wedge Tray Distance (300A,00D9) FL 1
#[rustfmt::skip]
pub const ISOCENTER_TO_WEDGE_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00D9);
/// Source to Wedge Tray Distance (300A,00DA) DS 1
#[rustfmt::skip]
pub const SOURCE_TO_WEDGE_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00DA);
/// Wedge Thin Edge Position (300A,00DB) FL 1
#[rustfmt::skip]
pub const WEDGE_THIN_EDGE_POSITION: Tag = Tag(0x300A, 0x00DB);
/// Bolus ID (300A,00DC) SH 1
#[rustfmt::skip]
pub const BOLUS_ID: Tag = Tag(0x300A, 0x00DC);
/// Bolus Description (300A,00DD) ST 1
#[rustfmt::skip]
pub const BOLUS_DESCRIPTION: Tag = Tag(0x300A, 0x00DD);
/// Effective Wedge Angle (300A,00DE) DS 1
#[rustfmt::skip]
pub const EFFECTIVE_WEDGE_ANGLE: Tag = Tag(0x300A, 0x00DE);
/// Number of Compensators (300A,00E0) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_COMPENSATORS: Tag = Tag(0x300A, 0x00E0);
/// Material ID (300A,00E1) SH 1
#[rustfmt::skip]
pub const MATERIAL_ID: Tag = Tag(0x300A, 0x00E1);
/// Total Compensator Tray Factor (300A,00E2) DS 1
#[rustfmt::skip]
pub const TOTAL_COMPENSATOR_TRAY_FACTOR: Tag = Tag(0x300A, 0x00E2);
/// Compensator Sequence (300A,00E3) SQ 1
#[rustfmt::skip]
pub const COMPENSATOR_SEQUENCE: Tag = Tag(0x300A, 0x00E3);
/// Compensator Number (300A,00E4) IS 1
#[rustfmt::skip]
pub const COMPENSATOR_NUMBER: Tag = Tag(0x300A, 0x00E4);
/// Compensator ID (300A,00E5) SH 1
#[rustfmt::skip]
pub const COMPENSATOR_ID: Tag = Tag(0x300A, 0x00E5);
/// Source to Compensator Tray Distance (300A,00E6) DS 1
#[rustfmt::skip]
pub const SOURCE_TO_COMPENSATOR_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00E6);
/// Compensator Rows (300A,00E7) IS 1
#[rustfmt::skip]
pub const COMPENSATOR_ROWS: Tag = Tag(0x300A, 0x00E7);
/// Compensator Columns (300A,00E8) IS 1
#[rustfmt::skip]
pub const COMPENSATOR_COLUMNS: Tag = Tag(0x300A, 0x00E8);
/// Compensator Pixel Spacing (300A,00E9) DS 2
#[rustfmt::skip]
pub const COMPENSATOR_PIXEL_SPACING: Tag = Tag(0x300A, 0x00E9);
/// Compensator Position (300A,00EA) DS 2
#[rustfmt::skip]
pub const COMPENSATOR_POSITION: Tag = Tag(0x300A, 0x00EA);
/// Compensator Transmission Data (300A,00EB) DS 1-n
#[rustfmt::skip]
pub const COMPENSATOR_TRANSMISSION_DATA: Tag = Tag(0x300A, 0x00EB);
/// Compensator Thickness Data (300A,00EC) DS 1-n
#[rustfmt::skip]
pub const COMPENSATOR_THICKNESS_DATA: Tag = Tag(0x300A, 0x00EC);
/// Number of Boli (300A,00ED) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_BOLI: Tag = Tag(0x300A, 0x00ED);
/// Compensator Type (300A,00EE) CS 1
#[rustfmt::skip]
pub const COMPENSATOR_TYPE: Tag = Tag(0x300A, 0x00EE);
/// Compensator Tray ID (300A,00EF) SH 1
#[rustfmt::skip]
pub const COMPENSATOR_TRAY_ID: Tag = Tag(0x300A, 0x00EF);
/// Number of Blocks (300A,00F0) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_BLOCKS: Tag = Tag(0x300A, 0x00F0);
/// Total Block Tray Factor (300A,00F2) DS 1
#[rustfmt::skip]
pub const TOTAL_BLOCK_TRAY_FACTOR: Tag = Tag(0x300A, 0x00F2);
/// Total Block Tray Water-Equivalent Thickness (300A,00F3) FL 1
#[rustfmt::skip]
pub const TOTAL_BLOCK_TRAY_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x00F3);
/// Block Sequence (300A,00F4) SQ 1
#[rustfmt::skip]
pub const BLOCK_SEQUENCE: Tag = Tag(0x300A, 0x00F4);
/// Block Tray ID (300A,00F5) SH 1
#[rustfmt::skip]
pub const BLOCK_TRAY_ID: Tag = Tag(0x300A, 0x00F5);
/// Source to Block Tray Distance (300A,00F6) DS 1
#[rustfmt::skip]
pub const SOURCE_TO_BLOCK_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00F6);
/// Isocenter to Block Tray Distance (300A,00F7) FL 1
#[rustfmt::skip]
pub const ISOCENTER_TO_BLOCK_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00F7);
/// Block Type (300A,00F8) CS 1
#[rustfmt::skip]
pub const BLOCK_TYPE: Tag = Tag(0x300A, 0x00F8);
/// Accessory Code (300A,00F9) LO 1
#[rustfmt::skip]
pub const ACCESSORY_CODE: Tag = Tag(0x300A, 0x00F9);
/// Block Divergence (300A,00FA) CS 1
#[rustfmt::skip]
pub const BLOCK_DIVERGENCE: Tag = Tag(0x300A, 0x00FA);
/// Block Mounting Position (300A,00FB) CS 1
#[rustfmt::skip]
pub const BLOCK_MOUNTING_POSITION: Tag = Tag(0x300A, 0x00FB);
/// Block Number (300A,00FC) IS 1
#[rustfmt::skip]
pub const BLOCK_NUMBER: Tag = Tag(0x300A, 0x00FC);
/// Block Name (300A,00FE) LO 1
#[rustfmt::skip]
pub const BLOCK_NAME: Tag = Tag(0x300A, 0x00FE);
/// Block Thickness (300A,0100) DS 1
#[rustfmt::skip]
pub const BLOCK_THICKNESS: Tag = Tag(0x300A, 0x0100);
/// Block Transmission (300A,0102) DS 1
#[rustfmt::skip]
pub const BLOCK_TRANSMISSION: Tag = Tag(0x300A, 0x0102);
/// Block Number of Points (300A,0104) IS 1
#[rustfmt::skip]
pub const BLOCK_NUMBER_OF_POINTS: Tag = Tag(0x300A, 0x0104);
/// Block Data (300A,0106) DS 2-2n
#[rustfmt::skip]
pub const BLOCK_DATA: Tag = Tag(0x300A, 0x0106);
/// Applicator Sequence (300A,0107) SQ 1
#[rustfmt::skip]
pub const APPLICATOR_SEQUENCE: Tag = Tag(0x300A, 0x0107);
/// Applicator ID (300A,0108) SH 1
#[rustfmt::skip]
pub const APPLICATOR_ID: Tag = Tag(0x300A, 0x0108);
/// Applicator Type (300A,0109) CS 1
#[rustfmt::skip]
pub const APPLICATOR_TYPE: Tag = Tag(0x300A, 0x0109);
/// Applicator Description (300A,010A) LO 1
#[rustfmt::skip]
pub const APPLICATOR_DESCRIPTION: Tag = Tag(0x300A, 0x010A);
/// Cumulative Dose Reference Coefficient (300A,010C) DS 1
#[rustfmt::skip]
pub const CUMULATIVE_DOSE_REFERENCE_COEFFICIENT: Tag = Tag(0x300A, 0x010C);
/// Final Cumulative Meterset Weight (300A,010E) DS 1
#[rustfmt::skip]
pub const FINAL_CUMULATIVE_METERSET_WEIGHT: Tag = Tag(0x300A, 0x010E);
/// Number of Control Points (300A,0110) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_CONTROL_POINTS: Tag = Tag(0x300A, 0x0110);
/// Control Point Sequence (300A,0111) SQ 1
#[rustfmt::skip]
pub const CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x0111);
/// Control Point Index (300A,0112) IS 1
#[rustfmt::skip]
pub const CONTROL_POINT_INDEX: Tag = Tag(0x300A, 0x0112);
/// Nominal Beam Energy (300A,0114) DS 1
#[rustfmt::skip]
pub const NOMINAL_BEAM_ENERGY: Tag = Tag(0x300A, 0x0114);
/// Dose Rate Set (300A,0115) DS 1
#[rustfmt::skip]
pub const DOSE_RATE_SET: Tag = Tag(0x300A, 0x0115);
/// Wedge Position Sequence (300A,0116) SQ 1
#[rustfmt::skip]
pub const WEDGE_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x0116);
/// Wedge Position (300A,0118) CS 1
#[rustfmt::skip]
pub const WEDGE_POSITION: Tag = Tag(0x300A, 0x0118);
/// Beam Limiting Device Position Sequence (300A,011A) SQ 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x011A);
/// Leaf/Jaw Positions (300A,011C) DS 2-2n
#[rustfmt::skip]
pub const LEAF_JAW_POSITIONS: Tag = Tag(0x300A, 0x011C);
/// Gantry Angle (300A,011E) DS 1
#[rustfmt::skip]
pub const GANTRY_ANGLE: Tag = Tag(0x300A, 0x011E);
/// Gantry Rotation Direction (300A,011F) CS 1
#[rustfmt::skip]
pub const GANTRY_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x011F);
/// Beam Limiting Device Angle (300A,0120) DS 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_ANGLE: Tag = Tag(0x300A, 0x0120);
/// Beam Limiting Device Rotation Direction (300A,0121) CS 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0121);
/// Patient Support Angle (300A,0122) DS 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_ANGLE: Tag = Tag(0x300A, 0x0122);
/// Patient Support Rotation Direction (300A,0123) CS 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0123);
/// Table Top Eccentric Axis Distance (300A,0124) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_ECCENTRIC_AXIS_DISTANCE: Tag = Tag(0x300A, 0x0124);
/// Table Top Eccentric Angle (300A,0125) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_ECCENTRIC_ANGLE: Tag = Tag(0x300A, 0x0125);
/// Table Top Eccentric Rotation Direction (300A,0126) CS 1
#[rustfmt::skip]
pub const TABLE_TOP_ECCENTRIC_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0126);
/// Table Top Vertical Position (300A,0128) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_VERTICAL_POSITION: Tag = Tag(0x300A, 0x0128);
/// Table Top Longitudinal Position (300A,0129) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_LONGITUDINAL_POSITION: Tag = Tag(0x300A, 0x0129);
/// Table Top Lateral Position (300A,012A) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_LATERAL_POSITION: Tag = Tag(0x300A, 0x012A);
/// Isocenter Position (300A,012C) DS 3
#[rustfmt::skip]
pub const ISOCENTER_POSITION: Tag = Tag(0x300A, 0x012C);
/// Surface Entry Point (300A,012E) DS 3
#[rustfmt::skip]
pub const SURFACE_ENTRY_POINT: Tag = Tag(0x300A, 0x012E);
/// Source to Surface Distance (300A,0130) DS 1
#[rustfmt::skip]
pub const SOURCE_TO_SURFACE_DISTANCE: Tag = Tag(0x300A, 0x0130);
/// Source to Exterior Contour Distance (300A,0131) FL 1
#[rustfmt::skip]
pub const SOURCE_TO_EXTERIOR_CONTOUR_DISTANCE: Tag = Tag(0x300A, 0x0131);
/// External Contour Entry Point (300A,0132) FL 3
#[rustfmt::skip]
pub const EXTERNAL_CONTOUR_ENTRY_POINT: Tag = Tag(0x300A, 0x0132);
/// Cumulative Meterset Weight (300A,0134) DS 1
#[rustfmt::skip]
pub const CUMULATIVE_METERSET_WEIGHT: Tag = Tag(0x300A, 0x0134);
/// Table Top Pitch Angle (300A,0140) FL 1
#[rustfmt::skip]
pub const TABLE_TOP_PITCH_ANGLE: Tag = Tag(0x300A, 0x0140);
/// Table Top Pitch Rotation Direction (300A,0142) CS 1
#[rustfmt::skip]
pub const TABLE_TOP_PITCH_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0142);
/// Table Top Roll Angle (300A,0144) FL 1
#[rustfmt::skip]
pub const TABLE_TOP_ROLL_ANGLE: Tag = Tag(0x300A, 0x0144);
/// Table Top Roll Rotation Direction (300A,0146) CS 1
#[rustfmt::skip]
pub const TABLE_TOP_ROLL_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0146);
/// Head Fixation Angle (300A,0148) FL 1
#[rustfmt::skip]
pub const HEAD_FIXATION_ANGLE: Tag = Tag(0x300A, 0x0148);
/// Gantry Pitch Angle (300A,014A) FL 1
#[rustfmt::skip]
pub const GANTRY_PITCH_ANGLE: Tag = Tag(0x300A, 0x014A);
/// Gantry Pitch Rotation Direction (300A,014C) CS 1
#[rustfmt::skip]
pub const GANTRY_PITCH_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x014C);
/// Gantry Pitch Angle Tolerance (300A,014E) FL 1
#[rustfmt::skip]
pub const GANTRY_PITCH_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x014E);
/// Fixation Eye (300A,0150) CS 1
#[rustfmt::skip]
pub const FIXATION_EYE: Tag = Tag(0x300A, 0x0150);
/// Chair Head Frame Position (300A,0151) DS 1
#[rustfmt::skip]
pub const CHAIR_HEAD_FRAME_POSITION: Tag = Tag(0x300A, 0x0151);
/// Head Fixation Angle Tolerance (300A,0152) DS 1
#[rustfmt::skip]
pub const HEAD_FIXATION_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0152);
/// Chair Head Frame Position Tolerance (300A,0153) DS 1
#[rustfmt::skip]
pub const CHAIR_HEAD_FRAME_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x0153);
/// Fixation Light Azimuthal Angle Tolerance (300A,0154) DS 1
#[rustfmt::skip]
pub const FIXATION_LIGHT_AZIMUTHAL_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0154);
/// Fixation Light Polar Angle Tolerance (300A,0155) DS 1
#[rustfmt::skip]
pub const FIXATION_LIGHT_POLAR_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0155);
/// Patient Setup Sequence (300A,0180) SQ 1
#[rustfmt::skip]
pub const PATIENT_SETUP_SEQUENCE: Tag = Tag(0x300A, 0x0180);
/// Patient Setup Number (300A,0182) IS 1
#[rustfmt::skip]
pub const PATIENT_SETUP_NUMBER: Tag = Tag(0x300A, 0x0182);
/// Patient Setup Label (300A,0183) LO 1
#[rustfmt::skip]
pub const PATIENT_SETUP_LABEL: Tag = Tag(0x300A, 0x0183);
/// Patient Additional Position (300A,0184) LO 1
#[rustfmt::skip]
pub const PATIENT_ADDITIONAL_POSITION: Tag = Tag(0x300A, 0x0184);
/// Fixation Device Sequence (300A,0190) SQ 1
#[rustfmt::skip]
pub const FIXATION_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x0190);
/// Fixation Device Type (300A,0192) CS 1
#[rustfmt::skip]
pub const FIXATION_DEVICE_TYPE: Tag = Tag(0x300A, 0x0192);
/// Fixation Device Label (300A,0194) SH 1
#[rustfmt::skip]
pub const FIXATION_DEVICE_LABEL: Tag = Tag(0x300A, 0x0194);
/// Fixation Device Description (300A,0196) ST 1
#[rustfmt::skip]
pub const FIXATION_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x0196);
/// Fixation Device Position (300A,0198) SH 1
#[rustfmt::skip]
pub const FIXATION_DEVICE_POSITION: Tag = Tag(0x300A, 0x0198);
/// Fixation Device Pitch Angle (300A,0199) FL 1
#[rustfmt::skip]
pub const FIXATION_DEVICE_PITCH_ANGLE: Tag = Tag(0x300A, 0x0199);
/// Fixation Device Roll Angle (300A,019A) FL 1
#[rustfmt::skip]
pub const FIXATION_DEVICE_ROLL_ANGLE: Tag = Tag(0x300A, 0x019A);
/// Shielding Device Sequence (300A,01A0) SQ 1
#[rustfmt::skip]
pub const SHIELDING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x01A0);
/// Shielding Device Type (300A,01A2) CS 1
#[rustfmt::skip]
pub const SHIELDING_DEVICE_TYPE: Tag = Tag(0x300A, 0x01A2);
/// Shielding Device Label (300A,01A4) SH 1
#[rustfmt::skip]
pub const SHIELDING_DEVICE_LABEL: Tag = Tag(0x300A, 0x01A4);
/// Shielding Device Description (300A,01A6) ST 1
#[rustfmt::skip]
pub const SHIELDING_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x01A6);
/// Shielding Device Position (300A,01A8) SH 1
#[rustfmt::skip]
pub const SHIELDING_DEVICE_POSITION: Tag = Tag(0x300A, 0x01A8);
/// Setup Technique (300A,01B0) CS 1
#[rustfmt::skip]
pub const SETUP_TECHNIQUE: Tag = Tag(0x300A, 0x01B0);
/// Setup Technique Description (300A,01B2) ST 1
#[rustfmt::skip]
pub const SETUP_TECHNIQUE_DESCRIPTION: Tag = Tag(0x300A, 0x01B2);
/// Setup Device Sequence (300A,01B4) SQ 1
#[rustfmt::skip]
pub const SETUP_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x01B4);
/// Setup Device Type (300A,01B6) CS 1
#[rustfmt::skip]
pub const SETUP_DEVICE_TYPE: Tag = Tag(0x300A, 0x01B6);
/// Setup Device Label (300A,01B8) SH 1
#[rustfmt::skip]
pub const SETUP_DEVICE_LABEL: Tag = Tag(0x300A, 0x01B8);
/// Setup Device Description (300A,01BA) ST 1
#[rustfmt::skip]
pub const SETUP_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x01BA);
/// Setup Device Parameter (300A,01BC) DS 1
#[rustfmt::skip]
pub const SETUP_DEVICE_PARAMETER: Tag = Tag(0x300A, 0x01BC);
/// Setup Reference Description (300A,01D0) ST 1
#[rustfmt::skip]
pub const SETUP_REFERENCE_DESCRIPTION: Tag = Tag(0x300A, 0x01D0);
/// Table Top Vertical Setup Displacement (300A,01D2) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_VERTICAL_SETUP_DISPLACEMENT: Tag = Tag(0x300A, 0x01D2);
/// Table Top Longitudinal Setup Displacement (300A,01D4) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_LONGITUDINAL_SETUP_DISPLACEMENT: Tag = Tag(0x300A, 0x01D4);
/// Table Top Lateral Setup Displacement (300A,01D6) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_LATERAL_SETUP_DISPLACEMENT: Tag = Tag(0x300A, 0x01D6);
/// Brachy Treatment Technique (300A,0200) CS 1
#[rustfmt::skip]
pub const BRACHY_TREATMENT_TECHNIQUE: Tag = Tag(0x300A, 0x0200);
/// Brachy Treatment Type (300A,0202) CS 1
#[rustfmt::skip]
pub const BRACHY_TREATMENT_TYPE: Tag = Tag(0x300A, 0x0202);
/// Treatment Machine Sequence (300A,0206) SQ 1
#[rustfmt::skip]
pub const TREATMENT_MACHINE_SEQUENCE: Tag = Tag(0x300A, 0x0206);
/// Source Sequence (300A,0210) SQ 1
#[rustfmt::skip]
pub const SOURCE_SEQUENCE: Tag = Tag(0x300A, 0x0210);
/// Source Number (300A,0212) IS 1
#[rustfmt::skip]
pub const SOURCE_NUMBER: Tag = Tag(0x300A, 0x0212);
/// Source Type (300A,0214) CS 1
#[rustfmt::skip]
pub const SOURCE_TYPE: Tag = Tag(0x300A, 0x0214);
/// Source Manufacturer (300A,0216) LO 1
#[rustfmt::skip]
pub const SOURCE_MANUFACTURER: Tag = Tag(0x300A, 0x0216);
/// Active Source Diameter (300A,0218) DS 1
#[rustfmt::skip]
pub const ACTIVE_SOURCE_DIAMETER: Tag = Tag(0x300A, 0x0218);
/// Active Source Length (300A,021A) DS 1
#[rustfmt::skip]
pub const ACTIVE_SOURCE_LENGTH: Tag = Tag(0x300A, 0x021A);
/// Source Model ID (300A,021B) SH 1
#[rustfmt::skip]
pub const SOURCE_MODEL_ID: Tag = Tag(0x300A, 0x021B);
/// Source Description (300A,021C) LO 1
#[rustfmt::skip]
pub const SOURCE_DESCRIPTION: Tag = Tag(0x300A, 0x021C);
/// Source Encapsulation Nominal Thickness (300A,0222) DS 1
#[rustfmt::skip]
pub const SOURCE_ENCAPSULATION_NOMINAL_THICKNESS: Tag = Tag(0x300A, 0x0222);
/// Source Encapsulation Nominal Transmission (300A,0224) DS 1
#[rustfmt::skip]
pub const SOURCE_ENCAPSULATION_NOMINAL_TRANSMISSION: Tag = Tag(0x300A, 0x0224);
/// Source Isotope Name (300A,0226) LO 1
#[rustfmt::skip]
pub const SOURCE_ISOTOPE_NAME: Tag = Tag(0x300A, 0x0226);
/// Source Isotope Half Life (300A,0228) DS 1
#[rustfmt::skip]
pub const SOURCE_ISOTOPE_HALF_LIFE: Tag = Tag(0x300A, 0x0228);
/// Source Strength Units (300A,0229) CS 1
#[rustfmt::skip]
pub const SOURCE_STRENGTH_UNITS: Tag = Tag(0x300A, 0x0229);
/// Reference Air Kerma Rate (300A,022A) DS 1
#[rustfmt::skip]
pub const REFERENCE_AIR_KERMA_RATE: Tag = Tag(0x300A, 0x022A);
/// Source Strength (300A,022B) DS 1
#[rustfmt::skip]
pub const SOURCE_STRENGTH: Tag = Tag(0x300A, 0x022B);
/// Source Strength Reference Date (300A,022C) DA 1
#[rustfmt::skip]
pub const SOURCE_STRENGTH_REFERENCE_DATE: Tag = Tag(0x300A, 0x022C);
/// Source Strength Reference Time (300A,022E) TM 1
#[rustfmt::skip]
pub const SOURCE_STRENGTH_REFERENCE_TIME: Tag = Tag(0x300A, 0x022E);
/// Application Setup Sequence (300A,0230) SQ 1
#[rustfmt::skip]
pub const APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x300A, 0x0230);
/// Application Setup Type (300A,0232) CS 1
#[rustfmt::skip]
pub const APPLICATION_SETUP_TYPE: Tag = Tag(0x300A, 0x0232);
/// Application Setup Number (300A,0234) IS 1
#[rustfmt::skip]
pub const APPLICATION_SETUP_NUMBER: Tag = Tag(0x300A, 0x0234);
/// Application Setup Name (300A,0236) LO 1
#[rustfmt::skip]
pub const APPLICATION_SETUP_NAME: Tag = Tag(0x300A, 0x0236);
/// Application Setup Manufacturer (300A,0238) LO 1
#[rustfmt::skip]
pub const APPLICATION_SETUP_MANUFACTURER: Tag = Tag(0x300A, 0x0238);
/// Template Number (300A,0240) IS 1
#[rustfmt::skip]
pub const TEMPLATE_NUMBER: Tag = Tag(0x300A, 0x0240);
/// Template Type (300A,0242) SH 1
#[rustfmt::skip]
pub const TEMPLATE_TYPE: Tag = Tag(0x300A, 0x0242);
/// Template Name (300A,0244) LO 1
#[rustfmt::skip]
pub const TEMPLATE_NAME: Tag = Tag(0x300A, 0x0244);
/// Total Reference Air Kerma (300A,0250) DS 1
#[rustfmt::skip]
pub const TOTAL_REFERENCE_AIR_KERMA: Tag = Tag(0x300A, 0x0250);
/// Brachy Accessory Device Sequence (300A,0260) SQ 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x0260);
/// Brachy Accessory Device Number (300A,0262) IS 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_NUMBER: Tag = Tag(0x300A, 0x0262);
/// Brachy Accessory Device ID (300A,0263) SH 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_ID: Tag = Tag(0x300A, 0x0263);
/// Brachy Accessory Device Type (300A,0264) CS 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_TYPE: Tag = Tag(0x300A, 0x0264);
/// Brachy Accessory Device Name (300A,0266) LO 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_NAME: Tag = Tag(0x300A, 0x0266);
/// Brachy Accessory Device Nominal Thickness (300A,026A) DS 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_NOMINAL_THICKNESS: Tag = Tag(0x300A, 0x026A);
/// Brachy Accessory Device Nominal Transmission (300A,026C) DS 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_NOMINAL_TRANSMISSION: Tag = Tag(0x300A, 0x026C);
/// Channel Effective Length (300A,0271) DS 1
#[rustfmt::skip]
pub const CHANNEL_EFFECTIVE_LENGTH: Tag = Tag(0x300A, 0x0271);
/// Channel Inner Length (300A,0272) DS 1
#[rustfmt::skip]
pub const CHANNEL_INNER_LENGTH: Tag = Tag(0x300A, 0x0272);
/// Afterloader Channel ID (300A,0273) SH 1
#[rustfmt::skip]
pub const AFTERLOADER_CHANNEL_ID: Tag = Tag(0x300A, 0x0273);
/// Source Applicator Tip Length (300A,0274) DS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_TIP_LENGTH: Tag = Tag(0x300A, 0x0274);
/// Channel Sequence (300A,0280) SQ 1
#[rustfmt::skip]
pub const CHANNEL_SEQUENCE: Tag = Tag(0x300A, 0x0280);
/// Channel Number (300A,0282) IS 1
#[rustfmt::skip]
pub const CHANNEL_NUMBER: Tag = Tag(0x300A, 0x0282);
/// Channel Length (300A,0284) DS 1
#[rustfmt::skip]
pub const CHANNEL_LENGTH: Tag = Tag(0x300A, 0x0284);
/// Channel Total Time (300A,0286) DS 1
#[rustfmt::skip]
pub const CHANNEL_TOTAL_TIME: Tag = Tag(0x300A, 0x0286);
/// Source Movement Type (300A,0288) CS 1
#[rustfmt::skip]
pub const SOURCE_MOVEMENT_TYPE: Tag = Tag(0x300A, 0x0288);
/// Number of Pulses (300A,028A) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_PULSES: Tag = Tag(0x300A, 0x028A);
/// Pulse Repetition Interval (300A,028C) DS 1
#[rustfmt::skip]
pub const PULSE_REPETITION_INTERVAL: Tag = Tag(0x300A, 0x028C);
/// Source Applicator Number (300A,0290) IS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_NUMBER: Tag = Tag(0x300A, 0x0290);
/// Source Applicator ID (300A,0291) SH 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_ID: Tag = Tag(0x300A, 0x0291);
/// Source Applicator Type (300A,0292) CS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_TYPE: Tag = Tag(0x300A, 0x0292);
/// Source Applicator Name (300A,0294) LO 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_NAME: Tag = Tag(0x300A, 0x0294);
/// Source Applicator Length (300A,0296) DS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_LENGTH: Tag = Tag(0x300A, 0x0296);
/// Source Applicator Manufacturer (300A,0298) LO 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_MANUFACTURER: Tag = Tag(0x300A, 0x0298);
/// Source Applicator Wall Nominal Thickness (300A,029C) DS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_WALL_NOMINAL_THICKNESS: Tag = Tag(0x300A, 0x029C);
/// Source Applicator Wall Nominal Transmission (300A,029E) DS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_WALL_NOMINAL_TRANSMISSION: Tag = Tag(0x300A, 0x029E);
/// Source Applicator Step Size (300A,02A0) DS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_STEP_SIZE: Tag = Tag(0x300A, 0x02A0);
/// Applicator Shape Referenced ROI Number (300A,02A1) IS 1
#[rustfmt::skip]
pub const APPLICATOR_SHAPE_REFERENCED_ROI_NUMBER: Tag = Tag(0x300A, 0x02A1);
/// Transfer Tube Number (300A,02A2) IS 1
#[rustfmt::skip]
pub const TRANSFER_TUBE_NUMBER: Tag = Tag(0x300A, 0x02A2);
/// Transfer Tube Length (300A,02A4) DS 1
#[rustfmt::skip]
pub const TRANSFER_TUBE_LENGTH: Tag = Tag(0x300A, 0x02A4);
/// Channel Shield Sequence (300A,02B0) SQ 1
#[rustfmt::skip]
pub const CHANNEL_SHIELD_SEQUENCE: Tag = Tag(0x300A, 0x02B0);
/// Channel Shield Number (300A,02B2) IS 1
#[rustfmt::skip]
pub const CHANNEL_SHIELD_NUMBER: Tag = Tag(0x300A, 0x02B2);
/// Channel Shield ID (300A,02B3) SH 1
#[rustfmt::skip]
pub const CHANNEL_SHIELD_ID: Tag = Tag(0x300A, 0x02B3);
/// Channel Shield Name (300A,02B4) LO 1
#[rustfmt::skip]
pub const CHANNEL_SHIELD_NAME: Tag = Tag(0x300A, 0x02B4);
/// Channel Shield Nominal Thickness (300A,02B8) DS 1
#[rustfmt::skip]
pub const CHANNEL_SHIELD_NOMINAL_THICKNESS: Tag = Tag(0x300A, 0x02B8);
/// Channel Shield Nominal Transmission (300A,02BA) DS 1
#[rustfmt::skip]
pub const CHANNEL_SHIELD_NOMINAL_TRANSMISSION: Tag = Tag(0x300A, 0x02BA);
/// Final Cumulative Time Weight (300A,02C8) DS 1
#[rustfmt::skip]
pub const FINAL_CUMULATIVE_TIME_WEIGHT: Tag = Tag(0x300A, 0x02C8);
/// Brachy Control Point Sequence (300A,02D0) SQ 1
#[rustfmt::skip]
pub const BRACHY_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x02D0);
/// Control Point Relative Position (300A,02D2) DS 1
#[rustfmt::skip]
pub const CONTROL_POINT_RELATIVE_POSITION: Tag = Tag(0x300A, 0x02D2);
/// Control Point 3D Position (300A,02D4) DS 3
#[rustfmt::skip]
pub const CONTROL_POINT3D_POSITION: Tag = Tag(0x300A, 0x02D4);
/// Cumulative Time Weight (300A,02D6) DS 1
#[rustfmt::skip]
pub const CUMULATIVE_TIME_WEIGHT: Tag = Tag(0x300A, 0x02D6);
/// Compensator Divergence (300A,02E0) CS 1
#[rustfmt::skip]
pub const COMPENSATOR_DIVERGENCE: Tag = Tag(0x300A, 0x02E0);
/// Compensator Mounting Position (300A,02E1) CS 1
#[rustfmt::skip]
pub const COMPENSATOR_MOUNTING_POSITION: Tag = Tag(0x300A, 0x02E1);
/// Source to Compensator Distance (300A,02E2) DS 1-n
#[rustfmt::skip]
pub const SOURCE_TO_COMPENSATOR_DISTANCE: Tag = Tag(0x300A, 0x02E2);
/// Total Compensator Tray Water-Equivalent Thickness (300A,02E3) FL 1
#[rustfmt::skip]
pub const TOTAL_COMPENSATOR_TRAY_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x02E3);
/// Isocenter to Compensator Tray Distance (300A,02E4) FL 1
#[rustfmt::skip]
pub const ISOCENTER_TO_COMPENSATOR_TRAY_DISTANCE: Tag = Tag(0x300A, 0x02E4);
/// Compensator Column Offset (300A,02E5) FL 1
#[rustfmt::skip]
pub const COMPENSATOR_COLUMN_OFFSET: Tag = Tag(0x300A, 0x02E5);
/// Isocenter to Compensator Distances (300A,02E6) FL 1-n
#[rustfmt::skip]
pub const ISOCENTER_TO_COMPENSATOR_DISTANCES: Tag = Tag(0x300A, 0x02E6);
/// Compensator Relative Stopping Power Ratio (300A,02E7) FL 1
#[rustfmt::skip]
pub const COMPENSATOR_RELATIVE_STOPPING_POWER_RATIO: Tag = Tag(0x300A, 0x02E7);
/// Compensator Milling Tool Diameter (300A,02E8) FL 1
#[rustfmt::skip]
pub const COMPENSATOR_MILLING_TOOL_DIAMETER: Tag = Tag(0x300A, 0x02E8);
/// Ion Range Compensator Sequence (300A,02EA) SQ 1
#[rustfmt::skip]
pub const ION_RANGE_COMPENSATOR_SEQUENCE: Tag = Tag(0x300A, 0x02EA);
/// Compensator Description (300A,02EB) LT 1
#[rustfmt::skip]
pub const COMPENSATOR_DESCRIPTION: Tag = Tag(0x300A, 0x02EB);
/// Radiation Mass Number (300A,0302) IS 1
#[rustfmt::skip]
pub const RADIATION_MASS_NUMBER: Tag = Tag(0x300A, 0x0302);
/// Radiation Atomic Number (300A,0304) IS 1
#[rustfmt::skip]
pub const RADIATION_ATOMIC_NUMBER: Tag = Tag(0x300A, 0x0304);
/// Radiation Charge State (300A,0306) SS 1
#[rustfmt::skip]
pub const RADIATION_CHARGE_STATE: Tag = Tag(0x300A, 0x0306);
/// Scan Mode (300A,0308) CS 1
#[rustfmt::skip]
pub const SCAN_MODE: Tag = Tag(0x300A, 0x0308);
/// Modulated Scan Mode Type (300A,0309) CS 1
#[rustfmt::skip]
pub const MODULATED_SCAN_MODE_TYPE: Tag = Tag(0x300A, 0x0309);
/// Virtual Source-Axis Distances (300A,030A) FL 2
#[rustfmt::skip]
pub const VIRTUAL_SOURCE_AXIS_DISTANCES: Tag = Tag(0x300A, 0x030A);
/// Snout Sequence (300A,030C) SQ 1
#[rustfmt::skip]
pub const SNOUT_SEQUENCE: Tag = Tag(0x300A, 0x030C);
/// Snout Position (300A,030D) FL 1
#[rustfmt::skip]
pub const SNOUT_POSITION: Tag = Tag(0x300A, 0x030D);
/// Snout ID (300A,030F) SH 1
#[rustfmt::skip]
pub const SNOUT_ID: Tag = Tag(0x300A, 0x030F);
/// Number of Range Shifters (300A,0312) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_RANGE_SHIFTERS: Tag = Tag(0x300A, 0x0312);
/// Range Shifter Sequence (300A,0314) SQ 1
#[rustfmt::skip]
pub const RANGE_SHIFTER_SEQUENCE: Tag = Tag(0x300A, 0x0314);
/// Range Shifter Number (300A,0316) IS 1
#[rustfmt::skip]
pub const RANGE_SHIFTER_NUMBER: Tag = Tag(0x300A, 0x0316);
/// Range Shifter ID (300A,0318) SH 1
#[rustfmt::skip]
pub const RANGE_SHIFTER_ID: Tag = Tag(0x300A, 0x0318);
/// Range Shifter Type (300A,0320) CS 1
#[rustfmt::skip]
pub const RANGE_SHIFTER_TYPE: Tag = Tag(0x300A, 0x0320);
/// Range Shifter Description (300A,0322) LO 1
#[rustfmt::skip]
pub const RANGE_SHIFTER_DESCRIPTION: Tag = Tag(0x300A, 0x0322);
/// Number of Lateral Spreading Devices (300A,0330) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_LATERAL_SPREADING_DEVICES: Tag = Tag(0x300A, 0x0330);
/// Lateral Spreading Device Sequence (300A,0332) SQ 1
#[rustfmt::skip]
pub const LATERAL_SPREADING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x0332);
/// Lateral Spreading Device Number (300A,0334) IS 1
#[rustfmt::skip]
pub const LATERAL_SPREADING_DEVICE_NUMBER: Tag = Tag(0x300A, 0x0334);
/// Lateral Spreading Device ID (300A,0336) SH 1
#[rustfmt::skip]
pub const LATERAL_SPREADING_DEVICE_ID: Tag = Tag(0x300A, 0x0336);
/// Lateral Spreading Device Type (300A,0338) CS 1
#[rustfmt::skip]
pub const LATERAL_SPREADING_DEVICE_TYPE: Tag = Tag(0x300A, 0x0338);
/// Lateral Spreading Device Description (300A,033A) LO 1
#[rustfmt::skip]
pub const LATERAL_SPREADING_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x033A);
/// Lateral Spreading Device Water Equivalent Thickness (300A,033C) FL 1
#[rustfmt::skip]
pub const LATERAL_SPREADING_DEVICE_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x033C);
/// Number of Range Modulators (300A,0340) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_RANGE_MODULATORS: Tag = Tag(0x300A, 0x0340);
/// Range Modulator Sequence (300A,0342) SQ 1
#[rustfmt::skip]
pub const RANGE_MODULATOR_SEQUENCE: Tag = Tag(0x300A, 0x0342);
/// Range Modulator Number (300A,0344) IS 1
#[rustfmt::skip]
pub const RANGE_MODULATOR_NUMBER: Tag = Tag(0x300A, 0x0344);
/// Range Modulator ID (300A,0346) SH 1
#[rustfmt::skip]
pub const RANGE_MODULATOR_ID: Tag = Tag(0x300A, 0x0346);
/// Range Modulator Type (300A,0348) CS 1
#[rustfmt::skip]
pub const RANGE_MODULATOR_TYPE: Tag = Tag(0x300A, 0x0348);
/// Range Modulator Description (300A,034A) LO 1
#[rustfmt::skip]
pub const RANGE_MODULATOR_DESCRIPTION: Tag = Tag(0x300A, 0x034A);
/// Beam Current Modulation ID (300A,034C) SH 1
#[rustfmt::skip]
pub const BEAM_CURRENT_MODULATION_ID: Tag = Tag(0x300A, 0x034C);
/// Patient Support Type (300A,0350) CS 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_TYPE: Tag = Tag(0x300A, 0x0350);
/// Patient Support ID (300A,0352) SH 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_ID: Tag = Tag(0x300A, 0x0352);
/// Patient Support Accessory Code (300A,0354) LO 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_ACCESSORY_CODE: Tag = Tag(0x300A, 0x0354);
/// Tray Accessory Code (300A,0355) LO 1
#[rustfmt::skip]
pub const TRAY_ACCESSORY_CODE: Tag = Tag(0x300A, 0x0355);
/// Fixation Light Azimuthal Angle (300A,0356) FL 1
#[rustfmt::skip]
pub const FIXATION_LIGHT_AZIMUTHAL_ANGLE: Tag = Tag(0x300A, 0x0356);
/// Fixation Light Polar Angle (300A,0358) FL 1
#[rustfmt::skip]
pub const FIXATION_LIGHT_POLAR_ANGLE: Tag = Tag(0x300A, 0x0358);
/// Meterset Rate (300A,035A) FL 1
#[rustfmt::skip]
pub const METERSET_RATE: Tag = Tag(0x300A, 0x035A);
/// Range Shifter Settings Sequence (300A,0360) SQ 1
#[rustfmt::skip]
pub const RANGE_SHIFTER_SETTINGS_SEQUENCE: Tag = Tag(0x300A, 0x0360);
/// Range Shifter Setting (300A,0362) LO 1
#[rustfmt::skip]
pub const RANGE_SHIFTER_SETTING: Tag = Tag(0x300A, 0x0362);
/// Isocenter to Range Shifter Distance (300A,0364) FL 1
#[rustfmt::skip]
pub const ISOCENTER_TO_RANGE_SHIFTER_DISTANCE: Tag = Tag(0x300A, 0x0364);
/// Range Shifter Water Equivalent Thickness (300A,0366) FL 1
#[rustfmt::skip]
pub const RANGE_SHIFTER_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x0366);
/// Lateral Spreading Device Settings Sequence (300A,0370) SQ 1
#[rustfmt::skip]
pub const LATERAL_SPREADING_DEVICE_SETTINGS_SEQUENCE: Tag = Tag(0x300A, 0x0370);
/// Lateral Spreading Device Setting (300A,0372) LO 1
#[rustfmt::skip]
pub const LATERAL_SPREADING_DEVICE_SETTING: Tag = Tag(0x300A, 0x0372);
/// Isocenter to Lateral Spreading Device Distance (300A,0374) FL 1
#[rustfmt::skip]
pub const ISOCENTER_TO_LATERAL_SPREADING_DEVICE_DISTANCE: Tag = Tag(0x300A, 0x0374);
/// Range Modulator Settings Sequence (300A,0380) SQ 1
#[rustfmt::skip]
pub const RANGE_MODULATOR_SETTINGS_SEQUENCE: Tag = Tag(0x300A, 0x0380);
/// Range Modulator Gating Start Value (300A,0382) FL 1
#[rustfmt::skip]
pub const RANGE_MODULATOR_GATING_START_VALUE: Tag = Tag(0x300A, 0x0382);
/// Range Modulator Gating Stop Value (300A,0384) FL 1
#[rustfmt::skip]
pub const RANGE_MODULATOR_GATING_STOP_VALUE: Tag = Tag(0x300A, 0x0384);
/// Range Modulator Gating Start Water Equivalent Thickness (300A,0386) FL 1
#[rustfmt::skip]
pub const RANGE_MODULATOR_GATING_START_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x0386);
/// Range Modulator Gating Stop Water Equivalent Thickness (300A,0388) FL 1
#[rustfmt::skip]
pub const RANGE_MODULATOR_GATING_STOP_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x0388);
/// Isocenter to Range Modulator Distance (300A,038A) FL 1
#[rustfmt::skip]
pub const ISOCENTER_TO_RANGE_MODULATOR_DISTANCE: Tag = Tag(0x300A, 0x038A);
/// Scan Spot Time Offset (300A,038F) FL 1-n
#[rustfmt::skip]
pub const SCAN_SPOT_TIME_OFFSET: Tag = Tag(0x300A, 0x038F);
/// Scan Spot Tune ID (300A,0390) SH 1
#[rustfmt::skip]
pub const SCAN_SPOT_TUNE_ID: Tag = Tag(0x300A, 0x0390);
/// Scan Spot Prescribed Indices (300A,0391) IS 1-n
#[rustfmt::skip]
pub const SCAN_SPOT_PRESCRIBED_INDICES: Tag = Tag(0x300A, 0x0391);
/// Number of Scan Spot Positions (300A,0392) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_SCAN_SPOT_POSITIONS: Tag = Tag(0x300A, 0x0392);
/// Scan Spot Reordered (300A,0393) CS 1
#[rustfmt::skip]
pub const SCAN_SPOT_REORDERED: Tag = Tag(0x300A, 0x0393);
/// Scan Spot Position Map (300A,0394) FL 1-n
#[rustfmt::skip]
pub const SCAN_SPOT_POSITION_MAP: Tag = Tag(0x300A, 0x0394);
/// Scan Spot Reordering Allowed (300A,0395) CS 1
#[rustfmt::skip]
pub const SCAN_SPOT_REORDERING_ALLOWED: Tag = Tag(0x300A, 0x0395);
/// Scan Spot Meterset Weights (300A,0396) FL 1-n
#[rustfmt::skip]
pub const SCAN_SPOT_METERSET_WEIGHTS: Tag = Tag(0x300A, 0x0396);
/// Scanning Spot Size (300A,0398) FL 2
#[rustfmt::skip]
pub const SCANNING_SPOT_SIZE: Tag = Tag(0x300A, 0x0398);
/// Scan Spot Sizes Delivered (300A,0399) FL 2-2n
#[rustfmt::skip]
pub const SCAN_SPOT_SIZES_DELIVERED: Tag = Tag(0x300A, 0x0399);
/// Number of Paintings (300A,039A) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_PAINTINGS: Tag = Tag(0x300A, 0x039A);
/// Ion Tolerance Table Sequence (300A,03A0) SQ 1
#[rustfmt::skip]
pub const ION_TOLERANCE_TABLE_SEQUENCE: Tag = Tag(0x300A, 0x03A0);
/// Ion Beam Sequence (300A,03A2) SQ 1
#[rustfmt::skip]
pub const ION_BEAM_SEQUENCE: Tag = Tag(0x300A, 0x03A2);
/// Ion Beam Limiting Device Sequence (300A,03A4) SQ 1
#[rustfmt::skip]
pub const ION_BEAM_LIMITING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x03A4);
/// Ion Block Sequence (300A,03A6) SQ 1
#[rustfmt::skip]
pub const ION_BLOCK_SEQUENCE: Tag = Tag(0x300A, 0x03A6);
/// Ion Control Point Sequence (300A,03A8) SQ 1
#[rustfmt::skip]
pub const ION_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x03A8);
/// Ion Wedge Sequence (300A,03AA) SQ 1
#[rustfmt::skip]
pub const ION_WEDGE_SEQUENCE: Tag = Tag(0x300A, 0x03AA);
/// Ion Wedge Position Sequence (300A,03AC) SQ 1
#[rustfmt::skip]
pub const ION_WEDGE_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x03AC);
/// Referenced Setup Image Sequence (300A,0401) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SETUP_IMAGE_SEQUENCE: Tag = Tag(0x300A, 0x0401);
/// Setup Image Comment (300A,0402) ST 1
#[rustfmt::skip]
pub const SETUP_IMAGE_COMMENT: Tag = Tag(0x300A, 0x0402);
/// Motion Synchronization Sequence (300A,0410) SQ 1
#[rustfmt::skip]
pub const MOTION_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x300A, 0x0410);
/// Control Point Orientation (300A,0412) FL 3
#[rustfmt::skip]
pub const CONTROL_POINT_ORIENTATION: Tag = Tag(0x300A, 0x0412);
/// General Accessory Sequence (300A,0420) SQ 1
#[rustfmt::skip]
pub const GENERAL_ACCESSORY_SEQUENCE: Tag = Tag(0x300A, 0x0420);
/// General Accessory ID (300A,0421) SH 1
#[rustfmt::skip]
pub const GENERAL_ACCESSORY_ID: Tag = Tag(0x300A, 0x0421);
/// General Accessory Description (300A,0422) ST 1
#[rustfmt::skip]
pub const GENERAL_ACCESSORY_DESCRIPTION: Tag = Tag(0x300A, 0x0422);
/// General Accessory Type (300A,0423) CS 1
#[rustfmt::skip]
pub const GENERAL_ACCESSORY_TYPE: Tag = Tag(0x300A, 0x0423);
/// General Accessory Number (300A,0424) IS 1
#[rustfmt::skip]
pub const GENERAL_ACCESSORY_NUMBER: Tag = Tag(0x300A, 0x0424);
/// Source to General Accessory Distance (300A,0425) FL 1
#[rustfmt::skip]
pub const SOURCE_TO_GENERAL_ACCESSORY_DISTANCE: Tag = Tag(0x300A, 0x0425);
/// Isocenter to General Accessory Distance (300A,0426) DS 1
#[rustfmt::skip]
pub const ISOCENTER_TO_GENERAL_ACCESSORY_DISTANCE: Tag = Tag(0x300A, 0x0426);
/// Applicator Geometry Sequence (300A,0431) SQ 1
#[rustfmt::skip]
pub const APPLICATOR_GEOMETRY_SEQUENCE: Tag = Tag(0x300A, 0x0431);
/// Applicator Aperture Shape (300A,0432) CS 1
#[rustfmt::skip]
pub const APPLICATOR_APERTURE_SHAPE: Tag = Tag(0x300A, 0x0432);
/// Applicator Opening (300A,0433) FL 1
#[rustfmt::skip]
pub const APPLICATOR_OPENING: Tag = Tag(0x300A, 0x0433);
/// Applicator Opening X (300A,0434) FL 1
#[rustfmt::skip]
pub const APPLICATOR_OPENING_X: Tag = Tag(0x300A, 0x0434);
/// Applicator Opening Y (300A,0435) FL 1
#[rustfmt::skip]
pub const APPLICATOR_OPENING_Y: Tag = Tag(0x300A, 0x0435);
/// Source to Applicator Mounting Position Distance (300A,0436) FL 1
#[rustfmt::skip]
pub const SOURCE_TO_APPLICATOR_MOUNTING_POSITION_DISTANCE: Tag = Tag(0x300A, 0x0436);
/// Number of Block Slab Items (300A,0440) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_BLOCK_SLAB_ITEMS: Tag = Tag(0x300A, 0x0440);
/// Block Slab Sequence (300A,0441) SQ 1
#[rustfmt::skip]
pub const BLOCK_SLAB_SEQUENCE: Tag = Tag(0x300A, 0x0441);
/// Block Slab Thickness (300A,0442) DS 1
#[rustfmt::skip]
pub const BLOCK_SLAB_THICKNESS: Tag = Tag(0x300A, 0x0442);
/// Block Slab Number (300A,0443) US 1
#[rustfmt::skip]
pub const BLOCK_SLAB_NUMBER: Tag = Tag(0x300A, 0x0443);
/// Device Motion Control Sequence (300A,0450) SQ 1
#[rustfmt::skip]
pub const DEVICE_MOTION_CONTROL_SEQUENCE: Tag = Tag(0x300A, 0x0450);
/// Device Motion Execution Mode (300A,0451) CS 1
#[rustfmt::skip]
pub const DEVICE_MOTION_EXECUTION_MODE: Tag = Tag(0x300A, 0x0451);
/// Device Motion Observation Mode (300A,0452) CS 1
#[rustfmt::skip]
pub const DEVICE_MOTION_OBSERVATION_MODE: Tag = Tag(0x300A, 0x0452);
/// Device Motion Parameter Code Sequence (300A,0453) SQ 1
#[rustfmt::skip]
pub const DEVICE_MOTION_PARAMETER_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0453);
/// Distal Depth Fraction (300A,0501) FL 1
#[rustfmt::skip]
pub const DISTAL_DEPTH_FRACTION: Tag = Tag(0x300A, 0x0501);
/// Distal Depth (300A,0502) FL 1
#[rustfmt::skip]
pub const DISTAL_DEPTH: Tag = Tag(0x300A, 0x0502);
/// Nominal Range Modulation Fractions (300A,0503) FL 2
#[rustfmt::skip]
pub const NOMINAL_RANGE_MODULATION_FRACTIONS: Tag = Tag(0x300A, 0x0503);
/// Nominal Range Modulated Region Depths (300A,0504) FL 2
#[rustfmt::skip]
pub const NOMINAL_RANGE_MODULATED_REGION_DEPTHS: Tag = Tag(0x300A, 0x0504);
/// Depth Dose Parameters Sequence (300A,0505) SQ 1
#[rustfmt::skip]
pub const DEPTH_DOSE_PARAMETERS_SEQUENCE: Tag = Tag(0x300A, 0x0505);
/// Delivered Depth Dose Parameters Sequence (300A,0506) SQ 1
#[rustfmt::skip]
pub const DELIVERED_DEPTH_DOSE_PARAMETERS_SEQUENCE: Tag = Tag(0x300A, 0x0506);
/// Delivered Distal Depth Fraction (300A,0507) FL 1
#[rustfmt::skip]
pub const DELIVERED_DISTAL_DEPTH_FRACTION: Tag = Tag(0x300A, 0x0507);
/// Delivered Distal Depth (300A,0508) FL 1
#[rustfmt::skip]
pub const DELIVERED_DISTAL_DEPTH: Tag = Tag(0x300A, 0x0508);
/// Delivered Nominal Range Modulation Fractions (300A,0509) FL 2
#[rustfmt::skip]
pub const DELIVERED_NOMINAL_RANGE_MODULATION_FRACTIONS: Tag = Tag(0x300A, 0x0509);
/// Delivered Nominal Range Modulated Region Depths (300A,0510) FL 2
#[rustfmt::skip]
pub const DELIVERED_NOMINAL_RANGE_MODULATED_REGION_DEPTHS: Tag = Tag(0x300A, 0x0510);
/// Delivered Reference Dose Definition (300A,0511) CS 1
#[rustfmt::skip]
pub const DELIVERED_REFERENCE_DOSE_DEFINITION: Tag = Tag(0x300A, 0x0511);
/// Reference Dose Definition (300A,0512) CS 1
#[rustfmt::skip]
pub const REFERENCE_DOSE_DEFINITION: Tag = Tag(0x300A, 0x0512);
/// RT Control Point Index (300A,0600) US 1
#[rustfmt::skip]
pub const RT_CONTROL_POINT_INDEX: Tag = Tag(0x300A, 0x0600);
/// Radiation Generation Mode Index (300A,0601) US 1
#[rustfmt::skip]
pub const RADIATION_GENERATION_MODE_INDEX: Tag = Tag(0x300A, 0x0601);
/// Referenced Defined Device Index (300A,0602) US 1
#[rustfmt::skip]
pub const REFERENCED_DEFINED_DEVICE_INDEX: Tag = Tag(0x300A, 0x0602);
/// Radiation Dose Identification Index (300A,0603) US 1
#[rustfmt::skip]
pub const RADIATION_DOSE_IDENTIFICATION_INDEX: Tag = Tag(0x300A, 0x0603);
/// Number of RT Control Points (300A,0604) US 1
#[rustfmt::skip]
pub const NUMBER_OF_RT_CONTROL_POINTS: Tag = Tag(0x300A, 0x0604);
/// Referenced Radiation Generation Mode Index (300A,0605) US 1
#[rustfmt::skip]
pub const REFERENCED_RADIATION_GENERATION_MODE_INDEX: Tag = Tag(0x300A, 0x0605);
/// Treatment Position Index (300A,0606) US 1
#[rustfmt::skip]
pub const TREATMENT_POSITION_INDEX: Tag = Tag(0x300A, 0x0606);
/// Referenced Device Index (300A,0607) US 1
#[rustfmt::skip]
pub const REFERENCED_DEVICE_INDEX: Tag = Tag(0x300A, 0x0607);
/// Treatment Position Group Label (300A,0608) LO 1
#[rustfmt::skip]
pub const TREATMENT_POSITION_GROUP_LABEL: Tag = Tag(0x300A, 0x0608);
/// Treatment Position Group UID (300A,0609) UI 1
#[rustfmt::skip]
pub const TREATMENT_POSITION_GROUP_UID: Tag = Tag(0x300A, 0x0609);
/// Treatment Position Group Sequence (300A,060A) SQ 1
#[rustfmt::skip]
pub const TREATMENT_POSITION_GROUP_SEQUENCE: Tag = Tag(0x300A, 0x060A);
/// Referenced Treatment Position Index (300A,060B) US 1
#[rustfmt::skip]
pub const REFERENCED_TREATMENT_POSITION_INDEX: Tag = Tag(0x300A, 0x060B);
/// Referenced Radiation Dose Identification Index (300A,060C) US 1
#[rustfmt::skip]
pub const REFERENCED_RADIATION_DOSE_IDENTIFICATION_INDEX: Tag = Tag(0x300A, 0x060C);
/// RT Accessory Holder Water-Equivalent Thickness (300A,060D) FD 1
#[rustfmt::skip]
pub const RT_ACCESSORY_HOLDER_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x060D);
/// Referenced RT Accessory Holder Device Index (300A,060E) US 1
#[rustfmt::skip]
pub const REFERENCED_RT_ACCESSORY_HOLDER_DEVICE_INDEX: Tag = Tag(0x300A, 0x060E);
/// RT Accessory Holder Slot Existence Flag (300A,060F) CS 1
#[rustfmt::skip]
pub const RT_ACCESSORY_HOLDER_SLOT_EXISTENCE_FLAG: Tag = Tag(0x300A, 0x060F);
/// RT Accessory Holder Slot Sequence (300A,0610) SQ 1
#[rustfmt::skip]
pub const RT_ACCESSORY_HOLDER_SLOT_SEQUENCE: Tag = Tag(0x300A, 0x0610);
/// RT Accessory Holder Slot ID (300A,0611) LO 1
#[rustfmt::skip]
pub const RT_ACCESSORY_HOLDER_SLOT_ID: Tag = Tag(0x300A, 0x0611);
/// RT Accessory Holder Slot Distance (300A,0612) FD 1
#[rustfmt::skip]
pub const RT_ACCESSORY_HOLDER_SLOT_DISTANCE: Tag = Tag(0x300A, 0x0612);
/// RT Accessory Slot Distance (300A,0613) FD 1
#[rustfmt::skip]
pub const RT_ACCESSORY_SLOT_DISTANCE: Tag = Tag(0x300A, 0x0613);
/// RT Accessory Holder Definition Sequence (300A,0614) SQ 1
#[rustfmt::skip]
pub const RT_ACCESSORY_HOLDER_DEFINITION_SEQUENCE: Tag = Tag(0x300A, 0x0614);
/// RT Accessory Device Slot ID (300A,0615) LO 1
#[rustfmt::skip]
pub const RT_ACCESSORY_DEVICE_SLOT_ID: Tag = Tag(0x300A, 0x0615);
/// RT Radiation Sequence (300A,0616) SQ 1
#[rustfmt::skip]
pub const RT_RADIATION_SEQUENCE: Tag = Tag(0x300A, 0x0616);
/// Radiation Dose Sequence (300A,0617) SQ 1
#[rustfmt::skip]
pub const RADIATION_DOSE_SEQUENCE: Tag = Tag(0x300A, 0x0617);
/// Radiation Dose Identification Sequence (300A,0618) SQ 1
#[rustfmt::skip]
pub const RADIATION_DOSE_IDENTIFICATION_SEQUENCE: Tag = Tag(0x300A, 0x0618);
/// Radiation Dose Identification Label (300A,0619) LO 1
#[rustfmt::skip]
pub const RADIATION_DOSE_IDENTIFICATION_LABEL: Tag = Tag(0x300A, 0x0619);
/// Reference Dose Type (300A,061A) CS 1
#[rustfmt::skip]
pub const REFERENCE_DOSE_TYPE: Tag = Tag(0x300A, 0x061A);
/// Primary Dose Value Indicator (300A,061B) CS 1
#[rustfmt::skip]
pub const PRIMARY_DOSE_VALUE_INDICATOR: Tag = Tag(0x300A, 0x061B);
/// Dose Values Sequence (300A,061C) SQ 1
#[rustfmt::skip]
pub const DOSE_VALUES_SEQUENCE: Tag = Tag(0x300A, 0x061C);
/// Dose Value Purpose (300A,061D) CS 1-n
#[rustfmt::skip]
pub const DOSE_VALUE_PURPOSE: Tag = Tag(0x300A, 0x061D);
/// Reference Dose Point Coordinates (300A,061E) FD 3
#[rustfmt::skip]
pub const REFERENCE_DOSE_POINT_COORDINATES: Tag = Tag(0x300A, 0x061E);
/// Radiation Dose Values Parameters Sequence (300A,061F) SQ 1
#[rustfmt::skip]
pub const RADIATION_DOSE_VALUES_PARAMETERS_SEQUENCE: Tag = Tag(0x300A, 0x061F);
/// Meterset to Dose Mapping Sequence (300A,0620) SQ 1
#[rustfmt::skip]
pub const METERSET_TO_DOSE_MAPPING_SEQUENCE: Tag = Tag(0x300A, 0x0620);
/// Expected In-Vivo Measurement Values Sequence (300A,0621) SQ 1
#[rustfmt::skip]
pub const EXPECTED_IN_VIVO_MEASUREMENT_VALUES_SEQUENCE: Tag = Tag(0x300A, 0x0621);
/// Expected In-Vivo Measurement Value Index (300A,0622) US 1
#[rustfmt::skip]
pub const EXPECTED_IN_VIVO_MEASUREMENT_VALUE_INDEX: Tag = Tag(0x300A, 0x0622);
/// Radiation Dose In-Vivo Measurement Label (300A,0623) LO 1
#[rustfmt::skip]
pub const RADIATION_DOSE_IN_VIVO_MEASUREMENT_LABEL: Tag = Tag(0x300A, 0x0623);
/// Radiation Dose Central Axis Displacement (300A,0624) FD 2
#[rustfmt::skip]
pub const RADIATION_DOSE_CENTRAL_AXIS_DISPLACEMENT: Tag = Tag(0x300A, 0x0624);
/// Radiation Dose Value (300A,0625) FD 1
#[rustfmt::skip]
pub const RADIATION_DOSE_VALUE: Tag = Tag(0x300A, 0x0625);
/// Radiation Dose Source to Skin Distance (300A,0626) FD 1
#[rustfmt::skip]
pub const RADIATION_DOSE_SOURCE_TO_SKIN_DISTANCE: Tag = Tag(0x300A, 0x0626);
/// Radiation Dose Measurement Point Coordinates (300A,0627) FD 3
#[rustfmt::skip]
pub const RADIATION_DOSE_MEASUREMENT_POINT_COORDINATES: Tag = Tag(0x300A, 0x0627);
/// Radiation Dose Source to External Contour Distance (300A,0628) FD 1
#[rustfmt::skip]
pub const RADIATION_DOSE_SOURCE_TO_EXTERNAL_CONTOUR_DISTANCE: Tag = Tag(0x300A, 0x0628);
/// RT Tolerance Set Sequence (300A,0629) SQ 1
#[rustfmt::skip]
pub const RT_TOLERANCE_SET_SEQUENCE: Tag = Tag(0x300A, 0x0629);
/// RT Tolerance Set Label (300A,062A) LO 1
#[rustfmt::skip]
pub const RT_TOLERANCE_SET_LABEL: Tag = Tag(0x300A, 0x062A);
/// Attribute Tolerance Values Sequence (300A,062B) SQ 1
#[rustfmt::skip]
pub const ATTRIBUTE_TOLERANCE_VALUES_SEQUENCE: Tag = Tag(0x300A, 0x062B);
/// Tolerance Value (300A,062C) FD 1
#[rustfmt::skip]
pub const TOLERANCE_VALUE: Tag = Tag(0x300A, 0x062C);
/// Patient Support Position Tolerance Sequence (300A,062D) SQ 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_POSITION_TOLERANCE_SEQUENCE: Tag = Tag(0x300A, 0x062D);
/// Treatment Time Limit (300A,062E) FD 1
#[rustfmt::skip]
pub const TREATMENT_TIME_LIMIT: Tag = Tag(0x300A, 0x062E);
/// C-Arm Photon-Electron Control Point Sequence (300A,062F) SQ 1
#[rustfmt::skip]
pub const C_ARM_PHOTON_ELECTRON_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x062F);
/// Referenced RT Radiation Sequence (300A,0630) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RT_RADIATION_SEQUENCE: Tag = Tag(0x300A, 0x0630);
/// Referenced RT Instance Sequence (300A,0631) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RT_INSTANCE_SEQUENCE: Tag = Tag(0x300A, 0x0631);
/// Referenced RT Patient Setup Sequence (300A,0632) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_RT_PATIENT_SETUP_SEQUENCE: Tag = Tag(0x300A, 0x0632);
/// Source to Patient Surface Distance (300A,0634) FD 1
#[rustfmt::skip]
pub const SOURCE_TO_PATIENT_SURFACE_DISTANCE: Tag = Tag(0x300A, 0x0634);
/// Treatment Machine Special Mode Code Sequence (300A,0635) SQ 1
#[rustfmt::skip]
pub const TREATMENT_MACHINE_SPECIAL_MODE_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0635);
/// Intended Number of Fractions (300A,0636) US 1
#[rustfmt::skip]
pub const INTENDED_NUMBER_OF_FRACTIONS: Tag = Tag(0x300A, 0x0636);
/// RT Radiation Set Intent (300A,0637) CS 1
#[rustfmt::skip]
pub const RT_RADIATION_SET_INTENT: Tag = Tag(0x300A, 0x0637);
/// RT Radiation Physical and Geometric Content Detail Flag (300A,0638) CS 1
#[rustfmt::skip]
pub const RT_RADIATION_PHYSICAL_AND_GEOMETRIC_CONTENT_DETAIL_FLAG: Tag = Tag(0x300A, 0x0638);
/// RT Record Flag (300A,0639) CS 1
#[rustfmt::skip]
pub const RT_RECORD_FLAG: Tag = Tag(0x300A, 0x0639);
/// Treatment Device Identification Sequence (300A,063A) SQ 1
#[rustfmt::skip]
pub const TREATMENT_DEVICE_IDENTIFICATION_SEQUENCE: Tag = Tag(0x300A, 0x063A);
/// Referenced RT Physician Intent Sequence (300A,063B) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RT_PHYSICIAN_INTENT_SEQUENCE: Tag = Tag(0x300A, 0x063B);
/// Cumulative Meterset (300A,063C) FD 1
#[rustfmt::skip]
pub const CUMULATIVE_METERSET: Tag = Tag(0x300A, 0x063C);
/// Delivery Rate (300A,063D) FD 1
#[rustfmt::skip]
pub const DELIVERY_RATE: Tag = Tag(0x300A, 0x063D);
/// Delivery Rate Unit Sequence (300A,063E) SQ 1
#[rustfmt::skip]
pub const DELIVERY_RATE_UNIT_SEQUENCE: Tag = Tag(0x300A, 0x063E);
/// Treatment Position Sequence (300A,063F) SQ 1
#[rustfmt::skip]
pub const TREATMENT_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x063F);
/// Radiation Source-Axis Distance (300A,0640) FD 1
#[rustfmt::skip]
pub const RADIATION_SOURCE_AXIS_DISTANCE: Tag = Tag(0x300A, 0x0640);
/// Number of RT Beam Limiting Devices (300A,0641) US 1
#[rustfmt::skip]
pub const NUMBER_OF_RT_BEAM_LIMITING_DEVICES: Tag = Tag(0x300A, 0x0641);
/// RT Beam Limiting Device Proximal Distance (300A,0642) FD 1
#[rustfmt::skip]
pub const RT_BEAM_LIMITING_DEVICE_PROXIMAL_DISTANCE: Tag = Tag(0x300A, 0x0642);
/// RT Beam Limiting Device Distal Distance (300A,0643) FD 1
#[rustfmt::skip]
pub const RT_BEAM_LIMITING_DEVICE_DISTAL_DISTANCE: Tag = Tag(0x300A, 0x0643);
/// Parallel RT Beam Delimiter Device Orientation Label Code Sequence (300A,0644) SQ 1
#[rustfmt::skip]
pub const PARALLEL_RT_BEAM_DELIMITER_DEVICE_ORIENTATION_LABEL_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0644);
/// Beam Modifier Orientation Angle (300A,0645) FD 1
#[rustfmt::skip]
pub const BEAM_MODIFIER_ORIENTATION_ANGLE: Tag = Tag(0x300A, 0x0645);
/// Fixed RT Beam Delimiter Device Sequence (300A,0646) SQ 1
#[rustfmt::skip]
pub const FIXED_RT_BEAM_DELIMITER_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x0646);
/// Parallel RT Beam Delimiter Device Sequence (300A,0647) SQ 1
#[rustfmt::skip]
pub const PARALLEL_RT_BEAM_DELIMITER_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x0647);
/// Number of Parallel RT Beam Delimiters (300A,0648) US 1
#[rustfmt::skip]
pub const NUMBER_OF_PARALLEL_RT_BEAM_DELIMITERS: Tag = Tag(0x300A, 0x0648);
/// Parallel RT Beam Delimiter Boundaries (300A,0649) FD 2-n
#[rustfmt::skip]
pub const PARALLEL_RT_BEAM_DELIMITER_BOUNDARIES: Tag = Tag(0x300A, 0x0649);
/// Parallel RT Beam Delimiter Positions (300A,064A) FD 2-n
#[rustfmt::skip]
pub const PARALLEL_RT_BEAM_DELIMITER_POSITIONS: Tag = Tag(0x300A, 0x064A);
/// RT Beam Limiting Device Offset (300A,064B) FD 2
#[rustfmt::skip]
pub const RT_BEAM_LIMITING_DEVICE_OFFSET: Tag = Tag(0x300A, 0x064B);
/// RT Beam Delimiter Geometry Sequence (300A,064C) SQ 1
#[rustfmt::skip]
pub const RT_BEAM_DELIMITER_GEOMETRY_SEQUENCE: Tag = Tag(0x300A, 0x064C);
/// RT Beam Limiting Device Definition Sequence (300A,064D) SQ 1
#[rustfmt::skip]
pub const RT_BEAM_LIMITING_DEVICE_DEFINITION_SEQUENCE: Tag = Tag(0x300A, 0x064D);
/// Parallel RT Beam Delimiter Opening Mode (300A,064E) CS 1
#[rustfmt::skip]
pub const PARALLEL_RT_BEAM_DELIMITER_OPENING_MODE: Tag = Tag(0x300A, 0x064E);
/// Parallel RT Beam Delimiter Leaf Mounting Side (300A,064F) CS 1-n
#[rustfmt::skip]
pub const PARALLEL_RT_BEAM_DELIMITER_LEAF_MOUNTING_SIDE: Tag = Tag(0x300A, 0x064F);
/// Patient Setup UID (300A,0650) UI 1 (retired)
#[rustfmt::skip]
pub const PATIENT_SETUP_UID: Tag = Tag(0x300A, 0x0650);
/// Wedge Definition Sequence (300A,0651) SQ 1
#[rustfmt::skip]
pub const WEDGE_DEFINITION_SEQUENCE: Tag = Tag(0x300A, 0x0651);
/// Radiation Beam Wedge Angle (300A,0652) FD 1
#[rustfmt::skip]
pub const RADIATION_BEAM_WEDGE_ANGLE: Tag = Tag(0x300A, 0x0652);
/// Radiation Beam Wedge Thin Edge Distance (300A,0653) FD 1
#[rustfmt::skip]
pub const RADIATION_BEAM_WEDGE_THIN_EDGE_DISTANCE: Tag = Tag(0x300A, 0x0653);
/// Radiation Beam Effective Wedge Angle (300A,0654) FD 1
#[rustfmt::skip]
pub const RADIATION_BEAM_EFFECTIVE_WEDGE_ANGLE: Tag = Tag(0x300A, 0x0654);
/// Number of Wedge Positions (300A,0655) US 1
#[rustfmt::skip]
pub const NUMBER_OF_WEDGE_POSITIONS: Tag = Tag(0x300A, 0x0655);
/// RT Beam Limiting Device Opening Sequence (300A,0656) SQ 1
#[rustfmt::skip]
pub const RT_BEAM_LIMITING_DEVICE_OPENING_SEQUENCE: Tag = Tag(0x300A, 0x0656);
/// Number of RT Beam Limiting Device Openings (300A,0657) US 1
#[rustfmt::skip]
pub const NUMBER_OF_RT_BEAM_LIMITING_DEVICE_OPENINGS: Tag = Tag(0x300A, 0x0657);
/// Radiation Dosimeter Unit Sequence (300A,0658) SQ 1
#[rustfmt::skip]
pub const RADIATION_DOSIMETER_UNIT_SEQUENCE: Tag = Tag(0x300A, 0x0658);
/// RT Device Distance Reference Location Code Sequence (300A,0659) SQ 1
#[rustfmt::skip]
pub const RT_DEVICE_DISTANCE_REFERENCE_LOCATION_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0659);
/// Radiation Device Configuration and Commissioning Key Sequence (300A,065A) SQ 1
#[rustfmt::skip]
pub const RADIATION_DEVICE_CONFIGURATION_AND_COMMISSIONING_KEY_SEQUENCE: Tag = Tag(0x300A, 0x065A);
/// Patient Support Position Parameter Sequence (300A,065B) SQ 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_POSITION_PARAMETER_SEQUENCE: Tag = Tag(0x300A, 0x065B);
/// Patient Support Position Specification Method (300A,065C) CS 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_POSITION_SPECIFICATION_METHOD: Tag = Tag(0x300A, 0x065C);
/// Patient Support Position Device Parameter Sequence (300A,065D) SQ 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_POSITION_DEVICE_PARAMETER_SEQUENCE: Tag = Tag(0x300A, 0x065D);
/// Device Order Index (300A,065E) US 1
#[rustfmt::skip]
pub const DEVICE_ORDER_INDEX: Tag = Tag(0x300A, 0x065E);
/// Patient Support Position Parameter Order Index (300A,065F) US 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_POSITION_PARAMETER_ORDER_INDEX: Tag = Tag(0x300A, 0x065F);
/// Patient Support Position Device Tolerance Sequence (300A,0660) SQ 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_POSITION_DEVICE_TOLERANCE_SEQUENCE: Tag = Tag(0x300A, 0x0660);
/// Patient Support Position Tolerance Order Index (300A,0661) US 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_POSITION_TOLERANCE_ORDER_INDEX: Tag = Tag(0x300A, 0x0661);
/// Compensator Definition Sequence (300A,0662) SQ 1
#[rustfmt::skip]
pub const COMPENSATOR_DEFINITION_SEQUENCE: Tag = Tag(0x300A, 0x0662);
/// Compensator Map Orientation (300A,0663) CS 1
#[rustfmt::skip]
pub const COMPENSATOR_MAP_ORIENTATION: Tag = Tag(0x300A, 0x0663);
/// Compensator Proximal Thickness Map (300A,0664) OF 1
#[rustfmt::skip]
pub const COMPENSATOR_PROXIMAL_THICKNESS_MAP: Tag = Tag(0x300A, 0x0664);
/// Compensator Distal Thickness Map (300A,0665) OF 1
#[rustfmt::skip]
pub const COMPENSATOR_DISTAL_THICKNESS_MAP: Tag = Tag(0x300A, 0x0665);
/// Compensator Base Plane Offset (300A,0666) FD 1
#[rustfmt::skip]
pub const COMPENSATOR_BASE_PLANE_OFFSET: Tag = Tag(0x300A, 0x0666);
/// Compensator Shape Fabrication Code Sequence (300A,0667) SQ 1
#[rustfmt::skip]
pub const COMPENSATOR_SHAPE_FABRICATION_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0667);
/// Compensator Shape Sequence (300A,0668) SQ 1
#[rustfmt::skip]
pub const COMPENSATOR_SHAPE_SEQUENCE: Tag = Tag(0x300A, 0x0668);
/// Radiation Beam Compensator Milling Tool Diameter (300A,0669) FD 1
#[rustfmt::skip]
pub const RADIATION_BEAM_COMPENSATOR_MILLING_TOOL_DIAMETER: Tag = Tag(0x300A, 0x0669);
/// Block Definition Sequence (300A,066A) SQ 1
#[rustfmt::skip]
pub const BLOCK_DEFINITION_SEQUENCE: Tag = Tag(0x300A, 0x066A);
/// Block Edge Data (300A,066B) OF 1
#[rustfmt::skip]
pub const BLOCK_EDGE_DATA: Tag = Tag(0x300A, 0x066B);
/// Block Orientation (300A,066C) CS 1
#[rustfmt::skip]
pub const BLOCK_ORIENTATION: Tag = Tag(0x300A, 0x066C);
/// Radiation Beam Block Thickness (300A,066D) FD 1
#[rustfmt::skip]
pub const RADIATION_BEAM_BLOCK_THICKNESS: Tag = Tag(0x300A, 0x066D);
/// Radiation Beam Block Slab Thickness (300A,066E) FD 1
#[rustfmt::skip]
pub const RADIATION_BEAM_BLOCK_SLAB_THICKNESS: Tag = Tag(0x300A, 0x066E);
/// Block Edge Data Sequence (300A,066F) SQ 1
#[rustfmt::skip]
pub const BLOCK_EDGE_DATA_SEQUENCE: Tag = Tag(0x300A, 0x066F);
/// Number of RT Accessory Holders (300A,0670) US 1
#[rustfmt::skip]
pub const NUMBER_OF_RT_ACCESSORY_HOLDERS: Tag = Tag(0x300A, 0x0670);
/// General Accessory Definition Sequence (300A,0671) SQ 1
#[rustfmt::skip]
pub const GENERAL_ACCESSORY_DEFINITION_SEQUENCE: Tag = Tag(0x300A, 0x0671);
/// Number of General Accessories (300A,0672) US 1
#[rustfmt::skip]
pub const NUMBER_OF_GENERAL_ACCESSORIES: Tag = Tag(0x300A, 0x0672);
/// Bolus Definition Sequence (300A,0673) SQ 1
#[rustfmt::skip]
pub const BOLUS_DEFINITION_SEQUENCE: Tag = Tag(0x300A, 0x0673);
/// Number of Boluses (300A,0674) US 1
#[rustfmt::skip]
pub const NUMBER_OF_BOLUSES: Tag = Tag(0x300A, 0x0674);
/// Equipment Frame of Reference UID (300A,0675) UI 1
#[rustfmt::skip]
pub const EQUIPMENT_FRAME_OF_REFERENCE_UID: Tag = Tag(0x300A, 0x0675);
/// Equipment Frame of Reference Description (300A,0676) ST 1
#[rustfmt::skip]
pub const EQUIPMENT_FRAME_OF_REFERENCE_DESCRIPTION: Tag = Tag(0x300A, 0x0676);
/// Equipment Reference Point Coordinates Sequence (300A,0677) SQ 1
#[rustfmt::skip]
pub const EQUIPMENT_REFERENCE_POINT_COORDINATES_SEQUENCE: Tag = Tag(0x300A, 0x0677);
/// Equipment Reference Point Code Sequence (300A,0678) SQ 1
#[rustfmt::skip]
pub const EQUIPMENT_REFERENCE_POINT_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0678);
/// RT Beam Limiting Device Angle (300A,0679) FD 1
#[rustfmt::skip]
pub const RT_BEAM_LIMITING_DEVICE_ANGLE: Tag = Tag(0x300A, 0x0679);
/// Source Roll Angle (300A,067A) FD 1
#[rustfmt::skip]
pub const SOURCE_ROLL_ANGLE: Tag = Tag(0x300A, 0x067A);
/// Radiation Generation Mode Sequence (300A,067B) SQ 1
#[rustfmt::skip]
pub const RADIATION_GENERATION_MODE_SEQUENCE: Tag = Tag(0x300A, 0x067B);
/// Radiation Generation Mode Label (300A,067C) SH 1
#[rustfmt::skip]
pub const RADIATION_GENERATION_MODE_LABEL: Tag = Tag(0x300A, 0x067C);
/// Radiation Generation Mode Description (300A,067D) ST 1
#[rustfmt::skip]
pub const RADIATION_GENERATION_MODE_DESCRIPTION: Tag = Tag(0x300A, 0x067D);
/// Radiation Generation Mode Machine Code Sequence (300A,067E) SQ 1
#[rustfmt::skip]
pub const RADIATION_GENERATION_MODE_MACHINE_CODE_SEQUENCE: Tag = Tag(0x300A, 0x067E);
/// Radiation Type Code Sequence (300A,067F) SQ 1
#[rustfmt::skip]
pub const RADIATION_TYPE_CODE_SEQUENCE: Tag = Tag(0x300A, 0x067F);
/// Nominal Energy (300A,0680) DS 1
#[rustfmt::skip]
pub const NOMINAL_ENERGY: Tag = Tag(0x300A, 0x0680);
/// Minimum Nominal Energy (300A,0681) DS 1
#[rustfmt::skip]
pub const MINIMUM_NOMINAL_ENERGY: Tag = Tag(0x300A, 0x0681);
/// Maximum Nominal Energy (300A,0682) DS 1
#[rustfmt::skip]
pub const MAXIMUM_NOMINAL_ENERGY: Tag = Tag(0x300A, 0x0682);
/// Radiation Fluence Modifier Code Sequence (300A,0683) SQ 1
#[rustfmt::skip]
pub const RADIATION_FLUENCE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0683);
/// Energy Unit Code Sequence (300A,0684) SQ 1
#[rustfmt::skip]
pub const ENERGY_UNIT_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0684);
/// Number of Radiation Generation Modes (300A,0685) US 1
#[rustfmt::skip]
pub const NUMBER_OF_RADIATION_GENERATION_MODES: Tag = Tag(0x300A, 0x0685);
/// Patient Support Devices Sequence (300A,0686) SQ 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_DEVICES_SEQUENCE: Tag = Tag(0x300A, 0x0686);
/// Number of Patient Support Devices (300A,0687) US 1
#[rustfmt::skip]
pub const NUMBER_OF_PATIENT_SUPPORT_DEVICES: Tag = Tag(0x300A, 0x0687);
/// RT Beam Modifier Definition Distance (300A,0688) FD 1
#[rustfmt::skip]
pub const RT_BEAM_MODIFIER_DEFINITION_DISTANCE: Tag = Tag(0x300A, 0x0688);
/// Beam Area Limit Sequence (300A,0689) SQ 1
#[rustfmt::skip]
pub const BEAM_AREA_LIMIT_SEQUENCE: Tag = Tag(0x300A, 0x0689);
/// Referenced RT Prescription Sequence (300A,068A) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RT_PRESCRIPTION_SEQUENCE: Tag = Tag(0x300A, 0x068A);
/// Dose Value Interpretation (300A,068B) CS 1
#[rustfmt::skip]
pub const DOSE_VALUE_INTERPRETATION: Tag = Tag(0x300A, 0x068B);
/// Treatment Session UID (300A,0700) UI 1
#[rustfmt::skip]
pub const TREATMENT_SESSION_UID: Tag = Tag(0x300A, 0x0700);
/// RT Radiation Usage (300A,0701) CS 1
#[rustfmt::skip]
pub const RT_RADIATION_USAGE: Tag = Tag(0x300A, 0x0701);
/// Referenced RT Radiation Set Sequence (300A,0702) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RT_RADIATION_SET_SEQUENCE: Tag = Tag(0x300A, 0x0702);
/// Referenced RT Radiation Record Sequence (300A,0703) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RT_RADIATION_RECORD_SEQUENCE: Tag = Tag(0x300A, 0x0703);
/// RT Radiation Set Delivery Number (300A,0704) US 1
#[rustfmt::skip]
pub const RT_RADIATION_SET_DELIVERY_NUMBER: Tag = Tag(0x300A, 0x0704);
/// Clinical Fraction Number (300A,0705) US 1
#[rustfmt::skip]
pub const CLINICAL_FRACTION_NUMBER: Tag = Tag(0x300A, 0x0705);
/// RT Treatment Fraction Completion Status (300A,0706) CS 1
#[rustfmt::skip]
pub const RT_TREATMENT_FRACTION_COMPLETION_STATUS: Tag = Tag(0x300A, 0x0706);
/// RT Radiation Set Usage (300A,0707) CS 1
#[rustfmt::skip]
pub const RT_RADIATION_SET_USAGE: Tag = Tag(0x300A, 0x0707);
/// Treatment Delivery Continuation Flag (300A,0708) CS 1
#[rustfmt::skip]
pub const TREATMENT_DELIVERY_CONTINUATION_FLAG: Tag = Tag(0x300A, 0x0708);
/// Treatment Record Content Origin (300A,0709) CS 1
#[rustfmt::skip]
pub const TREATMENT_RECORD_CONTENT_ORIGIN: Tag = Tag(0x300A, 0x0709);
/// RT Treatment Termination Status (300A,0714) CS 1
#[rustfmt::skip]
pub const RT_TREATMENT_TERMINATION_STATUS: Tag = Tag(0x300A, 0x0714);
/// RT Treatment Termination Reason Code Sequence (300A,0715) SQ 1
#[rustfmt::skip]
pub const RT_TREATMENT_TERMINATION_REASON_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0715);
/// Machine-Specific Treatment Termination Code Sequence (300A,0716) SQ 1
#[rustfmt::skip]
pub const MACHINE_SPECIFIC_TREATMENT_TERMINATION_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0716);
/// RT Radiation Salvage Record Control Point Sequence (300A,0722) SQ 1
#[rustfmt::skip]
pub const RT_RADIATION_SALVAGE_RECORD_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x0722);
/// Starting Meterset Value Known Flag (300A,0723) CS 1
#[rustfmt::skip]
pub const STARTING_METERSET_VALUE_KNOWN_FLAG: Tag = Tag(0x300A, 0x0723);
/// Treatment Termination Description (300A,0730) ST 1
#[rustfmt::skip]
pub const TREATMENT_TERMINATION_DESCRIPTION: Tag = Tag(0x300A, 0x0730);
/// Treatment Tolerance Violation Sequence (300A,0731) SQ 1
#[rustfmt::skip]
pub const TREATMENT_TOLERANCE_VIOLATION_SEQUENCE: Tag = Tag(0x300A, 0x0731);
/// Treatment Tolerance Violation Category (300A,0732) CS 1
#[rustfmt::skip]
pub const TREATMENT_TOLERANCE_VIOLATION_CATEGORY: Tag = Tag(0x300A, 0x0732);
/// Treatment Tolerance Violation Attribute Sequence (300A,0733) SQ 1
#[rustfmt::skip]
pub const TREATMENT_TOLERANCE_VIOLATION_ATTRIBUTE_SEQUENCE: Tag = Tag(0x300A, 0x0733);
/// Treatment Tolerance Violation Description (300A,0734) ST 1
#[rustfmt::skip]
pub const TREATMENT_TOLERANCE_VIOLATION_DESCRIPTION: Tag = Tag(0x300A, 0x0734);
/// Treatment Tolerance Violation Identification (300A,0735) ST 1
#[rustfmt::skip]
pub const TREATMENT_TOLERANCE_VIOLATION_IDENTIFICATION: Tag = Tag(0x300A, 0x0735);
/// Treatment Tolerance Violation DateTime (300A,0736) DT 1
#[rustfmt::skip]
pub const TREATMENT_TOLERANCE_VIOLATION_DATE_TIME: Tag = Tag(0x300A, 0x0736);
/// Recorded RT Control Point DateTime (300A,073A) DT 1
#[rustfmt::skip]
pub const RECORDED_RT_CONTROL_POINT_DATE_TIME: Tag = Tag(0x300A, 0x073A);
/// Referenced Radiation RT Control Point Index (300A,073B) US 1
#[rustfmt::skip]
pub const REFERENCED_RADIATION_RT_CONTROL_POINT_INDEX: Tag = Tag(0x300A, 0x073B);
/// Alternate Value Sequence (300A,073E) SQ 1
#[rustfmt::skip]
pub const ALTERNATE_VALUE_SEQUENCE: Tag = Tag(0x300A, 0x073E);
/// Confirmation Sequence (300A,073F) SQ 1
#[rustfmt::skip]
pub const CONFIRMATION_SEQUENCE: Tag = Tag(0x300A, 0x073F);
/// Interlock Sequence (300A,0740) SQ 1
#[rustfmt::skip]
pub const INTERLOCK_SEQUENCE: Tag = Tag(0x300A, 0x0740);
/// Interlock DateTime (300A,0741) DT 1
#[rustfmt::skip]
pub const INTERLOCK_DATE_TIME: Tag = Tag(0x300A, 0x0741);
/// Interlock Description (300A,0742) ST 1
#[rustfmt::skip]
pub const INTERLOCK_DESCRIPTION: Tag = Tag(0x300A, 0x0742);
/// Interlock Originating Device Sequence (300A,0743) SQ 1
#[rustfmt::skip]
pub const INTERLOCK_ORIGINATING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x0743);
/// Interlock Code Sequence (300A,0744) SQ 1
#[rustfmt::skip]
pub const INTERLOCK_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0744);
/// Interlock Resolution Code Sequence (300A,0745) SQ 1
#[rustfmt::skip]
pub const INTERLOCK_RESOLUTION_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0745);
/// Interlock Resolution User Sequence (300A,0746) SQ 1
#[rustfmt::skip]
pub const INTERLOCK_RESOLUTION_USER_SEQUENCE: Tag = Tag(0x300A, 0x0746);
/// Override DateTime (300A,0760) DT 1
#[rustfmt::skip]
pub const OVERRIDE_DATE_TIME: Tag = Tag(0x300A, 0x0760);
/// Treatment Tolerance Violation Type Code Sequence (300A,0761) SQ 1
#[rustfmt::skip]
pub const TREATMENT_TOLERANCE_VIOLATION_TYPE_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0761);
/// Treatment Tolerance Violation Cause Code Sequence (300A,0762) SQ 1
#[rustfmt::skip]
pub const TREATMENT_TOLERANCE_VIOLATION_CAUSE_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0762);
/// Measured Meterset to Dose Mapping Sequence (300A,0772) SQ 1
#[rustfmt::skip]
pub const MEASURED_METERSET_TO_DOSE_MAPPING_SEQUENCE: Tag = Tag(0x300A, 0x0772);
/// Referenced Expected In-Vivo Measurement Value Index (300A,0773) US 1
#[rustfmt::skip]
pub const REFERENCED_EXPECTED_IN_VIVO_MEASUREMENT_VALUE_INDEX: Tag = Tag(0x300A, 0x0773);
/// Dose Measurement Device Code Sequence (300A,0774) SQ 1
#[rustfmt::skip]
pub const DOSE_MEASUREMENT_DEVICE_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0774);
/// Additional Parameter Recording Instance Sequence (300A,0780) SQ 1
#[rustfmt::skip]
pub const ADDITIONAL_PARAMETER_RECORDING_INSTANCE_SEQUENCE: Tag = Tag(0x300A, 0x0780);
/// Interlock Origin Description (300A,0783) ST 1
#[rustfmt::skip]
pub const INTERLOCK_ORIGIN_DESCRIPTION: Tag = Tag(0x300A, 0x0783);
/// RT Patient Position Scope Sequence (300A,0784) SQ 1
#[rustfmt::skip]
pub const RT_PATIENT_POSITION_SCOPE_SEQUENCE: Tag = Tag(0x300A, 0x0784);
/// Referenced Treatment Position Group UID (300A,0785) UI 1
#[rustfmt::skip]
pub const REFERENCED_TREATMENT_POSITION_GROUP_UID: Tag = Tag(0x300A, 0x0785);
/// Radiation Order Index (300A,0786) US 1
#[rustfmt::skip]
pub const RADIATION_ORDER_INDEX: Tag = Tag(0x300A, 0x0786);
/// Omitted Radiation Sequence (300A,0787) SQ 1
#[rustfmt::skip]
pub const OMITTED_RADIATION_SEQUENCE: Tag = Tag(0x300A, 0x0787);
/// Reason for Omission Code Sequence (300A,0788) SQ 1
#[rustfmt::skip]
pub const REASON_FOR_OMISSION_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0788);
/// RT Delivery Start Patient Position Sequence (300A,0789) SQ 1
#[rustfmt::skip]
pub const RT_DELIVERY_START_PATIENT_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x0789);
/// RT Treatment Preparation Patient Position Sequence (300A,078A) SQ 1
#[rustfmt::skip]
pub const RT_TREATMENT_PREPARATION_PATIENT_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x078A);
/// Referenced RT Treatment Preparation Sequence (300A,078B) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RT_TREATMENT_PREPARATION_SEQUENCE: Tag = Tag(0x300A, 0x078B);
/// Referenced Patient Setup Photo Sequence (300A,078C) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SETUP_PHOTO_SEQUENCE: Tag = Tag(0x300A, 0x078C);
/// Patient Treatment Preparation Method Code Sequence (300A,078D) SQ 1
#[rustfmt::skip]
pub const PATIENT_TREATMENT_PREPARATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x300A, 0x078D);
/// Patient Treatment Preparation Procedure Parameter Description (300A,078E) LT 1
#[rustfmt::skip]
pub const PATIENT_TREATMENT_PREPARATION_PROCEDURE_PARAMETER_DESCRIPTION: Tag = Tag(0x300A, 0x078E);
/// Patient Treatment Preparation Device Sequence (300A,078F) SQ 1
#[rustfmt::skip]
pub const PATIENT_TREATMENT_PREPARATION_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x078F);
/// Patient Treatment Preparation Procedure Sequence (300A,0790) SQ 1
#[rustfmt::skip]
pub const PATIENT_TREATMENT_PREPARATION_PROCEDURE_SEQUENCE: Tag = Tag(0x300A, 0x0790);
/// Patient Treatment Preparation Procedure Code Sequence (300A,0791) SQ 1
#[rustfmt::skip]
pub const PATIENT_TREATMENT_PREPARATION_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0791);
/// Patient Treatment Preparation Method Description (300A,0792) LT 1
#[rustfmt::skip]
pub const PATIENT_TREATMENT_PREPARATION_METHOD_DESCRIPTION: Tag = Tag(0x300A, 0x0792);
/// Patient Treatment Preparation Procedure Parameter Sequence (300A,0793) SQ 1
#[rustfmt::skip]
pub const PATIENT_TREATMENT_PREPARATION_PROCEDURE_PARAMETER_SEQUENCE: Tag = Tag(0x300A, 0x0793);
/// Patient Setup Photo Description (300A,0794) LT 1
#[rustfmt::skip]
pub const PATIENT_SETUP_PHOTO_DESCRIPTION: Tag = Tag(0x300A, 0x0794);
/// Patient Treatment Preparation Procedure Index (300A,0795) US 1
#[rustfmt::skip]
pub const PATIENT_TREATMENT_PREPARATION_PROCEDURE_INDEX: Tag = Tag(0x300A, 0x0795);
/// Referenced Patient Setup Procedure Index (300A,0796) US 1
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SETUP_PROCEDURE_INDEX: Tag = Tag(0x300A, 0x0796);
/// Referenced RT Plan Sequence (300C,0002) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RT_PLAN_SEQUENCE: Tag = Tag(0x300C, 0x0002);
/// Referenced Beam Sequence (300C,0004) SQ 1
#[rustfmt::skip]
pub const REFERENCED_BEAM_SEQUENCE: Tag = Tag(0x300C, 0x0004);
/// Referenced Beam Number (300C,0006) IS 1
#[rustfmt::skip]
pub const REFERENCED_BEAM_NUMBER: Tag = Tag(0x300C, 0x0006);
/// Referenced Reference Image Number (300C,0007) IS 1
#[rustfmt::skip]
pub const REFERENCED_REFERENCE_IMAGE_NUMBER: Tag = Tag(0x300C, 0x0007);
/// Start Cumulative Meterset Weight (300C,0008) DS 1
#[rustfmt::skip]
pub const START_CUMULATIVE_METERSET_WEIGHT: Tag = Tag(0x300C, 0x0008);
/// End Cumulative Meterset Weight (300C,0009) DS 1
#[rustfmt::skip]
pub const END_CUMULATIVE_METERSET_WEIGHT: Tag = Tag(0x300C, 0x0009);
/// Referenced Brachy Application Setup Sequence (300C,000A) SQ 1
#[rustfmt::skip]
pub const REFERENCED_BRACHY_APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x300C, 0x000A);
/// Referenced Brachy Application Setup Number (300C,000C) IS 1
#[rustfmt::skip]
pub const REFERENCED_BRACHY_APPLICATION_SETUP_NUMBER: Tag = Tag(0x300C, 0x000C);
/// Referenced Source Number (300C,000E) IS 1
#[rustfmt::skip]
pub const REFERENCED_SOURCE_NUMBER: Tag = Tag(0x300C, 0x000E);
/// Referenced Fraction Group Sequence (300C,0020) SQ 1
#[rustfmt::skip]
pub const REFERENCED_FRACTION_GROUP_SEQUENCE: Tag = Tag(0x300C, 0x0020);
/// Referenced Fraction Group Number (300C,0022) IS 1
#[rustfmt::skip]
pub const REFERENCED_FRACTION_GROUP_NUMBER: Tag = Tag(0x300C, 0x0022);
/// Referenced Verification Image Sequence (300C,0040) SQ 1
#[rustfmt::skip]
pub const REFERENCED_VERIFICATION_IMAGE_SEQUENCE: Tag = Tag(0x300C, 0x0040);
/// Referenced Reference Image Sequence (300C,0042) SQ 1
#[rustfmt::skip]
pub const REFERENCED_REFERENCE_IMAGE_SEQUENCE: Tag = Tag(0x300C, 0x0042);
/// Referenced Dose Reference Sequence (300C,0050) SQ 1
#[rustfmt::skip]
pub const REFERENCED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300C, 0x0050);
/// Referenced Dose Reference Number (300C,0051) IS 1
#[rustfmt::skip]
pub const REFERENCED_DOSE_REFERENCE_NUMBER: Tag = Tag(0x300C, 0x0051);
/// Brachy Referenced Dose Reference Sequence (300C,0055) SQ 1
#[rustfmt::skip]
pub const BRACHY_REFERENCED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300C, 0x0055);
/// Referenced Structure Set Sequence (300C,0060) SQ 1
#[rustfmt::skip]
pub const REFERENCED_STRUCTURE_SET_SEQUENCE: Tag = Tag(0x300C, 0x0060);
/// Referenced Patient Setup Number (300C,006A) IS 1
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SETUP_NUMBER: Tag = Tag(0x300C, 0x006A);
/// Referenced Dose Sequence (300C,0080) SQ 1
#[rustfmt::skip]
pub const REFERENCED_DOSE_SEQUENCE: Tag = Tag(0x300C, 0x0080);
/// Referenced Tolerance Table Number (300C,00A0) IS 1
#[rustfmt::skip]
pub const REFERENCED_TOLERANCE_TABLE_NUMBER: Tag = Tag(0x300C, 0x00A0);
/// Referenced Bolus Sequence (300C,00B0) SQ 1
#[rustfmt::skip]
pub const REFERENCED_BOLUS_SEQUENCE: Tag = Tag(0x300C, 0x00B0);
/// Referenced Wedge Number (300C,00C0) IS 1
#[rustfmt::skip]
pub const REFERENCED_WEDGE_NUMBER: Tag = Tag(0x300C, 0x00C0);
/// Referenced Compensator Number (300C,00D0) IS 1
#[rustfmt::skip]
pub const REFERENCED_COMPENSATOR_NUMBER: Tag = Tag(0x300C, 0x00D0);
/// Referenced Block Number (300C,00E0) IS 1
#[rustfmt::skip]
pub const REFERENCED_BLOCK_NUMBER: Tag = Tag(0x300C, 0x00E0);
/// Referenced Control Point Index (300C,00F0) IS 1
#[rustfmt::skip]
pub const REFERENCED_CONTROL_POINT_INDEX: Tag = Tag(0x300C, 0x00F0);
/// Referenced Control Point Sequence (300C,00F2) SQ 1
#[rustfmt::skip]
pub const REFERENCED_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300C, 0x00F2);
/// Referenced Start Control Point Index (300C,00F4) IS 1
#[rustfmt::skip]
pub const REFERENCED_START_CONTROL_POINT_INDEX: Tag = Tag(0x300C, 0x00F4);
/// Referenced Stop Control Point Index (300C,00F6) IS 1
#[rustfmt::skip]
pub const REFERENCED_STOP_CONTROL_POINT_INDEX: Tag = Tag(0x300C, 0x00F6);
/// Referenced Range Shifter Number (300C,0100) IS 1
#[rustfmt::skip]
pub const REFERENCED_RANGE_SHIFTER_NUMBER: Tag = Tag(0x300C, 0x0100);
/// Referenced Lateral Spreading Device Number (300C,0102) IS 1
#[rustfmt::skip]
pub const REFERENCED_LATERAL_SPREADING_DEVICE_NUMBER: Tag = Tag(0x300C, 0x0102);
/// Referenced Range Modulator Number (300C,0104) IS 1
#[rustfmt::skip]
pub const REFERENCED_RANGE_MODULATOR_NUMBER: Tag = Tag(0x300C, 0x0104);
/// Omitted Beam Task Sequence (300C,0111) SQ 1
#[rustfmt::skip]
pub const OMITTED_BEAM_TASK_SEQUENCE: Tag = Tag(0x300C, 0x0111);
/// Reason for Omission (300C,0112) CS 1
#[rustfmt::skip]
pub const REASON_FOR_OMISSION: Tag = Tag(0x300C, 0x0112);
/// Reason for Omission Description (300C,0113) LO 1
#[rustfmt::skip]
pub const REASON_FOR_OMISSION_DESCRIPTION: Tag = Tag(0x300C, 0x0113);
/// Prescription Overview Sequence (300C,0114) SQ 1
#[rustfmt::skip]
pub const PRESCRIPTION_OVERVIEW_SEQUENCE: Tag = Tag(0x300C, 0x0114);
/// Total Prescription Dose (300C,0115) FL 1
#[rustfmt::skip]
pub const TOTAL_PRESCRIPTION_DOSE: Tag = Tag(0x300C, 0x0115);
/// Plan Overview Sequence (300C,0116) SQ 1
#[rustfmt::skip]
pub const PLAN_OVERVIEW_SEQUENCE: Tag = Tag(0x300C, 0x0116);
/// Plan Overview Index (300C,0117) US 1
#[rustfmt::skip]
pub const PLAN_OVERVIEW_INDEX: Tag = Tag(0x300C, 0x0117);
/// Referenced Plan Overview Index (300C,0118) US 1
#[rustfmt::skip]
pub const REFERENCED_PLAN_OVERVIEW_INDEX: Tag = Tag(0x300C, 0x0118);
/// Number of Fractions Included (300C,0119) US 1
#[rustfmt::skip]
pub const NUMBER_OF_FRACTIONS_INCLUDED: Tag = Tag(0x300C, 0x0119);
/// Dose Calibration Conditions Sequence (300C,0120) SQ 1
#[rustfmt::skip]
pub const DOSE_CALIBRATION_CONDITIONS_SEQUENCE: Tag = Tag(0x300C, 0x0120);
/// Absorbed Dose to Meterset Ratio (300C,0121) FD 1
#[rustfmt::skip]
pub const ABSORBED_DOSE_TO_METERSET_RATIO: Tag = Tag(0x300C, 0x0121);
/// Delineated Radiation Field Size (300C,0122) FD 2
#[rustfmt::skip]
pub const DELINEATED_RADIATION_FIELD_SIZE: Tag = Tag(0x300C, 0x0122);
/// Dose Calibration Conditions Verified Flag (300C,0123) CS 1
#[rustfmt::skip]
pub const DOSE_CALIBRATION_CONDITIONS_VERIFIED_FLAG: Tag = Tag(0x300C, 0x0123);
/// Calibration Reference Point Depth (300C,0124) FD 1
#[rustfmt::skip]
pub const CALIBRATION_REFERENCE_POINT_DEPTH: Tag = Tag(0x300C, 0x0124);
/// Gating Beam Hold Transition Sequence (300C,0125) SQ 1
#[rustfmt::skip]
pub const GATING_BEAM_HOLD_TRANSITION_SEQUENCE: Tag = Tag(0x300C, 0x0125);
/// Beam Hold Transition (300C,0126) CS 1
#[rustfmt::skip]
pub const BEAM_HOLD_TRANSITION: Tag = Tag(0x300C, 0x0126);
/// Beam Hold Transition DateTime (300C,0127) DT 1
#[rustfmt::skip]
pub const BEAM_HOLD_TRANSITION_DATE_TIME: Tag = Tag(0x300C, 0x0127);
/// Beam Hold Originating Device Sequence (300C,0128) SQ 1
#[rustfmt::skip]
pub const BEAM_HOLD_ORIGINATING_DEVICE_SEQUENCE: Tag = Tag(0x300C, 0x0128);
/// Beam Hold Transition Trigger Source (300C,0129) CS 1
#[rustfmt::skip]
pub const BEAM_HOLD_TRANSITION_TRIGGER_SOURCE: Tag = Tag(0x300C, 0x0129);
/// Approval Status (300E,0002) CS 1
#[rustfmt::skip]
pub const APPROVAL_STATUS: Tag = Tag(0x300E, 0x0002);
/// Review Date (300E,0004) DA 1
#[rustfmt::skip]
pub const REVIEW_DATE: Tag = Tag(0x300E, 0x0004);
/// Review Time (300E,0005) TM 1
#[rustfmt::skip]
pub const REVIEW_TIME: Tag = Tag(0x300E, 0x0005);
/// Reviewer Name (300E,0008) PN 1
#[rustfmt::skip]
pub const REVIEWER_NAME: Tag = Tag(0x300E, 0x0008);
/// Radiobiological Dose Effect Sequence (3010,0001) SQ 1
#[rustfmt::skip]
pub const RADIOBIOLOGICAL_DOSE_EFFECT_SEQUENCE: Tag = Tag(0x3010, 0x0001);
/// Radiobiological Dose Effect Flag (3010,0002) CS 1
#[rustfmt::skip]
pub const RADIOBIOLOGICAL_DOSE_EFFECT_FLAG: Tag = Tag(0x3010, 0x0002);
/// Effective Dose Calculation Method Category Code Sequence (3010,0003) SQ 1
#[rustfmt::skip]
pub const EFFECTIVE_DOSE_CALCULATION_METHOD_CATEGORY_CODE_SEQUENCE: Tag = Tag(0x3010, 0x0003);
/// Effective Dose Calculation Method Code Sequence (3010,0004) SQ 1
#[rustfmt::skip]
pub const EFFECTIVE_DOSE_CALCULATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x3010, 0x0004);
/// Effective Dose Calculation Method Description (3010,0005) LO 1
#[rustfmt::skip]
pub const EFFECTIVE_DOSE_CALCULATION_METHOD_DESCRIPTION: Tag = Tag(0x3010, 0x0005);
/// Conceptual Volume UID (3010,0006) UI 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_UID: Tag = Tag(0x3010, 0x0006);
/// Originating SOP Instance Reference Sequence (3010,0007) SQ 1
#[rustfmt::skip]
pub const ORIGINATING_SOP_INSTANCE_REFERENCE_SEQUENCE: Tag = Tag(0x3010, 0x0007);
/// Conceptual Volume Constituent Sequence (3010,0008) SQ 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_CONSTITUENT_SEQUENCE: Tag = Tag(0x3010, 0x0008);
/// Equivalent Conceptual Volume Instance Reference Sequence (3010,0009) SQ 1
#[rustfmt::skip]
pub const EQUIVALENT_CONCEPTUAL_VOLUME_INSTANCE_REFERENCE_SEQUENCE: Tag = Tag(0x3010, 0x0009);
/// Equivalent Conceptual Volumes Sequence (3010,000A) SQ 1
#[rustfmt::skip]
pub const EQUIVALENT_CONCEPTUAL_VOLUMES_SEQUENCE: Tag = Tag(0x3010, 0x000A);
/// Referenced Conceptual Volume UID (3010,000B) UI 1
#[rustfmt::skip]
pub const REFERENCED_CONCEPTUAL_VOLUME_UID: Tag = Tag(0x3010, 0x000B);
/// Conceptual Volume Combination Expression (3010,000C) UT 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_COMBINATION_EXPRESSION: Tag = Tag(0x3010, 0x000C);
/// Conceptual Volume Constituent Index (3010,000D) US 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_CONSTITUENT_INDEX: Tag = Tag(0x3010, 0x000D);
/// Conceptual Volume Combination Flag (3010,000E) CS 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_COMBINATION_FLAG: Tag = Tag(0x3010, 0x000E);
/// Conceptual Volume Combination Description (3010,000F) ST 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_COMBINATION_DESCRIPTION: Tag = Tag(0x3010, 0x000F);
/// Conceptual Volume Segmentation Defined Flag (3010,0010) CS 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_SEGMENTATION_DEFINED_FLAG: Tag = Tag(0x3010, 0x0010);
/// Conceptual Volume Segmentation Reference Sequence (3010,0011) SQ 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_SEGMENTATION_REFERENCE_SEQUENCE: Tag = Tag(0x3010, 0x0011);
/// Conceptual Volume Constituent Segmentation Reference Sequence (3010,0012) SQ 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_CONSTITUENT_SEGMENTATION_REFERENCE_SEQUENCE: Tag = Tag(0x3010, 0x0012);
/// Constituent Conceptual Volume UID (3010,0013) UI 1
#[rustfmt::skip]
pub const CONSTITUENT_CONCEPTUAL_VOLUME_UID: Tag = Tag(0x3010, 0x0013);
/// Derivation Conceptual Volume Sequence (3010,0014) SQ 1
#[rustfmt::skip]
pub const DERIVATION_CONCEPTUAL_VOLUME_SEQUENCE: Tag = Tag(0x3010, 0x0014);
/// Source Conceptual Volume UID (3010,0015) UI 1
#[rustfmt::skip]
pub const SOURCE_CONCEPTUAL_VOLUME_UID: Tag = Tag(0x3010, 0x0015);
/// Conceptual Volume Derivation Algorithm Sequence (3010,0016) SQ 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_DERIVATION_ALGORITHM_SEQUENCE: Tag = Tag(0x3010, 0x0016);
/// Conceptual Volume Description (3010,0017) ST 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_DESCRIPTION: Tag = Tag(0x3010, 0x0017);
/// Source Conceptual Volume Sequence (3010,0018) SQ 1
#[rustfmt::skip]
pub const SOURCE_CONCEPTUAL_VOLUME_SEQUENCE: Tag = Tag(0x3010, 0x0018);
/// Author Identification Sequence (3010,0019) SQ 1
#[rustfmt::skip]
pub const AUTHOR_IDENTIFICATION_SEQUENCE: Tag = Tag(0x3010, 0x0019);
/// Manufacturer's Model Version (3010,001A) LO 1
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_VERSION: Tag = Tag(0x3010, 0x001A);
/// Device Alternate Identifier (3010,001B) UC 1
#[rustfmt::skip]
pub const DEVICE_ALTERNATE_IDENTIFIER: Tag = Tag(0x3010, 0x001B);
/// Device Alternate Identifier Type (3010,001C) CS 1
#[rustfmt::skip]
pub const DEVICE_ALTERNATE_IDENTIFIER_TYPE: Tag = Tag(0x3010, 0x001C);
/// Device Alternate Identifier Format (3010,001D) LT 1
#[rustfmt::skip]
pub const DEVICE_ALTERNATE_IDENTIFIER_FORMAT: Tag = Tag(0x3010, 0x001D);
/// Segmentation Creation Template Label (3010,001E) LO 1
#[rustfmt::skip]
pub const SEGMENTATION_CREATION_TEMPLATE_LABEL: Tag = Tag(0x3010, 0x001E);
/// Segmentation Template UID (3010,001F) UI 1
#[rustfmt::skip]
pub const SEGMENTATION_TEMPLATE_UID: Tag = Tag(0x3010, 0x001F);
/// Referenced Segment Reference Index (3010,0020) US 1
#[rustfmt::skip]
pub const REFERENCED_SEGMENT_REFERENCE_INDEX: Tag = Tag(0x3010, 0x0020);
/// Segment Reference Sequence (3010,0021) SQ 1
#[rustfmt::skip]
pub const SEGMENT_REFERENCE_SEQUENCE: Tag = Tag(0x3010, 0x0021);
/// Segment Reference Index (3010,0022) US 1
#[rustfmt::skip]
pub const SEGMENT_REFERENCE_INDEX: Tag = Tag(0x3010, 0x0022);
/// Direct Segment Reference Sequence (3010,0023) SQ 1
#[rustfmt::skip]
pub const DIRECT_SEGMENT_REFERENCE_SEQUENCE: Tag = Tag(0x3010, 0x0023);
/// Combination Segment Reference Sequence (3010,0024) SQ 1
#[rustfmt::skip]
pub const COMBINATION_SEGMENT_REFERENCE_SEQUENCE: Tag = Tag(0x3010, 0x0024);
/// Conceptual Volume Sequence (3010,0025) SQ 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_SEQUENCE: Tag = Tag(0x3010, 0x0025);
/// Segmented RT Accessory Device Sequence (3010,0026) SQ 1
#[rustfmt::skip]
pub const SEGMENTED_RT_ACCESSORY_DEVICE_SEQUENCE: Tag = Tag(0x3010, 0x0026);
/// Segment Characteristics Sequence (3010,0027) SQ 1
#[rustfmt::skip]
pub const SEGMENT_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x3010, 0x0027);
/// Related Segment Characteristics Sequence (3010,0028) SQ 1
#[rustfmt::skip]
pub const RELATED_SEGMENT_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x3010, 0x0028);
/// Segment Characteristics Precedence (3010,0029) US 1
#[rustfmt::skip]
pub const SEGMENT_CHARACTERISTICS_PRECEDENCE: Tag = Tag(0x3010, 0x0029);
/// RT Segment Annotation Sequence (3010,002A) SQ 1
#[rustfmt::skip]
pub const RT_SEGMENT_ANNOTATION_SEQUENCE: Tag = Tag(0x3010, 0x002A);
/// Segment Annotation Category Code Sequence (3010,002B) SQ 1
#[rustfmt::skip]
pub const SEGMENT_ANNOTATION_CATEGORY_CODE_SEQUENCE: Tag = Tag(0x3010, 0x002B);
/// Segment Annotation Type Code Sequence (3010,002C) SQ 1
#[rustfmt::skip]
pub const SEGMENT_ANNOTATION_TYPE_CODE_SEQUENCE: Tag = Tag(0x3010, 0x002C);
/// Device Label (3010,002D) LO 1
#[rustfmt::skip]
pub const DEVICE_LABEL: Tag = Tag(0x3010, 0x002D);
/// Device Type Code Sequence (3010,002E) SQ 1
#[rustfmt::skip]
pub const DEVICE_TYPE_CODE_SEQUENCE: Tag = Tag(0x3010, 0x002E);
/// Segment Annotation Type Modifier Code Sequence (3010,002F) SQ 1
#[rustfmt::skip]
pub const SEGMENT_ANNOTATION_TYPE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x3010, 0x002F);
/// Patient Equipment Relationship Code Sequence (3010,0030) SQ 1
#[rustfmt::skip]
pub const PATIENT_EQUIPMENT_RELATIONSHIP_CODE_SEQUENCE: Tag = Tag(0x3010, 0x0030);
/// Referenced Fiducials UID (3010,0031) UI 1
#[rustfmt::skip]
pub const REFERENCED_FIDUCIALS_UID: Tag = Tag(0x3010, 0x0031);
/// Patient Treatment Orientation Sequence (3010,0032) SQ 1
#[rustfmt::skip]
pub const PATIENT_TREATMENT_ORIENTATION_SEQUENCE: Tag = Tag(0x3010, 0x0032);
/// User Content Label (3010,0033) SH 1
#[rustfmt::skip]
pub const USER_CONTENT_LABEL: Tag = Tag(0x3010, 0x0033);
/// User Content Long Label (3010,0034) LO 1
#[rustfmt::skip]
pub const USER_CONTENT_LONG_LABEL: Tag = Tag(0x3010, 0x0034);
/// Entity Label (3010,0035) SH 1
#[rustfmt::skip]
pub const ENTITY_LABEL: Tag = Tag(0x3010, 0x0035);
/// Entity Name (3010,0036) LO 1
#[rustfmt::skip]
pub const ENTITY_NAME: Tag = Tag(0x3010, 0x0036);
/// Entity Description (3010,0037) ST 1
#[rustfmt::skip]
pub const ENTITY_DESCRIPTION: Tag = Tag(0x3010, 0x0037);
/// Entity Long Label (3010,0038) LO 1
#[rustfmt::skip]
pub const ENTITY_LONG_LABEL: Tag = Tag(0x3010, 0x0038);
/// Device Index (3010,0039) US 1
#[rustfmt::skip]
pub const DEVICE_INDEX: Tag = Tag(0x3010, 0x0039);
/// RT Treatment Phase Index (3010,003A) US 1
#[rustfmt::skip]
pub const RT_TREATMENT_PHASE_INDEX: Tag = Tag(0x3010, 0x003A);
/// RT Treatment Phase UID (3010,003B) UI 1
#[rustfmt::skip]
pub const RT_TREATMENT_PHASE_UID: Tag = Tag(0x3010, 0x003B);
/// RT Prescription Index (3010,003C) US 1
#[rustfmt::skip]
pub const RT_PRESCRIPTION_INDEX: Tag = Tag(0x3010, 0x003C);
/// RT Segment Annotation Index (3010,003D) US 1
#[rustfmt::skip]
pub const RT_SEGMENT_ANNOTATION_INDEX: Tag = Tag(0x3010, 0x003D);
/// Basis RT Treatment Phase Index (3010,003E) US 1
#[rustfmt::skip]
pub const BASIS_RT_TREATMENT_PHASE_INDEX: Tag = Tag(0x3010, 0x003E);
/// Related RT Treatment Phase Index (3010,003F) US 1
#[rustfmt::skip]
pub const RELATED_RT_TREATMENT_PHASE_INDEX: Tag = Tag(0x3010, 0x003F);
/// Referenced RT Treatment Phase Index (3010,0040) US 1
#[rustfmt::skip]
pub const REFERENCED_RT_TREATMENT_PHASE_INDEX: Tag = Tag(0x3010, 0x0040);
/// Referenced RT Prescription Index (3010,0041) US 1
#[rustfmt::skip]
pub const REFERENCED_RT_PRESCRIPTION_INDEX: Tag = Tag(0x3010, 0x0041);
/// Referenced Parent RT Prescription Index (3010,0042) US 1
#[rustfmt::skip]
pub const REFERENCED_PARENT_RT_PRESCRIPTION_INDEX: Tag = Tag(0x3010, 0x0042);
/// Manufacturer's Device Identifier (3010,0043) ST 1
#[rustfmt::skip]
pub const MANUFACTURER_DEVICE_IDENTIFIER: Tag = Tag(0x3010, 0x0043);
/// Instance-Level Referenced Performed Procedure Step Sequence (3010,0044) SQ 1
#[rustfmt::skip]
pub const INSTANCE_LEVEL_REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x3010, 0x0044);
/// RT Treatment Phase Intent Presence Flag (3010,0045) CS 1
#[rustfmt::skip]
pub const RT_TREATMENT_PHASE_INTENT_PRESENCE_FLAG: Tag = Tag(0x3010, 0x0045);
/// Radiotherapy Treatment Type (3010,0046) CS 1
#[rustfmt::skip]
pub const RADIOTHERAPY_TREATMENT_TYPE: Tag = Tag(0x3010, 0x0046);
/// Teletherapy Radiation Type (3010,0047) CS 1-n
#[rustfmt::skip]
pub const TELETHERAPY_RADIATION_TYPE: Tag = Tag(0x3010, 0x0047);
/// Brachytherapy Source Type (3010,0048) CS 1-n
#[rustfmt::skip]
pub const BRACHYTHERAPY_SOURCE_TYPE: Tag = Tag(0x3010, 0x0048);
/// Referenced RT Treatment Phase Sequence (3010,0049) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RT_TREATMENT_PHASE_SEQUENCE: Tag = Tag(0x3010, 0x0049);
/// Referenced Direct Segment Instance Sequence (3010,004A) SQ 1
#[rustfmt::skip]
pub const REFERENCED_DIRECT_SEGMENT_INSTANCE_SEQUENCE: Tag = Tag(0x3010, 0x004A);
/// Intended RT Treatment Phase Sequence (3010,004B) SQ 1
#[rustfmt::skip]
pub const INTENDED_RT_TREATMENT_PHASE_SEQUENCE: Tag = Tag(0x3010, 0x004B);
/// Intended Phase Start Date (3010,004C) DA 1
#[rustfmt::skip]
pub const INTENDED_PHASE_START_DATE: Tag = Tag(0x3010, 0x004C);
/// Intended Phase End Date (3010,004D) DA 1
#[rustfmt::skip]
pub const INTENDED_PHASE_END_DATE: Tag = Tag(0x3010, 0x004D);
/// RT Treatment Phase Interval Sequence (3010,004E) SQ 1
#[rustfmt::skip]
pub const RT_TREATMENT_PHASE_INTERVAL_SEQUENCE: Tag = Tag(0x3010, 0x004E);
/// Temporal Relationship Interval Anchor (3010,004F) CS 1
#[rustfmt::skip]
pub const TEMPORAL_RELATIONSHIP_INTERVAL_ANCHOR: Tag = Tag(0x3010, 0x004F);
/// Minimum Number of Interval Days (3010,0050) FD 1
#[rustfmt::skip]
pub const MINIMUM_NUMBER_OF_INTERVAL_DAYS: Tag = Tag(0x3010, 0x0050);
/// Maximum Number of Interval Days (3010,0051) FD 1
#[rustfmt::skip]
pub const MAXIMUM_NUMBER_OF_INTERVAL_DAYS: Tag = Tag(0x3010, 0x0051);
/// Pertinent SOP Classes in Study (3010,0052) UI 1-n
#[rustfmt::skip]
pub const PERTINENT_SOP_CLASSES_IN_STUDY: Tag = Tag(0x3010, 0x0052);
/// Pertinent SOP Classes in Series (3010,0053) UI 1-n
#[rustfmt::skip]
pub const PERTINENT_SOP_CLASSES_IN_SERIES: Tag = Tag(0x3010, 0x0053);
/// RT Prescription Label (3010,0054) LO 1
#[rustfmt::skip]
pub const RT_PRESCRIPTION_LABEL: Tag = Tag(0x3010, 0x0054);
/// RT Physician Intent Predecessor Sequence (3010,0055) SQ 1
#[rustfmt::skip]
pub const RT_PHYSICIAN_INTENT_PREDECESSOR_SEQUENCE: Tag = Tag(0x3010, 0x0055);
/// RT Treatment Approach Label (3010,0056) LO 1
#[rustfmt::skip]
pub const RT_TREATMENT_APPROACH_LABEL: Tag = Tag(0x3010, 0x0056);
/// RT Physician Intent Sequence (3010,0057) SQ 1
#[rustfmt::skip]
pub const RT_PHYSICIAN_INTENT_SEQUENCE: Tag = Tag(0x3010, 0x0057);
/// RT Physician Intent Index (3010,0058) US 1
#[rustfmt::skip]
pub const RT_PHYSICIAN_INTENT_INDEX: Tag = Tag(0x3010, 0x0058);
/// RT Treatment Intent Type (3010,0059) CS 1
#[rustfmt::skip]
pub const RT_TREATMENT_INTENT_TYPE: Tag = Tag(0x3010, 0x0059);
/// RT Physician Intent Narrative (3010,005A) UT 1
#[rustfmt::skip]
pub const RT_PHYSICIAN_INTENT_NARRATIVE: Tag = Tag(0x3010, 0x005A);
/// RT Protocol Code Sequence (3010,005B) SQ 1
#[rustfmt::skip]
pub const RT_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x3010, 0x005B);
/// Reason for Superseding (3010,005C) ST 1
#[rustfmt::skip]
pub const REASON_FOR_SUPERSEDING: Tag = Tag(0x3010, 0x005C);
/// RT Diagnosis Code Sequence (3010,005D) SQ 1
#[rustfmt::skip]
pub const RT_DIAGNOSIS_CODE_SEQUENCE: Tag = Tag(0x3010, 0x005D);
/// Referenced RT Physician Intent Index (3010,005E) US 1
#[rustfmt::skip]
pub const REFERENCED_RT_PHYSICIAN_INTENT_INDEX: Tag = Tag(0x3010, 0x005E);
/// RT Physician Intent Input Instance Sequence (3010,005F) SQ 1
#[rustfmt::skip]
pub const RT_PHYSICIAN_INTENT_INPUT_INSTANCE_SEQUENCE: Tag = Tag(0x3010, 0x005F);
/// RT Anatomic Prescription Sequence (3010,0060) SQ 1
#[rustfmt::skip]
pub const RT_ANATOMIC_PRESCRIPTION_SEQUENCE: Tag = Tag(0x3010, 0x0060);
/// Prior Treatment Dose Description (3010,0061) UT 1
#[rustfmt::skip]
pub const PRIOR_TREATMENT_DOSE_DESCRIPTION: Tag = Tag(0x3010, 0x0061);
/// Prior Treatment Reference Sequence (3010,0062) SQ 1
#[rustfmt::skip]
pub const PRIOR_TREATMENT_REFERENCE_SEQUENCE: Tag = Tag(0x3010, 0x0062);
/// Dosimetric Objective Evaluation Scope (3010,0063) CS 1
#[rustfmt::skip]
pub const DOSIMETRIC_OBJECTIVE_EVALUATION_SCOPE: Tag = Tag(0x3010, 0x0063);
/// Therapeutic Role Category Code Sequence (3010,0064) SQ 1
#[rustfmt::skip]
pub const THERAPEUTIC_ROLE_CATEGORY_CODE_SEQUENCE: Tag = Tag(0x3010, 0x0064);
/// Therapeutic Role Type Code Sequence (3010,0065) SQ 1
#[rustfmt::skip]
pub const THERAPEUTIC_ROLE_TYPE_CODE_SEQUENCE: Tag = Tag(0x3010, 0x0065);
/// Conceptual Volume Optimization Precedence (3010,0066) US 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_OPTIMIZATION_PRECEDENCE: Tag = Tag(0x3010, 0x0066);
/// Conceptual Volume Category Code Sequence (3010,0067) SQ 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_CATEGORY_CODE_SEQUENCE: Tag = Tag(0x3010, 0x0067);
/// Conceptual Volume Blocking Constraint (3010,0068) CS 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_BLOCKING_CONSTRAINT: Tag = Tag(0x3010, 0x0068);
/// Conceptual Volume Type Code Sequence (3010,0069) SQ 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_TYPE_CODE_SEQUENCE: Tag = Tag(0x3010, 0x0069);
/// Conceptual Volume Type Modifier Code Sequence (3010,006A) SQ 1
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_TYPE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x3010, 0x006A);
/// RT Prescription Sequence (3010,006B) SQ 1
#[rustfmt::skip]
pub const RT_PRESCRIPTION_SEQUENCE: Tag = Tag(0x3010, 0x006B);
/// Dosimetric Objective Sequence (3010,006C) SQ 1
#[rustfmt::skip]
pub const DOSIMETRIC_OBJECTIVE_SEQUENCE: Tag = Tag(0x3010, 0x006C);
/// Dosimetric Objective Type Code Sequence (3010,006D) SQ 1
#[rustfmt::skip]
pub const DOSIMETRIC_OBJECTIVE_TYPE_CODE_SEQUENCE: Tag = Tag(0x3010, 0x006D);
/// Dosimetric Objective UID (3010,006E) UI 1
#[rustfmt::skip]
pub const DOSIMETRIC_OBJECTIVE_UID: Tag = Tag(0x3010, 0x006E);
/// Referenced Dosimetric Objective UID (3010,006F) UI 1
#[rustfmt::skip]
pub const REFERENCED_DOSIMETRIC_OBJECTIVE_UID: Tag = Tag(0x3010, 0x006F);
/// Dosimetric Objective Parameter Sequence (3010,0070) SQ 1
#[rustfmt::skip]
pub const DOSIMETRIC_OBJECTIVE_PARAMETER_SEQUENCE: Tag = Tag(0x3010, 0x0070);
/// Referenced Dosimetric Objectives Sequence (3010,0071) SQ 1
#[rustfmt::skip]
pub const REFERENCED_DOSIMETRIC_OBJECTIVES_SEQUENCE: Tag = Tag(0x3010, 0x0071);
/// Absolute Dosimetric Objective Flag (3010,0073) CS 1
#[rustfmt::skip]
pub const ABSOLUTE_DOSIMETRIC_OBJECTIVE_FLAG: Tag = Tag(0x3010, 0x0073);
/// Dosimetric Objective Weight (3010,0074) FD 1
#[rustfmt::skip]
pub const DOSIMETRIC_OBJECTIVE_WEIGHT: Tag = Tag(0x3010, 0x0074);
/// Dosimetric Objective Purpose (3010,0075) CS 1
#[rustfmt::skip]
pub const DOSIMETRIC_OBJECTIVE_PURPOSE: Tag = Tag(0x3010, 0x0075);
/// Planning Input Information Sequence (3010,0076) SQ 1
#[rustfmt::skip]
pub const PLANNING_INPUT_INFORMATION_SEQUENCE: Tag = Tag(0x3010, 0x0076);
/// Treatment Site (3010,0077) LO 1
#[rustfmt::skip]
pub const TREATMENT_SITE: Tag = Tag(0x3010, 0x0077);
/// Treatment Site Code Sequence (3010,0078) SQ 1
#[rustfmt::skip]
pub const TREATMENT_SITE_CODE_SEQUENCE: Tag = Tag(0x3010, 0x0078);
/// Fraction Pattern Sequence (3010,0079) SQ 1
#[rustfmt::skip]
pub const FRACTION_PATTERN_SEQUENCE: Tag = Tag(0x3010, 0x0079);
/// Treatment Technique Notes (3010,007A) UT 1
#[rustfmt::skip]
pub const TREATMENT_TECHNIQUE_NOTES: Tag = Tag(0x3010, 0x007A);
/// Prescription Notes (3010,007B) UT 1
#[rustfmt::skip]
pub const PRESCRIPTION_NOTES: Tag = Tag(0x3010, 0x007B);
/// Number of Interval Fractions (3010,007C) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_INTERVAL_FRACTIONS: Tag = Tag(0x3010, 0x007C);
/// Number of Fractions (3010,007D) US 1
#[rustfmt::skip]
pub const NUMBER_OF_FRACTIONS: Tag = Tag(0x3010, 0x007D);
/// Intended Delivery Duration (3010,007E) US 1
#[rustfmt::skip]
pub const INTENDED_DELIVERY_DURATION: Tag = Tag(0x3010, 0x007E);
/// Fractionation Notes (3010,007F) UT 1
#[rustfmt::skip]
pub const FRACTIONATION_NOTES: Tag = Tag(0x3010, 0x007F);
/// RT Treatment Technique Code Sequence (3010,0080) SQ 1
#[rustfmt::skip]
pub const RT_TREATMENT_TECHNIQUE_CODE_SEQUENCE: Tag = Tag(0x3010, 0x0080);
/// Prescription Notes Sequence (3010,0081) SQ 1
#[rustfmt::skip]
pub const PRESCRIPTION_NOTES_SEQUENCE: Tag = Tag(0x3010, 0x0081);
/// Fraction-Based Relationship Sequence (3010,0082) SQ 1
#[rustfmt::skip]
pub const FRACTION_BASED_RELATIONSHIP_SEQUENCE: Tag = Tag(0x3010, 0x0082);
/// Fraction-Based Relationship Interval Anchor (3010,0083) CS 1
#[rustfmt::skip]
pub const FRACTION_BASED_RELATIONSHIP_INTERVAL_ANCHOR: Tag = Tag(0x3010, 0x0083);
/// Minimum Hours between Fractions (3010,0084) FD 1
#[rustfmt::skip]
pub const MINIMUM_HOURS_BETWEEN_FRACTIONS: Tag = Tag(0x3010, 0x0084);
/// Intended Fraction Start Time (3010,0085) TM 1-n
#[rustfmt::skip]
pub const INTENDED_FRACTION_START_TIME: Tag = Tag(0x3010, 0x0085);
/// Intended Start Day of Week (3010,0086) LT 1
#[rustfmt::skip]
pub const INTENDED_START_DAY_OF_WEEK: Tag = Tag(0x3010, 0x0086);
/// Weekday Fraction Pattern Sequence (3010,0087) SQ 1
#[rustfmt::skip]
pub const WEEKDAY_FRACTION_PATTERN_SEQUENCE: Tag = Tag(0x3010, 0x0087);
/// Delivery Time Structure Code Sequence (3010,0088) SQ 1
#[rustfmt::skip]
pub const DELIVERY_TIME_STRUCTURE_CODE_SEQUENCE: Tag = Tag(0x3010, 0x0088);
/// Treatment Site Modifier Code Sequence (3010,0089) SQ 1
#[rustfmt::skip]
pub const TREATMENT_SITE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x3010, 0x0089);
/// Robotic Base Location Indicator (3010,0090) CS 1 (retired)
#[rustfmt::skip]
pub const ROBOTIC_BASE_LOCATION_INDICATOR: Tag = Tag(0x3010, 0x0090);
/// Robotic Path Node Set Code Sequence (3010,0091) SQ 1
#[rustfmt::skip]
pub const ROBOTIC_PATH_NODE_SET_CODE_SEQUENCE: Tag = Tag(0x3010, 0x0091);
/// Robotic Node Identifier (3010,0092) UL 1
#[rustfmt::skip]
pub const ROBOTIC_NODE_IDENTIFIER: Tag = Tag(0x3010, 0x0092);
/// RT Treatment Source Coordinates (3010,0093) FD 3
#[rustfmt::skip]
pub const RT_TREATMENT_SOURCE_COORDINATES: Tag = Tag(0x3010, 0x0093);
/// Radiation Source Coordinate SystemYaw Angle (3010,0094) FD 1
#[rustfmt::skip]
pub const RADIATION_SOURCE_COORDINATE_SYSTEM_YAW_ANGLE: Tag = Tag(0x3010, 0x0094);
/// Radiation Source Coordinate SystemRoll Angle (3010,0095) FD 1
#[rustfmt::skip]
pub const RADIATION_SOURCE_COORDINATE_SYSTEM_ROLL_ANGLE: Tag = Tag(0x3010, 0x0095);
/// Radiation Source Coordinate System Pitch Angle (3010,0096) FD 1
#[rustfmt::skip]
pub const RADIATION_SOURCE_COORDINATE_SYSTEM_PITCH_ANGLE: Tag = Tag(0x3010, 0x0096);
/// Robotic Path Control Point Sequence (3010,0097) SQ 1
#[rustfmt::skip]
pub const ROBOTIC_PATH_CONTROL_POINT_SEQUENCE: Tag = Tag(0x3010, 0x0097);
/// Tomotherapeutic Control Point Sequence (3010,0098) SQ 1
#[rustfmt::skip]
pub const TOMOTHERAPEUTIC_CONTROL_POINT_SEQUENCE: Tag = Tag(0x3010, 0x0098);
/// Tomotherapeutic Leaf Open Durations (3010,0099) FD 1-n
#[rustfmt::skip]
pub const TOMOTHERAPEUTIC_LEAF_OPEN_DURATIONS: Tag = Tag(0x3010, 0x0099);
/// Tomotherapeutic Leaf Initial Closed Durations (3010,009A) FD 1-n
#[rustfmt::skip]
pub const TOMOTHERAPEUTIC_LEAF_INITIAL_CLOSED_DURATIONS: Tag = Tag(0x3010, 0x009A);
/// Arbitrary (4000,0010) LT 1 (retired)
#[rustfmt::skip]
pub const ARBITRARY: Tag = Tag(0x4000, 0x0010);
/// Text Comments (4000,4000) LT 1 (retired)
#[rustfmt::skip]
pub const TEXT_COMMENTS: Tag = Tag(0x4000, 0x4000);
/// Results ID (4008,0040) SH 1 (retired)
#[rustfmt::skip]
pub const RESULTS_ID: Tag = Tag(0x4008, 0x0040);
/// Results ID Issuer (4008,0042) LO 1 (retired)
#[rustfmt::skip]
pub const RESULTS_ID_ISSUER: Tag = Tag(0x4008, 0x0042);
/// Referenced Interpretation Sequence (4008,0050) SQ 1 (retired)
#[rustfmt::skip]
pub const REFERENCED_INTERPRETATION_SEQUENCE: Tag = Tag(0x4008, 0x0050);
/// Report Production Status (Trial) (4008,00FF) CS 1 (retired)
#[rustfmt::skip]
pub const REPORT_PRODUCTION_STATUS_TRIAL: Tag = Tag(0x4008, 0x00FF);
/// Interpretation Recorded Date (4008,0100) DA 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_RECORDED_DATE: Tag = Tag(0x4008, 0x0100);
/// Interpretation Recorded Time (4008,0101) TM 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_RECORDED_TIME: Tag = Tag(0x4008, 0x0101);
/// Interpretation Recorder (4008,0102) PN 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_RECORDER: Tag = Tag(0x4008, 0x0102);
/// Reference to Recorded Sound (4008,0103) LO 1 (retired)
#[rustfmt::skip]
pub const REFERENCE_TO_RECORDED_SOUND: Tag = Tag(0x4008, 0x0103);
/// Interpretation Transcription Date (4008,0108) DA 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_TRANSCRIPTION_DATE: Tag = Tag(0x4008, 0x0108);
/// Interpretation Transcription Time (4008,0109) TM 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_TRANSCRIPTION_TIME: Tag = Tag(0x4008, 0x0109);
/// Interpretation Transcriber (4008,010A) PN 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_TRANSCRIBER: Tag = Tag(0x4008, 0x010A);
/// Interpretation Text (4008,010B) ST 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_TEXT: Tag = Tag(0x4008, 0x010B);
/// Interpretation Author (4008,010C) PN 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_AUTHOR: Tag = Tag(0x4008, 0x010C);
/// Interpretation Approver Sequence (4008,0111) SQ 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_APPROVER_SEQUENCE: Tag = Tag(0x4008, 0x0111);
/// Interpretation Approval Date (4008,0112) DA 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_APPROVAL_DATE: Tag = Tag(0x4008, 0x0112);
/// Interpretation Approval Time (4008,0113) TM 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_APPROVAL_TIME: Tag = Tag(0x4008, 0x0113);
/// Physician Approving Interpretation (4008,0114) PN 1 (retired)
#[rustfmt::skip]
pub const PHYSICIAN_APPROVING_INTERPRETATION: Tag = Tag(0x4008, 0x0114);
/// Interpretation Diagnosis Description (4008,0115) LT 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_DIAGNOSIS_DESCRIPTION: Tag = Tag(0x4008, 0x0115);
/// Interpretation Diagnosis Code Sequence (4008,0117) SQ 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_DIAGNOSIS_CODE_SEQUENCE: Tag = Tag(0x4008, 0x0117);
/// Results Distribution List Sequence (4008,0118) SQ 1 (retired)
#[rustfmt::skip]
pub const RESULTS_DISTRIBUTION_LIST_SEQUENCE: Tag = Tag(0x4008, 0x0118);
/// Distribution Name (4008,0119) PN 1 (retired)
#[rustfmt::skip]
pub const DISTRIBUTION_NAME: Tag = Tag(0x4008, 0x0119);
/// Distribution Address (4008,011A) LO 1 (retired)
#[rustfmt::skip]
pub const DISTRIBUTION_ADDRESS: Tag = Tag(0x4008, 0x011A);
/// Interpretation ID (4008,0200) SH 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_ID: Tag = Tag(0x4008, 0x0200);
/// Interpretation ID Issuer (4008,0202) LO 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_ID_ISSUER: Tag = Tag(0x4008, 0x0202);
/// Interpretation Type ID (4008,0210) CS 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_TYPE_ID: Tag = Tag(0x4008, 0x0210);
/// Interpretation Status ID (4008,0212) CS 1 (retired)
#[rustfmt::skip]
pub const INTERPRETATION_STATUS_ID: Tag = Tag(0x4008, 0x0212);
/// Impressions (4008,0300) ST 1 (retired)
#[rustfmt::skip]
pub const IMPRESSIONS: Tag = Tag(0x4008, 0x0300);
/// Results Comments (4008,4000) ST 1 (retired)
#[rustfmt::skip]
pub const RESULTS_COMMENTS: Tag = Tag(0x4008, 0x4000);
/// Low Energy Detectors (4010,0001) CS 1
#[rustfmt::skip]
pub const LOW_ENERGY_DETECTORS: Tag = Tag(0x4010, 0x0001);
/// High Energy Detectors (4010,0002) CS 1
#[rustfmt::skip]
pub const HIGH_ENERGY_DETECTORS: Tag = Tag(0x4010, 0x0002);
/// Detector Geometry Sequence (4010,0004) SQ 1
#[rustfmt::skip]
pub const DETECTOR_GEOMETRY_SEQUENCE: Tag = Tag(0x4010, 0x0004);
/// Threat ROI Voxel Sequence (4010,1001) SQ 1
#[rustfmt::skip]
pub const THREAT_ROI_VOXEL_SEQUENCE: Tag = Tag(0x4010, 0x1001);
/// Threat ROI Base (4010,1004) FL 3
#[rustfmt::skip]
pub const THREAT_ROI_BASE: Tag = Tag(0x4010, 0x1004);
/// Threat ROI Extents (4010,1005) FL 3
#[rustfmt::skip]
pub const THREAT_ROI_EXTENTS: Tag = Tag(0x4010, 0x1005);
/// Threat ROI Bitmap (4010,1006) OB 1
#[rustfmt::skip]
pub const THREAT_ROI_BITMAP: Tag = Tag(0x4010, 0x1006);
/// Route Segment ID (4010,1007) SH 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_ID: Tag = Tag(0x4010, 0x1007);
/// Gantry Type (4010,1008) CS 1
#[rustfmt::skip]
pub const GANTRY_TYPE: Tag = Tag(0x4010, 0x1008);
/// OOI Owner Type (4010,1009) CS 1
#[rustfmt::skip]
pub const OOI_OWNER_TYPE: Tag = Tag(0x4010, 0x1009);
/// Route Segment Sequence (4010,100A) SQ 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_SEQUENCE: Tag = Tag(0x4010, 0x100A);
/// Potential Threat Object ID (4010,1010) US 1
#[rustfmt::skip]
pub const POTENTIAL_THREAT_OBJECT_ID: Tag = Tag(0x4010, 0x1010);
/// Threat Sequence (4010,1011) SQ 1
#[rustfmt::skip]
pub const THREAT_SEQUENCE: Tag = Tag(0x4010, 0x1011);
/// Threat Category (4010,1012) CS 1
#[rustfmt::skip]
pub const THREAT_CATEGORY: Tag = Tag(0x4010, 0x1012);
/// Threat Category Description (4010,1013) LT 1
#[rustfmt::skip]
pub const THREAT_CATEGORY_DESCRIPTION: Tag = Tag(0x4010, 0x1013);
/// ATD Ability Assessment (4010,1014) CS 1
#[rustfmt::skip]
pub const ATD_ABILITY_ASSESSMENT: Tag = Tag(0x4010, 0x1014);
/// ATD Assessment Flag (4010,1015) CS 1
#[rustfmt::skip]
pub const ATD_ASSESSMENT_FLAG: Tag = Tag(0x4010, 0x1015);
/// ATD Assessment Probability (4010,1016) FL 1
#[rustfmt::skip]
pub const ATD_ASSESSMENT_PROBABILITY: Tag = Tag(0x4010, 0x1016);
/// Mass (4010,1017) FL 1
#[rustfmt::skip]
pub const MASS: Tag = Tag(0x4010, 0x1017);
/// Density (4010,1018) FL 1
#[rustfmt::skip]
pub const DENSITY: Tag = Tag(0x4010, 0x1018);
/// Z Effective (4010,1019) FL 1
#[rustfmt::skip]
pub const Z_EFFECTIVE: Tag = Tag(0x4010, 0x1019);
/// Boarding Pass ID (4010,101A) SH 1
#[rustfmt::skip]
pub const BOARDING_PASS_ID: Tag = Tag(0x4010, 0x101A);
/// Center of Mass (4010,101B) FL 3
#[rustfmt::skip]
pub const CENTER_OF_MASS: Tag = Tag(0x4010, 0x101B);
/// Center of PTO (4010,101C) FL 3
#[rustfmt::skip]
pub const CENTER_OF_PTO: Tag = Tag(0x4010, 0x101C);
/// Bounding Polygon (4010,101D) FL 6-n
#[rustfmt::skip]
pub const BOUNDING_POLYGON: Tag = Tag(0x4010, 0x101D);
/// Route Segment Start Location ID (4010,101E) SH 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_START_LOCATION_ID: Tag = Tag(0x4010, 0x101E);
/// Route Segment End Location ID (4010,101F) SH 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_END_LOCATION_ID: Tag = Tag(0x4010, 0x101F);
/// Route Segment Location ID Type (4010,1020) CS 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_LOCATION_ID_TYPE: Tag = Tag(0x4010, 0x1020);
/// Abort Reason (4010,1021) CS 1-n
#[rustfmt::skip]
pub const ABORT_REASON: Tag = Tag(0x4010, 0x1021);
/// Volume of PTO (4010,1023) FL 1
#[rustfmt::skip]
pub const VOLUME_OF_PTO: Tag = Tag(0x4010, 0x1023);
/// Abort Flag (4010,1024) CS 1
#[rustfmt::skip]
pub const ABORT_FLAG: Tag = Tag(0x4010, 0x1024);
/// Route Segment Start Time (4010,1025) DT 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_START_TIME: Tag = Tag(0x4010, 0x1025);
/// Route Segment End Time (4010,1026) DT 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_END_TIME: Tag = Tag(0x4010, 0x1026);
/// TDR Type (4010,1027) CS 1
#[rustfmt::skip]
pub const TDR_TYPE: Tag = Tag(0x4010, 0x1027);
/// International Route Segment (4010,1028) CS 1
#[rustfmt::skip]
pub const INTERNATIONAL_ROUTE_SEGMENT: Tag = Tag(0x4010, 0x1028);
/// Threat Detection Algorithm and Version (4010,1029) LO 1-n
#[rustfmt::skip]
pub const THREAT_DETECTION_ALGORITHM_AND_VERSION: Tag = Tag(0x4010, 0x1029);
/// Assigned Location (4010,102A) SH 1
#[rustfmt::skip]
pub const ASSIGNED_LOCATION: Tag = Tag(0x4010, 0x102A);
/// Alarm Decision Time (4010,102B) DT 1
#[rustfmt::skip]
pub const ALARM_DECISION_TIME: Tag = Tag(0x4010, 0x102B);
/// Alarm Decision (4010,1031) CS 1
#[rustfmt::skip]
pub const ALARM_DECISION: Tag = Tag(0x4010, 0x1031);
/// Number of Total Objects (4010,1033) US 1
#[rustfmt::skip]
pub const NUMBER_OF_TOTAL_OBJECTS: Tag = Tag(0x4010, 0x1033);
/// Number of Alarm Objects (4010,1034) US 1
#[rustfmt::skip]
pub const NUMBER_OF_ALARM_OBJECTS: Tag = Tag(0x4010, 0x1034);
/// PTO Representation Sequence (4010,1037) SQ 1
#[rustfmt::skip]
pub const PTO_REPRESENTATION_SEQUENCE: Tag = Tag(0x4010, 0x1037);
/// ATD Assessment Sequence (4010,1038) SQ 1
#[rustfmt::skip]
pub const ATD_ASSESSMENT_SEQUENCE: Tag = Tag(0x4010, 0x1038);
/// TIP Type (4010,1039) CS 1
#[rustfmt::skip]
pub const TIP_TYPE: Tag = Tag(0x4010, 0x1039);
/// DICOS Version (4010,103A) CS 1
#[rustfmt::skip]
pub const DICOS_VERSION: Tag = Tag(0x4010, 0x103A);
/// OOI Owner Creation Time (4010,1041) DT 1
#[rustfmt::skip]
pub const OOI_OWNER_CREATION_TIME: Tag = Tag(0x4010, 0x1041);
/// OOI Type (4010,1042) CS 1
#[rustfmt::skip]
pub const OOI_TYPE: Tag = Tag(0x4010, 0x1042);
/// OOI Size (4010,1043) FL 3
#[rustfmt::skip]
pub const OOI_SIZE: Tag = Tag(0x4010, 0x1043);
/// Acquisition Status (4010,1044) CS 1
#[rustfmt::skip]
pub const ACQUISITION_STATUS: Tag = Tag(0x4010, 0x1044);
/// Basis Materials Code Sequence (4010,1045) SQ 1
#[rustfmt::skip]
pub const BASIS_MATERIALS_CODE_SEQUENCE: Tag = Tag(0x4010, 0x1045);
/// Phantom Type (4010,1046) CS 1
#[rustfmt::skip]
pub const PHANTOM_TYPE: Tag = Tag(0x4010, 0x1046);
/// OOI Owner Sequence (4010,1047) SQ 1
#[rustfmt::skip]
pub const OOI_OWNER_SEQUENCE: Tag = Tag(0x4010, 0x1047);
/// Scan Type (4010,1048) CS 1
#[rustfmt::skip]
pub const SCAN_TYPE: Tag = Tag(0x4010, 0x1048);
/// Itinerary ID (4010,1051) LO 1
#[rustfmt::skip]
pub const ITINERARY_ID: Tag = Tag(0x4010, 0x1051);
/// Itinerary ID Type (4010,1052) SH 1
#[rustfmt::skip]
pub const ITINERARY_ID_TYPE: Tag = Tag(0x4010, 0x1052);
/// Itinerary ID Assigning Authority (4010,1053) LO 1
#[rustfmt::skip]
pub const ITINERARY_ID_ASSIGNING_AUTHORITY: Tag = Tag(0x4010, 0x1053);
/// Route ID (4010,1054) SH 1
#[rustfmt::skip]
pub const ROUTE_ID: Tag = Tag(0x4010, 0x1054);
/// Route ID Assigning Authority (4010,1055) SH 1
#[rustfmt::skip]
pub const ROUTE_ID_ASSIGNING_AUTHORITY: Tag = Tag(0x4010, 0x1055);
/// Inbound Arrival Type (4010,1056) CS 1
#[rustfmt::skip]
pub const INBOUND_ARRIVAL_TYPE: Tag = Tag(0x4010, 0x1056);
/// Carrier ID (4010,1058) SH 1
#[rustfmt::skip]
pub const CARRIER_ID: Tag = Tag(0x4010, 0x1058);
/// Carrier ID Assigning Authority (4010,1059) CS 1
#[rustfmt::skip]
pub const CARRIER_ID_ASSIGNING_AUTHORITY: Tag = Tag(0x4010, 0x1059);
/// Source Orientation (4010,1060) FL 3
#[rustfmt::skip]
pub const SOURCE_ORIENTATION: Tag = Tag(0x4010, 0x1060);
/// Source Position (4010,1061) FL 3
#[rustfmt::skip]
pub const SOURCE_POSITION: Tag = Tag(0x4010, 0x1061);
/// Belt Height (4010,1062) FL 1
#[rustfmt::skip]
pub const BELT_HEIGHT: Tag = Tag(0x4010, 0x1062);
/// Algorithm Routing Code Sequence (4010,1064) SQ 1
#[rustfmt::skip]
pub const ALGORITHM_ROUTING_CODE_SEQUENCE: Tag = Tag(0x4010, 0x1064);
/// Transport Classification (4010,1067) CS 1
#[rustfmt::skip]
pub const TRANSPORT_CLASSIFICATION: Tag = Tag(0x4010, 0x1067);
/// OOI Type Descriptor (4010,1068) LT 1
#[rustfmt::skip]
pub const OOI_TYPE_DESCRIPTOR: Tag = Tag(0x4010, 0x1068);
/// Total Processing Time (4010,1069) FL 1
#[rustfmt::skip]
pub const TOTAL_PROCESSING_TIME: Tag = Tag(0x4010, 0x1069);
/// Detector Calibration Data (4010,106C) OB 1
#[rustfmt::skip]
pub const DETECTOR_CALIBRATION_DATA: Tag = Tag(0x4010, 0x106C);
/// Additional Screening Performed (4010,106D) CS 1
#[rustfmt::skip]
pub const ADDITIONAL_SCREENING_PERFORMED: Tag = Tag(0x4010, 0x106D);
/// Additional Inspection Selection Criteria (4010,106E) CS 1
#[rustfmt::skip]
pub const ADDITIONAL_INSPECTION_SELECTION_CRITERIA: Tag = Tag(0x4010, 0x106E);
/// Additional Inspection Method Sequence (4010,106F) SQ 1
#[rustfmt::skip]
pub const ADDITIONAL_INSPECTION_METHOD_SEQUENCE: Tag = Tag(0x4010, 0x106F);
/// AIT Device Type (4010,1070) CS 1
#[rustfmt::skip]
pub const AIT_DEVICE_TYPE: Tag = Tag(0x4010, 0x1070);
/// QR Measurements Sequence (4010,1071) SQ 1
#[rustfmt::skip]
pub const QR_MEASUREMENTS_SEQUENCE: Tag = Tag(0x4010, 0x1071);
/// Target Material Sequence (4010,1072) SQ 1
#[rustfmt::skip]
pub const TARGET_MATERIAL_SEQUENCE: Tag = Tag(0x4010, 0x1072);
/// SNR Threshold (4010,1073) FD 1
#[rustfmt::skip]
pub const SNR_THRESHOLD: Tag = Tag(0x4010, 0x1073);
/// Image Scale Representation (4010,1075) DS 1
#[rustfmt::skip]
pub const IMAGE_SCALE_REPRESENTATION: Tag = Tag(0x4010, 0x1075);
/// Referenced PTO Sequence (4010,1076) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PTO_SEQUENCE: Tag = Tag(0x4010, 0x1076);
/// Referenced TDR Instance Sequence (4010,1077) SQ 1
#[rustfmt::skip]
pub const REFERENCED_TDR_INSTANCE_SEQUENCE: Tag = Tag(0x4010, 0x1077);
/// PTO Location Description (4010,1078) ST 1
#[rustfmt::skip]
pub const PTO_LOCATION_DESCRIPTION: Tag = Tag(0x4010, 0x1078);
/// Anomaly Locator Indicator Sequence (4010,1079) SQ 1
#[rustfmt::skip]
pub const ANOMALY_LOCATOR_INDICATOR_SEQUENCE: Tag = Tag(0x4010, 0x1079);
/// Anomaly Locator Indicator (4010,107A) FL 3
#[rustfmt::skip]
pub const ANOMALY_LOCATOR_INDICATOR: Tag = Tag(0x4010, 0x107A);
/// PTO Region Sequence (4010,107B) SQ 1
#[rustfmt::skip]
pub const PTO_REGION_SEQUENCE: Tag = Tag(0x4010, 0x107B);
/// Inspection Selection Criteria (4010,107C) CS 1
#[rustfmt::skip]
pub const INSPECTION_SELECTION_CRITERIA: Tag = Tag(0x4010, 0x107C);
/// Secondary Inspection Method Sequence (4010,107D) SQ 1
#[rustfmt::skip]
pub const SECONDARY_INSPECTION_METHOD_SEQUENCE: Tag = Tag(0x4010, 0x107D);
/// PRCS to RCS Orientation (4010,107E) DS 6
#[rustfmt::skip]
pub const PRCS_TO_RCS_ORIENTATION: Tag = Tag(0x4010, 0x107E);
/// MAC Parameters Sequence (4FFE,0001) SQ 1
#[rustfmt::skip]
pub const MAC_PARAMETERS_SEQUENCE: Tag = Tag(0x4FFE, 0x0001);
/// Curve Dimensions (50xx,0005) US 1 (retired)
#[rustfmt::skip]
pub const CURVE_DIMENSIONS: Tag = Tag(0x5000, 0x0005);
/// Number of Points (50xx,0010) US 1 (retired)
#[rustfmt::skip]
pub const NUMBER_OF_POINTS: Tag = Tag(0x5000, 0x0010);
/// Type of Data (50xx,0020) CS 1 (retired)
#[rustfmt::skip]
pub const TYPE_OF_DATA: Tag = Tag(0x5000, 0x0020);
/// Curve Description (50xx,0022) LO 1 (retired)
#[rustfmt::skip]
pub const CURVE_DESCRIPTION: Tag = Tag(0x5000, 0x0022);
/// Axis Units (50xx,0030) SH 1-n (retired)
#[rustfmt::skip]
pub const AXIS_UNITS: Tag = Tag(0x5000, 0x0030);
/// Data Value Representation (50xx,0103) US 1 (retired)
#[rustfmt::skip]
pub const DATA_VALUE_REPRESENTATION: Tag = Tag(0x5000, 0x0103);
/// Curve Data (50xx,3000) OB or OW 1 (retired)
#[rustfmt::skip]
pub const CURVE_DATA: Tag = Tag(0x5000, 0x3000);
/// Shared Functional Groups Sequence (5200,9229) SQ 1
#[rustfmt::skip]
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// Per-Frame Functional Groups Sequence (5200,9230) SQ 1
#[rustfmt::skip]
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// Waveform Sequence (5400,0100) SQ 1
#[rustfmt::skip]
pub const WAVEFORM_SEQUENCE: Tag = Tag(0x5400, 0x0100);
/// Channel Minimum Value (5400,0110) OB or OW 1
#[rustfmt::skip]
pub const CHANNEL_MINIMUM_VALUE: Tag = Tag(0x5400, 0x0110);
/// Channel Maximum Value (5400,0112) OB or OW 1
#[rustfmt::skip]
pub const CHANNEL_MAXIMUM_VALUE: Tag = Tag(0x5400, 0x0112);
/// Waveform Bits Allocated (5400,1004) US 1
#[rustfmt::skip]
pub const WAVEFORM_BITS_ALLOCATED: Tag = Tag(0x5400, 0x1004);
/// Waveform Sample Interpretation (5400,1006) CS 1
#[rustfmt::skip]
pub const WAVEFORM_SAMPLE_INTERPRETATION: Tag = Tag(0x5400, 0x1006);
/// Waveform Sample Value Representation (5400,1008) CS 1 (retired)
#[rustfmt::skip]
pub const WAVEFORM_SAMPLE_VALUE_REPRESENTATION: Tag = Tag(0x5400, 0x1008);
/// Waveform Padding Value (5400,100A) OB or OW 1
#[rustfmt::skip]
pub const WAVEFORM_PADDING_VALUE: Tag = Tag(0x5400, 0x100A);
/// Waveform Data (5400,1010) OB or OW 1
#[rustfmt::skip]
pub const WAVEFORM_DATA: Tag = Tag(0x5400, 0x1010);
/// First Order Phase Correction Angle (5600,0010) OF 1
#[rustfmt::skip]
pub const FIRST_ORDER_PHASE_CORRECTION_ANGLE: Tag = Tag(0x5600, 0x0010);
/// Spectroscopy Data (5600,0020) OF 1
#[rustfmt::skip]
pub const SPECTROSCOPY_DATA: Tag = Tag(0x5600, 0x0020);
/// Overlay Rows (60xx,0010) US 1
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// Overlay Columns (60xx,0011) US 1
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// Overlay Planes (60xx,0012) US 1 (retired)
#[rustfmt::skip]
pub const OVERLAY_PLANES: Tag = Tag(0x6000, 0x0012);
/// Number of Frames in Overlay (60xx,0015) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES_IN_OVERLAY: Tag = Tag(0x6000, 0x0015);
/// Overlay Description (60xx,0022) LO 1
#[rustfmt::skip]
pub const OVERLAY_DESCRIPTION: Tag = Tag(0x6000, 0x0022);
/// Overlay Type (60xx,0040) CS 1
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// Overlay Subtype (60xx,0045) LO 1
#[rustfmt::skip]
pub const OVERLAY_SUBTYPE: Tag = Tag(0x6000, 0x0045);
/// Overlay Origin (60xx,0050) SS 2
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// Image Frame Origin (60xx,0051) US 1
#[rustfmt::skip]
pub const IMAGE_FRAME_ORIGIN: Tag = Tag(0x6000, 0x0051);
/// Overlay Bits Allocated (60xx,0100) US 1
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// Overlay Bit Position (60xx,0102) US 1
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// Overlay Label (60xx,1500) LO 1
#[rustfmt::skip]
pub const OVERLAY_LABEL: Tag = Tag(0x6000, 0x1500);
/// Overlay Data (60xx,3000) OB or OW 1
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// Variable Pixel Data (7Fxx,0010) OB or OW 1 (retired)
#[rustfmt::skip]
pub const VARIABLE_PIXEL_DATA: Tag = Tag(0x7F00, 0x0010);
/// Variable Next Data Group (7Fxx,0011) US 1 (retired)
#[rustfmt::skip]
pub const VARIABLE_NEXT_DATA_GROUP: Tag = Tag(0x7F00, 0x0011);
/// Variable Coefficients SDVN (7Fxx,0020) OW 1-n (retired)
#[rustfmt::skip]
pub const VARIABLE_COEFFICIENTS_SDVN: Tag = Tag(0x7F00, 0x0020);
/// Variable Coefficients SDHN (7Fxx,0030) OW 1-n (retired)
#[rustfmt::skip]
pub const VARIABLE_COEFFICIENTS_SDHN: Tag = Tag(0x7F00, 0x0030);
/// Variable Coefficients SDDN (7Fxx,0040) OW 1-n (retired)
#[rustfmt::skip]
pub const VARIABLE_COEFFICIENTS_SDDN: Tag = Tag(0x7F00, 0x0040);
/// Extended Offset Table (7FE0,0001) OV 1
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// Extended Offset Table Lengths (7FE0,0002) OV 1
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// Encapsulated Pixel Data Value Total Length (7FE0,0003) UV 1
#[rustfmt::skip]
pub const ENCAPSULATED_PIXEL_DATA_VALUE_TOTAL_LENGTH: Tag = Tag(0x7FE0, 0x0003);
/// Float Pixel Data (7FE0,0008) OF 1
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// Double Float Pixel Data (7FE0,0009) OD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// Pixel Data (7FE0,0010) OB or OW 1
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// Coefficients SDVN (7FE0,0020) OW 128 (retired)
#[rustfmt::skip]
pub const COEFFICIENTS_SDVN: Tag = Tag(0x7FE0, 0x0020);
/// Coefficients SDHN (7FE0,0030) OW 128 (retired)
#[rustfmt::skip]
pub const COEFFICIENTS_SDHN: Tag = Tag(0x7FE0, 0x0030);
/// Coefficients SDDN (7FE0,0040) OW 128 (retired)
#[rustfmt::skip]
pub const COEFFICIENTS_SDDN: Tag = Tag(0x7FE0, 0x0040);
/// Digital Signatures Sequence (FFFA,FFFA) SQ 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// Data Set Trailing Padding (FFFC,FFFC) OB 1
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);
/// Item (FFFE,E000)
#[rustfmt::skip]
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// Item Delimitation Item (FFFE,E00D)
#[rustfmt::skip]
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// Sequence Delimitation Item (FFFE,E0DD)
#[rustfmt::skip]
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E::new(Single(COMMAND_GROUP_LENGTH), "CommandGroupLength", "Command Group Length", Exact(UL), Vm::Exact(1), false),
    E::new(Single(COMMAND_LENGTH_TO_END), "CommandLengthToEnd", "Command Length to End", Exact(UL), Vm::Exact(1), true),
    E::new(Single(AFFECTED_SOP_CLASS_UID), "AffectedSOPClassUID", "Affected SOP Class UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(REQUESTED_SOP_CLASS_UID), "RequestedSOPClassUID", "Requested SOP Class UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(COMMAND_RECOGNITION_CODE), "CommandRecognitionCode", "Command Recognition Code", Exact(SH), Vm::Exact(1), true),
    E::new(Single(COMMAND_FIELD), "CommandField", "Command Field", Exact(US), Vm::Exact(1), false),
    E::new(Single(MESSAGE_ID), "MessageID", "Message ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(MESSAGE_ID_BEING_RESPONDED_TO), "MessageIDBeingRespondedTo", "Message ID Being Responded To", Exact(US), Vm::Exact(1), false),
    E::new(Single(INITIATOR), "Initiator", "Initiator", Exact(AE), Vm::Exact(1), true),
    E::new(Single(RECEIVER), "Receiver", "Receiver", Exact(AE), Vm::Exact(1), true),
    E::new(Single(FIND_LOCATION), "FindLocation", "Find Location", Exact(AE), Vm::Exact(1), true),
    E::new(Single(MOVE_DESTINATION), "MoveDestination", "Move Destination", Exact(AE), Vm::Exact(1), false),
    E::new(Single(PRIORITY), "Priority", "Priority", Exact(US), Vm::Exact(1), false),
    E::new(Single(COMMAND_DATA_SET_TYPE), "CommandDataSetType", "Command Data Set Type", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_MATCHES), "NumberOfMatches", "Number of Matches", Exact(US), Vm::Exact(1), true),
    E::new(Single(RESPONSE_SEQUENCE_NUMBER), "ResponseSequenceNumber", "Response Sequence Number", Exact(US), Vm::Exact(1), true),
    E::new(Single(STATUS), "Status", "Status", Exact(US), Vm::Exact(1), false),
    E::new(Single(OFFENDING_ELEMENT), "OffendingElement", "Offending Element", Exact(AT), Vm::AtLeast(1), false),
    E::new(Single(ERROR_COMMENT), "ErrorComment", "Error Comment", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ERROR_ID), "ErrorID", "Error ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(AFFECTED_SOP_INSTANCE_UID), "AffectedSOPInstanceUID", "Affected SOP Instance UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(REQUESTED_SOP_INSTANCE_UID), "RequestedSOPInstanceUID", "Requested SOP Instance UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(EVENT_TYPE_ID), "EventTypeID", "Event Type ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(ATTRIBUTE_IDENTIFIER_LIST), "AttributeIdentifierList", "Attribute Identifier List", Exact(AT), Vm::AtLeast(1), false),
    E::new(Single(ACTION_TYPE_ID), "ActionTypeID", "Action Type ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_REMAINING_SUBOPERATIONS), "NumberOfRemainingSuboperations", "Number of Remaining Sub-operations", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_COMPLETED_SUBOPERATIONS), "NumberOfCompletedSuboperations", "Number of Completed Sub-operations", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_FAILED_SUBOPERATIONS), "NumberOfFailedSuboperations", "Number of Failed Sub-operations", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_WARNING_SUBOPERATIONS), "NumberOfWarningSuboperations", "Number of Warning Sub-operations", Exact(US), Vm::Exact(1), false),
    E::new(Single(MOVE_ORIGINATOR_APPLICATION_ENTITY_TITLE), "MoveOriginatorApplicationEntityTitle", "Move Originator Application Entity Title", Exact(AE), Vm::Exact(1), false),
    E::new(Single(MOVE_ORIGINATOR_MESSAGE_ID), "MoveOriginatorMessageID", "Move Originator Message ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(DIALOG_RECEIVER), "DialogReceiver", "Dialog Receiver", Exact(LT), Vm::Exact(1), true),
    E::new(Single(TERMINAL_TYPE), "TerminalType", "Terminal Type", Exact(LT), Vm::Exact(1), true),
    E::new(Single(MESSAGE_SET_ID), "MessageSetID", "Message Set ID", Exact(SH), Vm::Exact(1), true),
    E::new(Single(END_MESSAGE_ID), "EndMessageID", "End Message ID", Exact(SH), Vm::Exact(1), true),
    E::new(Single(DISPLAY_FORMAT), "DisplayFormat", "Display Format", Exact(LT), Vm::Exact(1), true),
    E::new(Single(PAGE_POSITION_ID), "PagePositionID", "Page Position ID", Exact(LT), Vm::Exact(1), true),
    E::new(Single(TEXT_FORMAT_ID), "TextFormatID", "Text Format ID", Exact(CS), Vm::Exact(1), true),
    E::new(Single(NORMAL_REVERSE), "NormalReverse", "Normal/Reverse", Exact(CS), Vm::Exact(1), true),
    E::new(Single(ADD_GRAY_SCALE), "AddGrayScale", "Add Gray Scale", Exact(CS), Vm::Exact(1), true),
    E::new(Single(BORDERS), "Borders", "Borders", Exact(CS), Vm::Exact(1), true),
    E::new(Single(COPIES), "Copies", "Copies", Exact(IS), Vm::Exact(1), true),
    E::new(Single(COMMAND_MAGNIFICATION_TYPE), "CommandMagnificationType", "Command Magnification Type", Exact(CS), Vm::Exact(1), true),
    E::new(Single(ERASE), "Erase", "Erase", Exact(CS), Vm::Exact(1), true),
    E::new(Single(PRINT), "Print", "Print", Exact(CS), Vm::Exact(1), true),
    E::new(Single(OVERLAYS), "Overlays", "Overlays", Exact(US), Vm::AtLeast(1), true),
    E::new(Single(FILE_META_INFORMATION_GROUP_LENGTH), "FileMetaInformationGroupLength", "File Meta Information Group Length", Exact(UL), Vm::Exact(1), false),
    E::new(Single(FILE_META_INFORMATION_VERSION), "FileMetaInformationVersion", "File Meta Information Version", Exact(OB), Vm::Exact(1), false),
    E::new(Single(MEDIA_STORAGE_SOP_CLASS_UID), "MediaStorageSOPClassUID", "Media Storage SOP Class UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(MEDIA_STORAGE_SOP_INSTANCE_UID), "MediaStorageSOPInstanceUID", "Media Storage SOP Instance UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(TRANSFER_SYNTAX_UID), "TransferSyntaxUID", "Transfer Syntax UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(IMPLEMENTATION_CLASS_UID), "ImplementationClassUID", "Implementation Class UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(IMPLEMENTATION_VERSION_NAME), "ImplementationVersionName", "Implementation Version Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SOURCE_APPLICATION_ENTITY_TITLE), "SourceApplicationEntityTitle", "Source Application Entity Title", Exact(AE), Vm::Exact(1), false),
    E::new(Single(SENDING_APPLICATION_ENTITY_TITLE), "SendingApplicationEntityTitle", "Sending Application Entity Title", Exact(AE), Vm::Exact(1), false),
    E::new(Single(RECEIVING_APPLICATION_ENTITY_TITLE), "ReceivingApplicationEntityTitle", "Receiving Application Entity Title", Exact(AE), Vm::Exact(1), false),
    E::new(Single(SOURCE_PRESENTATION_ADDRESS), "SourcePresentationAddress", "Source Presentation Address", Exact(UR), Vm::Exact(1), false),
    E::new(Single(SENDING_PRESENTATION_ADDRESS), "SendingPresentationAddress", "Sending Presentation Address", Exact(UR), Vm::Exact(1), false),
    E::new(Single(RECEIVING_PRESENTATION_ADDRESS), "ReceivingPresentationAddress", "Receiving Presentation Address", Exact(UR), Vm::Exact(1), false),
    E::new(Single(RTV_META_INFORMATION_VERSION), "RTVMetaInformationVersion", "RTV Meta Information Version", Exact(OB), Vm::Exact(1), false),
    E::new(Single(RTV_COMMUNICATION_SOP_CLASS_UID), "RTVCommunicationSOPClassUID", "RTV Communication SOP Class UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(RTV_COMMUNICATION_SOP_INSTANCE_UID), "RTVCommunicationSOPInstanceUID", "RTV Communication SOP Instance UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(RTV_SOURCE_IDENTIFIER), "RTVSourceIdentifier", "RTV Source Identifier", Exact(OB), Vm::Exact(1), false),
    E::new(Single(RTV_FLOW_IDENTIFIER), "RTVFlowIdentifier", "RTV Flow Identifier", Exact(OB), Vm::Exact(1), false),
    E::new(Single(RTV_FLOW_RTP_SAMPLING_RATE), "RTVFlowRTPSamplingRate", "RTV Flow RTP Sampling Rate", Exact(UL), Vm::Exact(1), false),
    E::new(Single(RTV_FLOW_ACTUAL_FRAME_DURATION), "RTVFlowActualFrameDuration", "RTV Flow Actual Frame Duration", Exact(FD), Vm::Exact(1), false),
    E::new(Single(PRIVATE_INFORMATION_CREATOR_UID), "PrivateInformationCreatorUID", "Private Information Creator UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(PRIVATE_INFORMATION), "PrivateInformation", "Private Information", Exact(OB), Vm::Exact(1), false),
    E::new(Single(FILE_SET_ID), "FileSetID", "File-set ID", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FILE_SET_DESCRIPTOR_FILE_ID), "FileSetDescriptorFileID", "File-set Descriptor File ID", Exact(CS), Vm::Bounded(1, 8), false),
    E::new(Single(SPECIFIC_CHARACTER_SET_OF_FILE_SET_DESCRIPTOR_FILE), "SpecificCharacterSetOfFileSetDescriptorFile", "Specific Character Set of File-set Descriptor File", Exact(CS), Vm::Exact(1), false),
    E::new(Single(OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY), "OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity", "Offset of the First Directory Record of the Root Directory Entity", Exact(UL), Vm::Exact(1), false),
    E::new(Single(OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY), "OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity", "Offset of the Last Directory Record of the Root Directory Entity", Exact(UL), Vm::Exact(1), false),
    E::new(Single(FILE_SET_CONSISTENCY_FLAG), "FileSetConsistencyFlag", "File-set Consistency Flag", Exact(US), Vm::Exact(1), false),
    E::new(Single(DIRECTORY_RECORD_SEQUENCE), "DirectoryRecordSequence", "Directory Record Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OFFSET_OF_THE_NEXT_DIRECTORY_RECORD), "OffsetOfTheNextDirectoryRecord", "Offset of the Next Directory Record", Exact(UL), Vm::Exact(1), false),
    E::new(Single(RECORD_IN_USE_FLAG), "RecordInUseFlag", "Record In-use Flag", Exact(US), Vm::Exact(1), false),
    E::new(Single(OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY), "OffsetOfReferencedLowerLevelDirectoryEntity", "Offset of Referenced Lower-Level Directory Entity", Exact(UL), Vm::Exact(1), false),
    E::new(Single(DIRECTORY_RECORD_TYPE), "DirectoryRecordType", "Directory Record Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRIVATE_RECORD_UID), "PrivateRecordUID", "Private Record UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(REFERENCED_FILE_ID), "ReferencedFileID", "Referenced File ID", Exact(CS), Vm::Bounded(1, 8), false),
    E::new(Single(MRDR_DIRECTORY_RECORD_OFFSET), "MRDRDirectoryRecordOffset", "MRDR Directory Record Offset", Exact(UL), Vm::Exact(1), true),
    E::new(Single(REFERENCED_SOP_CLASS_UID_IN_FILE), "ReferencedSOPClassUIDInFile", "Referenced SOP Class UID in File", Exact(UI), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SOP_INSTANCE_UID_IN_FILE), "ReferencedSOPInstanceUIDInFile", "Referenced SOP Instance UID in File", Exact(UI), Vm::Exact(1), false),
    E::new(Single(REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE), "ReferencedTransferSyntaxUIDInFile", "Referenced Transfer Syntax UID in File", Exact(UI), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RELATED_GENERAL_SOP_CLASS_UID_IN_FILE), "ReferencedRelatedGeneralSOPClassUIDInFile", "Referenced Related General SOP Class UID in File", Exact(UI), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_REFERENCES), "NumberOfReferences", "Number of References", Exact(UL), Vm::Exact(1), true),
    E::new(Single(CURRENT_FRAME_FUNCTIONAL_GROUPS_SEQUENCE), "CurrentFrameFunctionalGroupsSequence", "Current Frame Functional Groups Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LENGTH_TO_END), "LengthToEnd", "Length to End", Exact(UL), Vm::Exact(1), true),
    E::new(Single(SPECIFIC_CHARACTER_SET), "SpecificCharacterSet", "Specific Character Set", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(LANGUAGE_CODE_SEQUENCE), "LanguageCodeSequence", "Language Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_TYPE), "ImageType", "Image Type", Exact(CS), Vm::AtLeast(2), false),
    E::new(Single(RECOGNITION_CODE), "RecognitionCode", "Recognition Code", Exact(SH), Vm::Exact(1), true),
    E::new(Single(INSTANCE_CREATION_DATE), "InstanceCreationDate", "Instance Creation Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(INSTANCE_CREATION_TIME), "InstanceCreationTime", "Instance Creation Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(INSTANCE_CREATOR_UID), "InstanceCreatorUID", "Instance Creator UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(INSTANCE_COERCION_DATE_TIME), "InstanceCoercionDateTime", "Instance Coercion DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(SOP_CLASS_UID), "SOPClassUID", "SOP Class UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_UID), "AcquisitionUID", "Acquisition UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(SOP_INSTANCE_UID), "SOPInstanceUID", "SOP Instance UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(PYRAMID_UID), "PyramidUID", "Pyramid UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(RELATED_GENERAL_SOP_CLASS_UID), "RelatedGeneralSOPClassUID", "Related General SOP Class UID", Exact(UI), Vm::AtLeast(1), false),
    E::new(Single(ORIGINAL_SPECIALIZED_SOP_CLASS_UID), "OriginalSpecializedSOPClassUID", "Original Specialized SOP Class UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(STUDY_DATE), "StudyDate", "Study Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(SERIES_DATE), "SeriesDate", "Series Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_DATE), "AcquisitionDate", "Acquisition Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(CONTENT_DATE), "ContentDate", "Content Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(OVERLAY_DATE), "OverlayDate", "Overlay Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(CURVE_DATE), "CurveDate", "Curve Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(ACQUISITION_DATE_TIME), "AcquisitionDateTime", "Acquisition DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(STUDY_TIME), "StudyTime", "Study Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(SERIES_TIME), "SeriesTime", "Series Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_TIME), "AcquisitionTime", "Acquisition Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(CONTENT_TIME), "ContentTime", "Content Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(OVERLAY_TIME), "OverlayTime", "Overlay Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(CURVE_TIME), "CurveTime", "Curve Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(DATA_SET_TYPE), "DataSetType", "Data Set Type", Exact(US), Vm::Exact(1), true),
    E::new(Single(DATA_SET_SUBTYPE), "DataSetSubtype", "Data Set Subtype", Exact(LO), Vm::Exact(1), true),
    E::new(Single(NUCLEAR_MEDICINE_SERIES_TYPE), "NuclearMedicineSeriesType", "Nuclear Medicine Series Type", Exact(CS), Vm::Exact(1), true),
    E::new(Single(ACCESSION_NUMBER), "AccessionNumber", "Accession Number", Exact(SH), Vm::Exact(1), false),
    E::new(Single(ISSUER_OF_ACCESSION_NUMBER_SEQUENCE), "IssuerOfAccessionNumberSequence", "Issuer of Accession Number Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(QUERY_RETRIEVE_LEVEL), "QueryRetrieveLevel", "Query/Retrieve Level", Exact(CS), Vm::Exact(1), false),
    E::new(Single(QUERY_RETRIEVE_VIEW), "QueryRetrieveView", "Query/Retrieve View", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RETRIEVE_AE_TITLE), "RetrieveAETitle", "Retrieve AE Title", Exact(AE), Vm::AtLeast(1), false),
    E::new(Single(STATION_AE_TITLE), "StationAETitle", "Station AE Title", Exact(AE), Vm::Exact(1), false),
    E::new(Single(INSTANCE_AVAILABILITY), "InstanceAvailability", "Instance Availability", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FAILED_SOP_INSTANCE_UID_LIST), "FailedSOPInstanceUIDList", "Failed SOP Instance UID List", Exact(UI), Vm::AtLeast(1), false),
    E::new(Single(MODALITY), "Modality", "Modality", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MODALITIES_IN_STUDY), "ModalitiesInStudy", "Modalities in Study", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(SOP_CLASSES_IN_STUDY), "SOPClassesInStudy", "SOP Classes in Study", Exact(UI), Vm::AtLeast(1), false),
    E::new(Single(ANATOMIC_REGIONS_IN_STUDY_CODE_SEQUENCE), "AnatomicRegionsInStudyCodeSequence", "Anatomic Regions in Study Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONVERSION_TYPE), "ConversionType", "Conversion Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_INTENT_TYPE), "PresentationIntentType", "Presentation Intent Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MANUFACTURER), "Manufacturer", "Manufacturer", Exact(LO), Vm::Exact(1), false),
    E::new(Single(INSTITUTION_NAME), "InstitutionName", "Institution Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(INSTITUTION_ADDRESS), "InstitutionAddress", "Institution Address", Exact(ST), Vm::Exact(1), false),
    E::new(Single(INSTITUTION_CODE_SEQUENCE), "InstitutionCodeSequence", "Institution Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERRING_PHYSICIAN_NAME), "ReferringPhysicianName", "Referring Physician's Name", Exact(PN), Vm::Exact(1), false),
    E::new(Single(REFERRING_PHYSICIAN_ADDRESS), "ReferringPhysicianAddress", "Referring Physician's Address", Exact(ST), Vm::Exact(1), false),
    E::new(Single(REFERRING_PHYSICIAN_TELEPHONE_NUMBERS), "ReferringPhysicianTelephoneNumbers", "Referring Physician's Telephone Numbers", Exact(SH), Vm::AtLeast(1), false),
    E::new(Single(REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE), "ReferringPhysicianIdentificationSequence", "Referring Physician Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONSULTING_PHYSICIAN_NAME), "ConsultingPhysicianName", "Consulting Physician's Name", Exact(PN), Vm::AtLeast(1), false),
    E::new(Single(CONSULTING_PHYSICIAN_IDENTIFICATION_SEQUENCE), "ConsultingPhysicianIdentificationSequence", "Consulting Physician Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CODE_VALUE), "CodeValue", "Code Value", Exact(SH), Vm::Exact(1), false),
    E::new(Single(CODING_SCHEME_DESIGNATOR), "CodingSchemeDesignator", "Coding Scheme Designator", Exact(SH), Vm::Exact(1), false),
    E::new(Single(CODING_SCHEME_VERSION), "CodingSchemeVersion", "Coding Scheme Version", Exact(SH), Vm::Exact(1), false),
    E::new(Single(CODE_MEANING), "CodeMeaning", "Code Meaning", Exact(LO), Vm::Exact(1), false),
    E::new(Single(MAPPING_RESOURCE), "MappingResource", "Mapping Resource", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONTEXT_GROUP_VERSION), "ContextGroupVersion", "Context Group Version", Exact(DT), Vm::Exact(1), false),
    E::new(Single(CONTEXT_GROUP_LOCAL_VERSION), "ContextGroupLocalVersion", "Context Group Local Version", Exact(DT), Vm::Exact(1), false),
    E::new(Single(CONTEXT_GROUP_EXTENSION_FLAG), "ContextGroupExtensionFlag", "Context Group Extension Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CODING_SCHEME_UID), "CodingSchemeUID", "Coding Scheme UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(CONTEXT_GROUP_EXTENSION_CREATOR_UID), "ContextGroupExtensionCreatorUID", "Context Group Extension Creator UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(CONTEXT_IDENTIFIER), "ContextIdentifier", "Context Identifier", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CODING_SCHEME_IDENTIFICATION_SEQUENCE), "CodingSchemeIdentificationSequence", "Coding Scheme Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CODING_SCHEME_REGISTRY), "CodingSchemeRegistry", "Coding Scheme Registry", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CODING_SCHEME_EXTERNAL_ID), "CodingSchemeExternalID", "Coding Scheme External ID", Exact(ST), Vm::Exact(1), false),
    E::new(Single(CODING_SCHEME_NAME), "CodingSchemeName", "Coding Scheme Name", Exact(ST), Vm::Exact(1), false),
    E::new(Single(CODING_SCHEME_RESPONSIBLE_ORGANIZATION), "CodingSchemeResponsibleOrganization", "Coding Scheme Responsible Organization", Exact(ST), Vm::Exact(1), false),
    E::new(Single(CONTEXT_UID), "ContextUID", "Context UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(MAPPING_RESOURCE_UID), "MappingResourceUID", "Mapping Resource UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(LONG_CODE_VALUE), "LongCodeValue", "Long Code Value", Exact(UC), Vm::Exact(1), false),
    E::new(Single(URN_CODE_VALUE), "URNCodeValue", "URN Code Value", Exact(UR), Vm::Exact(1), false),
    E::new(Single(EQUIVALENT_CODE_SEQUENCE), "EquivalentCodeSequence", "Equivalent Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MAPPING_RESOURCE_NAME), "MappingResourceName", "Mapping Resource Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CONTEXT_GROUP_IDENTIFICATION_SEQUENCE), "ContextGroupIdentificationSequence", "Context Group Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MAPPING_RESOURCE_IDENTIFICATION_SEQUENCE), "MappingResourceIdentificationSequence", "Mapping Resource Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TIMEZONE_OFFSET_FROM_UTC), "TimezoneOffsetFromUTC", "Timezone Offset From UTC", Exact(SH), Vm::Exact(1), false),
    E::new(Single(PRIVATE_DATA_ELEMENT_CHARACTERISTICS_SEQUENCE), "PrivateDataElementCharacteristicsSequence", "Private Data Element Characteristics Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRIVATE_GROUP_REFERENCE), "PrivateGroupReference", "Private Group Reference", Exact(US), Vm::Exact(1), false),
    E::new(Single(PRIVATE_CREATOR_REFERENCE), "PrivateCreatorReference", "Private Creator Reference", Exact(LO), Vm::Exact(1), false),
    E::new(Single(BLOCK_IDENTIFYING_INFORMATION_STATUS), "BlockIdentifyingInformationStatus", "Block Identifying Information Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NONIDENTIFYING_PRIVATE_ELEMENTS), "NonidentifyingPrivateElements", "Nonidentifying Private Elements", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(DEIDENTIFICATION_ACTION_SEQUENCE), "DeidentificationActionSequence", "Deidentification Action Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IDENTIFYING_PRIVATE_ELEMENTS), "IdentifyingPrivateElements", "Identifying Private Elements", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(DEIDENTIFICATION_ACTION), "DeidentificationAction", "Deidentification Action", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRIVATE_DATA_ELEMENT), "PrivateDataElement", "Private Data Element", Exact(US), Vm::Exact(1), false),
    E::new(Single(PRIVATE_DATA_ELEMENT_VALUE_MULTIPLICITY), "PrivateDataElementValueMultiplicity", "Private Data Element Value Multiplicity", Exact(UL), Vm::Bounded(1, 3), false),
    E::new(Single(PRIVATE_DATA_ELEMENT_VALUE_REPRESENTATION), "PrivateDataElementValueRepresentation", "Private Data Element Value Representation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRIVATE_DATA_ELEMENT_NUMBER_OF_ITEMS), "PrivateDataElementNumberOfItems", "Private Data Element Number of Items", Exact(UL), Vm::Bounded(1, 2), false),
    E::new(Single(PRIVATE_DATA_ELEMENT_NAME), "PrivateDataElementName", "Private Data Element Name", Exact(UC), Vm::Exact(1), false),
    E::new(Single(PRIVATE_DATA_ELEMENT_KEYWORD), "PrivateDataElementKeyword", "Private Data Element Keyword", Exact(UC), Vm::Exact(1), false),
    E::new(Single(PRIVATE_DATA_ELEMENT_DESCRIPTION), "PrivateDataElementDescription", "Private Data Element Description", Exact(UT), Vm::Exact(1), false),
    E::new(Single(PRIVATE_DATA_ELEMENT_ENCODING), "PrivateDataElementEncoding", "Private Data Element Encoding", Exact(UT), Vm::Exact(1), false),
    E::new(Single(PRIVATE_DATA_ELEMENT_DEFINITION_SEQUENCE), "PrivateDataElementDefinitionSequence", "Private Data Element Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NETWORK_ID), "NetworkID", "Network ID", Exact(AE), Vm::Exact(1), true),
    E::new(Single(STATION_NAME), "StationName", "Station Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(STUDY_DESCRIPTION), "StudyDescription", "Study Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PROCEDURE_CODE_SEQUENCE), "ProcedureCodeSequence", "Procedure Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SERIES_DESCRIPTION), "SeriesDescription", "Series Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SERIES_DESCRIPTION_CODE_SEQUENCE), "SeriesDescriptionCodeSequence", "Series Description Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INSTITUTIONAL_DEPARTMENT_NAME), "InstitutionalDepartmentName", "Institutional Department Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PHYSICIANS_OF_RECORD), "PhysiciansOfRecord", "Physician(s) of Record", Exact(PN), Vm::AtLeast(1), false),
    E::new(Single(PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE), "PhysiciansOfRecordIdentificationSequence", "Physicians of Record Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PERFORMING_PHYSICIAN_NAME), "PerformingPhysicianName", "Performing Physician's Name", Exact(PN), Vm::AtLeast(1), false),
    E::new(Single(PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE), "PerformingPhysicianIdentificationSequence", "Performing Physician Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NAME_OF_PHYSICIANS_READING_STUDY), "NameOfPhysiciansReadingStudy", "Name of Physician(s) Reading Study", Exact(PN), Vm::AtLeast(1), false),
    E::new(Single(PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE), "PhysiciansReadingStudyIdentificationSequence", "Physicians Reading Study Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OPERATORS_NAME), "OperatorsName", "Operators' Name", Exact(PN), Vm::AtLeast(1), false),
    E::new(Single(OPERATOR_IDENTIFICATION_SEQUENCE), "OperatorIdentificationSequence", "Operator Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ADMITTING_DIAGNOSES_DESCRIPTION), "AdmittingDiagnosesDescription", "Admitting Diagnoses Description", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(ADMITTING_DIAGNOSES_CODE_SEQUENCE), "AdmittingDiagnosesCodeSequence", "Admitting Diagnoses Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PYRAMID_DESCRIPTION), "PyramidDescription", "Pyramid Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(MANUFACTURER_MODEL_NAME), "ManufacturerModelName", "Manufacturer's Model Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RESULTS_SEQUENCE), "ReferencedResultsSequence", "Referenced Results Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REFERENCED_STUDY_SEQUENCE), "ReferencedStudySequence", "Referenced Study Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE), "ReferencedPerformedProcedureStepSequence", "Referenced Performed Procedure Step Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_INSTANCES_BY_SOP_CLASS_SEQUENCE), "ReferencedInstancesBySOPClassSequence", "Referenced Instances by SOP Class Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SERIES_SEQUENCE), "ReferencedSeriesSequence", "Referenced Series Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_PATIENT_SEQUENCE), "ReferencedPatientSequence", "Referenced Patient Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_VISIT_SEQUENCE), "ReferencedVisitSequence", "Referenced Visit Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_OVERLAY_SEQUENCE), "ReferencedOverlaySequence", "Referenced Overlay Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REFERENCED_STEREOMETRIC_INSTANCE_SEQUENCE), "ReferencedStereometricInstanceSequence", "Referenced Stereometric Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_WAVEFORM_SEQUENCE), "ReferencedWaveformSequence", "Referenced Waveform Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_IMAGE_SEQUENCE), "ReferencedImageSequence", "Referenced Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_CURVE_SEQUENCE), "ReferencedCurveSequence", "Referenced Curve Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REFERENCED_INSTANCE_SEQUENCE), "ReferencedInstanceSequence", "Referenced Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_REAL_WORLD_VALUE_MAPPING_INSTANCE_SEQUENCE), "ReferencedRealWorldValueMappingInstanceSequence", "Referenced Real World Value Mapping Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SOP_CLASS_UID), "ReferencedSOPClassUID", "Referenced SOP Class UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SOP_INSTANCE_UID), "ReferencedSOPInstanceUID", "Referenced SOP Instance UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(DEFINITION_SOURCE_SEQUENCE), "DefinitionSourceSequence", "Definition Source Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SOP_CLASSES_SUPPORTED), "SOPClassesSupported", "SOP Classes Supported", Exact(UI), Vm::AtLeast(1), false),
    E::new(Single(REFERENCED_FRAME_NUMBER), "ReferencedFrameNumber", "Referenced Frame Number", Exact(IS), Vm::AtLeast(1), false),
    E::new(Single(SIMPLE_FRAME_LIST), "SimpleFrameList", "Simple Frame List", Exact(UL), Vm::AtLeast(1), false),
    E::new(Single(CALCULATED_FRAME_LIST), "CalculatedFrameList", "Calculated Frame List", Exact(UL), Vm::MultipleOf(3), false),
    E::new(Single(TIME_RANGE), "TimeRange", "Time Range", Exact(FD), Vm::Exact(2), false),
    E::new(Single(FRAME_EXTRACTION_SEQUENCE), "FrameExtractionSequence", "Frame Extraction Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MULTI_FRAME_SOURCE_SOP_INSTANCE_UID), "MultiFrameSourceSOPInstanceUID", "Multi-frame Source SOP Instance UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(RETRIEVE_URL), "RetrieveURL", "Retrieve URL", Exact(UR), Vm::Exact(1), false),
    E::new(Single(TRANSACTION_UID), "TransactionUID", "Transaction UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(WARNING_REASON), "WarningReason", "Warning Reason", Exact(US), Vm::Exact(1), false),
    E::new(Single(FAILURE_REASON), "FailureReason", "Failure Reason", Exact(US), Vm::Exact(1), false),
    E::new(Single(FAILED_SOP_SEQUENCE), "FailedSOPSequence", "Failed SOP Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SOP_SEQUENCE), "ReferencedSOPSequence", "Referenced SOP Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OTHER_FAILURES_SEQUENCE), "OtherFailuresSequence", "Other Failures Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FAILED_STUDY_SEQUENCE), "FailedStudySequence", "Failed Study Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(STUDIES_CONTAINING_OTHER_REFERENCED_INSTANCES_SEQUENCE), "StudiesContainingOtherReferencedInstancesSequence", "Studies Containing Other Referenced Instances Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RELATED_SERIES_SEQUENCE), "RelatedSeriesSequence", "Related Series Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LOSSY_IMAGE_COMPRESSION_RETIRED), "LossyImageCompressionRetired", "Lossy Image Compression (Retired)", Exact(CS), Vm::Exact(1), true),
    E::new(Single(DERIVATION_DESCRIPTION), "DerivationDescription", "Derivation Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(SOURCE_IMAGE_SEQUENCE), "SourceImageSequence", "Source Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(STAGE_NAME), "StageName", "Stage Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(STAGE_NUMBER), "StageNumber", "Stage Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_STAGES), "NumberOfStages", "Number of Stages", Exact(IS), Vm::Exact(1), false),
    E::new(Single(VIEW_NAME), "ViewName", "View Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(VIEW_NUMBER), "ViewNumber", "View Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_EVENT_TIMERS), "NumberOfEventTimers", "Number of Event Timers", Exact(IS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_VIEWS_IN_STAGE), "NumberOfViewsInStage", "Number of Views in Stage", Exact(IS), Vm::Exact(1), false),
    E::new(Single(EVENT_ELAPSED_TIMES), "EventElapsedTimes", "Event Elapsed Time(s)", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(EVENT_TIMER_NAMES), "EventTimerNames", "Event Timer Name(s)", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(EVENT_TIMER_SEQUENCE), "EventTimerSequence", "Event Timer Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(EVENT_TIME_OFFSET), "EventTimeOffset", "Event Time Offset", Exact(FD), Vm::Exact(1), false),
    E::new(Single(EVENT_CODE_SEQUENCE), "EventCodeSequence", "Event Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(START_TRIM), "StartTrim", "Start Trim", Exact(IS), Vm::Exact(1), false),
    E::new(Single(STOP_TRIM), "StopTrim", "Stop Trim", Exact(IS), Vm::Exact(1), false),
    E::new(Single(RECOMMENDED_DISPLAY_FRAME_RATE), "RecommendedDisplayFrameRate", "Recommended Display Frame Rate", Exact(IS), Vm::Exact(1), false),
    E::new(Single(TRANSDUCER_POSITION), "TransducerPosition", "Transducer Position", Exact(CS), Vm::Exact(1), true),
    E::new(Single(TRANSDUCER_ORIENTATION), "TransducerOrientation", "Transducer Orientation", Exact(CS), Vm::Exact(1), true),
    E::new(Single(ANATOMIC_STRUCTURE), "AnatomicStructure", "Anatomic Structure", Exact(CS), Vm::Exact(1), true),
    E::new(Single(ANATOMIC_REGION_SEQUENCE), "AnatomicRegionSequence", "Anatomic Region Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ANATOMIC_REGION_MODIFIER_SEQUENCE), "AnatomicRegionModifierSequence", "Anatomic Region Modifier Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRIMARY_ANATOMIC_STRUCTURE_SEQUENCE), "PrimaryAnatomicStructureSequence", "Primary Anatomic Structure Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ANATOMIC_STRUCTURE_SPACE_OR_REGION_SEQUENCE), "AnatomicStructureSpaceOrRegionSequence", "Anatomic Structure, Space or Region Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(PRIMARY_ANATOMIC_STRUCTURE_MODIFIER_SEQUENCE), "PrimaryAnatomicStructureModifierSequence", "Primary Anatomic Structure Modifier Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TRANSDUCER_POSITION_SEQUENCE), "TransducerPositionSequence", "Transducer Position Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(TRANSDUCER_POSITION_MODIFIER_SEQUENCE), "TransducerPositionModifierSequence", "Transducer Position Modifier Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(TRANSDUCER_ORIENTATION_SEQUENCE), "TransducerOrientationSequence", "Transducer Orientation Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(TRANSDUCER_ORIENTATION_MODIFIER_SEQUENCE), "TransducerOrientationModifierSequence", "Transducer Orientation Modifier Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(ANATOMIC_STRUCTURE_SPACE_OR_REGION_CODE_SEQUENCE_TRIAL), "AnatomicStructureSpaceOrRegionCodeSequenceTrial", "Anatomic Structure Space Or Region Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(ANATOMIC_PORTAL_OF_ENTRANCE_CODE_SEQUENCE_TRIAL), "AnatomicPortalOfEntranceCodeSequenceTrial", "Anatomic Portal Of Entrance Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(ANATOMIC_APPROACH_DIRECTION_CODE_SEQUENCE_TRIAL), "AnatomicApproachDirectionCodeSequenceTrial", "Anatomic Approach Direction Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(ANATOMIC_PERSPECTIVE_DESCRIPTION_TRIAL), "AnatomicPerspectiveDescriptionTrial", "Anatomic Perspective Description (Trial)", Exact(ST), Vm::Exact(1), true),
    E::new(Single(ANATOMIC_PERSPECTIVE_CODE_SEQUENCE_TRIAL), "AnatomicPerspectiveCodeSequenceTrial", "Anatomic Perspective Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(ANATOMIC_LOCATION_OF_EXAMINING_INSTRUMENT_DESCRIPTION_TRIAL), "AnatomicLocationOfExaminingInstrumentDescriptionTrial", "Anatomic Location Of Examining Instrument Description (Trial)", Exact(ST), Vm::Exact(1), true),
    E::new(Single(ANATOMIC_LOCATION_OF_EXAMINING_INSTRUMENT_CODE_SEQUENCE_TRIAL), "AnatomicLocationOfExaminingInstrumentCodeSequenceTrial", "Anatomic Location Of Examining Instrument Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(ANATOMIC_STRUCTURE_SPACE_OR_REGION_MODIFIER_CODE_SEQUENCE_TRIAL), "AnatomicStructureSpaceOrRegionModifierCodeSequenceTrial", "Anatomic Structure Space Or Region Modifier Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(ON_AXIS_BACKGROUND_ANATOMIC_STRUCTURE_CODE_SEQUENCE_TRIAL), "OnAxisBackgroundAnatomicStructureCodeSequenceTrial", "On Axis Background Anatomic Structure Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(ALTERNATE_REPRESENTATION_SEQUENCE), "AlternateRepresentationSequence", "Alternate Representation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(AVAILABLE_TRANSFER_SYNTAX_UID), "AvailableTransferSyntaxUID", "Available Transfer Syntax UID", Exact(UI), Vm::AtLeast(1), false),
    E::new(Single(IRRADIATION_EVENT_UID), "IrradiationEventUID", "Irradiation Event UID", Exact(UI), Vm::AtLeast(1), false),
    E::new(Single(SOURCE_IRRADIATION_EVENT_SEQUENCE), "SourceIrradiationEventSequence", "Source Irradiation Event Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIOPHARMACEUTICAL_ADMINISTRATION_EVENT_UID), "RadiopharmaceuticalAdministrationEventUID", "Radiopharmaceutical Administration Event UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(IDENTIFYING_COMMENTS), "IdentifyingComments", "Identifying Comments", Exact(LT), Vm::Exact(1), true),
    E::new(Single(FRAME_TYPE), "FrameType", "Frame Type", Exact(CS), Vm::MultipleOf(4), false),
    E::new(Single(REFERENCED_IMAGE_EVIDENCE_SEQUENCE), "ReferencedImageEvidenceSequence", "Referenced Image Evidence Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RAW_DATA_SEQUENCE), "ReferencedRawDataSequence", "Referenced Raw Data Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CREATOR_VERSION_UID), "CreatorVersionUID", "Creator-Version UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(DERIVATION_IMAGE_SEQUENCE), "DerivationImageSequence", "Derivation Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SOURCE_IMAGE_EVIDENCE_SEQUENCE), "SourceImageEvidenceSequence", "Source Image Evidence Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PIXEL_PRESENTATION), "PixelPresentation", "Pixel Presentation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(VOLUMETRIC_PROPERTIES), "VolumetricProperties", "Volumetric Properties", Exact(CS), Vm::Exact(1), false),
    E::new(Single(VOLUME_BASED_CALCULATION_TECHNIQUE), "VolumeBasedCalculationTechnique", "Volume Based Calculation Technique", Exact(CS), Vm::Exact(1), false),
    E::new(Single(COMPLEX_IMAGE_COMPONENT), "ComplexImageComponent", "Complex Image Component", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_CONTRAST), "AcquisitionContrast", "Acquisition Contrast", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DERIVATION_CODE_SEQUENCE), "DerivationCodeSequence", "Derivation Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_PRESENTATION_STATE_SEQUENCE), "ReferencedPresentationStateSequence", "Referenced Presentation State Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_OTHER_PLANE_SEQUENCE), "ReferencedOtherPlaneSequence", "Referenced Other Plane Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FRAME_DISPLAY_SEQUENCE), "FrameDisplaySequence", "Frame Display Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECOMMENDED_DISPLAY_FRAME_RATE_IN_FLOAT), "RecommendedDisplayFrameRateInFloat", "Recommended Display Frame Rate in Float", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SKIP_FRAME_RANGE_FLAG), "SkipFrameRangeFlag", "Skip Frame Range Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATIENT_NAME), "PatientName", "Patient's Name", Exact(PN), Vm::Exact(1), false),
    E::new(Single(PATIENT_ID), "PatientID", "Patient ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ISSUER_OF_PATIENT_ID), "IssuerOfPatientID", "Issuer of Patient ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(TYPE_OF_PATIENT_ID), "TypeOfPatientID", "Type of Patient ID", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ISSUER_OF_PATIENT_ID_QUALIFIERS_SEQUENCE), "IssuerOfPatientIDQualifiersSequence", "Issuer of Patient ID Qualifiers Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SOURCE_PATIENT_GROUP_IDENTIFICATION_SEQUENCE), "SourcePatientGroupIdentificationSequence", "Source Patient Group Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GROUP_OF_PATIENTS_IDENTIFICATION_SEQUENCE), "GroupOfPatientsIdentificationSequence", "Group of Patients Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SUBJECT_RELATIVE_POSITION_IN_IMAGE), "SubjectRelativePositionInImage", "Subject Relative Position in Image", Exact(US), Vm::Exact(3), false),
    E::new(Single(PATIENT_BIRTH_DATE), "PatientBirthDate", "Patient's Birth Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(PATIENT_BIRTH_TIME), "PatientBirthTime", "Patient's Birth Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(PATIENT_BIRTH_DATE_IN_ALTERNATIVE_CALENDAR), "PatientBirthDateInAlternativeCalendar", "Patient's Birth Date in Alternative Calendar", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_DEATH_DATE_IN_ALTERNATIVE_CALENDAR), "PatientDeathDateInAlternativeCalendar", "Patient's Death Date in Alternative Calendar", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_ALTERNATIVE_CALENDAR), "PatientAlternativeCalendar", "Patient's Alternative Calendar", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATIENT_SEX), "PatientSex", "Patient's Sex", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATIENT_INSURANCE_PLAN_CODE_SEQUENCE), "PatientInsurancePlanCodeSequence", "Patient's Insurance Plan Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE), "PatientPrimaryLanguageCodeSequence", "Patient's Primary Language Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE), "PatientPrimaryLanguageModifierCodeSequence", "Patient's Primary Language Modifier Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(QUALITY_CONTROL_SUBJECT), "QualityControlSubject", "Quality Control Subject", Exact(CS), Vm::Exact(1), false),
    E::new(Single(QUALITY_CONTROL_SUBJECT_TYPE_CODE_SEQUENCE), "QualityControlSubjectTypeCodeSequence", "Quality Control Subject Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(STRAIN_DESCRIPTION), "StrainDescription", "Strain Description", Exact(UC), Vm::Exact(1), false),
    E::new(Single(STRAIN_NOMENCLATURE), "StrainNomenclature", "Strain Nomenclature", Exact(LO), Vm::Exact(1), false),
    E::new(Single(STRAIN_STOCK_NUMBER), "StrainStockNumber", "Strain Stock Number", Exact(LO), Vm::Exact(1), false),
    E::new(Single(STRAIN_SOURCE_REGISTRY_CODE_SEQUENCE), "StrainSourceRegistryCodeSequence", "Strain Source Registry Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(STRAIN_STOCK_SEQUENCE), "StrainStockSequence", "Strain Stock Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(STRAIN_SOURCE), "StrainSource", "Strain Source", Exact(LO), Vm::Exact(1), false),
    E::new(Single(STRAIN_ADDITIONAL_INFORMATION), "StrainAdditionalInformation", "Strain Additional Information", Exact(UT), Vm::Exact(1), false),
    E::new(Single(STRAIN_CODE_SEQUENCE), "StrainCodeSequence", "Strain Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GENETIC_MODIFICATIONS_SEQUENCE), "GeneticModificationsSequence", "Genetic Modifications Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GENETIC_MODIFICATIONS_DESCRIPTION), "GeneticModificationsDescription", "Genetic Modifications Description", Exact(UC), Vm::Exact(1), false),
    E::new(Single(GENETIC_MODIFICATIONS_NOMENCLATURE), "GeneticModificationsNomenclature", "Genetic Modifications Nomenclature", Exact(LO), Vm::Exact(1), false),
    E::new(Single(GENETIC_MODIFICATIONS_CODE_SEQUENCE), "GeneticModificationsCodeSequence", "Genetic Modifications Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OTHER_PATIENT_I_DS), "OtherPatientIDs", "Other Patient IDs", Exact(LO), Vm::AtLeast(1), true),
    E::new(Single(OTHER_PATIENT_NAMES), "OtherPatientNames", "Other Patient Names", Exact(PN), Vm::AtLeast(1), false),
    E::new(Single(OTHER_PATIENT_I_DS_SEQUENCE), "OtherPatientIDsSequence", "Other Patient IDs Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_BIRTH_NAME), "PatientBirthName", "Patient's Birth Name", Exact(PN), Vm::Exact(1), false),
    E::new(Single(PATIENT_AGE), "PatientAge", "Patient's Age", Exact(AS), Vm::Exact(1), false),
    E::new(Single(PATIENT_SIZE), "PatientSize", "Patient's Size", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PATIENT_SIZE_CODE_SEQUENCE), "PatientSizeCodeSequence", "Patient's Size Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_BODY_MASS_INDEX), "PatientBodyMassIndex", "Patient's Body Mass Index", Exact(DS), Vm::Exact(1), false),
    E::new(Single(MEASURED_AP_DIMENSION), "MeasuredAPDimension", "Measured AP Dimension", Exact(DS), Vm::Exact(1), false),
    E::new(Single(MEASURED_LATERAL_DIMENSION), "MeasuredLateralDimension", "Measured Lateral Dimension", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PATIENT_WEIGHT), "PatientWeight", "Patient's Weight", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PATIENT_ADDRESS), "PatientAddress", "Patient's Address", Exact(LO), Vm::Exact(1), false),
    E::new(Single(INSURANCE_PLAN_IDENTIFICATION), "InsurancePlanIdentification", "Insurance Plan Identification", Exact(LO), Vm::AtLeast(1), true),
    E::new(Single(PATIENT_MOTHER_BIRTH_NAME), "PatientMotherBirthName", "Patient's Mother's Birth Name", Exact(PN), Vm::Exact(1), false),
    E::new(Single(MILITARY_RANK), "MilitaryRank", "Military Rank", Exact(LO), Vm::Exact(1), false),
    E::new(Single(BRANCH_OF_SERVICE), "BranchOfService", "Branch of Service", Exact(LO), Vm::Exact(1), false),
    E::new(Single(MEDICAL_RECORD_LOCATOR), "MedicalRecordLocator", "Medical Record Locator", Exact(LO), Vm::Exact(1), true),
    E::new(Single(REFERENCED_PATIENT_PHOTO_SEQUENCE), "ReferencedPatientPhotoSequence", "Referenced Patient Photo Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MEDICAL_ALERTS), "MedicalAlerts", "Medical Alerts", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(ALLERGIES), "Allergies", "Allergies", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(COUNTRY_OF_RESIDENCE), "CountryOfResidence", "Country of Residence", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REGION_OF_RESIDENCE), "RegionOfResidence", "Region of Residence", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_TELEPHONE_NUMBERS), "PatientTelephoneNumbers", "Patient's Telephone Numbers", Exact(SH), Vm::AtLeast(1), false),
    E::new(Single(PATIENT_TELECOM_INFORMATION), "PatientTelecomInformation", "Patient's Telecom Information", Exact(LT), Vm::Exact(1), false),
    E::new(Single(ETHNIC_GROUP), "EthnicGroup", "Ethnic Group", Exact(SH), Vm::Exact(1), false),
    E::new(Single(ETHNIC_GROUP_CODE_SEQUENCE), "EthnicGroupCodeSequence", "Ethnic Group Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ETHNIC_GROUPS), "EthnicGroups", "Ethnic Groups", Exact(UC), Vm::AtLeast(1), false),
    E::new(Single(OCCUPATION), "Occupation", "Occupation", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SMOKING_STATUS), "SmokingStatus", "Smoking Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ADDITIONAL_PATIENT_HISTORY), "AdditionalPatientHistory", "Additional Patient History", Exact(LT), Vm::Exact(1), false),
    E::new(Single(PREGNANCY_STATUS), "PregnancyStatus", "Pregnancy Status", Exact(US), Vm::Exact(1), false),
    E::new(Single(LAST_MENSTRUAL_DATE), "LastMenstrualDate", "Last Menstrual Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(PATIENT_RELIGIOUS_PREFERENCE), "PatientReligiousPreference", "Patient's Religious Preference", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_SPECIES_DESCRIPTION), "PatientSpeciesDescription", "Patient Species Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_SPECIES_CODE_SEQUENCE), "PatientSpeciesCodeSequence", "Patient Species Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_SEX_NEUTERED), "PatientSexNeutered", "Patient's Sex Neutered", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATIENT_BREED_DESCRIPTION), "PatientBreedDescription", "Patient Breed Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_BREED_CODE_SEQUENCE), "PatientBreedCodeSequence", "Patient Breed Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BREED_REGISTRATION_SEQUENCE), "BreedRegistrationSequence", "Breed Registration Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BREED_REGISTRATION_NUMBER), "BreedRegistrationNumber", "Breed Registration Number", Exact(LO), Vm::Exact(1), false),
    E::new(Single(BREED_REGISTRY_CODE_SEQUENCE), "BreedRegistryCodeSequence", "Breed Registry Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RESPONSIBLE_PERSON), "ResponsiblePerson", "Responsible Person", Exact(PN), Vm::Exact(1), false),
    E::new(Single(RESPONSIBLE_PERSON_ROLE), "ResponsiblePersonRole", "Responsible Person Role", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RESPONSIBLE_ORGANIZATION), "ResponsibleOrganization", "Responsible Organization", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_COMMENTS), "PatientComments", "Patient Comments", Exact(LT), Vm::Exact(1), false),
    E::new(Single(EXAMINED_BODY_THICKNESS), "ExaminedBodyThickness", "Examined Body Thickness", Exact(FL), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_SPONSOR_NAME), "ClinicalTrialSponsorName", "Clinical Trial Sponsor Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_PROTOCOL_ID), "ClinicalTrialProtocolID", "Clinical Trial Protocol ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_PROTOCOL_NAME), "ClinicalTrialProtocolName", "Clinical Trial Protocol Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_SITE_ID), "ClinicalTrialSiteID", "Clinical Trial Site ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_SITE_NAME), "ClinicalTrialSiteName", "Clinical Trial Site Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_SUBJECT_ID), "ClinicalTrialSubjectID", "Clinical Trial Subject ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_SUBJECT_READING_ID), "ClinicalTrialSubjectReadingID", "Clinical Trial Subject Reading ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_TIME_POINT_ID), "ClinicalTrialTimePointID", "Clinical Trial Time Point ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_TIME_POINT_DESCRIPTION), "ClinicalTrialTimePointDescription", "Clinical Trial Time Point Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(LONGITUDINAL_TEMPORAL_OFFSET_FROM_EVENT), "LongitudinalTemporalOffsetFromEvent", "Longitudinal Temporal Offset from Event", Exact(FD), Vm::Exact(1), false),
    E::new(Single(LONGITUDINAL_TEMPORAL_EVENT_TYPE), "LongitudinalTemporalEventType", "Longitudinal Temporal Event Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_COORDINATING_CENTER_NAME), "ClinicalTrialCoordinatingCenterName", "Clinical Trial Coordinating Center Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_IDENTITY_REMOVED), "PatientIdentityRemoved", "Patient Identity Removed", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DEIDENTIFICATION_METHOD), "DeidentificationMethod", "De-identification Method", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(DEIDENTIFICATION_METHOD_CODE_SEQUENCE), "DeidentificationMethodCodeSequence", "De-identification Method Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_SERIES_ID), "ClinicalTrialSeriesID", "Clinical Trial Series ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_SERIES_DESCRIPTION), "ClinicalTrialSeriesDescription", "Clinical Trial Series Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_NAME), "ClinicalTrialProtocolEthicsCommitteeName", "Clinical Trial Protocol Ethics Committee Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_APPROVAL_NUMBER), "ClinicalTrialProtocolEthicsCommitteeApprovalNumber", "Clinical Trial Protocol Ethics Committee Approval Number", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CONSENT_FOR_CLINICAL_TRIAL_USE_SEQUENCE), "ConsentForClinicalTrialUseSequence", "Consent for Clinical Trial Use Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DISTRIBUTION_TYPE), "DistributionType", "Distribution Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONSENT_FOR_DISTRIBUTION_FLAG), "ConsentForDistributionFlag", "Consent for Distribution Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ETHICS_COMMITTEE_APPROVAL_EFFECTIVENESS_START_DATE), "EthicsCommitteeApprovalEffectivenessStartDate", "Ethics Committee Approval Effectiveness Start Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(ETHICS_COMMITTEE_APPROVAL_EFFECTIVENESS_END_DATE), "EthicsCommitteeApprovalEffectivenessEndDate", "Ethics Committee Approval Effectiveness End Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_AGENT), "ContrastBolusAgent", "Contrast/Bolus Agent", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_AGENT_SEQUENCE), "ContrastBolusAgentSequence", "Contrast/Bolus Agent Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_T1RELAXIVITY), "ContrastBolusT1Relaxivity", "Contrast/Bolus T1 Relaxivity", Exact(FL), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_ADMINISTRATION_ROUTE_SEQUENCE), "ContrastBolusAdministrationRouteSequence", "Contrast/Bolus Administration Route Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BODY_PART_EXAMINED), "BodyPartExamined", "Body Part Examined", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SCANNING_SEQUENCE), "ScanningSequence", "Scanning Sequence", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(SEQUENCE_VARIANT), "SequenceVariant", "Sequence Variant", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(SCAN_OPTIONS), "ScanOptions", "Scan Options", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(MR_ACQUISITION_TYPE), "MRAcquisitionType", "MR Acquisition Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SEQUENCE_NAME), "SequenceName", "Sequence Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(ANGIO_FLAG), "AngioFlag", "Angio Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(INTERVENTION_DRUG_INFORMATION_SEQUENCE), "InterventionDrugInformationSequence", "Intervention Drug Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INTERVENTION_DRUG_STOP_TIME), "InterventionDrugStopTime", "Intervention Drug Stop Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(INTERVENTION_DRUG_DOSE), "InterventionDrugDose", "Intervention Drug Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(INTERVENTION_DRUG_CODE_SEQUENCE), "InterventionDrugCodeSequence", "Intervention Drug Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ADDITIONAL_DRUG_SEQUENCE), "AdditionalDrugSequence", "Additional Drug Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIONUCLIDE), "Radionuclide", "Radionuclide", Exact(LO), Vm::AtLeast(1), true),
    E::new(Single(RADIOPHARMACEUTICAL), "Radiopharmaceutical", "Radiopharmaceutical", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ENERGY_WINDOW_CENTERLINE), "EnergyWindowCenterline", "Energy Window Centerline", Exact(DS), Vm::Exact(1), true),
    E::new(Single(ENERGY_WINDOW_TOTAL_WIDTH), "EnergyWindowTotalWidth", "Energy Window Total Width", Exact(DS), Vm::AtLeast(1), true),
    E::new(Single(INTERVENTION_DRUG_NAME), "InterventionDrugName", "Intervention Drug Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(INTERVENTION_DRUG_START_TIME), "InterventionDrugStartTime", "Intervention Drug Start Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(INTERVENTION_SEQUENCE), "InterventionSequence", "Intervention Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(THERAPY_TYPE), "TherapyType", "Therapy Type", Exact(CS), Vm::Exact(1), true),
    E::new(Single(INTERVENTION_STATUS), "InterventionStatus", "Intervention Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(THERAPY_DESCRIPTION), "TherapyDescription", "Therapy Description", Exact(CS), Vm::Exact(1), true),
    E::new(Single(INTERVENTION_DESCRIPTION), "InterventionDescription", "Intervention Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(CINE_RATE), "CineRate", "Cine Rate", Exact(IS), Vm::Exact(1), false),
    E::new(Single(INITIAL_CINE_RUN_STATE), "InitialCineRunState", "Initial Cine Run State", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SLICE_THICKNESS), "SliceThickness", "Slice Thickness", Exact(DS), Vm::Exact(1), false),
    E::new(Single(KVP), "KVP", "KVP", Exact(DS), Vm::Exact(1), false),
    E::new(Single(COUNTS_ACCUMULATED), "CountsAccumulated", "Counts Accumulated", Exact(IS), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_TERMINATION_CONDITION), "AcquisitionTerminationCondition", "Acquisition Termination Condition", Exact(CS), Vm::Exact(1), false),
    E::new(Single(EFFECTIVE_DURATION), "EffectiveDuration", "Effective Duration", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_START_CONDITION), "AcquisitionStartCondition", "Acquisition Start Condition", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_START_CONDITION_DATA), "AcquisitionStartConditionData", "Acquisition Start Condition Data", Exact(IS), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_TERMINATION_CONDITION_DATA), "AcquisitionTerminationConditionData", "Acquisition Termination Condition Data", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REPETITION_TIME), "RepetitionTime", "Repetition Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ECHO_TIME), "EchoTime", "Echo Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(INVERSION_TIME), "InversionTime", "Inversion Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_AVERAGES), "NumberOfAverages", "Number of Averages", Exact(DS), Vm::Exact(1), false),
    E::new(Single(IMAGING_FREQUENCY), "ImagingFrequency", "Imaging Frequency", Exact(DS), Vm::Exact(1), false),
    E::new(Single(IMAGED_NUCLEUS), "ImagedNucleus", "Imaged Nucleus", Exact(SH), Vm::Exact(1), false),
    E::new(Single(ECHO_NUMBERS), "EchoNumbers", "Echo Number(s)", Exact(IS), Vm::AtLeast(1), false),
    E::new(Single(MAGNETIC_FIELD_STRENGTH), "MagneticFieldStrength", "Magnetic Field Strength", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SPACING_BETWEEN_SLICES), "SpacingBetweenSlices", "Spacing Between Slices", Exact(DS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_PHASE_ENCODING_STEPS), "NumberOfPhaseEncodingSteps", "Number of Phase Encoding Steps", Exact(IS), Vm::Exact(1), false),
    E::new(Single(DATA_COLLECTION_DIAMETER), "DataCollectionDiameter", "Data Collection Diameter", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ECHO_TRAIN_LENGTH), "EchoTrainLength", "Echo Train Length", Exact(IS), Vm::Exact(1), false),
    E::new(Single(PERCENT_SAMPLING), "PercentSampling", "Percent Sampling", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PERCENT_PHASE_FIELD_OF_VIEW), "PercentPhaseFieldOfView", "Percent Phase Field of View", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PIXEL_BANDWIDTH), "PixelBandwidth", "Pixel Bandwidth", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DEVICE_SERIAL_NUMBER), "DeviceSerialNumber", "Device Serial Number", Exact(LO), Vm::Exact(1), false),
    E::new(Single(DEVICE_UID), "DeviceUID", "Device UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(DEVICE_ID), "DeviceID", "Device ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PLATE_ID), "PlateID", "Plate ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(GENERATOR_ID), "GeneratorID", "Generator ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(GRID_ID), "GridID", "Grid ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CASSETTE_ID), "CassetteID", "Cassette ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(GANTRY_ID), "GantryID", "Gantry ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(UNIQUE_DEVICE_IDENTIFIER), "UniqueDeviceIdentifier", "Unique Device Identifier", Exact(UT), Vm::Exact(1), false),
    E::new(Single(UDI_SEQUENCE), "UDISequence", "UDI Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MANUFACTURER_DEVICE_CLASS_UID), "ManufacturerDeviceClassUID", "Manufacturer's Device Class UID", Exact(UI), Vm::AtLeast(1), false),
    E::new(Single(SECONDARY_CAPTURE_DEVICE_ID), "SecondaryCaptureDeviceID", "Secondary Capture Device ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(HARDCOPY_CREATION_DEVICE_ID), "HardcopyCreationDeviceID", "Hardcopy Creation Device ID", Exact(LO), Vm::Exact(1), true),
    E::new(Single(DATE_OF_SECONDARY_CAPTURE), "DateOfSecondaryCapture", "Date of Secondary Capture", Exact(DA), Vm::Exact(1), false),
    E::new(Single(TIME_OF_SECONDARY_CAPTURE), "TimeOfSecondaryCapture", "Time of Secondary Capture", Exact(TM), Vm::Exact(1), false),
    E::new(Single(SECONDARY_CAPTURE_DEVICE_MANUFACTURER), "SecondaryCaptureDeviceManufacturer", "Secondary Capture Device Manufacturer", Exact(LO), Vm::Exact(1), false),
    E::new(Single(HARDCOPY_DEVICE_MANUFACTURER), "HardcopyDeviceManufacturer", "Hardcopy Device Manufacturer", Exact(LO), Vm::Exact(1), true),
    E::new(Single(SECONDARY_CAPTURE_DEVICE_MANUFACTURER_MODEL_NAME), "SecondaryCaptureDeviceManufacturerModelName", "Secondary Capture Device Manufacturer's Model Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SECONDARY_CAPTURE_DEVICE_SOFTWARE_VERSIONS), "SecondaryCaptureDeviceSoftwareVersions", "Secondary Capture Device Software Versions", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(HARDCOPY_DEVICE_SOFTWARE_VERSION), "HardcopyDeviceSoftwareVersion", "Hardcopy Device Software Version", Exact(LO), Vm::AtLeast(1), true),
    E::new(Single(HARDCOPY_DEVICE_MANUFACTURER_MODEL_NAME), "HardcopyDeviceManufacturerModelName", "Hardcopy Device Manufacturer's Model Name", Exact(LO), Vm::Exact(1), true),
    E::new(Single(SOFTWARE_VERSIONS), "SoftwareVersions", "Software Versions", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(VIDEO_IMAGE_FORMAT_ACQUIRED), "VideoImageFormatAcquired", "Video Image Format Acquired", Exact(SH), Vm::Exact(1), false),
    E::new(Single(DIGITAL_IMAGE_FORMAT_ACQUIRED), "DigitalImageFormatAcquired", "Digital Image Format Acquired", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PROTOCOL_NAME), "ProtocolName", "Protocol Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_ROUTE), "ContrastBolusRoute", "Contrast/Bolus Route", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_VOLUME), "ContrastBolusVolume", "Contrast/Bolus Volume", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_START_TIME), "ContrastBolusStartTime", "Contrast/Bolus Start Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_STOP_TIME), "ContrastBolusStopTime", "Contrast/Bolus Stop Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_TOTAL_DOSE), "ContrastBolusTotalDose", "Contrast/Bolus Total Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SYRINGE_COUNTS), "SyringeCounts", "Syringe Counts", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CONTRAST_FLOW_RATE), "ContrastFlowRate", "Contrast Flow Rate", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(CONTRAST_FLOW_DURATION), "ContrastFlowDuration", "Contrast Flow Duration", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(CONTRAST_BOLUS_INGREDIENT), "ContrastBolusIngredient", "Contrast/Bolus Ingredient", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_INGREDIENT_CONCENTRATION), "ContrastBolusIngredientConcentration", "Contrast/Bolus Ingredient Concentration", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SPATIAL_RESOLUTION), "SpatialResolution", "Spatial Resolution", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TRIGGER_TIME), "TriggerTime", "Trigger Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TRIGGER_SOURCE_OR_TYPE), "TriggerSourceOrType", "Trigger Source or Type", Exact(LO), Vm::Exact(1), false),
    E::new(Single(NOMINAL_INTERVAL), "NominalInterval", "Nominal Interval", Exact(IS), Vm::Exact(1), false),
    E::new(Single(FRAME_TIME), "FrameTime", "Frame Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CARDIAC_FRAMING_TYPE), "CardiacFramingType", "Cardiac Framing Type", Exact(LO), Vm::Exact(1), false),
    E::new(Single(FRAME_TIME_VECTOR), "FrameTimeVector", "Frame Time Vector", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(FRAME_DELAY), "FrameDelay", "Frame Delay", Exact(DS), Vm::Exact(1), false),
    E::new(Single(IMAGE_TRIGGER_DELAY), "ImageTriggerDelay", "Image Trigger Delay", Exact(DS), Vm::Exact(1), false),
    E::new(Single(MULTIPLEX_GROUP_TIME_OFFSET), "MultiplexGroupTimeOffset", "Multiplex Group Time Offset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TRIGGER_TIME_OFFSET), "TriggerTimeOffset", "Trigger Time Offset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SYNCHRONIZATION_TRIGGER), "SynchronizationTrigger", "Synchronization Trigger", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SYNCHRONIZATION_CHANNEL), "SynchronizationChannel", "Synchronization Channel", Exact(US), Vm::Exact(2), false),
    E::new(Single(TRIGGER_SAMPLE_POSITION), "TriggerSamplePosition", "Trigger Sample Position", Exact(UL), Vm::Exact(1), false),
    E::new(Single(RADIOPHARMACEUTICAL_ROUTE), "RadiopharmaceuticalRoute", "Radiopharmaceutical Route", Exact(LO), Vm::Exact(1), false),
    E::new(Single(RADIOPHARMACEUTICAL_VOLUME), "RadiopharmaceuticalVolume", "Radiopharmaceutical Volume", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RADIOPHARMACEUTICAL_START_TIME), "RadiopharmaceuticalStartTime", "Radiopharmaceutical Start Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(RADIOPHARMACEUTICAL_STOP_TIME), "RadiopharmaceuticalStopTime", "Radiopharmaceutical Stop Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(RADIONUCLIDE_TOTAL_DOSE), "RadionuclideTotalDose", "Radionuclide Total Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RADIONUCLIDE_HALF_LIFE), "RadionuclideHalfLife", "Radionuclide Half Life", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RADIONUCLIDE_POSITRON_FRACTION), "RadionuclidePositronFraction", "Radionuclide Positron Fraction", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RADIOPHARMACEUTICAL_SPECIFIC_ACTIVITY), "RadiopharmaceuticalSpecificActivity", "Radiopharmaceutical Specific Activity", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RADIOPHARMACEUTICAL_START_DATE_TIME), "RadiopharmaceuticalStartDateTime", "Radiopharmaceutical Start DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(RADIOPHARMACEUTICAL_STOP_DATE_TIME), "RadiopharmaceuticalStopDateTime", "Radiopharmaceutical Stop DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(BEAT_REJECTION_FLAG), "BeatRejectionFlag", "Beat Rejection Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(LOW_RR_VALUE), "LowRRValue", "Low R-R Value", Exact(IS), Vm::Exact(1), false),
    E::new(Single(HIGH_RR_VALUE), "HighRRValue", "High R-R Value", Exact(IS), Vm::Exact(1), false),
    E::new(Single(INTERVALS_ACQUIRED), "IntervalsAcquired", "Intervals Acquired", Exact(IS), Vm::Exact(1), false),
    E::new(Single(INTERVALS_REJECTED), "IntervalsRejected", "Intervals Rejected", Exact(IS), Vm::Exact(1), false),
    E::new(Single(PVC_REJECTION), "PVCRejection", "PVC Rejection", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SKIP_BEATS), "SkipBeats", "Skip Beats", Exact(IS), Vm::Exact(1), false),
    E::new(Single(HEART_RATE), "HeartRate", "Heart Rate", Exact(IS), Vm::Exact(1), false),
    E::new(Single(TRIGGER_WINDOW), "TriggerWindow", "Trigger Window", Exact(IS), Vm::Exact(1), false),
    E::new(Single(RECONSTRUCTION_DIAMETER), "ReconstructionDiameter", "Reconstruction Diameter", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DISTANCE_SOURCE_TO_DETECTOR), "DistanceSourceToDetector", "Distance Source to Detector", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DISTANCE_SOURCE_TO_PATIENT), "DistanceSourceToPatient", "Distance Source to Patient", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ESTIMATED_RADIOGRAPHIC_MAGNIFICATION_FACTOR), "EstimatedRadiographicMagnificationFactor", "Estimated Radiographic Magnification Factor", Exact(DS), Vm::Exact(1), false),
    E::new(Single(GANTRY_DETECTOR_TILT), "GantryDetectorTilt", "Gantry/Detector Tilt", Exact(DS), Vm::Exact(1), false),
    E::new(Single(GANTRY_DETECTOR_SLEW), "GantryDetectorSlew", "Gantry/Detector Slew", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_HEIGHT), "TableHeight", "Table Height", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TRAVERSE), "TableTraverse", "Table Traverse", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_MOTION), "TableMotion", "Table Motion", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TABLE_VERTICAL_INCREMENT), "TableVerticalIncrement", "Table Vertical Increment", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(TABLE_LATERAL_INCREMENT), "TableLateralIncrement", "Table Lateral Increment", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(TABLE_LONGITUDINAL_INCREMENT), "TableLongitudinalIncrement", "Table Longitudinal Increment", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(TABLE_ANGLE), "TableAngle", "Table Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TYPE), "TableType", "Table Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ROTATION_DIRECTION), "RotationDirection", "Rotation Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RADIAL_POSITION), "RadialPosition", "Radial Position", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(SCAN_ARC), "ScanArc", "Scan Arc", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ANGULAR_STEP), "AngularStep", "Angular Step", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CENTER_OF_ROTATION_OFFSET), "CenterOfRotationOffset", "Center of Rotation Offset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ROTATION_OFFSET), "RotationOffset", "Rotation Offset", Exact(DS), Vm::AtLeast(1), true),
    E::new(Single(FIELD_OF_VIEW_SHAPE), "FieldOfViewShape", "Field of View Shape", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FIELD_OF_VIEW_DIMENSIONS), "FieldOfViewDimensions", "Field of View Dimension(s)", Exact(IS), Vm::Bounded(1, 2), false),
    E::new(Single(EXPOSURE_TIME), "ExposureTime", "Exposure Time", Exact(IS), Vm::Exact(1), false),
    E::new(Single(X_RAY_TUBE_CURRENT), "XRayTubeCurrent", "X-Ray Tube Current", Exact(IS), Vm::Exact(1), false),
    E::new(Single(EXPOSURE), "Exposure", "Exposure", Exact(IS), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_INU_AS), "ExposureInuAs", "Exposure in µAs", Exact(IS), Vm::Exact(1), false),
    E::new(Single(AVERAGE_PULSE_WIDTH), "AveragePulseWidth", "Average Pulse Width", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RADIATION_SETTING), "RadiationSetting", "Radiation Setting", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RECTIFICATION_TYPE), "RectificationType", "Rectification Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RADIATION_MODE), "RadiationMode", "Radiation Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IMAGE_AND_FLUOROSCOPY_AREA_DOSE_PRODUCT), "ImageAndFluoroscopyAreaDoseProduct", "Image and Fluoroscopy Area Dose Product", Exact(DS), Vm::Exact(1), false),
    E::new(Single(FILTER_TYPE), "FilterType", "Filter Type", Exact(SH), Vm::Exact(1), false),
    E::new(Single(FILTER_BEAM_PATH_LENGTH_MINIMUM), "FilterBeamPathLengthMinimum", "Filter Beam Path Length Minimum", Exact(FL), Vm::AtLeast(1), false),
    E::new(Single(INTENSIFIER_SIZE), "IntensifierSize", "Intensifier Size", Exact(DS), Vm::Exact(1), false),
    E::new(Single(IMAGER_PIXEL_SPACING), "ImagerPixelSpacing", "Imager Pixel Spacing", Exact(DS), Vm::Exact(2), false),
    E::new(Single(GRID), "Grid", "Grid", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(GENERATOR_POWER), "GeneratorPower", "Generator Power", Exact(IS), Vm::Exact(1), false),
    E::new(Single(COLLIMATOR_GRID_NAME), "CollimatorGridName", "Collimator/grid Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(COLLIMATOR_TYPE), "CollimatorType", "Collimator Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FOCAL_DISTANCE), "FocalDistance", "Focal Distance", Exact(IS), Vm::Bounded(1, 2), false),
    E::new(Single(X_FOCUS_CENTER), "XFocusCenter", "X Focus Center", Exact(DS), Vm::Bounded(1, 2), false),
    E::new(Single(Y_FOCUS_CENTER), "YFocusCenter", "Y Focus Center", Exact(DS), Vm::Bounded(1, 2), false),
    E::new(Single(FOCAL_SPOTS), "FocalSpots", "Focal Spot(s)", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(ANODE_TARGET_MATERIAL), "AnodeTargetMaterial", "Anode Target Material", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BODY_PART_THICKNESS), "BodyPartThickness", "Body Part Thickness", Exact(DS), Vm::Exact(1), false),
    E::new(Single(COMPRESSION_FORCE), "CompressionForce", "Compression Force", Exact(DS), Vm::Exact(1), false),
    E::new(Single(COMPRESSION_PRESSURE), "CompressionPressure", "Compression Pressure", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PADDLE_DESCRIPTION), "PaddleDescription", "Paddle Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(COMPRESSION_CONTACT_AREA), "CompressionContactArea", "Compression Contact Area", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DATE_OF_LAST_CALIBRATION), "DateOfLastCalibration", "Date of Last Calibration", Exact(DA), Vm::AtLeast(1), false),
    E::new(Single(TIME_OF_LAST_CALIBRATION), "TimeOfLastCalibration", "Time of Last Calibration", Exact(TM), Vm::AtLeast(1), false),
    E::new(Single(DATE_TIME_OF_LAST_CALIBRATION), "DateTimeOfLastCalibration", "DateTime of Last Calibration", Exact(DT), Vm::Exact(1), false),
    E::new(Single(CONVOLUTION_KERNEL), "ConvolutionKernel", "Convolution Kernel", Exact(SH), Vm::AtLeast(1), false),
    E::new(Single(RECEIVE_COIL_NAME), "ReceiveCoilName", "Receive Coil Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(TRANSMIT_COIL_NAME), "TransmitCoilName", "Transmit Coil Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(PLATE_TYPE), "PlateType", "Plate Type", Exact(SH), Vm::Exact(1), false),
    E::new(Single(PHOSPHOR_TYPE), "PhosphorType", "Phosphor Type", Exact(LO), Vm::Exact(1), false),
    E::new(Single(WATER_EQUIVALENT_DIAMETER), "WaterEquivalentDiameter", "Water Equivalent Diameter", Exact(FD), Vm::Exact(1), false),
    E::new(Single(WATER_EQUIVALENT_DIAMETER_CALCULATION_METHOD_CODE_SEQUENCE), "WaterEquivalentDiameterCalculationMethodCodeSequence", "Water Equivalent Diameter Calculation Method Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCAN_VELOCITY), "ScanVelocity", "Scan Velocity", Exact(DS), Vm::Exact(1), false),
    E::new(Single(WHOLE_BODY_TECHNIQUE), "WholeBodyTechnique", "Whole Body Technique", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(SCAN_LENGTH), "ScanLength", "Scan Length", Exact(IS), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_MATRIX), "AcquisitionMatrix", "Acquisition Matrix", Exact(US), Vm::Exact(4), false),
    E::new(Single(IN_PLANE_PHASE_ENCODING_DIRECTION), "InPlanePhaseEncodingDirection", "In-plane Phase Encoding Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FLIP_ANGLE), "FlipAngle", "Flip Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(VARIABLE_FLIP_ANGLE_FLAG), "VariableFlipAngleFlag", "Variable Flip Angle Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SAR), "SAR", "SAR", Exact(DS), Vm::Exact(1), false),
    E::new(Single(D_BDT), "dBdt", "dB/dt", Exact(DS), Vm::Exact(1), false),
    E::new(Single(B1RMS), "B1rms", "B1rms", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_DEVICE_PROCESSING_DESCRIPTION), "AcquisitionDeviceProcessingDescription", "Acquisition Device Processing Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_DEVICE_PROCESSING_CODE), "AcquisitionDeviceProcessingCode", "Acquisition Device Processing Code", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CASSETTE_ORIENTATION), "CassetteOrientation", "Cassette Orientation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CASSETTE_SIZE), "CassetteSize", "Cassette Size", Exact(CS), Vm::Exact(1), false),
    E::new(Single(EXPOSURES_ON_PLATE), "ExposuresOnPlate", "Exposures on Plate", Exact(US), Vm::Exact(1), false),
    E::new(Single(RELATIVE_X_RAY_EXPOSURE), "RelativeXRayExposure", "Relative X-Ray Exposure", Exact(IS), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_INDEX), "ExposureIndex", "Exposure Index", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TARGET_EXPOSURE_INDEX), "TargetExposureIndex", "Target Exposure Index", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DEVIATION_INDEX), "DeviationIndex", "Deviation Index", Exact(DS), Vm::Exact(1), false),
    E::new(Single(COLUMN_ANGULATION), "ColumnAngulation", "Column Angulation", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TOMO_LAYER_HEIGHT), "TomoLayerHeight", "Tomo Layer Height", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TOMO_ANGLE), "TomoAngle", "Tomo Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TOMO_TIME), "TomoTime", "Tomo Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TOMO_TYPE), "TomoType", "Tomo Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TOMO_CLASS), "TomoClass", "Tomo Class", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_TOMOSYNTHESIS_SOURCE_IMAGES), "NumberOfTomosynthesisSourceImages", "Number of Tomosynthesis Source Images", Exact(IS), Vm::Exact(1), false),
    E::new(Single(POSITIONER_MOTION), "PositionerMotion", "Positioner Motion", Exact(CS), Vm::Exact(1), false),
    E::new(Single(POSITIONER_TYPE), "PositionerType", "Positioner Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(POSITIONER_PRIMARY_ANGLE), "PositionerPrimaryAngle", "Positioner Primary Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(POSITIONER_SECONDARY_ANGLE), "PositionerSecondaryAngle", "Positioner Secondary Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(POSITIONER_PRIMARY_ANGLE_INCREMENT), "PositionerPrimaryAngleIncrement", "Positioner Primary Angle Increment", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(POSITIONER_SECONDARY_ANGLE_INCREMENT), "PositionerSecondaryAngleIncrement", "Positioner Secondary Angle Increment", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(DETECTOR_PRIMARY_ANGLE), "DetectorPrimaryAngle", "Detector Primary Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_SECONDARY_ANGLE), "DetectorSecondaryAngle", "Detector Secondary Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SHUTTER_SHAPE), "ShutterShape", "Shutter Shape", Exact(CS), Vm::Bounded(1, 3), false),
    E::new(Single(SHUTTER_LEFT_VERTICAL_EDGE), "ShutterLeftVerticalEdge", "Shutter Left Vertical Edge", Exact(IS), Vm::Exact(1), false),
    E::new(Single(SHUTTER_RIGHT_VERTICAL_EDGE), "ShutterRightVerticalEdge", "Shutter Right Vertical Edge", Exact(IS), Vm::Exact(1), false),
    E::new(Single(SHUTTER_UPPER_HORIZONTAL_EDGE), "ShutterUpperHorizontalEdge", "Shutter Upper Horizontal Edge", Exact(IS), Vm::Exact(1), false),
    E::new(Single(SHUTTER_LOWER_HORIZONTAL_EDGE), "ShutterLowerHorizontalEdge", "Shutter Lower Horizontal Edge", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CENTER_OF_CIRCULAR_SHUTTER), "CenterOfCircularShutter", "Center of Circular Shutter", Exact(IS), Vm::Exact(2), false),
    E::new(Single(RADIUS_OF_CIRCULAR_SHUTTER), "RadiusOfCircularShutter", "Radius of Circular Shutter", Exact(IS), Vm::Exact(1), false),
    E::new(Single(VERTICES_OF_THE_POLYGONAL_SHUTTER), "VerticesOfThePolygonalShutter", "Vertices of the Polygonal Shutter", Exact(IS), Vm::MultipleOf(2), false),
    E::new(Single(SHUTTER_PRESENTATION_VALUE), "ShutterPresentationValue", "Shutter Presentation Value", Exact(US), Vm::Exact(1), false),
    E::new(Single(SHUTTER_OVERLAY_GROUP), "ShutterOverlayGroup", "Shutter Overlay Group", Exact(US), Vm::Exact(1), false),
    E::new(Single(SHUTTER_PRESENTATION_COLOR_CIE_LAB_VALUE), "ShutterPresentationColorCIELabValue", "Shutter Presentation Color CIELab Value", Exact(US), Vm::Exact(3), false),
    E::new(Single(COLLIMATOR_SHAPE), "CollimatorShape", "Collimator Shape", Exact(CS), Vm::Bounded(1, 3), false),
    E::new(Single(COLLIMATOR_LEFT_VERTICAL_EDGE), "CollimatorLeftVerticalEdge", "Collimator Left Vertical Edge", Exact(IS), Vm::Exact(1), false),
    E::new(Single(COLLIMATOR_RIGHT_VERTICAL_EDGE), "CollimatorRightVerticalEdge", "Collimator Right Vertical Edge", Exact(IS), Vm::Exact(1), false),
    E::new(Single(COLLIMATOR_UPPER_HORIZONTAL_EDGE), "CollimatorUpperHorizontalEdge", "Collimator Upper Horizontal Edge", Exact(IS), Vm::Exact(1), false),
    E::new(Single(COLLIMATOR_LOWER_HORIZONTAL_EDGE), "CollimatorLowerHorizontalEdge", "Collimator Lower Horizontal Edge", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CENTER_OF_CIRCULAR_COLLIMATOR), "CenterOfCircularCollimator", "Center of Circular Collimator", Exact(IS), Vm::Exact(2), false),
    E::new(Single(RADIUS_OF_CIRCULAR_COLLIMATOR), "RadiusOfCircularCollimator", "Radius of Circular Collimator", Exact(IS), Vm::Exact(1), false),
    E::new(Single(VERTICES_OF_THE_POLYGONAL_COLLIMATOR), "VerticesOfThePolygonalCollimator", "Vertices of the Polygonal Collimator", Exact(IS), Vm::MultipleOf(2), false),
    E::new(Single(ACQUISITION_TIME_SYNCHRONIZED), "AcquisitionTimeSynchronized", "Acquisition Time Synchronized", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TIME_SOURCE), "TimeSource", "Time Source", Exact(SH), Vm::Exact(1), false),
    E::new(Single(TIME_DISTRIBUTION_PROTOCOL), "TimeDistributionProtocol", "Time Distribution Protocol", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NTP_SOURCE_ADDRESS), "NTPSourceAddress", "NTP Source Address", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PAGE_NUMBER_VECTOR), "PageNumberVector", "Page Number Vector", Exact(IS), Vm::AtLeast(1), false),
    E::new(Single(FRAME_LABEL_VECTOR), "FrameLabelVector", "Frame Label Vector", Exact(SH), Vm::AtLeast(1), false),
    E::new(Single(FRAME_PRIMARY_ANGLE_VECTOR), "FramePrimaryAngleVector", "Frame Primary Angle Vector", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(FRAME_SECONDARY_ANGLE_VECTOR), "FrameSecondaryAngleVector", "Frame Secondary Angle Vector", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(SLICE_LOCATION_VECTOR), "SliceLocationVector", "Slice Location Vector", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(DISPLAY_WINDOW_LABEL_VECTOR), "DisplayWindowLabelVector", "Display Window Label Vector", Exact(SH), Vm::AtLeast(1), false),
    E::new(Single(NOMINAL_SCANNED_PIXEL_SPACING), "NominalScannedPixelSpacing", "Nominal Scanned Pixel Spacing", Exact(DS), Vm::Exact(2), false),
    E::new(Single(DIGITIZING_DEVICE_TRANSPORT_DIRECTION), "DigitizingDeviceTransportDirection", "Digitizing Device Transport Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ROTATION_OF_SCANNED_FILM), "RotationOfScannedFilm", "Rotation of Scanned Film", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BIOPSY_TARGET_SEQUENCE), "BiopsyTargetSequence", "Biopsy Target Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TARGET_UID), "TargetUID", "Target UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(LOCALIZING_CURSOR_POSITION), "LocalizingCursorPosition", "Localizing Cursor Position", Exact(FL), Vm::Exact(2), false),
    E::new(Single(CALCULATED_TARGET_POSITION), "CalculatedTargetPosition", "Calculated Target Position", Exact(FL), Vm::Exact(3), false),
    E::new(Single(TARGET_LABEL), "TargetLabel", "Target Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(DISPLAYED_Z_VALUE), "DisplayedZValue", "Displayed Z Value", Exact(FL), Vm::Exact(1), false),
    E::new(Single(IVUS_ACQUISITION), "IVUSAcquisition", "IVUS Acquisition", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IVUS_PULLBACK_RATE), "IVUSPullbackRate", "IVUS Pullback Rate", Exact(DS), Vm::Exact(1), false),
    E::new(Single(IVUS_GATED_RATE), "IVUSGatedRate", "IVUS Gated Rate", Exact(DS), Vm::Exact(1), false),
    E::new(Single(IVUS_PULLBACK_START_FRAME_NUMBER), "IVUSPullbackStartFrameNumber", "IVUS Pullback Start Frame Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(IVUS_PULLBACK_STOP_FRAME_NUMBER), "IVUSPullbackStopFrameNumber", "IVUS Pullback Stop Frame Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(LESION_NUMBER), "LesionNumber", "Lesion Number", Exact(IS), Vm::AtLeast(1), false),
    E::new(Single(ACQUISITION_COMMENTS), "AcquisitionComments", "Acquisition Comments", Exact(LT), Vm::Exact(1), true),
    E::new(Single(OUTPUT_POWER), "OutputPower", "Output Power", Exact(SH), Vm::AtLeast(1), false),
    E::new(Single(TRANSDUCER_DATA), "TransducerData", "Transducer Data", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(TRANSDUCER_IDENTIFICATION_SEQUENCE), "TransducerIdentificationSequence", "Transducer Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FOCUS_DEPTH), "FocusDepth", "Focus Depth", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PROCESSING_FUNCTION), "ProcessingFunction", "Processing Function", Exact(LO), Vm::Exact(1), false),
    E::new(Single(POSTPROCESSING_FUNCTION), "PostprocessingFunction", "Postprocessing Function", Exact(LO), Vm::Exact(1), true),
    E::new(Single(MECHANICAL_INDEX), "MechanicalIndex", "Mechanical Index", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BONE_THERMAL_INDEX), "BoneThermalIndex", "Bone Thermal Index", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CRANIAL_THERMAL_INDEX), "CranialThermalIndex", "Cranial Thermal Index", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOFT_TISSUE_THERMAL_INDEX), "SoftTissueThermalIndex", "Soft Tissue Thermal Index", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOFT_TISSUE_FOCUS_THERMAL_INDEX), "SoftTissueFocusThermalIndex", "Soft Tissue-focus Thermal Index", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOFT_TISSUE_SURFACE_THERMAL_INDEX), "SoftTissueSurfaceThermalIndex", "Soft Tissue-surface Thermal Index", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DYNAMIC_RANGE), "DynamicRange", "Dynamic Range", Exact(DS), Vm::Exact(1), true),
    E::new(Single(TOTAL_GAIN), "TotalGain", "Total Gain", Exact(DS), Vm::Exact(1), true),
    E::new(Single(DEPTH_OF_SCAN_FIELD), "DepthOfScanField", "Depth of Scan Field", Exact(IS), Vm::Exact(1), false),
    E::new(Single(PATIENT_POSITION), "PatientPosition", "Patient Position", Exact(CS), Vm::Exact(1), false),
    E::new(Single(VIEW_POSITION), "ViewPosition", "View Position", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PROJECTION_EPONYMOUS_NAME_CODE_SEQUENCE), "ProjectionEponymousNameCodeSequence", "Projection Eponymous Name Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_TRANSFORMATION_MATRIX), "ImageTransformationMatrix", "Image Transformation Matrix", Exact(DS), Vm::Exact(6), true),
    E::new(Single(IMAGE_TRANSLATION_VECTOR), "ImageTranslationVector", "Image Translation Vector", Exact(DS), Vm::Exact(3), true),
    E::new(Single(SENSITIVITY), "Sensitivity", "Sensitivity", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SEQUENCE_OF_ULTRASOUND_REGIONS), "SequenceOfUltrasoundRegions", "Sequence of Ultrasound Regions", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REGION_SPATIAL_FORMAT), "RegionSpatialFormat", "Region Spatial Format", Exact(US), Vm::Exact(1), false),
    E::new(Single(REGION_DATA_TYPE), "RegionDataType", "Region Data Type", Exact(US), Vm::Exact(1), false),
    E::new(Single(REGION_FLAGS), "RegionFlags", "Region Flags", Exact(UL), Vm::Exact(1), false),
    E::new(Single(REGION_LOCATION_MIN_X0), "RegionLocationMinX0", "Region Location Min X0", Exact(UL), Vm::Exact(1), false),
    E::new(Single(REGION_LOCATION_MIN_Y0), "RegionLocationMinY0", "Region Location Min Y0", Exact(UL), Vm::Exact(1), false),
    E::new(Single(REGION_LOCATION_MAX_X1), "RegionLocationMaxX1", "Region Location Max X1", Exact(UL), Vm::Exact(1), false),
    E::new(Single(REGION_LOCATION_MAX_Y1), "RegionLocationMaxY1", "Region Location Max Y1", Exact(UL), Vm::Exact(1), false),
    E::new(Single(REFERENCE_PIXEL_X0), "ReferencePixelX0", "Reference Pixel X0", Exact(SL), Vm::Exact(1), false),
    E::new(Single(REFERENCE_PIXEL_Y0), "ReferencePixelY0", "Reference Pixel Y0", Exact(SL), Vm::Exact(1), false),
    E::new(Single(PHYSICAL_UNITS_X_DIRECTION), "PhysicalUnitsXDirection", "Physical Units X Direction", Exact(US), Vm::Exact(1), false),
    E::new(Single(PHYSICAL_UNITS_Y_DIRECTION), "PhysicalUnitsYDirection", "Physical Units Y Direction", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCE_PIXEL_PHYSICAL_VALUE_X), "ReferencePixelPhysicalValueX", "Reference Pixel Physical Value X", Exact(FD), Vm::Exact(1), false),
    E::new(Single(REFERENCE_PIXEL_PHYSICAL_VALUE_Y), "ReferencePixelPhysicalValueY", "Reference Pixel Physical Value Y", Exact(FD), Vm::Exact(1), false),
    E::new(Single(PHYSICAL_DELTA_X), "PhysicalDeltaX", "Physical Delta X", Exact(FD), Vm::Exact(1), false),
    E::new(Single(PHYSICAL_DELTA_Y), "PhysicalDeltaY", "Physical Delta Y", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TRANSDUCER_FREQUENCY), "TransducerFrequency", "Transducer Frequency", Exact(UL), Vm::Exact(1), false),
    E::new(Single(TRANSDUCER_TYPE), "TransducerType", "Transducer Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PULSE_REPETITION_FREQUENCY), "PulseRepetitionFrequency", "Pulse Repetition Frequency", Exact(UL), Vm::Exact(1), false),
    E::new(Single(DOPPLER_CORRECTION_ANGLE), "DopplerCorrectionAngle", "Doppler Correction Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(STEERING_ANGLE), "SteeringAngle", "Steering Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DOPPLER_SAMPLE_VOLUME_X_POSITION_RETIRED), "DopplerSampleVolumeXPositionRetired", "Doppler Sample Volume X Position (Retired)", Exact(UL), Vm::Exact(1), true),
    E::new(Single(DOPPLER_SAMPLE_VOLUME_X_POSITION), "DopplerSampleVolumeXPosition", "Doppler Sample Volume X Position", Exact(SL), Vm::Exact(1), false),
    E::new(Single(DOPPLER_SAMPLE_VOLUME_Y_POSITION_RETIRED), "DopplerSampleVolumeYPositionRetired", "Doppler Sample Volume Y Position (Retired)", Exact(UL), Vm::Exact(1), true),
    E::new(Single(DOPPLER_SAMPLE_VOLUME_Y_POSITION), "DopplerSampleVolumeYPosition", "Doppler Sample Volume Y Position", Exact(SL), Vm::Exact(1), false),
    E::new(Single(TM_LINE_POSITION_X0RETIRED), "TMLinePositionX0Retired", "TM-Line Position X0 (Retired)", Exact(UL), Vm::Exact(1), true),
    E::new(Single(TM_LINE_POSITION_X0), "TMLinePositionX0", "TM-Line Position X0", Exact(SL), Vm::Exact(1), false),
    E::new(Single(TM_LINE_POSITION_Y0RETIRED), "TMLinePositionY0Retired", "TM-Line Position Y0 (Retired)", Exact(UL), Vm::Exact(1), true),
    E::new(Single(TM_LINE_POSITION_Y0), "TMLinePositionY0", "TM-Line Position Y0", Exact(SL), Vm::Exact(1), false),
    E::new(Single(TM_LINE_POSITION_X1RETIRED), "TMLinePositionX1Retired", "TM-Line Position X1 (Retired)", Exact(UL), Vm::Exact(1), true),
    E::new(Single(TM_LINE_POSITION_X1), "TMLinePositionX1", "TM-Line Position X1", Exact(SL), Vm::Exact(1), false),
    E::new(Single(TM_LINE_POSITION_Y1RETIRED), "TMLinePositionY1Retired", "TM-Line Position Y1 (Retired)", Exact(UL), Vm::Exact(1), true),
    E::new(Single(TM_LINE_POSITION_Y1), "TMLinePositionY1", "TM-Line Position Y1", Exact(SL), Vm::Exact(1), false),
    E::new(Single(PIXEL_COMPONENT_ORGANIZATION), "PixelComponentOrganization", "Pixel Component Organization", Exact(US), Vm::Exact(1), false),
    E::new(Single(PIXEL_COMPONENT_MASK), "PixelComponentMask", "Pixel Component Mask", Exact(UL), Vm::Exact(1), false),
    E::new(Single(PIXEL_COMPONENT_RANGE_START), "PixelComponentRangeStart", "Pixel Component Range Start", Exact(UL), Vm::Exact(1), false),
    E::new(Single(PIXEL_COMPONENT_RANGE_STOP), "PixelComponentRangeStop", "Pixel Component Range Stop", Exact(UL), Vm::Exact(1), false),
    E::new(Single(PIXEL_COMPONENT_PHYSICAL_UNITS), "PixelComponentPhysicalUnits", "Pixel Component Physical Units", Exact(US), Vm::Exact(1), false),
    E::new(Single(PIXEL_COMPONENT_DATA_TYPE), "PixelComponentDataType", "Pixel Component Data Type", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_TABLE_BREAK_POINTS), "NumberOfTableBreakPoints", "Number of Table Break Points", Exact(UL), Vm::Exact(1), false),
    E::new(Single(TABLE_OF_X_BREAK_POINTS), "TableOfXBreakPoints", "Table of X Break Points", Exact(UL), Vm::AtLeast(1), false),
    E::new(Single(TABLE_OF_Y_BREAK_POINTS), "TableOfYBreakPoints", "Table of Y Break Points", Exact(FD), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_TABLE_ENTRIES), "NumberOfTableEntries", "Number of Table Entries", Exact(UL), Vm::Exact(1), false),
    E::new(Single(TABLE_OF_PIXEL_VALUES), "TableOfPixelValues", "Table of Pixel Values", Exact(UL), Vm::AtLeast(1), false),
    E::new(Single(TABLE_OF_PARAMETER_VALUES), "TableOfParameterValues", "Table of Parameter Values", Exact(FL), Vm::AtLeast(1), false),
    E::new(Single(R_WAVE_TIME_VECTOR), "RWaveTimeVector", "R Wave Time Vector", Exact(FL), Vm::AtLeast(1), false),
    E::new(Single(ACTIVE_IMAGE_AREA_OVERLAY_GROUP), "ActiveImageAreaOverlayGroup", "Active Image Area Overlay Group", Exact(US), Vm::Exact(1), false),
    E::new(Single(DETECTOR_CONDITIONS_NOMINAL_FLAG), "DetectorConditionsNominalFlag", "Detector Conditions Nominal Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_TEMPERATURE), "DetectorTemperature", "Detector Temperature", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_TYPE), "DetectorType", "Detector Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_CONFIGURATION), "DetectorConfiguration", "Detector Configuration", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_DESCRIPTION), "DetectorDescription", "Detector Description", Exact(LT), Vm::Exact(1), false),
    E::new(Single(DETECTOR_MODE), "DetectorMode", "Detector Mode", Exact(LT), Vm::Exact(1), false),
    E::new(Single(DETECTOR_ID), "DetectorID", "Detector ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(DATE_OF_LAST_DETECTOR_CALIBRATION), "DateOfLastDetectorCalibration", "Date of Last Detector Calibration", Exact(DA), Vm::Exact(1), false),
    E::new(Single(TIME_OF_LAST_DETECTOR_CALIBRATION), "TimeOfLastDetectorCalibration", "Time of Last Detector Calibration", Exact(TM), Vm::Exact(1), false),
    E::new(Single(EXPOSURES_ON_DETECTOR_SINCE_LAST_CALIBRATION), "ExposuresOnDetectorSinceLastCalibration", "Exposures on Detector Since Last Calibration", Exact(IS), Vm::Exact(1), false),
    E::new(Single(EXPOSURES_ON_DETECTOR_SINCE_MANUFACTURED), "ExposuresOnDetectorSinceManufactured", "Exposures on Detector Since Manufactured", Exact(IS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_TIME_SINCE_LAST_EXPOSURE), "DetectorTimeSinceLastExposure", "Detector Time Since Last Exposure", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_ACTIVE_TIME), "DetectorActiveTime", "Detector Active Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_ACTIVATION_OFFSET_FROM_EXPOSURE), "DetectorActivationOffsetFromExposure", "Detector Activation Offset From Exposure", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_BINNING), "DetectorBinning", "Detector Binning", Exact(DS), Vm::Exact(2), false),
    E::new(Single(DETECTOR_ELEMENT_PHYSICAL_SIZE), "DetectorElementPhysicalSize", "Detector Element Physical Size", Exact(DS), Vm::Exact(2), false),
    E::new(Single(DETECTOR_ELEMENT_SPACING), "DetectorElementSpacing", "Detector Element Spacing", Exact(DS), Vm::Exact(2), false),
    E::new(Single(DETECTOR_ACTIVE_SHAPE), "DetectorActiveShape", "Detector Active Shape", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_ACTIVE_DIMENSIONS), "DetectorActiveDimensions", "Detector Active Dimension(s)", Exact(DS), Vm::Bounded(1, 2), false),
    E::new(Single(DETECTOR_ACTIVE_ORIGIN), "DetectorActiveOrigin", "Detector Active Origin", Exact(DS), Vm::Exact(2), false),
    E::new(Single(DETECTOR_MANUFACTURER_NAME), "DetectorManufacturerName", "Detector Manufacturer Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(DETECTOR_MANUFACTURER_MODEL_NAME), "DetectorManufacturerModelName", "Detector Manufacturer's Model Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(FIELD_OF_VIEW_ORIGIN), "FieldOfViewOrigin", "Field of View Origin", Exact(DS), Vm::Exact(2), false),
    E::new(Single(FIELD_OF_VIEW_ROTATION), "FieldOfViewRotation", "Field of View Rotation", Exact(DS), Vm::Exact(1), false),
    E::new(Single(FIELD_OF_VIEW_HORIZONTAL_FLIP), "FieldOfViewHorizontalFlip", "Field of View Horizontal Flip", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PIXEL_DATA_AREA_ORIGIN_RELATIVE_TO_FOV), "PixelDataAreaOriginRelativeToFOV", "Pixel Data Area Origin Relative To FOV", Exact(FL), Vm::Exact(2), false),
    E::new(Single(PIXEL_DATA_AREA_ROTATION_ANGLE_RELATIVE_TO_FOV), "PixelDataAreaRotationAngleRelativeToFOV", "Pixel Data Area Rotation Angle Relative To FOV", Exact(FL), Vm::Exact(1), false),
    E::new(Single(GRID_ABSORBING_MATERIAL), "GridAbsorbingMaterial", "Grid Absorbing Material", Exact(LT), Vm::Exact(1), false),
    E::new(Single(GRID_SPACING_MATERIAL), "GridSpacingMaterial", "Grid Spacing Material", Exact(LT), Vm::Exact(1), false),
    E::new(Single(GRID_THICKNESS), "GridThickness", "Grid Thickness", Exact(DS), Vm::Exact(1), false),
    E::new(Single(GRID_PITCH), "GridPitch", "Grid Pitch", Exact(DS), Vm::Exact(1), false),
    E::new(Single(GRID_ASPECT_RATIO), "GridAspectRatio", "Grid Aspect Ratio", Exact(IS), Vm::Exact(2), false),
    E::new(Single(GRID_PERIOD), "GridPeriod", "Grid Period", Exact(DS), Vm::Exact(1), false),
    E::new(Single(GRID_FOCAL_DISTANCE), "GridFocalDistance", "Grid Focal Distance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(FILTER_MATERIAL), "FilterMaterial", "Filter Material", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(FILTER_THICKNESS_MINIMUM), "FilterThicknessMinimum", "Filter Thickness Minimum", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(FILTER_THICKNESS_MAXIMUM), "FilterThicknessMaximum", "Filter Thickness Maximum", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(FILTER_BEAM_PATH_LENGTH_MAXIMUM), "FilterBeamPathLengthMaximum", "Filter Beam Path Length Maximum", Exact(FL), Vm::AtLeast(1), false),
    E::new(Single(EXPOSURE_CONTROL_MODE), "ExposureControlMode", "Exposure Control Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_CONTROL_MODE_DESCRIPTION), "ExposureControlModeDescription", "Exposure Control Mode Description", Exact(LT), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_STATUS), "ExposureStatus", "Exposure Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PHOTOTIMER_SETTING), "PhototimerSetting", "Phototimer Setting", Exact(DS), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_TIME_INU_S), "ExposureTimeInuS", "Exposure Time in µS", Exact(DS), Vm::Exact(1), false),
    E::new(Single(X_RAY_TUBE_CURRENT_INU_A), "XRayTubeCurrentInuA", "X-Ray Tube Current in µA", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CONTENT_QUALIFICATION), "ContentQualification", "Content Qualification", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PULSE_SEQUENCE_NAME), "PulseSequenceName", "Pulse Sequence Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(MR_IMAGING_MODIFIER_SEQUENCE), "MRImagingModifierSequence", "MR Imaging Modifier Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ECHO_PULSE_SEQUENCE), "EchoPulseSequence", "Echo Pulse Sequence", Exact(CS), Vm::Exact(1), false),
    E::new(Single(INVERSION_RECOVERY), "InversionRecovery", "Inversion Recovery", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FLOW_COMPENSATION), "FlowCompensation", "Flow Compensation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MULTIPLE_SPIN_ECHO), "MultipleSpinEcho", "Multiple Spin Echo", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MULTI_PLANAR_EXCITATION), "MultiPlanarExcitation", "Multi-planar Excitation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PHASE_CONTRAST), "PhaseContrast", "Phase Contrast", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TIME_OF_FLIGHT_CONTRAST), "TimeOfFlightContrast", "Time of Flight Contrast", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SPOILING), "Spoiling", "Spoiling", Exact(CS), Vm::Exact(1), false),
    E::new(Single(STEADY_STATE_PULSE_SEQUENCE), "SteadyStatePulseSequence", "Steady State Pulse Sequence", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ECHO_PLANAR_PULSE_SEQUENCE), "EchoPlanarPulseSequence", "Echo Planar Pulse Sequence", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TAG_ANGLE_FIRST_AXIS), "TagAngleFirstAxis", "Tag Angle First Axis", Exact(FD), Vm::Exact(1), false),
    E::new(Single(MAGNETIZATION_TRANSFER), "MagnetizationTransfer", "Magnetization Transfer", Exact(CS), Vm::Exact(1), false),
    E::new(Single(T2PREPARATION), "T2Preparation", "T2 Preparation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BLOOD_SIGNAL_NULLING), "BloodSignalNulling", "Blood Signal Nulling", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SATURATION_RECOVERY), "SaturationRecovery", "Saturation Recovery", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SPECTRALLY_SELECTED_SUPPRESSION), "SpectrallySelectedSuppression", "Spectrally Selected Suppression", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SPECTRALLY_SELECTED_EXCITATION), "SpectrallySelectedExcitation", "Spectrally Selected Excitation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SPATIAL_PRESATURATION), "SpatialPresaturation", "Spatial Pre-saturation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TAGGING), "Tagging", "Tagging", Exact(CS), Vm::Exact(1), false),
    E::new(Single(OVERSAMPLING_PHASE), "OversamplingPhase", "Oversampling Phase", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TAG_SPACING_FIRST_DIMENSION), "TagSpacingFirstDimension", "Tag Spacing First Dimension", Exact(FD), Vm::Exact(1), false),
    E::new(Single(GEOMETRY_OF_K_SPACE_TRAVERSAL), "GeometryOfKSpaceTraversal", "Geometry of k-Space Traversal", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SEGMENTED_K_SPACE_TRAVERSAL), "SegmentedKSpaceTraversal", "Segmented k-Space Traversal", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RECTILINEAR_PHASE_ENCODE_REORDERING), "RectilinearPhaseEncodeReordering", "Rectilinear Phase Encode Reordering", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TAG_THICKNESS), "TagThickness", "Tag Thickness", Exact(FD), Vm::Exact(1), false),
    E::new(Single(PARTIAL_FOURIER_DIRECTION), "PartialFourierDirection", "Partial Fourier Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CARDIAC_SYNCHRONIZATION_TECHNIQUE), "CardiacSynchronizationTechnique", "Cardiac Synchronization Technique", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RECEIVE_COIL_MANUFACTURER_NAME), "ReceiveCoilManufacturerName", "Receive Coil Manufacturer Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(MR_RECEIVE_COIL_SEQUENCE), "MRReceiveCoilSequence", "MR Receive Coil Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECEIVE_COIL_TYPE), "ReceiveCoilType", "Receive Coil Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(QUADRATURE_RECEIVE_COIL), "QuadratureReceiveCoil", "Quadrature Receive Coil", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MULTI_COIL_DEFINITION_SEQUENCE), "MultiCoilDefinitionSequence", "Multi-Coil Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MULTI_COIL_CONFIGURATION), "MultiCoilConfiguration", "Multi-Coil Configuration", Exact(LO), Vm::Exact(1), false),
    E::new(Single(MULTI_COIL_ELEMENT_NAME), "MultiCoilElementName", "Multi-Coil Element Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(MULTI_COIL_ELEMENT_USED), "MultiCoilElementUsed", "Multi-Coil Element Used", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MR_TRANSMIT_COIL_SEQUENCE), "MRTransmitCoilSequence", "MR Transmit Coil Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TRANSMIT_COIL_MANUFACTURER_NAME), "TransmitCoilManufacturerName", "Transmit Coil Manufacturer Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(TRANSMIT_COIL_TYPE), "TransmitCoilType", "Transmit Coil Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SPECTRAL_WIDTH), "SpectralWidth", "Spectral Width", Exact(FD), Vm::Bounded(1, 2), false),
    E::new(Single(CHEMICAL_SHIFT_REFERENCE), "ChemicalShiftReference", "Chemical Shift Reference", Exact(FD), Vm::Bounded(1, 2), false),
    E::new(Single(VOLUME_LOCALIZATION_TECHNIQUE), "VolumeLocalizationTechnique", "Volume Localization Technique", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MR_ACQUISITION_FREQUENCY_ENCODING_STEPS), "MRAcquisitionFrequencyEncodingSteps", "MR Acquisition Frequency Encoding Steps", Exact(US), Vm::Exact(1), false),
    E::new(Single(DECOUPLING), "Decoupling", "De-coupling", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DECOUPLED_NUCLEUS), "DecoupledNucleus", "De-coupled Nucleus", Exact(CS), Vm::Bounded(1, 2), false),
    E::new(Single(DECOUPLING_FREQUENCY), "DecouplingFrequency", "De-coupling Frequency", Exact(FD), Vm::Bounded(1, 2), false),
    E::new(Single(DECOUPLING_METHOD), "DecouplingMethod", "De-coupling Method", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DECOUPLING_CHEMICAL_SHIFT_REFERENCE), "DecouplingChemicalShiftReference", "De-coupling Chemical Shift Reference", Exact(FD), Vm::Bounded(1, 2), false),
    E::new(Single(K_SPACE_FILTERING), "KSpaceFiltering", "k-space Filtering", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TIME_DOMAIN_FILTERING), "TimeDomainFiltering", "Time Domain Filtering", Exact(CS), Vm::Bounded(1, 2), false),
    E::new(Single(NUMBER_OF_ZERO_FILLS), "NumberOfZeroFills", "Number of Zero Fills", Exact(US), Vm::Bounded(1, 2), false),
    E::new(Single(BASELINE_CORRECTION), "BaselineCorrection", "Baseline Correction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PARALLEL_REDUCTION_FACTOR_IN_PLANE), "ParallelReductionFactorInPlane", "Parallel Reduction Factor In-plane", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CARDIAC_RR_INTERVAL_SPECIFIED), "CardiacRRIntervalSpecified", "Cardiac R-R Interval Specified", Exact(FD), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_DURATION), "AcquisitionDuration", "Acquisition Duration", Exact(FD), Vm::Exact(1), false),
    E::new(Single(FRAME_ACQUISITION_DATE_TIME), "FrameAcquisitionDateTime", "Frame Acquisition DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_DIRECTIONALITY), "DiffusionDirectionality", "Diffusion Directionality", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_GRADIENT_DIRECTION_SEQUENCE), "DiffusionGradientDirectionSequence", "Diffusion Gradient Direction Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PARALLEL_ACQUISITION), "ParallelAcquisition", "Parallel Acquisition", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PARALLEL_ACQUISITION_TECHNIQUE), "ParallelAcquisitionTechnique", "Parallel Acquisition Technique", Exact(CS), Vm::Exact(1), false),
    E::new(Single(INVERSION_TIMES), "InversionTimes", "Inversion Times", Exact(FD), Vm::AtLeast(1), false),
    E::new(Single(METABOLITE_MAP_DESCRIPTION), "MetaboliteMapDescription", "Metabolite Map Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(PARTIAL_FOURIER), "PartialFourier", "Partial Fourier", Exact(CS), Vm::Exact(1), false),
    E::new(Single(EFFECTIVE_ECHO_TIME), "EffectiveEchoTime", "Effective Echo Time", Exact(FD), Vm::Exact(1), false),
    E::new(Single(METABOLITE_MAP_CODE_SEQUENCE), "MetaboliteMapCodeSequence", "Metabolite Map Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CHEMICAL_SHIFT_SEQUENCE), "ChemicalShiftSequence", "Chemical Shift Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CARDIAC_SIGNAL_SOURCE), "CardiacSignalSource", "Cardiac Signal Source", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_B_VALUE), "DiffusionBValue", "Diffusion b-value", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_GRADIENT_ORIENTATION), "DiffusionGradientOrientation", "Diffusion Gradient Orientation", Exact(FD), Vm::Exact(3), false),
    E::new(Single(VELOCITY_ENCODING_DIRECTION), "VelocityEncodingDirection", "Velocity Encoding Direction", Exact(FD), Vm::Exact(3), false),
    E::new(Single(VELOCITY_ENCODING_MINIMUM_VALUE), "VelocityEncodingMinimumValue", "Velocity Encoding Minimum Value", Exact(FD), Vm::Exact(1), false),
    E::new(Single(VELOCITY_ENCODING_ACQUISITION_SEQUENCE), "VelocityEncodingAcquisitionSequence", "Velocity Encoding Acquisition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_K_SPACE_TRAJECTORIES), "NumberOfKSpaceTrajectories", "Number of k-Space Trajectories", Exact(US), Vm::Exact(1), false),
    E::new(Single(COVERAGE_OF_K_SPACE), "CoverageOfKSpace", "Coverage of k-Space", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SPECTROSCOPY_ACQUISITION_PHASE_ROWS), "SpectroscopyAcquisitionPhaseRows", "Spectroscopy Acquisition Phase Rows", Exact(UL), Vm::Exact(1), false),
    E::new(Single(PARALLEL_REDUCTION_FACTOR_IN_PLANE_RETIRED), "ParallelReductionFactorInPlaneRetired", "Parallel Reduction Factor In-plane (Retired)", Exact(FD), Vm::Exact(1), true),
    E::new(Single(TRANSMITTER_FREQUENCY), "TransmitterFrequency", "Transmitter Frequency", Exact(FD), Vm::Bounded(1, 2), false),
    E::new(Single(RESONANT_NUCLEUS), "ResonantNucleus", "Resonant Nucleus", Exact(CS), Vm::Bounded(1, 2), false),
    E::new(Single(FREQUENCY_CORRECTION), "FrequencyCorrection", "Frequency Correction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MR_SPECTROSCOPY_FOV_GEOMETRY_SEQUENCE), "MRSpectroscopyFOVGeometrySequence", "MR Spectroscopy FOV/Geometry Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SLAB_THICKNESS), "SlabThickness", "Slab Thickness", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SLAB_ORIENTATION), "SlabOrientation", "Slab Orientation", Exact(FD), Vm::Exact(3), false),
    E::new(Single(MID_SLAB_POSITION), "MidSlabPosition", "Mid Slab Position", Exact(FD), Vm::Exact(3), false),
    E::new(Single(MR_SPATIAL_SATURATION_SEQUENCE), "MRSpatialSaturationSequence", "MR Spatial Saturation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MR_TIMING_AND_RELATED_PARAMETERS_SEQUENCE), "MRTimingAndRelatedParametersSequence", "MR Timing and Related Parameters Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MR_ECHO_SEQUENCE), "MREchoSequence", "MR Echo Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MR_MODIFIER_SEQUENCE), "MRModifierSequence", "MR Modifier Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MR_DIFFUSION_SEQUENCE), "MRDiffusionSequence", "MR Diffusion Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CARDIAC_SYNCHRONIZATION_SEQUENCE), "CardiacSynchronizationSequence", "Cardiac Synchronization Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MR_AVERAGES_SEQUENCE), "MRAveragesSequence", "MR Averages Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MRFOV_GEOMETRY_SEQUENCE), "MRFOVGeometrySequence", "MR FOV/Geometry Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(VOLUME_LOCALIZATION_SEQUENCE), "VolumeLocalizationSequence", "Volume Localization Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPECTROSCOPY_ACQUISITION_DATA_COLUMNS), "SpectroscopyAcquisitionDataColumns", "Spectroscopy Acquisition Data Columns", Exact(UL), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_ANISOTROPY_TYPE), "DiffusionAnisotropyType", "Diffusion Anisotropy Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FRAME_REFERENCE_DATE_TIME), "FrameReferenceDateTime", "Frame Reference DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(MR_METABOLITE_MAP_SEQUENCE), "MRMetaboliteMapSequence", "MR Metabolite Map Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PARALLEL_REDUCTION_FACTOR_OUT_OF_PLANE), "ParallelReductionFactorOutOfPlane", "Parallel Reduction Factor out-of-plane", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SPECTROSCOPY_ACQUISITION_OUT_OF_PLANE_PHASE_STEPS), "SpectroscopyAcquisitionOutOfPlanePhaseSteps", "Spectroscopy Acquisition Out-of-plane Phase Steps", Exact(UL), Vm::Exact(1), false),
    E::new(Single(BULK_MOTION_STATUS), "BulkMotionStatus", "Bulk Motion Status", Exact(CS), Vm::Exact(1), true),
    E::new(Single(PARALLEL_REDUCTION_FACTOR_SECOND_IN_PLANE), "ParallelReductionFactorSecondInPlane", "Parallel Reduction Factor Second In-plane", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CARDIAC_BEAT_REJECTION_TECHNIQUE), "CardiacBeatRejectionTechnique", "Cardiac Beat Rejection Technique", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE), "RespiratoryMotionCompensationTechnique", "Respiratory Motion Compensation Technique", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RESPIRATORY_SIGNAL_SOURCE), "RespiratorySignalSource", "Respiratory Signal Source", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BULK_MOTION_COMPENSATION_TECHNIQUE), "BulkMotionCompensationTechnique", "Bulk Motion Compensation Technique", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BULK_MOTION_SIGNAL_SOURCE), "BulkMotionSignalSource", "Bulk Motion Signal Source", Exact(CS), Vm::Exact(1), false),
    E::new(Single(APPLICABLE_SAFETY_STANDARD_AGENCY), "ApplicableSafetyStandardAgency", "Applicable Safety Standard Agency", Exact(CS), Vm::Exact(1), false),
    E::new(Single(APPLICABLE_SAFETY_STANDARD_DESCRIPTION), "ApplicableSafetyStandardDescription", "Applicable Safety Standard Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(OPERATING_MODE_SEQUENCE), "OperatingModeSequence", "Operating Mode Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OPERATING_MODE_TYPE), "OperatingModeType", "Operating Mode Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(OPERATING_MODE), "OperatingMode", "Operating Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SPECIFIC_ABSORPTION_RATE_DEFINITION), "SpecificAbsorptionRateDefinition", "Specific Absorption Rate Definition", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GRADIENT_OUTPUT_TYPE), "GradientOutputType", "Gradient Output Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SPECIFIC_ABSORPTION_RATE_VALUE), "SpecificAbsorptionRateValue", "Specific Absorption Rate Value", Exact(FD), Vm::Exact(1), false),
    E::new(Single(GRADIENT_OUTPUT), "GradientOutput", "Gradient Output", Exact(FD), Vm::Exact(1), false),
    E::new(Single(FLOW_COMPENSATION_DIRECTION), "FlowCompensationDirection", "Flow Compensation Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TAGGING_DELAY), "TaggingDelay", "Tagging Delay", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE_DESCRIPTION), "RespiratoryMotionCompensationTechniqueDescription", "Respiratory Motion Compensation Technique Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(RESPIRATORY_SIGNAL_SOURCE_ID), "RespiratorySignalSourceID", "Respiratory Signal Source ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(CHEMICAL_SHIFT_MINIMUM_INTEGRATION_LIMIT_IN_HZ), "ChemicalShiftMinimumIntegrationLimitInHz", "Chemical Shift Minimum Integration Limit in Hz", Exact(FD), Vm::Exact(1), true),
    E::new(Single(CHEMICAL_SHIFT_MAXIMUM_INTEGRATION_LIMIT_IN_HZ), "ChemicalShiftMaximumIntegrationLimitInHz", "Chemical Shift Maximum Integration Limit in Hz", Exact(FD), Vm::Exact(1), true),
    E::new(Single(MR_VELOCITY_ENCODING_SEQUENCE), "MRVelocityEncodingSequence", "MR Velocity Encoding Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FIRST_ORDER_PHASE_CORRECTION), "FirstOrderPhaseCorrection", "First Order Phase Correction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(WATER_REFERENCED_PHASE_CORRECTION), "WaterReferencedPhaseCorrection", "Water Referenced Phase Correction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MR_SPECTROSCOPY_ACQUISITION_TYPE), "MRSpectroscopyAcquisitionType", "MR Spectroscopy Acquisition Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RESPIRATORY_CYCLE_POSITION), "RespiratoryCyclePosition", "Respiratory Cycle Position", Exact(CS), Vm::Exact(1), false),
    E::new(Single(VELOCITY_ENCODING_MAXIMUM_VALUE), "VelocityEncodingMaximumValue", "Velocity Encoding Maximum Value", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TAG_SPACING_SECOND_DIMENSION), "TagSpacingSecondDimension", "Tag Spacing Second Dimension", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TAG_ANGLE_SECOND_AXIS), "TagAngleSecondAxis", "Tag Angle Second Axis", Exact(SS), Vm::Exact(1), false),
    E::new(Single(FRAME_ACQUISITION_DURATION), "FrameAcquisitionDuration", "Frame Acquisition Duration", Exact(FD), Vm::Exact(1), false),
    E::new(Single(MR_IMAGE_FRAME_TYPE_SEQUENCE), "MRImageFrameTypeSequence", "MR Image Frame Type Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MR_SPECTROSCOPY_FRAME_TYPE_SEQUENCE), "MRSpectroscopyFrameTypeSequence", "MR Spectroscopy Frame Type Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MR_ACQUISITION_PHASE_ENCODING_STEPS_IN_PLANE), "MRAcquisitionPhaseEncodingStepsInPlane", "MR Acquisition Phase Encoding Steps in-plane", Exact(US), Vm::Exact(1), false),
    E::new(Single(MR_ACQUISITION_PHASE_ENCODING_STEPS_OUT_OF_PLANE), "MRAcquisitionPhaseEncodingStepsOutOfPlane", "MR Acquisition Phase Encoding Steps out-of-plane", Exact(US), Vm::Exact(1), false),
    E::new(Single(SPECTROSCOPY_ACQUISITION_PHASE_COLUMNS), "SpectroscopyAcquisitionPhaseColumns", "Spectroscopy Acquisition Phase Columns", Exact(UL), Vm::Exact(1), false),
    E::new(Single(CARDIAC_CYCLE_POSITION), "CardiacCyclePosition", "Cardiac Cycle Position", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SPECIFIC_ABSORPTION_RATE_SEQUENCE), "SpecificAbsorptionRateSequence", "Specific Absorption Rate Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RF_ECHO_TRAIN_LENGTH), "RFEchoTrainLength", "RF Echo Train Length", Exact(US), Vm::Exact(1), false),
    E::new(Single(GRADIENT_ECHO_TRAIN_LENGTH), "GradientEchoTrainLength", "Gradient Echo Train Length", Exact(US), Vm::Exact(1), false),
    E::new(Single(ARTERIAL_SPIN_LABELING_CONTRAST), "ArterialSpinLabelingContrast", "Arterial Spin Labeling Contrast", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MR_ARTERIAL_SPIN_LABELING_SEQUENCE), "MRArterialSpinLabelingSequence", "MR Arterial Spin Labeling Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ASL_TECHNIQUE_DESCRIPTION), "ASLTechniqueDescription", "ASL Technique Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ASL_SLAB_NUMBER), "ASLSlabNumber", "ASL Slab Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(ASL_SLAB_THICKNESS), "ASLSlabThickness", "ASL Slab Thickness", Exact(FD), Vm::Exact(1), false),
    E::new(Single(ASL_SLAB_ORIENTATION), "ASLSlabOrientation", "ASL Slab Orientation", Exact(FD), Vm::Exact(3), false),
    E::new(Single(ASL_MID_SLAB_POSITION), "ASLMidSlabPosition", "ASL Mid Slab Position", Exact(FD), Vm::Exact(3), false),
    E::new(Single(ASL_CONTEXT), "ASLContext", "ASL Context", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ASL_PULSE_TRAIN_DURATION), "ASLPulseTrainDuration", "ASL Pulse Train Duration", Exact(UL), Vm::Exact(1), false),
    E::new(Single(ASL_CRUSHER_FLAG), "ASLCrusherFlag", "ASL Crusher Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ASL_CRUSHER_FLOW_LIMIT), "ASLCrusherFlowLimit", "ASL Crusher Flow Limit", Exact(FD), Vm::Exact(1), false),
    E::new(Single(ASL_CRUSHER_DESCRIPTION), "ASLCrusherDescription", "ASL Crusher Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ASL_BOLUS_CUTOFF_FLAG), "ASLBolusCutoffFlag", "ASL Bolus Cut-off Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ASL_BOLUS_CUTOFF_TIMING_SEQUENCE), "ASLBolusCutoffTimingSequence", "ASL Bolus Cut-off Timing Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ASL_BOLUS_CUTOFF_TECHNIQUE), "ASLBolusCutoffTechnique", "ASL Bolus Cut-off Technique", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ASL_BOLUS_CUTOFF_DELAY_TIME), "ASLBolusCutoffDelayTime", "ASL Bolus Cut-off Delay Time", Exact(UL), Vm::Exact(1), false),
    E::new(Single(ASL_SLAB_SEQUENCE), "ASLSlabSequence", "ASL Slab Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CHEMICAL_SHIFT_MINIMUM_INTEGRATION_LIMIT_INPPM), "ChemicalShiftMinimumIntegrationLimitInppm", "Chemical Shift Minimum Integration Limit in ppm", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CHEMICAL_SHIFT_MAXIMUM_INTEGRATION_LIMIT_INPPM), "ChemicalShiftMaximumIntegrationLimitInppm", "Chemical Shift Maximum Integration Limit in ppm", Exact(FD), Vm::Exact(1), false),
    E::new(Single(WATER_REFERENCE_ACQUISITION), "WaterReferenceAcquisition", "Water Reference Acquisition", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ECHO_PEAK_POSITION), "EchoPeakPosition", "Echo Peak Position", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CT_ACQUISITION_TYPE_SEQUENCE), "CTAcquisitionTypeSequence", "CT Acquisition Type Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_TYPE), "AcquisitionType", "Acquisition Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TUBE_ANGLE), "TubeAngle", "Tube Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CT_ACQUISITION_DETAILS_SEQUENCE), "CTAcquisitionDetailsSequence", "CT Acquisition Details Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REVOLUTION_TIME), "RevolutionTime", "Revolution Time", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SINGLE_COLLIMATION_WIDTH), "SingleCollimationWidth", "Single Collimation Width", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TOTAL_COLLIMATION_WIDTH), "TotalCollimationWidth", "Total Collimation Width", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CT_TABLE_DYNAMICS_SEQUENCE), "CTTableDynamicsSequence", "CT Table Dynamics Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TABLE_SPEED), "TableSpeed", "Table Speed", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TABLE_FEED_PER_ROTATION), "TableFeedPerRotation", "Table Feed per Rotation", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SPIRAL_PITCH_FACTOR), "SpiralPitchFactor", "Spiral Pitch Factor", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CT_GEOMETRY_SEQUENCE), "CTGeometrySequence", "CT Geometry Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DATA_COLLECTION_CENTER_PATIENT), "DataCollectionCenterPatient", "Data Collection Center (Patient)", Exact(FD), Vm::Exact(3), false),
    E::new(Single(CT_RECONSTRUCTION_SEQUENCE), "CTReconstructionSequence", "CT Reconstruction Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECONSTRUCTION_ALGORITHM), "ReconstructionAlgorithm", "Reconstruction Algorithm", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONVOLUTION_KERNEL_GROUP), "ConvolutionKernelGroup", "Convolution Kernel Group", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RECONSTRUCTION_FIELD_OF_VIEW), "ReconstructionFieldOfView", "Reconstruction Field of View", Exact(FD), Vm::Exact(2), false),
    E::new(Single(RECONSTRUCTION_TARGET_CENTER_PATIENT), "ReconstructionTargetCenterPatient", "Reconstruction Target Center (Patient)", Exact(FD), Vm::Exact(3), false),
    E::new(Single(RECONSTRUCTION_ANGLE), "ReconstructionAngle", "Reconstruction Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(IMAGE_FILTER), "ImageFilter", "Image Filter", Exact(SH), Vm::Exact(1), false),
    E::new(Single(CT_EXPOSURE_SEQUENCE), "CTExposureSequence", "CT Exposure Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECONSTRUCTION_PIXEL_SPACING), "ReconstructionPixelSpacing", "Reconstruction Pixel Spacing", Exact(FD), Vm::Exact(2), false),
    E::new(Single(EXPOSURE_MODULATION_TYPE), "ExposureModulationType", "Exposure Modulation Type", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(ESTIMATED_DOSE_SAVING), "EstimatedDoseSaving", "Estimated Dose Saving", Exact(FD), Vm::Exact(1), true),
    E::new(Single(CTX_RAY_DETAILS_SEQUENCE), "CTXRayDetailsSequence", "CT X-Ray Details Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CT_POSITION_SEQUENCE), "CTPositionSequence", "CT Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TABLE_POSITION), "TablePosition", "Table Position", Exact(FD), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_TIME_INMS), "ExposureTimeInms", "Exposure Time in ms", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CT_IMAGE_FRAME_TYPE_SEQUENCE), "CTImageFrameTypeSequence", "CT Image Frame Type Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(X_RAY_TUBE_CURRENT_INM_A), "XRayTubeCurrentInmA", "X-Ray Tube Current in mA", Exact(FD), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_INM_AS), "ExposureInmAs", "Exposure in mAs", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CONSTANT_VOLUME_FLAG), "ConstantVolumeFlag", "Constant Volume Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FLUOROSCOPY_FLAG), "FluoroscopyFlag", "Fluoroscopy Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DISTANCE_SOURCE_TO_DATA_COLLECTION_CENTER), "DistanceSourceToDataCollectionCenter", "Distance Source to Data Collection Center", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_AGENT_NUMBER), "ContrastBolusAgentNumber", "Contrast/Bolus Agent Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_INGREDIENT_CODE_SEQUENCE), "ContrastBolusIngredientCodeSequence", "Contrast/Bolus Ingredient Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTRAST_ADMINISTRATION_PROFILE_SEQUENCE), "ContrastAdministrationProfileSequence", "Contrast Administration Profile Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_USAGE_SEQUENCE), "ContrastBolusUsageSequence", "Contrast/Bolus Usage Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_AGENT_ADMINISTERED), "ContrastBolusAgentAdministered", "Contrast/Bolus Agent Administered", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_AGENT_DETECTED), "ContrastBolusAgentDetected", "Contrast/Bolus Agent Detected", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_AGENT_PHASE), "ContrastBolusAgentPhase", "Contrast/Bolus Agent Phase", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CTD_IVOL), "CTDIvol", "CTDIvol", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CTDI_PHANTOM_TYPE_CODE_SEQUENCE), "CTDIPhantomTypeCodeSequence", "CTDI Phantom Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CALCIUM_SCORING_MASS_FACTOR_PATIENT), "CalciumScoringMassFactorPatient", "Calcium Scoring Mass Factor Patient", Exact(FL), Vm::Exact(1), false),
    E::new(Single(CALCIUM_SCORING_MASS_FACTOR_DEVICE), "CalciumScoringMassFactorDevice", "Calcium Scoring Mass Factor Device", Exact(FL), Vm::Exact(3), false),
    E::new(Single(ENERGY_WEIGHTING_FACTOR), "EnergyWeightingFactor", "Energy Weighting Factor", Exact(FL), Vm::Exact(1), false),
    E::new(Single(CT_ADDITIONAL_X_RAY_SOURCE_SEQUENCE), "CTAdditionalXRaySourceSequence", "CT Additional X-Ray Source Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PROJECTION_PIXEL_CALIBRATION_SEQUENCE), "ProjectionPixelCalibrationSequence", "Projection Pixel Calibration Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DISTANCE_SOURCE_TO_ISOCENTER), "DistanceSourceToIsocenter", "Distance Source to Isocenter", Exact(FL), Vm::Exact(1), false),
    E::new(Single(DISTANCE_OBJECT_TO_TABLE_TOP), "DistanceObjectToTableTop", "Distance Object to Table Top", Exact(FL), Vm::Exact(1), false),
    E::new(Single(OBJECT_PIXEL_SPACING_IN_CENTER_OF_BEAM), "ObjectPixelSpacingInCenterOfBeam", "Object Pixel Spacing in Center of Beam", Exact(FL), Vm::Exact(2), false),
    E::new(Single(POSITIONER_POSITION_SEQUENCE), "PositionerPositionSequence", "Positioner Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TABLE_POSITION_SEQUENCE), "TablePositionSequence", "Table Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COLLIMATOR_SHAPE_SEQUENCE), "CollimatorShapeSequence", "Collimator Shape Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PLANES_IN_ACQUISITION), "PlanesInAcquisition", "Planes in Acquisition", Exact(CS), Vm::Exact(1), false),
    E::new(Single(XAXRF_FRAME_CHARACTERISTICS_SEQUENCE), "XAXRFFrameCharacteristicsSequence", "XA/XRF Frame Characteristics Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FRAME_ACQUISITION_SEQUENCE), "FrameAcquisitionSequence", "Frame Acquisition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(X_RAY_RECEPTOR_TYPE), "XRayReceptorType", "X-Ray Receptor Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_PROTOCOL_NAME), "AcquisitionProtocolName", "Acquisition Protocol Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_PROTOCOL_DESCRIPTION), "AcquisitionProtocolDescription", "Acquisition Protocol Description", Exact(LT), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_INGREDIENT_OPAQUE), "ContrastBolusIngredientOpaque", "Contrast/Bolus Ingredient Opaque", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DISTANCE_RECEPTOR_PLANE_TO_DETECTOR_HOUSING), "DistanceReceptorPlaneToDetectorHousing", "Distance Receptor Plane to Detector Housing", Exact(FL), Vm::Exact(1), false),
    E::new(Single(INTENSIFIER_ACTIVE_SHAPE), "IntensifierActiveShape", "Intensifier Active Shape", Exact(CS), Vm::Exact(1), false),
    E::new(Single(INTENSIFIER_ACTIVE_DIMENSIONS), "IntensifierActiveDimensions", "Intensifier Active Dimension(s)", Exact(FL), Vm::Bounded(1, 2), false),
    E::new(Single(PHYSICAL_DETECTOR_SIZE), "PhysicalDetectorSize", "Physical Detector Size", Exact(FL), Vm::Exact(2), false),
    E::new(Single(POSITION_OF_ISOCENTER_PROJECTION), "PositionOfIsocenterProjection", "Position of Isocenter Projection", Exact(FL), Vm::Exact(2), false),
    E::new(Single(FIELD_OF_VIEW_SEQUENCE), "FieldOfViewSequence", "Field of View Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FIELD_OF_VIEW_DESCRIPTION), "FieldOfViewDescription", "Field of View Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_CONTROL_SENSING_REGIONS_SEQUENCE), "ExposureControlSensingRegionsSequence", "Exposure Control Sensing Regions Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_CONTROL_SENSING_REGION_SHAPE), "ExposureControlSensingRegionShape", "Exposure Control Sensing Region Shape", Exact(CS), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_CONTROL_SENSING_REGION_LEFT_VERTICAL_EDGE), "ExposureControlSensingRegionLeftVerticalEdge", "Exposure Control Sensing Region Left Vertical Edge", Exact(SS), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_CONTROL_SENSING_REGION_RIGHT_VERTICAL_EDGE), "ExposureControlSensingRegionRightVerticalEdge", "Exposure Control Sensing Region Right Vertical Edge", Exact(SS), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_CONTROL_SENSING_REGION_UPPER_HORIZONTAL_EDGE), "ExposureControlSensingRegionUpperHorizontalEdge", "Exposure Control Sensing Region Upper Horizontal Edge", Exact(SS), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_CONTROL_SENSING_REGION_LOWER_HORIZONTAL_EDGE), "ExposureControlSensingRegionLowerHorizontalEdge", "Exposure Control Sensing Region Lower Horizontal Edge", Exact(SS), Vm::Exact(1), false),
    E::new(Single(CENTER_OF_CIRCULAR_EXPOSURE_CONTROL_SENSING_REGION), "CenterOfCircularExposureControlSensingRegion", "Center of Circular Exposure Control Sensing Region", Exact(SS), Vm::Exact(2), false),
    E::new(Single(RADIUS_OF_CIRCULAR_EXPOSURE_CONTROL_SENSING_REGION), "RadiusOfCircularExposureControlSensingRegion", "Radius of Circular Exposure Control Sensing Region", Exact(US), Vm::Exact(1), false),
    E::new(Single(VERTICES_OF_THE_POLYGONAL_EXPOSURE_CONTROL_SENSING_REGION), "VerticesOfThePolygonalExposureControlSensingRegion", "Vertices of the Polygonal Exposure Control Sensing Region", Exact(SS), Vm::AtLeast(2), false),
    E::new(Single(COLUMN_ANGULATION_PATIENT), "ColumnAngulationPatient", "Column Angulation (Patient)", Exact(FL), Vm::Exact(1), false),
    E::new(Single(BEAM_ANGLE), "BeamAngle", "Beam Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(FRAME_DETECTOR_PARAMETERS_SEQUENCE), "FrameDetectorParametersSequence", "Frame Detector Parameters Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CALCULATED_ANATOMY_THICKNESS), "CalculatedAnatomyThickness", "Calculated Anatomy Thickness", Exact(FL), Vm::Exact(1), false),
    E::new(Single(CALIBRATION_SEQUENCE), "CalibrationSequence", "Calibration Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OBJECT_THICKNESS_SEQUENCE), "ObjectThicknessSequence", "Object Thickness Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PLANE_IDENTIFICATION), "PlaneIdentification", "Plane Identification", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FIELD_OF_VIEW_DIMENSIONS_IN_FLOAT), "FieldOfViewDimensionsInFloat", "Field of View Dimension(s) in Float", Exact(FL), Vm::Bounded(1, 2), false),
    E::new(Single(ISOCENTER_REFERENCE_SYSTEM_SEQUENCE), "IsocenterReferenceSystemSequence", "Isocenter Reference System Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(POSITIONER_ISOCENTER_PRIMARY_ANGLE), "PositionerIsocenterPrimaryAngle", "Positioner Isocenter Primary Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(POSITIONER_ISOCENTER_SECONDARY_ANGLE), "PositionerIsocenterSecondaryAngle", "Positioner Isocenter Secondary Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(POSITIONER_ISOCENTER_DETECTOR_ROTATION_ANGLE), "PositionerIsocenterDetectorRotationAngle", "Positioner Isocenter Detector Rotation Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(TABLE_X_POSITION_TO_ISOCENTER), "TableXPositionToIsocenter", "Table X Position to Isocenter", Exact(FL), Vm::Exact(1), false),
    E::new(Single(TABLE_Y_POSITION_TO_ISOCENTER), "TableYPositionToIsocenter", "Table Y Position to Isocenter", Exact(FL), Vm::Exact(1), false),
    E::new(Single(TABLE_Z_POSITION_TO_ISOCENTER), "TableZPositionToIsocenter", "Table Z Position to Isocenter", Exact(FL), Vm::Exact(1), false),
    E::new(Single(TABLE_HORIZONTAL_ROTATION_ANGLE), "TableHorizontalRotationAngle", "Table Horizontal Rotation Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(TABLE_HEAD_TILT_ANGLE), "TableHeadTiltAngle", "Table Head Tilt Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(TABLE_CRADLE_TILT_ANGLE), "TableCradleTiltAngle", "Table Cradle Tilt Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(FRAME_DISPLAY_SHUTTER_SEQUENCE), "FrameDisplayShutterSequence", "Frame Display Shutter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ACQUIRED_IMAGE_AREA_DOSE_PRODUCT), "AcquiredImageAreaDoseProduct", "Acquired Image Area Dose Product", Exact(FL), Vm::Exact(1), false),
    E::new(Single(C_ARM_POSITIONER_TABLETOP_RELATIONSHIP), "CArmPositionerTabletopRelationship", "C-arm Positioner Tabletop Relationship", Exact(CS), Vm::Exact(1), false),
    E::new(Single(X_RAY_GEOMETRY_SEQUENCE), "XRayGeometrySequence", "X-Ray Geometry Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IRRADIATION_EVENT_IDENTIFICATION_SEQUENCE), "IrradiationEventIdentificationSequence", "Irradiation Event Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(X_RAY3D_FRAME_TYPE_SEQUENCE), "XRay3DFrameTypeSequence", "X-Ray 3D Frame Type Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTRIBUTING_SOURCES_SEQUENCE), "ContributingSourcesSequence", "Contributing Sources Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(X_RAY3D_ACQUISITION_SEQUENCE), "XRay3DAcquisitionSequence", "X-Ray 3D Acquisition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRIMARY_POSITIONER_SCAN_ARC), "PrimaryPositionerScanArc", "Primary Positioner Scan Arc", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SECONDARY_POSITIONER_SCAN_ARC), "SecondaryPositionerScanArc", "Secondary Positioner Scan Arc", Exact(FL), Vm::Exact(1), false),
    E::new(Single(PRIMARY_POSITIONER_SCAN_START_ANGLE), "PrimaryPositionerScanStartAngle", "Primary Positioner Scan Start Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SECONDARY_POSITIONER_SCAN_START_ANGLE), "SecondaryPositionerScanStartAngle", "Secondary Positioner Scan Start Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(PRIMARY_POSITIONER_INCREMENT), "PrimaryPositionerIncrement", "Primary Positioner Increment", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SECONDARY_POSITIONER_INCREMENT), "SecondaryPositionerIncrement", "Secondary Positioner Increment", Exact(FL), Vm::Exact(1), false),
    E::new(Single(START_ACQUISITION_DATE_TIME), "StartAcquisitionDateTime", "Start Acquisition DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(END_ACQUISITION_DATE_TIME), "EndAcquisitionDateTime", "End Acquisition DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(PRIMARY_POSITIONER_INCREMENT_SIGN), "PrimaryPositionerIncrementSign", "Primary Positioner Increment Sign", Exact(SS), Vm::Exact(1), false),
    E::new(Single(SECONDARY_POSITIONER_INCREMENT_SIGN), "SecondaryPositionerIncrementSign", "Secondary Positioner Increment Sign", Exact(SS), Vm::Exact(1), false),
    E::new(Single(APPLICATION_NAME), "ApplicationName", "Application Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(APPLICATION_VERSION), "ApplicationVersion", "Application Version", Exact(LO), Vm::Exact(1), false),
    E::new(Single(APPLICATION_MANUFACTURER), "ApplicationManufacturer", "Application Manufacturer", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ALGORITHM_TYPE), "AlgorithmType", "Algorithm Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ALGORITHM_DESCRIPTION), "AlgorithmDescription", "Algorithm Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(X_RAY3D_RECONSTRUCTION_SEQUENCE), "XRay3DReconstructionSequence", "X-Ray 3D Reconstruction Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECONSTRUCTION_DESCRIPTION), "ReconstructionDescription", "Reconstruction Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PER_PROJECTION_ACQUISITION_SEQUENCE), "PerProjectionAcquisitionSequence", "Per Projection Acquisition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DETECTOR_POSITION_SEQUENCE), "DetectorPositionSequence", "Detector Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(X_RAY_ACQUISITION_DOSE_SEQUENCE), "XRayAcquisitionDoseSequence", "X-Ray Acquisition Dose Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(X_RAY_SOURCE_ISOCENTER_PRIMARY_ANGLE), "XRaySourceIsocenterPrimaryAngle", "X-Ray Source Isocenter Primary Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(X_RAY_SOURCE_ISOCENTER_SECONDARY_ANGLE), "XRaySourceIsocenterSecondaryAngle", "X-Ray Source Isocenter Secondary Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(BREAST_SUPPORT_ISOCENTER_PRIMARY_ANGLE), "BreastSupportIsocenterPrimaryAngle", "Breast Support Isocenter Primary Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(BREAST_SUPPORT_ISOCENTER_SECONDARY_ANGLE), "BreastSupportIsocenterSecondaryAngle", "Breast Support Isocenter Secondary Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(BREAST_SUPPORT_X_POSITION_TO_ISOCENTER), "BreastSupportXPositionToIsocenter", "Breast Support X Position to Isocenter", Exact(FD), Vm::Exact(1), false),
    E::new(Single(BREAST_SUPPORT_Y_POSITION_TO_ISOCENTER), "BreastSupportYPositionToIsocenter", "Breast Support Y Position to Isocenter", Exact(FD), Vm::Exact(1), false),
    E::new(Single(BREAST_SUPPORT_Z_POSITION_TO_ISOCENTER), "BreastSupportZPositionToIsocenter", "Breast Support Z Position to Isocenter", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DETECTOR_ISOCENTER_PRIMARY_ANGLE), "DetectorIsocenterPrimaryAngle", "Detector Isocenter Primary Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DETECTOR_ISOCENTER_SECONDARY_ANGLE), "DetectorIsocenterSecondaryAngle", "Detector Isocenter Secondary Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DETECTOR_X_POSITION_TO_ISOCENTER), "DetectorXPositionToIsocenter", "Detector X Position to Isocenter", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DETECTOR_Y_POSITION_TO_ISOCENTER), "DetectorYPositionToIsocenter", "Detector Y Position to Isocenter", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DETECTOR_Z_POSITION_TO_ISOCENTER), "DetectorZPositionToIsocenter", "Detector Z Position to Isocenter", Exact(FD), Vm::Exact(1), false),
    E::new(Single(X_RAY_GRID_SEQUENCE), "XRayGridSequence", "X-Ray Grid Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(X_RAY_FILTER_SEQUENCE), "XRayFilterSequence", "X-Ray Filter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DETECTOR_ACTIVE_AREA_TLHC_POSITION), "DetectorActiveAreaTLHCPosition", "Detector Active Area TLHC Position", Exact(FD), Vm::Exact(3), false),
    E::new(Single(DETECTOR_ACTIVE_AREA_ORIENTATION), "DetectorActiveAreaOrientation", "Detector Active Area Orientation", Exact(FD), Vm::Exact(6), false),
    E::new(Single(POSITIONER_PRIMARY_ANGLE_DIRECTION), "PositionerPrimaryAngleDirection", "Positioner Primary Angle Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_B_MATRIX_SEQUENCE), "DiffusionBMatrixSequence", "Diffusion b-matrix Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_B_VALUE_XX), "DiffusionBValueXX", "Diffusion b-value XX", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_B_VALUE_XY), "DiffusionBValueXY", "Diffusion b-value XY", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_B_VALUE_XZ), "DiffusionBValueXZ", "Diffusion b-value XZ", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_B_VALUE_YY), "DiffusionBValueYY", "Diffusion b-value YY", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_B_VALUE_YZ), "DiffusionBValueYZ", "Diffusion b-value YZ", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_B_VALUE_ZZ), "DiffusionBValueZZ", "Diffusion b-value ZZ", Exact(FD), Vm::Exact(1), false),
    E::new(Single(FUNCTIONAL_MR_SEQUENCE), "FunctionalMRSequence", "Functional MR Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FUNCTIONAL_SETTLING_PHASE_FRAMES_PRESENT), "FunctionalSettlingPhaseFramesPresent", "Functional Settling Phase Frames Present", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FUNCTIONAL_SYNC_PULSE), "FunctionalSyncPulse", "Functional Sync Pulse", Exact(DT), Vm::Exact(1), false),
    E::new(Single(SETTLING_PHASE_FRAME), "SettlingPhaseFrame", "Settling Phase Frame", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DECAY_CORRECTION_DATE_TIME), "DecayCorrectionDateTime", "Decay Correction DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(START_DENSITY_THRESHOLD), "StartDensityThreshold", "Start Density Threshold", Exact(FD), Vm::Exact(1), false),
    E::new(Single(START_RELATIVE_DENSITY_DIFFERENCE_THRESHOLD), "StartRelativeDensityDifferenceThreshold", "Start Relative Density Difference Threshold", Exact(FD), Vm::Exact(1), false),
    E::new(Single(START_CARDIAC_TRIGGER_COUNT_THRESHOLD), "StartCardiacTriggerCountThreshold", "Start Cardiac Trigger Count Threshold", Exact(FD), Vm::Exact(1), false),
    E::new(Single(START_RESPIRATORY_TRIGGER_COUNT_THRESHOLD), "StartRespiratoryTriggerCountThreshold", "Start Respiratory Trigger Count Threshold", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TERMINATION_COUNTS_THRESHOLD), "TerminationCountsThreshold", "Termination Counts Threshold", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TERMINATION_DENSITY_THRESHOLD), "TerminationDensityThreshold", "Termination Density Threshold", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TERMINATION_RELATIVE_DENSITY_THRESHOLD), "TerminationRelativeDensityThreshold", "Termination Relative Density Threshold", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TERMINATION_TIME_THRESHOLD), "TerminationTimeThreshold", "Termination Time Threshold", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TERMINATION_CARDIAC_TRIGGER_COUNT_THRESHOLD), "TerminationCardiacTriggerCountThreshold", "Termination Cardiac Trigger Count Threshold", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TERMINATION_RESPIRATORY_TRIGGER_COUNT_THRESHOLD), "TerminationRespiratoryTriggerCountThreshold", "Termination Respiratory Trigger Count Threshold", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DETECTOR_GEOMETRY), "DetectorGeometry", "Detector Geometry", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TRANSVERSE_DETECTOR_SEPARATION), "TransverseDetectorSeparation", "Transverse Detector Separation", Exact(FD), Vm::Exact(1), false),
    E::new(Single(AXIAL_DETECTOR_DIMENSION), "AxialDetectorDimension", "Axial Detector Dimension", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RADIOPHARMACEUTICAL_AGENT_NUMBER), "RadiopharmaceuticalAgentNumber", "Radiopharmaceutical Agent Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(PET_FRAME_ACQUISITION_SEQUENCE), "PETFrameAcquisitionSequence", "PET Frame Acquisition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PET_DETECTOR_MOTION_DETAILS_SEQUENCE), "PETDetectorMotionDetailsSequence", "PET Detector Motion Details Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PET_TABLE_DYNAMICS_SEQUENCE), "PETTableDynamicsSequence", "PET Table Dynamics Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PET_POSITION_SEQUENCE), "PETPositionSequence", "PET Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PET_FRAME_CORRECTION_FACTORS_SEQUENCE), "PETFrameCorrectionFactorsSequence", "PET Frame Correction Factors Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIOPHARMACEUTICAL_USAGE_SEQUENCE), "RadiopharmaceuticalUsageSequence", "Radiopharmaceutical Usage Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ATTENUATION_CORRECTION_SOURCE), "AttenuationCorrectionSource", "Attenuation Correction Source", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_ITERATIONS), "NumberOfIterations", "Number of Iterations", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_SUBSETS), "NumberOfSubsets", "Number of Subsets", Exact(US), Vm::Exact(1), false),
    E::new(Single(PET_RECONSTRUCTION_SEQUENCE), "PETReconstructionSequence", "PET Reconstruction Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PET_FRAME_TYPE_SEQUENCE), "PETFrameTypeSequence", "PET Frame Type Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TIME_OF_FLIGHT_INFORMATION_USED), "TimeOfFlightInformationUsed", "Time of Flight Information Used", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RECONSTRUCTION_TYPE), "ReconstructionType", "Reconstruction Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DECAY_CORRECTED), "DecayCorrected", "Decay Corrected", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ATTENUATION_CORRECTED), "AttenuationCorrected", "Attenuation Corrected", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SCATTER_CORRECTED), "ScatterCorrected", "Scatter Corrected", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DEAD_TIME_CORRECTED), "DeadTimeCorrected", "Dead Time Corrected", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GANTRY_MOTION_CORRECTED), "GantryMotionCorrected", "Gantry Motion Corrected", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATIENT_MOTION_CORRECTED), "PatientMotionCorrected", "Patient Motion Corrected", Exact(CS), Vm::Exact(1), false),
    E::new(Single(COUNT_LOSS_NORMALIZATION_CORRECTED), "CountLossNormalizationCorrected", "Count Loss Normalization Corrected", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RANDOMS_CORRECTED), "RandomsCorrected", "Randoms Corrected", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NON_UNIFORM_RADIAL_SAMPLING_CORRECTED), "NonUniformRadialSamplingCorrected", "Non-uniform Radial Sampling Corrected", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SENSITIVITY_CALIBRATED), "SensitivityCalibrated", "Sensitivity Calibrated", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_NORMALIZATION_CORRECTION), "DetectorNormalizationCorrection", "Detector Normalization Correction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ITERATIVE_RECONSTRUCTION_METHOD), "IterativeReconstructionMethod", "Iterative Reconstruction Method", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ATTENUATION_CORRECTION_TEMPORAL_RELATIONSHIP), "AttenuationCorrectionTemporalRelationship", "Attenuation Correction Temporal Relationship", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATIENT_PHYSIOLOGICAL_STATE_SEQUENCE), "PatientPhysiologicalStateSequence", "Patient Physiological State Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_PHYSIOLOGICAL_STATE_CODE_SEQUENCE), "PatientPhysiologicalStateCodeSequence", "Patient Physiological State Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DEPTHS_OF_FOCUS), "DepthsOfFocus", "Depth(s) of Focus", Exact(FD), Vm::AtLeast(1), false),
    E::new(Single(EXCLUDED_INTERVALS_SEQUENCE), "ExcludedIntervalsSequence", "Excluded Intervals Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(EXCLUSION_START_DATE_TIME), "ExclusionStartDateTime", "Exclusion Start DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(EXCLUSION_DURATION), "ExclusionDuration", "Exclusion Duration", Exact(FD), Vm::Exact(1), false),
    E::new(Single(US_IMAGE_DESCRIPTION_SEQUENCE), "USImageDescriptionSequence", "US Image Description Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_DATA_TYPE_SEQUENCE), "ImageDataTypeSequence", "Image Data Type Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DATA_TYPE), "DataType", "Data Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TRANSDUCER_SCAN_PATTERN_CODE_SEQUENCE), "TransducerScanPatternCodeSequence", "Transducer Scan Pattern Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ALIASED_DATA_TYPE), "AliasedDataType", "Aliased Data Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(POSITION_MEASURING_DEVICE_USED), "PositionMeasuringDeviceUsed", "Position Measuring Device Used", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TRANSDUCER_GEOMETRY_CODE_SEQUENCE), "TransducerGeometryCodeSequence", "Transducer Geometry Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TRANSDUCER_BEAM_STEERING_CODE_SEQUENCE), "TransducerBeamSteeringCodeSequence", "Transducer Beam Steering Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TRANSDUCER_APPLICATION_CODE_SEQUENCE), "TransducerApplicationCodeSequence", "Transducer Application Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ZERO_VELOCITY_PIXEL_VALUE), "ZeroVelocityPixelValue", "Zero Velocity Pixel Value", Xs, Vm::Exact(1), false),
    E::new(Single(CONTRIBUTING_EQUIPMENT_SEQUENCE), "ContributingEquipmentSequence", "Contributing Equipment Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTRIBUTION_DATE_TIME), "ContributionDateTime", "Contribution DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(CONTRIBUTION_DESCRIPTION), "ContributionDescription", "Contribution Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(STUDY_INSTANCE_UID), "StudyInstanceUID", "Study Instance UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(SERIES_INSTANCE_UID), "SeriesInstanceUID", "Series Instance UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(STUDY_ID), "StudyID", "Study ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SERIES_NUMBER), "SeriesNumber", "Series Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_NUMBER), "AcquisitionNumber", "Acquisition Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(INSTANCE_NUMBER), "InstanceNumber", "Instance Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(ISOTOPE_NUMBER), "IsotopeNumber", "Isotope Number", Exact(IS), Vm::Exact(1), true),
    E::new(Single(PHASE_NUMBER), "PhaseNumber", "Phase Number", Exact(IS), Vm::Exact(1), true),
    E::new(Single(INTERVAL_NUMBER), "IntervalNumber", "Interval Number", Exact(IS), Vm::Exact(1), true),
    E::new(Single(TIME_SLOT_NUMBER), "TimeSlotNumber", "Time Slot Number", Exact(IS), Vm::Exact(1), true),
    E::new(Single(ANGLE_NUMBER), "AngleNumber", "Angle Number", Exact(IS), Vm::Exact(1), true),
    E::new(Single(ITEM_NUMBER), "ItemNumber", "Item Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(PATIENT_ORIENTATION), "PatientOrientation", "Patient Orientation", Exact(CS), Vm::Exact(2), false),
    E::new(Single(OVERLAY_NUMBER), "OverlayNumber", "Overlay Number", Exact(IS), Vm::Exact(1), true),
    E::new(Single(CURVE_NUMBER), "CurveNumber", "Curve Number", Exact(IS), Vm::Exact(1), true),
    E::new(Single(LUT_NUMBER), "LUTNumber", "LUT Number", Exact(IS), Vm::Exact(1), true),
    E::new(Single(PYRAMID_LABEL), "PyramidLabel", "Pyramid Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(IMAGE_POSITION), "ImagePosition", "Image Position", Exact(DS), Vm::Exact(3), true),
    E::new(Single(IMAGE_POSITION_PATIENT), "ImagePositionPatient", "Image Position (Patient)", Exact(DS), Vm::Exact(3), false),
    E::new(Single(IMAGE_ORIENTATION), "ImageOrientation", "Image Orientation", Exact(DS), Vm::Exact(6), true),
    E::new(Single(IMAGE_ORIENTATION_PATIENT), "ImageOrientationPatient", "Image Orientation (Patient)", Exact(DS), Vm::Exact(6), false),
    E::new(Single(LOCATION), "Location", "Location", Exact(DS), Vm::Exact(1), true),
    E::new(Single(FRAME_OF_REFERENCE_UID), "FrameOfReferenceUID", "Frame of Reference UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(LATERALITY), "Laterality", "Laterality", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IMAGE_LATERALITY), "ImageLaterality", "Image Laterality", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IMAGE_GEOMETRY_TYPE), "ImageGeometryType", "Image Geometry Type", Exact(LO), Vm::Exact(1), true),
    E::new(Single(MASKING_IMAGE), "MaskingImage", "Masking Image", Exact(CS), Vm::AtLeast(1), true),
    E::new(Single(REPORT_NUMBER), "ReportNumber", "Report Number", Exact(IS), Vm::Exact(1), true),
    E::new(Single(TEMPORAL_POSITION_IDENTIFIER), "TemporalPositionIdentifier", "Temporal Position Identifier", Exact(IS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_TEMPORAL_POSITIONS), "NumberOfTemporalPositions", "Number of Temporal Positions", Exact(IS), Vm::Exact(1), false),
    E::new(Single(TEMPORAL_RESOLUTION), "TemporalResolution", "Temporal Resolution", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SYNCHRONIZATION_FRAME_OF_REFERENCE_UID), "SynchronizationFrameOfReferenceUID", "Synchronization Frame of Reference UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(SOP_INSTANCE_UID_OF_CONCATENATION_SOURCE), "SOPInstanceUIDOfConcatenationSource", "SOP Instance UID of Concatenation Source", Exact(UI), Vm::Exact(1), false),
    E::new(Single(SERIES_IN_STUDY), "SeriesInStudy", "Series in Study", Exact(IS), Vm::Exact(1), true),
    E::new(Single(ACQUISITIONS_IN_SERIES), "AcquisitionsInSeries", "Acquisitions in Series", Exact(IS), Vm::Exact(1), true),
    E::new(Single(IMAGES_IN_ACQUISITION), "ImagesInAcquisition", "Images in Acquisition", Exact(IS), Vm::Exact(1), false),
    E::new(Single(IMAGES_IN_SERIES), "ImagesInSeries", "Images in Series", Exact(IS), Vm::Exact(1), true),
    E::new(Single(ACQUISITIONS_IN_STUDY), "AcquisitionsInStudy", "Acquisitions in Study", Exact(IS), Vm::Exact(1), true),
    E::new(Single(IMAGES_IN_STUDY), "ImagesInStudy", "Images in Study", Exact(IS), Vm::Exact(1), true),
    E::new(Single(REFERENCE), "Reference", "Reference", Exact(LO), Vm::AtLeast(1), true),
    E::new(Single(TARGET_POSITION_REFERENCE_INDICATOR), "TargetPositionReferenceIndicator", "Target Position Reference Indicator", Exact(LO), Vm::Exact(1), false),
    E::new(Single(POSITION_REFERENCE_INDICATOR), "PositionReferenceIndicator", "Position Reference Indicator", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SLICE_LOCATION), "SliceLocation", "Slice Location", Exact(DS), Vm::Exact(1), false),
    E::new(Single(OTHER_STUDY_NUMBERS), "OtherStudyNumbers", "Other Study Numbers", Exact(IS), Vm::AtLeast(1), true),
    E::new(Single(NUMBER_OF_PATIENT_RELATED_STUDIES), "NumberOfPatientRelatedStudies", "Number of Patient Related Studies", Exact(IS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_PATIENT_RELATED_SERIES), "NumberOfPatientRelatedSeries", "Number of Patient Related Series", Exact(IS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_PATIENT_RELATED_INSTANCES), "NumberOfPatientRelatedInstances", "Number of Patient Related Instances", Exact(IS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_STUDY_RELATED_SERIES), "NumberOfStudyRelatedSeries", "Number of Study Related Series", Exact(IS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_STUDY_RELATED_INSTANCES), "NumberOfStudyRelatedInstances", "Number of Study Related Instances", Exact(IS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_SERIES_RELATED_INSTANCES), "NumberOfSeriesRelatedInstances", "Number of Series Related Instances", Exact(IS), Vm::Exact(1), false),
    E::new(Element100(SOURCE_IMAGE_I_DS), "SourceImageIDs", "Source Image IDs", Exact(CS), Vm::AtLeast(1), true),
    E::new(Single(MODIFYING_DEVICE_ID), "ModifyingDeviceID", "Modifying Device ID", Exact(CS), Vm::Exact(1), true),
    E::new(Single(MODIFIED_IMAGE_ID), "ModifiedImageID", "Modified Image ID", Exact(CS), Vm::Exact(1), true),
    E::new(Single(MODIFIED_IMAGE_DATE), "ModifiedImageDate", "Modified Image Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(MODIFYING_DEVICE_MANUFACTURER), "ModifyingDeviceManufacturer", "Modifying Device Manufacturer", Exact(LO), Vm::Exact(1), true),
    E::new(Single(MODIFIED_IMAGE_TIME), "ModifiedImageTime", "Modified Image Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(MODIFIED_IMAGE_DESCRIPTION), "ModifiedImageDescription", "Modified Image Description", Exact(LO), Vm::Exact(1), true),
    E::new(Single(IMAGE_COMMENTS), "ImageComments", "Image Comments", Exact(LT), Vm::Exact(1), false),
    E::new(Single(ORIGINAL_IMAGE_IDENTIFICATION), "OriginalImageIdentification", "Original Image Identification", Exact(AT), Vm::AtLeast(1), true),
    E::new(Single(ORIGINAL_IMAGE_IDENTIFICATION_NOMENCLATURE), "OriginalImageIdentificationNomenclature", "Original Image Identification Nomenclature", Exact(LO), Vm::AtLeast(1), true),
    E::new(Single(STACK_ID), "StackID", "Stack ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(IN_STACK_POSITION_NUMBER), "InStackPositionNumber", "In-Stack Position Number", Exact(UL), Vm::Exact(1), false),
    E::new(Single(FRAME_CONTENT_SEQUENCE), "FrameContentSequence", "Frame Content Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PLANE_POSITION_SEQUENCE), "PlanePositionSequence", "Plane Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PLANE_ORIENTATION_SEQUENCE), "PlaneOrientationSequence", "Plane Orientation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TEMPORAL_POSITION_INDEX), "TemporalPositionIndex", "Temporal Position Index", Exact(UL), Vm::Exact(1), false),
    E::new(Single(NOMINAL_CARDIAC_TRIGGER_DELAY_TIME), "NominalCardiacTriggerDelayTime", "Nominal Cardiac Trigger Delay Time", Exact(FD), Vm::Exact(1), false),
    E::new(Single(NOMINAL_CARDIAC_TRIGGER_TIME_PRIOR_TO_R_PEAK), "NominalCardiacTriggerTimePriorToRPeak", "Nominal Cardiac Trigger Time Prior To R-Peak", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ACTUAL_CARDIAC_TRIGGER_TIME_PRIOR_TO_R_PEAK), "ActualCardiacTriggerTimePriorToRPeak", "Actual Cardiac Trigger Time Prior To R-Peak", Exact(FL), Vm::Exact(1), false),
    E::new(Single(FRAME_ACQUISITION_NUMBER), "FrameAcquisitionNumber", "Frame Acquisition Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(DIMENSION_INDEX_VALUES), "DimensionIndexValues", "Dimension Index Values", Exact(UL), Vm::AtLeast(1), false),
    E::new(Single(FRAME_COMMENTS), "FrameComments", "Frame Comments", Exact(LT), Vm::Exact(1), false),
    E::new(Single(CONCATENATION_UID), "ConcatenationUID", "Concatenation UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(IN_CONCATENATION_NUMBER), "InConcatenationNumber", "In-concatenation Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(IN_CONCATENATION_TOTAL_NUMBER), "InConcatenationTotalNumber", "In-concatenation Total Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(DIMENSION_ORGANIZATION_UID), "DimensionOrganizationUID", "Dimension Organization UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(DIMENSION_INDEX_POINTER), "DimensionIndexPointer", "Dimension Index Pointer", Exact(AT), Vm::Exact(1), false),
    E::new(Single(FUNCTIONAL_GROUP_POINTER), "FunctionalGroupPointer", "Functional Group Pointer", Exact(AT), Vm::Exact(1), false),
    E::new(Single(UNASSIGNED_SHARED_CONVERTED_ATTRIBUTES_SEQUENCE), "UnassignedSharedConvertedAttributesSequence", "Unassigned Shared Converted Attributes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(UNASSIGNED_PER_FRAME_CONVERTED_ATTRIBUTES_SEQUENCE), "UnassignedPerFrameConvertedAttributesSequence", "Unassigned Per-Frame Converted Attributes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONVERSION_SOURCE_ATTRIBUTES_SEQUENCE), "ConversionSourceAttributesSequence", "Conversion Source Attributes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DIMENSION_INDEX_PRIVATE_CREATOR), "DimensionIndexPrivateCreator", "Dimension Index Private Creator", Exact(LO), Vm::Exact(1), false),
    E::new(Single(DIMENSION_ORGANIZATION_SEQUENCE), "DimensionOrganizationSequence", "Dimension Organization Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DIMENSION_INDEX_SEQUENCE), "DimensionIndexSequence", "Dimension Index Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONCATENATION_FRAME_OFFSET_NUMBER), "ConcatenationFrameOffsetNumber", "Concatenation Frame Offset Number", Exact(UL), Vm::Exact(1), false),
    E::new(Single(FUNCTIONAL_GROUP_PRIVATE_CREATOR), "FunctionalGroupPrivateCreator", "Functional Group Private Creator", Exact(LO), Vm::Exact(1), false),
    E::new(Single(NOMINAL_PERCENTAGE_OF_CARDIAC_PHASE), "NominalPercentageOfCardiacPhase", "Nominal Percentage of Cardiac Phase", Exact(FL), Vm::Exact(1), false),
    E::new(Single(NOMINAL_PERCENTAGE_OF_RESPIRATORY_PHASE), "NominalPercentageOfRespiratoryPhase", "Nominal Percentage of Respiratory Phase", Exact(FL), Vm::Exact(1), false),
    E::new(Single(STARTING_RESPIRATORY_AMPLITUDE), "StartingRespiratoryAmplitude", "Starting Respiratory Amplitude", Exact(FL), Vm::Exact(1), false),
    E::new(Single(STARTING_RESPIRATORY_PHASE), "StartingRespiratoryPhase", "Starting Respiratory Phase", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ENDING_RESPIRATORY_AMPLITUDE), "EndingRespiratoryAmplitude", "Ending Respiratory Amplitude", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ENDING_RESPIRATORY_PHASE), "EndingRespiratoryPhase", "Ending Respiratory Phase", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RESPIRATORY_TRIGGER_TYPE), "RespiratoryTriggerType", "Respiratory Trigger Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RR_INTERVAL_TIME_NOMINAL), "RRIntervalTimeNominal", "R-R Interval Time Nominal", Exact(FD), Vm::Exact(1), false),
    E::new(Single(ACTUAL_CARDIAC_TRIGGER_DELAY_TIME), "ActualCardiacTriggerDelayTime", "Actual Cardiac Trigger Delay Time", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RESPIRATORY_SYNCHRONIZATION_SEQUENCE), "RespiratorySynchronizationSequence", "Respiratory Synchronization Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RESPIRATORY_INTERVAL_TIME), "RespiratoryIntervalTime", "Respiratory Interval Time", Exact(FD), Vm::Exact(1), false),
    E::new(Single(NOMINAL_RESPIRATORY_TRIGGER_DELAY_TIME), "NominalRespiratoryTriggerDelayTime", "Nominal Respiratory Trigger Delay Time", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RESPIRATORY_TRIGGER_DELAY_THRESHOLD), "RespiratoryTriggerDelayThreshold", "Respiratory Trigger Delay Threshold", Exact(FD), Vm::Exact(1), false),
    E::new(Single(ACTUAL_RESPIRATORY_TRIGGER_DELAY_TIME), "ActualRespiratoryTriggerDelayTime", "Actual Respiratory Trigger Delay Time", Exact(FD), Vm::Exact(1), false),
    E::new(Single(IMAGE_POSITION_VOLUME), "ImagePositionVolume", "Image Position (Volume)", Exact(FD), Vm::Exact(3), false),
    E::new(Single(IMAGE_ORIENTATION_VOLUME), "ImageOrientationVolume", "Image Orientation (Volume)", Exact(FD), Vm::Exact(6), false),
    E::new(Single(ULTRASOUND_ACQUISITION_GEOMETRY), "UltrasoundAcquisitionGeometry", "Ultrasound Acquisition Geometry", Exact(CS), Vm::Exact(1), false),
    E::new(Single(APEX_POSITION), "ApexPosition", "Apex Position", Exact(FD), Vm::Exact(3), false),
    E::new(Single(VOLUME_TO_TRANSDUCER_MAPPING_MATRIX), "VolumeToTransducerMappingMatrix", "Volume to Transducer Mapping Matrix", Exact(FD), Vm::Exact(16), false),
    E::new(Single(VOLUME_TO_TABLE_MAPPING_MATRIX), "VolumeToTableMappingMatrix", "Volume to Table Mapping Matrix", Exact(FD), Vm::Exact(16), false),
    E::new(Single(VOLUME_TO_TRANSDUCER_RELATIONSHIP), "VolumeToTransducerRelationship", "Volume to Transducer Relationship", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATIENT_FRAME_OF_REFERENCE_SOURCE), "PatientFrameOfReferenceSource", "Patient Frame of Reference Source", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TEMPORAL_POSITION_TIME_OFFSET), "TemporalPositionTimeOffset", "Temporal Position Time Offset", Exact(FD), Vm::Exact(1), false),
    E::new(Single(PLANE_POSITION_VOLUME_SEQUENCE), "PlanePositionVolumeSequence", "Plane Position (Volume) Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PLANE_ORIENTATION_VOLUME_SEQUENCE), "PlaneOrientationVolumeSequence", "Plane Orientation (Volume) Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TEMPORAL_POSITION_SEQUENCE), "TemporalPositionSequence", "Temporal Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DIMENSION_ORGANIZATION_TYPE), "DimensionOrganizationType", "Dimension Organization Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(VOLUME_FRAME_OF_REFERENCE_UID), "VolumeFrameOfReferenceUID", "Volume Frame of Reference UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(TABLE_FRAME_OF_REFERENCE_UID), "TableFrameOfReferenceUID", "Table Frame of Reference UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(DIMENSION_DESCRIPTION_LABEL), "DimensionDescriptionLabel", "Dimension Description Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_ORIENTATION_IN_FRAME_SEQUENCE), "PatientOrientationInFrameSequence", "Patient Orientation in Frame Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FRAME_LABEL), "FrameLabel", "Frame Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_INDEX), "AcquisitionIndex", "Acquisition Index", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(CONTRIBUTING_SOP_INSTANCES_REFERENCE_SEQUENCE), "ContributingSOPInstancesReferenceSequence", "Contributing SOP Instances Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECONSTRUCTION_INDEX), "ReconstructionIndex", "Reconstruction Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(LIGHT_PATH_FILTER_PASS_THROUGH_WAVELENGTH), "LightPathFilterPassThroughWavelength", "Light Path Filter Pass-Through Wavelength", Exact(US), Vm::Exact(1), false),
    E::new(Single(LIGHT_PATH_FILTER_PASS_BAND), "LightPathFilterPassBand", "Light Path Filter Pass Band", Exact(US), Vm::Exact(2), false),
    E::new(Single(IMAGE_PATH_FILTER_PASS_THROUGH_WAVELENGTH), "ImagePathFilterPassThroughWavelength", "Image Path Filter Pass-Through Wavelength", Exact(US), Vm::Exact(1), false),
    E::new(Single(IMAGE_PATH_FILTER_PASS_BAND), "ImagePathFilterPassBand", "Image Path Filter Pass Band", Exact(US), Vm::Exact(2), false),
    E::new(Single(PATIENT_EYE_MOVEMENT_COMMANDED), "PatientEyeMovementCommanded", "Patient Eye Movement Commanded", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATIENT_EYE_MOVEMENT_COMMAND_CODE_SEQUENCE), "PatientEyeMovementCommandCodeSequence", "Patient Eye Movement Command Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPHERICAL_LENS_POWER), "SphericalLensPower", "Spherical Lens Power", Exact(FL), Vm::Exact(1), false),
    E::new(Single(CYLINDER_LENS_POWER), "CylinderLensPower", "Cylinder Lens Power", Exact(FL), Vm::Exact(1), false),
    E::new(Single(CYLINDER_AXIS), "CylinderAxis", "Cylinder Axis", Exact(FL), Vm::Exact(1), false),
    E::new(Single(EMMETROPIC_MAGNIFICATION), "EmmetropicMagnification", "Emmetropic Magnification", Exact(FL), Vm::Exact(1), false),
    E::new(Single(INTRA_OCULAR_PRESSURE), "IntraOcularPressure", "Intra Ocular Pressure", Exact(FL), Vm::Exact(1), false),
    E::new(Single(HORIZONTAL_FIELD_OF_VIEW), "HorizontalFieldOfView", "Horizontal Field of View", Exact(FL), Vm::Exact(1), false),
    E::new(Single(PUPIL_DILATED), "PupilDilated", "Pupil Dilated", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DEGREE_OF_DILATION), "DegreeOfDilation", "Degree of Dilation", Exact(FL), Vm::Exact(1), false),
    E::new(Single(STEREO_BASELINE_ANGLE), "StereoBaselineAngle", "Stereo Baseline Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(STEREO_BASELINE_DISPLACEMENT), "StereoBaselineDisplacement", "Stereo Baseline Displacement", Exact(FL), Vm::Exact(1), false),
    E::new(Single(STEREO_HORIZONTAL_PIXEL_OFFSET), "StereoHorizontalPixelOffset", "Stereo Horizontal Pixel Offset", Exact(FL), Vm::Exact(1), false),
    E::new(Single(STEREO_VERTICAL_PIXEL_OFFSET), "StereoVerticalPixelOffset", "Stereo Vertical Pixel Offset", Exact(FL), Vm::Exact(1), false),
    E::new(Single(STEREO_ROTATION), "StereoRotation", "Stereo Rotation", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_DEVICE_TYPE_CODE_SEQUENCE), "AcquisitionDeviceTypeCodeSequence", "Acquisition Device Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ILLUMINATION_TYPE_CODE_SEQUENCE), "IlluminationTypeCodeSequence", "Illumination Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LIGHT_PATH_FILTER_TYPE_STACK_CODE_SEQUENCE), "LightPathFilterTypeStackCodeSequence", "Light Path Filter Type Stack Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_PATH_FILTER_TYPE_STACK_CODE_SEQUENCE), "ImagePathFilterTypeStackCodeSequence", "Image Path Filter Type Stack Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LENSES_CODE_SEQUENCE), "LensesCodeSequence", "Lenses Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CHANNEL_DESCRIPTION_CODE_SEQUENCE), "ChannelDescriptionCodeSequence", "Channel Description Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFRACTIVE_STATE_SEQUENCE), "RefractiveStateSequence", "Refractive State Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MYDRIATIC_AGENT_CODE_SEQUENCE), "MydriaticAgentCodeSequence", "Mydriatic Agent Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RELATIVE_IMAGE_POSITION_CODE_SEQUENCE), "RelativeImagePositionCodeSequence", "Relative Image Position Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CAMERA_ANGLE_OF_VIEW), "CameraAngleOfView", "Camera Angle of View", Exact(FL), Vm::Exact(1), false),
    E::new(Single(STEREO_PAIRS_SEQUENCE), "StereoPairsSequence", "Stereo Pairs Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LEFT_IMAGE_SEQUENCE), "LeftImageSequence", "Left Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RIGHT_IMAGE_SEQUENCE), "RightImageSequence", "Right Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(AXIAL_LENGTH_OF_THE_EYE), "AxialLengthOfTheEye", "Axial Length of the Eye", Exact(FL), Vm::Exact(1), false),
    E::new(Single(OPHTHALMIC_FRAME_LOCATION_SEQUENCE), "OphthalmicFrameLocationSequence", "Ophthalmic Frame Location Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCE_COORDINATES), "ReferenceCoordinates", "Reference Coordinates", Exact(FL), Vm::MultipleOf(2), false),
    E::new(Single(DEPTH_SPATIAL_RESOLUTION), "DepthSpatialResolution", "Depth Spatial Resolution", Exact(FL), Vm::Exact(1), false),
    E::new(Single(MAXIMUM_DEPTH_DISTORTION), "MaximumDepthDistortion", "Maximum Depth Distortion", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ALONG_SCAN_SPATIAL_RESOLUTION), "AlongScanSpatialResolution", "Along-scan Spatial Resolution", Exact(FL), Vm::Exact(1), false),
    E::new(Single(MAXIMUM_ALONG_SCAN_DISTORTION), "MaximumAlongScanDistortion", "Maximum Along-scan Distortion", Exact(FL), Vm::Exact(1), false),
    E::new(Single(OPHTHALMIC_IMAGE_ORIENTATION), "OphthalmicImageOrientation", "Ophthalmic Image Orientation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DEPTH_OF_TRANSVERSE_IMAGE), "DepthOfTransverseImage", "Depth of Transverse Image", Exact(FL), Vm::Exact(1), false),
    E::new(Single(MYDRIATIC_AGENT_CONCENTRATION_UNITS_SEQUENCE), "MydriaticAgentConcentrationUnitsSequence", "Mydriatic Agent Concentration Units Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ACROSS_SCAN_SPATIAL_RESOLUTION), "AcrossScanSpatialResolution", "Across-scan Spatial Resolution", Exact(FL), Vm::Exact(1), false),
    E::new(Single(MAXIMUM_ACROSS_SCAN_DISTORTION), "MaximumAcrossScanDistortion", "Maximum Across-scan Distortion", Exact(FL), Vm::Exact(1), false),
    E::new(Single(MYDRIATIC_AGENT_CONCENTRATION), "MydriaticAgentConcentration", "Mydriatic Agent Concentration", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ILLUMINATION_WAVE_LENGTH), "IlluminationWaveLength", "Illumination Wave Length", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ILLUMINATION_POWER), "IlluminationPower", "Illumination Power", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ILLUMINATION_BANDWIDTH), "IlluminationBandwidth", "Illumination Bandwidth", Exact(FL), Vm::Exact(1), false),
    E::new(Single(MYDRIATIC_AGENT_SEQUENCE), "MydriaticAgentSequence", "Mydriatic Agent Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SAMPLES_PER_PIXEL), "SamplesPerPixel", "Samples per Pixel", Exact(US), Vm::Exact(1), false),
    E::new(Single(SAMPLES_PER_PIXEL_USED), "SamplesPerPixelUsed", "Samples per Pixel Used", Exact(US), Vm::Exact(1), false),
    E::new(Single(PHOTOMETRIC_INTERPRETATION), "PhotometricInterpretation", "Photometric Interpretation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IMAGE_DIMENSIONS), "ImageDimensions", "Image Dimensions", Exact(US), Vm::Exact(1), true),
    E::new(Single(PLANAR_CONFIGURATION), "PlanarConfiguration", "Planar Configuration", Exact(US), Vm::Exact(1), false),
    E::new(Single(FRAME_DIMENSION_POINTER_RETIRED), "FrameDimensionPointerRetired", "Frame Dimension Pointer (Retired)", Exact(US), Vm::Exact(1), true),
    E::new(Single(NUMBER_OF_FRAMES), "NumberOfFrames", "Number of Frames", Exact(IS), Vm::Exact(1), false),
    E::new(Single(FRAME_INCREMENT_POINTER), "FrameIncrementPointer", "Frame Increment Pointer", Exact(AT), Vm::AtLeast(1), false),
    E::new(Single(FRAME_DIMENSION_POINTER), "FrameDimensionPointer", "Frame Dimension Pointer", Exact(AT), Vm::AtLeast(1), false),
    E::new(Single(FRAME_DIMENSION_POINTER_TRIAL), "FrameDimensionPointerTrial", "Frame Dimension Pointer (Trial)", Exact(AT), Vm::AtLeast(1), true),
    E::new(Single(ROWS), "Rows", "Rows", Exact(US), Vm::Exact(1), false),
    E::new(Single(COLUMNS), "Columns", "Columns", Exact(US), Vm::Exact(1), false),
    E::new(Single(PLANES), "Planes", "Planes", Exact(US), Vm::Exact(1), true),
    E::new(Single(ULTRASOUND_COLOR_DATA_PRESENT), "UltrasoundColorDataPresent", "Ultrasound Color Data Present", Exact(US), Vm::Exact(1), false),
    E::new(Single(SUBSAMPLING_INTERVAL), "SubsamplingInterval", "Sub-sampling Interval", Exact(LO), Vm::Exact(1), true),
    E::new(Single(PIXEL_SPACING), "PixelSpacing", "Pixel Spacing", Exact(DS), Vm::Exact(2), false),
    E::new(Single(ZOOM_FACTOR), "ZoomFactor", "Zoom Factor", Exact(DS), Vm::Exact(2), false),
    E::new(Single(ZOOM_CENTER), "ZoomCenter", "Zoom Center", Exact(DS), Vm::Exact(2), false),
    E::new(Single(PIXEL_ASPECT_RATIO), "PixelAspectRatio", "Pixel Aspect Ratio", Exact(IS), Vm::Exact(2), false),
    E::new(Single(IMAGE_DIMENSIONS_RETIRED), "ImageDimensionsRetired", "Image Dimensions (Retired)", Exact(US), Vm::Exact(2), true),
    E::new(Single(IMAGE_FORMAT), "ImageFormat", "Image Format", Exact(CS), Vm::Exact(1), true),
    E::new(Single(MANIPULATED_IMAGE), "ManipulatedImage", "Manipulated Image", Exact(LO), Vm::AtLeast(1), true),
    E::new(Single(CORRECTED_IMAGE), "CorrectedImage", "Corrected Image", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(PIXEL_SPACING_CALIBRATION_TYPE), "PixelSpacingCalibrationType", "Pixel Spacing Calibration Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PIXEL_SPACING_CALIBRATION_DESCRIPTION), "PixelSpacingCalibrationDescription", "Pixel Spacing Calibration Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(COMPRESSION_RECOGNITION_CODE), "CompressionRecognitionCode", "Compression Recognition Code", Exact(LO), Vm::Exact(1), true),
    E::new(Single(COMPRESSION_CODE), "CompressionCode", "Compression Code", Exact(CS), Vm::Exact(1), true),
    E::new(Single(COMPRESSION_ORIGINATOR), "CompressionOriginator", "Compression Originator", Exact(CS), Vm::AtLeast(1), true),
    E::new(Single(COMPRESSION_LABEL), "CompressionLabel", "Compression Label", Exact(LO), Vm::Exact(1), true),
    E::new(Single(COMPRESSION_DESCRIPTION), "CompressionDescription", "Compression Description", Exact(SH), Vm::Exact(1), true),
    E::new(Single(COMPRESSION_SEQUENCE), "CompressionSequence", "Compression Sequence", Exact(CS), Vm::AtLeast(1), true),
    E::new(Single(COMPRESSION_STEP_POINTERS), "CompressionStepPointers", "Compression Step Pointers", Exact(AT), Vm::AtLeast(1), true),
    E::new(Single(REPEAT_INTERVAL), "RepeatInterval", "Repeat Interval", Exact(US), Vm::Exact(1), true),
    E::new(Single(BITS_GROUPED), "BitsGrouped", "Bits Grouped", Exact(US), Vm::Exact(1), true),
    E::new(Single(PERIMETER_TABLE), "PerimeterTable", "Perimeter Table", Exact(US), Vm::AtLeast(1), true),
    E::new(Single(PERIMETER_VALUE), "PerimeterValue", "Perimeter Value", Xs, Vm::Exact(1), true),
    E::new(Single(PREDICTOR_ROWS), "PredictorRows", "Predictor Rows", Exact(US), Vm::Exact(1), true),
    E::new(Single(PREDICTOR_COLUMNS), "PredictorColumns", "Predictor Columns", Exact(US), Vm::Exact(1), true),
    E::new(Single(PREDICTOR_CONSTANTS), "PredictorConstants", "Predictor Constants", Exact(US), Vm::AtLeast(1), true),
    E::new(Single(BLOCKED_PIXELS), "BlockedPixels", "Blocked Pixels", Exact(CS), Vm::Exact(1), true),
    E::new(Single(BLOCK_ROWS), "BlockRows", "Block Rows", Exact(US), Vm::Exact(1), true),
    E::new(Single(BLOCK_COLUMNS), "BlockColumns", "Block Columns", Exact(US), Vm::Exact(1), true),
    E::new(Single(ROW_OVERLAP), "RowOverlap", "Row Overlap", Exact(US), Vm::Exact(1), true),
    E::new(Single(COLUMN_OVERLAP), "ColumnOverlap", "Column Overlap", Exact(US), Vm::Exact(1), true),
    E::new(Single(BITS_ALLOCATED), "BitsAllocated", "Bits Allocated", Exact(US), Vm::Exact(1), false),
    E::new(Single(BITS_STORED), "BitsStored", "Bits Stored", Exact(US), Vm::Exact(1), false),
    E::new(Single(HIGH_BIT), "HighBit", "High Bit", Exact(US), Vm::Exact(1), false),
    E::new(Single(PIXEL_REPRESENTATION), "PixelRepresentation", "Pixel Representation", Exact(US), Vm::Exact(1), false),
    E::new(Single(SMALLEST_VALID_PIXEL_VALUE), "SmallestValidPixelValue", "Smallest Valid Pixel Value", Xs, Vm::Exact(1), true),
    E::new(Single(LARGEST_VALID_PIXEL_VALUE), "LargestValidPixelValue", "Largest Valid Pixel Value", Xs, Vm::Exact(1), true),
    E::new(Single(SMALLEST_IMAGE_PIXEL_VALUE), "SmallestImagePixelValue", "Smallest Image Pixel Value", Xs, Vm::Exact(1), false),
    E::new(Single(LARGEST_IMAGE_PIXEL_VALUE), "LargestImagePixelValue", "Largest Image Pixel Value", Xs, Vm::Exact(1), false),
    E::new(Single(SMALLEST_PIXEL_VALUE_IN_SERIES), "SmallestPixelValueInSeries", "Smallest Pixel Value in Series", Xs, Vm::Exact(1), false),
    E::new(Single(LARGEST_PIXEL_VALUE_IN_SERIES), "LargestPixelValueInSeries", "Largest Pixel Value in Series", Xs, Vm::Exact(1), false),
    E::new(Single(SMALLEST_IMAGE_PIXEL_VALUE_IN_PLANE), "SmallestImagePixelValueInPlane", "Smallest Image Pixel Value in Plane", Xs, Vm::Exact(1), true),
    E::new(Single(LARGEST_IMAGE_PIXEL_VALUE_IN_PLANE), "LargestImagePixelValueInPlane", "Largest Image Pixel Value in Plane", Xs, Vm::Exact(1), true),
    E::new(Single(PIXEL_PADDING_VALUE), "PixelPaddingValue", "Pixel Padding Value", Xs, Vm::Exact(1), false),
    E::new(Single(PIXEL_PADDING_RANGE_LIMIT), "PixelPaddingRangeLimit", "Pixel Padding Range Limit", Xs, Vm::Exact(1), false),
    E::new(Single(FLOAT_PIXEL_PADDING_VALUE), "FloatPixelPaddingValue", "Float Pixel Padding Value", Exact(FL), Vm::Exact(1), false),
    E::new(Single(DOUBLE_FLOAT_PIXEL_PADDING_VALUE), "DoubleFloatPixelPaddingValue", "Double Float Pixel Padding Value", Exact(FD), Vm::Exact(1), false),
    E::new(Single(FLOAT_PIXEL_PADDING_RANGE_LIMIT), "FloatPixelPaddingRangeLimit", "Float Pixel Padding Range Limit", Exact(FL), Vm::Exact(1), false),
    E::new(Single(DOUBLE_FLOAT_PIXEL_PADDING_RANGE_LIMIT), "DoubleFloatPixelPaddingRangeLimit", "Double Float Pixel Padding Range Limit", Exact(FD), Vm::Exact(1), false),
    E::new(Single(IMAGE_LOCATION), "ImageLocation", "Image Location", Exact(US), Vm::Exact(1), true),
    E::new(Single(QUALITY_CONTROL_IMAGE), "QualityControlImage", "Quality Control Image", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BURNED_IN_ANNOTATION), "BurnedInAnnotation", "Burned In Annotation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RECOGNIZABLE_VISUAL_FEATURES), "RecognizableVisualFeatures", "Recognizable Visual Features", Exact(CS), Vm::Exact(1), false),
    E::new(Single(LONGITUDINAL_TEMPORAL_INFORMATION_MODIFIED), "LongitudinalTemporalInformationModified", "Longitudinal Temporal Information Modified", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_COLOR_PALETTE_INSTANCE_UID), "ReferencedColorPaletteInstanceUID", "Referenced Color Palette Instance UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(TRANSFORM_LABEL), "TransformLabel", "Transform Label", Exact(LO), Vm::Exact(1), true),
    E::new(Single(TRANSFORM_VERSION_NUMBER), "TransformVersionNumber", "Transform Version Number", Exact(LO), Vm::Exact(1), true),
    E::new(Single(NUMBER_OF_TRANSFORM_STEPS), "NumberOfTransformSteps", "Number of Transform Steps", Exact(US), Vm::Exact(1), true),
    E::new(Single(SEQUENCE_OF_COMPRESSED_DATA), "SequenceOfCompressedData", "Sequence of Compressed Data", Exact(LO), Vm::AtLeast(1), true),
    E::new(Single(DETAILS_OF_COEFFICIENTS), "DetailsOfCoefficients", "Details of Coefficients", Exact(AT), Vm::AtLeast(1), true),
    E::new(Single(DCT_LABEL), "DCTLabel", "DCT Label", Exact(LO), Vm::Exact(1), true),
    E::new(Single(DATA_BLOCK_DESCRIPTION), "DataBlockDescription", "Data Block Description", Exact(CS), Vm::AtLeast(1), true),
    E::new(Single(DATA_BLOCK), "DataBlock", "Data Block", Exact(AT), Vm::AtLeast(1), true),
    E::new(Single(NORMALIZATION_FACTOR_FORMAT), "NormalizationFactorFormat", "Normalization Factor Format", Exact(US), Vm::Exact(1), true),
    E::new(Single(ZONAL_MAP_NUMBER_FORMAT), "ZonalMapNumberFormat", "Zonal Map Number Format", Exact(US), Vm::Exact(1), true),
    E::new(Single(ZONAL_MAP_LOCATION), "ZonalMapLocation", "Zonal Map Location", Exact(AT), Vm::AtLeast(1), true),
    E::new(Single(ZONAL_MAP_FORMAT), "ZonalMapFormat", "Zonal Map Format", Exact(US), Vm::Exact(1), true),
    E::new(Single(ADAPTIVE_MAP_FORMAT), "AdaptiveMapFormat", "Adaptive Map Format", Exact(US), Vm::Exact(1), true),
    E::new(Single(CODE_NUMBER_FORMAT), "CodeNumberFormat", "Code Number Format", Exact(US), Vm::Exact(1), true),
    E::new(Single(PIXEL_INTENSITY_RELATIONSHIP), "PixelIntensityRelationship", "Pixel Intensity Relationship", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PIXEL_INTENSITY_RELATIONSHIP_SIGN), "PixelIntensityRelationshipSign", "Pixel Intensity Relationship Sign", Exact(SS), Vm::Exact(1), false),
    E::new(Single(WINDOW_CENTER), "WindowCenter", "Window Center", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(WINDOW_WIDTH), "WindowWidth", "Window Width", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(RESCALE_INTERCEPT), "RescaleIntercept", "Rescale Intercept", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RESCALE_SLOPE), "RescaleSlope", "Rescale Slope", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RESCALE_TYPE), "RescaleType", "Rescale Type", Exact(LO), Vm::Exact(1), false),
    E::new(Single(WINDOW_CENTER_WIDTH_EXPLANATION), "WindowCenterWidthExplanation", "Window Center & Width Explanation", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(VOILUT_FUNCTION), "VOILUTFunction", "VOI LUT Function", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GRAY_SCALE), "GrayScale", "Gray Scale", Exact(CS), Vm::Exact(1), true),
    E::new(Single(RECOMMENDED_VIEWING_MODE), "RecommendedViewingMode", "Recommended Viewing Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GRAY_LOOKUP_TABLE_DESCRIPTOR), "GrayLookupTableDescriptor", "Gray Lookup Table Descriptor", Xs, Vm::Exact(3), true),
    E::new(Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), "RedPaletteColorLookupTableDescriptor", "Red Palette Color Lookup Table Descriptor", Xs, Vm::Exact(3), false),
    E::new(Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), "GreenPaletteColorLookupTableDescriptor", "Green Palette Color Lookup Table Descriptor", Xs, Vm::Exact(3), false),
    E::new(Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), "BluePaletteColorLookupTableDescriptor", "Blue Palette Color Lookup Table Descriptor", Xs, Vm::Exact(3), false),
    E::new(Single(ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), "AlphaPaletteColorLookupTableDescriptor", "Alpha Palette Color Lookup Table Descriptor", Exact(US), Vm::Exact(3), false),
    E::new(Single(LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), "LargeRedPaletteColorLookupTableDescriptor", "Large Red Palette Color Lookup Table Descriptor", Xs, Vm::Exact(4), true),
    E::new(Single(LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), "LargeGreenPaletteColorLookupTableDescriptor", "Large Green Palette Color Lookup Table Descriptor", Xs, Vm::Exact(4), true),
    E::new(Single(LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), "LargeBluePaletteColorLookupTableDescriptor", "Large Blue Palette Color Lookup Table Descriptor", Xs, Vm::Exact(4), true),
    E::new(Single(PALETTE_COLOR_LOOKUP_TABLE_UID), "PaletteColorLookupTableUID", "Palette Color Lookup Table UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(GRAY_LOOKUP_TABLE_DATA), "GrayLookupTableData", "Gray Lookup Table Data", Xw, Vm::AtLeast(1), true),
    E::new(Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), "RedPaletteColorLookupTableData", "Red Palette Color Lookup Table Data", Exact(OW), Vm::Exact(1), false),
    E::new(Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA), "GreenPaletteColorLookupTableData", "Green Palette Color Lookup Table Data", Exact(OW), Vm::Exact(1), false),
    E::new(Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA), "BluePaletteColorLookupTableData", "Blue Palette Color Lookup Table Data", Exact(OW), Vm::Exact(1), false),
    E::new(Single(ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DATA), "AlphaPaletteColorLookupTableData", "Alpha Palette Color Lookup Table Data", Exact(OW), Vm::Exact(1), false),
    E::new(Single(LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), "LargeRedPaletteColorLookupTableData", "Large Red Palette Color Lookup Table Data", Exact(OW), Vm::Exact(1), true),
    E::new(Single(LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA), "LargeGreenPaletteColorLookupTableData", "Large Green Palette Color Lookup Table Data", Exact(OW), Vm::Exact(1), true),
    E::new(Single(LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA), "LargeBluePaletteColorLookupTableData", "Large Blue Palette Color Lookup Table Data", Exact(OW), Vm::Exact(1), true),
    E::new(Single(LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID), "LargePaletteColorLookupTableUID", "Large Palette Color Lookup Table UID", Exact(UI), Vm::Exact(1), true),
    E::new(Single(SEGMENTED_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), "SegmentedRedPaletteColorLookupTableData", "Segmented Red Palette Color Lookup Table Data", Exact(OW), Vm::Exact(1), false),
    E::new(Single(SEGMENTED_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA), "SegmentedGreenPaletteColorLookupTableData", "Segmented Green Palette Color Lookup Table Data", Exact(OW), Vm::Exact(1), false),
    E::new(Single(SEGMENTED_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA), "SegmentedBluePaletteColorLookupTableData", "Segmented Blue Palette Color Lookup Table Data", Exact(OW), Vm::Exact(1), false),
    E::new(Single(SEGMENTED_ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DATA), "SegmentedAlphaPaletteColorLookupTableData", "Segmented Alpha Palette Color Lookup Table Data", Exact(OW), Vm::Exact(1), false),
    E::new(Single(STORED_VALUE_COLOR_RANGE_SEQUENCE), "StoredValueColorRangeSequence", "Stored Value Color Range Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MINIMUM_STORED_VALUE_MAPPED), "MinimumStoredValueMapped", "Minimum Stored Value Mapped", Exact(FD), Vm::Exact(1), false),
    E::new(Single(MAXIMUM_STORED_VALUE_MAPPED), "MaximumStoredValueMapped", "Maximum Stored Value Mapped", Exact(FD), Vm::Exact(1), false),
    E::new(Single(BREAST_IMPLANT_PRESENT), "BreastImplantPresent", "Breast Implant Present", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PARTIAL_VIEW), "PartialView", "Partial View", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PARTIAL_VIEW_DESCRIPTION), "PartialViewDescription", "Partial View Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(PARTIAL_VIEW_CODE_SEQUENCE), "PartialViewCodeSequence", "Partial View Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPATIAL_LOCATIONS_PRESERVED), "SpatialLocationsPreserved", "Spatial Locations Preserved", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DATA_FRAME_ASSIGNMENT_SEQUENCE), "DataFrameAssignmentSequence", "Data Frame Assignment Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DATA_PATH_ASSIGNMENT), "DataPathAssignment", "Data Path Assignment", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BITS_MAPPED_TO_COLOR_LOOKUP_TABLE), "BitsMappedToColorLookupTable", "Bits Mapped to Color Lookup Table", Exact(US), Vm::Exact(1), false),
    E::new(Single(BLENDING_LUT1SEQUENCE), "BlendingLUT1Sequence", "Blending LUT 1 Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BLENDING_LUT1TRANSFER_FUNCTION), "BlendingLUT1TransferFunction", "Blending LUT 1 Transfer Function", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BLENDING_WEIGHT_CONSTANT), "BlendingWeightConstant", "Blending Weight Constant", Exact(FD), Vm::Exact(1), false),
    E::new(Single(BLENDING_LOOKUP_TABLE_DESCRIPTOR), "BlendingLookupTableDescriptor", "Blending Lookup Table Descriptor", Exact(US), Vm::Exact(3), false),
    E::new(Single(BLENDING_LOOKUP_TABLE_DATA), "BlendingLookupTableData", "Blending Lookup Table Data", Exact(OW), Vm::Exact(1), false),
    E::new(Single(ENHANCED_PALETTE_COLOR_LOOKUP_TABLE_SEQUENCE), "EnhancedPaletteColorLookupTableSequence", "Enhanced Palette Color Lookup Table Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BLENDING_LUT2SEQUENCE), "BlendingLUT2Sequence", "Blending LUT 2 Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BLENDING_LUT2TRANSFER_FUNCTION), "BlendingLUT2TransferFunction", "Blending LUT 2 Transfer Function", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DATA_PATH_ID), "DataPathID", "Data Path ID", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RGBLUT_TRANSFER_FUNCTION), "RGBLUTTransferFunction", "RGB LUT Transfer Function", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ALPHA_LUT_TRANSFER_FUNCTION), "AlphaLUTTransferFunction", "Alpha LUT Transfer Function", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ICC_PROFILE), "ICCProfile", "ICC Profile", Exact(OB), Vm::Exact(1), false),
    E::new(Single(COLOR_SPACE), "ColorSpace", "Color Space", Exact(CS), Vm::Exact(1), false),
    E::new(Single(LOSSY_IMAGE_COMPRESSION), "LossyImageCompression", "Lossy Image Compression", Exact(CS), Vm::Exact(1), false),
    E::new(Single(LOSSY_IMAGE_COMPRESSION_RATIO), "LossyImageCompressionRatio", "Lossy Image Compression Ratio", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(LOSSY_IMAGE_COMPRESSION_METHOD), "LossyImageCompressionMethod", "Lossy Image Compression Method", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(MODALITY_LUT_SEQUENCE), "ModalityLUTSequence", "Modality LUT Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LUT_DESCRIPTOR), "LUTDescriptor", "LUT Descriptor", Xs, Vm::Exact(3), false),
    E::new(Single(LUT_EXPLANATION), "LUTExplanation", "LUT Explanation", Exact(LO), Vm::Exact(1), false),
    E::new(Single(MODALITY_LUT_TYPE), "ModalityLUTType", "Modality LUT Type", Exact(LO), Vm::Exact(1), false),
    E::new(Single(LUT_DATA), "LUTData", "LUT Data", Lt, Vm::AtLeast(1), false),
    E::new(Single(VOILUT_SEQUENCE), "VOILUTSequence", "VOI LUT Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SOFTCOPY_VOILUT_SEQUENCE), "SoftcopyVOILUTSequence", "Softcopy VOI LUT Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_PRESENTATION_COMMENTS), "ImagePresentationComments", "Image Presentation Comments", Exact(LT), Vm::Exact(1), true),
    E::new(Single(BI_PLANE_ACQUISITION_SEQUENCE), "BiPlaneAcquisitionSequence", "Bi-Plane Acquisition Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REPRESENTATIVE_FRAME_NUMBER), "RepresentativeFrameNumber", "Representative Frame Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(FRAME_NUMBERS_OF_INTEREST), "FrameNumbersOfInterest", "Frame Numbers of Interest (FOI)", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(FRAME_OF_INTEREST_DESCRIPTION), "FrameOfInterestDescription", "Frame of Interest Description", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(FRAME_OF_INTEREST_TYPE), "FrameOfInterestType", "Frame of Interest Type", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(MASK_POINTERS), "MaskPointers", "Mask Pointer(s)", Exact(US), Vm::AtLeast(1), true),
    E::new(Single(R_WAVE_POINTER), "RWavePointer", "R Wave Pointer", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(MASK_SUBTRACTION_SEQUENCE), "MaskSubtractionSequence", "Mask Subtraction Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MASK_OPERATION), "MaskOperation", "Mask Operation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(APPLICABLE_FRAME_RANGE), "ApplicableFrameRange", "Applicable Frame Range", Exact(US), Vm::MultipleOf(2), false),
    E::new(Single(MASK_FRAME_NUMBERS), "MaskFrameNumbers", "Mask Frame Numbers", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(CONTRAST_FRAME_AVERAGING), "ContrastFrameAveraging", "Contrast Frame Averaging", Exact(US), Vm::Exact(1), false),
    E::new(Single(MASK_SUB_PIXEL_SHIFT), "MaskSubPixelShift", "Mask Sub-pixel Shift", Exact(FL), Vm::Exact(2), false),
    E::new(Single(TID_OFFSET), "TIDOffset", "TID Offset", Exact(SS), Vm::Exact(1), false),
    E::new(Single(MASK_OPERATION_EXPLANATION), "MaskOperationExplanation", "Mask Operation Explanation", Exact(ST), Vm::Exact(1), false),
    E::new(Single(EQUIPMENT_ADMINISTRATOR_SEQUENCE), "EquipmentAdministratorSequence", "Equipment Administrator Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_DISPLAY_SUBSYSTEMS), "NumberOfDisplaySubsystems", "Number of Display Subsystems", Exact(US), Vm::Exact(1), false),
    E::new(Single(CURRENT_CONFIGURATION_ID), "CurrentConfigurationID", "Current Configuration ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(DISPLAY_SUBSYSTEM_ID), "DisplaySubsystemID", "Display Subsystem ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(PIXEL_DATA_PROVIDER_URL), "PixelDataProviderURL", "Pixel Data Provider URL", Exact(UR), Vm::Exact(1), false),
    E::new(Single(DATA_POINT_ROWS), "DataPointRows", "Data Point Rows", Exact(UL), Vm::Exact(1), false),
    E::new(Single(DATA_POINT_COLUMNS), "DataPointColumns", "Data Point Columns", Exact(UL), Vm::Exact(1), false),
    E::new(Single(SIGNAL_DOMAIN_COLUMNS), "SignalDomainColumns", "Signal Domain Columns", Exact(CS), Vm::Exact(1), false),
    E::new(Single(LARGEST_MONOCHROME_PIXEL_VALUE), "LargestMonochromePixelValue", "Largest Monochrome Pixel Value", Exact(US), Vm::Exact(1), true),
    E::new(Single(DATA_REPRESENTATION), "DataRepresentation", "Data Representation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PIXEL_MEASURES_SEQUENCE), "PixelMeasuresSequence", "Pixel Measures Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FRAME_VOILUT_SEQUENCE), "FrameVOILUTSequence", "Frame VOI LUT Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PIXEL_VALUE_TRANSFORMATION_SEQUENCE), "PixelValueTransformationSequence", "Pixel Value Transformation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SIGNAL_DOMAIN_ROWS), "SignalDomainRows", "Signal Domain Rows", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DISPLAY_FILTER_PERCENTAGE), "DisplayFilterPercentage", "Display Filter Percentage", Exact(FL), Vm::Exact(1), false),
    E::new(Single(FRAME_PIXEL_SHIFT_SEQUENCE), "FramePixelShiftSequence", "Frame Pixel Shift Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SUBTRACTION_ITEM_ID), "SubtractionItemID", "Subtraction Item ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(PIXEL_INTENSITY_RELATIONSHIP_LUT_SEQUENCE), "PixelIntensityRelationshipLUTSequence", "Pixel Intensity Relationship LUT Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FRAME_PIXEL_DATA_PROPERTIES_SEQUENCE), "FramePixelDataPropertiesSequence", "Frame Pixel Data Properties Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GEOMETRICAL_PROPERTIES), "GeometricalProperties", "Geometrical Properties", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GEOMETRIC_MAXIMUM_DISTORTION), "GeometricMaximumDistortion", "Geometric Maximum Distortion", Exact(FL), Vm::Exact(1), false),
    E::new(Single(IMAGE_PROCESSING_APPLIED), "ImageProcessingApplied", "Image Processing Applied", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(MASK_SELECTION_MODE), "MaskSelectionMode", "Mask Selection Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(LUT_FUNCTION), "LUTFunction", "LUT Function", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MASK_VISIBILITY_PERCENTAGE), "MaskVisibilityPercentage", "Mask Visibility Percentage", Exact(FL), Vm::Exact(1), false),
    E::new(Single(PIXEL_SHIFT_SEQUENCE), "PixelShiftSequence", "Pixel Shift Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REGION_PIXEL_SHIFT_SEQUENCE), "RegionPixelShiftSequence", "Region Pixel Shift Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(VERTICES_OF_THE_REGION), "VerticesOfTheRegion", "Vertices of the Region", Exact(SS), Vm::MultipleOf(2), false),
    E::new(Single(MULTI_FRAME_PRESENTATION_SEQUENCE), "MultiFramePresentationSequence", "Multi-frame Presentation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PIXEL_SHIFT_FRAME_RANGE), "PixelShiftFrameRange", "Pixel Shift Frame Range", Exact(US), Vm::MultipleOf(2), false),
    E::new(Single(LUT_FRAME_RANGE), "LUTFrameRange", "LUT Frame Range", Exact(US), Vm::MultipleOf(2), false),
    E::new(Single(IMAGE_TO_EQUIPMENT_MAPPING_MATRIX), "ImageToEquipmentMappingMatrix", "Image to Equipment Mapping Matrix", Exact(DS), Vm::Exact(16), false),
    E::new(Single(EQUIPMENT_COORDINATE_SYSTEM_IDENTIFICATION), "EquipmentCoordinateSystemIdentification", "Equipment Coordinate System Identification", Exact(CS), Vm::Exact(1), false),
    E::new(Single(STUDY_STATUS_ID), "StudyStatusID", "Study Status ID", Exact(CS), Vm::Exact(1), true),
    E::new(Single(STUDY_PRIORITY_ID), "StudyPriorityID", "Study Priority ID", Exact(CS), Vm::Exact(1), true),
    E::new(Single(STUDY_ID_ISSUER), "StudyIDIssuer", "Study ID Issuer", Exact(LO), Vm::Exact(1), true),
    E::new(Single(STUDY_VERIFIED_DATE), "StudyVerifiedDate", "Study Verified Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(STUDY_VERIFIED_TIME), "StudyVerifiedTime", "Study Verified Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(STUDY_READ_DATE), "StudyReadDate", "Study Read Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(STUDY_READ_TIME), "StudyReadTime", "Study Read Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_STUDY_START_DATE), "ScheduledStudyStartDate", "Scheduled Study Start Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_STUDY_START_TIME), "ScheduledStudyStartTime", "Scheduled Study Start Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_STUDY_STOP_DATE), "ScheduledStudyStopDate", "Scheduled Study Stop Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_STUDY_STOP_TIME), "ScheduledStudyStopTime", "Scheduled Study Stop Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_STUDY_LOCATION), "ScheduledStudyLocation", "Scheduled Study Location", Exact(LO), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_STUDY_LOCATION_AE_TITLE), "ScheduledStudyLocationAETitle", "Scheduled Study Location AE Title", Exact(AE), Vm::AtLeast(1), true),
    E::new(Single(REASON_FOR_STUDY), "ReasonForStudy", "Reason for Study", Exact(LO), Vm::Exact(1), true),
    E::new(Single(REQUESTING_PHYSICIAN_IDENTIFICATION_SEQUENCE), "RequestingPhysicianIdentificationSequence", "Requesting Physician Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REQUESTING_PHYSICIAN), "RequestingPhysician", "Requesting Physician", Exact(PN), Vm::Exact(1), false),
    E::new(Single(REQUESTING_SERVICE), "RequestingService", "Requesting Service", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REQUESTING_SERVICE_CODE_SEQUENCE), "RequestingServiceCodeSequence", "Requesting Service Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(STUDY_ARRIVAL_DATE), "StudyArrivalDate", "Study Arrival Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(STUDY_ARRIVAL_TIME), "StudyArrivalTime", "Study Arrival Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(STUDY_COMPLETION_DATE), "StudyCompletionDate", "Study Completion Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(STUDY_COMPLETION_TIME), "StudyCompletionTime", "Study Completion Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(STUDY_COMPONENT_STATUS_ID), "StudyComponentStatusID", "Study Component Status ID", Exact(CS), Vm::Exact(1), true),
    E::new(Single(REQUESTED_PROCEDURE_DESCRIPTION), "RequestedProcedureDescription", "Requested Procedure Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REQUESTED_PROCEDURE_CODE_SEQUENCE), "RequestedProcedureCodeSequence", "Requested Procedure Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_VISIT), "ReasonForVisit", "Reason for Visit", Exact(UT), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_VISIT_CODE_SEQUENCE), "ReasonForVisitCodeSequence", "Reason for Visit Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REQUESTED_CONTRAST_AGENT), "RequestedContrastAgent", "Requested Contrast Agent", Exact(LO), Vm::Exact(1), false),
    E::new(Single(STUDY_COMMENTS), "StudyComments", "Study Comments", Exact(LT), Vm::Exact(1), true),
    E::new(Single(REFERENCED_PATIENT_ALIAS_SEQUENCE), "ReferencedPatientAliasSequence", "Referenced Patient Alias Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(VISIT_STATUS_ID), "VisitStatusID", "Visit Status ID", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ADMISSION_ID), "AdmissionID", "Admission ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ISSUER_OF_ADMISSION_ID), "IssuerOfAdmissionID", "Issuer of Admission ID", Exact(LO), Vm::Exact(1), true),
    E::new(Single(ISSUER_OF_ADMISSION_ID_SEQUENCE), "IssuerOfAdmissionIDSequence", "Issuer of Admission ID Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ROUTE_OF_ADMISSIONS), "RouteOfAdmissions", "Route of Admissions", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_ADMISSION_DATE), "ScheduledAdmissionDate", "Scheduled Admission Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_ADMISSION_TIME), "ScheduledAdmissionTime", "Scheduled Admission Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_DISCHARGE_DATE), "ScheduledDischargeDate", "Scheduled Discharge Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_DISCHARGE_TIME), "ScheduledDischargeTime", "Scheduled Discharge Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_PATIENT_INSTITUTION_RESIDENCE), "ScheduledPatientInstitutionResidence", "Scheduled Patient Institution Residence", Exact(LO), Vm::Exact(1), true),
    E::new(Single(ADMITTING_DATE), "AdmittingDate", "Admitting Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(ADMITTING_TIME), "AdmittingTime", "Admitting Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(DISCHARGE_DATE), "DischargeDate", "Discharge Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(DISCHARGE_TIME), "DischargeTime", "Discharge Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(DISCHARGE_DIAGNOSIS_DESCRIPTION), "DischargeDiagnosisDescription", "Discharge Diagnosis Description", Exact(LO), Vm::Exact(1), true),
    E::new(Single(DISCHARGE_DIAGNOSIS_CODE_SEQUENCE), "DischargeDiagnosisCodeSequence", "Discharge Diagnosis Code Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(SPECIAL_NEEDS), "SpecialNeeds", "Special Needs", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SERVICE_EPISODE_ID), "ServiceEpisodeID", "Service Episode ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ISSUER_OF_SERVICE_EPISODE_ID), "IssuerOfServiceEpisodeID", "Issuer of Service Episode ID", Exact(LO), Vm::Exact(1), true),
    E::new(Single(SERVICE_EPISODE_DESCRIPTION), "ServiceEpisodeDescription", "Service Episode Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ISSUER_OF_SERVICE_EPISODE_ID_SEQUENCE), "IssuerOfServiceEpisodeIDSequence", "Issuer of Service Episode ID Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PERTINENT_DOCUMENTS_SEQUENCE), "PertinentDocumentsSequence", "Pertinent Documents Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PERTINENT_RESOURCES_SEQUENCE), "PertinentResourcesSequence", "Pertinent Resources Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RESOURCE_DESCRIPTION), "ResourceDescription", "Resource Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CURRENT_PATIENT_LOCATION), "CurrentPatientLocation", "Current Patient Location", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_INSTITUTION_RESIDENCE), "PatientInstitutionResidence", "Patient's Institution Residence", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_STATE), "PatientState", "Patient State", Exact(LO), Vm::Exact(1), false),
    E::new(Single(VISIT_COMMENTS), "VisitComments", "Visit Comments", Exact(LT), Vm::Exact(1), false),
    E::new(Single(WAVEFORM_ORIGINALITY), "WaveformOriginality", "Waveform Originality", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_WAVEFORM_CHANNELS), "NumberOfWaveformChannels", "Number of Waveform Channels", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_WAVEFORM_SAMPLES), "NumberOfWaveformSamples", "Number of Waveform Samples", Exact(UL), Vm::Exact(1), false),
    E::new(Single(SAMPLING_FREQUENCY), "SamplingFrequency", "Sampling Frequency", Exact(DS), Vm::Exact(1), false),
    E::new(Single(MULTIPLEX_GROUP_LABEL), "MultiplexGroupLabel", "Multiplex Group Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(CHANNEL_DEFINITION_SEQUENCE), "ChannelDefinitionSequence", "Channel Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(WAVEFORM_CHANNEL_NUMBER), "WaveformChannelNumber", "Waveform Channel Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_LABEL), "ChannelLabel", "Channel Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(CHANNEL_STATUS), "ChannelStatus", "Channel Status", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(CHANNEL_SOURCE_SEQUENCE), "ChannelSourceSequence", "Channel Source Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CHANNEL_SOURCE_MODIFIERS_SEQUENCE), "ChannelSourceModifiersSequence", "Channel Source Modifiers Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SOURCE_WAVEFORM_SEQUENCE), "SourceWaveformSequence", "Source Waveform Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CHANNEL_DERIVATION_DESCRIPTION), "ChannelDerivationDescription", "Channel Derivation Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CHANNEL_SENSITIVITY), "ChannelSensitivity", "Channel Sensitivity", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_SENSITIVITY_UNITS_SEQUENCE), "ChannelSensitivityUnitsSequence", "Channel Sensitivity Units Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CHANNEL_SENSITIVITY_CORRECTION_FACTOR), "ChannelSensitivityCorrectionFactor", "Channel Sensitivity Correction Factor", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_BASELINE), "ChannelBaseline", "Channel Baseline", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_TIME_SKEW), "ChannelTimeSkew", "Channel Time Skew", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_SAMPLE_SKEW), "ChannelSampleSkew", "Channel Sample Skew", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_OFFSET), "ChannelOffset", "Channel Offset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(WAVEFORM_BITS_STORED), "WaveformBitsStored", "Waveform Bits Stored", Exact(US), Vm::Exact(1), false),
    E::new(Single(FILTER_LOW_FREQUENCY), "FilterLowFrequency", "Filter Low Frequency", Exact(DS), Vm::Exact(1), false),
    E::new(Single(FILTER_HIGH_FREQUENCY), "FilterHighFrequency", "Filter High Frequency", Exact(DS), Vm::Exact(1), false),
    E::new(Single(NOTCH_FILTER_FREQUENCY), "NotchFilterFrequency", "Notch Filter Frequency", Exact(DS), Vm::Exact(1), false),
    E::new(Single(NOTCH_FILTER_BANDWIDTH), "NotchFilterBandwidth", "Notch Filter Bandwidth", Exact(DS), Vm::Exact(1), false),
    E::new(Single(WAVEFORM_DATA_DISPLAY_SCALE), "WaveformDataDisplayScale", "Waveform Data Display Scale", Exact(FL), Vm::Exact(1), false),
    E::new(Single(WAVEFORM_DISPLAY_BACKGROUND_CIE_LAB_VALUE), "WaveformDisplayBackgroundCIELabValue", "Waveform Display Background CIELab Value", Exact(US), Vm::Exact(3), false),
    E::new(Single(WAVEFORM_PRESENTATION_GROUP_SEQUENCE), "WaveformPresentationGroupSequence", "Waveform Presentation Group Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_GROUP_NUMBER), "PresentationGroupNumber", "Presentation Group Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(CHANNEL_DISPLAY_SEQUENCE), "ChannelDisplaySequence", "Channel Display Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CHANNEL_RECOMMENDED_DISPLAY_CIE_LAB_VALUE), "ChannelRecommendedDisplayCIELabValue", "Channel Recommended Display CIELab Value", Exact(US), Vm::Exact(3), false),
    E::new(Single(CHANNEL_POSITION), "ChannelPosition", "Channel Position", Exact(FL), Vm::Exact(1), false),
    E::new(Single(DISPLAY_SHADING_FLAG), "DisplayShadingFlag", "Display Shading Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FRACTIONAL_CHANNEL_DISPLAY_SCALE), "FractionalChannelDisplayScale", "Fractional Channel Display Scale", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ABSOLUTE_CHANNEL_DISPLAY_SCALE), "AbsoluteChannelDisplayScale", "Absolute Channel Display Scale", Exact(FL), Vm::Exact(1), false),
    E::new(Single(MULTIPLEXED_AUDIO_CHANNELS_DESCRIPTION_CODE_SEQUENCE), "MultiplexedAudioChannelsDescriptionCodeSequence", "Multiplexed Audio Channels Description Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CHANNEL_IDENTIFICATION_CODE), "ChannelIdentificationCode", "Channel Identification Code", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_MODE), "ChannelMode", "Channel Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_STATION_AE_TITLE), "ScheduledStationAETitle", "Scheduled Station AE Title", Exact(AE), Vm::AtLeast(1), false),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_START_DATE), "ScheduledProcedureStepStartDate", "Scheduled Procedure Step Start Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_START_TIME), "ScheduledProcedureStepStartTime", "Scheduled Procedure Step Start Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_END_DATE), "ScheduledProcedureStepEndDate", "Scheduled Procedure Step End Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_END_TIME), "ScheduledProcedureStepEndTime", "Scheduled Procedure Step End Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PERFORMING_PHYSICIAN_NAME), "ScheduledPerformingPhysicianName", "Scheduled Performing Physician's Name", Exact(PN), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_DESCRIPTION), "ScheduledProcedureStepDescription", "Scheduled Procedure Step Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PROTOCOL_CODE_SEQUENCE), "ScheduledProtocolCodeSequence", "Scheduled Protocol Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_ID), "ScheduledProcedureStepID", "Scheduled Procedure Step ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(STAGE_CODE_SEQUENCE), "StageCodeSequence", "Stage Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE), "ScheduledPerformingPhysicianIdentificationSequence", "Scheduled Performing Physician Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_STATION_NAME), "ScheduledStationName", "Scheduled Station Name", Exact(SH), Vm::AtLeast(1), false),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_LOCATION), "ScheduledProcedureStepLocation", "Scheduled Procedure Step Location", Exact(SH), Vm::Exact(1), false),
    E::new(Single(PRE_MEDICATION), "PreMedication", "Pre-Medication", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_STATUS), "ScheduledProcedureStepStatus", "Scheduled Procedure Step Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ORDER_PLACER_IDENTIFIER_SEQUENCE), "OrderPlacerIdentifierSequence", "Order Placer Identifier Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ORDER_FILLER_IDENTIFIER_SEQUENCE), "OrderFillerIdentifierSequence", "Order Filler Identifier Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LOCAL_NAMESPACE_ENTITY_ID), "LocalNamespaceEntityID", "Local Namespace Entity ID", Exact(UT), Vm::Exact(1), false),
    E::new(Single(UNIVERSAL_ENTITY_ID), "UniversalEntityID", "Universal Entity ID", Exact(UT), Vm::Exact(1), false),
    E::new(Single(UNIVERSAL_ENTITY_ID_TYPE), "UniversalEntityIDType", "Universal Entity ID Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IDENTIFIER_TYPE_CODE), "IdentifierTypeCode", "Identifier Type Code", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ASSIGNING_FACILITY_SEQUENCE), "AssigningFacilitySequence", "Assigning Facility Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ASSIGNING_JURISDICTION_CODE_SEQUENCE), "AssigningJurisdictionCodeSequence", "Assigning Jurisdiction Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ASSIGNING_AGENCY_OR_DEPARTMENT_CODE_SEQUENCE), "AssigningAgencyOrDepartmentCodeSequence", "Assigning Agency or Department Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_SEQUENCE), "ScheduledProcedureStepSequence", "Scheduled Procedure Step Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_NON_IMAGE_COMPOSITE_SOP_INSTANCE_SEQUENCE), "ReferencedNonImageCompositeSOPInstanceSequence", "Referenced Non-Image Composite SOP Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PERFORMED_STATION_AE_TITLE), "PerformedStationAETitle", "Performed Station AE Title", Exact(AE), Vm::Exact(1), false),
    E::new(Single(PERFORMED_STATION_NAME), "PerformedStationName", "Performed Station Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(PERFORMED_LOCATION), "PerformedLocation", "Performed Location", Exact(SH), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCEDURE_STEP_START_DATE), "PerformedProcedureStepStartDate", "Performed Procedure Step Start Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCEDURE_STEP_START_TIME), "PerformedProcedureStepStartTime", "Performed Procedure Step Start Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCEDURE_STEP_END_DATE), "PerformedProcedureStepEndDate", "Performed Procedure Step End Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCEDURE_STEP_END_TIME), "PerformedProcedureStepEndTime", "Performed Procedure Step End Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCEDURE_STEP_STATUS), "PerformedProcedureStepStatus", "Performed Procedure Step Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCEDURE_STEP_ID), "PerformedProcedureStepID", "Performed Procedure Step ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCEDURE_STEP_DESCRIPTION), "PerformedProcedureStepDescription", "Performed Procedure Step Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCEDURE_TYPE_DESCRIPTION), "PerformedProcedureTypeDescription", "Performed Procedure Type Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROTOCOL_CODE_SEQUENCE), "PerformedProtocolCodeSequence", "Performed Protocol Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROTOCOL_TYPE), "PerformedProtocolType", "Performed Protocol Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_STEP_ATTRIBUTES_SEQUENCE), "ScheduledStepAttributesSequence", "Scheduled Step Attributes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REQUEST_ATTRIBUTES_SEQUENCE), "RequestAttributesSequence", "Request Attributes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP), "CommentsOnThePerformedProcedureStep", "Comments on the Performed Procedure Step", Exact(ST), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCEDURE_STEP_DISCONTINUATION_REASON_CODE_SEQUENCE), "PerformedProcedureStepDiscontinuationReasonCodeSequence", "Performed Procedure Step Discontinuation Reason Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(QUANTITY_SEQUENCE), "QuantitySequence", "Quantity Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(QUANTITY), "Quantity", "Quantity", Exact(DS), Vm::Exact(1), false),
    E::new(Single(MEASURING_UNITS_SEQUENCE), "MeasuringUnitsSequence", "Measuring Units Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BILLING_ITEM_SEQUENCE), "BillingItemSequence", "Billing Item Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TOTAL_TIME_OF_FLUOROSCOPY), "TotalTimeOfFluoroscopy", "Total Time of Fluoroscopy", Exact(US), Vm::Exact(1), true),
    E::new(Single(TOTAL_NUMBER_OF_EXPOSURES), "TotalNumberOfExposures", "Total Number of Exposures", Exact(US), Vm::Exact(1), true),
    E::new(Single(ENTRANCE_DOSE), "EntranceDose", "Entrance Dose", Exact(US), Vm::Exact(1), false),
    E::new(Single(EXPOSED_AREA), "ExposedArea", "Exposed Area", Exact(US), Vm::Bounded(1, 2), false),
    E::new(Single(DISTANCE_SOURCE_TO_ENTRANCE), "DistanceSourceToEntrance", "Distance Source to Entrance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DISTANCE_SOURCE_TO_SUPPORT), "DistanceSourceToSupport", "Distance Source to Support", Exact(DS), Vm::Exact(1), true),
    E::new(Single(EXPOSURE_DOSE_SEQUENCE), "ExposureDoseSequence", "Exposure Dose Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMMENTS_ON_RADIATION_DOSE), "CommentsOnRadiationDose", "Comments on Radiation Dose", Exact(ST), Vm::Exact(1), false),
    E::new(Single(X_RAY_OUTPUT), "XRayOutput", "X-Ray Output", Exact(DS), Vm::Exact(1), false),
    E::new(Single(HALF_VALUE_LAYER), "HalfValueLayer", "Half Value Layer", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ORGAN_DOSE), "OrganDose", "Organ Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ORGAN_EXPOSED), "OrganExposed", "Organ Exposed", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BILLING_PROCEDURE_STEP_SEQUENCE), "BillingProcedureStepSequence", "Billing Procedure Step Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FILM_CONSUMPTION_SEQUENCE), "FilmConsumptionSequence", "Film Consumption Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BILLING_SUPPLIES_AND_DEVICES_SEQUENCE), "BillingSuppliesAndDevicesSequence", "Billing Supplies and Devices Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_PROCEDURE_STEP_SEQUENCE), "ReferencedProcedureStepSequence", "Referenced Procedure Step Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(PERFORMED_SERIES_SEQUENCE), "PerformedSeriesSequence", "Performed Series Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMMENTS_ON_THE_SCHEDULED_PROCEDURE_STEP), "CommentsOnTheScheduledProcedureStep", "Comments on the Scheduled Procedure Step", Exact(LT), Vm::Exact(1), false),
    E::new(Single(PROTOCOL_CONTEXT_SEQUENCE), "ProtocolContextSequence", "Protocol Context Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTENT_ITEM_MODIFIER_SEQUENCE), "ContentItemModifierSequence", "Content Item Modifier Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_SPECIMEN_SEQUENCE), "ScheduledSpecimenSequence", "Scheduled Specimen Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPECIMEN_ACCESSION_NUMBER), "SpecimenAccessionNumber", "Specimen Accession Number", Exact(LO), Vm::Exact(1), true),
    E::new(Single(CONTAINER_IDENTIFIER), "ContainerIdentifier", "Container Identifier", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ISSUER_OF_THE_CONTAINER_IDENTIFIER_SEQUENCE), "IssuerOfTheContainerIdentifierSequence", "Issuer of the Container Identifier Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ALTERNATE_CONTAINER_IDENTIFIER_SEQUENCE), "AlternateContainerIdentifierSequence", "Alternate Container Identifier Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTAINER_TYPE_CODE_SEQUENCE), "ContainerTypeCodeSequence", "Container Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTAINER_DESCRIPTION), "ContainerDescription", "Container Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CONTAINER_COMPONENT_SEQUENCE), "ContainerComponentSequence", "Container Component Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPECIMEN_SEQUENCE), "SpecimenSequence", "Specimen Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(SPECIMEN_IDENTIFIER), "SpecimenIdentifier", "Specimen Identifier", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SPECIMEN_DESCRIPTION_SEQUENCE_TRIAL), "SpecimenDescriptionSequenceTrial", "Specimen Description Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(SPECIMEN_DESCRIPTION_TRIAL), "SpecimenDescriptionTrial", "Specimen Description (Trial)", Exact(ST), Vm::Exact(1), true),
    E::new(Single(SPECIMEN_UID), "SpecimenUID", "Specimen UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_CONTEXT_SEQUENCE), "AcquisitionContextSequence", "Acquisition Context Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_CONTEXT_DESCRIPTION), "AcquisitionContextDescription", "Acquisition Context Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(SPECIMEN_DESCRIPTION_SEQUENCE), "SpecimenDescriptionSequence", "Specimen Description Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ISSUER_OF_THE_SPECIMEN_IDENTIFIER_SEQUENCE), "IssuerOfTheSpecimenIdentifierSequence", "Issuer of the Specimen Identifier Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPECIMEN_TYPE_CODE_SEQUENCE), "SpecimenTypeCodeSequence", "Specimen Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPECIMEN_SHORT_DESCRIPTION), "SpecimenShortDescription", "Specimen Short Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SPECIMEN_DETAILED_DESCRIPTION), "SpecimenDetailedDescription", "Specimen Detailed Description", Exact(UT), Vm::Exact(1), false),
    E::new(Single(SPECIMEN_PREPARATION_SEQUENCE), "SpecimenPreparationSequence", "Specimen Preparation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPECIMEN_PREPARATION_STEP_CONTENT_ITEM_SEQUENCE), "SpecimenPreparationStepContentItemSequence", "Specimen Preparation Step Content Item Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPECIMEN_LOCALIZATION_CONTENT_ITEM_SEQUENCE), "SpecimenLocalizationContentItemSequence", "Specimen Localization Content Item Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SLIDE_IDENTIFIER), "SlideIdentifier", "Slide Identifier", Exact(LO), Vm::Exact(1), true),
    E::new(Single(WHOLE_SLIDE_MICROSCOPY_IMAGE_FRAME_TYPE_SEQUENCE), "WholeSlideMicroscopyImageFrameTypeSequence", "Whole Slide Microscopy Image Frame Type Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_CENTER_POINT_COORDINATES_SEQUENCE), "ImageCenterPointCoordinatesSequence", "Image Center Point Coordinates Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(X_OFFSET_IN_SLIDE_COORDINATE_SYSTEM), "XOffsetInSlideCoordinateSystem", "X Offset in Slide Coordinate System", Exact(DS), Vm::Exact(1), false),
    E::new(Single(Y_OFFSET_IN_SLIDE_COORDINATE_SYSTEM), "YOffsetInSlideCoordinateSystem", "Y Offset in Slide Coordinate System", Exact(DS), Vm::Exact(1), false),
    E::new(Single(Z_OFFSET_IN_SLIDE_COORDINATE_SYSTEM), "ZOffsetInSlideCoordinateSystem", "Z Offset in Slide Coordinate System", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PIXEL_SPACING_SEQUENCE), "PixelSpacingSequence", "Pixel Spacing Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(COORDINATE_SYSTEM_AXIS_CODE_SEQUENCE), "CoordinateSystemAxisCodeSequence", "Coordinate System Axis Code Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(MEASUREMENT_UNITS_CODE_SEQUENCE), "MeasurementUnitsCodeSequence", "Measurement Units Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(VITAL_STAIN_CODE_SEQUENCE_TRIAL), "VitalStainCodeSequenceTrial", "Vital Stain Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REQUESTED_PROCEDURE_ID), "RequestedProcedureID", "Requested Procedure ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_THE_REQUESTED_PROCEDURE), "ReasonForTheRequestedProcedure", "Reason for the Requested Procedure", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REQUESTED_PROCEDURE_PRIORITY), "RequestedProcedurePriority", "Requested Procedure Priority", Exact(SH), Vm::Exact(1), false),
    E::new(Single(PATIENT_TRANSPORT_ARRANGEMENTS), "PatientTransportArrangements", "Patient Transport Arrangements", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REQUESTED_PROCEDURE_LOCATION), "RequestedProcedureLocation", "Requested Procedure Location", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PLACER_ORDER_NUMBER_PROCEDURE), "PlacerOrderNumberProcedure", "Placer Order Number / Procedure", Exact(SH), Vm::Exact(1), true),
    E::new(Single(FILLER_ORDER_NUMBER_PROCEDURE), "FillerOrderNumberProcedure", "Filler Order Number / Procedure", Exact(SH), Vm::Exact(1), true),
    E::new(Single(CONFIDENTIALITY_CODE), "ConfidentialityCode", "Confidentiality Code", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REPORTING_PRIORITY), "ReportingPriority", "Reporting Priority", Exact(SH), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE), "ReasonForRequestedProcedureCodeSequence", "Reason for Requested Procedure Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NAMES_OF_INTENDED_RECIPIENTS_OF_RESULTS), "NamesOfIntendedRecipientsOfResults", "Names of Intended Recipients of Results", Exact(PN), Vm::AtLeast(1), false),
    E::new(Single(INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE), "IntendedRecipientsOfResultsIdentificationSequence", "Intended Recipients of Results Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_PERFORMED_PROCEDURE_CODE_SEQUENCE), "ReasonForPerformedProcedureCodeSequence", "Reason For Performed Procedure Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REQUESTED_PROCEDURE_DESCRIPTION_TRIAL), "RequestedProcedureDescriptionTrial", "Requested Procedure Description (Trial)", Exact(LO), Vm::Exact(1), true),
    E::new(Single(PERSON_IDENTIFICATION_CODE_SEQUENCE), "PersonIdentificationCodeSequence", "Person Identification Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PERSON_ADDRESS), "PersonAddress", "Person's Address", Exact(ST), Vm::Exact(1), false),
    E::new(Single(PERSON_TELEPHONE_NUMBERS), "PersonTelephoneNumbers", "Person's Telephone Numbers", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(PERSON_TELECOM_INFORMATION), "PersonTelecomInformation", "Person's Telecom Information", Exact(LT), Vm::Exact(1), false),
    E::new(Single(REQUESTED_PROCEDURE_COMMENTS), "RequestedProcedureComments", "Requested Procedure Comments", Exact(LT), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_THE_IMAGING_SERVICE_REQUEST), "ReasonForTheImagingServiceRequest", "Reason for the Imaging Service Request", Exact(LO), Vm::Exact(1), true),
    E::new(Single(ISSUE_DATE_OF_IMAGING_SERVICE_REQUEST), "IssueDateOfImagingServiceRequest", "Issue Date of Imaging Service Request", Exact(DA), Vm::Exact(1), false),
    E::new(Single(ISSUE_TIME_OF_IMAGING_SERVICE_REQUEST), "IssueTimeOfImagingServiceRequest", "Issue Time of Imaging Service Request", Exact(TM), Vm::Exact(1), false),
    E::new(Single(PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST_RETIRED), "PlacerOrderNumberImagingServiceRequestRetired", "Placer Order Number / Imaging Service Request (Retired)", Exact(SH), Vm::Exact(1), true),
    E::new(Single(FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST_RETIRED), "FillerOrderNumberImagingServiceRequestRetired", "Filler Order Number / Imaging Service Request (Retired)", Exact(SH), Vm::Exact(1), true),
    E::new(Single(ORDER_ENTERED_BY), "OrderEnteredBy", "Order Entered By", Exact(PN), Vm::Exact(1), false),
    E::new(Single(ORDER_ENTERER_LOCATION), "OrderEntererLocation", "Order Enterer's Location", Exact(SH), Vm::Exact(1), false),
    E::new(Single(ORDER_CALLBACK_PHONE_NUMBER), "OrderCallbackPhoneNumber", "Order Callback Phone Number", Exact(SH), Vm::Exact(1), false),
    E::new(Single(ORDER_CALLBACK_TELECOM_INFORMATION), "OrderCallbackTelecomInformation", "Order Callback Telecom Information", Exact(LT), Vm::Exact(1), false),
    E::new(Single(PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST), "PlacerOrderNumberImagingServiceRequest", "Placer Order Number / Imaging Service Request", Exact(LO), Vm::Exact(1), false),
    E::new(Single(FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST), "FillerOrderNumberImagingServiceRequest", "Filler Order Number / Imaging Service Request", Exact(LO), Vm::Exact(1), false),
    E::new(Single(IMAGING_SERVICE_REQUEST_COMMENTS), "ImagingServiceRequestComments", "Imaging Service Request Comments", Exact(LT), Vm::Exact(1), false),
    E::new(Single(CONFIDENTIALITY_CONSTRAINT_ON_PATIENT_DATA_DESCRIPTION), "ConfidentialityConstraintOnPatientDataDescription", "Confidentiality Constraint on Patient Data Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_STATUS), "GeneralPurposeScheduledProcedureStepStatus", "General Purpose Scheduled Procedure Step Status", Exact(CS), Vm::Exact(1), true),
    E::new(Single(GENERAL_PURPOSE_PERFORMED_PROCEDURE_STEP_STATUS), "GeneralPurposePerformedProcedureStepStatus", "General Purpose Performed Procedure Step Status", Exact(CS), Vm::Exact(1), true),
    E::new(Single(GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_PRIORITY), "GeneralPurposeScheduledProcedureStepPriority", "General Purpose Scheduled Procedure Step Priority", Exact(CS), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_PROCESSING_APPLICATIONS_CODE_SEQUENCE), "ScheduledProcessingApplicationsCodeSequence", "Scheduled Processing Applications Code Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_START_DATE_TIME), "ScheduledProcedureStepStartDateTime", "Scheduled Procedure Step Start DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(MULTIPLE_COPIES_FLAG), "MultipleCopiesFlag", "Multiple Copies Flag", Exact(CS), Vm::Exact(1), true),
    E::new(Single(PERFORMED_PROCESSING_APPLICATIONS_CODE_SEQUENCE), "PerformedProcessingApplicationsCodeSequence", "Performed Processing Applications Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_EXPIRATION_DATE_TIME), "ScheduledProcedureStepExpirationDateTime", "Scheduled Procedure Step Expiration DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(HUMAN_PERFORMER_CODE_SEQUENCE), "HumanPerformerCodeSequence", "Human Performer Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_MODIFICATION_DATE_TIME), "ScheduledProcedureStepModificationDateTime", "Scheduled Procedure Step Modification DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(EXPECTED_COMPLETION_DATE_TIME), "ExpectedCompletionDateTime", "Expected Completion DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(RESULTING_GENERAL_PURPOSE_PERFORMED_PROCEDURE_STEPS_SEQUENCE), "ResultingGeneralPurposePerformedProcedureStepsSequence", "Resulting General Purpose Performed Procedure Steps Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_SEQUENCE), "ReferencedGeneralPurposeScheduledProcedureStepSequence", "Referenced General Purpose Scheduled Procedure Step Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_WORKITEM_CODE_SEQUENCE), "ScheduledWorkitemCodeSequence", "Scheduled Workitem Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PERFORMED_WORKITEM_CODE_SEQUENCE), "PerformedWorkitemCodeSequence", "Performed Workitem Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INPUT_AVAILABILITY_FLAG), "InputAvailabilityFlag", "Input Availability Flag", Exact(CS), Vm::Exact(1), true),
    E::new(Single(INPUT_INFORMATION_SEQUENCE), "InputInformationSequence", "Input Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RELEVANT_INFORMATION_SEQUENCE), "RelevantInformationSequence", "Relevant Information Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_TRANSACTION_UID), "ReferencedGeneralPurposeScheduledProcedureStepTransactionUID", "Referenced General Purpose Scheduled Procedure Step Transaction UID", Exact(UI), Vm::Exact(1), true),
    E::new(Single(SCHEDULED_STATION_NAME_CODE_SEQUENCE), "ScheduledStationNameCodeSequence", "Scheduled Station Name Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_STATION_CLASS_CODE_SEQUENCE), "ScheduledStationClassCodeSequence", "Scheduled Station Class Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE), "ScheduledStationGeographicLocationCodeSequence", "Scheduled Station Geographic Location Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PERFORMED_STATION_NAME_CODE_SEQUENCE), "PerformedStationNameCodeSequence", "Performed Station Name Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PERFORMED_STATION_CLASS_CODE_SEQUENCE), "PerformedStationClassCodeSequence", "Performed Station Class Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PERFORMED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE), "PerformedStationGeographicLocationCodeSequence", "Performed Station Geographic Location Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REQUESTED_SUBSEQUENT_WORKITEM_CODE_SEQUENCE), "RequestedSubsequentWorkitemCodeSequence", "Requested Subsequent Workitem Code Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(NON_DICOM_OUTPUT_CODE_SEQUENCE), "NonDICOMOutputCodeSequence", "Non-DICOM Output Code Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(OUTPUT_INFORMATION_SEQUENCE), "OutputInformationSequence", "Output Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_HUMAN_PERFORMERS_SEQUENCE), "ScheduledHumanPerformersSequence", "Scheduled Human Performers Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ACTUAL_HUMAN_PERFORMERS_SEQUENCE), "ActualHumanPerformersSequence", "Actual Human Performers Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(HUMAN_PERFORMER_ORGANIZATION), "HumanPerformerOrganization", "Human Performer's Organization", Exact(LO), Vm::Exact(1), false),
    E::new(Single(HUMAN_PERFORMER_NAME), "HumanPerformerName", "Human Performer's Name", Exact(PN), Vm::Exact(1), false),
    E::new(Single(RAW_DATA_HANDLING), "RawDataHandling", "Raw Data Handling", Exact(CS), Vm::Exact(1), false),
    E::new(Single(INPUT_READINESS_STATE), "InputReadinessState", "Input Readiness State", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCEDURE_STEP_START_DATE_TIME), "PerformedProcedureStepStartDateTime", "Performed Procedure Step Start DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCEDURE_STEP_END_DATE_TIME), "PerformedProcedureStepEndDateTime", "Performed Procedure Step End DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(PROCEDURE_STEP_CANCELLATION_DATE_TIME), "ProcedureStepCancellationDateTime", "Procedure Step Cancellation DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(OUTPUT_DESTINATION_SEQUENCE), "OutputDestinationSequence", "Output Destination Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DICOM_STORAGE_SEQUENCE), "DICOMStorageSequence", "DICOM Storage Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(STOWRS_STORAGE_SEQUENCE), "STOWRSStorageSequence", "STOW-RS Storage Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(STORAGE_URL), "StorageURL", "Storage URL", Exact(UR), Vm::Exact(1), false),
    E::new(Single(XDS_STORAGE_SEQUENCE), "XDSStorageSequence", "XDS Storage Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ENTRANCE_DOSE_INM_GY), "EntranceDoseInmGy", "Entrance Dose in mGy", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ENTRANCE_DOSE_DERIVATION), "EntranceDoseDerivation", "Entrance Dose Derivation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PARAMETRIC_MAP_FRAME_TYPE_SEQUENCE), "ParametricMapFrameTypeSequence", "Parametric Map Frame Type Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_IMAGE_REAL_WORLD_VALUE_MAPPING_SEQUENCE), "ReferencedImageRealWorldValueMappingSequence", "Referenced Image Real World Value Mapping Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REAL_WORLD_VALUE_MAPPING_SEQUENCE), "RealWorldValueMappingSequence", "Real World Value Mapping Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PIXEL_VALUE_MAPPING_CODE_SEQUENCE), "PixelValueMappingCodeSequence", "Pixel Value Mapping Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LUT_LABEL), "LUTLabel", "LUT Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(REAL_WORLD_VALUE_LAST_VALUE_MAPPED), "RealWorldValueLastValueMapped", "Real World Value Last Value Mapped", Xs, Vm::Exact(1), false),
    E::new(Single(REAL_WORLD_VALUE_LUT_DATA), "RealWorldValueLUTData", "Real World Value LUT Data", Exact(FD), Vm::AtLeast(1), false),
    E::new(Single(DOUBLE_FLOAT_REAL_WORLD_VALUE_LAST_VALUE_MAPPED), "DoubleFloatRealWorldValueLastValueMapped", "Double Float Real World Value Last Value Mapped", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DOUBLE_FLOAT_REAL_WORLD_VALUE_FIRST_VALUE_MAPPED), "DoubleFloatRealWorldValueFirstValueMapped", "Double Float Real World Value First Value Mapped", Exact(FD), Vm::Exact(1), false),
    E::new(Single(REAL_WORLD_VALUE_FIRST_VALUE_MAPPED), "RealWorldValueFirstValueMapped", "Real World Value First Value Mapped", Xs, Vm::Exact(1), false),
    E::new(Single(QUANTITY_DEFINITION_SEQUENCE), "QuantityDefinitionSequence", "Quantity Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REAL_WORLD_VALUE_INTERCEPT), "RealWorldValueIntercept", "Real World Value Intercept", Exact(FD), Vm::Exact(1), false),
    E::new(Single(REAL_WORLD_VALUE_SLOPE), "RealWorldValueSlope", "Real World Value Slope", Exact(FD), Vm::Exact(1), false),
    E::new(Single(FINDINGS_FLAG_TRIAL), "FindingsFlagTrial", "Findings Flag (Trial)", Exact(CS), Vm::Exact(1), true),
    E::new(Single(RELATIONSHIP_TYPE), "RelationshipType", "Relationship Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FINDINGS_SEQUENCE_TRIAL), "FindingsSequenceTrial", "Findings Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(FINDINGS_GROUP_UID_TRIAL), "FindingsGroupUIDTrial", "Findings Group UID (Trial)", Exact(UI), Vm::Exact(1), true),
    E::new(Single(REFERENCED_FINDINGS_GROUP_UID_TRIAL), "ReferencedFindingsGroupUIDTrial", "Referenced Findings Group UID (Trial)", Exact(UI), Vm::Exact(1), true),
    E::new(Single(FINDINGS_GROUP_RECORDING_DATE_TRIAL), "FindingsGroupRecordingDateTrial", "Findings Group Recording Date (Trial)", Exact(DA), Vm::Exact(1), true),
    E::new(Single(FINDINGS_GROUP_RECORDING_TIME_TRIAL), "FindingsGroupRecordingTimeTrial", "Findings Group Recording Time (Trial)", Exact(TM), Vm::Exact(1), true),
    E::new(Single(FINDINGS_SOURCE_CATEGORY_CODE_SEQUENCE_TRIAL), "FindingsSourceCategoryCodeSequenceTrial", "Findings Source Category Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(VERIFYING_ORGANIZATION), "VerifyingOrganization", "Verifying Organization", Exact(LO), Vm::Exact(1), false),
    E::new(Single(DOCUMENTING_ORGANIZATION_IDENTIFIER_CODE_SEQUENCE_TRIAL), "DocumentingOrganizationIdentifierCodeSequenceTrial", "Documenting Organization Identifier Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(VERIFICATION_DATE_TIME), "VerificationDateTime", "Verification DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(OBSERVATION_DATE_TIME), "ObservationDateTime", "Observation DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(OBSERVATION_START_DATE_TIME), "ObservationStartDateTime", "Observation Start DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(VALUE_TYPE), "ValueType", "Value Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONCEPT_NAME_CODE_SEQUENCE), "ConceptNameCodeSequence", "Concept Name Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MEASUREMENT_PRECISION_DESCRIPTION_TRIAL), "MeasurementPrecisionDescriptionTrial", "Measurement Precision Description (Trial)", Exact(LO), Vm::Exact(1), true),
    E::new(Single(CONTINUITY_OF_CONTENT), "ContinuityOfContent", "Continuity Of Content", Exact(CS), Vm::Exact(1), false),
    E::new(Single(URGENCY_OR_PRIORITY_ALERTS_TRIAL), "UrgencyOrPriorityAlertsTrial", "Urgency or Priority Alerts (Trial)", Exact(CS), Vm::AtLeast(1), true),
    E::new(Single(SEQUENCING_INDICATOR_TRIAL), "SequencingIndicatorTrial", "Sequencing Indicator (Trial)", Exact(LO), Vm::Exact(1), true),
    E::new(Single(DOCUMENT_IDENTIFIER_CODE_SEQUENCE_TRIAL), "DocumentIdentifierCodeSequenceTrial", "Document Identifier Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(DOCUMENT_AUTHOR_TRIAL), "DocumentAuthorTrial", "Document Author (Trial)", Exact(PN), Vm::Exact(1), true),
    E::new(Single(DOCUMENT_AUTHOR_IDENTIFIER_CODE_SEQUENCE_TRIAL), "DocumentAuthorIdentifierCodeSequenceTrial", "Document Author Identifier Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(IDENTIFIER_CODE_SEQUENCE_TRIAL), "IdentifierCodeSequenceTrial", "Identifier Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(VERIFYING_OBSERVER_SEQUENCE), "VerifyingObserverSequence", "Verifying Observer Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OBJECT_BINARY_IDENTIFIER_TRIAL), "ObjectBinaryIdentifierTrial", "Object Binary Identifier (Trial)", Exact(OB), Vm::Exact(1), true),
    E::new(Single(VERIFYING_OBSERVER_NAME), "VerifyingObserverName", "Verifying Observer Name", Exact(PN), Vm::Exact(1), false),
    E::new(Single(DOCUMENTING_OBSERVER_IDENTIFIER_CODE_SEQUENCE_TRIAL), "DocumentingObserverIdentifierCodeSequenceTrial", "Documenting Observer Identifier Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(AUTHOR_OBSERVER_SEQUENCE), "AuthorObserverSequence", "Author Observer Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PARTICIPANT_SEQUENCE), "ParticipantSequence", "Participant Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CUSTODIAL_ORGANIZATION_SEQUENCE), "CustodialOrganizationSequence", "Custodial Organization Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PARTICIPATION_TYPE), "ParticipationType", "Participation Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PARTICIPATION_DATE_TIME), "ParticipationDateTime", "Participation DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(OBSERVER_TYPE), "ObserverType", "Observer Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PROCEDURE_IDENTIFIER_CODE_SEQUENCE_TRIAL), "ProcedureIdentifierCodeSequenceTrial", "Procedure Identifier Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE), "VerifyingObserverIdentificationCodeSequence", "Verifying Observer Identification Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OBJECT_DIRECTORY_BINARY_IDENTIFIER_TRIAL), "ObjectDirectoryBinaryIdentifierTrial", "Object Directory Binary Identifier (Trial)", Exact(OB), Vm::Exact(1), true),
    E::new(Single(EQUIVALENT_CDA_DOCUMENT_SEQUENCE), "EquivalentCDADocumentSequence", "Equivalent CDA Document Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REFERENCED_WAVEFORM_CHANNELS), "ReferencedWaveformChannels", "Referenced Waveform Channels", Exact(US), Vm::MultipleOf(2), false),
    E::new(Single(DATE_OF_DOCUMENT_OR_VERBAL_TRANSACTION_TRIAL), "DateOfDocumentOrVerbalTransactionTrial", "Date of Document or Verbal Transaction (Trial)", Exact(DA), Vm::Exact(1), true),
    E::new(Single(TIME_OF_DOCUMENT_CREATION_OR_VERBAL_TRANSACTION_TRIAL), "TimeOfDocumentCreationOrVerbalTransactionTrial", "Time of Document Creation or Verbal Transaction (Trial)", Exact(TM), Vm::Exact(1), true),
    E::new(Single(DATE_TIME), "DateTime", "DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(DATE), "Date", "Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(TIME), "Time", "Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(PERSON_NAME), "PersonName", "Person Name", Exact(PN), Vm::Exact(1), false),
    E::new(Single(UID), "UID", "UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(REPORT_STATUS_ID_TRIAL), "ReportStatusIDTrial", "Report Status ID (Trial)", Exact(CS), Vm::Exact(2), true),
    E::new(Single(TEMPORAL_RANGE_TYPE), "TemporalRangeType", "Temporal Range Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SAMPLE_POSITIONS), "ReferencedSamplePositions", "Referenced Sample Positions", Exact(UL), Vm::AtLeast(1), false),
    E::new(Single(REFERENCED_FRAME_NUMBERS), "ReferencedFrameNumbers", "Referenced Frame Numbers", Exact(US), Vm::AtLeast(1), true),
    E::new(Single(REFERENCED_TIME_OFFSETS), "ReferencedTimeOffsets", "Referenced Time Offsets", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(REFERENCED_DATE_TIME), "ReferencedDateTime", "Referenced DateTime", Exact(DT), Vm::AtLeast(1), false),
    E::new(Single(TEXT_VALUE), "TextValue", "Text Value", Exact(UT), Vm::Exact(1), false),
    E::new(Single(FLOATING_POINT_VALUE), "FloatingPointValue", "Floating Point Value", Exact(FD), Vm::AtLeast(1), false),
    E::new(Single(RATIONAL_NUMERATOR_VALUE), "RationalNumeratorValue", "Rational Numerator Value", Exact(SL), Vm::AtLeast(1), false),
    E::new(Single(RATIONAL_DENOMINATOR_VALUE), "RationalDenominatorValue", "Rational Denominator Value", Exact(UL), Vm::AtLeast(1), false),
    E::new(Single(OBSERVATION_CATEGORY_CODE_SEQUENCE_TRIAL), "ObservationCategoryCodeSequenceTrial", "Observation Category Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(CONCEPT_CODE_SEQUENCE), "ConceptCodeSequence", "Concept Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BIBLIOGRAPHIC_CITATION_TRIAL), "BibliographicCitationTrial", "Bibliographic Citation (Trial)", Exact(ST), Vm::Exact(1), true),
    E::new(Single(PURPOSE_OF_REFERENCE_CODE_SEQUENCE), "PurposeOfReferenceCodeSequence", "Purpose of Reference Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OBSERVATION_UID), "ObservationUID", "Observation UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(REFERENCED_OBSERVATION_UID_TRIAL), "ReferencedObservationUIDTrial", "Referenced Observation UID (Trial)", Exact(UI), Vm::Exact(1), true),
    E::new(Single(REFERENCED_OBSERVATION_CLASS_TRIAL), "ReferencedObservationClassTrial", "Referenced Observation Class (Trial)", Exact(CS), Vm::Exact(1), true),
    E::new(Single(REFERENCED_OBJECT_OBSERVATION_CLASS_TRIAL), "ReferencedObjectObservationClassTrial", "Referenced Object Observation Class (Trial)", Exact(CS), Vm::Exact(1), true),
    E::new(Single(ANNOTATION_GROUP_NUMBER), "AnnotationGroupNumber", "Annotation Group Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(OBSERVATION_DATE_TRIAL), "ObservationDateTrial", "Observation Date (Trial)", Exact(DA), Vm::Exact(1), true),
    E::new(Single(OBSERVATION_TIME_TRIAL), "ObservationTimeTrial", "Observation Time (Trial)", Exact(TM), Vm::Exact(1), true),
    E::new(Single(MEASUREMENT_AUTOMATION_TRIAL), "MeasurementAutomationTrial", "Measurement Automation (Trial)", Exact(CS), Vm::Exact(1), true),
    E::new(Single(MODIFIER_CODE_SEQUENCE), "ModifierCodeSequence", "Modifier Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IDENTIFICATION_DESCRIPTION_TRIAL), "IdentificationDescriptionTrial", "Identification Description (Trial)", Exact(ST), Vm::Exact(1), true),
    E::new(Single(COORDINATES_SET_GEOMETRIC_TYPE_TRIAL), "CoordinatesSetGeometricTypeTrial", "Coordinates Set Geometric Type (Trial)", Exact(CS), Vm::Exact(1), true),
    E::new(Single(ALGORITHM_CODE_SEQUENCE_TRIAL), "AlgorithmCodeSequenceTrial", "Algorithm Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(ALGORITHM_DESCRIPTION_TRIAL), "AlgorithmDescriptionTrial", "Algorithm Description (Trial)", Exact(ST), Vm::Exact(1), true),
    E::new(Single(PIXEL_COORDINATES_SET_TRIAL), "PixelCoordinatesSetTrial", "Pixel Coordinates Set (Trial)", Exact(SL), Vm::MultipleOf(2), true),
    E::new(Single(MEASURED_VALUE_SEQUENCE), "MeasuredValueSequence", "Measured Value Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMERIC_VALUE_QUALIFIER_CODE_SEQUENCE), "NumericValueQualifierCodeSequence", "Numeric Value Qualifier Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CURRENT_OBSERVER_TRIAL), "CurrentObserverTrial", "Current Observer (Trial)", Exact(PN), Vm::Exact(1), true),
    E::new(Single(NUMERIC_VALUE), "NumericValue", "Numeric Value", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(REFERENCED_ACCESSION_SEQUENCE_TRIAL), "ReferencedAccessionSequenceTrial", "Referenced Accession Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REPORT_STATUS_COMMENT_TRIAL), "ReportStatusCommentTrial", "Report Status Comment (Trial)", Exact(ST), Vm::Exact(1), true),
    E::new(Single(PROCEDURE_CONTEXT_SEQUENCE_TRIAL), "ProcedureContextSequenceTrial", "Procedure Context Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(VERBAL_SOURCE_TRIAL), "VerbalSourceTrial", "Verbal Source (Trial)", Exact(PN), Vm::Exact(1), true),
    E::new(Single(ADDRESS_TRIAL), "AddressTrial", "Address (Trial)", Exact(ST), Vm::Exact(1), true),
    E::new(Single(TELEPHONE_NUMBER_TRIAL), "TelephoneNumberTrial", "Telephone Number (Trial)", Exact(LO), Vm::Exact(1), true),
    E::new(Single(VERBAL_SOURCE_IDENTIFIER_CODE_SEQUENCE_TRIAL), "VerbalSourceIdentifierCodeSequenceTrial", "Verbal Source Identifier Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(PREDECESSOR_DOCUMENTS_SEQUENCE), "PredecessorDocumentsSequence", "Predecessor Documents Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_REQUEST_SEQUENCE), "ReferencedRequestSequence", "Referenced Request Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCEDURE_CODE_SEQUENCE), "PerformedProcedureCodeSequence", "Performed Procedure Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE), "CurrentRequestedProcedureEvidenceSequence", "Current Requested Procedure Evidence Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REPORT_DETAIL_SEQUENCE_TRIAL), "ReportDetailSequenceTrial", "Report Detail Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(PERTINENT_OTHER_EVIDENCE_SEQUENCE), "PertinentOtherEvidenceSequence", "Pertinent Other Evidence Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(HL7STRUCTURED_DOCUMENT_REFERENCE_SEQUENCE), "HL7StructuredDocumentReferenceSequence", "HL7 Structured Document Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OBSERVATION_SUBJECT_UID_TRIAL), "ObservationSubjectUIDTrial", "Observation Subject UID (Trial)", Exact(UI), Vm::Exact(1), true),
    E::new(Single(OBSERVATION_SUBJECT_CLASS_TRIAL), "ObservationSubjectClassTrial", "Observation Subject Class (Trial)", Exact(CS), Vm::Exact(1), true),
    E::new(Single(OBSERVATION_SUBJECT_TYPE_CODE_SEQUENCE_TRIAL), "ObservationSubjectTypeCodeSequenceTrial", "Observation Subject Type Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(COMPLETION_FLAG), "CompletionFlag", "Completion Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(COMPLETION_FLAG_DESCRIPTION), "CompletionFlagDescription", "Completion Flag Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(VERIFICATION_FLAG), "VerificationFlag", "Verification Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ARCHIVE_REQUESTED), "ArchiveRequested", "Archive Requested", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRELIMINARY_FLAG), "PreliminaryFlag", "Preliminary Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONTENT_TEMPLATE_SEQUENCE), "ContentTemplateSequence", "Content Template Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IDENTICAL_DOCUMENTS_SEQUENCE), "IdenticalDocumentsSequence", "Identical Documents Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OBSERVATION_SUBJECT_CONTEXT_FLAG_TRIAL), "ObservationSubjectContextFlagTrial", "Observation Subject Context Flag (Trial)", Exact(CS), Vm::Exact(1), true),
    E::new(Single(OBSERVER_CONTEXT_FLAG_TRIAL), "ObserverContextFlagTrial", "Observer Context Flag (Trial)", Exact(CS), Vm::Exact(1), true),
    E::new(Single(PROCEDURE_CONTEXT_FLAG_TRIAL), "ProcedureContextFlagTrial", "Procedure Context Flag (Trial)", Exact(CS), Vm::Exact(1), true),
    E::new(Single(CONTENT_SEQUENCE), "ContentSequence", "Content Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RELATIONSHIP_SEQUENCE_TRIAL), "RelationshipSequenceTrial", "Relationship Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(RELATIONSHIP_TYPE_CODE_SEQUENCE_TRIAL), "RelationshipTypeCodeSequenceTrial", "Relationship Type Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(LANGUAGE_CODE_SEQUENCE_TRIAL), "LanguageCodeSequenceTrial", "Language Code Sequence (Trial)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(TABULATED_VALUES_SEQUENCE), "TabulatedValuesSequence", "Tabulated Values Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_TABLE_ROWS), "NumberOfTableRows", "Number of Table Rows", Exact(UL), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_TABLE_COLUMNS), "NumberOfTableColumns", "Number of Table Columns", Exact(UL), Vm::Exact(1), false),
    E::new(Single(TABLE_ROW_NUMBER), "TableRowNumber", "Table Row Number", Exact(UL), Vm::Exact(1), false),
    E::new(Single(TABLE_COLUMN_NUMBER), "TableColumnNumber", "Table Column Number", Exact(UL), Vm::Exact(1), false),
    E::new(Single(TABLE_ROW_DEFINITION_SEQUENCE), "TableRowDefinitionSequence", "Table Row Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TABLE_COLUMN_DEFINITION_SEQUENCE), "TableColumnDefinitionSequence", "Table Column Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CELL_VALUES_SEQUENCE), "CellValuesSequence", "Cell Values Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(UNIFORM_RESOURCE_LOCATOR_TRIAL), "UniformResourceLocatorTrial", "Uniform Resource Locator (Trial)", Exact(ST), Vm::Exact(1), true),
    E::new(Single(WAVEFORM_ANNOTATION_SEQUENCE), "WaveformAnnotationSequence", "Waveform Annotation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TEMPLATE_IDENTIFIER), "TemplateIdentifier", "Template Identifier", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TEMPLATE_VERSION), "TemplateVersion", "Template Version", Exact(DT), Vm::Exact(1), true),
    E::new(Single(TEMPLATE_LOCAL_VERSION), "TemplateLocalVersion", "Template Local Version", Exact(DT), Vm::Exact(1), true),
    E::new(Single(TEMPLATE_EXTENSION_FLAG), "TemplateExtensionFlag", "Template Extension Flag", Exact(CS), Vm::Exact(1), true),
    E::new(Single(TEMPLATE_EXTENSION_ORGANIZATION_UID), "TemplateExtensionOrganizationUID", "Template Extension Organization UID", Exact(UI), Vm::Exact(1), true),
    E::new(Single(TEMPLATE_EXTENSION_CREATOR_UID), "TemplateExtensionCreatorUID", "Template Extension Creator UID", Exact(UI), Vm::Exact(1), true),
    E::new(Single(REFERENCED_CONTENT_ITEM_IDENTIFIER), "ReferencedContentItemIdentifier", "Referenced Content Item Identifier", Exact(UL), Vm::AtLeast(1), false),
    E::new(Single(HL7INSTANCE_IDENTIFIER), "HL7InstanceIdentifier", "HL7 Instance Identifier", Exact(ST), Vm::Exact(1), false),
    E::new(Single(HL7DOCUMENT_EFFECTIVE_TIME), "HL7DocumentEffectiveTime", "HL7 Document Effective Time", Exact(DT), Vm::Exact(1), false),
    E::new(Single(HL7DOCUMENT_TYPE_CODE_SEQUENCE), "HL7DocumentTypeCodeSequence", "HL7 Document Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DOCUMENT_CLASS_CODE_SEQUENCE), "DocumentClassCodeSequence", "Document Class Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RETRIEVE_URI), "RetrieveURI", "Retrieve URI", Exact(UR), Vm::Exact(1), false),
    E::new(Single(RETRIEVE_LOCATION_UID), "RetrieveLocationUID", "Retrieve Location UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(TYPE_OF_INSTANCES), "TypeOfInstances", "Type of Instances", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DICOM_RETRIEVAL_SEQUENCE), "DICOMRetrievalSequence", "DICOM Retrieval Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DICOM_MEDIA_RETRIEVAL_SEQUENCE), "DICOMMediaRetrievalSequence", "DICOM Media Retrieval Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(WADO_RETRIEVAL_SEQUENCE), "WADORetrievalSequence", "WADO Retrieval Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(XDS_RETRIEVAL_SEQUENCE), "XDSRetrievalSequence", "XDS Retrieval Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(WADORS_RETRIEVAL_SEQUENCE), "WADORSRetrievalSequence", "WADO-RS Retrieval Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REPOSITORY_UNIQUE_ID), "RepositoryUniqueID", "Repository Unique ID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(HOME_COMMUNITY_ID), "HomeCommunityID", "Home Community ID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(DOCUMENT_TITLE), "DocumentTitle", "Document Title", Exact(ST), Vm::Exact(1), false),
    E::new(Single(ENCAPSULATED_DOCUMENT), "EncapsulatedDocument", "Encapsulated Document", Exact(OB), Vm::Exact(1), false),
    E::new(Single(MIME_TYPE_OF_ENCAPSULATED_DOCUMENT), "MIMETypeOfEncapsulatedDocument", "MIME Type of Encapsulated Document", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SOURCE_INSTANCE_SEQUENCE), "SourceInstanceSequence", "Source Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LIST_OF_MIME_TYPES), "ListOfMIMETypes", "List of MIME Types", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(ENCAPSULATED_DOCUMENT_LENGTH), "EncapsulatedDocumentLength", "Encapsulated Document Length", Exact(UL), Vm::Exact(1), false),
    E::new(Single(PRODUCT_PACKAGE_IDENTIFIER), "ProductPackageIdentifier", "Product Package Identifier", Exact(ST), Vm::Exact(1), false),
    E::new(Single(SUBSTANCE_ADMINISTRATION_APPROVAL), "SubstanceAdministrationApproval", "Substance Administration Approval", Exact(CS), Vm::Exact(1), false),
    E::new(Single(APPROVAL_STATUS_FURTHER_DESCRIPTION), "ApprovalStatusFurtherDescription", "Approval Status Further Description", Exact(LT), Vm::Exact(1), false),
    E::new(Single(APPROVAL_STATUS_DATE_TIME), "ApprovalStatusDateTime", "Approval Status DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(PRODUCT_TYPE_CODE_SEQUENCE), "ProductTypeCodeSequence", "Product Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRODUCT_NAME), "ProductName", "Product Name", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(PRODUCT_DESCRIPTION), "ProductDescription", "Product Description", Exact(LT), Vm::Exact(1), false),
    E::new(Single(PRODUCT_LOT_IDENTIFIER), "ProductLotIdentifier", "Product Lot Identifier", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PRODUCT_EXPIRATION_DATE_TIME), "ProductExpirationDateTime", "Product Expiration DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(SUBSTANCE_ADMINISTRATION_DATE_TIME), "SubstanceAdministrationDateTime", "Substance Administration DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(SUBSTANCE_ADMINISTRATION_NOTES), "SubstanceAdministrationNotes", "Substance Administration Notes", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SUBSTANCE_ADMINISTRATION_DEVICE_ID), "SubstanceAdministrationDeviceID", "Substance Administration Device ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PRODUCT_PARAMETER_SEQUENCE), "ProductParameterSequence", "Product Parameter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SUBSTANCE_ADMINISTRATION_PARAMETER_SEQUENCE), "SubstanceAdministrationParameterSequence", "Substance Administration Parameter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGED_VOLUME_WIDTH), "ImagedVolumeWidth", "Imaged Volume Width", Exact(FL), Vm::Exact(1), false),
    E::new(Single(IMAGED_VOLUME_HEIGHT), "ImagedVolumeHeight", "Imaged Volume Height", Exact(FL), Vm::Exact(1), false),
    E::new(Single(IMAGED_VOLUME_DEPTH), "ImagedVolumeDepth", "Imaged Volume Depth", Exact(FL), Vm::Exact(1), false),
    E::new(Single(TOTAL_PIXEL_MATRIX_COLUMNS), "TotalPixelMatrixColumns", "Total Pixel Matrix Columns", Exact(UL), Vm::Exact(1), false),
    E::new(Single(TOTAL_PIXEL_MATRIX_ROWS), "TotalPixelMatrixRows", "Total Pixel Matrix Rows", Exact(UL), Vm::Exact(1), false),
    E::new(Single(TOTAL_PIXEL_MATRIX_ORIGIN_SEQUENCE), "TotalPixelMatrixOriginSequence", "Total Pixel Matrix Origin Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPECIMEN_LABEL_IN_IMAGE), "SpecimenLabelInImage", "Specimen Label in Image", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FOCUS_METHOD), "FocusMethod", "Focus Method", Exact(CS), Vm::Exact(1), false),
    E::new(Single(EXTENDED_DEPTH_OF_FIELD), "ExtendedDepthOfField", "Extended Depth of Field", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_FOCAL_PLANES), "NumberOfFocalPlanes", "Number of Focal Planes", Exact(US), Vm::Exact(1), false),
    E::new(Single(DISTANCE_BETWEEN_FOCAL_PLANES), "DistanceBetweenFocalPlanes", "Distance Between Focal Planes", Exact(FL), Vm::Exact(1), false),
    E::new(Single(RECOMMENDED_ABSENT_PIXEL_CIE_LAB_VALUE), "RecommendedAbsentPixelCIELabValue", "Recommended Absent Pixel CIELab Value", Exact(US), Vm::Exact(3), false),
    E::new(Single(ILLUMINATOR_TYPE_CODE_SEQUENCE), "IlluminatorTypeCodeSequence", "Illuminator Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_ORIENTATION_SLIDE), "ImageOrientationSlide", "Image Orientation (Slide)", Exact(DS), Vm::Exact(6), false),
    E::new(Single(OPTICAL_PATH_SEQUENCE), "OpticalPathSequence", "Optical Path Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OPTICAL_PATH_IDENTIFIER), "OpticalPathIdentifier", "Optical Path Identifier", Exact(SH), Vm::Exact(1), false),
    E::new(Single(OPTICAL_PATH_DESCRIPTION), "OpticalPathDescription", "Optical Path Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(ILLUMINATION_COLOR_CODE_SEQUENCE), "IlluminationColorCodeSequence", "Illumination Color Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPECIMEN_REFERENCE_SEQUENCE), "SpecimenReferenceSequence", "Specimen Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONDENSER_LENS_POWER), "CondenserLensPower", "Condenser Lens Power", Exact(DS), Vm::Exact(1), false),
    E::new(Single(OBJECTIVE_LENS_POWER), "ObjectiveLensPower", "Objective Lens Power", Exact(DS), Vm::Exact(1), false),
    E::new(Single(OBJECTIVE_LENS_NUMERICAL_APERTURE), "ObjectiveLensNumericalAperture", "Objective Lens Numerical Aperture", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PALETTE_COLOR_LOOKUP_TABLE_SEQUENCE), "PaletteColorLookupTableSequence", "Palette Color Lookup Table Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_IMAGE_NAVIGATION_SEQUENCE), "ReferencedImageNavigationSequence", "Referenced Image Navigation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TOP_LEFT_HAND_CORNER_OF_LOCALIZER_AREA), "TopLeftHandCornerOfLocalizerArea", "Top Left Hand Corner of Localizer Area", Exact(US), Vm::Exact(2), false),
    E::new(Single(BOTTOM_RIGHT_HAND_CORNER_OF_LOCALIZER_AREA), "BottomRightHandCornerOfLocalizerArea", "Bottom Right Hand Corner of Localizer Area", Exact(US), Vm::Exact(2), false),
    E::new(Single(OPTICAL_PATH_IDENTIFICATION_SEQUENCE), "OpticalPathIdentificationSequence", "Optical Path Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PLANE_POSITION_SLIDE_SEQUENCE), "PlanePositionSlideSequence", "Plane Position (Slide) Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COLUMN_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX), "ColumnPositionInTotalImagePixelMatrix", "Column Position In Total Image Pixel Matrix", Exact(SL), Vm::Exact(1), false),
    E::new(Single(ROW_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX), "RowPositionInTotalImagePixelMatrix", "Row Position In Total Image Pixel Matrix", Exact(SL), Vm::Exact(1), false),
    E::new(Single(PIXEL_ORIGIN_INTERPRETATION), "PixelOriginInterpretation", "Pixel Origin Interpretation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_OPTICAL_PATHS), "NumberOfOpticalPaths", "Number of Optical Paths", Exact(UL), Vm::Exact(1), false),
    E::new(Single(TOTAL_PIXEL_MATRIX_FOCAL_PLANES), "TotalPixelMatrixFocalPlanes", "Total Pixel Matrix Focal Planes", Exact(UL), Vm::Exact(1), false),
    E::new(Single(CALIBRATION_IMAGE), "CalibrationImage", "Calibration Image", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DEVICE_SEQUENCE), "DeviceSequence", "Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTAINER_COMPONENT_TYPE_CODE_SEQUENCE), "ContainerComponentTypeCodeSequence", "Container Component Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTAINER_COMPONENT_THICKNESS), "ContainerComponentThickness", "Container Component Thickness", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DEVICE_LENGTH), "DeviceLength", "Device Length", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CONTAINER_COMPONENT_WIDTH), "ContainerComponentWidth", "Container Component Width", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DEVICE_DIAMETER), "DeviceDiameter", "Device Diameter", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DEVICE_DIAMETER_UNITS), "DeviceDiameterUnits", "Device Diameter Units", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DEVICE_VOLUME), "DeviceVolume", "Device Volume", Exact(DS), Vm::Exact(1), false),
    E::new(Single(INTER_MARKER_DISTANCE), "InterMarkerDistance", "Inter-Marker Distance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CONTAINER_COMPONENT_MATERIAL), "ContainerComponentMaterial", "Container Component Material", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONTAINER_COMPONENT_ID), "ContainerComponentID", "Container Component ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CONTAINER_COMPONENT_LENGTH), "ContainerComponentLength", "Container Component Length", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CONTAINER_COMPONENT_DIAMETER), "ContainerComponentDiameter", "Container Component Diameter", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CONTAINER_COMPONENT_DESCRIPTION), "ContainerComponentDescription", "Container Component Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(DEVICE_DESCRIPTION), "DeviceDescription", "Device Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(LONG_DEVICE_DESCRIPTION), "LongDeviceDescription", "Long Device Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(CONTRAST_BOLUS_INGREDIENT_PERCENT_BY_VOLUME), "ContrastBolusIngredientPercentByVolume", "Contrast/Bolus Ingredient Percent by Volume", Exact(FL), Vm::Exact(1), false),
    E::new(Single(OCT_FOCAL_DISTANCE), "OCTFocalDistance", "OCT Focal Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(BEAM_SPOT_SIZE), "BeamSpotSize", "Beam Spot Size", Exact(FD), Vm::Exact(1), false),
    E::new(Single(EFFECTIVE_REFRACTIVE_INDEX), "EffectiveRefractiveIndex", "Effective Refractive Index", Exact(FD), Vm::Exact(1), false),
    E::new(Single(OCT_ACQUISITION_DOMAIN), "OCTAcquisitionDomain", "OCT Acquisition Domain", Exact(CS), Vm::Exact(1), false),
    E::new(Single(OCT_OPTICAL_CENTER_WAVELENGTH), "OCTOpticalCenterWavelength", "OCT Optical Center Wavelength", Exact(FD), Vm::Exact(1), false),
    E::new(Single(AXIAL_RESOLUTION), "AxialResolution", "Axial Resolution", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RANGING_DEPTH), "RangingDepth", "Ranging Depth", Exact(FD), Vm::Exact(1), false),
    E::new(Single(A_LINE_RATE), "ALineRate", "A-line Rate", Exact(FD), Vm::Exact(1), false),
    E::new(Single(A_LINES_PER_FRAME), "ALinesPerFrame", "A-lines Per Frame", Exact(US), Vm::Exact(1), false),
    E::new(Single(CATHETER_ROTATIONAL_RATE), "CatheterRotationalRate", "Catheter Rotational Rate", Exact(FD), Vm::Exact(1), false),
    E::new(Single(A_LINE_PIXEL_SPACING), "ALinePixelSpacing", "A-line Pixel Spacing", Exact(FD), Vm::Exact(1), false),
    E::new(Single(MODE_OF_PERCUTANEOUS_ACCESS_SEQUENCE), "ModeOfPercutaneousAccessSequence", "Mode of Percutaneous Access Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INTRAVASCULAR_OCT_FRAME_TYPE_SEQUENCE), "IntravascularOCTFrameTypeSequence", "Intravascular OCT Frame Type Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OCTZ_OFFSET_APPLIED), "OCTZOffsetApplied", "OCT Z Offset Applied", Exact(CS), Vm::Exact(1), false),
    E::new(Single(INTRAVASCULAR_FRAME_CONTENT_SEQUENCE), "IntravascularFrameContentSequence", "Intravascular Frame Content Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INTRAVASCULAR_LONGITUDINAL_DISTANCE), "IntravascularLongitudinalDistance", "Intravascular Longitudinal Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(INTRAVASCULAR_OCT_FRAME_CONTENT_SEQUENCE), "IntravascularOCTFrameContentSequence", "Intravascular OCT Frame Content Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OCTZ_OFFSET_CORRECTION), "OCTZOffsetCorrection", "OCT Z Offset Correction", Exact(SS), Vm::Exact(1), false),
    E::new(Single(CATHETER_DIRECTION_OF_ROTATION), "CatheterDirectionOfRotation", "Catheter Direction of Rotation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SEAM_LINE_LOCATION), "SeamLineLocation", "Seam Line Location", Exact(FD), Vm::Exact(1), false),
    E::new(Single(FIRST_A_LINE_LOCATION), "FirstALineLocation", "First A-line Location", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SEAM_LINE_INDEX), "SeamLineIndex", "Seam Line Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_PADDED_ALINES), "NumberOfPaddedAlines", "Number of Padded A-lines", Exact(US), Vm::Exact(1), false),
    E::new(Single(INTERPOLATION_TYPE), "InterpolationType", "Interpolation Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REFRACTIVE_INDEX_APPLIED), "RefractiveIndexApplied", "Refractive Index Applied", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ENERGY_WINDOW_VECTOR), "EnergyWindowVector", "Energy Window Vector", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_ENERGY_WINDOWS), "NumberOfEnergyWindows", "Number of Energy Windows", Exact(US), Vm::Exact(1), false),
    E::new(Single(ENERGY_WINDOW_INFORMATION_SEQUENCE), "EnergyWindowInformationSequence", "Energy Window Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ENERGY_WINDOW_RANGE_SEQUENCE), "EnergyWindowRangeSequence", "Energy Window Range Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ENERGY_WINDOW_LOWER_LIMIT), "EnergyWindowLowerLimit", "Energy Window Lower Limit", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ENERGY_WINDOW_UPPER_LIMIT), "EnergyWindowUpperLimit", "Energy Window Upper Limit", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE), "RadiopharmaceuticalInformationSequence", "Radiopharmaceutical Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RESIDUAL_SYRINGE_COUNTS), "ResidualSyringeCounts", "Residual Syringe Counts", Exact(IS), Vm::Exact(1), false),
    E::new(Single(ENERGY_WINDOW_NAME), "EnergyWindowName", "Energy Window Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(DETECTOR_VECTOR), "DetectorVector", "Detector Vector", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_DETECTORS), "NumberOfDetectors", "Number of Detectors", Exact(US), Vm::Exact(1), false),
    E::new(Single(DETECTOR_INFORMATION_SEQUENCE), "DetectorInformationSequence", "Detector Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PHASE_VECTOR), "PhaseVector", "Phase Vector", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_PHASES), "NumberOfPhases", "Number of Phases", Exact(US), Vm::Exact(1), false),
    E::new(Single(PHASE_INFORMATION_SEQUENCE), "PhaseInformationSequence", "Phase Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_FRAMES_IN_PHASE), "NumberOfFramesInPhase", "Number of Frames in Phase", Exact(US), Vm::Exact(1), false),
    E::new(Single(PHASE_DELAY), "PhaseDelay", "Phase Delay", Exact(IS), Vm::Exact(1), false),
    E::new(Single(PAUSE_BETWEEN_FRAMES), "PauseBetweenFrames", "Pause Between Frames", Exact(IS), Vm::Exact(1), false),
    E::new(Single(PHASE_DESCRIPTION), "PhaseDescription", "Phase Description", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ROTATION_VECTOR), "RotationVector", "Rotation Vector", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_ROTATIONS), "NumberOfRotations", "Number of Rotations", Exact(US), Vm::Exact(1), false),
    E::new(Single(ROTATION_INFORMATION_SEQUENCE), "RotationInformationSequence", "Rotation Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_FRAMES_IN_ROTATION), "NumberOfFramesInRotation", "Number of Frames in Rotation", Exact(US), Vm::Exact(1), false),
    E::new(Single(RR_INTERVAL_VECTOR), "RRIntervalVector", "R-R Interval Vector", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_RR_INTERVALS), "NumberOfRRIntervals", "Number of R-R Intervals", Exact(US), Vm::Exact(1), false),
    E::new(Single(GATED_INFORMATION_SEQUENCE), "GatedInformationSequence", "Gated Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DATA_INFORMATION_SEQUENCE), "DataInformationSequence", "Data Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TIME_SLOT_VECTOR), "TimeSlotVector", "Time Slot Vector", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_TIME_SLOTS), "NumberOfTimeSlots", "Number of Time Slots", Exact(US), Vm::Exact(1), false),
    E::new(Single(TIME_SLOT_INFORMATION_SEQUENCE), "TimeSlotInformationSequence", "Time Slot Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TIME_SLOT_TIME), "TimeSlotTime", "Time Slot Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SLICE_VECTOR), "SliceVector", "Slice Vector", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_SLICES), "NumberOfSlices", "Number of Slices", Exact(US), Vm::Exact(1), false),
    E::new(Single(ANGULAR_VIEW_VECTOR), "AngularViewVector", "Angular View Vector", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(TIME_SLICE_VECTOR), "TimeSliceVector", "Time Slice Vector", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_TIME_SLICES), "NumberOfTimeSlices", "Number of Time Slices", Exact(US), Vm::Exact(1), false),
    E::new(Single(START_ANGLE), "StartAngle", "Start Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TYPE_OF_DETECTOR_MOTION), "TypeOfDetectorMotion", "Type of Detector Motion", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TRIGGER_VECTOR), "TriggerVector", "Trigger Vector", Exact(IS), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_TRIGGERS_IN_PHASE), "NumberOfTriggersInPhase", "Number of Triggers in Phase", Exact(US), Vm::Exact(1), false),
    E::new(Single(VIEW_CODE_SEQUENCE), "ViewCodeSequence", "View Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(VIEW_MODIFIER_CODE_SEQUENCE), "ViewModifierCodeSequence", "View Modifier Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIONUCLIDE_CODE_SEQUENCE), "RadionuclideCodeSequence", "Radionuclide Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ADMINISTRATION_ROUTE_CODE_SEQUENCE), "AdministrationRouteCodeSequence", "Administration Route Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIOPHARMACEUTICAL_CODE_SEQUENCE), "RadiopharmaceuticalCodeSequence", "Radiopharmaceutical Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CALIBRATION_DATA_SEQUENCE), "CalibrationDataSequence", "Calibration Data Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ENERGY_WINDOW_NUMBER), "EnergyWindowNumber", "Energy Window Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(IMAGE_ID), "ImageID", "Image ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(PATIENT_ORIENTATION_CODE_SEQUENCE), "PatientOrientationCodeSequence", "Patient Orientation Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_ORIENTATION_MODIFIER_CODE_SEQUENCE), "PatientOrientationModifierCodeSequence", "Patient Orientation Modifier Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_GANTRY_RELATIONSHIP_CODE_SEQUENCE), "PatientGantryRelationshipCodeSequence", "Patient Gantry Relationship Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SLICE_PROGRESSION_DIRECTION), "SliceProgressionDirection", "Slice Progression Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SCAN_PROGRESSION_DIRECTION), "ScanProgressionDirection", "Scan Progression Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SERIES_TYPE), "SeriesType", "Series Type", Exact(CS), Vm::Exact(2), false),
    E::new(Single(UNITS), "Units", "Units", Exact(CS), Vm::Exact(1), false),
    E::new(Single(COUNTS_SOURCE), "CountsSource", "Counts Source", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REPROJECTION_METHOD), "ReprojectionMethod", "Reprojection Method", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SUV_TYPE), "SUVType", "SUV Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RANDOMS_CORRECTION_METHOD), "RandomsCorrectionMethod", "Randoms Correction Method", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ATTENUATION_CORRECTION_METHOD), "AttenuationCorrectionMethod", "Attenuation Correction Method", Exact(LO), Vm::Exact(1), false),
    E::new(Single(DECAY_CORRECTION), "DecayCorrection", "Decay Correction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RECONSTRUCTION_METHOD), "ReconstructionMethod", "Reconstruction Method", Exact(LO), Vm::Exact(1), false),
    E::new(Single(DETECTOR_LINES_OF_RESPONSE_USED), "DetectorLinesOfResponseUsed", "Detector Lines of Response Used", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SCATTER_CORRECTION_METHOD), "ScatterCorrectionMethod", "Scatter Correction Method", Exact(LO), Vm::Exact(1), false),
    E::new(Single(AXIAL_ACCEPTANCE), "AxialAcceptance", "Axial Acceptance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(AXIAL_MASH), "AxialMash", "Axial Mash", Exact(IS), Vm::Exact(2), false),
    E::new(Single(TRANSVERSE_MASH), "TransverseMash", "Transverse Mash", Exact(IS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_ELEMENT_SIZE), "DetectorElementSize", "Detector Element Size", Exact(DS), Vm::Exact(2), false),
    E::new(Single(COINCIDENCE_WINDOW_WIDTH), "CoincidenceWindowWidth", "Coincidence Window Width", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SECONDARY_COUNTS_TYPE), "SecondaryCountsType", "Secondary Counts Type", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(FRAME_REFERENCE_TIME), "FrameReferenceTime", "Frame Reference Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PRIMARY_PROMPTS_COUNTS_ACCUMULATED), "PrimaryPromptsCountsAccumulated", "Primary (Prompts) Counts Accumulated", Exact(IS), Vm::Exact(1), false),
    E::new(Single(SECONDARY_COUNTS_ACCUMULATED), "SecondaryCountsAccumulated", "Secondary Counts Accumulated", Exact(IS), Vm::AtLeast(1), false),
    E::new(Single(SLICE_SENSITIVITY_FACTOR), "SliceSensitivityFactor", "Slice Sensitivity Factor", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DECAY_FACTOR), "DecayFactor", "Decay Factor", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DOSE_CALIBRATION_FACTOR), "DoseCalibrationFactor", "Dose Calibration Factor", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SCATTER_FRACTION_FACTOR), "ScatterFractionFactor", "Scatter Fraction Factor", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DEAD_TIME_FACTOR), "DeadTimeFactor", "Dead Time Factor", Exact(DS), Vm::Exact(1), false),
    E::new(Single(IMAGE_INDEX), "ImageIndex", "Image Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(COUNTS_INCLUDED), "CountsIncluded", "Counts Included", Exact(CS), Vm::AtLeast(1), true),
    E::new(Single(DEAD_TIME_CORRECTION_FLAG), "DeadTimeCorrectionFlag", "Dead Time Correction Flag", Exact(CS), Vm::Exact(1), true),
    E::new(Single(HISTOGRAM_SEQUENCE), "HistogramSequence", "Histogram Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(HISTOGRAM_NUMBER_OF_BINS), "HistogramNumberOfBins", "Histogram Number of Bins", Exact(US), Vm::Exact(1), false),
    E::new(Single(HISTOGRAM_FIRST_BIN_VALUE), "HistogramFirstBinValue", "Histogram First Bin Value", Xs, Vm::Exact(1), false),
    E::new(Single(HISTOGRAM_LAST_BIN_VALUE), "HistogramLastBinValue", "Histogram Last Bin Value", Xs, Vm::Exact(1), false),
    E::new(Single(HISTOGRAM_BIN_WIDTH), "HistogramBinWidth", "Histogram Bin Width", Exact(US), Vm::Exact(1), false),
    E::new(Single(HISTOGRAM_EXPLANATION), "HistogramExplanation", "Histogram Explanation", Exact(LO), Vm::Exact(1), false),
    E::new(Single(HISTOGRAM_DATA), "HistogramData", "Histogram Data", Exact(UL), Vm::AtLeast(1), false),
    E::new(Single(SEGMENTATION_TYPE), "SegmentationType", "Segmentation Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SEGMENT_SEQUENCE), "SegmentSequence", "Segment Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENTED_PROPERTY_CATEGORY_CODE_SEQUENCE), "SegmentedPropertyCategoryCodeSequence", "Segmented Property Category Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENT_NUMBER), "SegmentNumber", "Segment Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(SEGMENT_LABEL), "SegmentLabel", "Segment Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SEGMENT_DESCRIPTION), "SegmentDescription", "Segment Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(SEGMENTATION_ALGORITHM_IDENTIFICATION_SEQUENCE), "SegmentationAlgorithmIdentificationSequence", "Segmentation Algorithm Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENT_ALGORITHM_TYPE), "SegmentAlgorithmType", "Segment Algorithm Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SEGMENT_ALGORITHM_NAME), "SegmentAlgorithmName", "Segment Algorithm Name", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(SEGMENT_IDENTIFICATION_SEQUENCE), "SegmentIdentificationSequence", "Segment Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SEGMENT_NUMBER), "ReferencedSegmentNumber", "Referenced Segment Number", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(RECOMMENDED_DISPLAY_GRAYSCALE_VALUE), "RecommendedDisplayGrayscaleValue", "Recommended Display Grayscale Value", Exact(US), Vm::Exact(1), false),
    E::new(Single(RECOMMENDED_DISPLAY_CIE_LAB_VALUE), "RecommendedDisplayCIELabValue", "Recommended Display CIELab Value", Exact(US), Vm::Exact(3), false),
    E::new(Single(MAXIMUM_FRACTIONAL_VALUE), "MaximumFractionalValue", "Maximum Fractional Value", Exact(US), Vm::Exact(1), false),
    E::new(Single(SEGMENTED_PROPERTY_TYPE_CODE_SEQUENCE), "SegmentedPropertyTypeCodeSequence", "Segmented Property Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENTATION_FRACTIONAL_TYPE), "SegmentationFractionalType", "Segmentation Fractional Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SEGMENTED_PROPERTY_TYPE_MODIFIER_CODE_SEQUENCE), "SegmentedPropertyTypeModifierCodeSequence", "Segmented Property Type Modifier Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(USED_SEGMENTS_SEQUENCE), "UsedSegmentsSequence", "Used Segments Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENTS_OVERLAP), "SegmentsOverlap", "Segments Overlap", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TRACKING_ID), "TrackingID", "Tracking ID", Exact(UT), Vm::Exact(1), false),
    E::new(Single(TRACKING_UID), "TrackingUID", "Tracking UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(DEFORMABLE_REGISTRATION_SEQUENCE), "DeformableRegistrationSequence", "Deformable Registration Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SOURCE_FRAME_OF_REFERENCE_UID), "SourceFrameOfReferenceUID", "Source Frame of Reference UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(DEFORMABLE_REGISTRATION_GRID_SEQUENCE), "DeformableRegistrationGridSequence", "Deformable Registration Grid Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GRID_DIMENSIONS), "GridDimensions", "Grid Dimensions", Exact(UL), Vm::Exact(3), false),
    E::new(Single(GRID_RESOLUTION), "GridResolution", "Grid Resolution", Exact(FD), Vm::Exact(3), false),
    E::new(Single(VECTOR_GRID_DATA), "VectorGridData", "Vector Grid Data", Exact(OF), Vm::Exact(1), false),
    E::new(Single(PRE_DEFORMATION_MATRIX_REGISTRATION_SEQUENCE), "PreDeformationMatrixRegistrationSequence", "Pre Deformation Matrix Registration Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(POST_DEFORMATION_MATRIX_REGISTRATION_SEQUENCE), "PostDeformationMatrixRegistrationSequence", "Post Deformation Matrix Registration Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_SURFACES), "NumberOfSurfaces", "Number of Surfaces", Exact(UL), Vm::Exact(1), false),
    E::new(Single(SURFACE_SEQUENCE), "SurfaceSequence", "Surface Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SURFACE_NUMBER), "SurfaceNumber", "Surface Number", Exact(UL), Vm::Exact(1), false),
    E::new(Single(SURFACE_COMMENTS), "SurfaceComments", "Surface Comments", Exact(LT), Vm::Exact(1), false),
    E::new(Single(SURFACE_PROCESSING), "SurfaceProcessing", "Surface Processing", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SURFACE_PROCESSING_RATIO), "SurfaceProcessingRatio", "Surface Processing Ratio", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SURFACE_PROCESSING_DESCRIPTION), "SurfaceProcessingDescription", "Surface Processing Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(RECOMMENDED_PRESENTATION_OPACITY), "RecommendedPresentationOpacity", "Recommended Presentation Opacity", Exact(FL), Vm::Exact(1), false),
    E::new(Single(RECOMMENDED_PRESENTATION_TYPE), "RecommendedPresentationType", "Recommended Presentation Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FINITE_VOLUME), "FiniteVolume", "Finite Volume", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MANIFOLD), "Manifold", "Manifold", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SURFACE_POINTS_SEQUENCE), "SurfacePointsSequence", "Surface Points Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SURFACE_POINTS_NORMALS_SEQUENCE), "SurfacePointsNormalsSequence", "Surface Points Normals Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SURFACE_MESH_PRIMITIVES_SEQUENCE), "SurfaceMeshPrimitivesSequence", "Surface Mesh Primitives Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_SURFACE_POINTS), "NumberOfSurfacePoints", "Number of Surface Points", Exact(UL), Vm::Exact(1), false),
    E::new(Single(POINT_COORDINATES_DATA), "PointCoordinatesData", "Point Coordinates Data", Exact(OF), Vm::Exact(1), false),
    E::new(Single(POINT_POSITION_ACCURACY), "PointPositionAccuracy", "Point Position Accuracy", Exact(FL), Vm::Exact(3), false),
    E::new(Single(MEAN_POINT_DISTANCE), "MeanPointDistance", "Mean Point Distance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(MAXIMUM_POINT_DISTANCE), "MaximumPointDistance", "Maximum Point Distance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(POINTS_BOUNDING_BOX_COORDINATES), "PointsBoundingBoxCoordinates", "Points Bounding Box Coordinates", Exact(FL), Vm::Exact(6), false),
    E::new(Single(AXIS_OF_ROTATION), "AxisOfRotation", "Axis of Rotation", Exact(FL), Vm::Exact(3), false),
    E::new(Single(CENTER_OF_ROTATION), "CenterOfRotation", "Center of Rotation", Exact(FL), Vm::Exact(3), false),
    E::new(Single(NUMBER_OF_VECTORS), "NumberOfVectors", "Number of Vectors", Exact(UL), Vm::Exact(1), false),
    E::new(Single(VECTOR_DIMENSIONALITY), "VectorDimensionality", "Vector Dimensionality", Exact(US), Vm::Exact(1), false),
    E::new(Single(VECTOR_ACCURACY), "VectorAccuracy", "Vector Accuracy", Exact(FL), Vm::AtLeast(1), false),
    E::new(Single(VECTOR_COORDINATE_DATA), "VectorCoordinateData", "Vector Coordinate Data", Exact(OF), Vm::Exact(1), false),
    E::new(Single(TRIANGLE_POINT_INDEX_LIST), "TrianglePointIndexList", "Triangle Point Index List", Exact(OW), Vm::Exact(1), true),
    E::new(Single(EDGE_POINT_INDEX_LIST), "EdgePointIndexList", "Edge Point Index List", Exact(OW), Vm::Exact(1), true),
    E::new(Single(VERTEX_POINT_INDEX_LIST), "VertexPointIndexList", "Vertex Point Index List", Exact(OW), Vm::Exact(1), true),
    E::new(Single(TRIANGLE_STRIP_SEQUENCE), "TriangleStripSequence", "Triangle Strip Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TRIANGLE_FAN_SEQUENCE), "TriangleFanSequence", "Triangle Fan Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LINE_SEQUENCE), "LineSequence", "Line Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRIMITIVE_POINT_INDEX_LIST), "PrimitivePointIndexList", "Primitive Point Index List", Exact(OW), Vm::Exact(1), true),
    E::new(Single(SURFACE_COUNT), "SurfaceCount", "Surface Count", Exact(UL), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SURFACE_SEQUENCE), "ReferencedSurfaceSequence", "Referenced Surface Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SURFACE_NUMBER), "ReferencedSurfaceNumber", "Referenced Surface Number", Exact(UL), Vm::Exact(1), false),
    E::new(Single(SEGMENT_SURFACE_GENERATION_ALGORITHM_IDENTIFICATION_SEQUENCE), "SegmentSurfaceGenerationAlgorithmIdentificationSequence", "Segment Surface Generation Algorithm Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENT_SURFACE_SOURCE_INSTANCE_SEQUENCE), "SegmentSurfaceSourceInstanceSequence", "Segment Surface Source Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ALGORITHM_FAMILY_CODE_SEQUENCE), "AlgorithmFamilyCodeSequence", "Algorithm Family Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ALGORITHM_NAME_CODE_SEQUENCE), "AlgorithmNameCodeSequence", "Algorithm Name Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ALGORITHM_VERSION), "AlgorithmVersion", "Algorithm Version", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ALGORITHM_PARAMETERS), "AlgorithmParameters", "Algorithm Parameters", Exact(LT), Vm::Exact(1), false),
    E::new(Single(FACET_SEQUENCE), "FacetSequence", "Facet Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SURFACE_PROCESSING_ALGORITHM_IDENTIFICATION_SEQUENCE), "SurfaceProcessingAlgorithmIdentificationSequence", "Surface Processing Algorithm Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ALGORITHM_NAME), "AlgorithmName", "Algorithm Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(RECOMMENDED_POINT_RADIUS), "RecommendedPointRadius", "Recommended Point Radius", Exact(FL), Vm::Exact(1), false),
    E::new(Single(RECOMMENDED_LINE_THICKNESS), "RecommendedLineThickness", "Recommended Line Thickness", Exact(FL), Vm::Exact(1), false),
    E::new(Single(LONG_PRIMITIVE_POINT_INDEX_LIST), "LongPrimitivePointIndexList", "Long Primitive Point Index List", Exact(OL), Vm::Exact(1), false),
    E::new(Single(LONG_TRIANGLE_POINT_INDEX_LIST), "LongTrianglePointIndexList", "Long Triangle Point Index List", Exact(OL), Vm::Exact(1), false),
    E::new(Single(LONG_EDGE_POINT_INDEX_LIST), "LongEdgePointIndexList", "Long Edge Point Index List", Exact(OL), Vm::Exact(1), false),
    E::new(Single(LONG_VERTEX_POINT_INDEX_LIST), "LongVertexPointIndexList", "Long Vertex Point Index List", Exact(OL), Vm::Exact(1), false),
    E::new(Single(TRACK_SET_SEQUENCE), "TrackSetSequence", "Track Set Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TRACK_SEQUENCE), "TrackSequence", "Track Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECOMMENDED_DISPLAY_CIE_LAB_VALUE_LIST), "RecommendedDisplayCIELabValueList", "Recommended Display CIELab Value List", Exact(OW), Vm::Exact(1), false),
    E::new(Single(TRACKING_ALGORITHM_IDENTIFICATION_SEQUENCE), "TrackingAlgorithmIdentificationSequence", "Tracking Algorithm Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TRACK_SET_NUMBER), "TrackSetNumber", "Track Set Number", Exact(UL), Vm::Exact(1), false),
    E::new(Single(TRACK_SET_LABEL), "TrackSetLabel", "Track Set Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(TRACK_SET_DESCRIPTION), "TrackSetDescription", "Track Set Description", Exact(UT), Vm::Exact(1), false),
    E::new(Single(TRACK_SET_ANATOMICAL_TYPE_CODE_SEQUENCE), "TrackSetAnatomicalTypeCodeSequence", "Track Set Anatomical Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MEASUREMENTS_SEQUENCE), "MeasurementsSequence", "Measurements Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TRACK_SET_STATISTICS_SEQUENCE), "TrackSetStatisticsSequence", "Track Set Statistics Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FLOATING_POINT_VALUES), "FloatingPointValues", "Floating Point Values", Exact(OF), Vm::Exact(1), false),
    E::new(Single(TRACK_POINT_INDEX_LIST), "TrackPointIndexList", "Track Point Index List", Exact(OL), Vm::Exact(1), false),
    E::new(Single(TRACK_STATISTICS_SEQUENCE), "TrackStatisticsSequence", "Track Statistics Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MEASUREMENT_VALUES_SEQUENCE), "MeasurementValuesSequence", "Measurement Values Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_ACQUISITION_CODE_SEQUENCE), "DiffusionAcquisitionCodeSequence", "Diffusion Acquisition Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DIFFUSION_MODEL_CODE_SEQUENCE), "DiffusionModelCodeSequence", "Diffusion Model Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_ANNOTATION_SEQUENCE), "GraphicAnnotationSequence", "Graphic Annotation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_LAYER), "GraphicLayer", "Graphic Layer", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BOUNDING_BOX_ANNOTATION_UNITS), "BoundingBoxAnnotationUnits", "Bounding Box Annotation Units", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ANCHOR_POINT_ANNOTATION_UNITS), "AnchorPointAnnotationUnits", "Anchor Point Annotation Units", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_ANNOTATION_UNITS), "GraphicAnnotationUnits", "Graphic Annotation Units", Exact(CS), Vm::Exact(1), false),
    E::new(Single(UNFORMATTED_TEXT_VALUE), "UnformattedTextValue", "Unformatted Text Value", Exact(ST), Vm::Exact(1), false),
    E::new(Single(TEXT_OBJECT_SEQUENCE), "TextObjectSequence", "Text Object Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_OBJECT_SEQUENCE), "GraphicObjectSequence", "Graphic Object Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BOUNDING_BOX_TOP_LEFT_HAND_CORNER), "BoundingBoxTopLeftHandCorner", "Bounding Box Top Left Hand Corner", Exact(FL), Vm::Exact(2), false),
    E::new(Single(BOUNDING_BOX_BOTTOM_RIGHT_HAND_CORNER), "BoundingBoxBottomRightHandCorner", "Bounding Box Bottom Right Hand Corner", Exact(FL), Vm::Exact(2), false),
    E::new(Single(BOUNDING_BOX_TEXT_HORIZONTAL_JUSTIFICATION), "BoundingBoxTextHorizontalJustification", "Bounding Box Text Horizontal Justification", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ANCHOR_POINT), "AnchorPoint", "Anchor Point", Exact(FL), Vm::Exact(2), false),
    E::new(Single(ANCHOR_POINT_VISIBILITY), "AnchorPointVisibility", "Anchor Point Visibility", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_DIMENSIONS), "GraphicDimensions", "Graphic Dimensions", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_GRAPHIC_POINTS), "NumberOfGraphicPoints", "Number of Graphic Points", Exact(US), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_DATA), "GraphicData", "Graphic Data", Exact(FL), Vm::AtLeast(2), false),
    E::new(Single(GRAPHIC_TYPE), "GraphicType", "Graphic Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_FILLED), "GraphicFilled", "Graphic Filled", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IMAGE_ROTATION_RETIRED), "ImageRotationRetired", "Image Rotation (Retired)", Exact(IS), Vm::Exact(1), true),
    E::new(Single(IMAGE_HORIZONTAL_FLIP), "ImageHorizontalFlip", "Image Horizontal Flip", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IMAGE_ROTATION), "ImageRotation", "Image Rotation", Exact(US), Vm::Exact(1), false),
    E::new(Single(DISPLAYED_AREA_TOP_LEFT_HAND_CORNER_TRIAL), "DisplayedAreaTopLeftHandCornerTrial", "Displayed Area Top Left Hand Corner (Trial)", Exact(US), Vm::Exact(2), true),
    E::new(Single(DISPLAYED_AREA_BOTTOM_RIGHT_HAND_CORNER_TRIAL), "DisplayedAreaBottomRightHandCornerTrial", "Displayed Area Bottom Right Hand Corner (Trial)", Exact(US), Vm::Exact(2), true),
    E::new(Single(DISPLAYED_AREA_TOP_LEFT_HAND_CORNER), "DisplayedAreaTopLeftHandCorner", "Displayed Area Top Left Hand Corner", Exact(SL), Vm::Exact(2), false),
    E::new(Single(DISPLAYED_AREA_BOTTOM_RIGHT_HAND_CORNER), "DisplayedAreaBottomRightHandCorner", "Displayed Area Bottom Right Hand Corner", Exact(SL), Vm::Exact(2), false),
    E::new(Single(DISPLAYED_AREA_SELECTION_SEQUENCE), "DisplayedAreaSelectionSequence", "Displayed Area Selection Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_LAYER_SEQUENCE), "GraphicLayerSequence", "Graphic Layer Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_LAYER_ORDER), "GraphicLayerOrder", "Graphic Layer Order", Exact(IS), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_LAYER_RECOMMENDED_DISPLAY_GRAYSCALE_VALUE), "GraphicLayerRecommendedDisplayGrayscaleValue", "Graphic Layer Recommended Display Grayscale Value", Exact(US), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_LAYER_RECOMMENDED_DISPLAY_RGB_VALUE), "GraphicLayerRecommendedDisplayRGBValue", "Graphic Layer Recommended Display RGB Value", Exact(US), Vm::Exact(3), true),
    E::new(Single(GRAPHIC_LAYER_DESCRIPTION), "GraphicLayerDescription", "Graphic Layer Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CONTENT_LABEL), "ContentLabel", "Content Label", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONTENT_DESCRIPTION), "ContentDescription", "Content Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_CREATION_DATE), "PresentationCreationDate", "Presentation Creation Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_CREATION_TIME), "PresentationCreationTime", "Presentation Creation Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(CONTENT_CREATOR_NAME), "ContentCreatorName", "Content Creator's Name", Exact(PN), Vm::Exact(1), false),
    E::new(Single(CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE), "ContentCreatorIdentificationCodeSequence", "Content Creator's Identification Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ALTERNATE_CONTENT_DESCRIPTION_SEQUENCE), "AlternateContentDescriptionSequence", "Alternate Content Description Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_SIZE_MODE), "PresentationSizeMode", "Presentation Size Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_PIXEL_SPACING), "PresentationPixelSpacing", "Presentation Pixel Spacing", Exact(DS), Vm::Exact(2), false),
    E::new(Single(PRESENTATION_PIXEL_ASPECT_RATIO), "PresentationPixelAspectRatio", "Presentation Pixel Aspect Ratio", Exact(IS), Vm::Exact(2), false),
    E::new(Single(PRESENTATION_PIXEL_MAGNIFICATION_RATIO), "PresentationPixelMagnificationRatio", "Presentation Pixel Magnification Ratio", Exact(FL), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_GROUP_LABEL), "GraphicGroupLabel", "Graphic Group Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_GROUP_DESCRIPTION), "GraphicGroupDescription", "Graphic Group Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(COMPOUND_GRAPHIC_SEQUENCE), "CompoundGraphicSequence", "Compound Graphic Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMPOUND_GRAPHIC_INSTANCE_ID), "CompoundGraphicInstanceID", "Compound Graphic Instance ID", Exact(UL), Vm::Exact(1), false),
    E::new(Single(FONT_NAME), "FontName", "Font Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(FONT_NAME_TYPE), "FontNameType", "Font Name Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CSS_FONT_NAME), "CSSFontName", "CSS Font Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ROTATION_ANGLE), "RotationAngle", "Rotation Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TEXT_STYLE_SEQUENCE), "TextStyleSequence", "Text Style Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LINE_STYLE_SEQUENCE), "LineStyleSequence", "Line Style Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FILL_STYLE_SEQUENCE), "FillStyleSequence", "Fill Style Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_GROUP_SEQUENCE), "GraphicGroupSequence", "Graphic Group Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TEXT_COLOR_CIE_LAB_VALUE), "TextColorCIELabValue", "Text Color CIELab Value", Exact(US), Vm::Exact(3), false),
    E::new(Single(HORIZONTAL_ALIGNMENT), "HorizontalAlignment", "Horizontal Alignment", Exact(CS), Vm::Exact(1), false),
    E::new(Single(VERTICAL_ALIGNMENT), "VerticalAlignment", "Vertical Alignment", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SHADOW_STYLE), "ShadowStyle", "Shadow Style", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SHADOW_OFFSET_X), "ShadowOffsetX", "Shadow Offset X", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SHADOW_OFFSET_Y), "ShadowOffsetY", "Shadow Offset Y", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SHADOW_COLOR_CIE_LAB_VALUE), "ShadowColorCIELabValue", "Shadow Color CIELab Value", Exact(US), Vm::Exact(3), false),
    E::new(Single(UNDERLINED), "Underlined", "Underlined", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BOLD), "Bold", "Bold", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ITALIC), "Italic", "Italic", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATTERN_ON_COLOR_CIE_LAB_VALUE), "PatternOnColorCIELabValue", "Pattern On Color CIELab Value", Exact(US), Vm::Exact(3), false),
    E::new(Single(PATTERN_OFF_COLOR_CIE_LAB_VALUE), "PatternOffColorCIELabValue", "Pattern Off Color CIELab Value", Exact(US), Vm::Exact(3), false),
    E::new(Single(LINE_THICKNESS), "LineThickness", "Line Thickness", Exact(FL), Vm::Exact(1), false),
    E::new(Single(LINE_DASHING_STYLE), "LineDashingStyle", "Line Dashing Style", Exact(CS), Vm::Exact(1), false),
    E::new(Single(LINE_PATTERN), "LinePattern", "Line Pattern", Exact(UL), Vm::Exact(1), false),
    E::new(Single(FILL_PATTERN), "FillPattern", "Fill Pattern", Exact(OB), Vm::Exact(1), false),
    E::new(Single(FILL_MODE), "FillMode", "Fill Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SHADOW_OPACITY), "ShadowOpacity", "Shadow Opacity", Exact(FL), Vm::Exact(1), false),
    E::new(Single(GAP_LENGTH), "GapLength", "Gap Length", Exact(FL), Vm::Exact(1), false),
    E::new(Single(DIAMETER_OF_VISIBILITY), "DiameterOfVisibility", "Diameter of Visibility", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ROTATION_POINT), "RotationPoint", "Rotation Point", Exact(FL), Vm::Exact(2), false),
    E::new(Single(TICK_ALIGNMENT), "TickAlignment", "Tick Alignment", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SHOW_TICK_LABEL), "ShowTickLabel", "Show Tick Label", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TICK_LABEL_ALIGNMENT), "TickLabelAlignment", "Tick Label Alignment", Exact(CS), Vm::Exact(1), false),
    E::new(Single(COMPOUND_GRAPHIC_UNITS), "CompoundGraphicUnits", "Compound Graphic Units", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATTERN_ON_OPACITY), "PatternOnOpacity", "Pattern On Opacity", Exact(FL), Vm::Exact(1), false),
    E::new(Single(PATTERN_OFF_OPACITY), "PatternOffOpacity", "Pattern Off Opacity", Exact(FL), Vm::Exact(1), false),
    E::new(Single(MAJOR_TICKS_SEQUENCE), "MajorTicksSequence", "Major Ticks Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TICK_POSITION), "TickPosition", "Tick Position", Exact(FL), Vm::Exact(1), false),
    E::new(Single(TICK_LABEL), "TickLabel", "Tick Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(COMPOUND_GRAPHIC_TYPE), "CompoundGraphicType", "Compound Graphic Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_GROUP_ID), "GraphicGroupID", "Graphic Group ID", Exact(UL), Vm::Exact(1), false),
    E::new(Single(SHAPE_TYPE), "ShapeType", "Shape Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REGISTRATION_SEQUENCE), "RegistrationSequence", "Registration Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MATRIX_REGISTRATION_SEQUENCE), "MatrixRegistrationSequence", "Matrix Registration Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MATRIX_SEQUENCE), "MatrixSequence", "Matrix Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FRAME_OF_REFERENCE_TO_DISPLAYED_COORDINATE_SYSTEM_TRANSFORMATION_MATRIX), "FrameOfReferenceToDisplayedCoordinateSystemTransformationMatrix", "Frame of Reference to Displayed Coordinate System Transformation Matrix", Exact(FD), Vm::Exact(16), false),
    E::new(Single(FRAME_OF_REFERENCE_TRANSFORMATION_MATRIX_TYPE), "FrameOfReferenceTransformationMatrixType", "Frame of Reference Transformation Matrix Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REGISTRATION_TYPE_CODE_SEQUENCE), "RegistrationTypeCodeSequence", "Registration Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FIDUCIAL_DESCRIPTION), "FiducialDescription", "Fiducial Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(FIDUCIAL_IDENTIFIER), "FiducialIdentifier", "Fiducial Identifier", Exact(SH), Vm::Exact(1), false),
    E::new(Single(FIDUCIAL_IDENTIFIER_CODE_SEQUENCE), "FiducialIdentifierCodeSequence", "Fiducial Identifier Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTOUR_UNCERTAINTY_RADIUS), "ContourUncertaintyRadius", "Contour Uncertainty Radius", Exact(FD), Vm::Exact(1), false),
    E::new(Single(USED_FIDUCIALS_SEQUENCE), "UsedFiducialsSequence", "Used Fiducials Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_COORDINATES_DATA_SEQUENCE), "GraphicCoordinatesDataSequence", "Graphic Coordinates Data Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FIDUCIAL_UID), "FiducialUID", "Fiducial UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(REFERENCED_FIDUCIAL_UID), "ReferencedFiducialUID", "Referenced Fiducial UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(FIDUCIAL_SET_SEQUENCE), "FiducialSetSequence", "Fiducial Set Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FIDUCIAL_SEQUENCE), "FiducialSequence", "Fiducial Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FIDUCIALS_PROPERTY_CATEGORY_CODE_SEQUENCE), "FiducialsPropertyCategoryCodeSequence", "Fiducials Property Category Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GRAPHIC_LAYER_RECOMMENDED_DISPLAY_CIE_LAB_VALUE), "GraphicLayerRecommendedDisplayCIELabValue", "Graphic Layer Recommended Display CIELab Value", Exact(US), Vm::Exact(3), false),
    E::new(Single(BLENDING_SEQUENCE), "BlendingSequence", "Blending Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RELATIVE_OPACITY), "RelativeOpacity", "Relative Opacity", Exact(FL), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SPATIAL_REGISTRATION_SEQUENCE), "ReferencedSpatialRegistrationSequence", "Referenced Spatial Registration Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BLENDING_POSITION), "BlendingPosition", "Blending Position", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_DISPLAY_COLLECTION_UID), "PresentationDisplayCollectionUID", "Presentation Display Collection UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_SEQUENCE_COLLECTION_UID), "PresentationSequenceCollectionUID", "Presentation Sequence Collection UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_SEQUENCE_POSITION_INDEX), "PresentationSequencePositionIndex", "Presentation Sequence Position Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(RENDERED_IMAGE_REFERENCE_SEQUENCE), "RenderedImageReferenceSequence", "Rendered Image Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(VOLUMETRIC_PRESENTATION_STATE_INPUT_SEQUENCE), "VolumetricPresentationStateInputSequence", "Volumetric Presentation State Input Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_INPUT_TYPE), "PresentationInputType", "Presentation Input Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(INPUT_SEQUENCE_POSITION_INDEX), "InputSequencePositionIndex", "Input Sequence Position Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(CROP), "Crop", "Crop", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CROPPING_SPECIFICATION_INDEX), "CroppingSpecificationIndex", "Cropping Specification Index", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(COMPOSITING_METHOD), "CompositingMethod", "Compositing Method", Exact(CS), Vm::Exact(1), true),
    E::new(Single(VOLUMETRIC_PRESENTATION_INPUT_NUMBER), "VolumetricPresentationInputNumber", "Volumetric Presentation Input Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(IMAGE_VOLUME_GEOMETRY), "ImageVolumeGeometry", "Image Volume Geometry", Exact(CS), Vm::Exact(1), false),
    E::new(Single(VOLUMETRIC_PRESENTATION_INPUT_SET_UID), "VolumetricPresentationInputSetUID", "Volumetric Presentation Input Set UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(VOLUMETRIC_PRESENTATION_INPUT_SET_SEQUENCE), "VolumetricPresentationInputSetSequence", "Volumetric Presentation Input Set Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GLOBAL_CROP), "GlobalCrop", "Global Crop", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GLOBAL_CROPPING_SPECIFICATION_INDEX), "GlobalCroppingSpecificationIndex", "Global Cropping Specification Index", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(RENDERING_METHOD), "RenderingMethod", "Rendering Method", Exact(CS), Vm::Exact(1), false),
    E::new(Single(VOLUME_CROPPING_SEQUENCE), "VolumeCroppingSequence", "Volume Cropping Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(VOLUME_CROPPING_METHOD), "VolumeCroppingMethod", "Volume Cropping Method", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BOUNDING_BOX_CROP), "BoundingBoxCrop", "Bounding Box Crop", Exact(FD), Vm::Exact(6), false),
    E::new(Single(OBLIQUE_CROPPING_PLANE_SEQUENCE), "ObliqueCroppingPlaneSequence", "Oblique Cropping Plane Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PLANE), "Plane", "Plane", Exact(FD), Vm::Exact(4), false),
    E::new(Single(PLANE_NORMAL), "PlaneNormal", "Plane Normal", Exact(FD), Vm::Exact(3), false),
    E::new(Single(CROPPING_SPECIFICATION_NUMBER), "CroppingSpecificationNumber", "Cropping Specification Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(MULTI_PLANAR_RECONSTRUCTION_STYLE), "MultiPlanarReconstructionStyle", "Multi-Planar Reconstruction Style", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MPR_THICKNESS_TYPE), "MPRThicknessType", "MPR Thickness Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MPR_SLAB_THICKNESS), "MPRSlabThickness", "MPR Slab Thickness", Exact(FD), Vm::Exact(1), false),
    E::new(Single(MPR_TOP_LEFT_HAND_CORNER), "MPRTopLeftHandCorner", "MPR Top Left Hand Corner", Exact(FD), Vm::Exact(3), false),
    E::new(Single(MPR_VIEW_WIDTH_DIRECTION), "MPRViewWidthDirection", "MPR View Width Direction", Exact(FD), Vm::Exact(3), false),
    E::new(Single(MPR_VIEW_WIDTH), "MPRViewWidth", "MPR View Width", Exact(FD), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_VOLUMETRIC_CURVE_POINTS), "NumberOfVolumetricCurvePoints", "Number of Volumetric Curve Points", Exact(UL), Vm::Exact(1), false),
    E::new(Single(VOLUMETRIC_CURVE_POINTS), "VolumetricCurvePoints", "Volumetric Curve Points", Exact(OD), Vm::Exact(1), false),
    E::new(Single(MPR_VIEW_HEIGHT_DIRECTION), "MPRViewHeightDirection", "MPR View Height Direction", Exact(FD), Vm::Exact(3), false),
    E::new(Single(MPR_VIEW_HEIGHT), "MPRViewHeight", "MPR View Height", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RENDER_PROJECTION), "RenderProjection", "Render Projection", Exact(CS), Vm::Exact(1), false),
    E::new(Single(VIEWPOINT_POSITION), "ViewpointPosition", "Viewpoint Position", Exact(FD), Vm::Exact(3), false),
    E::new(Single(VIEWPOINT_LOOK_AT_POINT), "ViewpointLookAtPoint", "Viewpoint LookAt Point", Exact(FD), Vm::Exact(3), false),
    E::new(Single(VIEWPOINT_UP_DIRECTION), "ViewpointUpDirection", "Viewpoint Up Direction", Exact(FD), Vm::Exact(3), false),
    E::new(Single(RENDER_FIELD_OF_VIEW), "RenderFieldOfView", "Render Field of View", Exact(FD), Vm::Exact(6), false),
    E::new(Single(SAMPLING_STEP_SIZE), "SamplingStepSize", "Sampling Step Size", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SHADING_STYLE), "ShadingStyle", "Shading Style", Exact(CS), Vm::Exact(1), false),
    E::new(Single(AMBIENT_REFLECTION_INTENSITY), "AmbientReflectionIntensity", "Ambient Reflection Intensity", Exact(FD), Vm::Exact(1), false),
    E::new(Single(LIGHT_DIRECTION), "LightDirection", "Light Direction", Exact(FD), Vm::Exact(3), false),
    E::new(Single(DIFFUSE_REFLECTION_INTENSITY), "DiffuseReflectionIntensity", "Diffuse Reflection Intensity", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SPECULAR_REFLECTION_INTENSITY), "SpecularReflectionIntensity", "Specular Reflection Intensity", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SHININESS), "Shininess", "Shininess", Exact(FD), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_STATE_CLASSIFICATION_COMPONENT_SEQUENCE), "PresentationStateClassificationComponentSequence", "Presentation State Classification Component Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMPONENT_TYPE), "ComponentType", "Component Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(COMPONENT_INPUT_SEQUENCE), "ComponentInputSequence", "Component Input Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(VOLUMETRIC_PRESENTATION_INPUT_INDEX), "VolumetricPresentationInputIndex", "Volumetric Presentation Input Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_STATE_COMPOSITOR_COMPONENT_SEQUENCE), "PresentationStateCompositorComponentSequence", "Presentation State Compositor Component Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(WEIGHTING_TRANSFER_FUNCTION_SEQUENCE), "WeightingTransferFunctionSequence", "Weighting Transfer Function Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(WEIGHTING_LOOKUP_TABLE_DESCRIPTOR), "WeightingLookupTableDescriptor", "Weighting Lookup Table Descriptor", Exact(US), Vm::Exact(3), false),
    E::new(Single(WEIGHTING_LOOKUP_TABLE_DATA), "WeightingLookupTableData", "Weighting Lookup Table Data", Exact(OB), Vm::Exact(1), false),
    E::new(Single(VOLUMETRIC_ANNOTATION_SEQUENCE), "VolumetricAnnotationSequence", "Volumetric Annotation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_STRUCTURED_CONTEXT_SEQUENCE), "ReferencedStructuredContextSequence", "Referenced Structured Context Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_CONTENT_ITEM), "ReferencedContentItem", "Referenced Content Item", Exact(UI), Vm::Exact(1), false),
    E::new(Single(VOLUMETRIC_PRESENTATION_INPUT_ANNOTATION_SEQUENCE), "VolumetricPresentationInputAnnotationSequence", "Volumetric Presentation Input Annotation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ANNOTATION_CLIPPING), "AnnotationClipping", "Annotation Clipping", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_ANIMATION_STYLE), "PresentationAnimationStyle", "Presentation Animation Style", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RECOMMENDED_ANIMATION_RATE), "RecommendedAnimationRate", "Recommended Animation Rate", Exact(FD), Vm::Exact(1), false),
    E::new(Single(ANIMATION_CURVE_SEQUENCE), "AnimationCurveSequence", "Animation Curve Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ANIMATION_STEP_SIZE), "AnimationStepSize", "Animation Step Size", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SWIVEL_RANGE), "SwivelRange", "Swivel Range", Exact(FD), Vm::Exact(1), false),
    E::new(Single(VOLUMETRIC_CURVE_UP_DIRECTIONS), "VolumetricCurveUpDirections", "Volumetric Curve Up Directions", Exact(OD), Vm::Exact(1), false),
    E::new(Single(VOLUME_STREAM_SEQUENCE), "VolumeStreamSequence", "Volume Stream Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RGBA_TRANSFER_FUNCTION_DESCRIPTION), "RGBATransferFunctionDescription", "RGBA Transfer Function Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ADVANCED_BLENDING_SEQUENCE), "AdvancedBlendingSequence", "Advanced Blending Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BLENDING_INPUT_NUMBER), "BlendingInputNumber", "Blending Input Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(BLENDING_DISPLAY_INPUT_SEQUENCE), "BlendingDisplayInputSequence", "Blending Display Input Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BLENDING_DISPLAY_SEQUENCE), "BlendingDisplaySequence", "Blending Display Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BLENDING_MODE), "BlendingMode", "Blending Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TIME_SERIES_BLENDING), "TimeSeriesBlending", "Time Series Blending", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GEOMETRY_FOR_DISPLAY), "GeometryForDisplay", "Geometry for Display", Exact(CS), Vm::Exact(1), false),
    E::new(Single(THRESHOLD_SEQUENCE), "ThresholdSequence", "Threshold Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(THRESHOLD_VALUE_SEQUENCE), "ThresholdValueSequence", "Threshold Value Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(THRESHOLD_TYPE), "ThresholdType", "Threshold Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(THRESHOLD_VALUE), "ThresholdValue", "Threshold Value", Exact(FD), Vm::Exact(1), false),
    E::new(Single(HANGING_PROTOCOL_NAME), "HangingProtocolName", "Hanging Protocol Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(HANGING_PROTOCOL_DESCRIPTION), "HangingProtocolDescription", "Hanging Protocol Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(HANGING_PROTOCOL_LEVEL), "HangingProtocolLevel", "Hanging Protocol Level", Exact(CS), Vm::Exact(1), false),
    E::new(Single(HANGING_PROTOCOL_CREATOR), "HangingProtocolCreator", "Hanging Protocol Creator", Exact(LO), Vm::Exact(1), false),
    E::new(Single(HANGING_PROTOCOL_CREATION_DATE_TIME), "HangingProtocolCreationDateTime", "Hanging Protocol Creation DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(HANGING_PROTOCOL_DEFINITION_SEQUENCE), "HangingProtocolDefinitionSequence", "Hanging Protocol Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(HANGING_PROTOCOL_USER_IDENTIFICATION_CODE_SEQUENCE), "HangingProtocolUserIdentificationCodeSequence", "Hanging Protocol User Identification Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(HANGING_PROTOCOL_USER_GROUP_NAME), "HangingProtocolUserGroupName", "Hanging Protocol User Group Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SOURCE_HANGING_PROTOCOL_SEQUENCE), "SourceHangingProtocolSequence", "Source Hanging Protocol Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_PRIORS_REFERENCED), "NumberOfPriorsReferenced", "Number of Priors Referenced", Exact(US), Vm::Exact(1), false),
    E::new(Single(IMAGE_SETS_SEQUENCE), "ImageSetsSequence", "Image Sets Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_SET_SELECTOR_SEQUENCE), "ImageSetSelectorSequence", "Image Set Selector Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_SET_SELECTOR_USAGE_FLAG), "ImageSetSelectorUsageFlag", "Image Set Selector Usage Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SELECTOR_ATTRIBUTE), "SelectorAttribute", "Selector Attribute", Exact(AT), Vm::Exact(1), false),
    E::new(Single(SELECTOR_VALUE_NUMBER), "SelectorValueNumber", "Selector Value Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(TIME_BASED_IMAGE_SETS_SEQUENCE), "TimeBasedImageSetsSequence", "Time Based Image Sets Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_SET_NUMBER), "ImageSetNumber", "Image Set Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(IMAGE_SET_SELECTOR_CATEGORY), "ImageSetSelectorCategory", "Image Set Selector Category", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RELATIVE_TIME), "RelativeTime", "Relative Time", Exact(US), Vm::Exact(2), false),
    E::new(Single(RELATIVE_TIME_UNITS), "RelativeTimeUnits", "Relative Time Units", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ABSTRACT_PRIOR_VALUE), "AbstractPriorValue", "Abstract Prior Value", Exact(SS), Vm::Exact(2), false),
    E::new(Single(ABSTRACT_PRIOR_CODE_SEQUENCE), "AbstractPriorCodeSequence", "Abstract Prior Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_SET_LABEL), "ImageSetLabel", "Image Set Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SELECTOR_ATTRIBUTE_VR), "SelectorAttributeVR", "Selector Attribute VR", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SELECTOR_SEQUENCE_POINTER), "SelectorSequencePointer", "Selector Sequence Pointer", Exact(AT), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_SEQUENCE_POINTER_PRIVATE_CREATOR), "SelectorSequencePointerPrivateCreator", "Selector Sequence Pointer Private Creator", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_ATTRIBUTE_PRIVATE_CREATOR), "SelectorAttributePrivateCreator", "Selector Attribute Private Creator", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SELECTOR_AE_VALUE), "SelectorAEValue", "Selector AE Value", Exact(AE), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_AS_VALUE), "SelectorASValue", "Selector AS Value", Exact(AS), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_AT_VALUE), "SelectorATValue", "Selector AT Value", Exact(AT), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_DA_VALUE), "SelectorDAValue", "Selector DA Value", Exact(DA), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_CS_VALUE), "SelectorCSValue", "Selector CS Value", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_DT_VALUE), "SelectorDTValue", "Selector DT Value", Exact(DT), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_IS_VALUE), "SelectorISValue", "Selector IS Value", Exact(IS), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_OB_VALUE), "SelectorOBValue", "Selector OB Value", Exact(OB), Vm::Exact(1), false),
    E::new(Single(SELECTOR_LO_VALUE), "SelectorLOValue", "Selector LO Value", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_OF_VALUE), "SelectorOFValue", "Selector OF Value", Exact(OF), Vm::Exact(1), false),
    E::new(Single(SELECTOR_LT_VALUE), "SelectorLTValue", "Selector LT Value", Exact(LT), Vm::Exact(1), false),
    E::new(Single(SELECTOR_OW_VALUE), "SelectorOWValue", "Selector OW Value", Exact(OW), Vm::Exact(1), false),
    E::new(Single(SELECTOR_PN_VALUE), "SelectorPNValue", "Selector PN Value", Exact(PN), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_TM_VALUE), "SelectorTMValue", "Selector TM Value", Exact(TM), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_SH_VALUE), "SelectorSHValue", "Selector SH Value", Exact(SH), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_UN_VALUE), "SelectorUNValue", "Selector UN Value", Exact(UN), Vm::Exact(1), false),
    E::new(Single(SELECTOR_ST_VALUE), "SelectorSTValue", "Selector ST Value", Exact(ST), Vm::Exact(1), false),
    E::new(Single(SELECTOR_UC_VALUE), "SelectorUCValue", "Selector UC Value", Exact(UC), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_UT_VALUE), "SelectorUTValue", "Selector UT Value", Exact(UT), Vm::Exact(1), false),
    E::new(Single(SELECTOR_UR_VALUE), "SelectorURValue", "Selector UR Value", Exact(UR), Vm::Exact(1), false),
    E::new(Single(SELECTOR_DS_VALUE), "SelectorDSValue", "Selector DS Value", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_OD_VALUE), "SelectorODValue", "Selector OD Value", Exact(OD), Vm::Exact(1), false),
    E::new(Single(SELECTOR_FD_VALUE), "SelectorFDValue", "Selector FD Value", Exact(FD), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_OL_VALUE), "SelectorOLValue", "Selector OL Value", Exact(OL), Vm::Exact(1), false),
    E::new(Single(SELECTOR_FL_VALUE), "SelectorFLValue", "Selector FL Value", Exact(FL), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_UL_VALUE), "SelectorULValue", "Selector UL Value", Exact(UL), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_US_VALUE), "SelectorUSValue", "Selector US Value", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_SL_VALUE), "SelectorSLValue", "Selector SL Value", Exact(SL), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_SS_VALUE), "SelectorSSValue", "Selector SS Value", Exact(SS), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_UI_VALUE), "SelectorUIValue", "Selector UI Value", Exact(UI), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_CODE_SEQUENCE_VALUE), "SelectorCodeSequenceValue", "Selector Code Sequence Value", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SELECTOR_OV_VALUE), "SelectorOVValue", "Selector OV Value", Exact(OV), Vm::Exact(1), false),
    E::new(Single(SELECTOR_SV_VALUE), "SelectorSVValue", "Selector SV Value", Exact(SV), Vm::AtLeast(1), false),
    E::new(Single(SELECTOR_UV_VALUE), "SelectorUVValue", "Selector UV Value", Exact(UV), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_SCREENS), "NumberOfScreens", "Number of Screens", Exact(US), Vm::Exact(1), false),
    E::new(Single(NOMINAL_SCREEN_DEFINITION_SEQUENCE), "NominalScreenDefinitionSequence", "Nominal Screen Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_VERTICAL_PIXELS), "NumberOfVerticalPixels", "Number of Vertical Pixels", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_HORIZONTAL_PIXELS), "NumberOfHorizontalPixels", "Number of Horizontal Pixels", Exact(US), Vm::Exact(1), false),
    E::new(Single(DISPLAY_ENVIRONMENT_SPATIAL_POSITION), "DisplayEnvironmentSpatialPosition", "Display Environment Spatial Position", Exact(FD), Vm::Exact(4), false),
    E::new(Single(SCREEN_MINIMUM_GRAYSCALE_BIT_DEPTH), "ScreenMinimumGrayscaleBitDepth", "Screen Minimum Grayscale Bit Depth", Exact(US), Vm::Exact(1), false),
    E::new(Single(SCREEN_MINIMUM_COLOR_BIT_DEPTH), "ScreenMinimumColorBitDepth", "Screen Minimum Color Bit Depth", Exact(US), Vm::Exact(1), false),
    E::new(Single(APPLICATION_MAXIMUM_REPAINT_TIME), "ApplicationMaximumRepaintTime", "Application Maximum Repaint Time", Exact(US), Vm::Exact(1), false),
    E::new(Single(DISPLAY_SETS_SEQUENCE), "DisplaySetsSequence", "Display Sets Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DISPLAY_SET_NUMBER), "DisplaySetNumber", "Display Set Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(DISPLAY_SET_LABEL), "DisplaySetLabel", "Display Set Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(DISPLAY_SET_PRESENTATION_GROUP), "DisplaySetPresentationGroup", "Display Set Presentation Group", Exact(US), Vm::Exact(1), false),
    E::new(Single(DISPLAY_SET_PRESENTATION_GROUP_DESCRIPTION), "DisplaySetPresentationGroupDescription", "Display Set Presentation Group Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PARTIAL_DATA_DISPLAY_HANDLING), "PartialDataDisplayHandling", "Partial Data Display Handling", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SYNCHRONIZED_SCROLLING_SEQUENCE), "SynchronizedScrollingSequence", "Synchronized Scrolling Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DISPLAY_SET_SCROLLING_GROUP), "DisplaySetScrollingGroup", "Display Set Scrolling Group", Exact(US), Vm::AtLeast(2), false),
    E::new(Single(NAVIGATION_INDICATOR_SEQUENCE), "NavigationIndicatorSequence", "Navigation Indicator Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NAVIGATION_DISPLAY_SET), "NavigationDisplaySet", "Navigation Display Set", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCE_DISPLAY_SETS), "ReferenceDisplaySets", "Reference Display Sets", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(IMAGE_BOXES_SEQUENCE), "ImageBoxesSequence", "Image Boxes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_BOX_NUMBER), "ImageBoxNumber", "Image Box Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(IMAGE_BOX_LAYOUT_TYPE), "ImageBoxLayoutType", "Image Box Layout Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IMAGE_BOX_TILE_HORIZONTAL_DIMENSION), "ImageBoxTileHorizontalDimension", "Image Box Tile Horizontal Dimension", Exact(US), Vm::Exact(1), false),
    E::new(Single(IMAGE_BOX_TILE_VERTICAL_DIMENSION), "ImageBoxTileVerticalDimension", "Image Box Tile Vertical Dimension", Exact(US), Vm::Exact(1), false),
    E::new(Single(IMAGE_BOX_SCROLL_DIRECTION), "ImageBoxScrollDirection", "Image Box Scroll Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IMAGE_BOX_SMALL_SCROLL_TYPE), "ImageBoxSmallScrollType", "Image Box Small Scroll Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IMAGE_BOX_SMALL_SCROLL_AMOUNT), "ImageBoxSmallScrollAmount", "Image Box Small Scroll Amount", Exact(US), Vm::Exact(1), false),
    E::new(Single(IMAGE_BOX_LARGE_SCROLL_TYPE), "ImageBoxLargeScrollType", "Image Box Large Scroll Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IMAGE_BOX_LARGE_SCROLL_AMOUNT), "ImageBoxLargeScrollAmount", "Image Box Large Scroll Amount", Exact(US), Vm::Exact(1), false),
    E::new(Single(IMAGE_BOX_OVERLAP_PRIORITY), "ImageBoxOverlapPriority", "Image Box Overlap Priority", Exact(US), Vm::Exact(1), false),
    E::new(Single(CINE_RELATIVE_TO_REAL_TIME), "CineRelativeToRealTime", "Cine Relative to Real-Time", Exact(FD), Vm::Exact(1), false),
    E::new(Single(FILTER_OPERATIONS_SEQUENCE), "FilterOperationsSequence", "Filter Operations Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FILTER_BY_CATEGORY), "FilterByCategory", "Filter-by Category", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FILTER_BY_ATTRIBUTE_PRESENCE), "FilterByAttributePresence", "Filter-by Attribute Presence", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FILTER_BY_OPERATOR), "FilterByOperator", "Filter-by Operator", Exact(CS), Vm::Exact(1), false),
    E::new(Single(STRUCTURED_DISPLAY_BACKGROUND_CIE_LAB_VALUE), "StructuredDisplayBackgroundCIELabValue", "Structured Display Background CIELab Value", Exact(US), Vm::Exact(3), false),
    E::new(Single(EMPTY_IMAGE_BOX_CIE_LAB_VALUE), "EmptyImageBoxCIELabValue", "Empty Image Box CIELab Value", Exact(US), Vm::Exact(3), false),
    E::new(Single(STRUCTURED_DISPLAY_IMAGE_BOX_SEQUENCE), "StructuredDisplayImageBoxSequence", "Structured Display Image Box Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(STRUCTURED_DISPLAY_TEXT_BOX_SEQUENCE), "StructuredDisplayTextBoxSequence", "Structured Display Text Box Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_FIRST_FRAME_SEQUENCE), "ReferencedFirstFrameSequence", "Referenced First Frame Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_BOX_SYNCHRONIZATION_SEQUENCE), "ImageBoxSynchronizationSequence", "Image Box Synchronization Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SYNCHRONIZED_IMAGE_BOX_LIST), "SynchronizedImageBoxList", "Synchronized Image Box List", Exact(US), Vm::AtLeast(2), false),
    E::new(Single(TYPE_OF_SYNCHRONIZATION), "TypeOfSynchronization", "Type of Synchronization", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BLENDING_OPERATION_TYPE), "BlendingOperationType", "Blending Operation Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REFORMATTING_OPERATION_TYPE), "ReformattingOperationType", "Reformatting Operation Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REFORMATTING_THICKNESS), "ReformattingThickness", "Reformatting Thickness", Exact(FD), Vm::Exact(1), false),
    E::new(Single(REFORMATTING_INTERVAL), "ReformattingInterval", "Reformatting Interval", Exact(FD), Vm::Exact(1), false),
    E::new(Single(REFORMATTING_OPERATION_INITIAL_VIEW_DIRECTION), "ReformattingOperationInitialViewDirection", "Reformatting Operation Initial View Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(THREE_D_RENDERING_TYPE), "ThreeDRenderingType", "3D Rendering Type", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(SORTING_OPERATIONS_SEQUENCE), "SortingOperationsSequence", "Sorting Operations Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SORT_BY_CATEGORY), "SortByCategory", "Sort-by Category", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SORTING_DIRECTION), "SortingDirection", "Sorting Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DISPLAY_SET_PATIENT_ORIENTATION), "DisplaySetPatientOrientation", "Display Set Patient Orientation", Exact(CS), Vm::Exact(2), false),
    E::new(Single(VOI_TYPE), "VOIType", "VOI Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PSEUDO_COLOR_TYPE), "PseudoColorType", "Pseudo-Color Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PSEUDO_COLOR_PALETTE_INSTANCE_REFERENCE_SEQUENCE), "PseudoColorPaletteInstanceReferenceSequence", "Pseudo-Color Palette Instance Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SHOW_GRAYSCALE_INVERTED), "ShowGrayscaleInverted", "Show Grayscale Inverted", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SHOW_IMAGE_TRUE_SIZE_FLAG), "ShowImageTrueSizeFlag", "Show Image True Size Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SHOW_GRAPHIC_ANNOTATION_FLAG), "ShowGraphicAnnotationFlag", "Show Graphic Annotation Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SHOW_PATIENT_DEMOGRAPHICS_FLAG), "ShowPatientDemographicsFlag", "Show Patient Demographics Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SHOW_ACQUISITION_TECHNIQUES_FLAG), "ShowAcquisitionTechniquesFlag", "Show Acquisition Techniques Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DISPLAY_SET_HORIZONTAL_JUSTIFICATION), "DisplaySetHorizontalJustification", "Display Set Horizontal Justification", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DISPLAY_SET_VERTICAL_JUSTIFICATION), "DisplaySetVerticalJustification", "Display Set Vertical Justification", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONTINUATION_START_METERSET), "ContinuationStartMeterset", "Continuation Start Meterset", Exact(FD), Vm::Exact(1), false),
    E::new(Single(CONTINUATION_END_METERSET), "ContinuationEndMeterset", "Continuation End Meterset", Exact(FD), Vm::Exact(1), false),
    E::new(Single(PROCEDURE_STEP_STATE), "ProcedureStepState", "Procedure Step State", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PROCEDURE_STEP_PROGRESS_INFORMATION_SEQUENCE), "ProcedureStepProgressInformationSequence", "Procedure Step Progress Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PROCEDURE_STEP_PROGRESS), "ProcedureStepProgress", "Procedure Step Progress", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PROCEDURE_STEP_PROGRESS_DESCRIPTION), "ProcedureStepProgressDescription", "Procedure Step Progress Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(PROCEDURE_STEP_PROGRESS_PARAMETERS_SEQUENCE), "ProcedureStepProgressParametersSequence", "Procedure Step Progress Parameters Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PROCEDURE_STEP_COMMUNICATIONS_URI_SEQUENCE), "ProcedureStepCommunicationsURISequence", "Procedure Step Communications URI Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTACT_URI), "ContactURI", "Contact URI", Exact(UR), Vm::Exact(1), false),
    E::new(Single(CONTACT_DISPLAY_NAME), "ContactDisplayName", "Contact Display Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PROCEDURE_STEP_DISCONTINUATION_REASON_CODE_SEQUENCE), "ProcedureStepDiscontinuationReasonCodeSequence", "Procedure Step Discontinuation Reason Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BEAM_TASK_SEQUENCE), "BeamTaskSequence", "Beam Task Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BEAM_TASK_TYPE), "BeamTaskType", "Beam Task Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BEAM_ORDER_INDEX_TRIAL), "BeamOrderIndexTrial", "Beam Order Index (Trial)", Exact(IS), Vm::Exact(1), true),
    E::new(Single(AUTOSEQUENCE_FLAG), "AutosequenceFlag", "Autosequence Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_VERTICAL_ADJUSTED_POSITION), "TableTopVerticalAdjustedPosition", "Table Top Vertical Adjusted Position", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_LONGITUDINAL_ADJUSTED_POSITION), "TableTopLongitudinalAdjustedPosition", "Table Top Longitudinal Adjusted Position", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_LATERAL_ADJUSTED_POSITION), "TableTopLateralAdjustedPosition", "Table Top Lateral Adjusted Position", Exact(FD), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_ADJUSTED_ANGLE), "PatientSupportAdjustedAngle", "Patient Support Adjusted Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_ECCENTRIC_ADJUSTED_ANGLE), "TableTopEccentricAdjustedAngle", "Table Top Eccentric Adjusted Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_PITCH_ADJUSTED_ANGLE), "TableTopPitchAdjustedAngle", "Table Top Pitch Adjusted Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_ROLL_ADJUSTED_ANGLE), "TableTopRollAdjustedAngle", "Table Top Roll Adjusted Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DELIVERY_VERIFICATION_IMAGE_SEQUENCE), "DeliveryVerificationImageSequence", "Delivery Verification Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(VERIFICATION_IMAGE_TIMING), "VerificationImageTiming", "Verification Image Timing", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DOUBLE_EXPOSURE_FLAG), "DoubleExposureFlag", "Double Exposure Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DOUBLE_EXPOSURE_ORDERING), "DoubleExposureOrdering", "Double Exposure Ordering", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DOUBLE_EXPOSURE_METERSET_TRIAL), "DoubleExposureMetersetTrial", "Double Exposure Meterset (Trial)", Exact(DS), Vm::Exact(1), true),
    E::new(Single(DOUBLE_EXPOSURE_FIELD_DELTA_TRIAL), "DoubleExposureFieldDeltaTrial", "Double Exposure Field Delta (Trial)", Exact(DS), Vm::Exact(4), true),
    E::new(Single(RELATED_REFERENCE_RT_IMAGE_SEQUENCE), "RelatedReferenceRTImageSequence", "Related Reference RT Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GENERAL_MACHINE_VERIFICATION_SEQUENCE), "GeneralMachineVerificationSequence", "General Machine Verification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONVENTIONAL_MACHINE_VERIFICATION_SEQUENCE), "ConventionalMachineVerificationSequence", "Conventional Machine Verification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ION_MACHINE_VERIFICATION_SEQUENCE), "IonMachineVerificationSequence", "Ion Machine Verification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FAILED_ATTRIBUTES_SEQUENCE), "FailedAttributesSequence", "Failed Attributes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OVERRIDDEN_ATTRIBUTES_SEQUENCE), "OverriddenAttributesSequence", "Overridden Attributes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONVENTIONAL_CONTROL_POINT_VERIFICATION_SEQUENCE), "ConventionalControlPointVerificationSequence", "Conventional Control Point Verification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ION_CONTROL_POINT_VERIFICATION_SEQUENCE), "IonControlPointVerificationSequence", "Ion Control Point Verification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ATTRIBUTE_OCCURRENCE_SEQUENCE), "AttributeOccurrenceSequence", "Attribute Occurrence Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ATTRIBUTE_OCCURRENCE_POINTER), "AttributeOccurrencePointer", "Attribute Occurrence Pointer", Exact(AT), Vm::Exact(1), false),
    E::new(Single(ATTRIBUTE_ITEM_SELECTOR), "AttributeItemSelector", "Attribute Item Selector", Exact(UL), Vm::Exact(1), false),
    E::new(Single(ATTRIBUTE_OCCURRENCE_PRIVATE_CREATOR), "AttributeOccurrencePrivateCreator", "Attribute Occurrence Private Creator", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SELECTOR_SEQUENCE_POINTER_ITEMS), "SelectorSequencePointerItems", "Selector Sequence Pointer Items", Exact(IS), Vm::AtLeast(1), false),
    E::new(Single(SCHEDULED_PROCEDURE_STEP_PRIORITY), "ScheduledProcedureStepPriority", "Scheduled Procedure Step Priority", Exact(CS), Vm::Exact(1), false),
    E::new(Single(WORKLIST_LABEL), "WorklistLabel", "Worklist Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PROCEDURE_STEP_LABEL), "ProcedureStepLabel", "Procedure Step Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SCHEDULED_PROCESSING_PARAMETERS_SEQUENCE), "ScheduledProcessingParametersSequence", "Scheduled Processing Parameters Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PERFORMED_PROCESSING_PARAMETERS_SEQUENCE), "PerformedProcessingParametersSequence", "Performed Processing Parameters Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(UNIFIED_PROCEDURE_STEP_PERFORMED_PROCEDURE_SEQUENCE), "UnifiedProcedureStepPerformedProcedureSequence", "Unified Procedure Step Performed Procedure Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RELATED_PROCEDURE_STEP_SEQUENCE), "RelatedProcedureStepSequence", "Related Procedure Step Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(PROCEDURE_STEP_RELATIONSHIP_TYPE), "ProcedureStepRelationshipType", "Procedure Step Relationship Type", Exact(LO), Vm::Exact(1), true),
    E::new(Single(REPLACED_PROCEDURE_STEP_SEQUENCE), "ReplacedProcedureStepSequence", "Replaced Procedure Step Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DELETION_LOCK), "DeletionLock", "Deletion Lock", Exact(LO), Vm::Exact(1), false),
    E::new(Single(RECEIVING_AE), "ReceivingAE", "Receiving AE", Exact(AE), Vm::Exact(1), false),
    E::new(Single(REQUESTING_AE), "RequestingAE", "Requesting AE", Exact(AE), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_CANCELLATION), "ReasonForCancellation", "Reason for Cancellation", Exact(LT), Vm::Exact(1), false),
    E::new(Single(SCP_STATUS), "SCPStatus", "SCP Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SUBSCRIPTION_LIST_STATUS), "SubscriptionListStatus", "Subscription List Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(UNIFIED_PROCEDURE_STEP_LIST_STATUS), "UnifiedProcedureStepListStatus", "Unified Procedure Step List Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BEAM_ORDER_INDEX), "BeamOrderIndex", "Beam Order Index", Exact(UL), Vm::Exact(1), false),
    E::new(Single(DOUBLE_EXPOSURE_METERSET), "DoubleExposureMeterset", "Double Exposure Meterset", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DOUBLE_EXPOSURE_FIELD_DELTA), "DoubleExposureFieldDelta", "Double Exposure Field Delta", Exact(FD), Vm::Exact(4), false),
    E::new(Single(BRACHY_TASK_SEQUENCE), "BrachyTaskSequence", "Brachy Task Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTINUATION_START_TOTAL_REFERENCE_AIR_KERMA), "ContinuationStartTotalReferenceAirKerma", "Continuation Start Total Reference Air Kerma", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CONTINUATION_END_TOTAL_REFERENCE_AIR_KERMA), "ContinuationEndTotalReferenceAirKerma", "Continuation End Total Reference Air Kerma", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CONTINUATION_PULSE_NUMBER), "ContinuationPulseNumber", "Continuation Pulse Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_DELIVERY_ORDER_SEQUENCE), "ChannelDeliveryOrderSequence", "Channel Delivery Order Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_CHANNEL_NUMBER), "ReferencedChannelNumber", "Referenced Channel Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(START_CUMULATIVE_TIME_WEIGHT), "StartCumulativeTimeWeight", "Start Cumulative Time Weight", Exact(DS), Vm::Exact(1), false),
    E::new(Single(END_CUMULATIVE_TIME_WEIGHT), "EndCumulativeTimeWeight", "End Cumulative Time Weight", Exact(DS), Vm::Exact(1), false),
    E::new(Single(OMITTED_CHANNEL_SEQUENCE), "OmittedChannelSequence", "Omitted Channel Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_CHANNEL_OMISSION), "ReasonForChannelOmission", "Reason for Channel Omission", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_CHANNEL_OMISSION_DESCRIPTION), "ReasonForChannelOmissionDescription", "Reason for Channel Omission Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CHANNEL_DELIVERY_ORDER_INDEX), "ChannelDeliveryOrderIndex", "Channel Delivery Order Index", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_DELIVERY_CONTINUATION_SEQUENCE), "ChannelDeliveryContinuationSequence", "Channel Delivery Continuation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OMITTED_APPLICATION_SETUP_SEQUENCE), "OmittedApplicationSetupSequence", "Omitted Application Setup Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMPLANT_ASSEMBLY_TEMPLATE_NAME), "ImplantAssemblyTemplateName", "Implant Assembly Template Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(IMPLANT_ASSEMBLY_TEMPLATE_ISSUER), "ImplantAssemblyTemplateIssuer", "Implant Assembly Template Issuer", Exact(LO), Vm::Exact(1), false),
    E::new(Single(IMPLANT_ASSEMBLY_TEMPLATE_VERSION), "ImplantAssemblyTemplateVersion", "Implant Assembly Template Version", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REPLACED_IMPLANT_ASSEMBLY_TEMPLATE_SEQUENCE), "ReplacedImplantAssemblyTemplateSequence", "Replaced Implant Assembly Template Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMPLANT_ASSEMBLY_TEMPLATE_TYPE), "ImplantAssemblyTemplateType", "Implant Assembly Template Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ORIGINAL_IMPLANT_ASSEMBLY_TEMPLATE_SEQUENCE), "OriginalImplantAssemblyTemplateSequence", "Original Implant Assembly Template Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DERIVATION_IMPLANT_ASSEMBLY_TEMPLATE_SEQUENCE), "DerivationImplantAssemblyTemplateSequence", "Derivation Implant Assembly Template Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMPLANT_ASSEMBLY_TEMPLATE_TARGET_ANATOMY_SEQUENCE), "ImplantAssemblyTemplateTargetAnatomySequence", "Implant Assembly Template Target Anatomy Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PROCEDURE_TYPE_CODE_SEQUENCE), "ProcedureTypeCodeSequence", "Procedure Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SURGICAL_TECHNIQUE), "SurgicalTechnique", "Surgical Technique", Exact(LO), Vm::Exact(1), false),
    E::new(Single(COMPONENT_TYPES_SEQUENCE), "ComponentTypesSequence", "Component Types Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMPONENT_TYPE_CODE_SEQUENCE), "ComponentTypeCodeSequence", "Component Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(EXCLUSIVE_COMPONENT_TYPE), "ExclusiveComponentType", "Exclusive Component Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MANDATORY_COMPONENT_TYPE), "MandatoryComponentType", "Mandatory Component Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(COMPONENT_SEQUENCE), "ComponentSequence", "Component Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMPONENT_ID), "ComponentID", "Component ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(COMPONENT_ASSEMBLY_SEQUENCE), "ComponentAssemblySequence", "Component Assembly Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMPONENT1REFERENCED_ID), "Component1ReferencedID", "Component 1 Referenced ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(COMPONENT1REFERENCED_MATING_FEATURE_SET_ID), "Component1ReferencedMatingFeatureSetID", "Component 1 Referenced Mating Feature Set ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(COMPONENT1REFERENCED_MATING_FEATURE_ID), "Component1ReferencedMatingFeatureID", "Component 1 Referenced Mating Feature ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(COMPONENT2REFERENCED_ID), "Component2ReferencedID", "Component 2 Referenced ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(COMPONENT2REFERENCED_MATING_FEATURE_SET_ID), "Component2ReferencedMatingFeatureSetID", "Component 2 Referenced Mating Feature Set ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(COMPONENT2REFERENCED_MATING_FEATURE_ID), "Component2ReferencedMatingFeatureID", "Component 2 Referenced Mating Feature ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(IMPLANT_TEMPLATE_GROUP_NAME), "ImplantTemplateGroupName", "Implant Template Group Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(IMPLANT_TEMPLATE_GROUP_DESCRIPTION), "ImplantTemplateGroupDescription", "Implant Template Group Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(IMPLANT_TEMPLATE_GROUP_ISSUER), "ImplantTemplateGroupIssuer", "Implant Template Group Issuer", Exact(LO), Vm::Exact(1), false),
    E::new(Single(IMPLANT_TEMPLATE_GROUP_VERSION), "ImplantTemplateGroupVersion", "Implant Template Group Version", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REPLACED_IMPLANT_TEMPLATE_GROUP_SEQUENCE), "ReplacedImplantTemplateGroupSequence", "Replaced Implant Template Group Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMPLANT_TEMPLATE_GROUP_TARGET_ANATOMY_SEQUENCE), "ImplantTemplateGroupTargetAnatomySequence", "Implant Template Group Target Anatomy Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMPLANT_TEMPLATE_GROUP_MEMBERS_SEQUENCE), "ImplantTemplateGroupMembersSequence", "Implant Template Group Members Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMPLANT_TEMPLATE_GROUP_MEMBER_ID), "ImplantTemplateGroupMemberID", "Implant Template Group Member ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(THREE_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_POINT), "ThreeDImplantTemplateGroupMemberMatchingPoint", "3D Implant Template Group Member Matching Point", Exact(FD), Vm::Exact(3), false),
    E::new(Single(THREE_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_AXES), "ThreeDImplantTemplateGroupMemberMatchingAxes", "3D Implant Template Group Member Matching Axes", Exact(FD), Vm::Exact(9), false),
    E::new(Single(IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING2D_COORDINATES_SEQUENCE), "ImplantTemplateGroupMemberMatching2DCoordinatesSequence", "Implant Template Group Member Matching 2D Coordinates Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TWO_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_POINT), "TwoDImplantTemplateGroupMemberMatchingPoint", "2D Implant Template Group Member Matching Point", Exact(FD), Vm::Exact(2), false),
    E::new(Single(TWO_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_AXES), "TwoDImplantTemplateGroupMemberMatchingAxes", "2D Implant Template Group Member Matching Axes", Exact(FD), Vm::Exact(4), false),
    E::new(Single(IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_SEQUENCE), "ImplantTemplateGroupVariationDimensionSequence", "Implant Template Group Variation Dimension Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_NAME), "ImplantTemplateGroupVariationDimensionName", "Implant Template Group Variation Dimension Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_RANK_SEQUENCE), "ImplantTemplateGroupVariationDimensionRankSequence", "Implant Template Group Variation Dimension Rank Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_IMPLANT_TEMPLATE_GROUP_MEMBER_ID), "ReferencedImplantTemplateGroupMemberID", "Referenced Implant Template Group Member ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_RANK), "ImplantTemplateGroupVariationDimensionRank", "Implant Template Group Variation Dimension Rank", Exact(US), Vm::Exact(1), false),
    E::new(Single(SURFACE_SCAN_ACQUISITION_TYPE_CODE_SEQUENCE), "SurfaceScanAcquisitionTypeCodeSequence", "Surface Scan Acquisition Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SURFACE_SCAN_MODE_CODE_SEQUENCE), "SurfaceScanModeCodeSequence", "Surface Scan Mode Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REGISTRATION_METHOD_CODE_SEQUENCE), "RegistrationMethodCodeSequence", "Registration Method Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SHOT_DURATION_TIME), "ShotDurationTime", "Shot Duration Time", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SHOT_OFFSET_TIME), "ShotOffsetTime", "Shot Offset Time", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SURFACE_POINT_PRESENTATION_VALUE_DATA), "SurfacePointPresentationValueData", "Surface Point Presentation Value Data", Exact(US), Vm::AtLeast(1), false),
    E::new(Single(SURFACE_POINT_COLOR_CIE_LAB_VALUE_DATA), "SurfacePointColorCIELabValueData", "Surface Point Color CIELab Value Data", Exact(US), Vm::MultipleOf(3), false),
    E::new(Single(UV_MAPPING_SEQUENCE), "UVMappingSequence", "UV Mapping Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TEXTURE_LABEL), "TextureLabel", "Texture Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(U_VALUE_DATA), "UValueData", "U Value Data", Exact(OF), Vm::Exact(1), false),
    E::new(Single(V_VALUE_DATA), "VValueData", "V Value Data", Exact(OF), Vm::Exact(1), false),
    E::new(Single(REFERENCED_TEXTURE_SEQUENCE), "ReferencedTextureSequence", "Referenced Texture Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SURFACE_DATA_SEQUENCE), "ReferencedSurfaceDataSequence", "Referenced Surface Data Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ASSESSMENT_SUMMARY), "AssessmentSummary", "Assessment Summary", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ASSESSMENT_SUMMARY_DESCRIPTION), "AssessmentSummaryDescription", "Assessment Summary Description", Exact(UT), Vm::Exact(1), false),
    E::new(Single(ASSESSED_SOP_INSTANCE_SEQUENCE), "AssessedSOPInstanceSequence", "Assessed SOP Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_COMPARISON_SOP_INSTANCE_SEQUENCE), "ReferencedComparisonSOPInstanceSequence", "Referenced Comparison SOP Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_ASSESSMENT_OBSERVATIONS), "NumberOfAssessmentObservations", "Number of Assessment Observations", Exact(UL), Vm::Exact(1), false),
    E::new(Single(ASSESSMENT_OBSERVATIONS_SEQUENCE), "AssessmentObservationsSequence", "Assessment Observations Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OBSERVATION_SIGNIFICANCE), "ObservationSignificance", "Observation Significance", Exact(CS), Vm::Exact(1), false),
    E::new(Single(OBSERVATION_DESCRIPTION), "ObservationDescription", "Observation Description", Exact(UT), Vm::Exact(1), false),
    E::new(Single(STRUCTURED_CONSTRAINT_OBSERVATION_SEQUENCE), "StructuredConstraintObservationSequence", "Structured Constraint Observation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ASSESSED_ATTRIBUTE_VALUE_SEQUENCE), "AssessedAttributeValueSequence", "Assessed Attribute Value Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ASSESSMENT_SET_ID), "AssessmentSetID", "Assessment Set ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ASSESSMENT_REQUESTER_SEQUENCE), "AssessmentRequesterSequence", "Assessment Requester Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SELECTOR_ATTRIBUTE_NAME), "SelectorAttributeName", "Selector Attribute Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SELECTOR_ATTRIBUTE_KEYWORD), "SelectorAttributeKeyword", "Selector Attribute Keyword", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ASSESSMENT_TYPE_CODE_SEQUENCE), "AssessmentTypeCodeSequence", "Assessment Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OBSERVATION_BASIS_CODE_SEQUENCE), "ObservationBasisCodeSequence", "Observation Basis Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ASSESSMENT_LABEL), "AssessmentLabel", "Assessment Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CONSTRAINT_TYPE), "ConstraintType", "Constraint Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SPECIFICATION_SELECTION_GUIDANCE), "SpecificationSelectionGuidance", "Specification Selection Guidance", Exact(UT), Vm::Exact(1), false),
    E::new(Single(CONSTRAINT_VALUE_SEQUENCE), "ConstraintValueSequence", "Constraint Value Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECOMMENDED_DEFAULT_VALUE_SEQUENCE), "RecommendedDefaultValueSequence", "Recommended Default Value Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONSTRAINT_VIOLATION_SIGNIFICANCE), "ConstraintViolationSignificance", "Constraint Violation Significance", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONSTRAINT_VIOLATION_CONDITION), "ConstraintViolationCondition", "Constraint Violation Condition", Exact(UT), Vm::Exact(1), false),
    E::new(Single(MODIFIABLE_CONSTRAINT_FLAG), "ModifiableConstraintFlag", "Modifiable Constraint Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(STORAGE_MEDIA_FILE_SET_ID), "StorageMediaFileSetID", "Storage Media File-set ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(STORAGE_MEDIA_FILE_SET_UID), "StorageMediaFileSetUID", "Storage Media File-set UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(ICON_IMAGE_SEQUENCE), "IconImageSequence", "Icon Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TOPIC_TITLE), "TopicTitle", "Topic Title", Exact(LO), Vm::Exact(1), true),
    E::new(Single(TOPIC_SUBJECT), "TopicSubject", "Topic Subject", Exact(ST), Vm::Exact(1), true),
    E::new(Single(TOPIC_AUTHOR), "TopicAuthor", "Topic Author", Exact(LO), Vm::Exact(1), true),
    E::new(Single(TOPIC_KEYWORDS), "TopicKeywords", "Topic Keywords", Exact(LO), Vm::Bounded(1, 32), true),
    E::new(Single(SOP_INSTANCE_STATUS), "SOPInstanceStatus", "SOP Instance Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SOP_AUTHORIZATION_DATE_TIME), "SOPAuthorizationDateTime", "SOP Authorization DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(SOP_AUTHORIZATION_COMMENT), "SOPAuthorizationComment", "SOP Authorization Comment", Exact(LT), Vm::Exact(1), false),
    E::new(Single(AUTHORIZATION_EQUIPMENT_CERTIFICATION_NUMBER), "AuthorizationEquipmentCertificationNumber", "Authorization Equipment Certification Number", Exact(LO), Vm::Exact(1), false),
    E::new(Single(MACID_NUMBER), "MACIDNumber", "MAC ID Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(MAC_CALCULATION_TRANSFER_SYNTAX_UID), "MACCalculationTransferSyntaxUID", "MAC Calculation Transfer Syntax UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(MAC_ALGORITHM), "MACAlgorithm", "MAC Algorithm", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DATA_ELEMENTS_SIGNED), "DataElementsSigned", "Data Elements Signed", Exact(AT), Vm::AtLeast(1), false),
    E::new(Single(DIGITAL_SIGNATURE_UID), "DigitalSignatureUID", "Digital Signature UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(DIGITAL_SIGNATURE_DATE_TIME), "DigitalSignatureDateTime", "Digital Signature DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(CERTIFICATE_TYPE), "CertificateType", "Certificate Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CERTIFICATE_OF_SIGNER), "CertificateOfSigner", "Certificate of Signer", Exact(OB), Vm::Exact(1), false),
    E::new(Single(SIGNATURE), "Signature", "Signature", Exact(OB), Vm::Exact(1), false),
    E::new(Single(CERTIFIED_TIMESTAMP_TYPE), "CertifiedTimestampType", "Certified Timestamp Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CERTIFIED_TIMESTAMP), "CertifiedTimestamp", "Certified Timestamp", Exact(OB), Vm::Exact(1), false),
    E::new(Single(DIGITAL_SIGNATURE_PURPOSE_CODE_SEQUENCE), "DigitalSignaturePurposeCodeSequence", "Digital Signature Purpose Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_DIGITAL_SIGNATURE_SEQUENCE), "ReferencedDigitalSignatureSequence", "Referenced Digital Signature Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SOP_INSTANCE_MAC_SEQUENCE), "ReferencedSOPInstanceMACSequence", "Referenced SOP Instance MAC Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MAC), "MAC", "MAC", Exact(OB), Vm::Exact(1), false),
    E::new(Single(ENCRYPTED_ATTRIBUTES_SEQUENCE), "EncryptedAttributesSequence", "Encrypted Attributes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ENCRYPTED_CONTENT_TRANSFER_SYNTAX_UID), "EncryptedContentTransferSyntaxUID", "Encrypted Content Transfer Syntax UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(ENCRYPTED_CONTENT), "EncryptedContent", "Encrypted Content", Exact(OB), Vm::Exact(1), false),
    E::new(Single(MODIFIED_ATTRIBUTES_SEQUENCE), "ModifiedAttributesSequence", "Modified Attributes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NONCONFORMING_MODIFIED_ATTRIBUTES_SEQUENCE), "NonconformingModifiedAttributesSequence", "Nonconforming Modified Attributes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NONCONFORMING_DATA_ELEMENT_VALUE), "NonconformingDataElementValue", "Nonconforming Data Element Value", Exact(OB), Vm::Exact(1), false),
    E::new(Single(ORIGINAL_ATTRIBUTES_SEQUENCE), "OriginalAttributesSequence", "Original Attributes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ATTRIBUTE_MODIFICATION_DATE_TIME), "AttributeModificationDateTime", "Attribute Modification DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(MODIFYING_SYSTEM), "ModifyingSystem", "Modifying System", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SOURCE_OF_PREVIOUS_VALUES), "SourceOfPreviousValues", "Source of Previous Values", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_THE_ATTRIBUTE_MODIFICATION), "ReasonForTheAttributeModification", "Reason for the Attribute Modification", Exact(CS), Vm::Exact(1), false),
    E::new(Single(INSTANCE_ORIGIN_STATUS), "InstanceOriginStatus", "Instance Origin Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_COPIES), "NumberOfCopies", "Number of Copies", Exact(IS), Vm::Exact(1), false),
    E::new(Single(PRINTER_CONFIGURATION_SEQUENCE), "PrinterConfigurationSequence", "Printer Configuration Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRINT_PRIORITY), "PrintPriority", "Print Priority", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MEDIUM_TYPE), "MediumType", "Medium Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FILM_DESTINATION), "FilmDestination", "Film Destination", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FILM_SESSION_LABEL), "FilmSessionLabel", "Film Session Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(MEMORY_ALLOCATION), "MemoryAllocation", "Memory Allocation", Exact(IS), Vm::Exact(1), false),
    E::new(Single(MAXIMUM_MEMORY_ALLOCATION), "MaximumMemoryAllocation", "Maximum Memory Allocation", Exact(IS), Vm::Exact(1), false),
    E::new(Single(COLOR_IMAGE_PRINTING_FLAG), "ColorImagePrintingFlag", "Color Image Printing Flag", Exact(CS), Vm::Exact(1), true),
    E::new(Single(COLLATION_FLAG), "CollationFlag", "Collation Flag", Exact(CS), Vm::Exact(1), true),
    E::new(Single(ANNOTATION_FLAG), "AnnotationFlag", "Annotation Flag", Exact(CS), Vm::Exact(1), true),
    E::new(Single(IMAGE_OVERLAY_FLAG), "ImageOverlayFlag", "Image Overlay Flag", Exact(CS), Vm::Exact(1), true),
    E::new(Single(PRESENTATION_LUT_FLAG), "PresentationLUTFlag", "Presentation LUT Flag", Exact(CS), Vm::Exact(1), true),
    E::new(Single(IMAGE_BOX_PRESENTATION_LUT_FLAG), "ImageBoxPresentationLUTFlag", "Image Box Presentation LUT Flag", Exact(CS), Vm::Exact(1), true),
    E::new(Single(MEMORY_BIT_DEPTH), "MemoryBitDepth", "Memory Bit Depth", Exact(US), Vm::Exact(1), false),
    E::new(Single(PRINTING_BIT_DEPTH), "PrintingBitDepth", "Printing Bit Depth", Exact(US), Vm::Exact(1), false),
    E::new(Single(MEDIA_INSTALLED_SEQUENCE), "MediaInstalledSequence", "Media Installed Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OTHER_MEDIA_AVAILABLE_SEQUENCE), "OtherMediaAvailableSequence", "Other Media Available Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SUPPORTED_IMAGE_DISPLAY_FORMATS_SEQUENCE), "SupportedImageDisplayFormatsSequence", "Supported Image Display Formats Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_FILM_BOX_SEQUENCE), "ReferencedFilmBoxSequence", "Referenced Film Box Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_STORED_PRINT_SEQUENCE), "ReferencedStoredPrintSequence", "Referenced Stored Print Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(IMAGE_DISPLAY_FORMAT), "ImageDisplayFormat", "Image Display Format", Exact(ST), Vm::Exact(1), false),
    E::new(Single(ANNOTATION_DISPLAY_FORMAT_ID), "AnnotationDisplayFormatID", "Annotation Display Format ID", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FILM_ORIENTATION), "FilmOrientation", "Film Orientation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FILM_SIZE_ID), "FilmSizeID", "Film Size ID", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRINTER_RESOLUTION_ID), "PrinterResolutionID", "Printer Resolution ID", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DEFAULT_PRINTER_RESOLUTION_ID), "DefaultPrinterResolutionID", "Default Printer Resolution ID", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MAGNIFICATION_TYPE), "MagnificationType", "Magnification Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SMOOTHING_TYPE), "SmoothingType", "Smoothing Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DEFAULT_MAGNIFICATION_TYPE), "DefaultMagnificationType", "Default Magnification Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(OTHER_MAGNIFICATION_TYPES_AVAILABLE), "OtherMagnificationTypesAvailable", "Other Magnification Types Available", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(DEFAULT_SMOOTHING_TYPE), "DefaultSmoothingType", "Default Smoothing Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(OTHER_SMOOTHING_TYPES_AVAILABLE), "OtherSmoothingTypesAvailable", "Other Smoothing Types Available", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(BORDER_DENSITY), "BorderDensity", "Border Density", Exact(CS), Vm::Exact(1), false),
    E::new(Single(EMPTY_IMAGE_DENSITY), "EmptyImageDensity", "Empty Image Density", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MIN_DENSITY), "MinDensity", "Min Density", Exact(US), Vm::Exact(1), false),
    E::new(Single(MAX_DENSITY), "MaxDensity", "Max Density", Exact(US), Vm::Exact(1), false),
    E::new(Single(TRIM), "Trim", "Trim", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONFIGURATION_INFORMATION), "ConfigurationInformation", "Configuration Information", Exact(ST), Vm::Exact(1), false),
    E::new(Single(CONFIGURATION_INFORMATION_DESCRIPTION), "ConfigurationInformationDescription", "Configuration Information Description", Exact(LT), Vm::Exact(1), false),
    E::new(Single(MAXIMUM_COLLATED_FILMS), "MaximumCollatedFilms", "Maximum Collated Films", Exact(IS), Vm::Exact(1), false),
    E::new(Single(ILLUMINATION), "Illumination", "Illumination", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFLECTED_AMBIENT_LIGHT), "ReflectedAmbientLight", "Reflected Ambient Light", Exact(US), Vm::Exact(1), false),
    E::new(Single(PRINTER_PIXEL_SPACING), "PrinterPixelSpacing", "Printer Pixel Spacing", Exact(DS), Vm::Exact(2), false),
    E::new(Single(REFERENCED_FILM_SESSION_SEQUENCE), "ReferencedFilmSessionSequence", "Referenced Film Session Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_IMAGE_BOX_SEQUENCE), "ReferencedImageBoxSequence", "Referenced Image Box Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_BASIC_ANNOTATION_BOX_SEQUENCE), "ReferencedBasicAnnotationBoxSequence", "Referenced Basic Annotation Box Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_BOX_POSITION), "ImageBoxPosition", "Image Box Position", Exact(US), Vm::Exact(1), false),
    E::new(Single(POLARITY), "Polarity", "Polarity", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REQUESTED_IMAGE_SIZE), "RequestedImageSize", "Requested Image Size", Exact(DS), Vm::Exact(1), false),
    E::new(Single(REQUESTED_DECIMATE_CROP_BEHAVIOR), "RequestedDecimateCropBehavior", "Requested Decimate/Crop Behavior", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REQUESTED_RESOLUTION_ID), "RequestedResolutionID", "Requested Resolution ID", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REQUESTED_IMAGE_SIZE_FLAG), "RequestedImageSizeFlag", "Requested Image Size Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DECIMATE_CROP_RESULT), "DecimateCropResult", "Decimate/Crop Result", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BASIC_GRAYSCALE_IMAGE_SEQUENCE), "BasicGrayscaleImageSequence", "Basic Grayscale Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BASIC_COLOR_IMAGE_SEQUENCE), "BasicColorImageSequence", "Basic Color Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_IMAGE_OVERLAY_BOX_SEQUENCE), "ReferencedImageOverlayBoxSequence", "Referenced Image Overlay Box Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REFERENCED_VOILUT_BOX_SEQUENCE), "ReferencedVOILUTBoxSequence", "Referenced VOI LUT Box Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(ANNOTATION_POSITION), "AnnotationPosition", "Annotation Position", Exact(US), Vm::Exact(1), false),
    E::new(Single(TEXT_STRING), "TextString", "Text String", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REFERENCED_OVERLAY_PLANE_SEQUENCE), "ReferencedOverlayPlaneSequence", "Referenced Overlay Plane Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REFERENCED_OVERLAY_PLANE_GROUPS), "ReferencedOverlayPlaneGroups", "Referenced Overlay Plane Groups", Exact(US), Vm::Bounded(1, 99), true),
    E::new(Single(OVERLAY_PIXEL_DATA_SEQUENCE), "OverlayPixelDataSequence", "Overlay Pixel Data Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(OVERLAY_MAGNIFICATION_TYPE), "OverlayMagnificationType", "Overlay Magnification Type", Exact(CS), Vm::Exact(1), true),
    E::new(Single(OVERLAY_SMOOTHING_TYPE), "OverlaySmoothingType", "Overlay Smoothing Type", Exact(CS), Vm::Exact(1), true),
    E::new(Single(OVERLAY_OR_IMAGE_MAGNIFICATION), "OverlayOrImageMagnification", "Overlay or Image Magnification", Exact(CS), Vm::Exact(1), true),
    E::new(Single(MAGNIFY_TO_NUMBER_OF_COLUMNS), "MagnifyToNumberOfColumns", "Magnify to Number of Columns", Exact(US), Vm::Exact(1), true),
    E::new(Single(OVERLAY_FOREGROUND_DENSITY), "OverlayForegroundDensity", "Overlay Foreground Density", Exact(CS), Vm::Exact(1), true),
    E::new(Single(OVERLAY_BACKGROUND_DENSITY), "OverlayBackgroundDensity", "Overlay Background Density", Exact(CS), Vm::Exact(1), true),
    E::new(Single(OVERLAY_MODE), "OverlayMode", "Overlay Mode", Exact(CS), Vm::Exact(1), true),
    E::new(Single(THRESHOLD_DENSITY), "ThresholdDensity", "Threshold Density", Exact(CS), Vm::Exact(1), true),
    E::new(Single(REFERENCED_IMAGE_BOX_SEQUENCE_RETIRED), "ReferencedImageBoxSequenceRetired", "Referenced Image Box Sequence (Retired)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(PRESENTATION_LUT_SEQUENCE), "PresentationLUTSequence", "Presentation LUT Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRESENTATION_LUT_SHAPE), "PresentationLUTShape", "Presentation LUT Shape", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_PRESENTATION_LUT_SEQUENCE), "ReferencedPresentationLUTSequence", "Referenced Presentation LUT Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRINT_JOB_ID), "PrintJobID", "Print Job ID", Exact(SH), Vm::Exact(1), true),
    E::new(Single(EXECUTION_STATUS), "ExecutionStatus", "Execution Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(EXECUTION_STATUS_INFO), "ExecutionStatusInfo", "Execution Status Info", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CREATION_DATE), "CreationDate", "Creation Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(CREATION_TIME), "CreationTime", "Creation Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(ORIGINATOR), "Originator", "Originator", Exact(AE), Vm::Exact(1), false),
    E::new(Single(DESTINATION_AE), "DestinationAE", "Destination AE", Exact(AE), Vm::Exact(1), true),
    E::new(Single(OWNER_ID), "OwnerID", "Owner ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_FILMS), "NumberOfFilms", "Number of Films", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_PRINT_JOB_SEQUENCE_PULL_STORED_PRINT), "ReferencedPrintJobSequencePullStoredPrint", "Referenced Print Job Sequence (Pull Stored Print)", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(PRINTER_STATUS), "PrinterStatus", "Printer Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRINTER_STATUS_INFO), "PrinterStatusInfo", "Printer Status Info", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRINTER_NAME), "PrinterName", "Printer Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PRINT_QUEUE_ID), "PrintQueueID", "Print Queue ID", Exact(SH), Vm::Exact(1), true),
    E::new(Single(QUEUE_STATUS), "QueueStatus", "Queue Status", Exact(CS), Vm::Exact(1), true),
    E::new(Single(PRINT_JOB_DESCRIPTION_SEQUENCE), "PrintJobDescriptionSequence", "Print Job Description Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REFERENCED_PRINT_JOB_SEQUENCE), "ReferencedPrintJobSequence", "Referenced Print Job Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(PRINT_MANAGEMENT_CAPABILITIES_SEQUENCE), "PrintManagementCapabilitiesSequence", "Print Management Capabilities Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(PRINTER_CHARACTERISTICS_SEQUENCE), "PrinterCharacteristicsSequence", "Printer Characteristics Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(FILM_BOX_CONTENT_SEQUENCE), "FilmBoxContentSequence", "Film Box Content Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(IMAGE_BOX_CONTENT_SEQUENCE), "ImageBoxContentSequence", "Image Box Content Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(ANNOTATION_CONTENT_SEQUENCE), "AnnotationContentSequence", "Annotation Content Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(IMAGE_OVERLAY_BOX_CONTENT_SEQUENCE), "ImageOverlayBoxContentSequence", "Image Overlay Box Content Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(PRESENTATION_LUT_CONTENT_SEQUENCE), "PresentationLUTContentSequence", "Presentation LUT Content Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(PROPOSED_STUDY_SEQUENCE), "ProposedStudySequence", "Proposed Study Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(ORIGINAL_IMAGE_SEQUENCE), "OriginalImageSequence", "Original Image Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(LABEL_USING_INFORMATION_EXTRACTED_FROM_INSTANCES), "LabelUsingInformationExtractedFromInstances", "Label Using Information Extracted From Instances", Exact(CS), Vm::Exact(1), false),
    E::new(Single(LABEL_TEXT), "LabelText", "Label Text", Exact(UT), Vm::Exact(1), false),
    E::new(Single(LABEL_STYLE_SELECTION), "LabelStyleSelection", "Label Style Selection", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MEDIA_DISPOSITION), "MediaDisposition", "Media Disposition", Exact(LT), Vm::Exact(1), false),
    E::new(Single(BARCODE_VALUE), "BarcodeValue", "Barcode Value", Exact(LT), Vm::Exact(1), false),
    E::new(Single(BARCODE_SYMBOLOGY), "BarcodeSymbology", "Barcode Symbology", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ALLOW_MEDIA_SPLITTING), "AllowMediaSplitting", "Allow Media Splitting", Exact(CS), Vm::Exact(1), false),
    E::new(Single(INCLUDE_NON_DICOM_OBJECTS), "IncludeNonDICOMObjects", "Include Non-DICOM Objects", Exact(CS), Vm::Exact(1), false),
    E::new(Single(INCLUDE_DISPLAY_APPLICATION), "IncludeDisplayApplication", "Include Display Application", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRESERVE_COMPOSITE_INSTANCES_AFTER_MEDIA_CREATION), "PreserveCompositeInstancesAfterMediaCreation", "Preserve Composite Instances After Media Creation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TOTAL_NUMBER_OF_PIECES_OF_MEDIA_CREATED), "TotalNumberOfPiecesOfMediaCreated", "Total Number of Pieces of Media Created", Exact(US), Vm::Exact(1), false),
    E::new(Single(REQUESTED_MEDIA_APPLICATION_PROFILE), "RequestedMediaApplicationProfile", "Requested Media Application Profile", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REFERENCED_STORAGE_MEDIA_SEQUENCE), "ReferencedStorageMediaSequence", "Referenced Storage Media Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FAILURE_ATTRIBUTES), "FailureAttributes", "Failure Attributes", Exact(AT), Vm::AtLeast(1), false),
    E::new(Single(ALLOW_LOSSY_COMPRESSION), "AllowLossyCompression", "Allow Lossy Compression", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REQUEST_PRIORITY), "RequestPriority", "Request Priority", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_LABEL), "RTImageLabel", "RT Image Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_NAME), "RTImageName", "RT Image Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_DESCRIPTION), "RTImageDescription", "RT Image Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(REPORTED_VALUES_ORIGIN), "ReportedValuesOrigin", "Reported Values Origin", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_PLANE), "RTImagePlane", "RT Image Plane", Exact(CS), Vm::Exact(1), false),
    E::new(Single(X_RAY_IMAGE_RECEPTOR_TRANSLATION), "XRayImageReceptorTranslation", "X-Ray Image Receptor Translation", Exact(DS), Vm::Exact(3), false),
    E::new(Single(X_RAY_IMAGE_RECEPTOR_ANGLE), "XRayImageReceptorAngle", "X-Ray Image Receptor Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_ORIENTATION), "RTImageOrientation", "RT Image Orientation", Exact(DS), Vm::Exact(6), false),
    E::new(Single(IMAGE_PLANE_PIXEL_SPACING), "ImagePlanePixelSpacing", "Image Plane Pixel Spacing", Exact(DS), Vm::Exact(2), false),
    E::new(Single(RT_IMAGE_POSITION), "RTImagePosition", "RT Image Position", Exact(DS), Vm::Exact(2), false),
    E::new(Single(RADIATION_MACHINE_NAME), "RadiationMachineName", "Radiation Machine Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(RADIATION_MACHINE_SAD), "RadiationMachineSAD", "Radiation Machine SAD", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RADIATION_MACHINE_SSD), "RadiationMachineSSD", "Radiation Machine SSD", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_SID), "RTImageSID", "RT Image SID", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_TO_REFERENCE_OBJECT_DISTANCE), "SourceToReferenceObjectDistance", "Source to Reference Object Distance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(FRACTION_NUMBER), "FractionNumber", "Fraction Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(EXPOSURE_SEQUENCE), "ExposureSequence", "Exposure Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(METERSET_EXPOSURE), "MetersetExposure", "Meterset Exposure", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DIAPHRAGM_POSITION), "DiaphragmPosition", "Diaphragm Position", Exact(DS), Vm::Exact(4), false),
    E::new(Single(FLUENCE_MAP_SEQUENCE), "FluenceMapSequence", "Fluence Map Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FLUENCE_DATA_SOURCE), "FluenceDataSource", "Fluence Data Source", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FLUENCE_DATA_SCALE), "FluenceDataScale", "Fluence Data Scale", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PRIMARY_FLUENCE_MODE_SEQUENCE), "PrimaryFluenceModeSequence", "Primary Fluence Mode Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FLUENCE_MODE), "FluenceMode", "Fluence Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FLUENCE_MODE_ID), "FluenceModeID", "Fluence Mode ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SELECTED_FRAME_NUMBER), "SelectedFrameNumber", "Selected Frame Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(SELECTED_FRAME_FUNCTIONAL_GROUPS_SEQUENCE), "SelectedFrameFunctionalGroupsSequence", "Selected Frame Functional Groups Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_FRAME_GENERAL_CONTENT_SEQUENCE), "RTImageFrameGeneralContentSequence", "RT Image Frame General Content Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_FRAME_CONTEXT_SEQUENCE), "RTImageFrameContextSequence", "RT Image Frame Context Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_SCOPE_SEQUENCE), "RTImageScopeSequence", "RT Image Scope Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BEAM_MODIFIER_COORDINATES_PRESENCE_FLAG), "BeamModifierCoordinatesPresenceFlag", "Beam Modifier Coordinates Presence Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(START_CUMULATIVE_METERSET), "StartCumulativeMeterset", "Start Cumulative Meterset", Exact(FD), Vm::Exact(1), false),
    E::new(Single(STOP_CUMULATIVE_METERSET), "StopCumulativeMeterset", "Stop Cumulative Meterset", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RT_ACQUISITION_PATIENT_POSITION_SEQUENCE), "RTAcquisitionPatientPositionSequence", "RT Acquisition Patient Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_FRAME_IMAGING_DEVICE_POSITION_SEQUENCE), "RTImageFrameImagingDevicePositionSequence", "RT Image Frame Imaging Device Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_FRAMEK_V_RADIATION_ACQUISITION_SEQUENCE), "RTImageFramekVRadiationAcquisitionSequence", "RT Image Frame kV Radiation Acquisition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_FRAME_MV_RADIATION_ACQUISITION_SEQUENCE), "RTImageFrameMVRadiationAcquisitionSequence", "RT Image Frame MV Radiation Acquisition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_IMAGE_FRAME_RADIATION_ACQUISITION_SEQUENCE), "RTImageFrameRadiationAcquisitionSequence", "RT Image Frame Radiation Acquisition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGING_SOURCE_POSITION_SEQUENCE), "ImagingSourcePositionSequence", "Imaging Source Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGE_RECEPTOR_POSITION_SEQUENCE), "ImageReceptorPositionSequence", "Image Receptor Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DEVICE_POSITION_TO_EQUIPMENT_MAPPING_MATRIX), "DevicePositionToEquipmentMappingMatrix", "Device Position to Equipment Mapping Matrix", Exact(FD), Vm::Exact(16), false),
    E::new(Single(DEVICE_POSITION_PARAMETER_SEQUENCE), "DevicePositionParameterSequence", "Device Position Parameter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGING_SOURCE_LOCATION_SPECIFICATION_TYPE), "ImagingSourceLocationSpecificationType", "Imaging Source Location Specification Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(IMAGING_DEVICE_LOCATION_MATRIX_SEQUENCE), "ImagingDeviceLocationMatrixSequence", "Imaging Device Location Matrix Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGING_DEVICE_LOCATION_PARAMETER_SEQUENCE), "ImagingDeviceLocationParameterSequence", "Imaging Device Location Parameter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGING_APERTURE_SEQUENCE), "ImagingApertureSequence", "Imaging Aperture Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGING_APERTURE_SPECIFICATION_TYPE), "ImagingApertureSpecificationType", "Imaging Aperture Specification Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_ACQUISITION_DEVICES), "NumberOfAcquisitionDevices", "Number of Acquisition Devices", Exact(US), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_DEVICE_SEQUENCE), "AcquisitionDeviceSequence", "Acquisition Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_TASK_SEQUENCE), "AcquisitionTaskSequence", "Acquisition Task Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_TASK_WORKITEM_CODE_SEQUENCE), "AcquisitionTaskWorkitemCodeSequence", "Acquisition Task Workitem Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_SUBTASK_SEQUENCE), "AcquisitionSubtaskSequence", "Acquisition Subtask Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SUBTASK_WORKITEM_CODE_SEQUENCE), "SubtaskWorkitemCodeSequence", "Subtask Workitem Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_TASK_INDEX), "AcquisitionTaskIndex", "Acquisition Task Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_SUBTASK_INDEX), "AcquisitionSubtaskIndex", "Acquisition Subtask Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCED_BASELINE_PARAMETERS_RT_RADIATION_INSTANCE_SEQUENCE), "ReferencedBaselineParametersRTRadiationInstanceSequence", "Referenced Baseline Parameters RT Radiation Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(POSITION_ACQUISITION_TEMPLATE_IDENTIFICATION_SEQUENCE), "PositionAcquisitionTemplateIdentificationSequence", "Position Acquisition Template Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(POSITION_ACQUISITION_TEMPLATE_ID), "PositionAcquisitionTemplateID", "Position Acquisition Template ID", Exact(ST), Vm::Exact(1), false),
    E::new(Single(POSITION_ACQUISITION_TEMPLATE_NAME), "PositionAcquisitionTemplateName", "Position Acquisition Template Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(POSITION_ACQUISITION_TEMPLATE_CODE_SEQUENCE), "PositionAcquisitionTemplateCodeSequence", "Position Acquisition Template Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(POSITION_ACQUISITION_TEMPLATE_DESCRIPTION), "PositionAcquisitionTemplateDescription", "Position Acquisition Template Description", Exact(LT), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_TASK_APPLICABILITY_SEQUENCE), "AcquisitionTaskApplicabilitySequence", "Acquisition Task Applicability Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PROJECTION_IMAGING_ACQUISITION_PARAMETER_SEQUENCE), "ProjectionImagingAcquisitionParameterSequence", "Projection Imaging Acquisition Parameter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CT_IMAGING_ACQUISITION_PARAMETER_SEQUENCE), "CTImagingAcquisitionParameterSequence", "CT Imaging Acquisition Parameter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(KV_IMAGING_GENERATION_PARAMETERS_SEQUENCE), "KVImagingGenerationParametersSequence", "KV Imaging Generation Parameters Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MV_IMAGING_GENERATION_PARAMETERS_SEQUENCE), "MVImagingGenerationParametersSequence", "MV Imaging Generation Parameters Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_SIGNAL_TYPE), "AcquisitionSignalType", "Acquisition Signal Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_METHOD), "AcquisitionMethod", "Acquisition Method", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SCAN_START_POSITION_SEQUENCE), "ScanStartPositionSequence", "Scan Start Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCAN_STOP_POSITION_SEQUENCE), "ScanStopPositionSequence", "Scan Stop Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGING_SOURCE_TO_BEAM_MODIFIER_DEFINITION_PLANE_DISTANCE), "ImagingSourceToBeamModifierDefinitionPlaneDistance", "Imaging Source to Beam Modifier Definition Plane Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SCAN_ARC_TYPE), "ScanArcType", "Scan Arc Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_POSITIONING_TYPE), "DetectorPositioningType", "Detector Positioning Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ADDITIONAL_RT_ACCESSORY_DEVICE_SEQUENCE), "AdditionalRTAccessoryDeviceSequence", "Additional RT Accessory Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DEVICE_SPECIFIC_ACQUISITION_PARAMETER_SEQUENCE), "DeviceSpecificAcquisitionParameterSequence", "Device-Specific Acquisition Parameter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_POSITION_REFERENCE_INSTANCE_SEQUENCE), "ReferencedPositionReferenceInstanceSequence", "Referenced Position Reference Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ENERGY_DERIVATION_CODE_SEQUENCE), "EnergyDerivationCodeSequence", "Energy Derivation Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MAXIMUM_CUMULATIVE_METERSET_EXPOSURE), "MaximumCumulativeMetersetExposure", "Maximum Cumulative Meterset Exposure", Exact(FD), Vm::Exact(1), false),
    E::new(Single(ACQUISITION_INITIATION_SEQUENCE), "AcquisitionInitiationSequence", "Acquisition Initiation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DVH_TYPE), "DVHType", "DVH Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DOSE_UNITS), "DoseUnits", "Dose Units", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DOSE_TYPE), "DoseType", "Dose Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SPATIAL_TRANSFORM_OF_DOSE), "SpatialTransformOfDose", "Spatial Transform of Dose", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DOSE_COMMENT), "DoseComment", "Dose Comment", Exact(LO), Vm::Exact(1), false),
    E::new(Single(NORMALIZATION_POINT), "NormalizationPoint", "Normalization Point", Exact(DS), Vm::Exact(3), false),
    E::new(Single(DOSE_SUMMATION_TYPE), "DoseSummationType", "Dose Summation Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GRID_FRAME_OFFSET_VECTOR), "GridFrameOffsetVector", "Grid Frame Offset Vector", Exact(DS), Vm::AtLeast(2), false),
    E::new(Single(DOSE_GRID_SCALING), "DoseGridScaling", "Dose Grid Scaling", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RT_DOSE_ROI_SEQUENCE), "RTDoseROISequence", "RT Dose ROI Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(DOSE_VALUE), "DoseValue", "Dose Value", Exact(DS), Vm::Exact(1), true),
    E::new(Single(TISSUE_HETEROGENEITY_CORRECTION), "TissueHeterogeneityCorrection", "Tissue Heterogeneity Correction", Exact(CS), Vm::Bounded(1, 3), false),
    E::new(Single(RECOMMENDED_ISODOSE_LEVEL_SEQUENCE), "RecommendedIsodoseLevelSequence", "Recommended Isodose Level Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DVH_NORMALIZATION_POINT), "DVHNormalizationPoint", "DVH Normalization Point", Exact(DS), Vm::Exact(3), false),
    E::new(Single(DVH_NORMALIZATION_DOSE_VALUE), "DVHNormalizationDoseValue", "DVH Normalization Dose Value", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DVH_SEQUENCE), "DVHSequence", "DVH Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DVH_DOSE_SCALING), "DVHDoseScaling", "DVH Dose Scaling", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DVH_VOLUME_UNITS), "DVHVolumeUnits", "DVH Volume Units", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DVH_NUMBER_OF_BINS), "DVHNumberOfBins", "DVH Number of Bins", Exact(IS), Vm::Exact(1), false),
    E::new(Single(DVH_DATA), "DVHData", "DVH Data", Exact(DS), Vm::MultipleOf(2), false),
    E::new(Single(DVH_REFERENCED_ROI_SEQUENCE), "DVHReferencedROISequence", "DVH Referenced ROI Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DVHROI_CONTRIBUTION_TYPE), "DVHROIContributionType", "DVH ROI Contribution Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DVH_MINIMUM_DOSE), "DVHMinimumDose", "DVH Minimum Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DVH_MAXIMUM_DOSE), "DVHMaximumDose", "DVH Maximum Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DVH_MEAN_DOSE), "DVHMeanDose", "DVH Mean Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(STRUCTURE_SET_LABEL), "StructureSetLabel", "Structure Set Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(STRUCTURE_SET_NAME), "StructureSetName", "Structure Set Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(STRUCTURE_SET_DESCRIPTION), "StructureSetDescription", "Structure Set Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(STRUCTURE_SET_DATE), "StructureSetDate", "Structure Set Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(STRUCTURE_SET_TIME), "StructureSetTime", "Structure Set Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(REFERENCED_FRAME_OF_REFERENCE_SEQUENCE), "ReferencedFrameOfReferenceSequence", "Referenced Frame of Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_REFERENCED_STUDY_SEQUENCE), "RTReferencedStudySequence", "RT Referenced Study Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_REFERENCED_SERIES_SEQUENCE), "RTReferencedSeriesSequence", "RT Referenced Series Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTOUR_IMAGE_SEQUENCE), "ContourImageSequence", "Contour Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PREDECESSOR_STRUCTURE_SET_SEQUENCE), "PredecessorStructureSetSequence", "Predecessor Structure Set Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(STRUCTURE_SET_ROI_SEQUENCE), "StructureSetROISequence", "Structure Set ROI Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ROI_NUMBER), "ROINumber", "ROI Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_FRAME_OF_REFERENCE_UID), "ReferencedFrameOfReferenceUID", "Referenced Frame of Reference UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(ROI_NAME), "ROIName", "ROI Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ROI_DESCRIPTION), "ROIDescription", "ROI Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(ROI_DISPLAY_COLOR), "ROIDisplayColor", "ROI Display Color", Exact(IS), Vm::Exact(3), false),
    E::new(Single(ROI_VOLUME), "ROIVolume", "ROI Volume", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ROI_DATE_TIME), "ROIDateTime", "ROI DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(ROI_OBSERVATION_DATE_TIME), "ROIObservationDateTime", "ROI Observation DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(RT_RELATED_ROI_SEQUENCE), "RTRelatedROISequence", "RT Related ROI Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RTROI_RELATIONSHIP), "RTROIRelationship", "RT ROI Relationship", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ROI_GENERATION_ALGORITHM), "ROIGenerationAlgorithm", "ROI Generation Algorithm", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ROI_DERIVATION_ALGORITHM_IDENTIFICATION_SEQUENCE), "ROIDerivationAlgorithmIdentificationSequence", "ROI Derivation Algorithm Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ROI_GENERATION_DESCRIPTION), "ROIGenerationDescription", "ROI Generation Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ROI_CONTOUR_SEQUENCE), "ROIContourSequence", "ROI Contour Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTOUR_SEQUENCE), "ContourSequence", "Contour Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTOUR_GEOMETRIC_TYPE), "ContourGeometricType", "Contour Geometric Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONTOUR_SLAB_THICKNESS), "ContourSlabThickness", "Contour Slab Thickness", Exact(DS), Vm::Exact(1), true),
    E::new(Single(CONTOUR_OFFSET_VECTOR), "ContourOffsetVector", "Contour Offset Vector", Exact(DS), Vm::Exact(3), true),
    E::new(Single(NUMBER_OF_CONTOUR_POINTS), "NumberOfContourPoints", "Number of Contour Points", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CONTOUR_NUMBER), "ContourNumber", "Contour Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(ATTACHED_CONTOURS), "AttachedContours", "Attached Contours", Exact(IS), Vm::AtLeast(1), true),
    E::new(Single(SOURCE_PIXEL_PLANES_CHARACTERISTICS_SEQUENCE), "SourcePixelPlanesCharacteristicsSequence", "Source Pixel Planes Characteristics Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SOURCE_SERIES_SEQUENCE), "SourceSeriesSequence", "Source Series Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SOURCE_SERIES_INFORMATION_SEQUENCE), "SourceSeriesInformationSequence", "Source Series Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ROI_CREATOR_SEQUENCE), "ROICreatorSequence", "ROI Creator Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ROI_INTERPRETER_SEQUENCE), "ROIInterpreterSequence", "ROI Interpreter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ROI_OBSERVATION_CONTEXT_CODE_SEQUENCE), "ROIObservationContextCodeSequence", "ROI Observation Context Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTOUR_DATA), "ContourData", "Contour Data", Exact(DS), Vm::MultipleOf(3), false),
    E::new(Single(RTROI_OBSERVATIONS_SEQUENCE), "RTROIObservationsSequence", "RT ROI Observations Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OBSERVATION_NUMBER), "ObservationNumber", "Observation Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_ROI_NUMBER), "ReferencedROINumber", "Referenced ROI Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(ROI_OBSERVATION_LABEL), "ROIObservationLabel", "ROI Observation Label", Exact(SH), Vm::Exact(1), true),
    E::new(Single(RTROI_IDENTIFICATION_CODE_SEQUENCE), "RTROIIdentificationCodeSequence", "RT ROI Identification Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ROI_OBSERVATION_DESCRIPTION), "ROIObservationDescription", "ROI Observation Description", Exact(ST), Vm::Exact(1), true),
    E::new(Single(RELATED_RTROI_OBSERVATIONS_SEQUENCE), "RelatedRTROIObservationsSequence", "Related RT ROI Observations Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RTROI_INTERPRETED_TYPE), "RTROIInterpretedType", "RT ROI Interpreted Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ROI_INTERPRETER), "ROIInterpreter", "ROI Interpreter", Exact(PN), Vm::Exact(1), false),
    E::new(Single(ROI_PHYSICAL_PROPERTIES_SEQUENCE), "ROIPhysicalPropertiesSequence", "ROI Physical Properties Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ROI_PHYSICAL_PROPERTY), "ROIPhysicalProperty", "ROI Physical Property", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ROI_PHYSICAL_PROPERTY_VALUE), "ROIPhysicalPropertyValue", "ROI Physical Property Value", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ROI_ELEMENTAL_COMPOSITION_SEQUENCE), "ROIElementalCompositionSequence", "ROI Elemental Composition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ROI_ELEMENTAL_COMPOSITION_ATOMIC_NUMBER), "ROIElementalCompositionAtomicNumber", "ROI Elemental Composition Atomic Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(ROI_ELEMENTAL_COMPOSITION_ATOMIC_MASS_FRACTION), "ROIElementalCompositionAtomicMassFraction", "ROI Elemental Composition Atomic Mass Fraction", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ADDITIONAL_RTROI_IDENTIFICATION_CODE_SEQUENCE), "AdditionalRTROIIdentificationCodeSequence", "Additional RT ROI Identification Code Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(FRAME_OF_REFERENCE_RELATIONSHIP_SEQUENCE), "FrameOfReferenceRelationshipSequence", "Frame of Reference Relationship Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(RELATED_FRAME_OF_REFERENCE_UID), "RelatedFrameOfReferenceUID", "Related Frame of Reference UID", Exact(UI), Vm::Exact(1), true),
    E::new(Single(FRAME_OF_REFERENCE_TRANSFORMATION_TYPE), "FrameOfReferenceTransformationType", "Frame of Reference Transformation Type", Exact(CS), Vm::Exact(1), true),
    E::new(Single(FRAME_OF_REFERENCE_TRANSFORMATION_MATRIX), "FrameOfReferenceTransformationMatrix", "Frame of Reference Transformation Matrix", Exact(DS), Vm::Exact(16), false),
    E::new(Single(FRAME_OF_REFERENCE_TRANSFORMATION_COMMENT), "FrameOfReferenceTransformationComment", "Frame of Reference Transformation Comment", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_LOCATION_COORDINATES_SEQUENCE), "PatientLocationCoordinatesSequence", "Patient Location Coordinates Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_LOCATION_COORDINATES_CODE_SEQUENCE), "PatientLocationCoordinatesCodeSequence", "Patient Location Coordinates Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_POSITION_SEQUENCE), "PatientSupportPositionSequence", "Patient Support Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MEASURED_DOSE_REFERENCE_SEQUENCE), "MeasuredDoseReferenceSequence", "Measured Dose Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MEASURED_DOSE_DESCRIPTION), "MeasuredDoseDescription", "Measured Dose Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(MEASURED_DOSE_TYPE), "MeasuredDoseType", "Measured Dose Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MEASURED_DOSE_VALUE), "MeasuredDoseValue", "Measured Dose Value", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_SESSION_BEAM_SEQUENCE), "TreatmentSessionBeamSequence", "Treatment Session Beam Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TREATMENT_SESSION_ION_BEAM_SEQUENCE), "TreatmentSessionIonBeamSequence", "Treatment Session Ion Beam Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CURRENT_FRACTION_NUMBER), "CurrentFractionNumber", "Current Fraction Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_CONTROL_POINT_DATE), "TreatmentControlPointDate", "Treatment Control Point Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(TREATMENT_CONTROL_POINT_TIME), "TreatmentControlPointTime", "Treatment Control Point Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TERMINATION_STATUS), "TreatmentTerminationStatus", "Treatment Termination Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TERMINATION_CODE), "TreatmentTerminationCode", "Treatment Termination Code", Exact(SH), Vm::Exact(1), true),
    E::new(Single(TREATMENT_VERIFICATION_STATUS), "TreatmentVerificationStatus", "Treatment Verification Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_TREATMENT_RECORD_SEQUENCE), "ReferencedTreatmentRecordSequence", "Referenced Treatment Record Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPECIFIED_PRIMARY_METERSET), "SpecifiedPrimaryMeterset", "Specified Primary Meterset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SPECIFIED_SECONDARY_METERSET), "SpecifiedSecondaryMeterset", "Specified Secondary Meterset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DELIVERED_PRIMARY_METERSET), "DeliveredPrimaryMeterset", "Delivered Primary Meterset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DELIVERED_SECONDARY_METERSET), "DeliveredSecondaryMeterset", "Delivered Secondary Meterset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SPECIFIED_TREATMENT_TIME), "SpecifiedTreatmentTime", "Specified Treatment Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DELIVERED_TREATMENT_TIME), "DeliveredTreatmentTime", "Delivered Treatment Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CONTROL_POINT_DELIVERY_SEQUENCE), "ControlPointDeliverySequence", "Control Point Delivery Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ION_CONTROL_POINT_DELIVERY_SEQUENCE), "IonControlPointDeliverySequence", "Ion Control Point Delivery Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPECIFIED_METERSET), "SpecifiedMeterset", "Specified Meterset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DELIVERED_METERSET), "DeliveredMeterset", "Delivered Meterset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(METERSET_RATE_SET), "MetersetRateSet", "Meterset Rate Set", Exact(FL), Vm::Exact(1), false),
    E::new(Single(METERSET_RATE_DELIVERED), "MetersetRateDelivered", "Meterset Rate Delivered", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SCAN_SPOT_METERSETS_DELIVERED), "ScanSpotMetersetsDelivered", "Scan Spot Metersets Delivered", Exact(FL), Vm::AtLeast(1), false),
    E::new(Single(DOSE_RATE_DELIVERED), "DoseRateDelivered", "Dose Rate Delivered", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_SUMMARY_CALCULATED_DOSE_REFERENCE_SEQUENCE), "TreatmentSummaryCalculatedDoseReferenceSequence", "Treatment Summary Calculated Dose Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CUMULATIVE_DOSE_TO_DOSE_REFERENCE), "CumulativeDoseToDoseReference", "Cumulative Dose to Dose Reference", Exact(DS), Vm::Exact(1), false),
    E::new(Single(FIRST_TREATMENT_DATE), "FirstTreatmentDate", "First Treatment Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(MOST_RECENT_TREATMENT_DATE), "MostRecentTreatmentDate", "Most Recent Treatment Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_FRACTIONS_DELIVERED), "NumberOfFractionsDelivered", "Number of Fractions Delivered", Exact(IS), Vm::Exact(1), false),
    E::new(Single(OVERRIDE_SEQUENCE), "OverrideSequence", "Override Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PARAMETER_SEQUENCE_POINTER), "ParameterSequencePointer", "Parameter Sequence Pointer", Exact(AT), Vm::Exact(1), false),
    E::new(Single(OVERRIDE_PARAMETER_POINTER), "OverrideParameterPointer", "Override Parameter Pointer", Exact(AT), Vm::Exact(1), false),
    E::new(Single(PARAMETER_ITEM_INDEX), "ParameterItemIndex", "Parameter Item Index", Exact(IS), Vm::Exact(1), false),
    E::new(Single(MEASURED_DOSE_REFERENCE_NUMBER), "MeasuredDoseReferenceNumber", "Measured Dose Reference Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(PARAMETER_POINTER), "ParameterPointer", "Parameter Pointer", Exact(AT), Vm::Exact(1), false),
    E::new(Single(OVERRIDE_REASON), "OverrideReason", "Override Reason", Exact(ST), Vm::Exact(1), false),
    E::new(Single(PARAMETER_VALUE_NUMBER), "ParameterValueNumber", "Parameter Value Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(CORRECTED_PARAMETER_SEQUENCE), "CorrectedParameterSequence", "Corrected Parameter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CORRECTION_VALUE), "CorrectionValue", "Correction Value", Exact(FL), Vm::Exact(1), false),
    E::new(Single(CALCULATED_DOSE_REFERENCE_SEQUENCE), "CalculatedDoseReferenceSequence", "Calculated Dose Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CALCULATED_DOSE_REFERENCE_NUMBER), "CalculatedDoseReferenceNumber", "Calculated Dose Reference Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CALCULATED_DOSE_REFERENCE_DESCRIPTION), "CalculatedDoseReferenceDescription", "Calculated Dose Reference Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(CALCULATED_DOSE_REFERENCE_DOSE_VALUE), "CalculatedDoseReferenceDoseValue", "Calculated Dose Reference Dose Value", Exact(DS), Vm::Exact(1), false),
    E::new(Single(START_METERSET), "StartMeterset", "Start Meterset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(END_METERSET), "EndMeterset", "End Meterset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_MEASURED_DOSE_REFERENCE_SEQUENCE), "ReferencedMeasuredDoseReferenceSequence", "Referenced Measured Dose Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_MEASURED_DOSE_REFERENCE_NUMBER), "ReferencedMeasuredDoseReferenceNumber", "Referenced Measured Dose Reference Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_CALCULATED_DOSE_REFERENCE_SEQUENCE), "ReferencedCalculatedDoseReferenceSequence", "Referenced Calculated Dose Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_CALCULATED_DOSE_REFERENCE_NUMBER), "ReferencedCalculatedDoseReferenceNumber", "Referenced Calculated Dose Reference Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(BEAM_LIMITING_DEVICE_LEAF_PAIRS_SEQUENCE), "BeamLimitingDeviceLeafPairsSequence", "Beam Limiting Device Leaf Pairs Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ENHANCED_RT_BEAM_LIMITING_DEVICE_SEQUENCE), "EnhancedRTBeamLimitingDeviceSequence", "Enhanced RT Beam Limiting Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ENHANCED_RT_BEAM_LIMITING_OPENING_SEQUENCE), "EnhancedRTBeamLimitingOpeningSequence", "Enhanced RT Beam Limiting Opening Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ENHANCED_RT_BEAM_LIMITING_DEVICE_DEFINITION_FLAG), "EnhancedRTBeamLimitingDeviceDefinitionFlag", "Enhanced RT Beam Limiting Device Definition Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PARALLEL_RT_BEAM_DELIMITER_OPENING_EXTENTS), "ParallelRTBeamDelimiterOpeningExtents", "Parallel RT Beam Delimiter Opening Extents", Exact(FD), Vm::MultipleOf(2), false),
    E::new(Single(RECORDED_WEDGE_SEQUENCE), "RecordedWedgeSequence", "Recorded Wedge Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECORDED_COMPENSATOR_SEQUENCE), "RecordedCompensatorSequence", "Recorded Compensator Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECORDED_BLOCK_SEQUENCE), "RecordedBlockSequence", "Recorded Block Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECORDED_BLOCK_SLAB_SEQUENCE), "RecordedBlockSlabSequence", "Recorded Block Slab Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TREATMENT_SUMMARY_MEASURED_DOSE_REFERENCE_SEQUENCE), "TreatmentSummaryMeasuredDoseReferenceSequence", "Treatment Summary Measured Dose Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECORDED_SNOUT_SEQUENCE), "RecordedSnoutSequence", "Recorded Snout Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECORDED_RANGE_SHIFTER_SEQUENCE), "RecordedRangeShifterSequence", "Recorded Range Shifter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECORDED_LATERAL_SPREADING_DEVICE_SEQUENCE), "RecordedLateralSpreadingDeviceSequence", "Recorded Lateral Spreading Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECORDED_RANGE_MODULATOR_SEQUENCE), "RecordedRangeModulatorSequence", "Recorded Range Modulator Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RECORDED_SOURCE_SEQUENCE), "RecordedSourceSequence", "Recorded Source Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SOURCE_SERIAL_NUMBER), "SourceSerialNumber", "Source Serial Number", Exact(LO), Vm::Exact(1), false),
    E::new(Single(TREATMENT_SESSION_APPLICATION_SETUP_SEQUENCE), "TreatmentSessionApplicationSetupSequence", "Treatment Session Application Setup Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(APPLICATION_SETUP_CHECK), "ApplicationSetupCheck", "Application Setup Check", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RECORDED_BRACHY_ACCESSORY_DEVICE_SEQUENCE), "RecordedBrachyAccessoryDeviceSequence", "Recorded Brachy Accessory Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_BRACHY_ACCESSORY_DEVICE_NUMBER), "ReferencedBrachyAccessoryDeviceNumber", "Referenced Brachy Accessory Device Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(RECORDED_CHANNEL_SEQUENCE), "RecordedChannelSequence", "Recorded Channel Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SPECIFIED_CHANNEL_TOTAL_TIME), "SpecifiedChannelTotalTime", "Specified Channel Total Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DELIVERED_CHANNEL_TOTAL_TIME), "DeliveredChannelTotalTime", "Delivered Channel Total Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SPECIFIED_NUMBER_OF_PULSES), "SpecifiedNumberOfPulses", "Specified Number of Pulses", Exact(IS), Vm::Exact(1), false),
    E::new(Single(DELIVERED_NUMBER_OF_PULSES), "DeliveredNumberOfPulses", "Delivered Number of Pulses", Exact(IS), Vm::Exact(1), false),
    E::new(Single(SPECIFIED_PULSE_REPETITION_INTERVAL), "SpecifiedPulseRepetitionInterval", "Specified Pulse Repetition Interval", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DELIVERED_PULSE_REPETITION_INTERVAL), "DeliveredPulseRepetitionInterval", "Delivered Pulse Repetition Interval", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RECORDED_SOURCE_APPLICATOR_SEQUENCE), "RecordedSourceApplicatorSequence", "Recorded Source Applicator Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SOURCE_APPLICATOR_NUMBER), "ReferencedSourceApplicatorNumber", "Referenced Source Applicator Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(RECORDED_CHANNEL_SHIELD_SEQUENCE), "RecordedChannelShieldSequence", "Recorded Channel Shield Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_CHANNEL_SHIELD_NUMBER), "ReferencedChannelShieldNumber", "Referenced Channel Shield Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(BRACHY_CONTROL_POINT_DELIVERED_SEQUENCE), "BrachyControlPointDeliveredSequence", "Brachy Control Point Delivered Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SAFE_POSITION_EXIT_DATE), "SafePositionExitDate", "Safe Position Exit Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(SAFE_POSITION_EXIT_TIME), "SafePositionExitTime", "Safe Position Exit Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(SAFE_POSITION_RETURN_DATE), "SafePositionReturnDate", "Safe Position Return Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(SAFE_POSITION_RETURN_TIME), "SafePositionReturnTime", "Safe Position Return Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(PULSE_SPECIFIC_BRACHY_CONTROL_POINT_DELIVERED_SEQUENCE), "PulseSpecificBrachyControlPointDeliveredSequence", "Pulse Specific Brachy Control Point Delivered Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PULSE_NUMBER), "PulseNumber", "Pulse Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(BRACHY_PULSE_CONTROL_POINT_DELIVERED_SEQUENCE), "BrachyPulseControlPointDeliveredSequence", "Brachy Pulse Control Point Delivered Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CURRENT_TREATMENT_STATUS), "CurrentTreatmentStatus", "Current Treatment Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_STATUS_COMMENT), "TreatmentStatusComment", "Treatment Status Comment", Exact(ST), Vm::Exact(1), false),
    E::new(Single(FRACTION_GROUP_SUMMARY_SEQUENCE), "FractionGroupSummarySequence", "Fraction Group Summary Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_FRACTION_NUMBER), "ReferencedFractionNumber", "Referenced Fraction Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(FRACTION_GROUP_TYPE), "FractionGroupType", "Fraction Group Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BEAM_STOPPER_POSITION), "BeamStopperPosition", "Beam Stopper Position", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FRACTION_STATUS_SUMMARY_SEQUENCE), "FractionStatusSummarySequence", "Fraction Status Summary Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TREATMENT_DATE), "TreatmentDate", "Treatment Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TIME), "TreatmentTime", "Treatment Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(RT_PLAN_LABEL), "RTPlanLabel", "RT Plan Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(RT_PLAN_NAME), "RTPlanName", "RT Plan Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(RT_PLAN_DESCRIPTION), "RTPlanDescription", "RT Plan Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(RT_PLAN_DATE), "RTPlanDate", "RT Plan Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(RT_PLAN_TIME), "RTPlanTime", "RT Plan Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(TREATMENT_PROTOCOLS), "TreatmentProtocols", "Treatment Protocols", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(PLAN_INTENT), "PlanIntent", "Plan Intent", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_SITES), "TreatmentSites", "Treatment Sites", Exact(LO), Vm::AtLeast(1), true),
    E::new(Single(RT_PLAN_GEOMETRY), "RTPlanGeometry", "RT Plan Geometry", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRESCRIPTION_DESCRIPTION), "PrescriptionDescription", "Prescription Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(DOSE_REFERENCE_SEQUENCE), "DoseReferenceSequence", "Dose Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DOSE_REFERENCE_NUMBER), "DoseReferenceNumber", "Dose Reference Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(DOSE_REFERENCE_UID), "DoseReferenceUID", "Dose Reference UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(DOSE_REFERENCE_STRUCTURE_TYPE), "DoseReferenceStructureType", "Dose Reference Structure Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NOMINAL_BEAM_ENERGY_UNIT), "NominalBeamEnergyUnit", "Nominal Beam Energy Unit", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DOSE_REFERENCE_DESCRIPTION), "DoseReferenceDescription", "Dose Reference Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(DOSE_REFERENCE_POINT_COORDINATES), "DoseReferencePointCoordinates", "Dose Reference Point Coordinates", Exact(DS), Vm::Exact(3), false),
    E::new(Single(NOMINAL_PRIOR_DOSE), "NominalPriorDose", "Nominal Prior Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DOSE_REFERENCE_TYPE), "DoseReferenceType", "Dose Reference Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONSTRAINT_WEIGHT), "ConstraintWeight", "Constraint Weight", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DELIVERY_WARNING_DOSE), "DeliveryWarningDose", "Delivery Warning Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DELIVERY_MAXIMUM_DOSE), "DeliveryMaximumDose", "Delivery Maximum Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TARGET_MINIMUM_DOSE), "TargetMinimumDose", "Target Minimum Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TARGET_PRESCRIPTION_DOSE), "TargetPrescriptionDose", "Target Prescription Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TARGET_MAXIMUM_DOSE), "TargetMaximumDose", "Target Maximum Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TARGET_UNDERDOSE_VOLUME_FRACTION), "TargetUnderdoseVolumeFraction", "Target Underdose Volume Fraction", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ORGAN_AT_RISK_FULL_VOLUME_DOSE), "OrganAtRiskFullVolumeDose", "Organ at Risk Full-volume Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ORGAN_AT_RISK_LIMIT_DOSE), "OrganAtRiskLimitDose", "Organ at Risk Limit Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ORGAN_AT_RISK_MAXIMUM_DOSE), "OrganAtRiskMaximumDose", "Organ at Risk Maximum Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ORGAN_AT_RISK_OVERDOSE_VOLUME_FRACTION), "OrganAtRiskOverdoseVolumeFraction", "Organ at Risk Overdose Volume Fraction", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TOLERANCE_TABLE_SEQUENCE), "ToleranceTableSequence", "Tolerance Table Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TOLERANCE_TABLE_NUMBER), "ToleranceTableNumber", "Tolerance Table Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(TOLERANCE_TABLE_LABEL), "ToleranceTableLabel", "Tolerance Table Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(GANTRY_ANGLE_TOLERANCE), "GantryAngleTolerance", "Gantry Angle Tolerance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BEAM_LIMITING_DEVICE_ANGLE_TOLERANCE), "BeamLimitingDeviceAngleTolerance", "Beam Limiting Device Angle Tolerance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BEAM_LIMITING_DEVICE_TOLERANCE_SEQUENCE), "BeamLimitingDeviceToleranceSequence", "Beam Limiting Device Tolerance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BEAM_LIMITING_DEVICE_POSITION_TOLERANCE), "BeamLimitingDevicePositionTolerance", "Beam Limiting Device Position Tolerance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SNOUT_POSITION_TOLERANCE), "SnoutPositionTolerance", "Snout Position Tolerance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_ANGLE_TOLERANCE), "PatientSupportAngleTolerance", "Patient Support Angle Tolerance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_ECCENTRIC_ANGLE_TOLERANCE), "TableTopEccentricAngleTolerance", "Table Top Eccentric Angle Tolerance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_PITCH_ANGLE_TOLERANCE), "TableTopPitchAngleTolerance", "Table Top Pitch Angle Tolerance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_ROLL_ANGLE_TOLERANCE), "TableTopRollAngleTolerance", "Table Top Roll Angle Tolerance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_VERTICAL_POSITION_TOLERANCE), "TableTopVerticalPositionTolerance", "Table Top Vertical Position Tolerance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_LONGITUDINAL_POSITION_TOLERANCE), "TableTopLongitudinalPositionTolerance", "Table Top Longitudinal Position Tolerance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_LATERAL_POSITION_TOLERANCE), "TableTopLateralPositionTolerance", "Table Top Lateral Position Tolerance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RT_PLAN_RELATIONSHIP), "RTPlanRelationship", "RT Plan Relationship", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FRACTION_GROUP_SEQUENCE), "FractionGroupSequence", "Fraction Group Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FRACTION_GROUP_NUMBER), "FractionGroupNumber", "Fraction Group Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(FRACTION_GROUP_DESCRIPTION), "FractionGroupDescription", "Fraction Group Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_FRACTIONS_PLANNED), "NumberOfFractionsPlanned", "Number of Fractions Planned", Exact(IS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_FRACTION_PATTERN_DIGITS_PER_DAY), "NumberOfFractionPatternDigitsPerDay", "Number of Fraction Pattern Digits Per Day", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REPEAT_FRACTION_CYCLE_LENGTH), "RepeatFractionCycleLength", "Repeat Fraction Cycle Length", Exact(IS), Vm::Exact(1), false),
    E::new(Single(FRACTION_PATTERN), "FractionPattern", "Fraction Pattern", Exact(LT), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_BEAMS), "NumberOfBeams", "Number of Beams", Exact(IS), Vm::Exact(1), false),
    E::new(Single(BEAM_DOSE_SPECIFICATION_POINT), "BeamDoseSpecificationPoint", "Beam Dose Specification Point", Exact(DS), Vm::Exact(3), true),
    E::new(Single(REFERENCED_DOSE_REFERENCE_UID), "ReferencedDoseReferenceUID", "Referenced Dose Reference UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(BEAM_DOSE), "BeamDose", "Beam Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BEAM_METERSET), "BeamMeterset", "Beam Meterset", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BEAM_DOSE_POINT_DEPTH), "BeamDosePointDepth", "Beam Dose Point Depth", Exact(FL), Vm::Exact(1), true),
    E::new(Single(BEAM_DOSE_POINT_EQUIVALENT_DEPTH), "BeamDosePointEquivalentDepth", "Beam Dose Point Equivalent Depth", Exact(FL), Vm::Exact(1), true),
    E::new(Single(BEAM_DOSE_POINT_SSD), "BeamDosePointSSD", "Beam Dose Point SSD", Exact(FL), Vm::Exact(1), true),
    E::new(Single(BEAM_DOSE_MEANING), "BeamDoseMeaning", "Beam Dose Meaning", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BEAM_DOSE_VERIFICATION_CONTROL_POINT_SEQUENCE), "BeamDoseVerificationControlPointSequence", "Beam Dose Verification Control Point Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(AVERAGE_BEAM_DOSE_POINT_DEPTH), "AverageBeamDosePointDepth", "Average Beam Dose Point Depth", Exact(FL), Vm::Exact(1), true),
    E::new(Single(AVERAGE_BEAM_DOSE_POINT_EQUIVALENT_DEPTH), "AverageBeamDosePointEquivalentDepth", "Average Beam Dose Point Equivalent Depth", Exact(FL), Vm::Exact(1), true),
    E::new(Single(AVERAGE_BEAM_DOSE_POINT_SSD), "AverageBeamDosePointSSD", "Average Beam Dose Point SSD", Exact(FL), Vm::Exact(1), true),
    E::new(Single(BEAM_DOSE_TYPE), "BeamDoseType", "Beam Dose Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ALTERNATE_BEAM_DOSE), "AlternateBeamDose", "Alternate Beam Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ALTERNATE_BEAM_DOSE_TYPE), "AlternateBeamDoseType", "Alternate Beam Dose Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DEPTH_VALUE_AVERAGING_FLAG), "DepthValueAveragingFlag", "Depth Value Averaging Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BEAM_DOSE_POINT_SOURCE_TO_EXTERNAL_CONTOUR_DISTANCE), "BeamDosePointSourceToExternalContourDistance", "Beam Dose Point Source to External Contour Distance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_BRACHY_APPLICATION_SETUPS), "NumberOfBrachyApplicationSetups", "Number of Brachy Application Setups", Exact(IS), Vm::Exact(1), false),
    E::new(Single(BRACHY_APPLICATION_SETUP_DOSE_SPECIFICATION_POINT), "BrachyApplicationSetupDoseSpecificationPoint", "Brachy Application Setup Dose Specification Point", Exact(DS), Vm::Exact(3), false),
    E::new(Single(BRACHY_APPLICATION_SETUP_DOSE), "BrachyApplicationSetupDose", "Brachy Application Setup Dose", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BEAM_SEQUENCE), "BeamSequence", "Beam Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TREATMENT_MACHINE_NAME), "TreatmentMachineName", "Treatment Machine Name", Exact(SH), Vm::Exact(1), false),
    E::new(Single(PRIMARY_DOSIMETER_UNIT), "PrimaryDosimeterUnit", "Primary Dosimeter Unit", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SOURCE_AXIS_DISTANCE), "SourceAxisDistance", "Source-Axis Distance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BEAM_LIMITING_DEVICE_SEQUENCE), "BeamLimitingDeviceSequence", "Beam Limiting Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_BEAM_LIMITING_DEVICE_TYPE), "RTBeamLimitingDeviceType", "RT Beam Limiting Device Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SOURCE_TO_BEAM_LIMITING_DEVICE_DISTANCE), "SourceToBeamLimitingDeviceDistance", "Source to Beam Limiting Device Distance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ISOCENTER_TO_BEAM_LIMITING_DEVICE_DISTANCE), "IsocenterToBeamLimitingDeviceDistance", "Isocenter to Beam Limiting Device Distance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_LEAF_JAW_PAIRS), "NumberOfLeafJawPairs", "Number of Leaf/Jaw Pairs", Exact(IS), Vm::Exact(1), false),
    E::new(Single(LEAF_POSITION_BOUNDARIES), "LeafPositionBoundaries", "Leaf Position Boundaries", Exact(DS), Vm::AtLeast(3), false),
    E::new(Single(BEAM_NUMBER), "BeamNumber", "Beam Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(BEAM_NAME), "BeamName", "Beam Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(BEAM_DESCRIPTION), "BeamDescription", "Beam Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(BEAM_TYPE), "BeamType", "Beam Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BEAM_DELIVERY_DURATION_LIMIT), "BeamDeliveryDurationLimit", "Beam Delivery Duration Limit", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RADIATION_TYPE), "RadiationType", "Radiation Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(HIGH_DOSE_TECHNIQUE_TYPE), "HighDoseTechniqueType", "High-Dose Technique Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REFERENCE_IMAGE_NUMBER), "ReferenceImageNumber", "Reference Image Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(PLANNED_VERIFICATION_IMAGE_SEQUENCE), "PlannedVerificationImageSequence", "Planned Verification Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(IMAGING_DEVICE_SPECIFIC_ACQUISITION_PARAMETERS), "ImagingDeviceSpecificAcquisitionParameters", "Imaging Device-Specific Acquisition Parameters", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(TREATMENT_DELIVERY_TYPE), "TreatmentDeliveryType", "Treatment Delivery Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_WEDGES), "NumberOfWedges", "Number of Wedges", Exact(IS), Vm::Exact(1), false),
    E::new(Single(WEDGE_SEQUENCE), "WedgeSequence", "Wedge Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(WEDGE_NUMBER), "WedgeNumber", "Wedge Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(WEDGE_TYPE), "WedgeType", "Wedge Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(WEDGE_ID), "WedgeID", "Wedge ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(WEDGE_ANGLE), "WedgeAngle", "Wedge Angle", Exact(IS), Vm::Exact(1), false),
    E::new(Single(WEDGE_FACTOR), "WedgeFactor", "Wedge Factor", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TOTAL_WEDGE_TRAY_WATER_EQUIVALENT_THICKNESS), "TotalWedgeTrayWaterEquivalentThickness", "Total Wedge Tray Water-Equivalent Thickness", Exact(FL), Vm::Exact(1), false),
    E::new(Single(WEDGE_ORIENTATION), "WedgeOrientation", "Wedge Orientation", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ISOCENTER_TO_WEDGE_TRAY_DISTANCE), "IsocenterToWedgeTrayDistance", "Isocenter to Wedge Tray Distance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SOURCE_TO_WEDGE_TRAY_DISTANCE), "SourceToWedgeTrayDistance", "Source to Wedge Tray Distance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(WEDGE_THIN_EDGE_POSITION), "WedgeThinEdgePosition", "Wedge Thin Edge Position", Exact(FL), Vm::Exact(1), false),
    E::new(Single(BOLUS_ID), "BolusID", "Bolus ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(BOLUS_DESCRIPTION), "BolusDescription", "Bolus Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(EFFECTIVE_WEDGE_ANGLE), "EffectiveWedgeAngle", "Effective Wedge Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_COMPENSATORS), "NumberOfCompensators", "Number of Compensators", Exact(IS), Vm::Exact(1), false),
    E::new(Single(MATERIAL_ID), "MaterialID", "Material ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(TOTAL_COMPENSATOR_TRAY_FACTOR), "TotalCompensatorTrayFactor", "Total Compensator Tray Factor", Exact(DS), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_SEQUENCE), "CompensatorSequence", "Compensator Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_NUMBER), "CompensatorNumber", "Compensator Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_ID), "CompensatorID", "Compensator ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SOURCE_TO_COMPENSATOR_TRAY_DISTANCE), "SourceToCompensatorTrayDistance", "Source to Compensator Tray Distance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_ROWS), "CompensatorRows", "Compensator Rows", Exact(IS), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_COLUMNS), "CompensatorColumns", "Compensator Columns", Exact(IS), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_PIXEL_SPACING), "CompensatorPixelSpacing", "Compensator Pixel Spacing", Exact(DS), Vm::Exact(2), false),
    E::new(Single(COMPENSATOR_POSITION), "CompensatorPosition", "Compensator Position", Exact(DS), Vm::Exact(2), false),
    E::new(Single(COMPENSATOR_TRANSMISSION_DATA), "CompensatorTransmissionData", "Compensator Transmission Data", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(COMPENSATOR_THICKNESS_DATA), "CompensatorThicknessData", "Compensator Thickness Data", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_BOLI), "NumberOfBoli", "Number of Boli", Exact(IS), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_TYPE), "CompensatorType", "Compensator Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_TRAY_ID), "CompensatorTrayID", "Compensator Tray ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_BLOCKS), "NumberOfBlocks", "Number of Blocks", Exact(IS), Vm::Exact(1), false),
    E::new(Single(TOTAL_BLOCK_TRAY_FACTOR), "TotalBlockTrayFactor", "Total Block Tray Factor", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TOTAL_BLOCK_TRAY_WATER_EQUIVALENT_THICKNESS), "TotalBlockTrayWaterEquivalentThickness", "Total Block Tray Water-Equivalent Thickness", Exact(FL), Vm::Exact(1), false),
    E::new(Single(BLOCK_SEQUENCE), "BlockSequence", "Block Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BLOCK_TRAY_ID), "BlockTrayID", "Block Tray ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SOURCE_TO_BLOCK_TRAY_DISTANCE), "SourceToBlockTrayDistance", "Source to Block Tray Distance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ISOCENTER_TO_BLOCK_TRAY_DISTANCE), "IsocenterToBlockTrayDistance", "Isocenter to Block Tray Distance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(BLOCK_TYPE), "BlockType", "Block Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ACCESSORY_CODE), "AccessoryCode", "Accessory Code", Exact(LO), Vm::Exact(1), false),
    E::new(Single(BLOCK_DIVERGENCE), "BlockDivergence", "Block Divergence", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BLOCK_MOUNTING_POSITION), "BlockMountingPosition", "Block Mounting Position", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BLOCK_NUMBER), "BlockNumber", "Block Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(BLOCK_NAME), "BlockName", "Block Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(BLOCK_THICKNESS), "BlockThickness", "Block Thickness", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BLOCK_TRANSMISSION), "BlockTransmission", "Block Transmission", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BLOCK_NUMBER_OF_POINTS), "BlockNumberOfPoints", "Block Number of Points", Exact(IS), Vm::Exact(1), false),
    E::new(Single(BLOCK_DATA), "BlockData", "Block Data", Exact(DS), Vm::MultipleOf(2), false),
    E::new(Single(APPLICATOR_SEQUENCE), "ApplicatorSequence", "Applicator Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(APPLICATOR_ID), "ApplicatorID", "Applicator ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(APPLICATOR_TYPE), "ApplicatorType", "Applicator Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(APPLICATOR_DESCRIPTION), "ApplicatorDescription", "Applicator Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CUMULATIVE_DOSE_REFERENCE_COEFFICIENT), "CumulativeDoseReferenceCoefficient", "Cumulative Dose Reference Coefficient", Exact(DS), Vm::Exact(1), false),
    E::new(Single(FINAL_CUMULATIVE_METERSET_WEIGHT), "FinalCumulativeMetersetWeight", "Final Cumulative Meterset Weight", Exact(DS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_CONTROL_POINTS), "NumberOfControlPoints", "Number of Control Points", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CONTROL_POINT_SEQUENCE), "ControlPointSequence", "Control Point Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTROL_POINT_INDEX), "ControlPointIndex", "Control Point Index", Exact(IS), Vm::Exact(1), false),
    E::new(Single(NOMINAL_BEAM_ENERGY), "NominalBeamEnergy", "Nominal Beam Energy", Exact(DS), Vm::Exact(1), false),
    E::new(Single(DOSE_RATE_SET), "DoseRateSet", "Dose Rate Set", Exact(DS), Vm::Exact(1), false),
    E::new(Single(WEDGE_POSITION_SEQUENCE), "WedgePositionSequence", "Wedge Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(WEDGE_POSITION), "WedgePosition", "Wedge Position", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BEAM_LIMITING_DEVICE_POSITION_SEQUENCE), "BeamLimitingDevicePositionSequence", "Beam Limiting Device Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LEAF_JAW_POSITIONS), "LeafJawPositions", "Leaf/Jaw Positions", Exact(DS), Vm::MultipleOf(2), false),
    E::new(Single(GANTRY_ANGLE), "GantryAngle", "Gantry Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(GANTRY_ROTATION_DIRECTION), "GantryRotationDirection", "Gantry Rotation Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BEAM_LIMITING_DEVICE_ANGLE), "BeamLimitingDeviceAngle", "Beam Limiting Device Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BEAM_LIMITING_DEVICE_ROTATION_DIRECTION), "BeamLimitingDeviceRotationDirection", "Beam Limiting Device Rotation Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_ANGLE), "PatientSupportAngle", "Patient Support Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_ROTATION_DIRECTION), "PatientSupportRotationDirection", "Patient Support Rotation Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_ECCENTRIC_AXIS_DISTANCE), "TableTopEccentricAxisDistance", "Table Top Eccentric Axis Distance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_ECCENTRIC_ANGLE), "TableTopEccentricAngle", "Table Top Eccentric Angle", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_ECCENTRIC_ROTATION_DIRECTION), "TableTopEccentricRotationDirection", "Table Top Eccentric Rotation Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_VERTICAL_POSITION), "TableTopVerticalPosition", "Table Top Vertical Position", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_LONGITUDINAL_POSITION), "TableTopLongitudinalPosition", "Table Top Longitudinal Position", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_LATERAL_POSITION), "TableTopLateralPosition", "Table Top Lateral Position", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ISOCENTER_POSITION), "IsocenterPosition", "Isocenter Position", Exact(DS), Vm::Exact(3), false),
    E::new(Single(SURFACE_ENTRY_POINT), "SurfaceEntryPoint", "Surface Entry Point", Exact(DS), Vm::Exact(3), false),
    E::new(Single(SOURCE_TO_SURFACE_DISTANCE), "SourceToSurfaceDistance", "Source to Surface Distance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_TO_EXTERIOR_CONTOUR_DISTANCE), "SourceToExteriorContourDistance", "Source to Exterior Contour Distance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(EXTERNAL_CONTOUR_ENTRY_POINT), "ExternalContourEntryPoint", "External Contour Entry Point", Exact(FL), Vm::Exact(3), false),
    E::new(Single(CUMULATIVE_METERSET_WEIGHT), "CumulativeMetersetWeight", "Cumulative Meterset Weight", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_PITCH_ANGLE), "TableTopPitchAngle", "Table Top Pitch Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_PITCH_ROTATION_DIRECTION), "TableTopPitchRotationDirection", "Table Top Pitch Rotation Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_ROLL_ANGLE), "TableTopRollAngle", "Table Top Roll Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_ROLL_ROTATION_DIRECTION), "TableTopRollRotationDirection", "Table Top Roll Rotation Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(HEAD_FIXATION_ANGLE), "HeadFixationAngle", "Head Fixation Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(GANTRY_PITCH_ANGLE), "GantryPitchAngle", "Gantry Pitch Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(GANTRY_PITCH_ROTATION_DIRECTION), "GantryPitchRotationDirection", "Gantry Pitch Rotation Direction", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GANTRY_PITCH_ANGLE_TOLERANCE), "GantryPitchAngleTolerance", "Gantry Pitch Angle Tolerance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(FIXATION_EYE), "FixationEye", "Fixation Eye", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CHAIR_HEAD_FRAME_POSITION), "ChairHeadFramePosition", "Chair Head Frame Position", Exact(DS), Vm::Exact(1), false),
    E::new(Single(HEAD_FIXATION_ANGLE_TOLERANCE), "HeadFixationAngleTolerance", "Head Fixation Angle Tolerance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CHAIR_HEAD_FRAME_POSITION_TOLERANCE), "ChairHeadFramePositionTolerance", "Chair Head Frame Position Tolerance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(FIXATION_LIGHT_AZIMUTHAL_ANGLE_TOLERANCE), "FixationLightAzimuthalAngleTolerance", "Fixation Light Azimuthal Angle Tolerance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(FIXATION_LIGHT_POLAR_ANGLE_TOLERANCE), "FixationLightPolarAngleTolerance", "Fixation Light Polar Angle Tolerance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(PATIENT_SETUP_SEQUENCE), "PatientSetupSequence", "Patient Setup Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_SETUP_NUMBER), "PatientSetupNumber", "Patient Setup Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(PATIENT_SETUP_LABEL), "PatientSetupLabel", "Patient Setup Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PATIENT_ADDITIONAL_POSITION), "PatientAdditionalPosition", "Patient Additional Position", Exact(LO), Vm::Exact(1), false),
    E::new(Single(FIXATION_DEVICE_SEQUENCE), "FixationDeviceSequence", "Fixation Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FIXATION_DEVICE_TYPE), "FixationDeviceType", "Fixation Device Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(FIXATION_DEVICE_LABEL), "FixationDeviceLabel", "Fixation Device Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(FIXATION_DEVICE_DESCRIPTION), "FixationDeviceDescription", "Fixation Device Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(FIXATION_DEVICE_POSITION), "FixationDevicePosition", "Fixation Device Position", Exact(SH), Vm::Exact(1), false),
    E::new(Single(FIXATION_DEVICE_PITCH_ANGLE), "FixationDevicePitchAngle", "Fixation Device Pitch Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(FIXATION_DEVICE_ROLL_ANGLE), "FixationDeviceRollAngle", "Fixation Device Roll Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SHIELDING_DEVICE_SEQUENCE), "ShieldingDeviceSequence", "Shielding Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SHIELDING_DEVICE_TYPE), "ShieldingDeviceType", "Shielding Device Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SHIELDING_DEVICE_LABEL), "ShieldingDeviceLabel", "Shielding Device Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SHIELDING_DEVICE_DESCRIPTION), "ShieldingDeviceDescription", "Shielding Device Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(SHIELDING_DEVICE_POSITION), "ShieldingDevicePosition", "Shielding Device Position", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SETUP_TECHNIQUE), "SetupTechnique", "Setup Technique", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SETUP_TECHNIQUE_DESCRIPTION), "SetupTechniqueDescription", "Setup Technique Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(SETUP_DEVICE_SEQUENCE), "SetupDeviceSequence", "Setup Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SETUP_DEVICE_TYPE), "SetupDeviceType", "Setup Device Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SETUP_DEVICE_LABEL), "SetupDeviceLabel", "Setup Device Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SETUP_DEVICE_DESCRIPTION), "SetupDeviceDescription", "Setup Device Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(SETUP_DEVICE_PARAMETER), "SetupDeviceParameter", "Setup Device Parameter", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SETUP_REFERENCE_DESCRIPTION), "SetupReferenceDescription", "Setup Reference Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_VERTICAL_SETUP_DISPLACEMENT), "TableTopVerticalSetupDisplacement", "Table Top Vertical Setup Displacement", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_LONGITUDINAL_SETUP_DISPLACEMENT), "TableTopLongitudinalSetupDisplacement", "Table Top Longitudinal Setup Displacement", Exact(DS), Vm::Exact(1), false),
    E::new(Single(TABLE_TOP_LATERAL_SETUP_DISPLACEMENT), "TableTopLateralSetupDisplacement", "Table Top Lateral Setup Displacement", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BRACHY_TREATMENT_TECHNIQUE), "BrachyTreatmentTechnique", "Brachy Treatment Technique", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BRACHY_TREATMENT_TYPE), "BrachyTreatmentType", "Brachy Treatment Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_MACHINE_SEQUENCE), "TreatmentMachineSequence", "Treatment Machine Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SOURCE_SEQUENCE), "SourceSequence", "Source Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SOURCE_NUMBER), "SourceNumber", "Source Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(SOURCE_TYPE), "SourceType", "Source Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SOURCE_MANUFACTURER), "SourceManufacturer", "Source Manufacturer", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ACTIVE_SOURCE_DIAMETER), "ActiveSourceDiameter", "Active Source Diameter", Exact(DS), Vm::Exact(1), false),
    E::new(Single(ACTIVE_SOURCE_LENGTH), "ActiveSourceLength", "Active Source Length", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_MODEL_ID), "SourceModelID", "Source Model ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SOURCE_DESCRIPTION), "SourceDescription", "Source Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SOURCE_ENCAPSULATION_NOMINAL_THICKNESS), "SourceEncapsulationNominalThickness", "Source Encapsulation Nominal Thickness", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_ENCAPSULATION_NOMINAL_TRANSMISSION), "SourceEncapsulationNominalTransmission", "Source Encapsulation Nominal Transmission", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_ISOTOPE_NAME), "SourceIsotopeName", "Source Isotope Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SOURCE_ISOTOPE_HALF_LIFE), "SourceIsotopeHalfLife", "Source Isotope Half Life", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_STRENGTH_UNITS), "SourceStrengthUnits", "Source Strength Units", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REFERENCE_AIR_KERMA_RATE), "ReferenceAirKermaRate", "Reference Air Kerma Rate", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_STRENGTH), "SourceStrength", "Source Strength", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_STRENGTH_REFERENCE_DATE), "SourceStrengthReferenceDate", "Source Strength Reference Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(SOURCE_STRENGTH_REFERENCE_TIME), "SourceStrengthReferenceTime", "Source Strength Reference Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(APPLICATION_SETUP_SEQUENCE), "ApplicationSetupSequence", "Application Setup Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(APPLICATION_SETUP_TYPE), "ApplicationSetupType", "Application Setup Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(APPLICATION_SETUP_NUMBER), "ApplicationSetupNumber", "Application Setup Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(APPLICATION_SETUP_NAME), "ApplicationSetupName", "Application Setup Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(APPLICATION_SETUP_MANUFACTURER), "ApplicationSetupManufacturer", "Application Setup Manufacturer", Exact(LO), Vm::Exact(1), false),
    E::new(Single(TEMPLATE_NUMBER), "TemplateNumber", "Template Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(TEMPLATE_TYPE), "TemplateType", "Template Type", Exact(SH), Vm::Exact(1), false),
    E::new(Single(TEMPLATE_NAME), "TemplateName", "Template Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(TOTAL_REFERENCE_AIR_KERMA), "TotalReferenceAirKerma", "Total Reference Air Kerma", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BRACHY_ACCESSORY_DEVICE_SEQUENCE), "BrachyAccessoryDeviceSequence", "Brachy Accessory Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BRACHY_ACCESSORY_DEVICE_NUMBER), "BrachyAccessoryDeviceNumber", "Brachy Accessory Device Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(BRACHY_ACCESSORY_DEVICE_ID), "BrachyAccessoryDeviceID", "Brachy Accessory Device ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(BRACHY_ACCESSORY_DEVICE_TYPE), "BrachyAccessoryDeviceType", "Brachy Accessory Device Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BRACHY_ACCESSORY_DEVICE_NAME), "BrachyAccessoryDeviceName", "Brachy Accessory Device Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(BRACHY_ACCESSORY_DEVICE_NOMINAL_THICKNESS), "BrachyAccessoryDeviceNominalThickness", "Brachy Accessory Device Nominal Thickness", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BRACHY_ACCESSORY_DEVICE_NOMINAL_TRANSMISSION), "BrachyAccessoryDeviceNominalTransmission", "Brachy Accessory Device Nominal Transmission", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_EFFECTIVE_LENGTH), "ChannelEffectiveLength", "Channel Effective Length", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_INNER_LENGTH), "ChannelInnerLength", "Channel Inner Length", Exact(DS), Vm::Exact(1), false),
    E::new(Single(AFTERLOADER_CHANNEL_ID), "AfterloaderChannelID", "Afterloader Channel ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SOURCE_APPLICATOR_TIP_LENGTH), "SourceApplicatorTipLength", "Source Applicator Tip Length", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_SEQUENCE), "ChannelSequence", "Channel Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CHANNEL_NUMBER), "ChannelNumber", "Channel Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_LENGTH), "ChannelLength", "Channel Length", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_TOTAL_TIME), "ChannelTotalTime", "Channel Total Time", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_MOVEMENT_TYPE), "SourceMovementType", "Source Movement Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_PULSES), "NumberOfPulses", "Number of Pulses", Exact(IS), Vm::Exact(1), false),
    E::new(Single(PULSE_REPETITION_INTERVAL), "PulseRepetitionInterval", "Pulse Repetition Interval", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_APPLICATOR_NUMBER), "SourceApplicatorNumber", "Source Applicator Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(SOURCE_APPLICATOR_ID), "SourceApplicatorID", "Source Applicator ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SOURCE_APPLICATOR_TYPE), "SourceApplicatorType", "Source Applicator Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SOURCE_APPLICATOR_NAME), "SourceApplicatorName", "Source Applicator Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SOURCE_APPLICATOR_LENGTH), "SourceApplicatorLength", "Source Applicator Length", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_APPLICATOR_MANUFACTURER), "SourceApplicatorManufacturer", "Source Applicator Manufacturer", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SOURCE_APPLICATOR_WALL_NOMINAL_THICKNESS), "SourceApplicatorWallNominalThickness", "Source Applicator Wall Nominal Thickness", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_APPLICATOR_WALL_NOMINAL_TRANSMISSION), "SourceApplicatorWallNominalTransmission", "Source Applicator Wall Nominal Transmission", Exact(DS), Vm::Exact(1), false),
    E::new(Single(SOURCE_APPLICATOR_STEP_SIZE), "SourceApplicatorStepSize", "Source Applicator Step Size", Exact(DS), Vm::Exact(1), false),
    E::new(Single(APPLICATOR_SHAPE_REFERENCED_ROI_NUMBER), "ApplicatorShapeReferencedROINumber", "Applicator Shape Referenced ROI Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(TRANSFER_TUBE_NUMBER), "TransferTubeNumber", "Transfer Tube Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(TRANSFER_TUBE_LENGTH), "TransferTubeLength", "Transfer Tube Length", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_SHIELD_SEQUENCE), "ChannelShieldSequence", "Channel Shield Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CHANNEL_SHIELD_NUMBER), "ChannelShieldNumber", "Channel Shield Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_SHIELD_ID), "ChannelShieldID", "Channel Shield ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(CHANNEL_SHIELD_NAME), "ChannelShieldName", "Channel Shield Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CHANNEL_SHIELD_NOMINAL_THICKNESS), "ChannelShieldNominalThickness", "Channel Shield Nominal Thickness", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CHANNEL_SHIELD_NOMINAL_TRANSMISSION), "ChannelShieldNominalTransmission", "Channel Shield Nominal Transmission", Exact(DS), Vm::Exact(1), false),
    E::new(Single(FINAL_CUMULATIVE_TIME_WEIGHT), "FinalCumulativeTimeWeight", "Final Cumulative Time Weight", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BRACHY_CONTROL_POINT_SEQUENCE), "BrachyControlPointSequence", "Brachy Control Point Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTROL_POINT_RELATIVE_POSITION), "ControlPointRelativePosition", "Control Point Relative Position", Exact(DS), Vm::Exact(1), false),
    E::new(Single(CONTROL_POINT3D_POSITION), "ControlPoint3DPosition", "Control Point 3D Position", Exact(DS), Vm::Exact(3), false),
    E::new(Single(CUMULATIVE_TIME_WEIGHT), "CumulativeTimeWeight", "Cumulative Time Weight", Exact(DS), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_DIVERGENCE), "CompensatorDivergence", "Compensator Divergence", Exact(CS), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_MOUNTING_POSITION), "CompensatorMountingPosition", "Compensator Mounting Position", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SOURCE_TO_COMPENSATOR_DISTANCE), "SourceToCompensatorDistance", "Source to Compensator Distance", Exact(DS), Vm::AtLeast(1), false),
    E::new(Single(TOTAL_COMPENSATOR_TRAY_WATER_EQUIVALENT_THICKNESS), "TotalCompensatorTrayWaterEquivalentThickness", "Total Compensator Tray Water-Equivalent Thickness", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ISOCENTER_TO_COMPENSATOR_TRAY_DISTANCE), "IsocenterToCompensatorTrayDistance", "Isocenter to Compensator Tray Distance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_COLUMN_OFFSET), "CompensatorColumnOffset", "Compensator Column Offset", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ISOCENTER_TO_COMPENSATOR_DISTANCES), "IsocenterToCompensatorDistances", "Isocenter to Compensator Distances", Exact(FL), Vm::AtLeast(1), false),
    E::new(Single(COMPENSATOR_RELATIVE_STOPPING_POWER_RATIO), "CompensatorRelativeStoppingPowerRatio", "Compensator Relative Stopping Power Ratio", Exact(FL), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_MILLING_TOOL_DIAMETER), "CompensatorMillingToolDiameter", "Compensator Milling Tool Diameter", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ION_RANGE_COMPENSATOR_SEQUENCE), "IonRangeCompensatorSequence", "Ion Range Compensator Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_DESCRIPTION), "CompensatorDescription", "Compensator Description", Exact(LT), Vm::Exact(1), false),
    E::new(Single(RADIATION_MASS_NUMBER), "RadiationMassNumber", "Radiation Mass Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(RADIATION_ATOMIC_NUMBER), "RadiationAtomicNumber", "Radiation Atomic Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(RADIATION_CHARGE_STATE), "RadiationChargeState", "Radiation Charge State", Exact(SS), Vm::Exact(1), false),
    E::new(Single(SCAN_MODE), "ScanMode", "Scan Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MODULATED_SCAN_MODE_TYPE), "ModulatedScanModeType", "Modulated Scan Mode Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(VIRTUAL_SOURCE_AXIS_DISTANCES), "VirtualSourceAxisDistances", "Virtual Source-Axis Distances", Exact(FL), Vm::Exact(2), false),
    E::new(Single(SNOUT_SEQUENCE), "SnoutSequence", "Snout Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SNOUT_POSITION), "SnoutPosition", "Snout Position", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SNOUT_ID), "SnoutID", "Snout ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_RANGE_SHIFTERS), "NumberOfRangeShifters", "Number of Range Shifters", Exact(IS), Vm::Exact(1), false),
    E::new(Single(RANGE_SHIFTER_SEQUENCE), "RangeShifterSequence", "Range Shifter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RANGE_SHIFTER_NUMBER), "RangeShifterNumber", "Range Shifter Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(RANGE_SHIFTER_ID), "RangeShifterID", "Range Shifter ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(RANGE_SHIFTER_TYPE), "RangeShifterType", "Range Shifter Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RANGE_SHIFTER_DESCRIPTION), "RangeShifterDescription", "Range Shifter Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_LATERAL_SPREADING_DEVICES), "NumberOfLateralSpreadingDevices", "Number of Lateral Spreading Devices", Exact(IS), Vm::Exact(1), false),
    E::new(Single(LATERAL_SPREADING_DEVICE_SEQUENCE), "LateralSpreadingDeviceSequence", "Lateral Spreading Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LATERAL_SPREADING_DEVICE_NUMBER), "LateralSpreadingDeviceNumber", "Lateral Spreading Device Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(LATERAL_SPREADING_DEVICE_ID), "LateralSpreadingDeviceID", "Lateral Spreading Device ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(LATERAL_SPREADING_DEVICE_TYPE), "LateralSpreadingDeviceType", "Lateral Spreading Device Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(LATERAL_SPREADING_DEVICE_DESCRIPTION), "LateralSpreadingDeviceDescription", "Lateral Spreading Device Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(LATERAL_SPREADING_DEVICE_WATER_EQUIVALENT_THICKNESS), "LateralSpreadingDeviceWaterEquivalentThickness", "Lateral Spreading Device Water Equivalent Thickness", Exact(FL), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_RANGE_MODULATORS), "NumberOfRangeModulators", "Number of Range Modulators", Exact(IS), Vm::Exact(1), false),
    E::new(Single(RANGE_MODULATOR_SEQUENCE), "RangeModulatorSequence", "Range Modulator Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RANGE_MODULATOR_NUMBER), "RangeModulatorNumber", "Range Modulator Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(RANGE_MODULATOR_ID), "RangeModulatorID", "Range Modulator ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(RANGE_MODULATOR_TYPE), "RangeModulatorType", "Range Modulator Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RANGE_MODULATOR_DESCRIPTION), "RangeModulatorDescription", "Range Modulator Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(BEAM_CURRENT_MODULATION_ID), "BeamCurrentModulationID", "Beam Current Modulation ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_TYPE), "PatientSupportType", "Patient Support Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_ID), "PatientSupportID", "Patient Support ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_ACCESSORY_CODE), "PatientSupportAccessoryCode", "Patient Support Accessory Code", Exact(LO), Vm::Exact(1), false),
    E::new(Single(TRAY_ACCESSORY_CODE), "TrayAccessoryCode", "Tray Accessory Code", Exact(LO), Vm::Exact(1), false),
    E::new(Single(FIXATION_LIGHT_AZIMUTHAL_ANGLE), "FixationLightAzimuthalAngle", "Fixation Light Azimuthal Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(FIXATION_LIGHT_POLAR_ANGLE), "FixationLightPolarAngle", "Fixation Light Polar Angle", Exact(FL), Vm::Exact(1), false),
    E::new(Single(METERSET_RATE), "MetersetRate", "Meterset Rate", Exact(FL), Vm::Exact(1), false),
    E::new(Single(RANGE_SHIFTER_SETTINGS_SEQUENCE), "RangeShifterSettingsSequence", "Range Shifter Settings Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RANGE_SHIFTER_SETTING), "RangeShifterSetting", "Range Shifter Setting", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ISOCENTER_TO_RANGE_SHIFTER_DISTANCE), "IsocenterToRangeShifterDistance", "Isocenter to Range Shifter Distance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(RANGE_SHIFTER_WATER_EQUIVALENT_THICKNESS), "RangeShifterWaterEquivalentThickness", "Range Shifter Water Equivalent Thickness", Exact(FL), Vm::Exact(1), false),
    E::new(Single(LATERAL_SPREADING_DEVICE_SETTINGS_SEQUENCE), "LateralSpreadingDeviceSettingsSequence", "Lateral Spreading Device Settings Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(LATERAL_SPREADING_DEVICE_SETTING), "LateralSpreadingDeviceSetting", "Lateral Spreading Device Setting", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ISOCENTER_TO_LATERAL_SPREADING_DEVICE_DISTANCE), "IsocenterToLateralSpreadingDeviceDistance", "Isocenter to Lateral Spreading Device Distance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(RANGE_MODULATOR_SETTINGS_SEQUENCE), "RangeModulatorSettingsSequence", "Range Modulator Settings Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RANGE_MODULATOR_GATING_START_VALUE), "RangeModulatorGatingStartValue", "Range Modulator Gating Start Value", Exact(FL), Vm::Exact(1), false),
    E::new(Single(RANGE_MODULATOR_GATING_STOP_VALUE), "RangeModulatorGatingStopValue", "Range Modulator Gating Stop Value", Exact(FL), Vm::Exact(1), false),
    E::new(Single(RANGE_MODULATOR_GATING_START_WATER_EQUIVALENT_THICKNESS), "RangeModulatorGatingStartWaterEquivalentThickness", "Range Modulator Gating Start Water Equivalent Thickness", Exact(FL), Vm::Exact(1), false),
    E::new(Single(RANGE_MODULATOR_GATING_STOP_WATER_EQUIVALENT_THICKNESS), "RangeModulatorGatingStopWaterEquivalentThickness", "Range Modulator Gating Stop Water Equivalent Thickness", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ISOCENTER_TO_RANGE_MODULATOR_DISTANCE), "IsocenterToRangeModulatorDistance", "Isocenter to Range Modulator Distance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SCAN_SPOT_TIME_OFFSET), "ScanSpotTimeOffset", "Scan Spot Time Offset", Exact(FL), Vm::AtLeast(1), false),
    E::new(Single(SCAN_SPOT_TUNE_ID), "ScanSpotTuneID", "Scan Spot Tune ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(SCAN_SPOT_PRESCRIBED_INDICES), "ScanSpotPrescribedIndices", "Scan Spot Prescribed Indices", Exact(IS), Vm::AtLeast(1), false),
    E::new(Single(NUMBER_OF_SCAN_SPOT_POSITIONS), "NumberOfScanSpotPositions", "Number of Scan Spot Positions", Exact(IS), Vm::Exact(1), false),
    E::new(Single(SCAN_SPOT_REORDERED), "ScanSpotReordered", "Scan Spot Reordered", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SCAN_SPOT_POSITION_MAP), "ScanSpotPositionMap", "Scan Spot Position Map", Exact(FL), Vm::AtLeast(1), false),
    E::new(Single(SCAN_SPOT_REORDERING_ALLOWED), "ScanSpotReorderingAllowed", "Scan Spot Reordering Allowed", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SCAN_SPOT_METERSET_WEIGHTS), "ScanSpotMetersetWeights", "Scan Spot Meterset Weights", Exact(FL), Vm::AtLeast(1), false),
    E::new(Single(SCANNING_SPOT_SIZE), "ScanningSpotSize", "Scanning Spot Size", Exact(FL), Vm::Exact(2), false),
    E::new(Single(SCAN_SPOT_SIZES_DELIVERED), "ScanSpotSizesDelivered", "Scan Spot Sizes Delivered", Exact(FL), Vm::MultipleOf(2), false),
    E::new(Single(NUMBER_OF_PAINTINGS), "NumberOfPaintings", "Number of Paintings", Exact(IS), Vm::Exact(1), false),
    E::new(Single(ION_TOLERANCE_TABLE_SEQUENCE), "IonToleranceTableSequence", "Ion Tolerance Table Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ION_BEAM_SEQUENCE), "IonBeamSequence", "Ion Beam Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ION_BEAM_LIMITING_DEVICE_SEQUENCE), "IonBeamLimitingDeviceSequence", "Ion Beam Limiting Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ION_BLOCK_SEQUENCE), "IonBlockSequence", "Ion Block Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ION_CONTROL_POINT_SEQUENCE), "IonControlPointSequence", "Ion Control Point Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ION_WEDGE_SEQUENCE), "IonWedgeSequence", "Ion Wedge Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ION_WEDGE_POSITION_SEQUENCE), "IonWedgePositionSequence", "Ion Wedge Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SETUP_IMAGE_SEQUENCE), "ReferencedSetupImageSequence", "Referenced Setup Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SETUP_IMAGE_COMMENT), "SetupImageComment", "Setup Image Comment", Exact(ST), Vm::Exact(1), false),
    E::new(Single(MOTION_SYNCHRONIZATION_SEQUENCE), "MotionSynchronizationSequence", "Motion Synchronization Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONTROL_POINT_ORIENTATION), "ControlPointOrientation", "Control Point Orientation", Exact(FL), Vm::Exact(3), false),
    E::new(Single(GENERAL_ACCESSORY_SEQUENCE), "GeneralAccessorySequence", "General Accessory Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(GENERAL_ACCESSORY_ID), "GeneralAccessoryID", "General Accessory ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(GENERAL_ACCESSORY_DESCRIPTION), "GeneralAccessoryDescription", "General Accessory Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(GENERAL_ACCESSORY_TYPE), "GeneralAccessoryType", "General Accessory Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(GENERAL_ACCESSORY_NUMBER), "GeneralAccessoryNumber", "General Accessory Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(SOURCE_TO_GENERAL_ACCESSORY_DISTANCE), "SourceToGeneralAccessoryDistance", "Source to General Accessory Distance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ISOCENTER_TO_GENERAL_ACCESSORY_DISTANCE), "IsocenterToGeneralAccessoryDistance", "Isocenter to General Accessory Distance", Exact(DS), Vm::Exact(1), false),
    E::new(Single(APPLICATOR_GEOMETRY_SEQUENCE), "ApplicatorGeometrySequence", "Applicator Geometry Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(APPLICATOR_APERTURE_SHAPE), "ApplicatorApertureShape", "Applicator Aperture Shape", Exact(CS), Vm::Exact(1), false),
    E::new(Single(APPLICATOR_OPENING), "ApplicatorOpening", "Applicator Opening", Exact(FL), Vm::Exact(1), false),
    E::new(Single(APPLICATOR_OPENING_X), "ApplicatorOpeningX", "Applicator Opening X", Exact(FL), Vm::Exact(1), false),
    E::new(Single(APPLICATOR_OPENING_Y), "ApplicatorOpeningY", "Applicator Opening Y", Exact(FL), Vm::Exact(1), false),
    E::new(Single(SOURCE_TO_APPLICATOR_MOUNTING_POSITION_DISTANCE), "SourceToApplicatorMountingPositionDistance", "Source to Applicator Mounting Position Distance", Exact(FL), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_BLOCK_SLAB_ITEMS), "NumberOfBlockSlabItems", "Number of Block Slab Items", Exact(IS), Vm::Exact(1), false),
    E::new(Single(BLOCK_SLAB_SEQUENCE), "BlockSlabSequence", "Block Slab Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BLOCK_SLAB_THICKNESS), "BlockSlabThickness", "Block Slab Thickness", Exact(DS), Vm::Exact(1), false),
    E::new(Single(BLOCK_SLAB_NUMBER), "BlockSlabNumber", "Block Slab Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(DEVICE_MOTION_CONTROL_SEQUENCE), "DeviceMotionControlSequence", "Device Motion Control Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DEVICE_MOTION_EXECUTION_MODE), "DeviceMotionExecutionMode", "Device Motion Execution Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DEVICE_MOTION_OBSERVATION_MODE), "DeviceMotionObservationMode", "Device Motion Observation Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DEVICE_MOTION_PARAMETER_CODE_SEQUENCE), "DeviceMotionParameterCodeSequence", "Device Motion Parameter Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DISTAL_DEPTH_FRACTION), "DistalDepthFraction", "Distal Depth Fraction", Exact(FL), Vm::Exact(1), false),
    E::new(Single(DISTAL_DEPTH), "DistalDepth", "Distal Depth", Exact(FL), Vm::Exact(1), false),
    E::new(Single(NOMINAL_RANGE_MODULATION_FRACTIONS), "NominalRangeModulationFractions", "Nominal Range Modulation Fractions", Exact(FL), Vm::Exact(2), false),
    E::new(Single(NOMINAL_RANGE_MODULATED_REGION_DEPTHS), "NominalRangeModulatedRegionDepths", "Nominal Range Modulated Region Depths", Exact(FL), Vm::Exact(2), false),
    E::new(Single(DEPTH_DOSE_PARAMETERS_SEQUENCE), "DepthDoseParametersSequence", "Depth Dose Parameters Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DELIVERED_DEPTH_DOSE_PARAMETERS_SEQUENCE), "DeliveredDepthDoseParametersSequence", "Delivered Depth Dose Parameters Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DELIVERED_DISTAL_DEPTH_FRACTION), "DeliveredDistalDepthFraction", "Delivered Distal Depth Fraction", Exact(FL), Vm::Exact(1), false),
    E::new(Single(DELIVERED_DISTAL_DEPTH), "DeliveredDistalDepth", "Delivered Distal Depth", Exact(FL), Vm::Exact(1), false),
    E::new(Single(DELIVERED_NOMINAL_RANGE_MODULATION_FRACTIONS), "DeliveredNominalRangeModulationFractions", "Delivered Nominal Range Modulation Fractions", Exact(FL), Vm::Exact(2), false),
    E::new(Single(DELIVERED_NOMINAL_RANGE_MODULATED_REGION_DEPTHS), "DeliveredNominalRangeModulatedRegionDepths", "Delivered Nominal Range Modulated Region Depths", Exact(FL), Vm::Exact(2), false),
    E::new(Single(DELIVERED_REFERENCE_DOSE_DEFINITION), "DeliveredReferenceDoseDefinition", "Delivered Reference Dose Definition", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REFERENCE_DOSE_DEFINITION), "ReferenceDoseDefinition", "Reference Dose Definition", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RT_CONTROL_POINT_INDEX), "RTControlPointIndex", "RT Control Point Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(RADIATION_GENERATION_MODE_INDEX), "RadiationGenerationModeIndex", "Radiation Generation Mode Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCED_DEFINED_DEVICE_INDEX), "ReferencedDefinedDeviceIndex", "Referenced Defined Device Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(RADIATION_DOSE_IDENTIFICATION_INDEX), "RadiationDoseIdentificationIndex", "Radiation Dose Identification Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_RT_CONTROL_POINTS), "NumberOfRTControlPoints", "Number of RT Control Points", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RADIATION_GENERATION_MODE_INDEX), "ReferencedRadiationGenerationModeIndex", "Referenced Radiation Generation Mode Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(TREATMENT_POSITION_INDEX), "TreatmentPositionIndex", "Treatment Position Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCED_DEVICE_INDEX), "ReferencedDeviceIndex", "Referenced Device Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(TREATMENT_POSITION_GROUP_LABEL), "TreatmentPositionGroupLabel", "Treatment Position Group Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(TREATMENT_POSITION_GROUP_UID), "TreatmentPositionGroupUID", "Treatment Position Group UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(TREATMENT_POSITION_GROUP_SEQUENCE), "TreatmentPositionGroupSequence", "Treatment Position Group Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_TREATMENT_POSITION_INDEX), "ReferencedTreatmentPositionIndex", "Referenced Treatment Position Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RADIATION_DOSE_IDENTIFICATION_INDEX), "ReferencedRadiationDoseIdentificationIndex", "Referenced Radiation Dose Identification Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_ACCESSORY_HOLDER_WATER_EQUIVALENT_THICKNESS), "RTAccessoryHolderWaterEquivalentThickness", "RT Accessory Holder Water-Equivalent Thickness", Exact(FD), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_ACCESSORY_HOLDER_DEVICE_INDEX), "ReferencedRTAccessoryHolderDeviceIndex", "Referenced RT Accessory Holder Device Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_ACCESSORY_HOLDER_SLOT_EXISTENCE_FLAG), "RTAccessoryHolderSlotExistenceFlag", "RT Accessory Holder Slot Existence Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RT_ACCESSORY_HOLDER_SLOT_SEQUENCE), "RTAccessoryHolderSlotSequence", "RT Accessory Holder Slot Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_ACCESSORY_HOLDER_SLOT_ID), "RTAccessoryHolderSlotID", "RT Accessory Holder Slot ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(RT_ACCESSORY_HOLDER_SLOT_DISTANCE), "RTAccessoryHolderSlotDistance", "RT Accessory Holder Slot Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RT_ACCESSORY_SLOT_DISTANCE), "RTAccessorySlotDistance", "RT Accessory Slot Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RT_ACCESSORY_HOLDER_DEFINITION_SEQUENCE), "RTAccessoryHolderDefinitionSequence", "RT Accessory Holder Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_ACCESSORY_DEVICE_SLOT_ID), "RTAccessoryDeviceSlotID", "RT Accessory Device Slot ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(RT_RADIATION_SEQUENCE), "RTRadiationSequence", "RT Radiation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIATION_DOSE_SEQUENCE), "RadiationDoseSequence", "Radiation Dose Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIATION_DOSE_IDENTIFICATION_SEQUENCE), "RadiationDoseIdentificationSequence", "Radiation Dose Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIATION_DOSE_IDENTIFICATION_LABEL), "RadiationDoseIdentificationLabel", "Radiation Dose Identification Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(REFERENCE_DOSE_TYPE), "ReferenceDoseType", "Reference Dose Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PRIMARY_DOSE_VALUE_INDICATOR), "PrimaryDoseValueIndicator", "Primary Dose Value Indicator", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DOSE_VALUES_SEQUENCE), "DoseValuesSequence", "Dose Values Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DOSE_VALUE_PURPOSE), "DoseValuePurpose", "Dose Value Purpose", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(REFERENCE_DOSE_POINT_COORDINATES), "ReferenceDosePointCoordinates", "Reference Dose Point Coordinates", Exact(FD), Vm::Exact(3), false),
    E::new(Single(RADIATION_DOSE_VALUES_PARAMETERS_SEQUENCE), "RadiationDoseValuesParametersSequence", "Radiation Dose Values Parameters Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(METERSET_TO_DOSE_MAPPING_SEQUENCE), "MetersetToDoseMappingSequence", "Meterset to Dose Mapping Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(EXPECTED_IN_VIVO_MEASUREMENT_VALUES_SEQUENCE), "ExpectedInVivoMeasurementValuesSequence", "Expected In-Vivo Measurement Values Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(EXPECTED_IN_VIVO_MEASUREMENT_VALUE_INDEX), "ExpectedInVivoMeasurementValueIndex", "Expected In-Vivo Measurement Value Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(RADIATION_DOSE_IN_VIVO_MEASUREMENT_LABEL), "RadiationDoseInVivoMeasurementLabel", "Radiation Dose In-Vivo Measurement Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(RADIATION_DOSE_CENTRAL_AXIS_DISPLACEMENT), "RadiationDoseCentralAxisDisplacement", "Radiation Dose Central Axis Displacement", Exact(FD), Vm::Exact(2), false),
    E::new(Single(RADIATION_DOSE_VALUE), "RadiationDoseValue", "Radiation Dose Value", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RADIATION_DOSE_SOURCE_TO_SKIN_DISTANCE), "RadiationDoseSourceToSkinDistance", "Radiation Dose Source to Skin Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RADIATION_DOSE_MEASUREMENT_POINT_COORDINATES), "RadiationDoseMeasurementPointCoordinates", "Radiation Dose Measurement Point Coordinates", Exact(FD), Vm::Exact(3), false),
    E::new(Single(RADIATION_DOSE_SOURCE_TO_EXTERNAL_CONTOUR_DISTANCE), "RadiationDoseSourceToExternalContourDistance", "Radiation Dose Source to External Contour Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RT_TOLERANCE_SET_SEQUENCE), "RTToleranceSetSequence", "RT Tolerance Set Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_TOLERANCE_SET_LABEL), "RTToleranceSetLabel", "RT Tolerance Set Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ATTRIBUTE_TOLERANCE_VALUES_SEQUENCE), "AttributeToleranceValuesSequence", "Attribute Tolerance Values Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TOLERANCE_VALUE), "ToleranceValue", "Tolerance Value", Exact(FD), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_POSITION_TOLERANCE_SEQUENCE), "PatientSupportPositionToleranceSequence", "Patient Support Position Tolerance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TIME_LIMIT), "TreatmentTimeLimit", "Treatment Time Limit", Exact(FD), Vm::Exact(1), false),
    E::new(Single(C_ARM_PHOTON_ELECTRON_CONTROL_POINT_SEQUENCE), "CArmPhotonElectronControlPointSequence", "C-Arm Photon-Electron Control Point Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_RADIATION_SEQUENCE), "ReferencedRTRadiationSequence", "Referenced RT Radiation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_INSTANCE_SEQUENCE), "ReferencedRTInstanceSequence", "Referenced RT Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_PATIENT_SETUP_SEQUENCE), "ReferencedRTPatientSetupSequence", "Referenced RT Patient Setup Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(SOURCE_TO_PATIENT_SURFACE_DISTANCE), "SourceToPatientSurfaceDistance", "Source to Patient Surface Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(TREATMENT_MACHINE_SPECIAL_MODE_CODE_SEQUENCE), "TreatmentMachineSpecialModeCodeSequence", "Treatment Machine Special Mode Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INTENDED_NUMBER_OF_FRACTIONS), "IntendedNumberOfFractions", "Intended Number of Fractions", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_RADIATION_SET_INTENT), "RTRadiationSetIntent", "RT Radiation Set Intent", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RT_RADIATION_PHYSICAL_AND_GEOMETRIC_CONTENT_DETAIL_FLAG), "RTRadiationPhysicalAndGeometricContentDetailFlag", "RT Radiation Physical and Geometric Content Detail Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RT_RECORD_FLAG), "RTRecordFlag", "RT Record Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_DEVICE_IDENTIFICATION_SEQUENCE), "TreatmentDeviceIdentificationSequence", "Treatment Device Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_PHYSICIAN_INTENT_SEQUENCE), "ReferencedRTPhysicianIntentSequence", "Referenced RT Physician Intent Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CUMULATIVE_METERSET), "CumulativeMeterset", "Cumulative Meterset", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DELIVERY_RATE), "DeliveryRate", "Delivery Rate", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DELIVERY_RATE_UNIT_SEQUENCE), "DeliveryRateUnitSequence", "Delivery Rate Unit Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TREATMENT_POSITION_SEQUENCE), "TreatmentPositionSequence", "Treatment Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIATION_SOURCE_AXIS_DISTANCE), "RadiationSourceAxisDistance", "Radiation Source-Axis Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_RT_BEAM_LIMITING_DEVICES), "NumberOfRTBeamLimitingDevices", "Number of RT Beam Limiting Devices", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_BEAM_LIMITING_DEVICE_PROXIMAL_DISTANCE), "RTBeamLimitingDeviceProximalDistance", "RT Beam Limiting Device Proximal Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RT_BEAM_LIMITING_DEVICE_DISTAL_DISTANCE), "RTBeamLimitingDeviceDistalDistance", "RT Beam Limiting Device Distal Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(PARALLEL_RT_BEAM_DELIMITER_DEVICE_ORIENTATION_LABEL_CODE_SEQUENCE), "ParallelRTBeamDelimiterDeviceOrientationLabelCodeSequence", "Parallel RT Beam Delimiter Device Orientation Label Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BEAM_MODIFIER_ORIENTATION_ANGLE), "BeamModifierOrientationAngle", "Beam Modifier Orientation Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(FIXED_RT_BEAM_DELIMITER_DEVICE_SEQUENCE), "FixedRTBeamDelimiterDeviceSequence", "Fixed RT Beam Delimiter Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PARALLEL_RT_BEAM_DELIMITER_DEVICE_SEQUENCE), "ParallelRTBeamDelimiterDeviceSequence", "Parallel RT Beam Delimiter Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_PARALLEL_RT_BEAM_DELIMITERS), "NumberOfParallelRTBeamDelimiters", "Number of Parallel RT Beam Delimiters", Exact(US), Vm::Exact(1), false),
    E::new(Single(PARALLEL_RT_BEAM_DELIMITER_BOUNDARIES), "ParallelRTBeamDelimiterBoundaries", "Parallel RT Beam Delimiter Boundaries", Exact(FD), Vm::AtLeast(2), false),
    E::new(Single(PARALLEL_RT_BEAM_DELIMITER_POSITIONS), "ParallelRTBeamDelimiterPositions", "Parallel RT Beam Delimiter Positions", Exact(FD), Vm::AtLeast(2), false),
    E::new(Single(RT_BEAM_LIMITING_DEVICE_OFFSET), "RTBeamLimitingDeviceOffset", "RT Beam Limiting Device Offset", Exact(FD), Vm::Exact(2), false),
    E::new(Single(RT_BEAM_DELIMITER_GEOMETRY_SEQUENCE), "RTBeamDelimiterGeometrySequence", "RT Beam Delimiter Geometry Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_BEAM_LIMITING_DEVICE_DEFINITION_SEQUENCE), "RTBeamLimitingDeviceDefinitionSequence", "RT Beam Limiting Device Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PARALLEL_RT_BEAM_DELIMITER_OPENING_MODE), "ParallelRTBeamDelimiterOpeningMode", "Parallel RT Beam Delimiter Opening Mode", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PARALLEL_RT_BEAM_DELIMITER_LEAF_MOUNTING_SIDE), "ParallelRTBeamDelimiterLeafMountingSide", "Parallel RT Beam Delimiter Leaf Mounting Side", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(PATIENT_SETUP_UID), "PatientSetupUID", "Patient Setup UID", Exact(UI), Vm::Exact(1), true),
    E::new(Single(WEDGE_DEFINITION_SEQUENCE), "WedgeDefinitionSequence", "Wedge Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIATION_BEAM_WEDGE_ANGLE), "RadiationBeamWedgeAngle", "Radiation Beam Wedge Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RADIATION_BEAM_WEDGE_THIN_EDGE_DISTANCE), "RadiationBeamWedgeThinEdgeDistance", "Radiation Beam Wedge Thin Edge Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RADIATION_BEAM_EFFECTIVE_WEDGE_ANGLE), "RadiationBeamEffectiveWedgeAngle", "Radiation Beam Effective Wedge Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_WEDGE_POSITIONS), "NumberOfWedgePositions", "Number of Wedge Positions", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_BEAM_LIMITING_DEVICE_OPENING_SEQUENCE), "RTBeamLimitingDeviceOpeningSequence", "RT Beam Limiting Device Opening Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_RT_BEAM_LIMITING_DEVICE_OPENINGS), "NumberOfRTBeamLimitingDeviceOpenings", "Number of RT Beam Limiting Device Openings", Exact(US), Vm::Exact(1), false),
    E::new(Single(RADIATION_DOSIMETER_UNIT_SEQUENCE), "RadiationDosimeterUnitSequence", "Radiation Dosimeter Unit Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_DEVICE_DISTANCE_REFERENCE_LOCATION_CODE_SEQUENCE), "RTDeviceDistanceReferenceLocationCodeSequence", "RT Device Distance Reference Location Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIATION_DEVICE_CONFIGURATION_AND_COMMISSIONING_KEY_SEQUENCE), "RadiationDeviceConfigurationAndCommissioningKeySequence", "Radiation Device Configuration and Commissioning Key Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_POSITION_PARAMETER_SEQUENCE), "PatientSupportPositionParameterSequence", "Patient Support Position Parameter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_POSITION_SPECIFICATION_METHOD), "PatientSupportPositionSpecificationMethod", "Patient Support Position Specification Method", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_POSITION_DEVICE_PARAMETER_SEQUENCE), "PatientSupportPositionDeviceParameterSequence", "Patient Support Position Device Parameter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DEVICE_ORDER_INDEX), "DeviceOrderIndex", "Device Order Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_POSITION_PARAMETER_ORDER_INDEX), "PatientSupportPositionParameterOrderIndex", "Patient Support Position Parameter Order Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_POSITION_DEVICE_TOLERANCE_SEQUENCE), "PatientSupportPositionDeviceToleranceSequence", "Patient Support Position Device Tolerance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_POSITION_TOLERANCE_ORDER_INDEX), "PatientSupportPositionToleranceOrderIndex", "Patient Support Position Tolerance Order Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_DEFINITION_SEQUENCE), "CompensatorDefinitionSequence", "Compensator Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_MAP_ORIENTATION), "CompensatorMapOrientation", "Compensator Map Orientation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_PROXIMAL_THICKNESS_MAP), "CompensatorProximalThicknessMap", "Compensator Proximal Thickness Map", Exact(OF), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_DISTAL_THICKNESS_MAP), "CompensatorDistalThicknessMap", "Compensator Distal Thickness Map", Exact(OF), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_BASE_PLANE_OFFSET), "CompensatorBasePlaneOffset", "Compensator Base Plane Offset", Exact(FD), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_SHAPE_FABRICATION_CODE_SEQUENCE), "CompensatorShapeFabricationCodeSequence", "Compensator Shape Fabrication Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMPENSATOR_SHAPE_SEQUENCE), "CompensatorShapeSequence", "Compensator Shape Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIATION_BEAM_COMPENSATOR_MILLING_TOOL_DIAMETER), "RadiationBeamCompensatorMillingToolDiameter", "Radiation Beam Compensator Milling Tool Diameter", Exact(FD), Vm::Exact(1), false),
    E::new(Single(BLOCK_DEFINITION_SEQUENCE), "BlockDefinitionSequence", "Block Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BLOCK_EDGE_DATA), "BlockEdgeData", "Block Edge Data", Exact(OF), Vm::Exact(1), false),
    E::new(Single(BLOCK_ORIENTATION), "BlockOrientation", "Block Orientation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RADIATION_BEAM_BLOCK_THICKNESS), "RadiationBeamBlockThickness", "Radiation Beam Block Thickness", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RADIATION_BEAM_BLOCK_SLAB_THICKNESS), "RadiationBeamBlockSlabThickness", "Radiation Beam Block Slab Thickness", Exact(FD), Vm::Exact(1), false),
    E::new(Single(BLOCK_EDGE_DATA_SEQUENCE), "BlockEdgeDataSequence", "Block Edge Data Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_RT_ACCESSORY_HOLDERS), "NumberOfRTAccessoryHolders", "Number of RT Accessory Holders", Exact(US), Vm::Exact(1), false),
    E::new(Single(GENERAL_ACCESSORY_DEFINITION_SEQUENCE), "GeneralAccessoryDefinitionSequence", "General Accessory Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_GENERAL_ACCESSORIES), "NumberOfGeneralAccessories", "Number of General Accessories", Exact(US), Vm::Exact(1), false),
    E::new(Single(BOLUS_DEFINITION_SEQUENCE), "BolusDefinitionSequence", "Bolus Definition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_BOLUSES), "NumberOfBoluses", "Number of Boluses", Exact(US), Vm::Exact(1), false),
    E::new(Single(EQUIPMENT_FRAME_OF_REFERENCE_UID), "EquipmentFrameOfReferenceUID", "Equipment Frame of Reference UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(EQUIPMENT_FRAME_OF_REFERENCE_DESCRIPTION), "EquipmentFrameOfReferenceDescription", "Equipment Frame of Reference Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(EQUIPMENT_REFERENCE_POINT_COORDINATES_SEQUENCE), "EquipmentReferencePointCoordinatesSequence", "Equipment Reference Point Coordinates Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(EQUIPMENT_REFERENCE_POINT_CODE_SEQUENCE), "EquipmentReferencePointCodeSequence", "Equipment Reference Point Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_BEAM_LIMITING_DEVICE_ANGLE), "RTBeamLimitingDeviceAngle", "RT Beam Limiting Device Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(SOURCE_ROLL_ANGLE), "SourceRollAngle", "Source Roll Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RADIATION_GENERATION_MODE_SEQUENCE), "RadiationGenerationModeSequence", "Radiation Generation Mode Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIATION_GENERATION_MODE_LABEL), "RadiationGenerationModeLabel", "Radiation Generation Mode Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(RADIATION_GENERATION_MODE_DESCRIPTION), "RadiationGenerationModeDescription", "Radiation Generation Mode Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(RADIATION_GENERATION_MODE_MACHINE_CODE_SEQUENCE), "RadiationGenerationModeMachineCodeSequence", "Radiation Generation Mode Machine Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIATION_TYPE_CODE_SEQUENCE), "RadiationTypeCodeSequence", "Radiation Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NOMINAL_ENERGY), "NominalEnergy", "Nominal Energy", Exact(DS), Vm::Exact(1), false),
    E::new(Single(MINIMUM_NOMINAL_ENERGY), "MinimumNominalEnergy", "Minimum Nominal Energy", Exact(DS), Vm::Exact(1), false),
    E::new(Single(MAXIMUM_NOMINAL_ENERGY), "MaximumNominalEnergy", "Maximum Nominal Energy", Exact(DS), Vm::Exact(1), false),
    E::new(Single(RADIATION_FLUENCE_MODIFIER_CODE_SEQUENCE), "RadiationFluenceModifierCodeSequence", "Radiation Fluence Modifier Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ENERGY_UNIT_CODE_SEQUENCE), "EnergyUnitCodeSequence", "Energy Unit Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_RADIATION_GENERATION_MODES), "NumberOfRadiationGenerationModes", "Number of Radiation Generation Modes", Exact(US), Vm::Exact(1), false),
    E::new(Single(PATIENT_SUPPORT_DEVICES_SEQUENCE), "PatientSupportDevicesSequence", "Patient Support Devices Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_PATIENT_SUPPORT_DEVICES), "NumberOfPatientSupportDevices", "Number of Patient Support Devices", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_BEAM_MODIFIER_DEFINITION_DISTANCE), "RTBeamModifierDefinitionDistance", "RT Beam Modifier Definition Distance", Exact(FD), Vm::Exact(1), false),
    E::new(Single(BEAM_AREA_LIMIT_SEQUENCE), "BeamAreaLimitSequence", "Beam Area Limit Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_PRESCRIPTION_SEQUENCE), "ReferencedRTPrescriptionSequence", "Referenced RT Prescription Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DOSE_VALUE_INTERPRETATION), "DoseValueInterpretation", "Dose Value Interpretation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_SESSION_UID), "TreatmentSessionUID", "Treatment Session UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(RT_RADIATION_USAGE), "RTRadiationUsage", "RT Radiation Usage", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_RADIATION_SET_SEQUENCE), "ReferencedRTRadiationSetSequence", "Referenced RT Radiation Set Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_RADIATION_RECORD_SEQUENCE), "ReferencedRTRadiationRecordSequence", "Referenced RT Radiation Record Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_RADIATION_SET_DELIVERY_NUMBER), "RTRadiationSetDeliveryNumber", "RT Radiation Set Delivery Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(CLINICAL_FRACTION_NUMBER), "ClinicalFractionNumber", "Clinical Fraction Number", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_TREATMENT_FRACTION_COMPLETION_STATUS), "RTTreatmentFractionCompletionStatus", "RT Treatment Fraction Completion Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RT_RADIATION_SET_USAGE), "RTRadiationSetUsage", "RT Radiation Set Usage", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_DELIVERY_CONTINUATION_FLAG), "TreatmentDeliveryContinuationFlag", "Treatment Delivery Continuation Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_RECORD_CONTENT_ORIGIN), "TreatmentRecordContentOrigin", "Treatment Record Content Origin", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RT_TREATMENT_TERMINATION_STATUS), "RTTreatmentTerminationStatus", "RT Treatment Termination Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RT_TREATMENT_TERMINATION_REASON_CODE_SEQUENCE), "RTTreatmentTerminationReasonCodeSequence", "RT Treatment Termination Reason Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MACHINE_SPECIFIC_TREATMENT_TERMINATION_CODE_SEQUENCE), "MachineSpecificTreatmentTerminationCodeSequence", "Machine-Specific Treatment Termination Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_RADIATION_SALVAGE_RECORD_CONTROL_POINT_SEQUENCE), "RTRadiationSalvageRecordControlPointSequence", "RT Radiation Salvage Record Control Point Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(STARTING_METERSET_VALUE_KNOWN_FLAG), "StartingMetersetValueKnownFlag", "Starting Meterset Value Known Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TERMINATION_DESCRIPTION), "TreatmentTerminationDescription", "Treatment Termination Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TOLERANCE_VIOLATION_SEQUENCE), "TreatmentToleranceViolationSequence", "Treatment Tolerance Violation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TOLERANCE_VIOLATION_CATEGORY), "TreatmentToleranceViolationCategory", "Treatment Tolerance Violation Category", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TOLERANCE_VIOLATION_ATTRIBUTE_SEQUENCE), "TreatmentToleranceViolationAttributeSequence", "Treatment Tolerance Violation Attribute Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TOLERANCE_VIOLATION_DESCRIPTION), "TreatmentToleranceViolationDescription", "Treatment Tolerance Violation Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TOLERANCE_VIOLATION_IDENTIFICATION), "TreatmentToleranceViolationIdentification", "Treatment Tolerance Violation Identification", Exact(ST), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TOLERANCE_VIOLATION_DATE_TIME), "TreatmentToleranceViolationDateTime", "Treatment Tolerance Violation DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(RECORDED_RT_CONTROL_POINT_DATE_TIME), "RecordedRTControlPointDateTime", "Recorded RT Control Point DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RADIATION_RT_CONTROL_POINT_INDEX), "ReferencedRadiationRTControlPointIndex", "Referenced Radiation RT Control Point Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(ALTERNATE_VALUE_SEQUENCE), "AlternateValueSequence", "Alternate Value Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONFIRMATION_SEQUENCE), "ConfirmationSequence", "Confirmation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INTERLOCK_SEQUENCE), "InterlockSequence", "Interlock Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INTERLOCK_DATE_TIME), "InterlockDateTime", "Interlock DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(INTERLOCK_DESCRIPTION), "InterlockDescription", "Interlock Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(INTERLOCK_ORIGINATING_DEVICE_SEQUENCE), "InterlockOriginatingDeviceSequence", "Interlock Originating Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INTERLOCK_CODE_SEQUENCE), "InterlockCodeSequence", "Interlock Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INTERLOCK_RESOLUTION_CODE_SEQUENCE), "InterlockResolutionCodeSequence", "Interlock Resolution Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INTERLOCK_RESOLUTION_USER_SEQUENCE), "InterlockResolutionUserSequence", "Interlock Resolution User Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(OVERRIDE_DATE_TIME), "OverrideDateTime", "Override DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TOLERANCE_VIOLATION_TYPE_CODE_SEQUENCE), "TreatmentToleranceViolationTypeCodeSequence", "Treatment Tolerance Violation Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TOLERANCE_VIOLATION_CAUSE_CODE_SEQUENCE), "TreatmentToleranceViolationCauseCodeSequence", "Treatment Tolerance Violation Cause Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MEASURED_METERSET_TO_DOSE_MAPPING_SEQUENCE), "MeasuredMetersetToDoseMappingSequence", "Measured Meterset to Dose Mapping Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_EXPECTED_IN_VIVO_MEASUREMENT_VALUE_INDEX), "ReferencedExpectedInVivoMeasurementValueIndex", "Referenced Expected In-Vivo Measurement Value Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(DOSE_MEASUREMENT_DEVICE_CODE_SEQUENCE), "DoseMeasurementDeviceCodeSequence", "Dose Measurement Device Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ADDITIONAL_PARAMETER_RECORDING_INSTANCE_SEQUENCE), "AdditionalParameterRecordingInstanceSequence", "Additional Parameter Recording Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INTERLOCK_ORIGIN_DESCRIPTION), "InterlockOriginDescription", "Interlock Origin Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(RT_PATIENT_POSITION_SCOPE_SEQUENCE), "RTPatientPositionScopeSequence", "RT Patient Position Scope Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_TREATMENT_POSITION_GROUP_UID), "ReferencedTreatmentPositionGroupUID", "Referenced Treatment Position Group UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(RADIATION_ORDER_INDEX), "RadiationOrderIndex", "Radiation Order Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(OMITTED_RADIATION_SEQUENCE), "OmittedRadiationSequence", "Omitted Radiation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_OMISSION_CODE_SEQUENCE), "ReasonForOmissionCodeSequence", "Reason for Omission Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_DELIVERY_START_PATIENT_POSITION_SEQUENCE), "RTDeliveryStartPatientPositionSequence", "RT Delivery Start Patient Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_TREATMENT_PREPARATION_PATIENT_POSITION_SEQUENCE), "RTTreatmentPreparationPatientPositionSequence", "RT Treatment Preparation Patient Position Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_TREATMENT_PREPARATION_SEQUENCE), "ReferencedRTTreatmentPreparationSequence", "Referenced RT Treatment Preparation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_PATIENT_SETUP_PHOTO_SEQUENCE), "ReferencedPatientSetupPhotoSequence", "Referenced Patient Setup Photo Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_TREATMENT_PREPARATION_METHOD_CODE_SEQUENCE), "PatientTreatmentPreparationMethodCodeSequence", "Patient Treatment Preparation Method Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_TREATMENT_PREPARATION_PROCEDURE_PARAMETER_DESCRIPTION), "PatientTreatmentPreparationProcedureParameterDescription", "Patient Treatment Preparation Procedure Parameter Description", Exact(LT), Vm::Exact(1), false),
    E::new(Single(PATIENT_TREATMENT_PREPARATION_DEVICE_SEQUENCE), "PatientTreatmentPreparationDeviceSequence", "Patient Treatment Preparation Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_TREATMENT_PREPARATION_PROCEDURE_SEQUENCE), "PatientTreatmentPreparationProcedureSequence", "Patient Treatment Preparation Procedure Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_TREATMENT_PREPARATION_PROCEDURE_CODE_SEQUENCE), "PatientTreatmentPreparationProcedureCodeSequence", "Patient Treatment Preparation Procedure Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_TREATMENT_PREPARATION_METHOD_DESCRIPTION), "PatientTreatmentPreparationMethodDescription", "Patient Treatment Preparation Method Description", Exact(LT), Vm::Exact(1), false),
    E::new(Single(PATIENT_TREATMENT_PREPARATION_PROCEDURE_PARAMETER_SEQUENCE), "PatientTreatmentPreparationProcedureParameterSequence", "Patient Treatment Preparation Procedure Parameter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_SETUP_PHOTO_DESCRIPTION), "PatientSetupPhotoDescription", "Patient Setup Photo Description", Exact(LT), Vm::Exact(1), false),
    E::new(Single(PATIENT_TREATMENT_PREPARATION_PROCEDURE_INDEX), "PatientTreatmentPreparationProcedureIndex", "Patient Treatment Preparation Procedure Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCED_PATIENT_SETUP_PROCEDURE_INDEX), "ReferencedPatientSetupProcedureIndex", "Referenced Patient Setup Procedure Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_PLAN_SEQUENCE), "ReferencedRTPlanSequence", "Referenced RT Plan Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_BEAM_SEQUENCE), "ReferencedBeamSequence", "Referenced Beam Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_BEAM_NUMBER), "ReferencedBeamNumber", "Referenced Beam Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_REFERENCE_IMAGE_NUMBER), "ReferencedReferenceImageNumber", "Referenced Reference Image Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(START_CUMULATIVE_METERSET_WEIGHT), "StartCumulativeMetersetWeight", "Start Cumulative Meterset Weight", Exact(DS), Vm::Exact(1), false),
    E::new(Single(END_CUMULATIVE_METERSET_WEIGHT), "EndCumulativeMetersetWeight", "End Cumulative Meterset Weight", Exact(DS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_BRACHY_APPLICATION_SETUP_SEQUENCE), "ReferencedBrachyApplicationSetupSequence", "Referenced Brachy Application Setup Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_BRACHY_APPLICATION_SETUP_NUMBER), "ReferencedBrachyApplicationSetupNumber", "Referenced Brachy Application Setup Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SOURCE_NUMBER), "ReferencedSourceNumber", "Referenced Source Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_FRACTION_GROUP_SEQUENCE), "ReferencedFractionGroupSequence", "Referenced Fraction Group Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_FRACTION_GROUP_NUMBER), "ReferencedFractionGroupNumber", "Referenced Fraction Group Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_VERIFICATION_IMAGE_SEQUENCE), "ReferencedVerificationImageSequence", "Referenced Verification Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_REFERENCE_IMAGE_SEQUENCE), "ReferencedReferenceImageSequence", "Referenced Reference Image Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_DOSE_REFERENCE_SEQUENCE), "ReferencedDoseReferenceSequence", "Referenced Dose Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_DOSE_REFERENCE_NUMBER), "ReferencedDoseReferenceNumber", "Referenced Dose Reference Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(BRACHY_REFERENCED_DOSE_REFERENCE_SEQUENCE), "BrachyReferencedDoseReferenceSequence", "Brachy Referenced Dose Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_STRUCTURE_SET_SEQUENCE), "ReferencedStructureSetSequence", "Referenced Structure Set Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_PATIENT_SETUP_NUMBER), "ReferencedPatientSetupNumber", "Referenced Patient Setup Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_DOSE_SEQUENCE), "ReferencedDoseSequence", "Referenced Dose Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_TOLERANCE_TABLE_NUMBER), "ReferencedToleranceTableNumber", "Referenced Tolerance Table Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_BOLUS_SEQUENCE), "ReferencedBolusSequence", "Referenced Bolus Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_WEDGE_NUMBER), "ReferencedWedgeNumber", "Referenced Wedge Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_COMPENSATOR_NUMBER), "ReferencedCompensatorNumber", "Referenced Compensator Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_BLOCK_NUMBER), "ReferencedBlockNumber", "Referenced Block Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_CONTROL_POINT_INDEX), "ReferencedControlPointIndex", "Referenced Control Point Index", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_CONTROL_POINT_SEQUENCE), "ReferencedControlPointSequence", "Referenced Control Point Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_START_CONTROL_POINT_INDEX), "ReferencedStartControlPointIndex", "Referenced Start Control Point Index", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_STOP_CONTROL_POINT_INDEX), "ReferencedStopControlPointIndex", "Referenced Stop Control Point Index", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RANGE_SHIFTER_NUMBER), "ReferencedRangeShifterNumber", "Referenced Range Shifter Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_LATERAL_SPREADING_DEVICE_NUMBER), "ReferencedLateralSpreadingDeviceNumber", "Referenced Lateral Spreading Device Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RANGE_MODULATOR_NUMBER), "ReferencedRangeModulatorNumber", "Referenced Range Modulator Number", Exact(IS), Vm::Exact(1), false),
    E::new(Single(OMITTED_BEAM_TASK_SEQUENCE), "OmittedBeamTaskSequence", "Omitted Beam Task Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_OMISSION), "ReasonForOmission", "Reason for Omission", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_OMISSION_DESCRIPTION), "ReasonForOmissionDescription", "Reason for Omission Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(PRESCRIPTION_OVERVIEW_SEQUENCE), "PrescriptionOverviewSequence", "Prescription Overview Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TOTAL_PRESCRIPTION_DOSE), "TotalPrescriptionDose", "Total Prescription Dose", Exact(FL), Vm::Exact(1), false),
    E::new(Single(PLAN_OVERVIEW_SEQUENCE), "PlanOverviewSequence", "Plan Overview Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PLAN_OVERVIEW_INDEX), "PlanOverviewIndex", "Plan Overview Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCED_PLAN_OVERVIEW_INDEX), "ReferencedPlanOverviewIndex", "Referenced Plan Overview Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_FRACTIONS_INCLUDED), "NumberOfFractionsIncluded", "Number of Fractions Included", Exact(US), Vm::Exact(1), false),
    E::new(Single(DOSE_CALIBRATION_CONDITIONS_SEQUENCE), "DoseCalibrationConditionsSequence", "Dose Calibration Conditions Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ABSORBED_DOSE_TO_METERSET_RATIO), "AbsorbedDoseToMetersetRatio", "Absorbed Dose to Meterset Ratio", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DELINEATED_RADIATION_FIELD_SIZE), "DelineatedRadiationFieldSize", "Delineated Radiation Field Size", Exact(FD), Vm::Exact(2), false),
    E::new(Single(DOSE_CALIBRATION_CONDITIONS_VERIFIED_FLAG), "DoseCalibrationConditionsVerifiedFlag", "Dose Calibration Conditions Verified Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CALIBRATION_REFERENCE_POINT_DEPTH), "CalibrationReferencePointDepth", "Calibration Reference Point Depth", Exact(FD), Vm::Exact(1), false),
    E::new(Single(GATING_BEAM_HOLD_TRANSITION_SEQUENCE), "GatingBeamHoldTransitionSequence", "Gating Beam Hold Transition Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BEAM_HOLD_TRANSITION), "BeamHoldTransition", "Beam Hold Transition", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BEAM_HOLD_TRANSITION_DATE_TIME), "BeamHoldTransitionDateTime", "Beam Hold Transition DateTime", Exact(DT), Vm::Exact(1), false),
    E::new(Single(BEAM_HOLD_ORIGINATING_DEVICE_SEQUENCE), "BeamHoldOriginatingDeviceSequence", "Beam Hold Originating Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(BEAM_HOLD_TRANSITION_TRIGGER_SOURCE), "BeamHoldTransitionTriggerSource", "Beam Hold Transition Trigger Source", Exact(CS), Vm::Exact(1), false),
    E::new(Single(APPROVAL_STATUS), "ApprovalStatus", "Approval Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(REVIEW_DATE), "ReviewDate", "Review Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(REVIEW_TIME), "ReviewTime", "Review Time", Exact(TM), Vm::Exact(1), false),
    E::new(Single(REVIEWER_NAME), "ReviewerName", "Reviewer Name", Exact(PN), Vm::Exact(1), false),
    E::new(Single(RADIOBIOLOGICAL_DOSE_EFFECT_SEQUENCE), "RadiobiologicalDoseEffectSequence", "Radiobiological Dose Effect Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RADIOBIOLOGICAL_DOSE_EFFECT_FLAG), "RadiobiologicalDoseEffectFlag", "Radiobiological Dose Effect Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(EFFECTIVE_DOSE_CALCULATION_METHOD_CATEGORY_CODE_SEQUENCE), "EffectiveDoseCalculationMethodCategoryCodeSequence", "Effective Dose Calculation Method Category Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(EFFECTIVE_DOSE_CALCULATION_METHOD_CODE_SEQUENCE), "EffectiveDoseCalculationMethodCodeSequence", "Effective Dose Calculation Method Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(EFFECTIVE_DOSE_CALCULATION_METHOD_DESCRIPTION), "EffectiveDoseCalculationMethodDescription", "Effective Dose Calculation Method Description", Exact(LO), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_UID), "ConceptualVolumeUID", "Conceptual Volume UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(ORIGINATING_SOP_INSTANCE_REFERENCE_SEQUENCE), "OriginatingSOPInstanceReferenceSequence", "Originating SOP Instance Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_CONSTITUENT_SEQUENCE), "ConceptualVolumeConstituentSequence", "Conceptual Volume Constituent Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(EQUIVALENT_CONCEPTUAL_VOLUME_INSTANCE_REFERENCE_SEQUENCE), "EquivalentConceptualVolumeInstanceReferenceSequence", "Equivalent Conceptual Volume Instance Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(EQUIVALENT_CONCEPTUAL_VOLUMES_SEQUENCE), "EquivalentConceptualVolumesSequence", "Equivalent Conceptual Volumes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_CONCEPTUAL_VOLUME_UID), "ReferencedConceptualVolumeUID", "Referenced Conceptual Volume UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_COMBINATION_EXPRESSION), "ConceptualVolumeCombinationExpression", "Conceptual Volume Combination Expression", Exact(UT), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_CONSTITUENT_INDEX), "ConceptualVolumeConstituentIndex", "Conceptual Volume Constituent Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_COMBINATION_FLAG), "ConceptualVolumeCombinationFlag", "Conceptual Volume Combination Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_COMBINATION_DESCRIPTION), "ConceptualVolumeCombinationDescription", "Conceptual Volume Combination Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_SEGMENTATION_DEFINED_FLAG), "ConceptualVolumeSegmentationDefinedFlag", "Conceptual Volume Segmentation Defined Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_SEGMENTATION_REFERENCE_SEQUENCE), "ConceptualVolumeSegmentationReferenceSequence", "Conceptual Volume Segmentation Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_CONSTITUENT_SEGMENTATION_REFERENCE_SEQUENCE), "ConceptualVolumeConstituentSegmentationReferenceSequence", "Conceptual Volume Constituent Segmentation Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONSTITUENT_CONCEPTUAL_VOLUME_UID), "ConstituentConceptualVolumeUID", "Constituent Conceptual Volume UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(DERIVATION_CONCEPTUAL_VOLUME_SEQUENCE), "DerivationConceptualVolumeSequence", "Derivation Conceptual Volume Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SOURCE_CONCEPTUAL_VOLUME_UID), "SourceConceptualVolumeUID", "Source Conceptual Volume UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_DERIVATION_ALGORITHM_SEQUENCE), "ConceptualVolumeDerivationAlgorithmSequence", "Conceptual Volume Derivation Algorithm Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_DESCRIPTION), "ConceptualVolumeDescription", "Conceptual Volume Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(SOURCE_CONCEPTUAL_VOLUME_SEQUENCE), "SourceConceptualVolumeSequence", "Source Conceptual Volume Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(AUTHOR_IDENTIFICATION_SEQUENCE), "AuthorIdentificationSequence", "Author Identification Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(MANUFACTURER_MODEL_VERSION), "ManufacturerModelVersion", "Manufacturer's Model Version", Exact(LO), Vm::Exact(1), false),
    E::new(Single(DEVICE_ALTERNATE_IDENTIFIER), "DeviceAlternateIdentifier", "Device Alternate Identifier", Exact(UC), Vm::Exact(1), false),
    E::new(Single(DEVICE_ALTERNATE_IDENTIFIER_TYPE), "DeviceAlternateIdentifierType", "Device Alternate Identifier Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DEVICE_ALTERNATE_IDENTIFIER_FORMAT), "DeviceAlternateIdentifierFormat", "Device Alternate Identifier Format", Exact(LT), Vm::Exact(1), false),
    E::new(Single(SEGMENTATION_CREATION_TEMPLATE_LABEL), "SegmentationCreationTemplateLabel", "Segmentation Creation Template Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(SEGMENTATION_TEMPLATE_UID), "SegmentationTemplateUID", "Segmentation Template UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(REFERENCED_SEGMENT_REFERENCE_INDEX), "ReferencedSegmentReferenceIndex", "Referenced Segment Reference Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(SEGMENT_REFERENCE_SEQUENCE), "SegmentReferenceSequence", "Segment Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENT_REFERENCE_INDEX), "SegmentReferenceIndex", "Segment Reference Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(DIRECT_SEGMENT_REFERENCE_SEQUENCE), "DirectSegmentReferenceSequence", "Direct Segment Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(COMBINATION_SEGMENT_REFERENCE_SEQUENCE), "CombinationSegmentReferenceSequence", "Combination Segment Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_SEQUENCE), "ConceptualVolumeSequence", "Conceptual Volume Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENTED_RT_ACCESSORY_DEVICE_SEQUENCE), "SegmentedRTAccessoryDeviceSequence", "Segmented RT Accessory Device Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENT_CHARACTERISTICS_SEQUENCE), "SegmentCharacteristicsSequence", "Segment Characteristics Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RELATED_SEGMENT_CHARACTERISTICS_SEQUENCE), "RelatedSegmentCharacteristicsSequence", "Related Segment Characteristics Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENT_CHARACTERISTICS_PRECEDENCE), "SegmentCharacteristicsPrecedence", "Segment Characteristics Precedence", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_SEGMENT_ANNOTATION_SEQUENCE), "RTSegmentAnnotationSequence", "RT Segment Annotation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENT_ANNOTATION_CATEGORY_CODE_SEQUENCE), "SegmentAnnotationCategoryCodeSequence", "Segment Annotation Category Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENT_ANNOTATION_TYPE_CODE_SEQUENCE), "SegmentAnnotationTypeCodeSequence", "Segment Annotation Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DEVICE_LABEL), "DeviceLabel", "Device Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(DEVICE_TYPE_CODE_SEQUENCE), "DeviceTypeCodeSequence", "Device Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SEGMENT_ANNOTATION_TYPE_MODIFIER_CODE_SEQUENCE), "SegmentAnnotationTypeModifierCodeSequence", "Segment Annotation Type Modifier Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PATIENT_EQUIPMENT_RELATIONSHIP_CODE_SEQUENCE), "PatientEquipmentRelationshipCodeSequence", "Patient Equipment Relationship Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_FIDUCIALS_UID), "ReferencedFiducialsUID", "Referenced Fiducials UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(PATIENT_TREATMENT_ORIENTATION_SEQUENCE), "PatientTreatmentOrientationSequence", "Patient Treatment Orientation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(USER_CONTENT_LABEL), "UserContentLabel", "User Content Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(USER_CONTENT_LONG_LABEL), "UserContentLongLabel", "User Content Long Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ENTITY_LABEL), "EntityLabel", "Entity Label", Exact(SH), Vm::Exact(1), false),
    E::new(Single(ENTITY_NAME), "EntityName", "Entity Name", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ENTITY_DESCRIPTION), "EntityDescription", "Entity Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(ENTITY_LONG_LABEL), "EntityLongLabel", "Entity Long Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(DEVICE_INDEX), "DeviceIndex", "Device Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_TREATMENT_PHASE_INDEX), "RTTreatmentPhaseIndex", "RT Treatment Phase Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_TREATMENT_PHASE_UID), "RTTreatmentPhaseUID", "RT Treatment Phase UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(RT_PRESCRIPTION_INDEX), "RTPrescriptionIndex", "RT Prescription Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_SEGMENT_ANNOTATION_INDEX), "RTSegmentAnnotationIndex", "RT Segment Annotation Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(BASIS_RT_TREATMENT_PHASE_INDEX), "BasisRTTreatmentPhaseIndex", "Basis RT Treatment Phase Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(RELATED_RT_TREATMENT_PHASE_INDEX), "RelatedRTTreatmentPhaseIndex", "Related RT Treatment Phase Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_TREATMENT_PHASE_INDEX), "ReferencedRTTreatmentPhaseIndex", "Referenced RT Treatment Phase Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_PRESCRIPTION_INDEX), "ReferencedRTPrescriptionIndex", "Referenced RT Prescription Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(REFERENCED_PARENT_RT_PRESCRIPTION_INDEX), "ReferencedParentRTPrescriptionIndex", "Referenced Parent RT Prescription Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(MANUFACTURER_DEVICE_IDENTIFIER), "ManufacturerDeviceIdentifier", "Manufacturer's Device Identifier", Exact(ST), Vm::Exact(1), false),
    E::new(Single(INSTANCE_LEVEL_REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE), "InstanceLevelReferencedPerformedProcedureStepSequence", "Instance-Level Referenced Performed Procedure Step Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_TREATMENT_PHASE_INTENT_PRESENCE_FLAG), "RTTreatmentPhaseIntentPresenceFlag", "RT Treatment Phase Intent Presence Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RADIOTHERAPY_TREATMENT_TYPE), "RadiotherapyTreatmentType", "Radiotherapy Treatment Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(TELETHERAPY_RADIATION_TYPE), "TeletherapyRadiationType", "Teletherapy Radiation Type", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(BRACHYTHERAPY_SOURCE_TYPE), "BrachytherapySourceType", "Brachytherapy Source Type", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(REFERENCED_RT_TREATMENT_PHASE_SEQUENCE), "ReferencedRTTreatmentPhaseSequence", "Referenced RT Treatment Phase Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_DIRECT_SEGMENT_INSTANCE_SEQUENCE), "ReferencedDirectSegmentInstanceSequence", "Referenced Direct Segment Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INTENDED_RT_TREATMENT_PHASE_SEQUENCE), "IntendedRTTreatmentPhaseSequence", "Intended RT Treatment Phase Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INTENDED_PHASE_START_DATE), "IntendedPhaseStartDate", "Intended Phase Start Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(INTENDED_PHASE_END_DATE), "IntendedPhaseEndDate", "Intended Phase End Date", Exact(DA), Vm::Exact(1), false),
    E::new(Single(RT_TREATMENT_PHASE_INTERVAL_SEQUENCE), "RTTreatmentPhaseIntervalSequence", "RT Treatment Phase Interval Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TEMPORAL_RELATIONSHIP_INTERVAL_ANCHOR), "TemporalRelationshipIntervalAnchor", "Temporal Relationship Interval Anchor", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MINIMUM_NUMBER_OF_INTERVAL_DAYS), "MinimumNumberOfIntervalDays", "Minimum Number of Interval Days", Exact(FD), Vm::Exact(1), false),
    E::new(Single(MAXIMUM_NUMBER_OF_INTERVAL_DAYS), "MaximumNumberOfIntervalDays", "Maximum Number of Interval Days", Exact(FD), Vm::Exact(1), false),
    E::new(Single(PERTINENT_SOP_CLASSES_IN_STUDY), "PertinentSOPClassesInStudy", "Pertinent SOP Classes in Study", Exact(UI), Vm::AtLeast(1), false),
    E::new(Single(PERTINENT_SOP_CLASSES_IN_SERIES), "PertinentSOPClassesInSeries", "Pertinent SOP Classes in Series", Exact(UI), Vm::AtLeast(1), false),
    E::new(Single(RT_PRESCRIPTION_LABEL), "RTPrescriptionLabel", "RT Prescription Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(RT_PHYSICIAN_INTENT_PREDECESSOR_SEQUENCE), "RTPhysicianIntentPredecessorSequence", "RT Physician Intent Predecessor Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_TREATMENT_APPROACH_LABEL), "RTTreatmentApproachLabel", "RT Treatment Approach Label", Exact(LO), Vm::Exact(1), false),
    E::new(Single(RT_PHYSICIAN_INTENT_SEQUENCE), "RTPhysicianIntentSequence", "RT Physician Intent Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_PHYSICIAN_INTENT_INDEX), "RTPhysicianIntentIndex", "RT Physician Intent Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_TREATMENT_INTENT_TYPE), "RTTreatmentIntentType", "RT Treatment Intent Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(RT_PHYSICIAN_INTENT_NARRATIVE), "RTPhysicianIntentNarrative", "RT Physician Intent Narrative", Exact(UT), Vm::Exact(1), false),
    E::new(Single(RT_PROTOCOL_CODE_SEQUENCE), "RTProtocolCodeSequence", "RT Protocol Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REASON_FOR_SUPERSEDING), "ReasonForSuperseding", "Reason for Superseding", Exact(ST), Vm::Exact(1), false),
    E::new(Single(RT_DIAGNOSIS_CODE_SEQUENCE), "RTDiagnosisCodeSequence", "RT Diagnosis Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_RT_PHYSICIAN_INTENT_INDEX), "ReferencedRTPhysicianIntentIndex", "Referenced RT Physician Intent Index", Exact(US), Vm::Exact(1), false),
    E::new(Single(RT_PHYSICIAN_INTENT_INPUT_INSTANCE_SEQUENCE), "RTPhysicianIntentInputInstanceSequence", "RT Physician Intent Input Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_ANATOMIC_PRESCRIPTION_SEQUENCE), "RTAnatomicPrescriptionSequence", "RT Anatomic Prescription Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRIOR_TREATMENT_DOSE_DESCRIPTION), "PriorTreatmentDoseDescription", "Prior Treatment Dose Description", Exact(UT), Vm::Exact(1), false),
    E::new(Single(PRIOR_TREATMENT_REFERENCE_SEQUENCE), "PriorTreatmentReferenceSequence", "Prior Treatment Reference Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DOSIMETRIC_OBJECTIVE_EVALUATION_SCOPE), "DosimetricObjectiveEvaluationScope", "Dosimetric Objective Evaluation Scope", Exact(CS), Vm::Exact(1), false),
    E::new(Single(THERAPEUTIC_ROLE_CATEGORY_CODE_SEQUENCE), "TherapeuticRoleCategoryCodeSequence", "Therapeutic Role Category Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(THERAPEUTIC_ROLE_TYPE_CODE_SEQUENCE), "TherapeuticRoleTypeCodeSequence", "Therapeutic Role Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_OPTIMIZATION_PRECEDENCE), "ConceptualVolumeOptimizationPrecedence", "Conceptual Volume Optimization Precedence", Exact(US), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_CATEGORY_CODE_SEQUENCE), "ConceptualVolumeCategoryCodeSequence", "Conceptual Volume Category Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_BLOCKING_CONSTRAINT), "ConceptualVolumeBlockingConstraint", "Conceptual Volume Blocking Constraint", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_TYPE_CODE_SEQUENCE), "ConceptualVolumeTypeCodeSequence", "Conceptual Volume Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CONCEPTUAL_VOLUME_TYPE_MODIFIER_CODE_SEQUENCE), "ConceptualVolumeTypeModifierCodeSequence", "Conceptual Volume Type Modifier Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(RT_PRESCRIPTION_SEQUENCE), "RTPrescriptionSequence", "RT Prescription Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DOSIMETRIC_OBJECTIVE_SEQUENCE), "DosimetricObjectiveSequence", "Dosimetric Objective Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DOSIMETRIC_OBJECTIVE_TYPE_CODE_SEQUENCE), "DosimetricObjectiveTypeCodeSequence", "Dosimetric Objective Type Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DOSIMETRIC_OBJECTIVE_UID), "DosimetricObjectiveUID", "Dosimetric Objective UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(REFERENCED_DOSIMETRIC_OBJECTIVE_UID), "ReferencedDosimetricObjectiveUID", "Referenced Dosimetric Objective UID", Exact(UI), Vm::Exact(1), false),
    E::new(Single(DOSIMETRIC_OBJECTIVE_PARAMETER_SEQUENCE), "DosimetricObjectiveParameterSequence", "Dosimetric Objective Parameter Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_DOSIMETRIC_OBJECTIVES_SEQUENCE), "ReferencedDosimetricObjectivesSequence", "Referenced Dosimetric Objectives Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ABSOLUTE_DOSIMETRIC_OBJECTIVE_FLAG), "AbsoluteDosimetricObjectiveFlag", "Absolute Dosimetric Objective Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DOSIMETRIC_OBJECTIVE_WEIGHT), "DosimetricObjectiveWeight", "Dosimetric Objective Weight", Exact(FD), Vm::Exact(1), false),
    E::new(Single(DOSIMETRIC_OBJECTIVE_PURPOSE), "DosimetricObjectivePurpose", "Dosimetric Objective Purpose", Exact(CS), Vm::Exact(1), false),
    E::new(Single(PLANNING_INPUT_INFORMATION_SEQUENCE), "PlanningInputInformationSequence", "Planning Input Information Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TREATMENT_SITE), "TreatmentSite", "Treatment Site", Exact(LO), Vm::Exact(1), false),
    E::new(Single(TREATMENT_SITE_CODE_SEQUENCE), "TreatmentSiteCodeSequence", "Treatment Site Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FRACTION_PATTERN_SEQUENCE), "FractionPatternSequence", "Fraction Pattern Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TREATMENT_TECHNIQUE_NOTES), "TreatmentTechniqueNotes", "Treatment Technique Notes", Exact(UT), Vm::Exact(1), false),
    E::new(Single(PRESCRIPTION_NOTES), "PrescriptionNotes", "Prescription Notes", Exact(UT), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_INTERVAL_FRACTIONS), "NumberOfIntervalFractions", "Number of Interval Fractions", Exact(IS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_FRACTIONS), "NumberOfFractions", "Number of Fractions", Exact(US), Vm::Exact(1), false),
    E::new(Single(INTENDED_DELIVERY_DURATION), "IntendedDeliveryDuration", "Intended Delivery Duration", Exact(US), Vm::Exact(1), false),
    E::new(Single(FRACTIONATION_NOTES), "FractionationNotes", "Fractionation Notes", Exact(UT), Vm::Exact(1), false),
    E::new(Single(RT_TREATMENT_TECHNIQUE_CODE_SEQUENCE), "RTTreatmentTechniqueCodeSequence", "RT Treatment Technique Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRESCRIPTION_NOTES_SEQUENCE), "PrescriptionNotesSequence", "Prescription Notes Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FRACTION_BASED_RELATIONSHIP_SEQUENCE), "FractionBasedRelationshipSequence", "Fraction-Based Relationship Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(FRACTION_BASED_RELATIONSHIP_INTERVAL_ANCHOR), "FractionBasedRelationshipIntervalAnchor", "Fraction-Based Relationship Interval Anchor", Exact(CS), Vm::Exact(1), false),
    E::new(Single(MINIMUM_HOURS_BETWEEN_FRACTIONS), "MinimumHoursBetweenFractions", "Minimum Hours between Fractions", Exact(FD), Vm::Exact(1), false),
    E::new(Single(INTENDED_FRACTION_START_TIME), "IntendedFractionStartTime", "Intended Fraction Start Time", Exact(TM), Vm::AtLeast(1), false),
    E::new(Single(INTENDED_START_DAY_OF_WEEK), "IntendedStartDayOfWeek", "Intended Start Day of Week", Exact(LT), Vm::Exact(1), false),
    E::new(Single(WEEKDAY_FRACTION_PATTERN_SEQUENCE), "WeekdayFractionPatternSequence", "Weekday Fraction Pattern Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DELIVERY_TIME_STRUCTURE_CODE_SEQUENCE), "DeliveryTimeStructureCodeSequence", "Delivery Time Structure Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TREATMENT_SITE_MODIFIER_CODE_SEQUENCE), "TreatmentSiteModifierCodeSequence", "Treatment Site Modifier Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ROBOTIC_BASE_LOCATION_INDICATOR), "RoboticBaseLocationIndicator", "Robotic Base Location Indicator", Exact(CS), Vm::Exact(1), true),
    E::new(Single(ROBOTIC_PATH_NODE_SET_CODE_SEQUENCE), "RoboticPathNodeSetCodeSequence", "Robotic Path Node Set Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ROBOTIC_NODE_IDENTIFIER), "RoboticNodeIdentifier", "Robotic Node Identifier", Exact(UL), Vm::Exact(1), false),
    E::new(Single(RT_TREATMENT_SOURCE_COORDINATES), "RTTreatmentSourceCoordinates", "RT Treatment Source Coordinates", Exact(FD), Vm::Exact(3), false),
    E::new(Single(RADIATION_SOURCE_COORDINATE_SYSTEM_YAW_ANGLE), "RadiationSourceCoordinateSystemYawAngle", "Radiation Source Coordinate SystemYaw Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RADIATION_SOURCE_COORDINATE_SYSTEM_ROLL_ANGLE), "RadiationSourceCoordinateSystemRollAngle", "Radiation Source Coordinate SystemRoll Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(RADIATION_SOURCE_COORDINATE_SYSTEM_PITCH_ANGLE), "RadiationSourceCoordinateSystemPitchAngle", "Radiation Source Coordinate System Pitch Angle", Exact(FD), Vm::Exact(1), false),
    E::new(Single(ROBOTIC_PATH_CONTROL_POINT_SEQUENCE), "RoboticPathControlPointSequence", "Robotic Path Control Point Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TOMOTHERAPEUTIC_CONTROL_POINT_SEQUENCE), "TomotherapeuticControlPointSequence", "Tomotherapeutic Control Point Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TOMOTHERAPEUTIC_LEAF_OPEN_DURATIONS), "TomotherapeuticLeafOpenDurations", "Tomotherapeutic Leaf Open Durations", Exact(FD), Vm::AtLeast(1), false),
    E::new(Single(TOMOTHERAPEUTIC_LEAF_INITIAL_CLOSED_DURATIONS), "TomotherapeuticLeafInitialClosedDurations", "Tomotherapeutic Leaf Initial Closed Durations", Exact(FD), Vm::AtLeast(1), false),
    E::new(Single(ARBITRARY), "Arbitrary", "Arbitrary", Exact(LT), Vm::Exact(1), true),
    E::new(Single(TEXT_COMMENTS), "TextComments", "Text Comments", Exact(LT), Vm::Exact(1), true),
    E::new(Single(RESULTS_ID), "ResultsID", "Results ID", Exact(SH), Vm::Exact(1), true),
    E::new(Single(RESULTS_ID_ISSUER), "ResultsIDIssuer", "Results ID Issuer", Exact(LO), Vm::Exact(1), true),
    E::new(Single(REFERENCED_INTERPRETATION_SEQUENCE), "ReferencedInterpretationSequence", "Referenced Interpretation Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(REPORT_PRODUCTION_STATUS_TRIAL), "ReportProductionStatusTrial", "Report Production Status (Trial)", Exact(CS), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_RECORDED_DATE), "InterpretationRecordedDate", "Interpretation Recorded Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_RECORDED_TIME), "InterpretationRecordedTime", "Interpretation Recorded Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_RECORDER), "InterpretationRecorder", "Interpretation Recorder", Exact(PN), Vm::Exact(1), true),
    E::new(Single(REFERENCE_TO_RECORDED_SOUND), "ReferenceToRecordedSound", "Reference to Recorded Sound", Exact(LO), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_TRANSCRIPTION_DATE), "InterpretationTranscriptionDate", "Interpretation Transcription Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_TRANSCRIPTION_TIME), "InterpretationTranscriptionTime", "Interpretation Transcription Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_TRANSCRIBER), "InterpretationTranscriber", "Interpretation Transcriber", Exact(PN), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_TEXT), "InterpretationText", "Interpretation Text", Exact(ST), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_AUTHOR), "InterpretationAuthor", "Interpretation Author", Exact(PN), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_APPROVER_SEQUENCE), "InterpretationApproverSequence", "Interpretation Approver Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_APPROVAL_DATE), "InterpretationApprovalDate", "Interpretation Approval Date", Exact(DA), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_APPROVAL_TIME), "InterpretationApprovalTime", "Interpretation Approval Time", Exact(TM), Vm::Exact(1), true),
    E::new(Single(PHYSICIAN_APPROVING_INTERPRETATION), "PhysicianApprovingInterpretation", "Physician Approving Interpretation", Exact(PN), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_DIAGNOSIS_DESCRIPTION), "InterpretationDiagnosisDescription", "Interpretation Diagnosis Description", Exact(LT), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_DIAGNOSIS_CODE_SEQUENCE), "InterpretationDiagnosisCodeSequence", "Interpretation Diagnosis Code Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(RESULTS_DISTRIBUTION_LIST_SEQUENCE), "ResultsDistributionListSequence", "Results Distribution List Sequence", Exact(SQ), Vm::Exact(1), true),
    E::new(Single(DISTRIBUTION_NAME), "DistributionName", "Distribution Name", Exact(PN), Vm::Exact(1), true),
    E::new(Single(DISTRIBUTION_ADDRESS), "DistributionAddress", "Distribution Address", Exact(LO), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_ID), "InterpretationID", "Interpretation ID", Exact(SH), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_ID_ISSUER), "InterpretationIDIssuer", "Interpretation ID Issuer", Exact(LO), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_TYPE_ID), "InterpretationTypeID", "Interpretation Type ID", Exact(CS), Vm::Exact(1), true),
    E::new(Single(INTERPRETATION_STATUS_ID), "InterpretationStatusID", "Interpretation Status ID", Exact(CS), Vm::Exact(1), true),
    E::new(Single(IMPRESSIONS), "Impressions", "Impressions", Exact(ST), Vm::Exact(1), true),
    E::new(Single(RESULTS_COMMENTS), "ResultsComments", "Results Comments", Exact(ST), Vm::Exact(1), true),
    E::new(Single(LOW_ENERGY_DETECTORS), "LowEnergyDetectors", "Low Energy Detectors", Exact(CS), Vm::Exact(1), false),
    E::new(Single(HIGH_ENERGY_DETECTORS), "HighEnergyDetectors", "High Energy Detectors", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DETECTOR_GEOMETRY_SEQUENCE), "DetectorGeometrySequence", "Detector Geometry Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(THREAT_ROI_VOXEL_SEQUENCE), "ThreatROIVoxelSequence", "Threat ROI Voxel Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(THREAT_ROI_BASE), "ThreatROIBase", "Threat ROI Base", Exact(FL), Vm::Exact(3), false),
    E::new(Single(THREAT_ROI_EXTENTS), "ThreatROIExtents", "Threat ROI Extents", Exact(FL), Vm::Exact(3), false),
    E::new(Single(THREAT_ROI_BITMAP), "ThreatROIBitmap", "Threat ROI Bitmap", Exact(OB), Vm::Exact(1), false),
    E::new(Single(ROUTE_SEGMENT_ID), "RouteSegmentID", "Route Segment ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(GANTRY_TYPE), "GantryType", "Gantry Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(OOI_OWNER_TYPE), "OOIOwnerType", "OOI Owner Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ROUTE_SEGMENT_SEQUENCE), "RouteSegmentSequence", "Route Segment Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(POTENTIAL_THREAT_OBJECT_ID), "PotentialThreatObjectID", "Potential Threat Object ID", Exact(US), Vm::Exact(1), false),
    E::new(Single(THREAT_SEQUENCE), "ThreatSequence", "Threat Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(THREAT_CATEGORY), "ThreatCategory", "Threat Category", Exact(CS), Vm::Exact(1), false),
    E::new(Single(THREAT_CATEGORY_DESCRIPTION), "ThreatCategoryDescription", "Threat Category Description", Exact(LT), Vm::Exact(1), false),
    E::new(Single(ATD_ABILITY_ASSESSMENT), "ATDAbilityAssessment", "ATD Ability Assessment", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ATD_ASSESSMENT_FLAG), "ATDAssessmentFlag", "ATD Assessment Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ATD_ASSESSMENT_PROBABILITY), "ATDAssessmentProbability", "ATD Assessment Probability", Exact(FL), Vm::Exact(1), false),
    E::new(Single(MASS), "Mass", "Mass", Exact(FL), Vm::Exact(1), false),
    E::new(Single(DENSITY), "Density", "Density", Exact(FL), Vm::Exact(1), false),
    E::new(Single(Z_EFFECTIVE), "ZEffective", "Z Effective", Exact(FL), Vm::Exact(1), false),
    E::new(Single(BOARDING_PASS_ID), "BoardingPassID", "Boarding Pass ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(CENTER_OF_MASS), "CenterOfMass", "Center of Mass", Exact(FL), Vm::Exact(3), false),
    E::new(Single(CENTER_OF_PTO), "CenterOfPTO", "Center of PTO", Exact(FL), Vm::Exact(3), false),
    E::new(Single(BOUNDING_POLYGON), "BoundingPolygon", "Bounding Polygon", Exact(FL), Vm::AtLeast(6), false),
    E::new(Single(ROUTE_SEGMENT_START_LOCATION_ID), "RouteSegmentStartLocationID", "Route Segment Start Location ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(ROUTE_SEGMENT_END_LOCATION_ID), "RouteSegmentEndLocationID", "Route Segment End Location ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(ROUTE_SEGMENT_LOCATION_ID_TYPE), "RouteSegmentLocationIDType", "Route Segment Location ID Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ABORT_REASON), "AbortReason", "Abort Reason", Exact(CS), Vm::AtLeast(1), false),
    E::new(Single(VOLUME_OF_PTO), "VolumeOfPTO", "Volume of PTO", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ABORT_FLAG), "AbortFlag", "Abort Flag", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ROUTE_SEGMENT_START_TIME), "RouteSegmentStartTime", "Route Segment Start Time", Exact(DT), Vm::Exact(1), false),
    E::new(Single(ROUTE_SEGMENT_END_TIME), "RouteSegmentEndTime", "Route Segment End Time", Exact(DT), Vm::Exact(1), false),
    E::new(Single(TDR_TYPE), "TDRType", "TDR Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(INTERNATIONAL_ROUTE_SEGMENT), "InternationalRouteSegment", "International Route Segment", Exact(CS), Vm::Exact(1), false),
    E::new(Single(THREAT_DETECTION_ALGORITHM_AND_VERSION), "ThreatDetectionAlgorithmAndVersion", "Threat Detection Algorithm and Version", Exact(LO), Vm::AtLeast(1), false),
    E::new(Single(ASSIGNED_LOCATION), "AssignedLocation", "Assigned Location", Exact(SH), Vm::Exact(1), false),
    E::new(Single(ALARM_DECISION_TIME), "AlarmDecisionTime", "Alarm Decision Time", Exact(DT), Vm::Exact(1), false),
    E::new(Single(ALARM_DECISION), "AlarmDecision", "Alarm Decision", Exact(CS), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_TOTAL_OBJECTS), "NumberOfTotalObjects", "Number of Total Objects", Exact(US), Vm::Exact(1), false),
    E::new(Single(NUMBER_OF_ALARM_OBJECTS), "NumberOfAlarmObjects", "Number of Alarm Objects", Exact(US), Vm::Exact(1), false),
    E::new(Single(PTO_REPRESENTATION_SEQUENCE), "PTORepresentationSequence", "PTO Representation Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ATD_ASSESSMENT_SEQUENCE), "ATDAssessmentSequence", "ATD Assessment Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TIP_TYPE), "TIPType", "TIP Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(DICOS_VERSION), "DICOSVersion", "DICOS Version", Exact(CS), Vm::Exact(1), false),
    E::new(Single(OOI_OWNER_CREATION_TIME), "OOIOwnerCreationTime", "OOI Owner Creation Time", Exact(DT), Vm::Exact(1), false),
    E::new(Single(OOI_TYPE), "OOIType", "OOI Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(OOI_SIZE), "OOISize", "OOI Size", Exact(FL), Vm::Exact(3), false),
    E::new(Single(ACQUISITION_STATUS), "AcquisitionStatus", "Acquisition Status", Exact(CS), Vm::Exact(1), false),
    E::new(Single(BASIS_MATERIALS_CODE_SEQUENCE), "BasisMaterialsCodeSequence", "Basis Materials Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PHANTOM_TYPE), "PhantomType", "Phantom Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(OOI_OWNER_SEQUENCE), "OOIOwnerSequence", "OOI Owner Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SCAN_TYPE), "ScanType", "Scan Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ITINERARY_ID), "ItineraryID", "Itinerary ID", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ITINERARY_ID_TYPE), "ItineraryIDType", "Itinerary ID Type", Exact(SH), Vm::Exact(1), false),
    E::new(Single(ITINERARY_ID_ASSIGNING_AUTHORITY), "ItineraryIDAssigningAuthority", "Itinerary ID Assigning Authority", Exact(LO), Vm::Exact(1), false),
    E::new(Single(ROUTE_ID), "RouteID", "Route ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(ROUTE_ID_ASSIGNING_AUTHORITY), "RouteIDAssigningAuthority", "Route ID Assigning Authority", Exact(SH), Vm::Exact(1), false),
    E::new(Single(INBOUND_ARRIVAL_TYPE), "InboundArrivalType", "Inbound Arrival Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(CARRIER_ID), "CarrierID", "Carrier ID", Exact(SH), Vm::Exact(1), false),
    E::new(Single(CARRIER_ID_ASSIGNING_AUTHORITY), "CarrierIDAssigningAuthority", "Carrier ID Assigning Authority", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SOURCE_ORIENTATION), "SourceOrientation", "Source Orientation", Exact(FL), Vm::Exact(3), false),
    E::new(Single(SOURCE_POSITION), "SourcePosition", "Source Position", Exact(FL), Vm::Exact(3), false),
    E::new(Single(BELT_HEIGHT), "BeltHeight", "Belt Height", Exact(FL), Vm::Exact(1), false),
    E::new(Single(ALGORITHM_ROUTING_CODE_SEQUENCE), "AlgorithmRoutingCodeSequence", "Algorithm Routing Code Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TRANSPORT_CLASSIFICATION), "TransportClassification", "Transport Classification", Exact(CS), Vm::Exact(1), false),
    E::new(Single(OOI_TYPE_DESCRIPTOR), "OOITypeDescriptor", "OOI Type Descriptor", Exact(LT), Vm::Exact(1), false),
    E::new(Single(TOTAL_PROCESSING_TIME), "TotalProcessingTime", "Total Processing Time", Exact(FL), Vm::Exact(1), false),
    E::new(Single(DETECTOR_CALIBRATION_DATA), "DetectorCalibrationData", "Detector Calibration Data", Exact(OB), Vm::Exact(1), false),
    E::new(Single(ADDITIONAL_SCREENING_PERFORMED), "AdditionalScreeningPerformed", "Additional Screening Performed", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ADDITIONAL_INSPECTION_SELECTION_CRITERIA), "AdditionalInspectionSelectionCriteria", "Additional Inspection Selection Criteria", Exact(CS), Vm::Exact(1), false),
    E::new(Single(ADDITIONAL_INSPECTION_METHOD_SEQUENCE), "AdditionalInspectionMethodSequence", "Additional Inspection Method Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(AIT_DEVICE_TYPE), "AITDeviceType", "AIT Device Type", Exact(CS), Vm::Exact(1), false),
    E::new(Single(QR_MEASUREMENTS_SEQUENCE), "QRMeasurementsSequence", "QR Measurements Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(TARGET_MATERIAL_SEQUENCE), "TargetMaterialSequence", "Target Material Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(SNR_THRESHOLD), "SNRThreshold", "SNR Threshold", Exact(FD), Vm::Exact(1), false),
    E::new(Single(IMAGE_SCALE_REPRESENTATION), "ImageScaleRepresentation", "Image Scale Representation", Exact(DS), Vm::Exact(1), false),
    E::new(Single(REFERENCED_PTO_SEQUENCE), "ReferencedPTOSequence", "Referenced PTO Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(REFERENCED_TDR_INSTANCE_SEQUENCE), "ReferencedTDRInstanceSequence", "Referenced TDR Instance Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PTO_LOCATION_DESCRIPTION), "PTOLocationDescription", "PTO Location Description", Exact(ST), Vm::Exact(1), false),
    E::new(Single(ANOMALY_LOCATOR_INDICATOR_SEQUENCE), "AnomalyLocatorIndicatorSequence", "Anomaly Locator Indicator Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(ANOMALY_LOCATOR_INDICATOR), "AnomalyLocatorIndicator", "Anomaly Locator Indicator", Exact(FL), Vm::Exact(3), false),
    E::new(Single(PTO_REGION_SEQUENCE), "PTORegionSequence", "PTO Region Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(INSPECTION_SELECTION_CRITERIA), "InspectionSelectionCriteria", "Inspection Selection Criteria", Exact(CS), Vm::Exact(1), false),
    E::new(Single(SECONDARY_INSPECTION_METHOD_SEQUENCE), "SecondaryInspectionMethodSequence", "Secondary Inspection Method Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PRCS_TO_RCS_ORIENTATION), "PRCSToRCSOrientation", "PRCS to RCS Orientation", Exact(DS), Vm::Exact(6), false),
    E::new(Single(MAC_PARAMETERS_SEQUENCE), "MACParametersSequence", "MAC Parameters Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Group100(CURVE_DIMENSIONS), "CurveDimensions", "Curve Dimensions", Exact(US), Vm::Exact(1), true),
    E::new(Group100(NUMBER_OF_POINTS), "NumberOfPoints", "Number of Points", Exact(US), Vm::Exact(1), true),
    E::new(Group100(TYPE_OF_DATA), "TypeOfData", "Type of Data", Exact(CS), Vm::Exact(1), true),
    E::new(Group100(CURVE_DESCRIPTION), "CurveDescription", "Curve Description", Exact(LO), Vm::Exact(1), true),
    E::new(Group100(AXIS_UNITS), "AxisUnits", "Axis Units", Exact(SH), Vm::AtLeast(1), true),
    E::new(Group100(DATA_VALUE_REPRESENTATION), "DataValueRepresentation", "Data Value Representation", Exact(US), Vm::Exact(1), true),
    E::new(Group100(CURVE_DATA), "CurveData", "Curve Data", Ox, Vm::Exact(1), true),
    E::new(Single(SHARED_FUNCTIONAL_GROUPS_SEQUENCE), "SharedFunctionalGroupsSequence", "Shared Functional Groups Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE), "PerFrameFunctionalGroupsSequence", "Per-Frame Functional Groups Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(WAVEFORM_SEQUENCE), "WaveformSequence", "Waveform Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(CHANNEL_MINIMUM_VALUE), "ChannelMinimumValue", "Channel Minimum Value", Ox, Vm::Exact(1), false),
    E::new(Single(CHANNEL_MAXIMUM_VALUE), "ChannelMaximumValue", "Channel Maximum Value", Ox, Vm::Exact(1), false),
    E::new(Single(WAVEFORM_BITS_ALLOCATED), "WaveformBitsAllocated", "Waveform Bits Allocated", Exact(US), Vm::Exact(1), false),
    E::new(Single(WAVEFORM_SAMPLE_INTERPRETATION), "WaveformSampleInterpretation", "Waveform Sample Interpretation", Exact(CS), Vm::Exact(1), false),
    E::new(Single(WAVEFORM_SAMPLE_VALUE_REPRESENTATION), "WaveformSampleValueRepresentation", "Waveform Sample Value Representation", Exact(CS), Vm::Exact(1), true),
    E::new(Single(WAVEFORM_PADDING_VALUE), "WaveformPaddingValue", "Waveform Padding Value", Ox, Vm::Exact(1), false),
    E::new(Single(WAVEFORM_DATA), "WaveformData", "Waveform Data", Ox, Vm::Exact(1), false),
    E::new(Single(FIRST_ORDER_PHASE_CORRECTION_ANGLE), "FirstOrderPhaseCorrectionAngle", "First Order Phase Correction Angle", Exact(OF), Vm::Exact(1), false),
    E::new(Single(SPECTROSCOPY_DATA), "SpectroscopyData", "Spectroscopy Data", Exact(OF), Vm::Exact(1), false),
    E::new(Group100(OVERLAY_ROWS), "OverlayRows", "Overlay Rows", Exact(US), Vm::Exact(1), false),
    E::new(Group100(OVERLAY_COLUMNS), "OverlayColumns", "Overlay Columns", Exact(US), Vm::Exact(1), false),
    E::new(Group100(OVERLAY_PLANES), "OverlayPlanes", "Overlay Planes", Exact(US), Vm::Exact(1), true),
    E::new(Group100(NUMBER_OF_FRAMES_IN_OVERLAY), "NumberOfFramesInOverlay", "Number of Frames in Overlay", Exact(IS), Vm::Exact(1), false),
    E::new(Group100(OVERLAY_DESCRIPTION), "OverlayDescription", "Overlay Description", Exact(LO), Vm::Exact(1), false),
    E::new(Group100(OVERLAY_TYPE), "OverlayType", "Overlay Type", Exact(CS), Vm::Exact(1), false),
    E::new(Group100(OVERLAY_SUBTYPE), "OverlaySubtype", "Overlay Subtype", Exact(LO), Vm::Exact(1), false),
    E::new(Group100(OVERLAY_ORIGIN), "OverlayOrigin", "Overlay Origin", Exact(SS), Vm::Exact(2), false),
    E::new(Group100(IMAGE_FRAME_ORIGIN), "ImageFrameOrigin", "Image Frame Origin", Exact(US), Vm::Exact(1), false),
    E::new(Group100(OVERLAY_BITS_ALLOCATED), "OverlayBitsAllocated", "Overlay Bits Allocated", Exact(US), Vm::Exact(1), false),
    E::new(Group100(OVERLAY_BIT_POSITION), "OverlayBitPosition", "Overlay Bit Position", Exact(US), Vm::Exact(1), false),
    E::new(Group100(OVERLAY_LABEL), "OverlayLabel", "Overlay Label", Exact(LO), Vm::Exact(1), false),
    E::new(Group100(OVERLAY_DATA), "OverlayData", "Overlay Data", Ox, Vm::Exact(1), false),
    E::new(Group100(VARIABLE_PIXEL_DATA), "VariablePixelData", "Variable Pixel Data", Px, Vm::Exact(1), true),
    E::new(Group100(VARIABLE_NEXT_DATA_GROUP), "VariableNextDataGroup", "Variable Next Data Group", Exact(US), Vm::Exact(1), true),
    E::new(Group100(VARIABLE_COEFFICIENTS_SDVN), "VariableCoefficientsSDVN", "Variable Coefficients SDVN", Exact(OW), Vm::AtLeast(1), true),
    E::new(Group100(VARIABLE_COEFFICIENTS_SDHN), "VariableCoefficientsSDHN", "Variable Coefficients SDHN", Exact(OW), Vm::AtLeast(1), true),
    E::new(Group100(VARIABLE_COEFFICIENTS_SDDN), "VariableCoefficientsSDDN", "Variable Coefficients SDDN", Exact(OW), Vm::AtLeast(1), true),
    E::new(Single(EXTENDED_OFFSET_TABLE), "ExtendedOffsetTable", "Extended Offset Table", Exact(OV), Vm::Exact(1), false),
    E::new(Single(EXTENDED_OFFSET_TABLE_LENGTHS), "ExtendedOffsetTableLengths", "Extended Offset Table Lengths", Exact(OV), Vm::Exact(1), false),
    E::new(Single(ENCAPSULATED_PIXEL_DATA_VALUE_TOTAL_LENGTH), "EncapsulatedPixelDataValueTotalLength", "Encapsulated Pixel Data Value Total Length", Exact(UV), Vm::Exact(1), false),
    E::new(Single(FLOAT_PIXEL_DATA), "FloatPixelData", "Float Pixel Data", Exact(OF), Vm::Exact(1), false),
    E::new(Single(DOUBLE_FLOAT_PIXEL_DATA), "DoubleFloatPixelData", "Double Float Pixel Data", Exact(OD), Vm::Exact(1), false),
    E::new(Single(PIXEL_DATA), "PixelData", "Pixel Data", Px, Vm::Exact(1), false),
    E::new(Single(COEFFICIENTS_SDVN), "CoefficientsSDVN", "Coefficients SDVN", Exact(OW), Vm::Exact(128), true),
    E::new(Single(COEFFICIENTS_SDHN), "CoefficientsSDHN", "Coefficients SDHN", Exact(OW), Vm::Exact(128), true),
    E::new(Single(COEFFICIENTS_SDDN), "CoefficientsSDDN", "Coefficients SDDN", Exact(OW), Vm::Exact(128), true),
    E::new(Single(DIGITAL_SIGNATURES_SEQUENCE), "DigitalSignaturesSequence", "Digital Signatures Sequence", Exact(SQ), Vm::Exact(1), false),
    E::new(Single(DATA_SET_TRAILING_PADDING), "DataSetTrailingPadding", "Data Set Trailing Padding", Exact(OB), Vm::Exact(1), false),
];
