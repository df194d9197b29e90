/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Manufacturer-range clusters used by test harnesses.

clusters! {
    UnitTesting = 0xFFF1FC05 {
        attributes {
            0x0000 => Boolean,
            0x0001 => Bitmap8,
            0x0002 => Bitmap16,
            0x0003 => Bitmap32,
            0x0004 => Bitmap64,
            0x0005 => Int8u,
            0x0006 => Int16u,
            0x0007 => Int24u,
            0x0008 => Int32u,
            0x0009 => Int40u,
            0x000A => Int48u,
            0x000B => Int56u,
            0x000C => Int64u,
            0x000D => Int8s,
            0x000E => Int16s,
            0x000F => Int24s,
            0x0010 => Int32s,
            0x0011 => Int40s,
            0x0012 => Int48s,
            0x0013 => Int56s,
            0x0014 => Int64s,
            0x0015 => Enum8,
            0x0016 => Enum16,
            0x0017 => FloatSingle,
            0x0018 => FloatDouble,
            0x0019 => OctetString,
            0x001A => ListInt8u,
            0x001B => ListOctetString,
            0x001C => ListStructOctetString,
            0x001D => LongOctetString,
            0x001E => CharString,
            0x001F => LongCharString,
            0x0020 => EpochUs,
            0x0021 => EpochS,
            0x0022 => VendorId,
            0x0023 => ListNullablesAndOptionalsStruct,
            0x0024 => EnumAttr,
            0x0025 => StructAttr,
            0x0026 => RangeRestrictedInt8u,
            0x0027 => RangeRestrictedInt8s,
            0x0028 => RangeRestrictedInt16u,
            0x0029 => RangeRestrictedInt16s,
            0x002A => ListLongOctetString,
            0x002B => ListFabricScoped,
            0x0030 => TimedWriteBoolean,
            0x0031 => GeneralErrorBoolean,
            0x0032 => ClusterErrorBoolean,
            0x00FF => Unsupported,
            0x4000 => NullableBoolean,
            0x4001 => NullableBitmap8,
            0x4002 => NullableBitmap16,
            0x4003 => NullableBitmap32,
            0x4004 => NullableBitmap64,
            0x4005 => NullableInt8u,
            0x4006 => NullableInt16u,
            0x4007 => NullableInt24u,
            0x4008 => NullableInt32u,
            0x4009 => NullableInt40u,
            0x400A => NullableInt48u,
            0x400B => NullableInt56u,
            0x400C => NullableInt64u,
            0x400D => NullableInt8s,
            0x400E => NullableInt16s,
            0x400F => NullableInt24s,
            0x4010 => NullableInt32s,
            0x4011 => NullableInt40s,
            0x4012 => NullableInt48s,
            0x4013 => NullableInt56s,
            0x4014 => NullableInt64s,
            0x4015 => NullableEnum8,
            0x4016 => NullableEnum16,
            0x4017 => NullableFloatSingle,
            0x4018 => NullableFloatDouble,
            0x4019 => NullableOctetString,
            0x401E => NullableCharString,
            0x4024 => NullableEnumAttr,
            0x4025 => NullableStruct,
            0x4026 => NullableRangeRestrictedInt8u,
            0x4027 => NullableRangeRestrictedInt8s,
            0x4028 => NullableRangeRestrictedInt16u,
            0x4029 => NullableRangeRestrictedInt16s,
            0x402A => WriteOnlyInt8u,
        }
        events {
            0x01 => TestEvent,
            0x02 => TestFabricScopedEvent,
        }
        commands {
            0x00 => Test,
            0x01 => TestNotHandled,
            0x02 => TestSpecific,
            0x03 => TestUnknownCommand,
            0x04 => TestAddArguments,
            0x05 => TestSimpleArgumentRequest,
            0x06 => TestStructArrayArgumentRequest,
            0x07 => TestStructArgumentRequest,
            0x08 => TestNestedStructArgumentRequest,
            0x09 => TestListStructArgumentRequest,
            0x0A => TestListInt8UArgumentRequest,
            0x0B => TestNestedStructListArgumentRequest,
            0x0C => TestListNestedStructListArgumentRequest,
            0x0D => TestListInt8UReverseRequest,
            0x0E => TestEnumsRequest,
            0x0F => TestNullableOptionalRequest,
            0x10 => TestComplexNullableOptionalRequest,
            0x11 => SimpleStructEchoRequest,
            0x12 => TimedInvokeRequest,
            0x13 => TestSimpleOptionalArgumentRequest,
            0x14 => TestEmitTestEventRequest,
            0x15 => TestEmitTestFabricScopedEventRequest,
        }
    }

    FaultInjection = 0xFFF1FC06 {
        attributes {}
        events {}
        commands {
            0x00 => FailAtFault,
            0x01 => FailRandomlyAtFault,
        }
    }
}
